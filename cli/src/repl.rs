//! Blocking line input for the REPL loop.

use std::io::Write;

pub fn readline() -> Result<String, String> {
    write!(std::io::stdout(), "lbchime> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}
