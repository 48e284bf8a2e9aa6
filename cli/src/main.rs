//! Interactive harness that stands in for the game client.
//!
//! Drives the monitoring engine by hand: `lb` toggles the monitor the way
//! the in-game `/lb` command would, while the remaining commands mutate
//! simulated game state and emit frame/duty signals into the event bus.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;

use lbchime_cli::{CliContext, commands, logging, readline};
use lbchime_core::HostSignal;

#[tokio::main]
async fn main() -> Result<(), String> {
    let _guard = logging::init();

    let mut ctx = CliContext::new().map_err(|e| e.to_string())?;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "lbchime host simulator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Toggle monitoring (the in-game /lb command; trailing text is ignored)
    Lb {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Advance the simulated frame loop
    Tick {
        #[arg(default_value_t = 1)]
        count: u32,
    },
    /// Set the limit gauge's stored units
    Gauge {
        units: u16,
        #[arg(short, long, default_value_t = 1)]
        bars: u8,
    },
    /// Make the gauge controller unavailable
    GaugeOff,
    /// Set the local player's current action
    Cast {
        action_id: u32,
        /// Report the action without an active cast
        #[arg(long)]
        idle: bool,
    },
    /// Remove the cast subject (no local player)
    CastOff,
    /// Set the simulated party size
    Party { size: usize },
    /// Fire a duty lifecycle event
    Duty {
        phase: DutyPhase,
        #[arg(default_value_t = 1)]
        id: u16,
    },
    /// Show the loaded configuration
    Config,
    Exit,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DutyPhase {
    Start,
    Complete,
    Wipe,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "lbchime".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Lb { args }) => {
            if !args.is_empty() {
                tracing::debug!(?args, "ignoring trailing command text");
            }
            commands::toggle(ctx);
        }
        Some(Commands::Tick { count }) => commands::tick(ctx, count),
        Some(Commands::Gauge { units, bars }) => commands::set_gauge(ctx, units, bars),
        Some(Commands::GaugeOff) => commands::clear_gauge(ctx),
        Some(Commands::Cast { action_id, idle }) => commands::set_cast(ctx, action_id, idle),
        Some(Commands::CastOff) => commands::clear_cast(ctx),
        Some(Commands::Party { size }) => commands::set_party(ctx, size),
        Some(Commands::Duty { phase, id }) => {
            let signal = match phase {
                DutyPhase::Start => HostSignal::DutyStarted { duty_id: id },
                DutyPhase::Complete => HostSignal::DutyCompleted { duty_id: id },
                DutyPhase::Wipe => HostSignal::DutyWiped { duty_id: id },
            };
            commands::duty(ctx, signal);
        }
        Some(Commands::Config) => commands::show_config(ctx),
        Some(Commands::Exit) => {
            commands::exit(ctx);
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
