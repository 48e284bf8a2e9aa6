//! Sound file path resolution.
//!
//! User-provided sounds shadow the bundled set: a file name is looked up
//! in the user sounds directory first, then the bundled one. Existence is
//! checked here, before any playback attempt.

use std::path::PathBuf;

use super::error::AudioError;

/// Resolves a sound file name to a concrete on-disk path.
#[derive(Debug, Clone)]
pub struct SoundResolver {
    user_dir: PathBuf,
    bundled_dir: PathBuf,
}

impl SoundResolver {
    pub fn new(user_dir: PathBuf, bundled_dir: PathBuf) -> Self {
        Self {
            user_dir,
            bundled_dir,
        }
    }

    /// Find an existing file for `file`, preferring the user directory.
    pub fn resolve(&self, file: &str) -> Result<PathBuf, AudioError> {
        let user = self.user_dir.join(file);
        if user.exists() {
            return Ok(user);
        }

        let bundled = self.bundled_dir.join(file);
        if bundled.exists() {
            return Ok(bundled);
        }

        Err(AudioError::SoundNotFound {
            file: file.to_string(),
            user,
            bundled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn user_directory_shadows_bundled() {
        let user = tempfile::tempdir().unwrap();
        let bundled = tempfile::tempdir().unwrap();
        fs::write(user.path().join("chime.wav"), b"u").unwrap();
        fs::write(bundled.path().join("chime.wav"), b"b").unwrap();

        let resolver = SoundResolver::new(user.path().to_path_buf(), bundled.path().to_path_buf());

        let path = resolver.resolve("chime.wav").unwrap();
        assert!(path.starts_with(user.path()));
    }

    #[test]
    fn falls_back_to_bundled_directory() {
        let user = tempfile::tempdir().unwrap();
        let bundled = tempfile::tempdir().unwrap();
        fs::write(bundled.path().join("chime.wav"), b"b").unwrap();

        let resolver = SoundResolver::new(user.path().to_path_buf(), bundled.path().to_path_buf());

        let path = resolver.resolve("chime.wav").unwrap();
        assert!(path.starts_with(bundled.path()));
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let user = tempfile::tempdir().unwrap();
        let bundled = tempfile::tempdir().unwrap();

        let resolver = SoundResolver::new(user.path().to_path_buf(), bundled.path().to_path_buf());

        assert!(matches!(
            resolver.resolve("ghost.wav"),
            Err(AudioError::SoundNotFound { .. })
        ));
    }
}
