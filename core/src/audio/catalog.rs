//! Fixed list of candidate sounds with uniform random selection.

use rand::Rng;

use super::error::AudioError;

/// Ordered, non-empty list of sound file names.
///
/// Emptiness is rejected at construction so a bad configuration surfaces
/// at startup rather than on the first trigger.
#[derive(Debug, Clone)]
pub struct SoundCatalog {
    files: Vec<String>,
}

impl SoundCatalog {
    pub fn new(files: Vec<String>) -> Result<Self, AudioError> {
        if files.is_empty() {
            return Err(AudioError::EmptyCatalog);
        }
        Ok(Self { files })
    }

    /// Pick one entry uniformly at random. Selections are independent;
    /// repeats are allowed.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.files[rng.random_range(0..self.files.len())]
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        // Construction guarantees non-empty; kept for API completeness
        self.files.is_empty()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}
