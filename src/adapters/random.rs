use crate::domain::ports::RandomSource;
use crate::utils::error::{Result, TourError};

/// Samples the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn next_f64(&mut self) -> Result<f64> {
        let mut bytes = [0u8; 8];
        getrandom::fill(&mut bytes).map_err(|e| TourError::EntropyError {
            message: e.to_string(),
        })?;
        // 取高 53 位元作為尾數，確保落在 [0, 1)
        let bits = u64::from_le_bytes(bytes) >> 11;
        Ok(bits as f64 / (1u64 << 53) as f64)
    }
}

/// Replays a fixed list of samples, cycling when it reaches the end.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> Result<f64> {
        if self.samples.is_empty() {
            return Err(TourError::EntropyError {
                message: "no samples configured".to_string(),
            });
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        if !(0.0..1.0).contains(&sample) {
            return Err(TourError::EntropyError {
                message: format!("sample {} is outside [0, 1)", sample),
            });
        }
        Ok(sample)
    }
}
