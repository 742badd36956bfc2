use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed floats over `[low, high)`.
///
/// A degenerate range (`high <= low`) yields `low`, so zero-width bounds and a zero rotation
/// range sample a fixed value instead of failing. Non-finite ends are treated the same way.
pub trait UniformSource {
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

impl<R: Rng> UniformSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if !(high > low) || !low.is_finite() || !high.is_finite() {
            return low;
        }
        // Widened to f64 so a span near f32::MAX cannot overflow.
        let low_wide = f64::from(low);
        let span = f64::from(high) - low_wide;
        let unit: f64 = self.random();
        let value = (low_wide + span * unit) as f32;
        // Narrowing back to f32 can round up onto `high`.
        if value < high {
            value
        } else {
            low
        }
    }
}

/// Random stream owned by one scene and shared by the wanderers it drives.
#[derive(Debug, Clone)]
pub struct WanderRng {
    inner: ChaCha8Rng,
}

impl WanderRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl UniformSource for WanderRng {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.inner.uniform(low, high)
    }
}
