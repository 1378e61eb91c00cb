use std::time::Duration;

pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(1024);

/// Exponential backoff between retries.
///
/// The delay before retry `iteration` (zero based) is
/// `base * 2^(hint * iteration)`, never more than `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub base: Duration,
    pub max: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_DELAY,
            max: DEFAULT_MAX_DELAY,
        }
    }
}

impl Backoff {
    pub fn new(base: Duration, max: Duration) -> Self {
        Self { base, max }
    }

    pub fn delay(&self, hint: u32, iteration: u32) -> Duration {
        let exponent = hint.saturating_mul(iteration);
        let factor = match 1u32.checked_shl(exponent) {
            Some(factor) => factor,
            None => return self.max,
        };
        self.base.saturating_mul(factor).min(self.max)
    }
}
