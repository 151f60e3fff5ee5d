/// Network retry budget applied to each lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failed one. `retries + 1` attempts in total.
    pub retries: u32,
}

impl RetryPolicy {
    pub const DEFAULT_RETRIES: u32 = 3;

    pub fn new(retries: u32) -> Self {
        Self { retries }
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RETRIES)
    }
}
