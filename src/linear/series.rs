/// Uniformly spaced samples of a scalar trajectory.
///
/// Times and values are two equal-length sequences indexed in lock-step:
/// index 0 holds the initial condition, and later indices are appended in
/// strictly increasing time order with constant spacing.
/// The only way to build a `TimeSeries` is through
/// [`simulate`](super::simulate), which maintains those invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, time: f64, value: f64) {
        self.times.push(time);
        self.values.push(value);
    }

    /// The number of samples, including the initial condition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The sample times, starting at zero.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The sampled values, in lock-step with [`times`](Self::times).
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The final `(time, value)` sample, or `None` if the series is empty.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.times.last()?, *self.values.last()?))
    }

    /// Iterates over `(time, value)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}
