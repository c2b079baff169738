/// Selects which finite-difference formula to apply.
///
/// Each scheme approximates `g'(x0)` from two function evaluations; they
/// differ in which points are sampled and in their truncation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceScheme {
    /// One-sided difference using `g(x0)` and `g(x0 + dx)`.
    ///
    /// First-order accurate: the truncation error shrinks like `O(dx)`.
    Forward,

    /// One-sided difference using `g(x0 - dx)` and `g(x0)`.
    ///
    /// First-order accurate: the truncation error shrinks like `O(dx)`.
    Backward,

    /// Symmetric difference using `g(x0 - dx)` and `g(x0 + dx)`.
    ///
    /// The sample points straddle `x0` with equal spacing on either side,
    /// so the odd truncation terms cancel and the error shrinks like
    /// `O(dx²)`.
    Central,
}
