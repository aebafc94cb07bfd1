//! Defines the `RandomSource` trait for the per-round price noise.
//!
//! The simulator never calls a random number generator directly. It pulls
//! samples from a `RandomSource`, which lets the binary use real entropy while
//! tests replay fixed sequences.

/// A trait for components that produce uniform samples.
///
/// # Examples
///
/// ```
/// use simulator::traits::random_source::RandomSource;
///
/// struct Midpoint;
///
/// impl RandomSource for Midpoint {
///     fn next_unit(&mut self) -> f64 {
///         // Always the centre of the range: a zero price change.
///         0.5
///     }
/// }
///
/// assert_eq!(Midpoint.next_unit(), 0.5);
/// ```
pub trait RandomSource {
    /// Returns the next sample, uniformly distributed in `[0, 1)`.
    ///
    /// Each call must be independent of the previous ones. The simulator draws
    /// one sample per asset per round.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
