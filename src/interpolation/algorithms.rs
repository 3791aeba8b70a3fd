//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Hermite`]      osculating Newton divided-difference interpolation
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Hermite,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Hermite => "hermite",
        }
    }
}
