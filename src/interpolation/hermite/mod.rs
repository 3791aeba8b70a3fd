//! Hermite (Osculating) Interpolation
//!
//! Implements global polynomial interpolation with derivative matching
//! using the generalized Newton
//! [divided-difference method](https://en.wikipedia.org/wiki/Hermite_interpolation).
//!
//! A node abscissa repeated k times in `x` is a confluent run: the
//! interpolant matches the function value and the first k-1 derivatives
//! there. The packed sample layout and the confluent table rule are
//! documented on [`table::DividedDifferences`].


pub mod table;
pub mod term;

mod helpers;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{non_finite_idx, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;

use crate::interpolation::hermite::table::DividedDifferences;
use crate::interpolation::hermite::term::basis_term;


/// Number of data points required to fit a polynomial of `degree`.
///
/// Degree d needs d + 1 points, with a floor of 2 so a line can always
/// be fit.
pub fn required_point_count(degree: usize) -> usize {
    (degree + 1).max(2)
}


/// Hermite interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`HermiteCfg::new`] then optional setters.
///
/// # Defaults
/// - `y_stride` of 1 (scalar samples).
/// - Minimum allowed `x` spacing between *distinct* adjacent nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
}

impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Sets the node abscissae.
    ///
    /// Values must be non-decreasing. A bit-identical repeat marks a
    /// confluent node; adjacent values closer than `x_tol` without
    /// being identical are rejected as near-duplicates, since the
    /// difference quotient over such a gap is numerically meaningless.
    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        for i in 1..v.len() {
            let gap = v[i] - v[i - 1];
            if gap < 0.0 {
                return Err(InterpolationError::NonIncreasingX);
            }
            if gap > 0.0 && gap < self.common.x_min_spacing() {
                return Err(InterpolationError::DuplicateX {
                    x1: v[i - 1],
                    x2: v[i],
                });
            }
        }

        self.common.with_x(v);
        Ok(self)
    }

    /// Sets the packed samples, `y_stride` values per node slot.
    ///
    /// For a confluent run of length k starting at slot j, slots
    /// j..j+k hold the order-0..k-1 derivative groups at that
    /// abscissa. Length agreement with `x` and `y_stride` is checked
    /// at [`interpolate`] time.
    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.common.with_y(v);
        Ok(self)
    }

    /// Sets the number of output components packed per node.
    pub fn set_y_stride(mut self, v: usize) -> Result<Self, InterpolationError> {
        if v == 0 {
            return Err(InterpolationError::InvalidStride { got: v });
        }

        self.common.with_y_stride(v);
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.common.with_x_eval(v);
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }

        self.common.with_x_min_spacing(v);
        Ok(self)
    }
}


/// Performs Hermite interpolation over the data in [`HermiteCfg`].
///
/// # Behavior
/// - Builds the divided-difference table once
///   ([`table::DividedDifferences::build`]) and truncates the Newton
///   series at the table's highest non-zero order.
/// - For each evaluation point `xq` in `cfg.common.x_eval()` and each
///   component `s`, accumulates
///
/// ```text
/// result[s] = Σ_i  coefficient(s, i, 0) * Π_{j < i} (xq - x[j])
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"hermite"`
/// - `n_provided`     : number of node slots
/// - `n_evaluated`    : number of evaluation points
/// - `y_stride`       : components per evaluation point
/// - `evaluated`      : `y_stride` interpolated values per evaluation
///                      point, flattened in evaluation order
///
/// # Errors
/// - [`InterpolationError::UnequalLength`] if `y` does not hold exactly
///   `x.len() * y_stride` samples.
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: HermiteCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x      = cfg.common.x();
    let y      = cfg.common.y();
    let stride = cfg.common.y_stride();
    let evals  = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(
        Algorithm::Hermite,
        n_provided,
        n_evaluated,
        stride,
    );
    report.evaluated.reserve(n_evaluated * stride);

    let table = DividedDifferences::build(x, y, stride);
    let node_order: Vec<usize> = (0..n_provided).collect();

    let x_min = x[0];
    let x_max = x[n_provided - 1];

    for &xq in evals {
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds {
                got: xq,
                x_min,
                x_max
            });
        }

        let base = report.evaluated.len();
        report.evaluated.resize(base + stride, 0.0);

        for i in 0..=table.highest_nonzero_order() {
            let term = basis_term(xq, &node_order, x, 0, i, 0);
            for s in 0..stride {
                report.evaluated[base + s] += table.coefficient(s, i, 0) * term;
            }
        }
    }

    Ok(report)
}
