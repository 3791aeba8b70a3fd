//! Defines the struct returned by all interpolation algorithms.
//!
//! Defines the [`InterpolationReport`] struct returned by all
//! interpolation algorithms.
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of data and evaluation points,
//! and results of evaluating the interpolant.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"hermite"`)
/// - `n_provided`     : number of input node slots
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `y_stride`       : output components per evaluation point
/// - `evaluated`      : interpolated values, `y_stride` per evaluation point,
///                      flattened in evaluation order
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub y_stride: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(
        algorithm: Algorithm,
        n_provided: usize,
        n_evaluated: usize,
        y_stride: usize,
    ) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            y_stride,
            evaluated: Vec::new(),
        }
    }
}
