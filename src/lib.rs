//! OSCULATE
//!
//! Hermite (osculating) polynomial interpolation in one dimension.
//!
//! Sample nodes may carry derivative constraints alongside function
//! values, encoded by repeating a node abscissa (a "confluent" run).
//! Coefficients are computed with a generalized Newton
//! divided-difference table and evaluated in Newton form.

pub mod interpolation;
