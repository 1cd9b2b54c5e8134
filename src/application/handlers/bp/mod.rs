//! Blood-pressure estimator handlers.

mod estimate_bp;

pub use estimate_bp::{EstimateBpError, EstimateBpHandler, EstimateBpResult};
