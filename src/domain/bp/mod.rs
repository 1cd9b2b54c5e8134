//! Blood-pressure estimator domain module.

mod estimate;
mod inputs;
mod record;

pub use estimate::{estimate_bp, BpCategory, BpReading, DISCLAIMER, RECOMMENDATIONS};
pub use inputs::{ActivityLevel, BpEstimateRequest, Mood, WorkType, AGE_RANGE, STRESS_RANGE};
pub use record::BpEstimate;
