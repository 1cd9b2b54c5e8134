//! Daily tips domain module.

mod tip;

pub use tip::{DailyTip, TipAudience, TipCategory, TipQuery};
