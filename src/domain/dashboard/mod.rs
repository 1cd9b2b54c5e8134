//! Dashboard domain module.

mod overview;

pub use overview::{quick_actions, DashboardOverview, QuickAction};
