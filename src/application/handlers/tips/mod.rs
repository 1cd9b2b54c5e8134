//! Daily tip handlers.

mod list_tips;

pub use list_tips::{ListTipsError, ListTipsHandler};
