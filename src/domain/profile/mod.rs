//! User profile domain module.

mod profile;

pub use profile::{Role, UserProfile};
