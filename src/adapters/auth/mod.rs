//! Auth adapters - implementations of the `SessionValidator` port.

mod mock;
mod supabase;

pub use mock::MockSessionValidator;
pub use supabase::{SupabaseAuthConfig, SupabaseSessionValidator, DEFAULT_AUDIENCE};
