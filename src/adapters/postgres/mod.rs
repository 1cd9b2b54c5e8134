//! PostgreSQL adapters - record store implementations of the repository ports.
//!
//! - `PostgresProfileReader` - member profiles and tiers
//! - `PostgresTipReader` - daily tips by audience
//! - `PostgresMealPlanRepository` - saved meal plans
//! - `PostgresChatMessageRepository` - chat history
//! - `PostgresBpEstimateRepository` - BP estimate history

mod bp_estimate_repository;
mod chat_message_repository;
mod meal_plan_repository;
mod profile_reader;
mod tip_reader;

pub use bp_estimate_repository::PostgresBpEstimateRepository;
pub use chat_message_repository::PostgresChatMessageRepository;
pub use meal_plan_repository::PostgresMealPlanRepository;
pub use profile_reader::PostgresProfileReader;
pub use tip_reader::PostgresTipReader;
