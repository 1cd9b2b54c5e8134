//! AI adapters - implementations of the `AIProvider` port.
//!
//! - `OpenAIProvider` - OpenAI chat completions
//! - `CannedResponseProvider` - fixed wellness replies, no network
//! - `MockAIProvider` - scripted replies and errors for tests

mod canned_provider;
mod mock_provider;
mod openai_provider;

pub use canned_provider::{CannedResponseProvider, CANNED_REPLIES};
pub use mock_provider::MockAIProvider;
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
