//! Ports - interfaces the application layer depends on.
//!
//! Adapters under `crate::adapters` implement these against Postgres,
//! OpenAI, ElevenLabs and the hosted auth service, plus in-memory and mock
//! variants for tests.
//!
//! # Ports
//!
//! - `SessionValidator` - bearer token to caller identity
//! - `ProfileReader` - member profile and tier
//! - `TipReader`, `MealPlanRepository`, `ChatMessageRepository`,
//!   `BpEstimateRepository` - record store
//! - `CartStore` - per-member session carts
//! - `AIProvider` - chat completion
//! - `SpeechSynthesizer` - text to speech

mod ai_provider;
mod bp_estimate_repository;
mod cart_store;
mod chat_message_repository;
mod meal_plan_repository;
mod profile_reader;
mod session_validator;
mod speech_synthesizer;
mod tip_reader;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use bp_estimate_repository::BpEstimateRepository;
pub use cart_store::CartStore;
pub use chat_message_repository::ChatMessageRepository;
pub use meal_plan_repository::MealPlanRepository;
pub use profile_reader::ProfileReader;
pub use session_validator::SessionValidator;
pub use speech_synthesizer::{
    SpeechAudio, SpeechError, SpeechRequest, SpeechSynthesizer, VoiceSettings,
};
pub use tip_reader::TipReader;
