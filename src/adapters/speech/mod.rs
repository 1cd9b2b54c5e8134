//! Speech adapters - implementations of the `SpeechSynthesizer` port.

mod elevenlabs;
mod mock;

pub use elevenlabs::{ElevenLabsConfig, ElevenLabsSynthesizer};
pub use mock::{DisabledSpeechSynthesizer, MockSpeechSynthesizer};
