//! # eco-analyst
//!
//! Report synthesis for EcoLens.
//!
//! A [`Synthesizer`] is built with either a live [`ChatModel`] backend (when a
//! credential is supplied) or an offline backend. Offline synthesis returns a
//! deterministic markdown template; live synthesis sends a fixed system
//! instruction plus the evidence to the model at temperature zero and returns
//! the generated text untouched. A failed live call is reported inline in the
//! returned markdown, followed by the template.

mod chat;
mod error;
mod http;
mod openai;
pub mod prompt;
mod synthesizer;
pub mod template;

pub use chat::{ChatMessage, ChatModel, ChatRequest, Role};
pub use error::AnalystError;
pub use openai::OpenAiChat;
pub use synthesizer::{Backend, Synthesizer};
pub use template::{GENERATION_ERROR_PREFIX, fallback_report, winner};
