//! Chat-completions transport for matjip course planning.
//!
//! [`ChatClient`] talks to any OpenAI-compatible `/chat/completions`
//! endpoint (Groq by default) and implements
//! [`matjip_engine::CourseGenerator`], so the engine can hand it a prompt
//! without knowing about HTTP, auth or rate limits.

mod client;
mod error;
mod retry;
mod types;

pub use client::ChatClient;
pub use error::LlmError;
