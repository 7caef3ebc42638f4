//! Gemini API integration
//!
//! `types` mirrors the wire format; `client` performs the call and
//! classifies every failure.

pub mod client;
pub mod types;

pub use client::{AskClient, GeminiClient, DEFAULT_ENDPOINT};
pub use types::{GenerateRequest, GenerateResponse, GenerationConfig};
