//! Tutoring domain logic
//!
//! Prompt construction for every AI-backed endpoint and decoding of the
//! vocabulary lists the model is asked to emit.

pub mod prompts;
pub mod vocabulary;
