//! API data models
//!
//! This module contains data structures for the inbound analyze API and the
//! Claude and OpenAI wire formats.

pub mod analyze;
pub mod claude;
pub mod openai;
