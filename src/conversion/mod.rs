//! Request and response conversion
//!
//! This module translates between the analyze API and each provider's wire
//! format, and recovers the JSON object from provider text.

pub mod request_converter;
pub mod response_converter;
