//! HTTP API layer

pub mod endpoints;
