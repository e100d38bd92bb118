//! Core application modules
//!
//! This module contains configuration, constants, logging, the provider
//! adapters and the analyze dispatcher.

pub mod client;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod provider;
pub mod providers;
