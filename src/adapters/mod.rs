//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - hosted auth token validation
//! - `postgres` - record store tables
//! - `memory` - in-process record store and session carts
//! - `ai` - chat completion providers
//! - `speech` - text to speech
//! - `http` - the REST API

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod speech;
