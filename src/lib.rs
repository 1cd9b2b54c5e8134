//! Health Hub - consumer health backend.
//!
//! Members sign in through a hosted auth service and get features by
//! subscription tier: daily tips, meal plans, a lifestyle blood-pressure
//! estimator, an accessory store with Pro+ pricing, and an AI health chat
//! with optional spoken replies.
//!
//! Layout follows ports and adapters: `domain` holds pure rules, `ports`
//! the interfaces, `application` the per-operation handlers, and `adapters`
//! the Postgres, OpenAI, ElevenLabs, auth and HTTP implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
