//! HTTP adapter - the REST API.
//!
//! One module per feature area, each exposing a `*_routes()` function over
//! the shared [`AppState`]. Cross-cutting pieces live alongside:
//!
//! - `middleware` - auth, session loading, tier guard
//! - `error` - `ApiError` and its JSON body
//! - `router` - assembly under `/api` plus serving layers

pub mod account;
pub mod bp;
pub mod chat;
pub mod content;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;
pub mod store;

pub use error::ApiError;
pub use router::{api_router, app};
pub use state::AppState;
