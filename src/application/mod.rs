//! Application layer - commands, queries and their handlers.
//!
//! Handlers receive the per-request `SessionContext` explicitly and depend
//! only on ports.

pub mod handlers;

pub use handlers::bp::{EstimateBpError, EstimateBpHandler, EstimateBpResult};
pub use handlers::chat::{
    ChatError, ChatHandlerConfig, ListChatMessagesHandler, SendChatMessageCommand,
    SendChatMessageHandler, SendChatMessageResult, SynthesizeSpeechHandler,
};
pub use handlers::meals::{CreateMealPlanHandler, ListMealPlansHandler, MealPlanError};
pub use handlers::store::{
    browse_catalog, AddToCartHandler, AddToCartResult, CartView, CatalogEntry, ClearCartHandler,
    RemoveFromCartHandler, StoreError, ViewCartHandler,
};
pub use handlers::tips::{ListTipsError, ListTipsHandler};
