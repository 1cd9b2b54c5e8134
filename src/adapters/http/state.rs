//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::{
    AddToCartHandler, ChatHandlerConfig, ClearCartHandler, CreateMealPlanHandler,
    EstimateBpHandler, ListChatMessagesHandler, ListMealPlansHandler, ListTipsHandler,
    RemoveFromCartHandler, SendChatMessageHandler, SynthesizeSpeechHandler, ViewCartHandler,
};
use crate::ports::{
    AIProvider, BpEstimateRepository, CartStore, ChatMessageRepository, MealPlanRepository,
    ProfileReader, SessionValidator, SpeechSynthesizer, TipReader,
};

/// Every dependency the routers need, Arc-wrapped and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub session_validator: Arc<dyn SessionValidator>,
    pub profiles: Arc<dyn ProfileReader>,
    pub tips: Arc<dyn TipReader>,
    pub meal_plans: Arc<dyn MealPlanRepository>,
    pub chat_messages: Arc<dyn ChatMessageRepository>,
    pub bp_estimates: Arc<dyn BpEstimateRepository>,
    pub carts: Arc<dyn CartStore>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub chat_config: ChatHandlerConfig,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn list_tips_handler(&self) -> ListTipsHandler {
        ListTipsHandler::new(self.tips.clone())
    }

    pub fn list_meal_plans_handler(&self) -> ListMealPlansHandler {
        ListMealPlansHandler::new(self.meal_plans.clone())
    }

    pub fn create_meal_plan_handler(&self) -> CreateMealPlanHandler {
        CreateMealPlanHandler::new(self.meal_plans.clone())
    }

    pub fn estimate_bp_handler(&self) -> EstimateBpHandler {
        EstimateBpHandler::new(self.bp_estimates.clone())
    }

    pub fn send_chat_message_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::with_config(
            self.ai_provider.clone(),
            self.chat_messages.clone(),
            self.chat_config.clone(),
        )
    }

    pub fn list_chat_messages_handler(&self) -> ListChatMessagesHandler {
        ListChatMessagesHandler::new(self.chat_messages.clone())
    }

    pub fn synthesize_speech_handler(&self) -> SynthesizeSpeechHandler {
        SynthesizeSpeechHandler::new(self.speech.clone())
    }

    pub fn add_to_cart_handler(&self) -> AddToCartHandler {
        AddToCartHandler::new(self.carts.clone())
    }

    pub fn remove_from_cart_handler(&self) -> RemoveFromCartHandler {
        RemoveFromCartHandler::new(self.carts.clone())
    }

    pub fn view_cart_handler(&self) -> ViewCartHandler {
        ViewCartHandler::new(self.carts.clone())
    }

    pub fn clear_cart_handler(&self) -> ClearCartHandler {
        ClearCartHandler::new(self.carts.clone())
    }
}
