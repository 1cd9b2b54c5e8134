//! HTTP integration tests.
//!
//! Drive the full `/api` router with in-memory stores and mock adapters.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use health_hub::adapters::ai::{MockAIProvider, CANNED_REPLIES};
use health_hub::adapters::auth::MockSessionValidator;
use health_hub::adapters::http::{api_router, AppState};
use health_hub::adapters::memory::{InMemoryCartStore, InMemoryRecordStore};
use health_hub::adapters::speech::{DisabledSpeechSynthesizer, MockSpeechSynthesizer};
use health_hub::application::ChatHandlerConfig;
use health_hub::domain::chat::FALLBACK_REPLY;
use health_hub::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use health_hub::domain::membership::SubscriptionTier;
use health_hub::domain::profile::UserProfile;
use health_hub::ports::{AIError, AIProvider, SpeechError, SpeechSynthesizer};

// ════════════════════════════════════════════════════════════════════════════════
// Harness
// ════════════════════════════════════════════════════════════════════════════════

const FREE_TOKEN: &str = "free-token";
const PRO_TOKEN: &str = "pro-token";
const PRO_PLUS_TOKEN: &str = "pro-plus-token";

struct TestApp {
    router: Router,
    records: Arc<InMemoryRecordStore>,
}

struct Harness {
    validator: MockSessionValidator,
    records: Arc<InMemoryRecordStore>,
    ai: Arc<dyn AIProvider>,
    speech: Arc<dyn SpeechSynthesizer>,
}

impl Harness {
    async fn new() -> Self {
        let records = Arc::new(InMemoryRecordStore::new());
        let mut validator = MockSessionValidator::new();
        for (token, tier) in [
            (FREE_TOKEN, SubscriptionTier::Free),
            (PRO_TOKEN, SubscriptionTier::Tier1),
            (PRO_PLUS_TOKEN, SubscriptionTier::Tier2),
        ] {
            let id = UserId::from_uuid(Uuid::new_v4());
            let email = format!("{}@uni.edu", token);
            validator = validator.with_user(token, AuthenticatedUser::new(id, email.clone(), None));
            records
                .put_profile(UserProfile::free(id, email).with_tier(tier))
                .await;
        }

        Self {
            validator,
            records,
            ai: Arc::new(MockAIProvider::new().with_response("Drink more water.")),
            speech: Arc::new(MockSpeechSynthesizer::new()),
        }
    }

    fn with_ai(mut self, ai: impl AIProvider + 'static) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    fn with_speech(mut self, speech: impl SpeechSynthesizer + 'static) -> Self {
        self.speech = Arc::new(speech);
        self
    }

    fn with_validator(mut self, validator: MockSessionValidator) -> Self {
        self.validator = validator;
        self
    }

    fn build(self) -> TestApp {
        let state = AppState {
            session_validator: Arc::new(self.validator),
            profiles: self.records.clone(),
            tips: self.records.clone(),
            meal_plans: self.records.clone(),
            chat_messages: self.records.clone(),
            bp_estimates: self.records.clone(),
            carts: Arc::new(InMemoryCartStore::new()),
            ai_provider: self.ai,
            speech: self.speech,
            chat_config: ChatHandlerConfig::default(),
        };
        TestApp {
            router: api_router(state),
            records: self.records,
        }
    }
}

async fn app() -> TestApp {
    Harness::new().await.build()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &TestApp, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(app: &TestApp, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, request(Method::GET, uri, token, None)).await
}

async fn post(app: &TestApp, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    send(app, request(Method::POST, uri, token, Some(body))).await
}

// ════════════════════════════════════════════════════════════════════════════════
// Public endpoints
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn health_is_public() {
    let app = app().await;
    let (status, body) = get(&app, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn plans_list_three_tiers() {
    let app = app().await;
    let (status, body) = get(&app, "/api/plans", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn guests_browse_store_at_base_price() {
    let app = app().await;
    let (status, body) = get(&app, "/api/store/items?category=wearable", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "oura-ring-gen3");
    assert_eq!(items[0]["discounted"], false);
}

#[tokio::test]
async fn pro_plus_sees_discounted_prices() {
    let app = app().await;
    let (_, body) = get(&app, "/api/store/items", Some(PRO_PLUS_TOKEN)).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|item| item["discounted"] == true));
}

// ════════════════════════════════════════════════════════════════════════════════
// Authentication and tier guard
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn missing_token_on_member_route_is_401_with_login_redirect() {
    let app = app().await;
    let (status, body) = get(&app, "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");
    assert_eq!(body["redirect"], "/login");
}

#[tokio::test]
async fn invalid_token_is_401() {
    let app = app().await;
    let (status, body) = get(&app, "/api/health", Some("forged")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["redirect"], "/login");
}

#[tokio::test]
async fn auth_outage_is_503() {
    let app = Harness::new()
        .await
        .with_validator(MockSessionValidator::new().with_error(AuthError::service_unavailable("timeout")))
        .build();
    let (status, _) = get(&app, "/api/dashboard", Some(PRO_TOKEN)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn free_member_on_chat_group_is_403_with_upgrade_redirect() {
    let app = app().await;
    let (status, body) = get(&app, "/api/chat/messages", Some(FREE_TOKEN)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "UPGRADE_REQUIRED");
    assert_eq!(body["redirect"], "/upgrade");
}

#[tokio::test]
async fn guest_on_chat_group_is_401() {
    let app = app().await;
    let (status, _) = get(&app, "/api/chat/messages", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_user_profile_is_treated_as_free() {
    let stranger = AuthenticatedUser::new(UserId::from_uuid(Uuid::new_v4()), "new@uni.edu", None);
    let app = Harness::new()
        .await
        .with_validator(MockSessionValidator::new().with_user("stranger", stranger))
        .build();

    let (status, body) = get(&app, "/api/dashboard", Some("stranger")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tier"], "free");
    assert!(body["membership_badge"].is_null());
}

#[tokio::test]
async fn dashboard_shows_badge_for_paid_member() {
    let app = app().await;
    let (status, body) = get(&app, "/api/dashboard", Some(PRO_PLUS_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["membership_badge"], "Pro+ Member");
    assert_eq!(body["profile"]["email"], "pro-plus-token@uni.edu");
}

// ════════════════════════════════════════════════════════════════════════════════
// BP estimator
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn bp_estimate_returns_reading_and_saves_history() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/api/bp/estimate",
        Some(PRO_TOKEN),
        json!({
            "age": 30,
            "work_type": "sedentary",
            "activity_level": "moderate",
            "mood": "good",
            "stress_level": 5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["systolic"], 125);
    assert_eq!(body["diastolic"], 83);
    assert_eq!(body["saved"], true);
    assert_eq!(app.records.bp_estimates().await.len(), 1);
}

#[tokio::test]
async fn bp_estimate_rejects_out_of_range_age() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/api/bp/estimate",
        Some(PRO_TOKEN),
        json!({
            "age": 7,
            "work_type": "active",
            "activity_level": "high",
            "mood": "excellent",
            "stress_level": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "age");
}

#[tokio::test]
async fn bp_estimate_rejects_malformed_body() {
    let app = app().await;
    let (status, body) = post(&app, "/api/bp/estimate", Some(PRO_TOKEN), json!({"age": 40})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn bp_estimate_requires_pro() {
    let app = app().await;
    let (status, body) = post(
        &app,
        "/api/bp/estimate",
        Some(FREE_TOKEN),
        json!({
            "age": 30,
            "work_type": "sedentary",
            "activity_level": "moderate",
            "mood": "good",
            "stress_level": 5
        }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["details"]["required_tier"], "tier1");
}

// ════════════════════════════════════════════════════════════════════════════════
// Store cart
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn pro_plus_cart_caps_at_three_items() {
    let app = app().await;
    for id in ["fitbit-charge-5", "omron-bp-monitor", "oura-ring-gen3"] {
        let (status, _) = post(&app, "/api/store/cart/items", Some(PRO_PLUS_TOKEN), json!({"item_id": id})).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post(
        &app,
        "/api/store/cart/items",
        Some(PRO_PLUS_TOKEN),
        json!({"item_id": "upright-go-2"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DISCOUNT_CAP_REACHED");

    let (_, cart) = get(&app, "/api/store/cart", Some(PRO_PLUS_TOKEN)).await;
    assert_eq!(cart["item_count"], 3);
}

#[tokio::test]
async fn removing_an_item_frees_a_slot() {
    let app = app().await;
    for id in ["fitbit-charge-5", "omron-bp-monitor", "oura-ring-gen3"] {
        post(&app, "/api/store/cart/items", Some(PRO_PLUS_TOKEN), json!({"item_id": id})).await;
    }

    let (status, cart) = send(
        &app,
        request(Method::DELETE, "/api/store/cart/items/omron-bp-monitor", Some(PRO_PLUS_TOKEN), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["item_count"], 2);

    let (status, _) = post(
        &app,
        "/api/store/cart/items",
        Some(PRO_PLUS_TOKEN),
        json!({"item_id": "upright-go-2"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_add_keeps_one_line() {
    let app = app().await;
    post(&app, "/api/store/cart/items", Some(PRO_TOKEN), json!({"item_id": "fitbit-charge-5"})).await;
    let (status, body) = post(
        &app,
        "/api/store/cart/items",
        Some(PRO_TOKEN),
        json!({"item_id": "fitbit-charge-5"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "already_in_cart");
    assert_eq!(body["cart"]["item_count"], 1);
}

#[tokio::test]
async fn unknown_item_is_404() {
    let app = app().await;
    let (status, body) = post(&app, "/api/store/cart/items", Some(PRO_TOKEN), json!({"item_id": "apple-watch"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ITEM_NOT_FOUND");
}

#[tokio::test]
async fn clear_cart_empties_it() {
    let app = app().await;
    post(&app, "/api/store/cart/items", Some(FREE_TOKEN), json!({"item_id": "fitbit-charge-5"})).await;
    let (status, cart) = send(&app, request(Method::DELETE, "/api/store/cart", Some(FREE_TOKEN), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["item_count"], 0);
}

// ════════════════════════════════════════════════════════════════════════════════
// Content
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn tips_require_authentication() {
    let app = app().await;
    let (status, _) = get(&app, "/api/tips", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tips_reject_unknown_category() {
    let app = app().await;
    let (status, body) = get(&app, "/api/tips?category=astrology", Some(FREE_TOKEN)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn pro_member_creates_and_lists_meal_plans() {
    let app = app().await;
    let (status, plan) = post(
        &app,
        "/api/meals",
        Some(PRO_TOKEN),
        json!({"goal": "weight_loss", "dietary_preference": "vegan", "budget": "low"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(plan["meals"]["breakfast"].is_string());

    let (status, plans) = get(&app, "/api/meals", Some(PRO_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plans.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn free_member_cannot_create_meal_plan() {
    let app = app().await;
    let (status, body) = post(&app, "/api/meals", Some(FREE_TOKEN), json!({"goal": "energy_boost"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["redirect"], "/upgrade");
}

// ════════════════════════════════════════════════════════════════════════════════
// Chat
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn chat_reply_is_stored_and_listed() {
    let app = app().await;
    let (status, body) = post(&app, "/api/chat/messages", Some(PRO_TOKEN), json!({"message": "How much water?"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"]["response"], "Drink more water.");
    assert_eq!(body["fallback"], false);
    assert_eq!(body["has_audio"], false);

    let (status, history) = get(&app, "/api/chat/messages", Some(PRO_TOKEN)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(history["greeting"].is_string());
    assert_eq!(history["messages"][0]["message"], "How much water?");
}

#[tokio::test]
async fn chat_provider_failure_stores_fallback() {
    let app = Harness::new()
        .await
        .with_ai(MockAIProvider::new().with_error(AIError::AuthenticationFailed))
        .build();

    let (status, body) = post(&app, "/api/chat/messages", Some(PRO_TOKEN), json!({"message": "Hello"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["fallback"], true);
    assert_eq!(body["message"]["response"], FALLBACK_REPLY);

    let stored = app.records.chat_messages().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].response.as_deref(), Some(FALLBACK_REPLY));
}

#[tokio::test]
async fn chat_rejects_blank_message() {
    let app = app().await;
    let (status, body) = post(&app, "/api/chat/messages", Some(PRO_TOKEN), json!({"message": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "message");
}

#[tokio::test]
async fn canned_replies_are_usable_as_fixtures() {
    let app = Harness::new()
        .await
        .with_ai(health_hub::adapters::ai::CannedResponseProvider::new())
        .build();
    let (_, body) = post(&app, "/api/chat/messages", Some(PRO_PLUS_TOKEN), json!({"message": "Tips?"})).await;
    assert_eq!(body["message"]["response"], CANNED_REPLIES[0]);
    assert_eq!(body["has_audio"], true);
}

// ════════════════════════════════════════════════════════════════════════════════
// Speech
// ════════════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn speech_returns_audio_for_pro_plus() {
    let app = app().await;
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/chat/speech",
            Some(PRO_PLUS_TOKEN),
            Some(json!({"text": "Drink more water."})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
}

#[tokio::test]
async fn speech_failure_is_silent_no_content() {
    let app = Harness::new()
        .await
        .with_speech(MockSpeechSynthesizer::failing(SpeechError::Disabled))
        .build();
    let (status, body) = post(&app, "/api/chat/speech", Some(PRO_PLUS_TOKEN), json!({"text": "Hi"})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn disabled_speech_is_no_content() {
    let app = Harness::new().await.with_speech(DisabledSpeechSynthesizer).build();
    let (status, _) = post(&app, "/api/chat/speech", Some(PRO_PLUS_TOKEN), json!({"text": "Hi"})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn speech_requires_pro_plus() {
    let app = app().await;
    let (status, body) = post(&app, "/api/chat/speech", Some(PRO_TOKEN), json!({"text": "Hi"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["details"]["required_tier"], "tier2");
}
