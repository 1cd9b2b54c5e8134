//! API error type shared by every HTTP handler.
//!
//! Maps application and domain errors to a status code and the JSON body
//! `{ "code", "message", "details", "redirect" }`.

use std::collections::HashMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::{ChatError, EstimateBpError, ListTipsError, MealPlanError, StoreError};
use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};
use crate::domain::session::{UpgradeRequired, LOGIN_PATH, UPGRADE_PATH};
use crate::domain::store::CartError;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
    pub redirect: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: String,
    message: &'a str,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    details: &'a HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<&'static str>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            details: HashMap::new(),
            redirect: None,
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self {
            redirect: Some(LOGIN_PATH),
            ..Self::new(StatusCode::UNAUTHORIZED, ErrorCode::Unauthenticated, message)
        }
    }

    pub fn upgrade_required(message: impl Into<String>) -> Self {
        Self {
            redirect: Some(UPGRADE_PATH),
            ..Self::new(StatusCode::FORBIDDEN, ErrorCode::UpgradeRequired, message)
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code.to_string(),
            message: &self.message,
            details: &self.details,
            redirect: self.redirect,
        };
        (self.status, Json(body)).into_response()
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::ProfileNotFound | ErrorCode::ItemNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::UpgradeRequired => StatusCode::FORBIDDEN,
        ErrorCode::DiscountCapReached | ErrorCode::CurrencyMismatch => StatusCode::CONFLICT,
        ErrorCode::AiProviderError | ErrorCode::SpeechError => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = status_for(err.code);
        if status.is_server_error() {
            tracing::error!(code = %err.code, "Request failed: {}", err.message);
        }
        Self {
            details: err.details,
            ..Self::new(status, err.code, err.message)
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<UpgradeRequired> for ApiError {
    fn from(err: UpgradeRequired) -> Self {
        Self::upgrade_required(err.notice)
            .with_detail("feature", err.feature.label())
            .with_detail("required_tier", err.required_tier.as_str())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::ServiceUnavailable(msg) => {
                tracing::error!("Auth service unavailable: {}", msg);
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::InternalError,
                    "Authentication service unavailable",
                )
            }
            AuthError::TokenExpired => Self::unauthenticated("Token expired"),
            AuthError::InvalidToken => Self::unauthenticated("Invalid token"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ItemNotFound(id) => {
                Self::new(StatusCode::NOT_FOUND, ErrorCode::ItemNotFound, format!("No store item with id '{}'", id))
                    .with_detail("item_id", id)
            }
            StoreError::Cart(cart @ CartError::DiscountCapReached { max }) => {
                Self::new(StatusCode::CONFLICT, ErrorCode::DiscountCapReached, cart.to_string())
                    .with_detail("max_items", max.to_string())
            }
            StoreError::Cart(cart @ CartError::CurrencyMismatch { expected, found }) => {
                Self::new(StatusCode::CONFLICT, ErrorCode::CurrencyMismatch, cart.to_string())
                    .with_detail("cart_currency", expected.code())
                    .with_detail("item_currency", found.code())
            }
        }
    }
}

impl From<EstimateBpError> for ApiError {
    fn from(err: EstimateBpError) -> Self {
        match err {
            EstimateBpError::UpgradeRequired(e) => e.into(),
            EstimateBpError::Validation(e) => e.into(),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::UpgradeRequired(e) => e.into(),
            ChatError::Validation(e) => e.into(),
            ChatError::Repository(e) => e.into(),
        }
    }
}

impl From<MealPlanError> for ApiError {
    fn from(err: MealPlanError) -> Self {
        match err {
            MealPlanError::UpgradeRequired(e) => e.into(),
            MealPlanError::Repository(e) => e.into(),
        }
    }
}

impl From<ListTipsError> for ApiError {
    fn from(err: ListTipsError) -> Self {
        match err {
            ListTipsError::UpgradeRequired(e) => e.into(),
            ListTipsError::Repository(e) => e.into(),
        }
    }
}
