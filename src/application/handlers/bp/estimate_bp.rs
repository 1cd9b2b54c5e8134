//! EstimateBpHandler - runs the BP heuristic and records the result.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::bp::{BpCategory, BpEstimate, BpEstimateRequest, BpReading, DISCLAIMER, RECOMMENDATIONS};
use crate::domain::foundation::ValidationError;
use crate::domain::membership::Feature;
use crate::domain::session::{SessionContext, UpgradeRequired};
use crate::ports::BpEstimateRepository;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateBpError {
    #[error(transparent)]
    UpgradeRequired(#[from] UpgradeRequired),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Reading plus the guidance shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateBpResult {
    #[serde(flatten)]
    pub reading: BpReading,
    pub category: BpCategory,
    pub recommendations: Vec<&'static str>,
    pub disclaimer: &'static str,
    /// False when the estimate could not be saved to history.
    pub saved: bool,
}

pub struct EstimateBpHandler {
    repository: Arc<dyn BpEstimateRepository>,
}

impl EstimateBpHandler {
    pub fn new(repository: Arc<dyn BpEstimateRepository>) -> Self {
        Self { repository }
    }

    /// Estimates for the caller. A failed history write is logged and the
    /// reading is still returned.
    pub async fn handle(
        &self,
        session: &SessionContext,
        request: BpEstimateRequest,
    ) -> Result<EstimateBpResult, EstimateBpError> {
        session.require(Feature::BpEstimator)?;
        request.validate()?;

        let reading = request.estimate();
        let record = BpEstimate::record(session.user_id(), request, reading);
        let saved = match self.repository.insert(&record).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(user_id = %session.user_id(), "Failed to save BP estimate: {}", e);
                false
            }
        };

        Ok(EstimateBpResult {
            reading,
            category: reading.category(),
            recommendations: RECOMMENDATIONS.to_vec(),
            disclaimer: DISCLAIMER,
            saved,
        })
    }
}
