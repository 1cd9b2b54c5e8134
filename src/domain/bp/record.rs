//! Stored estimate record.

use serde::Serialize;

use super::{BpEstimateRequest, BpReading};
use crate::domain::foundation::{BpEstimateId, Timestamp, UserId};

/// An estimate saved to the caller's history. Insert-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BpEstimate {
    pub id: BpEstimateId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub request: BpEstimateRequest,
    #[serde(flatten)]
    pub reading: BpReading,
    pub created_at: Timestamp,
}

impl BpEstimate {
    pub fn record(user_id: UserId, request: BpEstimateRequest, reading: BpReading) -> Self {
        Self {
            id: BpEstimateId::new(),
            user_id,
            request,
            reading,
            created_at: Timestamp::now(),
        }
    }
}
