//! BpEstimateRepository port. Estimates are insert-only.

use async_trait::async_trait;

use crate::domain::bp::BpEstimate;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait BpEstimateRepository: Send + Sync {
    async fn insert(&self, estimate: &BpEstimate) -> Result<(), DomainError>;
}
