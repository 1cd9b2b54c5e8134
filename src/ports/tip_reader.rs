//! TipReader port - daily tips visible to a member.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::tips::{DailyTip, TipQuery};

#[async_trait]
pub trait TipReader: Send + Sync {
    /// Active tips for `query.tier` (audience `all` or that tier), newest first.
    async fn list_visible(&self, query: TipQuery) -> Result<Vec<DailyTip>, DomainError>;
}
