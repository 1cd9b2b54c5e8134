//! ListTipsHandler - daily tips for the caller's tier.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::membership::Feature;
use crate::domain::session::{SessionContext, UpgradeRequired};
use crate::domain::tips::{DailyTip, TipCategory, TipQuery};
use crate::ports::TipReader;

pub struct ListTipsHandler {
    reader: Arc<dyn TipReader>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTipsError {
    #[error(transparent)]
    UpgradeRequired(#[from] UpgradeRequired),

    #[error("Repository error: {0}")]
    Repository(DomainError),
}

impl ListTipsHandler {
    pub fn new(reader: Arc<dyn TipReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        session: &SessionContext,
        category: Option<TipCategory>,
    ) -> Result<Vec<DailyTip>, ListTipsError> {
        session.require(Feature::Tips)?;
        let query = TipQuery {
            tier: session.tier(),
            category,
        };
        self.reader
            .list_visible(query)
            .await
            .map_err(ListTipsError::Repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRecordStore;
    use crate::application::handlers::chat::test_support::session;
    use crate::domain::foundation::{TipId, Timestamp};
    use crate::domain::membership::SubscriptionTier;
    use crate::domain::tips::TipAudience;

    fn tip(title: &str, audience: &str, category: TipCategory) -> DailyTip {
        DailyTip {
            id: TipId::new(),
            title: title.into(),
            content: "...".into(),
            category,
            target_audience: TipAudience::from_raw(audience),
            is_active: true,
            created_at: Timestamp::now(),
        }
    }

    async fn store() -> Arc<InMemoryRecordStore> {
        let store = Arc::new(InMemoryRecordStore::new());
        store.put_tip(tip("everyone", "all", TipCategory::Sleep)).await;
        store.put_tip(tip("pro only", "tier1", TipCategory::Nutrition)).await;
        store.put_tip(tip("pro plus only", "tier2", TipCategory::Sleep)).await;
        store
    }

    #[tokio::test]
    async fn audience_matches_tier_exactly() {
        let handler = ListTipsHandler::new(store().await);

        let tips = handler.handle(&session(SubscriptionTier::Tier1), None).await.unwrap();

        let mut titles: Vec<String> = tips.into_iter().map(|t| t.title).collect();
        titles.sort();
        assert_eq!(titles, vec!["everyone", "pro only"]);
    }

    #[tokio::test]
    async fn category_filter_applies() {
        let handler = ListTipsHandler::new(store().await);

        let tips = handler
            .handle(&session(SubscriptionTier::Tier2), Some(TipCategory::Sleep))
            .await
            .unwrap();

        assert_eq!(tips.len(), 2);
        assert!(tips.iter().all(|t| t.category == TipCategory::Sleep));
    }
}
