//! In-memory record store.
//!
//! Implements every record-store port over plain collections. Used by the
//! HTTP integration tests and for running the server without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::bp::BpEstimate;
use crate::domain::chat::ChatMessage;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::meals::MealPlan;
use crate::domain::profile::UserProfile;
use crate::domain::tips::{DailyTip, TipQuery};
use crate::ports::{
    BpEstimateRepository, ChatMessageRepository, MealPlanRepository, ProfileReader, TipReader,
};

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    profiles: RwLock<HashMap<UserId, UserProfile>>,
    tips: RwLock<Vec<DailyTip>>,
    meal_plans: RwLock<Vec<MealPlan>>,
    chat_messages: RwLock<Vec<ChatMessage>>,
    bp_estimates: RwLock<Vec<BpEstimate>>,
    fail_writes: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose inserts all fail with a database error.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub async fn put_profile(&self, profile: UserProfile) {
        self.profiles.write().await.insert(profile.id, profile);
    }

    pub async fn put_tip(&self, tip: DailyTip) {
        self.tips.write().await.push(tip);
    }

    pub async fn bp_estimates(&self) -> Vec<BpEstimate> {
        self.bp_estimates.read().await.clone()
    }

    pub async fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat_messages.read().await.clone()
    }

    fn check_writable(&self, table: &str) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::database(format!("{} is read-only", table)));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileReader for InMemoryRecordStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }
}

#[async_trait]
impl TipReader for InMemoryRecordStore {
    async fn list_visible(&self, query: TipQuery) -> Result<Vec<DailyTip>, DomainError> {
        let mut tips: Vec<DailyTip> = self
            .tips
            .read()
            .await
            .iter()
            .filter(|tip| query.matches(tip))
            .cloned()
            .collect();
        tips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tips)
    }
}

#[async_trait]
impl MealPlanRepository for InMemoryRecordStore {
    async fn create(&self, plan: &MealPlan) -> Result<(), DomainError> {
        self.check_writable("meal_plans")?;
        self.meal_plans.write().await.push(plan.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<MealPlan>, DomainError> {
        let mut plans: Vec<MealPlan> = self
            .meal_plans
            .read()
            .await
            .iter()
            .filter(|plan| &plan.user_id == user_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }
}

#[async_trait]
impl ChatMessageRepository for InMemoryRecordStore {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError> {
        self.check_writable("chat_messages")?;
        self.chat_messages.write().await.push(message.clone());
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let mut messages: Vec<ChatMessage> = self
            .chat_messages
            .read()
            .await
            .iter()
            .filter(|m| &m.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps append order for equal timestamps.
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let skip = messages.len().saturating_sub(limit as usize);
        Ok(messages.split_off(skip))
    }
}

#[async_trait]
impl BpEstimateRepository for InMemoryRecordStore {
    async fn insert(&self, estimate: &BpEstimate) -> Result<(), DomainError> {
        self.check_writable("bp_estimates")?;
        self.bp_estimates.write().await.push(estimate.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::MessageType;
    use crate::domain::foundation::{ErrorCode, TipId, Timestamp};
    use crate::domain::membership::SubscriptionTier;
    use crate::domain::tips::{TipAudience, TipCategory};
    use chrono::Duration;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from_uuid(Uuid::new_v4())
    }

    fn at(offset_secs: i64) -> Timestamp {
        Timestamp::from_datetime(chrono::Utc::now() + Duration::seconds(offset_secs))
    }

    fn tip(title: &str, audience: TipAudience, created_at: Timestamp) -> DailyTip {
        DailyTip {
            id: TipId::new(),
            title: title.into(),
            content: "...".into(),
            category: TipCategory::General,
            target_audience: audience,
            is_active: true,
            created_at,
        }
    }

    #[tokio::test]
    async fn missing_profile_reads_as_none() {
        let store = InMemoryRecordStore::new();
        assert!(store.find_by_user(&user()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tips_are_filtered_by_audience_newest_first() {
        let store = InMemoryRecordStore::new();
        store.put_tip(tip("old", TipAudience::All, at(-60))).await;
        store.put_tip(tip("new", TipAudience::All, at(0))).await;
        store
            .put_tip(tip("pro", TipAudience::Tier(SubscriptionTier::Tier1), at(-30)))
            .await;

        let query = TipQuery {
            tier: SubscriptionTier::Free,
            category: None,
        };
        let titles: Vec<String> = store
            .list_visible(query)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn tips_with_unknown_audience_are_never_listed() {
        let store = InMemoryRecordStore::new();
        store.put_tip(tip("stray", TipAudience::from_raw("gold"), at(0))).await;
        store.put_tip(tip("everyone", TipAudience::All, at(-10))).await;

        for tier in SubscriptionTier::ALL {
            let titles: Vec<String> = store
                .list_visible(TipQuery { tier, category: None })
                .await
                .unwrap()
                .into_iter()
                .map(|t| t.title)
                .collect();
            assert_eq!(titles, vec!["everyone"], "{tier}");
        }
    }

    #[tokio::test]
    async fn chat_history_keeps_latest_in_send_order() {
        let store = InMemoryRecordStore::new();
        let id = user();
        for (i, text) in ["one", "two", "three"].iter().enumerate() {
            let msg = ChatMessage::new(id, *text, "ok", MessageType::Text, at(i as i64));
            store.append(&msg).await.unwrap();
        }

        let recent = ChatMessageRepository::list_by_user(&store, &id, 2).await.unwrap();
        let texts: Vec<&str> = recent.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }

    #[tokio::test]
    async fn failing_store_rejects_inserts() {
        let store = InMemoryRecordStore::failing_writes();
        let msg = ChatMessage::new(user(), "hi", "ok", MessageType::Text, Timestamp::now());
        let err = store.append(&msg).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
