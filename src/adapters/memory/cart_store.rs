//! Process-local cart store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::membership::SubscriptionTier;
use crate::domain::store::{AddOutcome, Cart, CartError, StoreItem};
use crate::ports::CartStore;

/// Carts untouched for this long are discarded.
pub const DEFAULT_CART_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct CartEntry {
    cart: Cart,
    touched: Instant,
}

/// Carts keyed by member, lost on restart or after sitting idle.
#[derive(Debug)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<UserId, CartEntry>>,
    idle_ttl: Duration,
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_CART_IDLE_TTL)
    }
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }

    /// Number of carts currently held.
    pub async fn cart_count(&self) -> usize {
        let now = Instant::now();
        self.carts
            .read()
            .await
            .values()
            .filter(|entry| !self.expired(entry, now))
            .count()
    }

    fn expired(&self, entry: &CartEntry, now: Instant) -> bool {
        now.duration_since(entry.touched) >= self.idle_ttl
    }

    /// Drops idle carts, then hands back the caller's live cart.
    fn take_live(&self, carts: &mut HashMap<UserId, CartEntry>, user_id: &UserId, now: Instant) -> Cart {
        carts.retain(|_, entry| !self.expired(entry, now));
        carts.remove(user_id).map(|entry| entry.cart).unwrap_or_default()
    }

    fn put(carts: &mut HashMap<UserId, CartEntry>, user_id: &UserId, cart: &Cart, now: Instant) {
        if !cart.is_empty() {
            carts.insert(
                *user_id,
                CartEntry {
                    cart: cart.clone(),
                    touched: now,
                },
            );
        }
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, user_id: &UserId) -> Cart {
        let now = Instant::now();
        self.carts
            .read()
            .await
            .get(user_id)
            .filter(|entry| !self.expired(entry, now))
            .map(|entry| entry.cart.clone())
            .unwrap_or_default()
    }

    async fn add(
        &self,
        user_id: &UserId,
        item: &'static StoreItem,
        tier: SubscriptionTier,
    ) -> Result<(AddOutcome, Cart), CartError> {
        let now = Instant::now();
        let mut carts = self.carts.write().await;
        let mut cart = self.take_live(&mut carts, user_id, now);
        let result = cart.add(item, tier);
        Self::put(&mut carts, user_id, &cart, now);
        result.map(|outcome| (outcome, cart))
    }

    async fn remove(&self, user_id: &UserId, item_id: &str) -> Cart {
        let now = Instant::now();
        let mut carts = self.carts.write().await;
        let mut cart = self.take_live(&mut carts, user_id, now);
        cart.remove(item_id);
        Self::put(&mut carts, user_id, &cart, now);
        cart
    }

    async fn clear(&self, user_id: &UserId) {
        self.carts.write().await.remove(user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::find_item;
    use std::sync::Arc;
    use uuid::Uuid;

    fn member() -> UserId {
        UserId::from_uuid(Uuid::new_v4())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn carts_are_isolated_per_member() {
        let store = InMemoryCartStore::new();
        let alice = member();
        let bob = member();

        store
            .add(&alice, find_item("oura-ring-gen3").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();

        assert_eq!(store.load(&alice).await.len(), 1);
        assert!(store.load(&bob).await.is_empty());
    }

    #[tokio::test]
    async fn clear_empties_cart() {
        let store = InMemoryCartStore::new();
        let id = member();
        store
            .add(&id, find_item("upright-go-2").unwrap(), SubscriptionTier::Tier2)
            .await
            .unwrap();

        store.clear(&id).await;
        assert!(store.load(&id).await.is_empty());
    }

    #[tokio::test]
    async fn removing_last_item_drops_the_entry() {
        let store = InMemoryCartStore::new();
        let id = member();
        store
            .add(&id, find_item("upright-go-2").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();

        let cart = store.remove(&id, "upright-go-2").await;

        assert!(cart.is_empty());
        assert_eq!(store.cart_count().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_adds_keep_every_item() {
        let store = Arc::new(InMemoryCartStore::new());
        let id = member();
        let ids = [
            "fitbit-charge-5",
            "omron-bp-monitor",
            "oura-ring-gen3",
            "xiaomi-mi-band-7",
            "upright-go-2",
            "withings-smart-scale",
            "hidratespark-pro",
            "kinsa-smart-thermometer",
        ];

        let tasks: Vec<_> = ids
            .iter()
            .map(|&item_id| {
                let store = store.clone();
                tokio::spawn(async move {
                    tokio::task::yield_now().await;
                    store
                        .add(&id, find_item(item_id).unwrap(), SubscriptionTier::Tier1)
                        .await
                        .unwrap()
                        .0
                })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), AddOutcome::Added);
        }

        let cart = store.load(&id).await;
        assert_eq!(cart.len(), ids.len());
        assert!(ids.iter().all(|item_id| cart.contains(item_id)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_adds_respect_the_pro_plus_cap() {
        let store = Arc::new(InMemoryCartStore::new());
        let id = member();
        let ids = [
            "fitbit-charge-5",
            "omron-bp-monitor",
            "oura-ring-gen3",
            "xiaomi-mi-band-7",
            "upright-go-2",
        ];

        let tasks: Vec<_> = ids
            .iter()
            .map(|&item_id| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add(&id, find_item(item_id).unwrap(), SubscriptionTier::Tier2)
                        .await
                })
            })
            .collect();
        let mut added = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                added += 1;
            }
        }

        assert_eq!(added, 3);
        assert_eq!(store.load(&id).await.len(), 3);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Idle expiry
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn idle_cart_is_discarded() {
        let store = InMemoryCartStore::with_idle_ttl(Duration::from_millis(20));
        let id = member();
        store
            .add(&id, find_item("fitbit-charge-5").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert!(store.load(&id).await.is_empty());
        let (outcome, cart) = store
            .add(&id, find_item("fitbit-charge-5").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn writes_evict_other_idle_carts() {
        let store = InMemoryCartStore::with_idle_ttl(Duration::from_millis(20));
        let stale = member();
        store
            .add(&stale, find_item("oura-ring-gen3").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;
        store
            .add(&member(), find_item("upright-go-2").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();

        assert_eq!(store.carts.read().await.len(), 1);
        assert!(store.load(&stale).await.is_empty());
    }

    #[tokio::test]
    async fn default_store_keeps_recent_carts() {
        let store = InMemoryCartStore::new();
        let id = member();
        store
            .add(&id, find_item("hidratespark-pro").unwrap(), SubscriptionTier::Free)
            .await
            .unwrap();

        assert_eq!(store.cart_count().await, 1);
        assert_eq!(store.load(&id).await.len(), 1);
    }
}
