//! ProfileReader port - reads member profiles from the record store.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::UserProfile;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// Profile for `user_id`, or `None` when no profile row exists yet.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;
}
