use async_trait::async_trait;
use common::{LeaderboardResult, SupabaseRestClient};

use crate::models::{LikeRecord, Profile};

pub const PROFILES_TABLE: &str = "profiles";
pub const LIKES_TABLE: &str = "likes";
pub const PROFILE_COLUMNS: &str = "id,first_name,last_name,username,workout_logs(total,completed_at)";

/// The three calls the leaderboard makes against the database service.
#[async_trait]
pub trait LeaderboardBackend: Send + Sync {
    /// Every profile with its full workout history.
    async fn fetch_profiles(&self) -> LeaderboardResult<Vec<Profile>>;

    async fn count_likes(&self, profile_id: &str) -> LeaderboardResult<u64>;

    async fn insert_like(&self, like: &LikeRecord) -> LeaderboardResult<()>;
}

#[async_trait]
impl LeaderboardBackend for SupabaseRestClient {
    async fn fetch_profiles(&self) -> LeaderboardResult<Vec<Profile>> {
        self.select(PROFILES_TABLE, PROFILE_COLUMNS, &[]).await
    }

    async fn count_likes(&self, profile_id: &str) -> LeaderboardResult<u64> {
        self.count(
            LIKES_TABLE,
            &[("liked_profile_id", format!("eq.{}", profile_id))],
        )
        .await
    }

    async fn insert_like(&self, like: &LikeRecord) -> LeaderboardResult<()> {
        self.insert(LIKES_TABLE, like).await
    }
}
