//! In-memory backend and fixtures shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::{Notify, RwLock};

use common::{LeaderboardError, LeaderboardResult};

use crate::backend::LeaderboardBackend;
use crate::models::{FetchedProfile, LikeRecord, Profile, WorkoutLog};

pub fn log_at(total: f64, completed_at: OffsetDateTime) -> WorkoutLog {
    WorkoutLog {
        total,
        completed_at: Some(completed_at),
    }
}

pub fn profile(id: &str, logs: &[WorkoutLog]) -> Profile {
    Profile {
        id: id.to_string(),
        first_name: Some(format!("First {}", id)),
        last_name: Some(format!("Last {}", id)),
        username: Some(id.to_string()),
        workout_logs: logs.to_vec(),
    }
}

pub fn fetched(profile: Profile, likes: u64) -> FetchedProfile {
    FetchedProfile {
        profile,
        likes: Some(likes),
    }
}

#[derive(Default)]
struct FakeState {
    profiles: Vec<Profile>,
    likes: HashMap<String, u64>,
    failing_counts: HashSet<String>,
    fail_profiles: bool,
    fail_insert: bool,
    profile_calls: usize,
    count_calls: usize,
    inserted: Vec<LikeRecord>,
    gate: Option<Arc<Notify>>,
}

pub struct FakeBackend {
    state: RwLock<FakeState>,
}

impl FakeBackend {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            state: RwLock::new(FakeState {
                profiles,
                ..FakeState::default()
            }),
        }
    }

    pub async fn set_likes(&self, profile_id: &str, likes: u64) {
        self.state.write().await.likes.insert(profile_id.to_string(), likes);
    }

    pub async fn fail_count_for(&self, profile_id: &str) {
        self.state
            .write()
            .await
            .failing_counts
            .insert(profile_id.to_string());
    }

    pub async fn fail_profiles(&self, fail: bool) {
        self.state.write().await.fail_profiles = fail;
    }

    pub async fn fail_insert(&self, fail: bool) {
        self.state.write().await.fail_insert = fail;
    }

    /// The next profile query blocks until the returned gate is notified.
    pub async fn hold_next_profile_fetch(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.state.write().await.gate = Some(gate.clone());
        gate
    }

    pub async fn profile_calls(&self) -> usize {
        self.state.read().await.profile_calls
    }

    pub async fn count_calls(&self) -> usize {
        self.state.read().await.count_calls
    }

    pub async fn inserted(&self) -> Vec<LikeRecord> {
        self.state.read().await.inserted.clone()
    }
}

#[async_trait]
impl LeaderboardBackend for FakeBackend {
    async fn fetch_profiles(&self) -> LeaderboardResult<Vec<Profile>> {
        let (gate, result) = {
            let mut state = self.state.write().await;
            state.profile_calls += 1;
            let result = if state.fail_profiles {
                Err(LeaderboardError::Api("profiles unavailable".to_string()))
            } else {
                Ok(state.profiles.clone())
            };
            (state.gate.take(), result)
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        result
    }

    async fn count_likes(&self, profile_id: &str) -> LeaderboardResult<u64> {
        let mut state = self.state.write().await;
        state.count_calls += 1;
        if state.failing_counts.contains(profile_id) {
            return Err(LeaderboardError::Api(format!("count failed for {}", profile_id)));
        }
        Ok(state.likes.get(profile_id).copied().unwrap_or(0))
    }

    async fn insert_like(&self, like: &LikeRecord) -> LeaderboardResult<()> {
        let mut state = self.state.write().await;
        if state.fail_insert {
            return Err(LeaderboardError::Api("insert rejected".to_string()));
        }
        state.inserted.push(like.clone());
        *state.likes.entry(like.liked_profile_id.clone()).or_insert(0) += 1;
        Ok(())
    }
}
