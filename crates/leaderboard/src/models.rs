use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A row of the `profiles` table with its nested `workout_logs`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub workout_logs: Vec<WorkoutLog>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkoutLog {
    #[serde(default)]
    pub total: f64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

/// Body of an insert into the `likes` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikeRecord {
    pub liker_id: String,
    pub liked_profile_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl LikeRecord {
    pub fn new(liker_id: &str, liked_profile_id: &str) -> Self {
        Self {
            liker_id: liker_id.to_string(),
            liked_profile_id: liked_profile_id.to_string(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// A profile paired with its like count; `None` when the count request failed.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedProfile {
    pub profile: Profile,
    pub likes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRanking {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub total_workouts: usize,
    pub total_score: f64,
    pub daily_score: f64,
    pub likes: u64,
    /// Set locally after the viewer likes this row; never loaded from the backend.
    pub has_liked: bool,
}

impl UserRanking {
    /// Username if present, otherwise "first last".
    pub fn display_name(&self) -> String {
        if let Some(username) = self.username.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return username.to_string();
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            "Anonymous".to_string()
        } else {
            full
        }
    }
}
