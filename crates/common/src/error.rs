use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("You must be signed in to like a ranking")]
    NotAuthenticated,

    #[error("Profile {0} is not on the current leaderboard")]
    NotRanked(String),
}

pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
