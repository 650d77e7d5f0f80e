pub mod aggregator;
pub mod backend;
pub mod board;
pub mod fetcher;
pub mod likes;
pub mod models;
pub mod navigator;
pub mod session;
pub mod view;

#[cfg(test)]
mod testing;

use std::sync::Arc;

pub use backend::LeaderboardBackend;
pub use board::{BoardState, Leaderboard};
pub use likes::LikeOutcome;
pub use models::UserRanking;
pub use session::Session;

use common::{Config, SupabaseRestClient};

pub fn connect(config: &Config) -> Arc<dyn LeaderboardBackend> {
    Arc::new(SupabaseRestClient::new(
        &config.supabase.rest_url,
        &config.supabase.key,
        config.supabase.access_token.as_deref(),
    ))
}
