pub mod config;
pub mod error;
pub mod supabase_client;

pub use config::{Config, LeaderboardConfig, SupabaseConfig};
pub use error::{LeaderboardError, LeaderboardResult};
pub use supabase_client::SupabaseRestClient;
