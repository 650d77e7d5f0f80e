use std::env;
use anyhow::{Result, Context};
use time::macros::format_description;
use time::UtcOffset;

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub rest_url: String,
    pub key: String,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LeaderboardConfig {
    /// Offset used to cut calendar days into `[start, end]` bounds.
    pub utc_offset: UtcOffset,
    pub viewer_id: Option<String>,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::UTC,
            viewer_id: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase: SupabaseConfig,
    pub leaderboard: LeaderboardConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let supabase_url = env::var("SUPABASE_URL")
            .context("SUPABASE_URL must be set")?;
        let supabase_key = env::var("SUPABASE_ANON_KEY")
            .or_else(|_| env::var("SUPABASE_SERVICE_ROLE_KEY"))
            .context("SUPABASE_ANON_KEY or SUPABASE_SERVICE_ROLE_KEY must be set")?;

        let rest_url = format!("{}/rest/v1", supabase_url.trim_end_matches('/'));

        let utc_offset = match env::var("LEADERBOARD_UTC_OFFSET") {
            Ok(raw) => parse_utc_offset(&raw)?,
            Err(_) => UtcOffset::UTC,
        };

        let leaderboard = LeaderboardConfig {
            utc_offset,
            viewer_id: non_empty_var("LEADERBOARD_VIEWER_ID"),
        };

        Ok(Config {
            supabase: SupabaseConfig {
                rest_url,
                key: supabase_key,
                access_token: non_empty_var("SUPABASE_ACCESS_TOKEN"),
            },
            leaderboard,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses `+09:00`, `-05:30` or `Z`.
pub fn parse_utc_offset(raw: &str) -> Result<UtcOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(
        raw,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .with_context(|| format!("LEADERBOARD_UTC_OFFSET must look like +HH:MM, got '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset() {
        assert_eq!(parse_utc_offset("+09:00").unwrap().whole_hours(), 9);
        assert_eq!(parse_utc_offset("-05:30").unwrap().whole_minutes(), -330);
        assert_eq!(parse_utc_offset("Z").unwrap(), UtcOffset::UTC);
    }

    #[test]
    fn test_parse_utc_offset_rejects_garbage() {
        assert!(parse_utc_offset("nine").is_err());
        assert!(parse_utc_offset("0900").is_err());
    }

    #[test]
    fn test_default_leaderboard_config() {
        let config = LeaderboardConfig::default();
        assert_eq!(config.utc_offset, UtcOffset::UTC);
        assert!(config.viewer_id.is_none());
    }
}
