use crate::board::BoardState;
use crate::models::UserRanking;

pub const EMPTY_MESSAGE: &str = "No rankings available for this day.";

pub fn rank_badge(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

fn like_marker(ranking: &UserRanking) -> &'static str {
    if ranking.has_liked {
        "♥"
    } else {
        "♡"
    }
}

/// Plain-text board for the terminal.
pub fn render_board(state: &BoardState) -> String {
    let mut content = String::new();
    content.push_str(&format!("Daily Leaderboard · {}\n", state.selected_date));
    content.push_str("[p] previous day   [n] next day   [l <rank>] like\n\n");

    if state.loading {
        content.push_str("Loading...\n");
        return content;
    }

    if state.rankings.is_empty() {
        content.push_str(EMPTY_MESSAGE);
        content.push('\n');
        return content;
    }

    for (index, ranking) in state.rankings.iter().enumerate() {
        content.push_str(&format!(
            "{:>4}  {:<24} {:>8} pts today  {:>4} workouts  {:>8} total  {} {}\n",
            rank_badge(index + 1),
            ranking.display_name(),
            ranking.daily_score,
            ranking.total_workouts,
            ranking.total_score,
            like_marker(ranking),
            ranking.likes,
        ));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::likes::apply_like;
    use crate::testing::{fetched, log_at, profile};
    use time::macros::{date, datetime};
    use time::UtcOffset;

    fn state_with_rankings() -> BoardState {
        let at = datetime!(2024-03-01 12:00 UTC);
        let input: Vec<_> = (1..=5u32)
            .map(|i| fetched(profile(&format!("user{}", i), &[log_at(f64::from(10 - i), at)]), 0))
            .collect();
        let mut state = BoardState::new(date!(2024 - 03 - 01));
        state.rankings = aggregate(&input, state.selected_date, UtcOffset::UTC);
        state
    }

    #[test]
    fn test_rank_badges() {
        assert_eq!(rank_badge(1), "🥇");
        assert_eq!(rank_badge(3), "🥉");
        assert_eq!(rank_badge(4), "#4");
        assert_eq!(rank_badge(10), "#10");
    }

    #[test]
    fn test_render_board_rows() {
        let mut state = state_with_rankings();
        state.rankings = apply_like(&state.rankings, "user2");

        let rendered = render_board(&state);

        assert!(rendered.starts_with("Daily Leaderboard · 2024-03-01"));
        let rows: Vec<_> = rendered.lines().skip(3).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].contains("🥇") && rows[0].contains("user1"));
        assert!(rows[1].contains("♥ 1"));
        assert!(rows[3].contains("#4") && rows[3].contains("♡ 0"));
    }

    #[test]
    fn test_render_board_empty_and_loading() {
        let mut state = BoardState::new(date!(2024 - 03 - 01));
        assert!(render_board(&state).contains(EMPTY_MESSAGE));

        state.begin_cycle();
        let rendered = render_board(&state);
        assert!(rendered.contains("Loading..."));
        assert!(!rendered.contains(EMPTY_MESSAGE));
    }
}
