use time::macros::time;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::models::{FetchedProfile, UserRanking, WorkoutLog};

pub const RANKING_LIMIT: usize = 10;

/// Inclusive `[start, end]` of `date` in the given offset. Built from the
/// calendar date alone so the first and last representable days work too.
pub fn day_bounds(date: Date, offset: UtcOffset) -> (OffsetDateTime, OffsetDateTime) {
    let start = date.midnight().assume_offset(offset);
    let end = date.with_time(time!(23:59:59.999999999)).assume_offset(offset);
    (start, end)
}

fn completed_within(log: &WorkoutLog, start: OffsetDateTime, end: OffsetDateTime) -> bool {
    log.completed_at
        .map(|at| at >= start && at <= end)
        .unwrap_or(false)
}

pub fn rank_profile(fetched: &FetchedProfile, likes: u64, start: OffsetDateTime, end: OffsetDateTime) -> UserRanking {
    let logs = &fetched.profile.workout_logs;
    let total_score = logs.iter().map(|log| log.total).sum();
    let daily_score = logs
        .iter()
        .filter(|log| completed_within(log, start, end))
        .map(|log| log.total)
        .sum();

    UserRanking {
        id: fetched.profile.id.clone(),
        first_name: fetched.profile.first_name.clone(),
        last_name: fetched.profile.last_name.clone(),
        username: fetched.profile.username.clone(),
        total_workouts: logs.len(),
        total_score,
        daily_score,
        likes,
        has_liked: false,
    }
}

/// Builds the top rankings for `date`.
///
/// Profiles whose like count failed are dropped. The sort is stable, so equal
/// daily scores keep the order the profiles were fetched in. A day on which no
/// ranked profile logged a workout yields no rankings at all.
pub fn aggregate(fetched: &[FetchedProfile], date: Date, offset: UtcOffset) -> Vec<UserRanking> {
    let (start, end) = day_bounds(date, offset);

    let active = fetched.iter().filter(|f| f.likes.is_some()).any(|f| {
        f.profile
            .workout_logs
            .iter()
            .any(|log| completed_within(log, start, end))
    });
    if !active {
        return Vec::new();
    }

    let mut rankings: Vec<UserRanking> = fetched
        .iter()
        .filter_map(|f| f.likes.map(|likes| rank_profile(f, likes, start, end)))
        .collect();

    rankings.sort_by(|a, b| b.daily_score.total_cmp(&a.daily_score));
    rankings.truncate(RANKING_LIMIT);
    rankings
}
