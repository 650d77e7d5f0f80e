use std::sync::Arc;

use time::{Date, UtcOffset};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use common::{LeaderboardError, LeaderboardResult};

use crate::aggregator::aggregate;
use crate::backend::LeaderboardBackend;
use crate::fetcher::fetch_profiles_with_likes;
use crate::likes::{apply_like, revert_like, LikeOutcome};
use crate::models::{LikeRecord, UserRanking};
use crate::navigator;
use crate::session::Session;

/// What the view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub selected_date: Date,
    pub rankings: Vec<UserRanking>,
    pub loading: bool,
    cycle: u64,
}

impl BoardState {
    pub fn new(selected_date: Date) -> Self {
        Self {
            selected_date,
            rankings: Vec::new(),
            loading: false,
            cycle: 0,
        }
    }

    /// Starts a fetch cycle and returns its ticket. Any earlier ticket is now stale.
    pub fn begin_cycle(&mut self) -> u64 {
        self.cycle += 1;
        self.loading = true;
        self.cycle
    }

    /// Replaces the rankings if `ticket` is still the latest cycle.
    pub fn finish_cycle(&mut self, ticket: u64, rankings: Vec<UserRanking>) -> bool {
        if ticket != self.cycle {
            return false;
        }
        self.rankings = rankings;
        self.loading = false;
        true
    }

    pub fn ranking(&self, profile_id: &str) -> Option<&UserRanking> {
        self.rankings.iter().find(|r| r.id == profile_id)
    }
}

pub struct Leaderboard {
    backend: Arc<dyn LeaderboardBackend>,
    session: Session,
    offset: UtcOffset,
    state: RwLock<BoardState>,
}

impl Leaderboard {
    pub fn new(
        backend: Arc<dyn LeaderboardBackend>,
        session: Session,
        offset: UtcOffset,
        selected_date: Date,
    ) -> Self {
        Self {
            backend,
            session,
            offset,
            state: RwLock::new(BoardState::new(selected_date)),
        }
    }

    pub async fn state(&self) -> BoardState {
        self.state.read().await.clone()
    }

    /// Runs one fetch cycle for the selected date.
    ///
    /// When another cycle starts before this one resolves, this one's result
    /// is dropped. A failed profile query clears the rankings.
    pub async fn refresh(&self) -> LeaderboardResult<()> {
        let (ticket, date) = {
            let mut state = self.state.write().await;
            (state.begin_cycle(), state.selected_date)
        };
        info!("Loading leaderboard for {} (cycle {})", date, ticket);

        let result = fetch_profiles_with_likes(self.backend.as_ref()).await;
        let rankings = match &result {
            Ok(fetched) => aggregate(fetched, date, self.offset),
            Err(_) => Vec::new(),
        };
        let count = rankings.len();

        let applied = self.state.write().await.finish_cycle(ticket, rankings);
        if !applied {
            debug!("Discarded stale leaderboard cycle {} for {}", ticket, date);
        } else if result.is_ok() {
            info!("Showing {} rankings for {}", count, date);
        }

        result.map(|_| ())
    }

    pub async fn select_date(&self, date: Date) -> LeaderboardResult<()> {
        self.state.write().await.selected_date = date;
        self.refresh().await
    }

    pub async fn previous_day(&self) -> LeaderboardResult<()> {
        let current = self.state.read().await.selected_date;
        match navigator::previous_day(current) {
            Some(date) => self.select_date(date).await,
            None => {
                warn!("Cannot move before {}", current);
                Ok(())
            }
        }
    }

    pub async fn next_day(&self) -> LeaderboardResult<()> {
        let current = self.state.read().await.selected_date;
        match navigator::next_day(current) {
            Some(date) => self.select_date(date).await,
            None => {
                warn!("Cannot move past {}", current);
                Ok(())
            }
        }
    }

    /// Likes a ranked profile on behalf of the session's viewer.
    ///
    /// The row is updated before the insert is sent and restored if the insert fails.
    pub async fn like(&self, profile_id: &str) -> LeaderboardResult<LikeOutcome> {
        let viewer = self.session.viewer().ok_or_else(|| {
            warn!("Like attempted without a signed-in viewer");
            LeaderboardError::NotAuthenticated
        })?;

        {
            let mut state = self.state.write().await;
            let row = state
                .ranking(profile_id)
                .ok_or_else(|| LeaderboardError::NotRanked(profile_id.to_string()))?;
            if row.has_liked {
                return Ok(LikeOutcome::AlreadyLiked);
            }
            state.rankings = apply_like(&state.rankings, profile_id);
        }

        let record = LikeRecord::new(&viewer.id, profile_id);
        if let Err(e) = self.backend.insert_like(&record).await {
            error!("Failed to like profile {}: {}", profile_id, e);
            let mut state = self.state.write().await;
            state.rankings = revert_like(&state.rankings, profile_id);
            return Err(e);
        }

        info!("{} liked profile {}", viewer.id, profile_id);
        Ok(LikeOutcome::Liked)
    }
}
