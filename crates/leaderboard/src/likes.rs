use crate::models::UserRanking;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    /// The row was already liked in this session; nothing was sent.
    AlreadyLiked,
}

/// Optimistic half of a like: bump the count and mark the row as liked.
pub fn apply_like(rankings: &[UserRanking], profile_id: &str) -> Vec<UserRanking> {
    rankings
        .iter()
        .map(|row| {
            if row.id == profile_id && !row.has_liked {
                UserRanking {
                    likes: row.likes + 1,
                    has_liked: true,
                    ..row.clone()
                }
            } else {
                row.clone()
            }
        })
        .collect()
}

/// Inverse of [`apply_like`], used when the insert fails.
pub fn revert_like(rankings: &[UserRanking], profile_id: &str) -> Vec<UserRanking> {
    rankings
        .iter()
        .map(|row| {
            if row.id == profile_id && row.has_liked {
                UserRanking {
                    likes: row.likes.saturating_sub(1),
                    has_liked: false,
                    ..row.clone()
                }
            } else {
                row.clone()
            }
        })
        .collect()
}
