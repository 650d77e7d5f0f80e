use futures::future::join_all;
use tracing::{error, info, warn};

use common::LeaderboardResult;

use crate::backend::LeaderboardBackend;
use crate::models::FetchedProfile;

/// Loads every profile, then counts likes for all of them concurrently.
///
/// A failed profile query fails the whole cycle. A failed like count only
/// marks that profile with `likes: None`; the other counts still complete.
/// Output order follows the profile query.
pub async fn fetch_profiles_with_likes(
    backend: &dyn LeaderboardBackend,
) -> LeaderboardResult<Vec<FetchedProfile>> {
    let profiles = backend.fetch_profiles().await.map_err(|e| {
        error!("Failed to fetch profiles: {}", e);
        e
    })?;
    info!("Fetched {} profiles", profiles.len());

    let counts = join_all(
        profiles
            .iter()
            .map(|profile| backend.count_likes(&profile.id)),
    )
    .await;

    let fetched = profiles
        .into_iter()
        .zip(counts)
        .map(|(profile, count)| {
            let likes = match count {
                Ok(likes) => Some(likes),
                Err(e) => {
                    warn!("Failed to count likes for profile {}: {}", profile.id, e);
                    None
                }
            };
            FetchedProfile { profile, likes }
        })
        .collect();

    Ok(fetched)
}
