//! Homepage feed assembly.
//!
//! Two compositions share this module:
//! - the update feed: operator announcements ahead of admin-curated entries
//! - the hero slider: latest articles and popular services, alternated
//!
//! Both are per-request, stateless merges over lists the data layer has
//! already fetched and ordered.

use crate::models::{Announcement, CuratedEntry, FeedItem};
use tracing::debug;

/// Compose the homepage update feed.
///
/// Announcements come first (most recent first, as supplied), then curated
/// entries (ascending admin position, as supplied); the result is truncated
/// to `limit`. Neither input is reordered. Curated entries whose content is
/// neither approved nor published are dropped without notice.
pub fn compose_feed(
    announcements: &[Announcement],
    curated: &[CuratedEntry],
    limit: usize,
) -> Vec<FeedItem> {
    if limit == 0 {
        return Vec::new();
    }

    let mut feed: Vec<FeedItem> = announcements.iter().map(FeedItem::from).collect();
    feed.extend(curated.iter().filter(|e| e.is_visible()).map(FeedItem::from));
    feed.truncate(limit);

    debug!(
        "Composed home feed: {} items (limit {}, {} announcements, {} curated)",
        feed.len(),
        limit,
        announcements.len(),
        curated.len()
    );

    feed
}

/// Merge the hero slider: article, service, article, ... carrying on with
/// whichever list is longer, then truncate to `limit`.
pub fn compose_slider(articles: &[FeedItem], services: &[FeedItem], limit: usize) -> Vec<FeedItem> {
    let mut merged = Vec::with_capacity(articles.len() + services.len());
    let max_len = articles.len().max(services.len());

    for i in 0..max_len {
        if let Some(article) = articles.get(i) {
            merged.push(article.clone());
        }
        if let Some(service) = services.get(i) {
            merged.push(service.clone());
        }
    }

    merged.truncate(limit);
    merged
}

/// How many items to fetch per slider source: half the slot count, rounded
/// up, so an odd limit still fills every slot.
pub fn slider_fetch_count(limit: usize) -> usize {
    limit.div_ceil(2)
}
