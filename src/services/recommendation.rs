//! Favorite-driven category affinity.
//!
//! The keep list is the only signal available for guest-visible
//! recommendations: categories that appear often among a viewer's favorites
//! push related listings up.

use crate::models::FavoriteItem;

/// Categories ordered by descending frequency across the viewer's favorites.
/// Items without a category are skipped; ties keep first-seen order.
pub fn analyze_favorite_categories(favorites: &[FavoriteItem]) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();

    for item in favorites {
        if let Some(category) = &item.category {
            match counts.iter_mut().find(|(c, _)| c == category) {
                Some((_, n)) => *n += 1,
                None => counts.push((category.clone(), 1)),
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts.into_iter().map(|(category, _)| category).collect()
}

/// Score a candidate listing's category against the analyzed ranking:
/// 0 when unrelated, otherwise higher for more frequent categories.
pub fn recommendation_score(category: &str, ranked_categories: &[String]) -> u32 {
    match ranked_categories.iter().position(|c| c == category) {
        Some(index) => (ranked_categories.len() - index) as u32,
        None => 0,
    }
}
