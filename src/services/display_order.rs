//! Display order for the service list ("all" tab) and the provider directory.
//!
//! Marketing assigns each paid tier a fixed slot; a listing lands in the
//! first slot whose keyword group matches its title or provider name.
//! Unmatched listings fall below every slot, keeping their incoming order.

use crate::models::Rankable;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

/// Ordered keyword groups. An earlier group means higher display priority;
/// each group holds the alias strings that identify one slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PriorityKeywordTable {
    groups: Vec<Vec<String>>,
}

impl PriorityKeywordTable {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }
}

/// Built-in slot table, premium tiers first. Hand-maintained by the
/// business side; override via `DISPLAY_ORDER_TABLE` when it changes
/// out of band.
pub static DEFAULT_DISPLAY_ORDER: Lazy<PriorityKeywordTable> = Lazy::new(|| {
    let groups: &[&[&str]] = &[
        &["ワンリード", "CROP"],
        &["システムASSIST", "青山英語学院"],
        &["KAWASEMI", "Lite", "英俊社"],
        &["V-Growth"],
        &["TERRACE", "テラス", "SRJ"],
        &["aim@", "エイムアット", "メイツ"],
        &["Dr.okke", "okke"],
        &["塾シル", "ユナイトプロジェクト"],
        &["受験コンパス", "Liew", "リュウ", "Lacicu"],
        &["Kidsプログラミング", "Kidsプログラミングラボ"],
        &["CodeCampKIDS", "コードキャンプ"],
        &["スリーピース"],
    ];
    PriorityKeywordTable::new(
        groups
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect(),
    )
});

/// Rank of an item: index of the first keyword group with an alias occurring
/// as a substring of `title` + `" "` + `name` (the secondary name and the
/// joining space are skipped when absent). Unmatched items get `table.len()`.
///
/// Matching is case-sensitive with no whitespace normalization; aliases are
/// exact brand strings and must stay that way.
pub fn rank<T: Rankable>(item: &T, table: &PriorityKeywordTable) -> usize {
    let haystack = match item.display_name() {
        Some(name) => format!("{} {}", item.display_title(), name),
        None => item.display_title().to_string(),
    };

    for (i, group) in table.groups.iter().enumerate() {
        if group.iter().any(|alias| haystack.contains(alias.as_str())) {
            return i;
        }
    }

    table.groups.len()
}

/// Stable ascending sort by [`rank`]. Equal-rank items keep their relative
/// order from the input; an unstable sort here would shuffle every listing
/// outside the slot table on each request.
pub fn sort_by_display_order<T: Rankable + Clone>(
    items: &[T],
    table: &PriorityKeywordTable,
) -> Vec<T> {
    let mut ranked: Vec<(usize, T)> = items
        .iter()
        .map(|item| (rank(item, table), item.clone()))
        .collect();

    // Vec::sort_by_key is stable
    ranked.sort_by_key(|(r, _)| *r);

    debug!("Display order applied to {} listings", ranked.len());

    ranked.into_iter().map(|(_, item)| item).collect()
}
