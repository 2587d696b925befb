use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status assigned to provider content by admin approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Operator-authored site update. Always shown ahead of curated entries,
/// most recent first (ordering is assigned by the data layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Content record referenced by a curated slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedContent {
    pub id: Uuid,
    pub title: String,
    pub thumbnail_url: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: ContentStatus,
    pub is_published: bool,
}

/// Admin-selected content reference with an explicit display position
/// (ascending; ordering is assigned by the admin join table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedEntry {
    pub position: i32,
    pub content: CuratedContent,
}

impl CuratedEntry {
    /// An entry is shown when its content passed admin review or carries the
    /// publish flag. Entries failing both are dropped silently.
    pub fn is_visible(&self) -> bool {
        self.content.status == ContentStatus::Approved || self.content.is_published
    }
}

/// Display-ready homepage feed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedItem {
    Announcement {
        id: Uuid,
        title: String,
        thumbnail_url: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
    Curated {
        id: Uuid,
        title: String,
        thumbnail_url: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
}

impl FeedItem {
    pub fn id(&self) -> Uuid {
        match self {
            FeedItem::Announcement { id, .. } | FeedItem::Curated { id, .. } => *id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            FeedItem::Announcement { title, .. } | FeedItem::Curated { title, .. } => title,
        }
    }
}

impl From<&Announcement> for FeedItem {
    fn from(a: &Announcement) -> Self {
        FeedItem::Announcement {
            id: a.id,
            title: a.title.clone(),
            thumbnail_url: a.thumbnail_url.clone(),
            url: a.url.clone(),
            category: a.category.clone(),
        }
    }
}

impl From<&CuratedEntry> for FeedItem {
    fn from(e: &CuratedEntry) -> Self {
        FeedItem::Curated {
            id: e.content.id,
            title: e.content.title.clone(),
            thumbnail_url: e.content.thumbnail_url.clone(),
            url: e.content.url.clone(),
            category: e.content.category.clone(),
        }
    }
}

/// Fields the display-order classifier matches against.
pub trait Rankable {
    fn display_title(&self) -> &str;

    fn display_name(&self) -> Option<&str> {
        None
    }
}

/// Minimal listing projection used for display-order sorting of the service
/// list and the provider directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Rankable for ListingSummary {
    fn display_title(&self) -> &str {
        &self.title
    }

    fn display_name(&self) -> Option<&str> {
        self.provider_display_name.as_deref()
    }
}

/// Locally stored favorite, as synced from the viewer's keep list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
