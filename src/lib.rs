//! Deterministic composition core for the marketplace homepage.
//!
//! The surrounding application fetches announcements, curated entries and
//! listings from the database; everything here is a pure, re-entrant merge
//! or ranking over those in-memory lists:
//! - keyword-slot display order for the service list and provider directory
//! - homepage update feed and hero slider assembly
//! - favorite-based category affinity
//! - rolling usage budget for the AI assistant

pub mod categories;
pub mod config;
pub mod models;
pub mod services;

pub use config::{Config, ConfigError};
pub use models::{
    Announcement, ContentStatus, CuratedContent, CuratedEntry, FavoriteItem, FeedItem,
    ListingSummary, Rankable,
};
pub use services::{
    compose_feed, compose_slider, rank, sort_by_display_order, PriorityKeywordTable, UsageWindow,
};
