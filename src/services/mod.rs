//! Service layer: deterministic composition and scoring over data the
//! (external) access layer has already fetched.
//!
//! Modules:
//! - display_order: keyword-slot ranking for listing pages
//! - composer: homepage update feed and hero slider assembly
//! - recommendation: favorite-based category affinity
//! - usage_window: rolling budget for the AI assistant

pub mod composer;
pub mod display_order;
pub mod recommendation;
pub mod usage_window;

pub use composer::{compose_feed, compose_slider, slider_fetch_count};
pub use display_order::{rank, sort_by_display_order, PriorityKeywordTable};
pub use usage_window::{count_in_window, parse_events, UsageEvent, UsageWindow};
