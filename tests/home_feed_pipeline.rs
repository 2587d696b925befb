//! Integration: homepage composition end to end.
//!
//! Coverage:
//! - update feed assembly from announcements + curated entries with the
//!   visibility filter applied
//! - hero slider interleaving with the configured limit
//! - listing pages sorted by a display-order table loaded from a file

use chrono::{Duration, Utc};
use std::io::Write;
use uuid::Uuid;

use home_feed::config::load_display_order_table;
use home_feed::{
    compose_feed, compose_slider, sort_by_display_order, Announcement, Config, ContentStatus,
    CuratedContent, CuratedEntry, FeedItem, ListingSummary,
};

fn announcement(title: &str, hours_ago: i64) -> Announcement {
    Announcement {
        id: Uuid::new_v4(),
        title: title.to_string(),
        thumbnail_url: format!("https://cdn.example.com/{title}.png"),
        url: format!("/site-updates/{title}"),
        category: Some("事務局からのお知らせ".to_string()),
        published_at: Utc::now() - Duration::hours(hours_ago),
    }
}

fn curated(title: &str, position: i32, status: ContentStatus, published: bool) -> CuratedEntry {
    CuratedEntry {
        position,
        content: CuratedContent {
            id: Uuid::new_v4(),
            title: title.to_string(),
            thumbnail_url: String::new(),
            url: format!("/articles/{title}"),
            category: Some("教育".to_string()),
            status,
            is_published: published,
        },
    }
}

fn listing(title: &str, provider: Option<&str>) -> ListingSummary {
    ListingSummary {
        id: Uuid::new_v4(),
        title: title.to_string(),
        provider_display_name: provider.map(|p| p.to_string()),
        category: None,
    }
}

#[test]
fn update_feed_is_a_bounded_prefix_with_hidden_entries_removed() {
    let announcements = vec![announcement("latest", 1), announcement("older", 30)];
    let curated_entries = vec![
        curated("first-slot", 1, ContentStatus::Approved, false),
        curated("hidden", 2, ContentStatus::Pending, false),
        curated("second-slot", 3, ContentStatus::Pending, true),
        curated("third-slot", 4, ContentStatus::Approved, true),
    ];

    let config = Config::default();
    let feed = compose_feed(&announcements, &curated_entries, config.feed.slider_limit);

    let titles: Vec<&str> = feed.iter().map(|i| i.title()).collect();
    assert_eq!(
        titles,
        vec!["latest", "older", "first-slot", "second-slot", "third-slot"]
    );

    // Record ids survive composition untouched
    assert_eq!(feed[0].id(), announcements[0].id);
    assert_eq!(feed[2].id(), curated_entries[0].content.id);

    // Announcements keep their recency order and serialize as tagged items
    let json = serde_json::to_value(&feed[0]).unwrap();
    assert_eq!(json["type"], "announcement");
    let json = serde_json::to_value(&feed[2]).unwrap();
    assert_eq!(json["type"], "curated");
}

#[test]
fn update_feed_truncates_at_the_configured_limit() {
    let announcements: Vec<Announcement> = (0..6)
        .map(|i| announcement(&format!("a{i}"), i))
        .collect();
    let curated_entries: Vec<CuratedEntry> = (0..6)
        .map(|i| curated(&format!("c{i}"), i as i32, ContentStatus::Approved, true))
        .collect();

    let feed = compose_feed(&announcements, &curated_entries, 8);
    assert_eq!(feed.len(), 8);
    assert_eq!(feed[0].title(), "a0");
    assert_eq!(feed[7].title(), "c1");
}

#[test]
fn hero_slider_alternates_and_respects_limit() {
    let articles: Vec<FeedItem> = [announcement("p1", 1), announcement("p2", 2), announcement("p3", 3)]
        .iter()
        .map(FeedItem::from)
        .collect();
    let services: Vec<FeedItem> = [
        curated("s1", 1, ContentStatus::Approved, true),
        curated("s2", 2, ContentStatus::Approved, true),
    ]
    .iter()
    .map(FeedItem::from)
    .collect();

    let merged = compose_slider(&articles, &services, 4);
    let titles: Vec<&str> = merged.iter().map(|i| i.title()).collect();
    assert_eq!(titles, vec!["p1", "s1", "p2", "s2"]);
}

#[test]
fn listings_follow_a_table_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[["Acme"], ["Globex", "GBX"], ["Initech"]]"#).unwrap();
    let table = load_display_order_table(file.path().to_str().unwrap()).unwrap();

    let listings = vec![
        listing("Unranked Tutor", None),
        listing("GBX Classroom", None),
        listing("Initech LMS", None),
        listing("Whiteboard Pro", Some("Acme Holdings")),
        listing("Another Tutor", None),
    ];

    let sorted = sort_by_display_order(&listings, &table);
    let titles: Vec<&str> = sorted.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Whiteboard Pro",
            "GBX Classroom",
            "Initech LMS",
            "Unranked Tutor",
            "Another Tutor",
        ]
    );
}
