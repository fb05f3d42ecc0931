//! RFC 4287 Builder Tests
//!
//! Reference: https://datatracker.ietf.org/doc/html/rfc4287
//!
//! Tests for the constrained Feed/Entry construction and mutation API.

use atom_rs::{AtomError, Category, Entry, Feed, Link, Person, Rel, TextType, Timestamp};
use chrono::DateTime;

fn ts(s: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn updated() -> Timestamp {
    ts("2022-07-04T12:34:00Z")
}

#[test]
fn test_create_feed_success() {
    let feed = Feed::new("example.com", "My Website", updated()).unwrap();
    assert_eq!(feed.id(), "example.com");
    assert_eq!(feed.title().text, "My Website");
    assert_eq!(feed.updated(), updated());
    assert_eq!(feed.entry_count(), 0);
}

#[test]
fn test_create_feed_missing_field_matrix() {
    assert_eq!(
        Feed::new("", "My Website", updated()).unwrap_err(),
        AtomError::MissingField { field: "id" }
    );
    assert_eq!(
        Feed::new("example.com", "", updated()).unwrap_err(),
        AtomError::MissingField { field: "title" }
    );
    assert_eq!(
        Feed::new("example.com", "My Website", None).unwrap_err(),
        AtomError::MissingField { field: "updated" }
    );
}

#[test]
fn test_create_entry_missing_field_matrix() {
    assert_eq!(
        Entry::new("", "Entry 1", updated()).unwrap_err(),
        AtomError::MissingField { field: "id" }
    );
    assert_eq!(
        Entry::new("example.com/1", "", updated()).unwrap_err(),
        AtomError::MissingField { field: "title" }
    );
    assert_eq!(
        Entry::new("example.com/1", "Entry 1", None).unwrap_err(),
        AtomError::MissingField { field: "updated" }
    );
}

#[test]
fn test_builder_accepts_what_validate_rejects() {
    // Emptiness of category terms and duplicate self links are deferred
    // to validate(); the mutators themselves never fail.
    let mut feed = Feed::new("example.com", "T", updated()).unwrap();
    feed.add_category(Category::new(""));
    feed.add_link("https://example.com/feed.xml", Rel::SelfLink);
    feed.add_link("https://mirror.example/feed.xml", Rel::SelfLink);
    feed.add_author(Person::new(""));

    assert!(feed.validate().is_err());
    assert!(!feed.to_xml().is_empty());
}

#[test]
fn test_set_updated_none_is_a_noop() {
    let mut feed = Feed::new("example.com", "T", updated()).unwrap();
    feed.set_updated(None);
    assert_eq!(feed.updated(), updated());

    let later = ts("2023-02-03T04:05:06Z");
    feed.set_updated(later);
    assert_eq!(feed.updated(), later);
}

#[test]
fn test_set_title_empty_is_a_noop() {
    let mut feed = Feed::new("example.com", "gemlog", updated()).unwrap();
    feed.set_title("", TextType::Text);
    assert_eq!(feed.title().text, "gemlog");

    feed.set_title("My Gemlog", TextType::Text);
    assert_eq!(feed.title().text, "My Gemlog");
}

#[test]
fn test_optional_slots_replace() {
    let mut entry = Entry::new("example.com/1", "Entry 1", updated()).unwrap();
    entry.set_summary("first", TextType::Html);
    entry.set_summary("second", TextType::Html);
    entry.set_content("body one", "text");
    entry.set_content("body two", "html");

    let xml = entry.to_xml();
    assert!(!xml.contains("first"));
    assert!(xml.contains("<summary type=\"html\">second</summary>"));
    assert!(!xml.contains("body one"));
    assert!(xml.contains("<content type=\"html\">body two</content>"));
}

#[test]
fn test_add_entry_stores_by_value() {
    let feed = Feed::new("example.com", "T", updated()).unwrap();
    let mut entry = Entry::new("example.com/1", "Entry 1", updated()).unwrap();
    entry.set_summary("kept", TextType::Text);

    // The stored copy is independent of any clone the caller keeps.
    let retained = entry.clone();
    feed.add_entry(entry);
    let mut retained = retained;
    retained.set_summary("mutated later", TextType::Text);

    let stored = &feed.entries()[0];
    assert!(stored.to_xml().contains("kept"));
    assert!(!stored.to_xml().contains("mutated later"));
}

#[test]
fn test_enclosure_links_for_podcast_entries() {
    let mut entry = Entry::new("episode-1", "Episode 1", updated()).unwrap();
    entry.add_link_full(
        Link::new("https://cdn.example/ep1.mp3", Rel::Enclosure)
            .media_type("audio/mpeg")
            .length(31415926),
    );

    let xml = entry.to_xml();
    assert!(xml.contains(
        "<link href=\"https://cdn.example/ep1.mp3\" rel=\"enclosure\" type=\"audio/mpeg\" length=\"31415926\"/>"
    ));
}

#[test]
fn test_feed_metadata_setters() {
    let mut feed = Feed::new("example.com", "Podcast", updated()).unwrap();
    feed.add_author(Person::new("Owner").email("owner@example.com"));
    feed.add_link("https://example.com/feed.xml", Rel::SelfLink);
    feed.set_subtitle("A show about things", TextType::Text);
    feed.set_rights("All rights reserved", TextType::Text);
    feed.set_logo("https://example.com/logo.png");
    feed.set_icon("https://example.com/icon.png");
    feed.add_category(Category::new("technology"));

    assert!(feed.validate().is_ok());
    let xml = feed.to_xml();
    assert!(xml.contains("<subtitle type=\"text\">A show about things</subtitle>"));
    assert!(xml.contains("<logo>https://example.com/logo.png</logo>"));
    assert!(xml.contains("<icon>https://example.com/icon.png</icon>"));
}
