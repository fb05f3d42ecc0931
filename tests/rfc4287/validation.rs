//! RFC 4287 Validation Tests
//!
//! Reference: https://datatracker.ietf.org/doc/html/rfc4287
//!
//! Feed- and entry-level invariants: first violation wins, validation is
//! pure, and the serializer stays available for invalid documents.

use atom_rs::{AtomError, Category, Entry, Feed, Person, Rel, Timestamp};
use chrono::DateTime;

fn ts(s: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn valid_feed() -> Feed {
    let mut feed = Feed::new("example.com", "My Website", ts("2022-07-04T12:34:00Z")).unwrap();
    feed.add_author(Person::new("John Doe"));
    feed.add_link("https://example.com/feed.xml", Rel::SelfLink);
    feed
}

#[test]
fn test_missing_author_then_self_link_progression() {
    let mut feed = Feed::new("example.com", "My Website", ts("2022-07-04T12:34:00Z")).unwrap();
    assert_eq!(feed.validate(), Err(AtomError::MissingAuthor));

    feed.add_author(Person::new("John Doe"));
    assert_eq!(feed.validate(), Err(AtomError::MissingSelfLink));

    feed.add_link("https://example.com/feed.xml", Rel::SelfLink);
    assert_eq!(feed.validate(), Ok(()));

    feed.add_link("https://mirror.example/feed.xml", Rel::SelfLink);
    assert_eq!(feed.validate(), Err(AtomError::DuplicateSelfLink));
}

#[test]
fn test_author_failure_shadows_link_failure() {
    // Authors are checked before links, so a feed missing both reports
    // the author problem first.
    let mut feed = Feed::new("example.com", "My Website", ts("2022-07-04T12:34:00Z")).unwrap();
    feed.add_link("", Rel::SelfLink);
    assert_eq!(feed.validate(), Err(AtomError::MissingAuthor));
}

#[test]
fn test_invalid_category_reported_before_contributors() {
    let mut feed = valid_feed();
    feed.add_category(Category::new(""));
    feed.add_contributor(Person::new(""));
    assert_eq!(feed.validate(), Err(AtomError::InvalidCategory));
}

#[test]
fn test_invalid_contributor() {
    let mut feed = valid_feed();
    feed.add_contributor(Person::new(""));
    assert_eq!(feed.validate(), Err(AtomError::InvalidPerson));
}

#[test]
fn test_non_self_links_are_unlimited() {
    let mut feed = valid_feed();
    feed.add_link("https://example.com/a", Rel::Alternate);
    feed.add_link("https://example.com/b", Rel::Alternate);
    feed.add_link("https://example.com/c", Rel::Via);
    assert_eq!(feed.validate(), Ok(()));
}

#[test]
fn test_entry_failure_aborts_feed_validation() {
    let feed = valid_feed();
    feed.add_entry(Entry::new("good", "Good", ts("2022-07-04T12:34:00Z")).unwrap());

    let mut bad = Entry::new("bad", "Bad", ts("2022-07-04T12:34:00Z")).unwrap();
    bad.add_author(Person::new(""));
    feed.add_entry(bad);

    assert_eq!(feed.validate(), Err(AtomError::InvalidPerson));
}

#[test]
fn test_entries_need_no_author_or_self_link() {
    let feed = valid_feed();
    feed.add_entry(Entry::new("example.com/1", "Entry 1", ts("2022-07-04T12:34:00Z")).unwrap());
    assert_eq!(feed.validate(), Ok(()));
}

#[test]
fn test_entry_link_href_checked() {
    let mut entry = Entry::new("example.com/1", "Entry 1", ts("2022-07-04T12:34:00Z")).unwrap();
    entry.add_link("", Rel::Alternate);
    assert_eq!(entry.validate(), Err(AtomError::InvalidLink));
}

#[test]
fn test_validation_errors_carry_rfc_citations() {
    let mut feed = Feed::new("example.com", "My Website", ts("2022-07-04T12:34:00Z")).unwrap();
    feed.add_author(Person::new(""));
    let err = feed.validate().unwrap_err();
    assert_eq!(err, AtomError::InvalidPerson);
    assert_eq!(err.rfc_section(), Some("3.2.1"));
    assert!(
        err.reference()
            .unwrap()
            .starts_with("https://datatracker.ietf.org/doc/html/rfc4287#section-")
    );
}

#[test]
fn test_invalid_document_still_renders() {
    let mut feed = Feed::new("example.com", "My Website", ts("2022-07-04T12:34:00Z")).unwrap();
    feed.add_category(Category::new(""));
    assert!(feed.validate().is_err());

    let xml = feed.to_xml();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<id>example.com</id>"));
}
