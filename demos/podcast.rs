//! Build and render a podcast-style feed
//!
//! Mirrors what a scraping collaborator does: create the feed, set
//! metadata, append enclosure-bearing entries, validate, render.
//!
//! Run with: cargo run --example podcast

use atom_rs::{Category, Entry, Feed, Link, Person, Rel, TextType, Timestamp};
use chrono::DateTime;

fn ts(s: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn main() -> atom_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut feed = Feed::new(
        "https://shows.example.com/my-show",
        "My Show",
        ts("2022-07-04T12:34:00Z"),
    )?;
    feed.add_author(Person::new("Show Owner").email("owner@example.com"));
    feed.add_link("https://shows.example.com/my-show/feed.xml", Rel::SelfLink);
    feed.set_subtitle("A show about everything", TextType::Text);
    feed.set_rights("Copyright 2022 Show Owner", TextType::Text);
    feed.set_logo("https://shows.example.com/my-show/cover.png");
    feed.add_category(Category::new("technology"));

    for (n, title) in ["Pilot", "The Second One", "Season Finale"].iter().enumerate() {
        let mut entry = Entry::new(
            format!("https://shows.example.com/my-show/{n}"),
            *title,
            ts("2022-07-04T12:34:00Z"),
        )?;
        entry.add_link_full(
            Link::new(format!("https://cdn.example.com/my-show/{n}.mp3"), Rel::Enclosure)
                .media_type("audio/mpeg")
                .length(24_000_000),
        );
        entry.set_published(ts("2021-01-01T12:34:00-02:00"));
        entry.set_summary(format!("Episode {n}: {title}"), TextType::Text);
        feed.add_entry(entry);
    }

    feed.validate()?;
    println!("{feed}");
    Ok(())
}
