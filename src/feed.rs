//! Atom feed (RFC 4287 Section 4.1.1)
//!
//! The document root. Construction and metadata mutation are
//! single-threaded (`&mut self`), but [`Feed::add_entry`] takes `&self`
//! and is internally serialized: per-source workers routinely build
//! entries concurrently and append them into one shared feed, and no
//! entry may be lost or duplicated in the process. Append order across
//! concurrent workers is unspecified; callers sort afterwards if it
//! matters downstream.

use std::sync::{Mutex, PoisonError};

use tracing::trace;

use crate::construct::{Category, Link, Person, Rel, Text, TextType, Timestamp};
use crate::entry::Entry;
use crate::error::{AtomError, Result};

/// An Atom feed document
///
/// # Examples
///
/// ```
/// use atom_rs::{Feed, Person, Rel};
/// use chrono::DateTime;
///
/// let updated = DateTime::parse_from_rfc3339("2022-07-04T12:34:00Z").unwrap();
/// let mut feed = Feed::new("example.com", "My Website", updated).unwrap();
/// feed.add_author(Person::new("John Doe"));
/// feed.add_link("https://example.com/feed.xml", Rel::SelfLink);
/// assert!(feed.validate().is_ok());
/// ```
#[derive(Debug)]
pub struct Feed {
    id: String,
    title: Text,
    updated: Timestamp,
    pub(crate) authors: Vec<Person>,
    pub(crate) categories: Vec<Category>,
    pub(crate) contributors: Vec<Person>,
    pub(crate) links: Vec<Link>,
    pub(crate) icon: Option<String>,
    pub(crate) logo: Option<String>,
    pub(crate) rights: Option<Text>,
    pub(crate) subtitle: Option<Text>,
    entries: Mutex<Vec<Entry>>,
}

impl Feed {
    /// Create a feed with the three required fields
    ///
    /// Fails with [`AtomError::MissingField`] when `id` or `title` is empty
    /// or `updated` resolves to `None`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        updated: impl Into<Option<Timestamp>>,
    ) -> Result<Self> {
        let id = id.into();
        let title = title.into();
        if id.is_empty() {
            return Err(AtomError::MissingField { field: "id" });
        }
        if title.is_empty() {
            return Err(AtomError::MissingField { field: "title" });
        }
        let updated = updated
            .into()
            .ok_or(AtomError::MissingField { field: "updated" })?;

        Ok(Self {
            id,
            title: Text::plain(title),
            updated,
            authors: Vec::new(),
            categories: Vec::new(),
            contributors: Vec::new(),
            links: Vec::new(),
            icon: None,
            logo: None,
            rights: None,
            subtitle: None,
            entries: Mutex::new(Vec::new()),
        })
    }

    /// The feed's atom:id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The feed's atom:title
    pub fn title(&self) -> &Text {
        &self.title
    }

    /// The feed's atom:updated instant
    pub fn updated(&self) -> Timestamp {
        self.updated
    }

    /// Authors in insertion order
    pub fn authors(&self) -> &[Person] {
        &self.authors
    }

    /// Links in insertion order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Append an author; duplicates are not coalesced
    pub fn add_author(&mut self, author: Person) {
        self.authors.push(author);
    }

    /// Append a contributor; duplicates are not coalesced
    pub fn add_contributor(&mut self, contributor: Person) {
        self.contributors.push(contributor);
    }

    /// Append a category; the term is checked by `validate()`, not here
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Append a link with the given target and relation
    ///
    /// A second rel="self" link is accepted here; only `validate()`
    /// rejects it.
    pub fn add_link(&mut self, href: impl Into<String>, rel: Rel) {
        self.links.push(Link::new(href, rel));
    }

    /// Append a fully-specified link
    pub fn add_link_full(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Replace the feed's subtitle
    pub fn set_subtitle(&mut self, text: impl Into<String>, text_type: TextType) {
        self.subtitle = Some(Text::with_type(text, text_type));
    }

    /// Replace the feed's rights statement
    pub fn set_rights(&mut self, text: impl Into<String>, text_type: TextType) {
        self.rights = Some(Text::with_type(text, text_type));
    }

    /// Set the logo URI; empty input leaves the element absent
    pub fn set_logo(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        self.logo = if uri.is_empty() { None } else { Some(uri) };
    }

    /// Set the icon URI; empty input leaves the element absent
    pub fn set_icon(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        self.icon = if uri.is_empty() { None } else { Some(uri) };
    }

    /// Set the update instant; `None` preserves the current value
    pub fn set_updated(&mut self, updated: impl Into<Option<Timestamp>>) {
        if let Some(updated) = updated.into() {
            self.updated = updated;
        }
    }

    /// Replace the title; empty text preserves the current value
    pub fn set_title(&mut self, text: impl Into<String>, text_type: TextType) {
        let text = text.into();
        if !text.is_empty() {
            self.title = Text::with_type(text, text_type);
        }
    }

    /// Append an entry to the feed
    ///
    /// Takes `&self` and serializes internally, so any number of workers
    /// may append into one shared feed. The entry is moved in; the caller
    /// keeps no handle to the stored value.
    pub fn add_entry(&self, entry: Entry) {
        trace!(id = %entry.id(), "appending entry");
        self.entries_lock().push(entry);
    }

    /// Number of entries appended so far
    pub fn entry_count(&self) -> usize {
        self.entries_lock().len()
    }

    /// Snapshot of the entries in append order
    pub fn entries(&self) -> Vec<Entry> {
        self.entries_lock().clone()
    }

    /// Run `f` against the entries without cloning them
    pub(crate) fn with_entries<R>(&self, f: impl FnOnce(&[Entry]) -> R) -> R {
        f(&self.entries_lock())
    }

    // A worker that panicked mid-append leaves the Vec intact (push is the
    // last statement under the lock), so poison is safe to absorb.
    fn entries_lock(&self) -> std::sync::MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clone for Feed {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            updated: self.updated,
            authors: self.authors.clone(),
            categories: self.categories.clone(),
            contributors: self.contributors.clone(),
            links: self.links.clone(),
            icon: self.icon.clone(),
            logo: self.logo.clone(),
            rights: self.rights.clone(),
            subtitle: self.subtitle.clone(),
            entries: Mutex::new(self.entries_lock().clone()),
        }
    }
}
