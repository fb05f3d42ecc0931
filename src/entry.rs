//! Atom entry (RFC 4287 Section 4.1.2)
//!
//! One syndication item. Entries are created through [`Entry::new`], which
//! enforces the three required fields, and populated through the mutators
//! below. Fields are private; collaborators can only hand the entry plain
//! scalar values, so the required-field checks cannot be bypassed.

use crate::construct::{Category, Content, Link, Person, Rel, Text, TextType, Timestamp};
use crate::error::{AtomError, Result};

/// A single syndication item within a feed
///
/// # Examples
///
/// ```
/// use atom_rs::{Entry, Rel, TextType};
/// use chrono::DateTime;
///
/// let updated = DateTime::parse_from_rfc3339("2022-07-04T12:34:00Z").unwrap();
/// let mut entry = Entry::new("example.com/entry/1", "Entry 1", updated).unwrap();
/// entry.add_link("https://example.com/entry/1", Rel::Alternate);
/// entry.set_summary("A short teaser", TextType::Text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: String,
    title: Text,
    updated: Timestamp,
    pub(crate) authors: Vec<Person>,
    pub(crate) categories: Vec<Category>,
    pub(crate) contributors: Vec<Person>,
    pub(crate) links: Vec<Link>,
    pub(crate) content: Option<Content>,
    pub(crate) published: Option<Timestamp>,
    pub(crate) rights: Option<Text>,
    pub(crate) summary: Option<Text>,
}

impl Entry {
    /// Create an entry with the three required fields
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
            content: None,
            published: None,
            rights: None,
            summary: None,
        })
    }

    /// The entry's atom:id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The entry's atom:title
    pub fn title(&self) -> &Text {
        &self.title
    }

    /// The entry's atom:updated instant
    pub fn updated(&self) -> Timestamp {
        self.updated
    }

    /// The entry's atom:published instant, if set
    pub fn published(&self) -> Option<Timestamp> {
        self.published
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
    pub fn add_link(&mut self, href: impl Into<String>, rel: Rel) {
        self.links.push(Link::new(href, rel));
    }

    /// Append a fully-specified link (e.g. an enclosure with media type
    /// and length)
    pub fn add_link_full(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Replace the entry's inline content
    pub fn set_content(&mut self, text: impl Into<String>, content_type: impl Into<String>) {
        self.content = Some(Content::inline(text, content_type));
    }

    /// Replace the entry's content with an out-of-line reference
    pub fn set_content_src(&mut self, src: impl Into<String>, content_type: impl Into<String>) {
        self.content = Some(Content::out_of_line(src, content_type));
    }

    /// Replace the entry's summary
    pub fn set_summary(&mut self, text: impl Into<String>, text_type: TextType) {
        self.summary = Some(Text::with_type(text, text_type));
    }

    /// Replace the entry's rights statement
    pub fn set_rights(&mut self, text: impl Into<String>, text_type: TextType) {
        self.rights = Some(Text::with_type(text, text_type));
    }

    /// Set the publication instant; `None` preserves the current value
    pub fn set_published(&mut self, published: impl Into<Option<Timestamp>>) {
        if let Some(published) = published.into() {
            self.published = Some(published);
        }
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
}
