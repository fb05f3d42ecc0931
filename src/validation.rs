//! RFC 4287 document validation
//!
//! Reference: https://datatracker.ietf.org/doc/html/rfc4287
//!
//! Pure checks over an in-memory feed or entry: nothing is mutated, the
//! first violation wins, and the walk is bounded by the number of child
//! elements. Validation is advisory — the serializer renders whatever is
//! representable, validated or not, and callers decide whether a failed
//! check blocks publication.

use crate::construct::{Category, Link, Person, Rel};
use crate::entry::Entry;
use crate::error::{AtomError, Result};
use crate::feed::Feed;

impl Person {
    /// Check RFC 4287 Section 3.2: a person construct needs a name
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AtomError::InvalidPerson);
        }
        Ok(())
    }
}

impl Category {
    /// Check RFC 4287 Section 4.2.2.1: a category needs a term
    pub fn validate(&self) -> Result<()> {
        if self.term.is_empty() {
            return Err(AtomError::InvalidCategory);
        }
        Ok(())
    }
}

impl Link {
    /// Check RFC 4287 Section 4.2.7.1: a link needs an href
    pub fn validate(&self) -> Result<()> {
        if self.href.is_empty() {
            return Err(AtomError::InvalidLink);
        }
        Ok(())
    }
}

impl Feed {
    /// Validate the feed and every entry against RFC 4287 Section 4.1.1
    ///
    /// Check order (first failure wins): id, title, authors (at least one,
    /// each valid), categories, contributors, links (each valid, exactly
    /// one rel="self"), then each entry via [`Entry::validate`]. The
    /// `updated` element needs no runtime check — the constructor already
    /// guarantees a valid instant.
    ///
    /// The "exactly one rel=self link" rule is stricter than RFC 4287,
    /// which lets feeds validate by other means; this crate keeps it as an
    /// intentional product-level simplification.
    pub fn validate(&self) -> Result<()> {
        if self.id().is_empty() {
            return Err(AtomError::MissingId);
        }
        if self.title().text.is_empty() {
            return Err(AtomError::MissingTitle);
        }

        if self.authors().is_empty() {
            return Err(AtomError::MissingAuthor);
        }
        for author in self.authors() {
            author.validate()?;
        }

        for category in &self.categories {
            category.validate()?;
        }
        for contributor in &self.contributors {
            contributor.validate()?;
        }

        let mut self_links = 0;
        for link in self.links() {
            link.validate()?;
            if link.rel == Rel::SelfLink {
                self_links += 1;
                if self_links > 1 {
                    return Err(AtomError::DuplicateSelfLink);
                }
            }
        }
        if self_links == 0 {
            return Err(AtomError::MissingSelfLink);
        }

        self.with_entries(|entries| {
            for entry in entries {
                entry.validate()?;
            }
            Ok(())
        })
    }
}

impl Entry {
    /// Validate the entry against RFC 4287 Section 4.1.2
    ///
    /// Same id/title checks as the feed, then each author, category,
    /// contributor and link present must itself be valid. Entries require
    /// no author and no rel="self" link — those are feed-level rules.
    pub fn validate(&self) -> Result<()> {
        if self.id().is_empty() {
            return Err(AtomError::MissingId);
        }
        if self.title().text.is_empty() {
            return Err(AtomError::MissingTitle);
        }

        for author in self.authors() {
            author.validate()?;
        }
        for category in &self.categories {
            category.validate()?;
        }
        for contributor in &self.contributors {
            contributor.validate()?;
        }
        for link in self.links() {
            link.validate()?;
        }

        Ok(())
    }
}
