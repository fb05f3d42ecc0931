//! Atom document error types

use thiserror::Error;

/// Errors raised by feed construction and validation
///
/// Two kinds exist: [`AtomError::MissingField`] comes from the constructors
/// (`Feed::new`, `Entry::new`) and is fatal to that call. Every other
/// variant comes from `validate()` only — the builder mutators and the
/// serializer never raise them, so an invalid-but-representable document
/// still renders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    /// A required constructor argument was empty or absent
    #[error("atom:{field} cannot be empty")]
    MissingField {
        /// Name of the offending element ("id", "title" or "updated")
        field: &'static str,
    },

    /// Document has no atom:id
    #[error("atom documents must contain exactly one atom:id element")]
    MissingId,

    /// Document has no valid atom:updated instant
    #[error("atom documents must contain exactly one valid atom:updated element")]
    MissingUpdated,

    /// Document has no atom:title text
    #[error("atom documents must contain exactly one atom:title element")]
    MissingTitle,

    /// Feed has no author (simplification of RFC 4287's author rule)
    #[error("atom:feed elements must contain at least one atom:author element")]
    MissingAuthor,

    /// A person construct is missing its atom:name
    #[error("person constructs must contain exactly one atom:name element")]
    InvalidPerson,

    /// A category is missing its term attribute
    #[error("atom:category elements must have a term attribute")]
    InvalidCategory,

    /// A link is missing its href attribute
    #[error("atom:link elements must have an href attribute")]
    InvalidLink,

    /// Feed has no link with rel="self" (simplification, see DESIGN notes)
    #[error("atom:feed elements should contain one atom:link element with rel=\"self\"")]
    MissingSelfLink,

    /// Feed has more than one link with rel="self"
    #[error("atom:feed elements must not contain more than one atom:link element with rel=\"self\"")]
    DuplicateSelfLink,
}

impl AtomError {
    /// RFC 4287 section the error cites, e.g. `"4.1.1"`
    ///
    /// `MissingField` is a construction-time error rather than a spec
    /// violation and returns `None`.
    pub fn rfc_section(&self) -> Option<&'static str> {
        match self {
            AtomError::MissingField { .. } => None,
            AtomError::MissingId
            | AtomError::MissingUpdated
            | AtomError::MissingTitle
            | AtomError::MissingAuthor
            | AtomError::MissingSelfLink
            | AtomError::DuplicateSelfLink => Some("4.1.1"),
            AtomError::InvalidPerson => Some("3.2.1"),
            AtomError::InvalidCategory => Some("4.2.2.1"),
            AtomError::InvalidLink => Some("4.2.7.1"),
        }
    }

    /// Link into the RFC 4287 text for the violated requirement
    pub fn reference(&self) -> Option<String> {
        self.rfc_section().map(|section| {
            format!("https://datatracker.ietf.org/doc/html/rfc4287#section-{section}")
        })
    }
}

/// Result type alias using AtomError
pub type Result<T> = std::result::Result<T, AtomError>;
