//! RFC 4287 common constructs
//!
//! Reference: https://datatracker.ietf.org/doc/html/rfc4287
//!
//! The building blocks shared by feeds and entries: text constructs
//! (Section 3.1), person constructs (Section 3.2), categories (Section
//! 4.2.2), links (Section 4.2.7) and content (Section 4.1.3). These are
//! plain value types; required-field rules are enforced by `validate()`
//! and by the `Feed`/`Entry` constructors, not here.

use chrono::{DateTime, FixedOffset};

/// An instant with an explicit UTC offset (RFC 3339, Section 3.3)
///
/// The offset is preserved through rendering: a `published` date parsed
/// at `-02:00` serializes at `-02:00`, not normalized to UTC.
pub type Timestamp = DateTime<FixedOffset>;

/// Flavor of a text construct (RFC 4287 Section 3.1.1)
///
/// Stored as `Option<TextType>` on [`Text`]: `None` omits the `type`
/// attribute entirely (the RFC default), while `Some(TextType::Text)`
/// renders an explicit `type="text"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextType {
    /// Plain text, shown verbatim
    #[default]
    Text,
    /// Escaped HTML markup
    Html,
    /// A single XHTML div
    Xhtml,
}

impl TextType {
    /// Attribute value for the `type` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Html => "html",
            TextType::Xhtml => "xhtml",
        }
    }
}

/// Text construct (RFC 4287 Section 3.1)
///
/// Backs `title`, `subtitle`, `summary` and `rights` — one shape used in
/// distinctly-named slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Human-readable text, escaped as chardata on output
    pub text: String,
    /// `None` leaves the `type` attribute off the element
    pub text_type: Option<TextType>,
}

impl Text {
    /// Text construct without a `type` attribute
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type: None,
        }
    }

    /// Text construct with an explicit `type` attribute
    pub fn with_type(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type: Some(text_type),
        }
    }
}

/// Person construct (RFC 4287 Section 3.2)
///
/// Used for both the author and contributor slots of feeds and entries.
/// Only `name` is required, and only `validate()` enforces it.
///
/// # Examples
///
/// ```
/// use atom_rs::Person;
///
/// let author = Person::new("John Doe")
///     .uri("https://johndoe.example")
///     .email("me@johndoe.example");
/// assert_eq!(author.name, "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Human-readable name (Section 3.2.1)
    pub name: String,
    /// IRI associated with the person (Section 3.2.2)
    pub uri: Option<String>,
    /// Email address (Section 3.2.3)
    pub email: Option<String>,
}

impl Person {
    /// Create a person with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            email: None,
        }
    }

    /// Set the person's URI
    #[must_use]
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the person's email address
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Category (RFC 4287 Section 4.2.2)
///
/// Attribute-only element; renders self-closing. `term` is required but
/// checked only by `validate()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Identifies the category (Section 4.2.2.1)
    pub term: String,
    /// IRI of the categorization scheme (Section 4.2.2.2)
    pub scheme: Option<String>,
    /// Human-readable label; attribute-escaped on output (Section 4.2.2.3)
    pub label: Option<String>,
}

impl Category {
    /// Create a category with the given term
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            scheme: None,
            label: None,
        }
    }

    /// Set the categorization scheme IRI
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set the human-readable label
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Link relation (RFC 4287 Section 4.2.7.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rel {
    /// No rel attribute on output
    #[default]
    Unspecified,
    /// An alternate representation of the document
    Alternate,
    /// A related resource
    Related,
    /// The canonical URI of the document itself
    SelfLink,
    /// A related resource that is potentially large (e.g. podcast audio)
    Enclosure,
    /// The source of the information in the document
    Via,
}

impl Rel {
    /// Attribute value; empty for [`Rel::Unspecified`]
    pub fn as_str(self) -> &'static str {
        match self {
            Rel::Unspecified => "",
            Rel::Alternate => "alternate",
            Rel::Related => "related",
            Rel::SelfLink => "self",
            Rel::Enclosure => "enclosure",
            Rel::Via => "via",
        }
    }
}

/// Link (RFC 4287 Section 4.2.7)
///
/// Attribute-only element; renders self-closing. `href` is required but
/// checked only by `validate()`.
///
/// # Examples
///
/// ```
/// use atom_rs::{Link, Rel};
///
/// let enclosure = Link::new("https://cdn.example/ep1.mp3", Rel::Enclosure)
///     .media_type("audio/mpeg")
///     .length(31415926);
/// assert_eq!(enclosure.rel, Rel::Enclosure);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Link target IRI (Section 4.2.7.1)
    pub href: String,
    /// Link relation (Section 4.2.7.2)
    pub rel: Rel,
    /// Advisory media type of the target (Section 4.2.7.3)
    pub media_type: Option<String>,
    /// Language of the target (Section 4.2.7.4)
    pub hreflang: Option<String>,
    /// Human-readable title; attribute-escaped on output (Section 4.2.7.5)
    pub title: Option<String>,
    /// Advisory length of the target in octets (Section 4.2.7.6)
    pub length: Option<u64>,
}

impl Link {
    /// Create a link with the given target and relation
    pub fn new(href: impl Into<String>, rel: Rel) -> Self {
        Self {
            href: href.into(),
            rel,
            media_type: None,
            hreflang: None,
            title: None,
            length: None,
        }
    }

    /// Set the advisory media type
    #[must_use]
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Set the target language
    #[must_use]
    pub fn hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.hreflang = Some(hreflang.into());
        self
    }

    /// Set the human-readable title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the advisory content length; zero means absent
    #[must_use]
    pub fn length(mut self, length: u64) -> Self {
        self.length = if length == 0 { None } else { Some(length) };
        self
    }
}

/// Content (RFC 4287 Section 4.1.3)
///
/// Either inline text (escaped chardata) or an out-of-line `src`
/// reference. `content_type` may also be a MIME media type, unlike the
/// closed [`TextType`] enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Inline content, escaped as chardata on output
    pub text: String,
    /// "text", "html", "xhtml" or a media type; empty omits the attribute
    pub content_type: String,
    /// Out-of-line content IRI (Section 4.1.3.2)
    pub src: Option<String>,
}

impl Content {
    /// Inline content with the given type
    pub fn inline(text: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            content_type: content_type.into(),
            src: None,
        }
    }

    /// Out-of-line content referencing `src`
    pub fn out_of_line(src: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            content_type: content_type.into(),
            src: Some(src.into()),
        }
    }
}
