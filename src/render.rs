//! Deterministic XML rendering for feeds and entries
//!
//! Reference: https://datatracker.ietf.org/doc/html/rfc4287
//!
//! Child elements are emitted in lexicographic tag order (entries last),
//! never in insertion order, with stable two-space indentation. Each
//! construct kind has its own `write_*` function below; that explicit
//! dispatch table is the whole serializer. Rendering never fails and
//! never calls `validate()` — an invalid-but-representable document
//! still serializes.

use std::fmt;
use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::construct::{Category, Content, Link, Person, Rel, Text, Timestamp};
use crate::entry::Entry;
use crate::feed::Feed;

/// Namespace of every rendered feed document
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Product name carried by the synthesized atom:generator element
pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Version carried by the synthesized atom:generator element
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// URI carried by the synthesized atom:generator element
pub const GENERATOR_URI: &str = "https://docs.rs/atom-rs";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn new_writer() -> XmlWriter {
    Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2)
}

// The unwraps below write to an in-memory buffer and cannot fail.

fn into_string(writer: XmlWriter) -> String {
    let body = writer.into_inner().into_inner();
    String::from_utf8(body).unwrap()
}

/// RFC 3339 with seconds precision; `Z` for UTC, source offset otherwise
fn write_date(writer: &mut XmlWriter, tag: &str, date: Timestamp) {
    let formatted = date.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    writer.write_event(Event::Start(BytesStart::new(tag))).unwrap();
    writer
        .write_event(Event::Text(BytesText::new(&formatted)))
        .unwrap();
    writer.write_event(Event::End(BytesEnd::new(tag))).unwrap();
}

/// Simple element whose chardata is an IRI (id, icon, logo)
fn write_uri_element(writer: &mut XmlWriter, tag: &str, value: &str) {
    writer.write_event(Event::Start(BytesStart::new(tag))).unwrap();
    // BytesText escapes the chardata
    writer.write_event(Event::Text(BytesText::new(value))).unwrap();
    writer.write_event(Event::End(BytesEnd::new(tag))).unwrap();
}

/// Text construct under the given tag (title, subtitle, summary, rights)
fn write_text(writer: &mut XmlWriter, tag: &str, text: &Text) {
    let mut elem = BytesStart::new(tag);
    if let Some(text_type) = text.text_type {
        elem.push_attribute(("type", text_type.as_str()));
    }
    writer.write_event(Event::Start(elem)).unwrap();
    writer
        .write_event(Event::Text(BytesText::new(&text.text)))
        .unwrap();
    writer.write_event(Event::End(BytesEnd::new(tag))).unwrap();
}

/// Person construct under the given tag (author, contributor)
fn write_person(writer: &mut XmlWriter, tag: &str, person: &Person) {
    writer.write_event(Event::Start(BytesStart::new(tag))).unwrap();
    write_uri_element(writer, "name", &person.name);
    if let Some(uri) = &person.uri {
        write_uri_element(writer, "uri", uri);
    }
    if let Some(email) = &person.email {
        write_uri_element(writer, "email", email);
    }
    writer.write_event(Event::End(BytesEnd::new(tag))).unwrap();
}

/// Self-closing category element; push_attribute escapes the values
fn write_category(writer: &mut XmlWriter, category: &Category) {
    let mut elem = BytesStart::new("category");
    elem.push_attribute(("term", category.term.as_str()));
    if let Some(scheme) = &category.scheme {
        elem.push_attribute(("scheme", scheme.as_str()));
    }
    if let Some(label) = &category.label {
        elem.push_attribute(("label", label.as_str()));
    }
    writer.write_event(Event::Empty(elem)).unwrap();
}

/// Self-closing link element; push_attribute escapes the values
fn write_link(writer: &mut XmlWriter, link: &Link) {
    let mut elem = BytesStart::new("link");
    elem.push_attribute(("href", link.href.as_str()));
    if link.rel != Rel::Unspecified {
        elem.push_attribute(("rel", link.rel.as_str()));
    }
    if let Some(media_type) = &link.media_type {
        elem.push_attribute(("type", media_type.as_str()));
    }
    if let Some(hreflang) = &link.hreflang {
        elem.push_attribute(("hreflang", hreflang.as_str()));
    }
    if let Some(title) = &link.title {
        elem.push_attribute(("title", title.as_str()));
    }
    if let Some(length) = link.length {
        elem.push_attribute(("length", length.to_string().as_str()));
    }
    writer.write_event(Event::Empty(elem)).unwrap();
}

fn write_content(writer: &mut XmlWriter, content: &Content) {
    let mut elem = BytesStart::new("content");
    if !content.content_type.is_empty() {
        elem.push_attribute(("type", content.content_type.as_str()));
    }
    if let Some(src) = &content.src {
        elem.push_attribute(("src", src.as_str()));
    }
    writer.write_event(Event::Start(elem)).unwrap();
    writer
        .write_event(Event::Text(BytesText::new(&content.text)))
        .unwrap();
    writer
        .write_event(Event::End(BytesEnd::new("content")))
        .unwrap();
}

/// Synthesized atom:generator; callers cannot suppress or override it
fn write_generator(writer: &mut XmlWriter) {
    let mut elem = BytesStart::new("generator");
    elem.push_attribute(("uri", GENERATOR_URI));
    elem.push_attribute(("version", GENERATOR_VERSION));
    writer.write_event(Event::Start(elem)).unwrap();
    let text = format!("Generated via {GENERATOR_NAME}");
    writer.write_event(Event::Text(BytesText::new(&text))).unwrap();
    writer
        .write_event(Event::End(BytesEnd::new("generator")))
        .unwrap();
}

/// Entry element body, shared by standalone and in-feed rendering
fn write_entry(writer: &mut XmlWriter, entry: &Entry) {
    writer
        .write_event(Event::Start(BytesStart::new("entry")))
        .unwrap();

    for author in entry.authors() {
        write_person(writer, "author", author);
    }
    for category in &entry.categories {
        write_category(writer, category);
    }
    if let Some(content) = &entry.content {
        write_content(writer, content);
    }
    for contributor in &entry.contributors {
        write_person(writer, "contributor", contributor);
    }
    write_uri_element(writer, "id", entry.id());
    for link in entry.links() {
        write_link(writer, link);
    }
    if let Some(published) = entry.published() {
        write_date(writer, "published", published);
    }
    if let Some(rights) = &entry.rights {
        write_text(writer, "rights", rights);
    }
    if let Some(summary) = &entry.summary {
        write_text(writer, "summary", summary);
    }
    write_text(writer, "title", entry.title());
    write_date(writer, "updated", entry.updated());

    writer
        .write_event(Event::End(BytesEnd::new("entry")))
        .unwrap();
}

impl Feed {
    /// Render the feed document
    ///
    /// XML declaration, then the namespaced `feed` root with children in
    /// lexicographic tag order: author, category, contributor, generator,
    /// icon, id, link, logo, rights, subtitle, title, updated, entry.
    /// Entries come last, each in append order. Unset optionals are
    /// omitted entirely. Repeated calls on an unmodified feed are
    /// byte-identical.
    pub fn to_xml(&self) -> String {
        debug!(id = %self.id(), entries = self.entry_count(), "rendering feed");

        let mut writer = new_writer();

        let mut feed_elem = BytesStart::new("feed");
        feed_elem.push_attribute(("xmlns", ATOM_NAMESPACE));
        writer.write_event(Event::Start(feed_elem)).unwrap();

        for author in self.authors() {
            write_person(&mut writer, "author", author);
        }
        for category in &self.categories {
            write_category(&mut writer, category);
        }
        for contributor in &self.contributors {
            write_person(&mut writer, "contributor", contributor);
        }
        write_generator(&mut writer);
        if let Some(icon) = &self.icon {
            write_uri_element(&mut writer, "icon", icon);
        }
        write_uri_element(&mut writer, "id", self.id());
        for link in self.links() {
            write_link(&mut writer, link);
        }
        if let Some(logo) = &self.logo {
            write_uri_element(&mut writer, "logo", logo);
        }
        if let Some(rights) = &self.rights {
            write_text(&mut writer, "rights", rights);
        }
        if let Some(subtitle) = &self.subtitle {
            write_text(&mut writer, "subtitle", subtitle);
        }
        write_text(&mut writer, "title", self.title());
        write_date(&mut writer, "updated", self.updated());

        self.with_entries(|entries| {
            for entry in entries {
                write_entry(&mut writer, entry);
            }
        });

        writer
            .write_event(Event::End(BytesEnd::new("feed")))
            .unwrap();

        let mut result = String::from(XML_DECLARATION);
        result.push_str(&into_string(writer));
        result
    }
}

impl Entry {
    /// Render the entry standalone, for embedding
    ///
    /// No XML declaration and no namespace attribute; children in
    /// lexicographic tag order.
    pub fn to_xml(&self) -> String {
        let mut writer = new_writer();
        write_entry(&mut writer, self);
        into_string(writer)
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}
