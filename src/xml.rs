//! Generic XML normalization into a nested-map tree
//!
//! Parses an XML document with quick-xml and builds a map-of-maps view of it,
//! with "explicit-array-off" semantics: a child element that occurs once is
//! addressed directly under its name, and only a repeated sibling promotes the
//! entry to a list. Leaf elements normalize to their text content, empty
//! elements to the empty string. Attributes are not part of the consumed
//! surface and are skipped.

use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("closing tag without a matching opening tag")]
    UnexpectedEnd,

    #[error("document ended with {0} unclosed element(s)")]
    UnexpectedEof(usize),
}

/// One node of the normalized tree.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    /// Leaf element: its (possibly empty) text content.
    Text(String),
    /// Element with child elements, keyed by child name.
    Map(HashMap<String, XmlValue>),
    /// Repeated sibling elements under one name.
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// Look up a child element by name. Returns `None` for leaves and lists.
    pub fn get(&self, name: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Map(children) => children.get(name),
            _ => None,
        }
    }

    /// The text content of a leaf element.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// View this value as a sequence: a list yields its elements, anything
    /// else yields itself as a one-element slice. This is how callers iterate
    /// elements that may or may not have been repeated in the document.
    pub fn items(&self) -> &[XmlValue] {
        match self {
            XmlValue::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }
}

/// An open element while its subtree is still being read.
struct Frame {
    name: String,
    children: HashMap<String, XmlValue>,
    text: Option<String>,
}

/// Parse an XML document into the normalized tree.
///
/// The returned value is a map holding the root element under its name, so a
/// KML document is addressed as `tree.get("kml")`. Malformed XML (unbalanced
/// or mismatched tags, bad syntax) fails with [`XmlError`].
pub fn parse_xml(xml: &str) -> Result<XmlValue, XmlError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: HashMap<String, XmlValue> = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            XmlEvent::Start(e) => {
                stack.push(Frame {
                    name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    children: HashMap::new(),
                    text: None,
                });
            }
            XmlEvent::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let parent = match stack.last_mut() {
                    Some(frame) => &mut frame.children,
                    None => &mut root,
                };
                insert_child(parent, name, XmlValue::Text(String::new()));
            }
            XmlEvent::Text(e) => {
                if let Some(frame) = stack.last_mut() {
                    let text = e.unescape()?;
                    frame.text.get_or_insert_with(String::new).push_str(&text);
                }
            }
            XmlEvent::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    frame.text.get_or_insert_with(String::new).push_str(&text);
                }
            }
            XmlEvent::End(_) => {
                let frame = stack.pop().ok_or(XmlError::UnexpectedEnd)?;
                let value = if frame.children.is_empty() {
                    XmlValue::Text(frame.text.unwrap_or_default())
                } else {
                    XmlValue::Map(frame.children)
                };
                let parent = match stack.last_mut() {
                    Some(open) => &mut open.children,
                    None => &mut root,
                };
                insert_child(parent, frame.name, value);
            }
            XmlEvent::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(XmlError::UnexpectedEof(stack.len()));
    }

    Ok(XmlValue::Map(root))
}

/// Insert a completed child, promoting to a list on the second occurrence of
/// the same name.
fn insert_child(children: &mut HashMap<String, XmlValue>, name: String, value: XmlValue) {
    match children.entry(name) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => {
            let existing = slot.get_mut();
            if let XmlValue::List(items) = existing {
                items.push(value);
            } else {
                let first = std::mem::replace(existing, XmlValue::List(Vec::with_capacity(2)));
                if let XmlValue::List(items) = existing {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    }
}
