//! Owned XML tree for Mapy.cz responses
//!
//! Mapy.cz answers with small documents whose payload lives entirely in
//! element attributes. The body is read with `quick-xml` into a tree of
//! [`XmlNode`]s, each holding its attributes as a name → value map, so the
//! provider can walk typed data instead of raw events.

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Reasons a body is not a usable XML document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("response body is not valid UTF-8")]
    Encoding,

    #[error("response body contains no root element")]
    Empty,

    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// One element of a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: BTreeMap<String, String>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Element name, including any namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value of an attribute
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Child elements in document order
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let mut attributes = BTreeMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmlError::Malformed(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::Malformed(e.to_string()))?
                .into_owned();
            attributes.insert(key, value);
        }

        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
        })
    }
}

/// Parse a response body into its root element
///
/// The document must be well formed: a single root element, every element
/// closed with a matching end tag, and no character data outside the root.
pub fn parse_document(body: &[u8]) -> Result<XmlNode, XmlError> {
    let text = std::str::from_utf8(body).map_err(|_| XmlError::Encoding)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.is_empty() && root.is_some() {
                    return Err(XmlError::Malformed(
                        "more than one root element".to_string(),
                    ));
                }
                stack.push(XmlNode::from_start(&e)?);
            },
            Ok(Event::Empty(e)) => {
                let node = XmlNode::from_start(&e)?;
                attach(node, &mut stack, &mut root)?;
            },
            Ok(Event::End(_)) => {
                let node = stack.pop().ok_or_else(|| {
                    XmlError::Malformed("end tag without matching start tag".to_string())
                })?;
                attach(node, &mut stack, &mut root)?;
            },
            Ok(Event::Text(_) | Event::CData(_)) => {
                if stack.is_empty() {
                    return Err(XmlError::Malformed(
                        "character data outside the root element".to_string(),
                    ));
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => return Err(XmlError::Malformed(e.to_string())),
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Malformed(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    root.ok_or(XmlError::Empty)
}

/// Hand a completed element to its parent, or make it the root
fn attach(
    node: XmlNode,
    stack: &mut [XmlNode],
    root: &mut Option<XmlNode>,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlError::Malformed(
            "more than one root element".to_string(),
        ));
    }
    *root = Some(node);
    Ok(())
}
