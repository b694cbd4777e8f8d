//! Generic XML element tree used as the read/write surface of every typed element

use std::fmt::Display;
use std::io::{Cursor, Write};
use std::str::FromStr;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::{OoxmlError, OoxmlResult};

/// A parsed or to-be-written XML element
///
/// Names keep their namespace prefix (e.g. `x14:sparkline`); lookups through
/// [`XmlElement::child`] compare local names so prefixed and unprefixed
/// fragments read the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// Qualified element name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
    /// Text content, if any
    pub text: Option<String>,
}

impl XmlElement {
    /// Create an element with no attributes or children
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Name without namespace prefix
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Add an attribute
    pub fn with_attr<V: Display>(mut self, key: &str, value: V) -> Self {
        self.attributes.push((key.to_string(), value.to_string()));
        self
    }

    /// Add an attribute only when a value is present
    pub fn opt_attr<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with_attr(key, v),
            None => self,
        }
    }

    /// Add a boolean attribute (`1`/`0`) only when a value is present
    pub fn opt_bool(self, key: &str, value: Option<bool>) -> Self {
        self.opt_attr(key, value.map(bool_str))
    }

    /// Append a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element only when present
    pub fn opt_child(mut self, child: Option<XmlElement>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    /// Set the text content
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Raw attribute value
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parse an attribute value, dropping (and logging) values that do not parse
    pub fn parse_attr<T: FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.attr(key)?;
        match raw.trim().parse::<T>() {
            Ok(v) => Some(v),
            Err(_) => {
                log::warn!("ignoring unparsable {}@{}: {:?}", self.name, key, raw);
                None
            }
        }
    }

    /// Parse a floating point attribute; non-finite values are dropped
    pub fn f64_attr(&self, key: &str) -> Option<f64> {
        self.parse_attr::<f64>(key).filter(|v| v.is_finite())
    }

    /// Parse an `xsd:boolean` attribute
    pub fn bool_attr(&self, key: &str) -> Option<bool> {
        let raw = self.attr(key)?;
        match parse_bool(raw) {
            Some(b) => Some(b),
            None => {
                log::warn!("ignoring invalid boolean {}@{}: {:?}", self.name, key, raw);
                None
            }
        }
    }

    /// First child with the given local name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name() == name)
    }

    /// All children with the given local name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.local_name() == name)
    }

    /// Text of the first child with the given local name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.text.as_deref())
    }

    /// Fail unless this element has the expected local name
    pub fn expect_name(&self, expected: &'static str) -> OoxmlResult<()> {
        if self.local_name() == expected {
            Ok(())
        } else {
            Err(OoxmlError::UnexpectedElement {
                expected,
                found: self.name.clone(),
            })
        }
    }

    /// Parse the first element of an XML fragment into a tree
    pub fn parse(xml: &str) -> OoxmlResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(Self::from_start(&e)?),
                Event::Empty(e) => {
                    let element = Self::from_start(&e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(t) => {
                    if let Some(current) = stack.last_mut() {
                        let text = t.unescape()?;
                        current
                            .text
                            .get_or_insert_with(String::new)
                            .push_str(&text);
                    }
                }
                Event::CData(t) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(&t)?;
                        current.text.get_or_insert_with(String::new).push_str(text);
                    }
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or(OoxmlError::Empty)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => return Err(OoxmlError::Empty),
                _ => {}
            }
        }
    }

    fn from_start(start: &BytesStart<'_>) -> OoxmlResult<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: None,
        })
    }

    /// Write this element (and its subtree) as XML events
    pub fn write<W: Write>(&self, writer: &mut Writer<W>) -> OoxmlResult<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    /// Serialize to an XML fragment string (no declaration)
    pub fn to_xml_string(&self) -> OoxmlResult<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        self.write(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner().into_inner())?)
    }
}

/// Conversion between a typed element and its XML tree
pub trait XmlPart: Sized {
    /// Local name of the element's root tag
    const TAG: &'static str;

    /// Build the XML tree for this element
    fn to_element(&self) -> XmlElement;

    /// Read this element from an XML tree
    fn from_element(element: &XmlElement) -> OoxmlResult<Self>;

    /// Serialize to an XML fragment
    fn to_xml(&self) -> OoxmlResult<String> {
        self.to_element().to_xml_string()
    }

    /// Parse from an XML fragment
    fn from_xml(xml: &str) -> OoxmlResult<Self> {
        Self::from_element(&XmlElement::parse(xml)?)
    }
}

pub(crate) fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

pub(crate) fn bool_str(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let el = XmlElement::parse(
            r#"<x14:sparkline><xm:f>Sheet1!A1:A3</xm:f><xm:sqref>B1</xm:sqref></x14:sparkline>"#,
        )
        .unwrap();
        assert_eq!(el.local_name(), "sparkline");
        assert_eq!(el.child_text("f"), Some("Sheet1!A1:A3"));
        assert_eq!(el.child_text("sqref"), Some("B1"));
    }

    #[test]
    fn test_parse_empty_root() {
        let el = XmlElement::parse(r#"<color rgb="FF00FF00" tint="0.5"/>"#).unwrap();
        assert_eq!(el.attr("rgb"), Some("FF00FF00"));
        assert_eq!(el.f64_attr("tint"), Some(0.5));
    }

    #[test]
    fn test_write_escapes_attributes() {
        let el = XmlElement::new("numFmt")
            .with_attr("numFmtId", 164)
            .with_attr("formatCode", "\"<\"0");
        let xml = el.to_xml_string().unwrap();
        assert_eq!(xml, r#"<numFmt numFmtId="164" formatCode="&quot;&lt;&quot;0"/>"#);
        assert_eq!(XmlElement::parse(&xml).unwrap(), el);
    }

    #[test]
    fn test_bool_attr() {
        let el = XmlElement::new("b").with_attr("a", "true").with_attr("b", "0");
        assert_eq!(el.bool_attr("a"), Some(true));
        assert_eq!(el.bool_attr("b"), Some(false));
        assert_eq!(el.bool_attr("c"), None);
    }

    #[test]
    fn test_parse_empty_fragment() {
        assert!(XmlElement::parse("").is_err());
    }
}
