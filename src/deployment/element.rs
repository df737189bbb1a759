//! Namespace-aware XML element tree.

use std::path::Path;

use quick_xml::{
    events::{BytesStart, Event},
    name::{Namespace, ResolveResult},
    NsReader,
};

use crate::{deployment::NamespacedNode, Result};

/// An element of a parsed deployment descriptor
///
/// Only what descriptors read is kept: the resolved namespace URI, the local name, the text
/// content and the child elements. Attributes, comments and processing instructions are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create an element programmatically
    #[must_use]
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        Element {
            namespace: namespace.map(str::to_string),
            name: name.to_string(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper that sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Builder-style helper that appends a child element
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a deployment descriptor document and return its root element
    ///
    /// # Arguments
    ///
    /// * `xml` - The complete XML document
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Xml`] if the document is not well-formed and
    /// [`crate::Error::Malformed`] if it has no (or more than one) root element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use beanscope::deployment::Element;
    ///
    /// let root = Element::parse(
    ///     r#"<session xmlns="http://www.appserver.io/appserver">
    ///            <epb-name>UserProcessor</epb-name>
    ///        </session>"#,
    /// )?;
    ///
    /// assert_eq!(root.name(), "session");
    /// assert_eq!(root.children()[0].text(), "UserProcessor");
    /// # Ok::<(), beanscope::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Element> {
        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_resolved_event()? {
                (namespace, Event::Start(start)) => {
                    stack.push(Self::open(namespace, &start)?);
                }
                (namespace, Event::Empty(start)) => {
                    let element = Self::open(namespace, &start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                (_, Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| malformed_error!("Closing tag without opening tag"))?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                (_, Event::Text(text)) => {
                    if let Some(current) = stack.last_mut() {
                        let content = text
                            .unescape()
                            .map_err(|err| malformed_error!("Invalid text content - {}", err))?;
                        current.text.push_str(&content);
                    }
                }
                (_, Event::CData(data)) => {
                    if let Some(current) = stack.last_mut() {
                        let content = std::str::from_utf8(&data)
                            .map_err(|err| malformed_error!("Invalid CDATA content - {}", err))?;
                        current.text.push_str(content);
                    }
                }
                (_, Event::Eof) => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed_error!("Element <{}> is never closed", open.name));
        }

        root.ok_or_else(|| malformed_error!("Document does not contain a root element"))
    }

    /// Read and parse a deployment descriptor file
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileError`] if the file can not be read, otherwise the same
    /// errors as [`Element::parse`].
    pub fn from_file(path: &Path) -> Result<Element> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    fn open(namespace: ResolveResult, start: &BytesStart) -> Result<Element> {
        let namespace = match namespace {
            ResolveResult::Bound(Namespace(uri)) => Some(
                std::str::from_utf8(uri)
                    .map_err(|err| malformed_error!("Invalid namespace URI - {}", err))?
                    .to_string(),
            ),
            _ => None,
        };

        let local_name = start.local_name();
        let name = std::str::from_utf8(local_name.as_ref())
            .map_err(|err| malformed_error!("Invalid element name - {}", err))?;

        Ok(Element {
            namespace,
            name: name.to_string(),
            text: String::new(),
            children: Vec::new(),
        })
    }

    fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
        } else if root.is_none() {
            *root = Some(element);
        } else {
            return Err(malformed_error!(
                "Second root element <{}> in document",
                element.name
            ));
        }

        Ok(())
    }

    /// Namespace URI the element was resolved to, if any
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local (unprefixed) element name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content of the element itself, without the text of its children
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All child elements in document order
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Register the namespace descriptor elements are expected in.
    ///
    /// The returned view only sees elements of `namespace`.
    #[must_use]
    pub fn with_namespace<'a>(&'a self, namespace: &'a str) -> NamespacedNode<'a> {
        NamespacedNode::new(self, namespace)
    }
}
