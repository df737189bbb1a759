//! Namespace-bound view over an [`Element`].

use crate::deployment::Element;

/// An element seen through a registered namespace
///
/// Lookups only match child elements living in the registered namespace. Text values are
/// returned trimmed, blank values count as absent.
#[derive(Debug, Clone, Copy)]
pub struct NamespacedNode<'a> {
    element: &'a Element,
    namespace: &'a str,
}

impl<'a> NamespacedNode<'a> {
    /// Bind `element` to `namespace`
    #[must_use]
    pub fn new(element: &'a Element, namespace: &'a str) -> Self {
        NamespacedNode { element, namespace }
    }

    /// The underlying element
    #[must_use]
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// The registered namespace
    #[must_use]
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// Check whether this node is the element `name` of the registered namespace
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.matches(self.element, name)
    }

    /// Trimmed text content of this node
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.element.text().trim()
    }

    /// First child element with the given name
    #[must_use]
    pub fn child(&self, name: &str) -> Option<NamespacedNode<'a>> {
        self.children(name).into_iter().next()
    }

    /// All child elements with the given name, in document order
    #[must_use]
    pub fn children(&self, name: &str) -> Vec<NamespacedNode<'a>> {
        self.element
            .children()
            .iter()
            .filter(|child| self.matches(child, name))
            .map(|child| NamespacedNode::new(child, self.namespace))
            .collect()
    }

    /// All child elements of the registered namespace, in document order
    #[must_use]
    pub fn elements(&self) -> Vec<NamespacedNode<'a>> {
        self.element
            .children()
            .iter()
            .filter(|child| child.namespace() == Some(self.namespace))
            .map(|child| NamespacedNode::new(child, self.namespace))
            .collect()
    }

    /// Trimmed text of the first child element with the given name.
    ///
    /// Returns `None` if there is no such child or its text is blank.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&'a str> {
        self.child(name)
            .map(|child| child.text())
            .filter(|text| !text.is_empty())
    }

    fn matches(&self, element: &Element, name: &str) -> bool {
        element.namespace() == Some(self.namespace) && element.name() == name
    }
}
