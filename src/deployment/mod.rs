//! Deployment descriptor documents.
//!
//! Deployment descriptors are XML documents that configure beans as an alternative (or an
//! overlay) to annotations. This module loads them into a small element tree using `quick-xml`
//! and offers the namespace-bound lookups descriptors populate themselves with.
//!
//! # Key Components
//!
//! - [`Element`] - Parsed element tree with resolved namespaces
//! - [`NamespacedNode`] - View that only sees elements of one registered namespace
//!
//! # Examples
//!
//! ```rust
//! use beanscope::deployment::Element;
//!
//! let root = Element::parse(
//!     r#"<session xmlns="http://www.appserver.io/appserver">
//!            <epb-class>Example\Services\UserProcessor</epb-class>
//!            <epb-ref><epb-ref-name>env/SchemaProcessor</epb-ref-name></epb-ref>
//!            <epb-ref><epb-ref-name>env/UserRepository</epb-ref-name></epb-ref>
//!        </session>"#,
//! )?;
//!
//! let node = root.with_namespace("http://www.appserver.io/appserver");
//! assert_eq!(node.child_text("epb-class"), Some("Example\\Services\\UserProcessor"));
//! assert_eq!(node.children("epb-ref").len(), 2);
//! # Ok::<(), beanscope::Error>(())
//! ```

mod element;
mod node;

pub use element::Element;
pub use node::NamespacedNode;
