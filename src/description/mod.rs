//! Bean and reference descriptors.
//!
//! A descriptor captures the configuration of one enterprise bean or of one reference a bean
//! holds to another bean, a resource or a persistence unit. Descriptors are populated from two
//! sources: annotations on a class (see [`crate::reflection`]) and nodes of an XML deployment
//! descriptor (see [`crate::deployment`]). Because the deployment descriptor overrides the
//! annotations, every descriptor can also be merged with another descriptor of the same kind.
//!
//! # Architecture
//!
//! ```text
//! DescriptorRegistry
//!   └── AnyBeanDescriptor
//!         ├── SessionBeanDescriptor        (BeanDescriptorInterface)
//!         └── MessageDrivenBeanDescriptor  (BeanDescriptorInterface)
//!               └── BeanDescriptor
//!                     └── DescriptorReferences
//!                           ├── EpbReferenceDescriptor
//!                           ├── ResReferenceDescriptor
//!                           └── PersistenceUnitReferenceDescriptor
//!                                 └── InjectionTargetDescriptor
//! ```
//!
//! Populating a descriptor from a source that does not describe it is not an error: the
//! populating call returns `None` and leaves the descriptor untouched. Merging two bean
//! descriptors of different classes is, and yields [`crate::Error::MergeConflict`].
//!
//! # Examples
//!
//! ```rust
//! use beanscope::prelude::*;
//!
//! let xml = r#"<session xmlns="http://www.appserver.io/appserver">
//!     <session-type>Stateless</session-type>
//!     <epb-name>UserProcessor</epb-name>
//!     <epb-class>Example\Services\UserProcessor</epb-class>
//!     <epb-ref>
//!         <epb-ref-name>env/SchemaProcessor</epb-ref-name>
//!         <epb-link>SchemaProcessor</epb-link>
//!     </epb-ref>
//! </session>"#;
//!
//! let node = Element::parse(xml)?;
//! let mut descriptor = SessionBeanDescriptor::stateless();
//! assert!(descriptor.from_deployment_descriptor(&node).is_some());
//! assert_eq!(descriptor.epb_references().len(), 1);
//! # Ok::<(), beanscope::Error>(())
//! ```

mod any;
mod bean;
mod epbreference;
mod injectiontarget;
mod messagedriven;
mod persistenceunitreference;
mod reference;
mod references;
mod registry;
mod resreference;
mod session;
mod types;
pub(crate) mod util;

pub use any::AnyBeanDescriptor;
pub use bean::{BeanDescriptor, BeanDescriptorInterface};
pub use epbreference::EpbReferenceDescriptor;
pub use injectiontarget::InjectionTargetDescriptor;
pub use messagedriven::MessageDrivenBeanDescriptor;
pub use persistenceunitreference::PersistenceUnitReferenceDescriptor;
pub use reference::{Reference, ReferenceDescriptorInterface};
pub use references::{
    DescriptorReferences, EpbReferenceMap, PersistenceUnitReferenceMap, ResReferenceMap,
};
pub use registry::DescriptorRegistry;
pub use resreference::ResReferenceDescriptor;
pub use session::SessionBeanDescriptor;
pub use types::{annotations, BeanKind, SessionType};
