//! Reflection abstraction consumed by the descriptors.
//!
//! Bean descriptors populate themselves from annotations attached to a class and its members.
//! This module defines what they need to know about such a class, expressed as a set of
//! capability traits, and ships a plain in-memory implementation of them.
//!
//! # Key Components
//!
//! - [`ClassInterface`] - Class name, short name, class annotations and members
//! - [`PropertyInterface`] / [`MethodInterface`] - Annotated members and their owning class
//! - [`Annotation`] / [`AnnotationValue`] - Annotation name and value bag
//! - [`MethodFlags`] - Method modifiers, used to select public methods
//! - [`ReflectionClass`] - Metadata-table implementation of the traits
//!
//! # Examples
//!
//! ```rust
//! use beanscope::reflection::{
//!     AnnotatedInterface, Annotation, ClassInterface, ReflectionClass, ReflectionProperty,
//! };
//!
//! let class = ReflectionClass::new("Example\\Services\\UserProcessor")
//!     .with_annotation(Annotation::new("Stateless"))
//!     .with_property(
//!         ReflectionProperty::new("userRepository")
//!             .with_annotation(Annotation::new("Resource").with_value("lookup", "php:global/db")),
//!     );
//!
//! assert!(class.has_annotation("Stateless"));
//! assert_eq!(class.short_name(), "UserProcessor");
//! ```

mod annotation;
mod class;
mod types;

pub use annotation::{Annotation, AnnotationValue};
pub use class::{ReflectionClass, ReflectionMethod, ReflectionProperty};
pub use types::*;
