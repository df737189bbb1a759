// Copyright 2025 The beanscope Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # beanscope
//!
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](LICENSE-APACHE)
//!
//! Metadata descriptors for enterprise beans of an application server. A descriptor records
//! what the container needs to know to instantiate a bean and to inject its dependencies:
//! the bean's name and class, its kind, lifecycle callbacks and the references it holds to
//! other beans, resources and persistence units.
//!
//! ## Features
//!
//! - **Annotation driven** - Populate descriptors from class, property and method annotations
//! - **Deployment descriptors** - Populate descriptors from namespaced XML nodes
//! - **Overlays** - Merge a deployment descriptor over annotation defaults
//! - **Closed bean kinds** - Stateless, stateful and singleton session beans, message driven beans
//!
//! ## Quick Start
//!
//! ```rust
//! use beanscope::prelude::*;
//!
//! let class = ReflectionClass::new("Example\\Services\\UserProcessor")
//!     .with_annotation(Annotation::new("Stateless"))
//!     .with_property(
//!         ReflectionProperty::new("schemaProcessor")
//!             .with_annotation(Annotation::new("EnterpriseBean")),
//!     );
//!
//! let mut descriptor = SessionBeanDescriptor::stateless();
//! descriptor.from_reflection_class(&class).expect("class is a stateless bean");
//!
//! assert_eq!(descriptor.name(), Some("UserProcessor"));
//! let reference = &descriptor.epb_references()["env/SchemaProcessor"];
//! assert_eq!(reference.bean_interface(), Some("SchemaProcessorLocal"));
//! ```
//!
//! ## Architecture
//!
//! - [`reflection`] - What a descriptor needs to know about an annotated class
//! - [`deployment`] - Namespaced XML element tree of a deployment descriptor
//! - [`description`] - Bean and reference descriptors, merging and the registry
//! - [`DescriptorConfig`] - Namespace, naming directory and injection method prefix
//!
//! ## Error Handling
//!
//! Populating a descriptor from a source that describes something else is not an error; the
//! populating call returns `None`. Faults are reported through [`Error`]:
//!
//! ```rust
//! use beanscope::{Error, deployment::Element};
//!
//! match Element::parse("<session><epb-name>") {
//!     Ok(_) => unreachable!(),
//!     Err(Error::Malformed { message, .. }) => eprintln!("Malformed: {}", message),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Population and merging emit [`tracing`](https://docs.rs/tracing) events at `debug` and
//! `trace` level. Install any `tracing` subscriber to see them.

#[macro_use]
pub(crate) mod error;
pub mod config;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use beanscope::prelude::*;
///
/// let registry = DescriptorRegistry::with_config(DescriptorConfig::default());
/// assert!(registry.is_empty());
/// ```
pub mod prelude;

/// Reflection capabilities consumed by the descriptors
///
/// Descriptors never inspect code themselves. They read class names, member names and
/// annotations through the traits of this module.
///
/// # Key Types
///
/// - [`reflection::ClassInterface`] - An annotated class with its members
/// - [`reflection::Annotation`] - An annotation name with its attribute values
/// - [`reflection::ReflectionClass`] - In-memory implementation of the traits
pub mod reflection;

/// Namespaced XML deployment descriptors
///
/// # Key Types
///
/// - [`deployment::Element`] - Parsed element tree
/// - [`deployment::NamespacedNode`] - View of an element restricted to one namespace
///
/// # Examples
///
/// ```rust
/// use beanscope::deployment::Element;
///
/// let root = Element::parse(r#"<epb xmlns="urn:example"><epb-name>A</epb-name></epb>"#)?;
/// let node = root.with_namespace("urn:example");
/// assert_eq!(node.child_text("epb-name"), Some("A"));
/// assert_eq!(root.with_namespace("urn:other").child_text("epb-name"), None);
/// # Ok::<(), beanscope::Error>(())
/// ```
pub mod deployment;

/// Bean and reference descriptors
pub mod description;

/// `beanscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `beanscope` Error type
///
/// The main error type for all operations in this crate. See the variants for the individual
/// fault categories.
pub use error::Error;

/// Configuration shared by all descriptors
///
/// # Example
///
/// ```rust
/// use beanscope::DescriptorConfig;
///
/// let config = DescriptorConfig::default();
/// assert_eq!(config.reference_name("UserProcessor"), "env/UserProcessor");
/// ```
pub use config::DescriptorConfig;
