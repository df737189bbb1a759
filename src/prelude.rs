//! # beanscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the beanscope library. Import this module to get quick access to the descriptors,
//! the reflection builders and the traits whose methods the descriptors are used through.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all beanscope operations
pub use crate::Error;

/// The result type used throughout beanscope
pub use crate::Result;

/// Configuration shared by all descriptors
pub use crate::DescriptorConfig;

// ================================================================================================
// Bean Descriptors
// ================================================================================================

/// Common bean state and the trait every bean descriptor implements
pub use crate::description::{BeanDescriptor, BeanDescriptorInterface};

/// Concrete bean descriptors and the closed set of bean kinds
pub use crate::description::{
    AnyBeanDescriptor, BeanKind, MessageDrivenBeanDescriptor, SessionBeanDescriptor, SessionType,
};

/// Name-keyed collection of bean descriptors
pub use crate::description::DescriptorRegistry;

// ================================================================================================
// Reference Descriptors
// ================================================================================================

/// Reference descriptors and their injection target
pub use crate::description::{
    EpbReferenceDescriptor, InjectionTargetDescriptor, PersistenceUnitReferenceDescriptor,
    ResReferenceDescriptor,
};

/// Shared reference behaviour and the all-references view
pub use crate::description::{DescriptorReferences, Reference, ReferenceDescriptorInterface};

// ================================================================================================
// Reflection
// ================================================================================================

/// Capability traits descriptors read classes through
pub use crate::reflection::{
    AnnotatedInterface, ClassInterface, MethodFlags, MethodInterface, PropertyInterface,
};

/// Annotations and the in-memory class model
pub use crate::reflection::{
    Annotation, AnnotationValue, ReflectionClass, ReflectionMethod, ReflectionProperty,
};

// ================================================================================================
// Deployment Descriptors
// ================================================================================================

/// Parsed deployment descriptor elements
pub use crate::deployment::{Element, NamespacedNode};
