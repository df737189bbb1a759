//! Capability traits of the reflection abstraction.
//!
//! Descriptors never inspect source code themselves. They consume these traits, which an
//! embedding framework implements on top of whatever metadata it has at hand: a parsed class
//! file, a pre-generated metadata table, or the in-memory [`crate::reflection::ReflectionClass`]
//! shipped with this crate.

use bitflags::bitflags;

use crate::reflection::Annotation;

bitflags! {
    /// Modifiers of a reflected method, also used as filter when listing methods.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodFlags: u32 {
        /// Method is publicly visible
        const PUBLIC = 0x0001;
        /// Method is visible to subclasses only
        const PROTECTED = 0x0002;
        /// Method is visible to the declaring class only
        const PRIVATE = 0x0004;
        /// Method is static
        const STATIC = 0x0010;
        /// Method is abstract
        const ABSTRACT = 0x0020;
        /// Method can not be overridden
        const FINAL = 0x0040;
    }
}

/// Anything annotations can be attached to
pub trait AnnotatedInterface {
    /// All annotations in declaration order
    fn annotations(&self) -> &[Annotation];

    /// Get the first annotation with the given name
    fn get_annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations()
            .iter()
            .find(|annotation| annotation.name() == name)
    }

    /// Check whether an annotation with the given name is attached
    fn has_annotation(&self, name: &str) -> bool {
        self.get_annotation(name).is_some()
    }
}

/// A reflected property (field) of a class
pub trait PropertyInterface: AnnotatedInterface {
    /// Fully qualified name of the declaring class
    fn class_name(&self) -> &str;

    /// Name of the property, e.g. `userProcessor`
    fn property_name(&self) -> &str;
}

/// A reflected method of a class
pub trait MethodInterface: AnnotatedInterface {
    /// Fully qualified name of the declaring class
    fn class_name(&self) -> &str;

    /// Name of the method, e.g. `injectUserProcessor`
    fn method_name(&self) -> &str;

    /// Modifiers of the method
    fn flags(&self) -> MethodFlags;
}

/// A reflected class
pub trait ClassInterface: AnnotatedInterface {
    /// Fully qualified class name, e.g. `Example\Services\UserProcessor`
    fn name(&self) -> &str;

    /// Unqualified class name, e.g. `UserProcessor`
    fn short_name(&self) -> &str {
        short_class_name(self.name())
    }

    /// Declared properties in declaration order
    fn properties(&self) -> Vec<&dyn PropertyInterface>;

    /// Methods carrying at least one of the `filter` modifiers, in declaration order.
    ///
    /// An empty filter returns all methods.
    fn methods(&self, filter: MethodFlags) -> Vec<&dyn MethodInterface>;
}

/// Strip the namespace from a fully qualified class name.
///
/// Accepts `\`, `.` and `::` separated names.
#[must_use]
pub fn short_class_name(name: &str) -> &str {
    name.rsplit(&['\\', '.', ':'][..]).next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_class_name() {
        assert_eq!(
            short_class_name("AppserverIo\\Apps\\Example\\Services\\SchemaProcessor"),
            "SchemaProcessor"
        );
        assert_eq!(short_class_name("example.services.UserProcessor"), "UserProcessor");
        assert_eq!(short_class_name("example::services::UserProcessor"), "UserProcessor");
        assert_eq!(short_class_name("UserProcessor"), "UserProcessor");
        assert_eq!(short_class_name(""), "");
    }

    #[test]
    fn test_method_flags() {
        let flags = MethodFlags::PUBLIC | MethodFlags::STATIC;
        assert!(flags.intersects(MethodFlags::PUBLIC));
        assert!(!flags.intersects(MethodFlags::PRIVATE | MethodFlags::PROTECTED));
    }
}
