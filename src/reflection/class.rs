//! In-memory implementation of the reflection capability.
//!
//! [`ReflectionClass`] is a plain metadata table: the embedding framework (or a code generator,
//! or a test) fills in the class name, its annotations and its members once, and descriptors
//! read from it through the traits in [`crate::reflection`].

use crate::reflection::{
    AnnotatedInterface, Annotation, ClassInterface, MethodFlags, MethodInterface,
    PropertyInterface,
};

/// A reflected property stored in a [`ReflectionClass`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReflectionProperty {
    class_name: String,
    property_name: String,
    annotations: Vec<Annotation>,
}

impl ReflectionProperty {
    /// Create a property without annotations.
    ///
    /// The declaring class name is filled in when the property is added to a class.
    #[must_use]
    pub fn new(property_name: &str) -> Self {
        ReflectionProperty {
            class_name: String::new(),
            property_name: property_name.to_string(),
            annotations: Vec::new(),
        }
    }

    /// Builder-style helper that attaches an annotation
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl AnnotatedInterface for ReflectionProperty {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl PropertyInterface for ReflectionProperty {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn property_name(&self) -> &str {
        &self.property_name
    }
}

/// A reflected method stored in a [`ReflectionClass`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionMethod {
    class_name: String,
    method_name: String,
    flags: MethodFlags,
    annotations: Vec<Annotation>,
}

impl ReflectionMethod {
    /// Create a public method without annotations
    #[must_use]
    pub fn new(method_name: &str) -> Self {
        ReflectionMethod {
            class_name: String::new(),
            method_name: method_name.to_string(),
            flags: MethodFlags::PUBLIC,
            annotations: Vec::new(),
        }
    }

    /// Builder-style helper that replaces the method modifiers
    #[must_use]
    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Builder-style helper that attaches an annotation
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl AnnotatedInterface for ReflectionMethod {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl MethodInterface for ReflectionMethod {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn method_name(&self) -> &str {
        &self.method_name
    }

    fn flags(&self) -> MethodFlags {
        self.flags
    }
}

/// A reflected class with its annotations and members
///
/// # Examples
///
/// ```rust
/// use beanscope::reflection::{
///     Annotation, ClassInterface, MethodFlags, ReflectionClass, ReflectionMethod,
///     ReflectionProperty,
/// };
///
/// let class = ReflectionClass::new("Example\\Services\\UserProcessor")
///     .with_annotation(Annotation::new("Stateless"))
///     .with_property(
///         ReflectionProperty::new("schemaProcessor")
///             .with_annotation(Annotation::new("EnterpriseBean")),
///     )
///     .with_method(ReflectionMethod::new("initialize"))
///     .with_method(ReflectionMethod::new("reset").with_flags(MethodFlags::PRIVATE));
///
/// assert_eq!(class.short_name(), "UserProcessor");
/// assert_eq!(class.properties().len(), 1);
/// assert_eq!(class.methods(MethodFlags::PUBLIC).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReflectionClass {
    name: String,
    annotations: Vec<Annotation>,
    properties: Vec<ReflectionProperty>,
    methods: Vec<ReflectionMethod>,
}

impl ReflectionClass {
    /// Create a class without annotations or members
    #[must_use]
    pub fn new(name: &str) -> Self {
        ReflectionClass {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style helper that attaches a class level annotation
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Builder-style helper that declares a property on this class
    #[must_use]
    pub fn with_property(mut self, mut property: ReflectionProperty) -> Self {
        property.class_name.clone_from(&self.name);
        self.properties.push(property);
        self
    }

    /// Builder-style helper that declares a method on this class
    #[must_use]
    pub fn with_method(mut self, mut method: ReflectionMethod) -> Self {
        method.class_name.clone_from(&self.name);
        self.methods.push(method);
        self
    }
}

impl AnnotatedInterface for ReflectionClass {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl ClassInterface for ReflectionClass {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> Vec<&dyn PropertyInterface> {
        self.properties
            .iter()
            .map(|property| property as &dyn PropertyInterface)
            .collect()
    }

    fn methods(&self, filter: MethodFlags) -> Vec<&dyn MethodInterface> {
        self.methods
            .iter()
            .filter(|method| filter.is_empty() || method.flags.intersects(filter))
            .map(|method| method as &dyn MethodInterface)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_class() -> ReflectionClass {
        ReflectionClass::new("Example\\Services\\UserProcessor")
            .with_annotation(Annotation::new("Stateless").with_value("name", "Users"))
            .with_property(ReflectionProperty::new("first"))
            .with_property(ReflectionProperty::new("second"))
            .with_method(ReflectionMethod::new("injectFirst"))
            .with_method(ReflectionMethod::new("helper").with_flags(MethodFlags::PROTECTED))
            .with_method(
                ReflectionMethod::new("create")
                    .with_flags(MethodFlags::PUBLIC | MethodFlags::STATIC),
            )
    }

    #[test]
    fn test_class_metadata() {
        let class = sample_class();
        assert_eq!(class.name(), "Example\\Services\\UserProcessor");
        assert_eq!(class.short_name(), "UserProcessor");
        assert!(class.has_annotation("Stateless"));
        assert!(!class.has_annotation("Stateful"));
        assert_eq!(
            class
                .get_annotation("Stateless")
                .and_then(|annotation| annotation.get_str("name")),
            Some("Users")
        );
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let class = sample_class();

        let properties: Vec<&str> = class
            .properties()
            .iter()
            .map(|property| property.property_name())
            .collect();
        assert_eq!(properties, vec!["first", "second"]);

        let public: Vec<&str> = class
            .methods(MethodFlags::PUBLIC)
            .iter()
            .map(|method| method.method_name())
            .collect();
        assert_eq!(public, vec!["injectFirst", "create"]);

        assert_eq!(class.methods(MethodFlags::empty()).len(), 3);
    }

    #[test]
    fn test_members_know_declaring_class() {
        let class = sample_class();
        for property in class.properties() {
            assert_eq!(property.class_name(), class.name());
        }
        for method in class.methods(MethodFlags::all()) {
            assert_eq!(method.class_name(), class.name());
        }
    }
}
