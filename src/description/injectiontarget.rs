use crate::{
    deployment::NamespacedNode,
    description::util::overlay,
    reflection::{MethodInterface, PropertyInterface},
};

/// The class member a reference gets injected into
///
/// Exactly one of `target_property` and `target_method` is set for descriptors created from
/// reflection data; deployment descriptors may specify either.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InjectionTargetDescriptor {
    target_class: Option<String>,
    target_property: Option<String>,
    target_method: Option<String>,
}

impl InjectionTargetDescriptor {
    /// Create an empty injection target
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Injection into a property of its declaring class
    #[must_use]
    pub fn from_reflection_property(property: &dyn PropertyInterface) -> Self {
        InjectionTargetDescriptor {
            target_class: Some(property.class_name().to_string()),
            target_property: Some(property.property_name().to_string()),
            target_method: None,
        }
    }

    /// Injection through a method of its declaring class
    #[must_use]
    pub fn from_reflection_method(method: &dyn MethodInterface) -> Self {
        InjectionTargetDescriptor {
            target_class: Some(method.class_name().to_string()),
            target_property: None,
            target_method: Some(method.method_name().to_string()),
        }
    }

    /// Read an `<injection-target>` node
    #[must_use]
    pub fn from_deployment_descriptor(node: &NamespacedNode<'_>) -> Self {
        InjectionTargetDescriptor {
            target_class: node.child_text("injection-target-class").map(str::to_string),
            target_property: node
                .child_text("injection-target-property")
                .map(str::to_string),
            target_method: node.child_text("injection-target-method").map(str::to_string),
        }
    }

    /// Overwrite every field `other` sets
    pub fn merge(&mut self, other: &InjectionTargetDescriptor) {
        overlay(&mut self.target_class, other.target_class.as_ref());
        overlay(&mut self.target_property, other.target_property.as_ref());
        overlay(&mut self.target_method, other.target_method.as_ref());
    }

    /// Fully qualified name of the class receiving the reference
    #[must_use]
    pub fn target_class(&self) -> Option<&str> {
        self.target_class.as_deref()
    }

    /// Set the class receiving the reference
    pub fn set_target_class(&mut self, target_class: &str) {
        self.target_class = Some(target_class.to_string());
    }

    /// Property receiving the reference
    #[must_use]
    pub fn target_property(&self) -> Option<&str> {
        self.target_property.as_deref()
    }

    /// Set the property receiving the reference
    pub fn set_target_property(&mut self, target_property: &str) {
        self.target_property = Some(target_property.to_string());
    }

    /// Method receiving the reference
    #[must_use]
    pub fn target_method(&self) -> Option<&str> {
        self.target_method.as_deref()
    }

    /// Set the method receiving the reference
    pub fn set_target_method(&mut self, target_method: &str) {
        self.target_method = Some(target_method.to_string());
    }
}
