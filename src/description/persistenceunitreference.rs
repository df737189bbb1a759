use crate::{
    config::DescriptorConfig,
    deployment::Element,
    description::{
        annotations,
        util::{method_base_name, overlay, ucfirst},
        InjectionTargetDescriptor, ReferenceDescriptorInterface,
    },
    reflection::{Annotation, MethodInterface, PropertyInterface},
};

/// A reference from a bean to a persistence unit
///
/// Created from a `@PersistenceUnit` annotated property or method, or from a
/// `<persistence-unit-ref>` deployment descriptor node. If no unit name is given, the
/// capitalised member name is used.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistenceUnitReferenceDescriptor {
    config: DescriptorConfig,
    name: Option<String>,
    description: Option<String>,
    unit_name: Option<String>,
    lookup: Option<String>,
    injection_target: Option<InjectionTargetDescriptor>,
}

impl PersistenceUnitReferenceDescriptor {
    /// Create an empty descriptor using the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty descriptor using `config`
    #[must_use]
    pub fn with_config(config: DescriptorConfig) -> Self {
        PersistenceUnitReferenceDescriptor {
            config,
            ..Self::default()
        }
    }

    /// Populate from a `@PersistenceUnit` annotated property, `None` if the annotation is missing
    pub fn from_reflection_property(
        &mut self,
        property: &dyn PropertyInterface,
    ) -> Option<&mut Self> {
        let annotation = property.get_annotation(annotations::PERSISTENCE_UNIT)?;

        self.injection_target = Some(InjectionTargetDescriptor::from_reflection_property(property));
        self.populate_from_annotation(annotation, &ucfirst(property.property_name()));
        Some(self)
    }

    /// Populate from a `@PersistenceUnit` annotated method, `None` if the annotation is missing
    pub fn from_reflection_method(&mut self, method: &dyn MethodInterface) -> Option<&mut Self> {
        let annotation = method.get_annotation(annotations::PERSISTENCE_UNIT)?;

        let base_name =
            method_base_name(method.method_name(), &self.config.injection_method_prefix);
        self.injection_target = Some(InjectionTargetDescriptor::from_reflection_method(method));
        self.populate_from_annotation(annotation, &base_name);
        Some(self)
    }

    fn populate_from_annotation(&mut self, annotation: &Annotation, base_name: &str) {
        let name = annotation.get_str("name").unwrap_or(base_name);
        self.name = Some(self.config.reference_name(name));
        self.unit_name = Some(annotation.get_str("unitName").unwrap_or(base_name).to_string());

        if let Some(description) = annotation.get_str("description") {
            self.description = Some(description.to_string());
        }
        if let Some(lookup) = annotation.get_str("lookup") {
            self.lookup = Some(lookup.to_string());
        }
    }

    /// Populate from a `<persistence-unit-ref>` deployment descriptor node, `None` for any other
    /// node
    pub fn from_deployment_descriptor(&mut self, node: &Element) -> Option<&mut Self> {
        let node = node.with_namespace(&self.config.namespace);
        if !node.is("persistence-unit-ref") {
            tracing::trace!(
                element = node.element().name(),
                "not a persistence-unit-ref node, skipping"
            );
            return None;
        }

        if let Some(name) = node.child_text("persistence-unit-ref-name") {
            self.name = Some(name.to_string());
        }
        if let Some(description) = node.child_text("description") {
            self.description = Some(description.to_string());
        }
        if let Some(unit_name) = node.child_text("persistence-unit-name") {
            self.unit_name = Some(unit_name.to_string());
        }
        if let Some(lookup) = node.child_text("lookup-name") {
            self.lookup = Some(lookup.to_string());
        }
        if let Some(target) = node.child("injection-target") {
            self.injection_target =
                Some(InjectionTargetDescriptor::from_deployment_descriptor(&target));
        }

        Some(self)
    }

    /// Fold `other` into this descriptor; every field `other` sets wins
    pub fn merge(&mut self, other: &PersistenceUnitReferenceDescriptor) {
        overlay(&mut self.name, other.name.as_ref());
        overlay(&mut self.description, other.description.as_ref());
        overlay(&mut self.unit_name, other.unit_name.as_ref());
        overlay(&mut self.lookup, other.lookup.as_ref());

        if let Some(target) = &other.injection_target {
            match &mut self.injection_target {
                Some(existing) => existing.merge(target),
                None => self.injection_target = Some(target.clone()),
            }
        }
    }

    /// Set the reference name
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Name of the referenced persistence unit
    #[must_use]
    pub fn unit_name(&self) -> Option<&str> {
        self.unit_name.as_deref()
    }

    /// Set the name of the referenced persistence unit
    pub fn set_unit_name(&mut self, unit_name: &str) {
        self.unit_name = Some(unit_name.to_string());
    }
}

impl ReferenceDescriptorInterface for PersistenceUnitReferenceDescriptor {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn lookup(&self) -> Option<&str> {
        self.lookup.as_deref()
    }

    fn injection_target(&self) -> Option<&InjectionTargetDescriptor> {
        self.injection_target.as_ref()
    }
}
