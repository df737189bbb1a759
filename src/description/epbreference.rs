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

/// A reference from a bean to another enterprise bean it depends on
///
/// Created from an `@EnterpriseBean` annotated property or method, or from an `<epb-ref>`
/// deployment descriptor node.
///
/// # Examples
///
/// ```rust
/// use beanscope::description::{EpbReferenceDescriptor, ReferenceDescriptorInterface};
/// use beanscope::reflection::{Annotation, ClassInterface, ReflectionClass, ReflectionProperty};
///
/// let class = ReflectionClass::new("Example\\Services\\UserProcessor").with_property(
///     ReflectionProperty::new("schemaProcessor")
///         .with_annotation(Annotation::new("EnterpriseBean")),
/// );
///
/// let mut reference = EpbReferenceDescriptor::new();
/// assert!(reference.from_reflection_property(class.properties()[0]).is_some());
/// assert_eq!(reference.name(), Some("env/SchemaProcessor"));
/// assert_eq!(reference.bean_interface(), Some("SchemaProcessorLocal"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EpbReferenceDescriptor {
    config: DescriptorConfig,
    name: Option<String>,
    description: Option<String>,
    bean_interface: Option<String>,
    bean_name: Option<String>,
    lookup: Option<String>,
    injection_target: Option<InjectionTargetDescriptor>,
}

impl EpbReferenceDescriptor {
    /// Create an empty descriptor using the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty descriptor using `config`
    #[must_use]
    pub fn with_config(config: DescriptorConfig) -> Self {
        EpbReferenceDescriptor {
            config,
            ..Self::default()
        }
    }

    /// Populate from an `@EnterpriseBean` annotated property.
    ///
    /// Returns `None` and leaves the descriptor untouched if the annotation is missing.
    pub fn from_reflection_property(
        &mut self,
        property: &dyn PropertyInterface,
    ) -> Option<&mut Self> {
        let annotation = property.get_annotation(annotations::ENTERPRISE_BEAN)?;

        self.injection_target = Some(InjectionTargetDescriptor::from_reflection_property(property));
        self.populate_from_annotation(annotation, &ucfirst(property.property_name()));
        Some(self)
    }

    /// Populate from an `@EnterpriseBean` annotated method.
    ///
    /// The reference name is derived from the method name without its injection prefix.
    /// Returns `None` and leaves the descriptor untouched if the annotation is missing.
    pub fn from_reflection_method(&mut self, method: &dyn MethodInterface) -> Option<&mut Self> {
        let annotation = method.get_annotation(annotations::ENTERPRISE_BEAN)?;

        let base_name =
            method_base_name(method.method_name(), &self.config.injection_method_prefix);
        self.injection_target = Some(InjectionTargetDescriptor::from_reflection_method(method));
        self.populate_from_annotation(annotation, &base_name);
        Some(self)
    }

    fn populate_from_annotation(&mut self, annotation: &Annotation, base_name: &str) {
        let name = annotation.get_str("name").unwrap_or(base_name);
        self.name = Some(self.config.reference_name(name));

        self.bean_interface = Some(
            annotation
                .get_str("beanInterface")
                .map_or_else(|| format!("{base_name}Local"), str::to_string),
        );
        self.bean_name = Some(
            annotation
                .get_str("beanName")
                .unwrap_or(base_name)
                .to_string(),
        );

        if let Some(description) = annotation.get_str("description") {
            self.description = Some(description.to_string());
        }
        if let Some(lookup) = annotation.get_str("lookup") {
            self.lookup = Some(lookup.to_string());
        }
    }

    /// Populate from an `<epb-ref>` deployment descriptor node.
    ///
    /// Returns `None` and leaves the descriptor untouched if `node` is not an `<epb-ref>` of the
    /// configured namespace. Elements missing from the node leave their fields unchanged.
    pub fn from_deployment_descriptor(&mut self, node: &Element) -> Option<&mut Self> {
        let node = node.with_namespace(&self.config.namespace);
        if !node.is("epb-ref") {
            tracing::trace!(element = node.element().name(), "not an epb-ref node, skipping");
            return None;
        }

        if let Some(name) = node.child_text("epb-ref-name") {
            self.name = Some(name.to_string());
        }
        if let Some(description) = node.child_text("description") {
            self.description = Some(description.to_string());
        }
        if let Some(bean_name) = node.child_text("epb-link") {
            self.bean_name = Some(bean_name.to_string());
        }
        if let Some(lookup) = node.child_text("lookup-name") {
            self.lookup = Some(lookup.to_string());
        }
        if let Some(bean_interface) = node
            .child_text("local")
            .or_else(|| node.child_text("remote"))
        {
            self.bean_interface = Some(bean_interface.to_string());
        }
        if let Some(target) = node.child("injection-target") {
            self.injection_target =
                Some(InjectionTargetDescriptor::from_deployment_descriptor(&target));
        }

        Some(self)
    }

    /// Fold `other` into this descriptor; every field `other` sets wins
    pub fn merge(&mut self, other: &EpbReferenceDescriptor) {
        overlay(&mut self.name, other.name.as_ref());
        overlay(&mut self.description, other.description.as_ref());
        overlay(&mut self.bean_interface, other.bean_interface.as_ref());
        overlay(&mut self.bean_name, other.bean_name.as_ref());
        overlay(&mut self.lookup, other.lookup.as_ref());

        if let Some(target) = &other.injection_target {
            match &mut self.injection_target {
                Some(existing) => existing.merge(target),
                None => self.injection_target = Some(target.clone()),
            }
        }
    }

    /// The configuration this descriptor populates itself with
    #[must_use]
    pub fn config(&self) -> &DescriptorConfig {
        &self.config
    }

    /// Set the reference name
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Set the description
    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    /// Business interface of the referenced bean, e.g. `UserProcessorLocal`
    #[must_use]
    pub fn bean_interface(&self) -> Option<&str> {
        self.bean_interface.as_deref()
    }

    /// Set the business interface of the referenced bean
    pub fn set_bean_interface(&mut self, bean_interface: &str) {
        self.bean_interface = Some(bean_interface.to_string());
    }

    /// Name of the referenced bean
    #[must_use]
    pub fn bean_name(&self) -> Option<&str> {
        self.bean_name.as_deref()
    }

    /// Set the name of the referenced bean
    pub fn set_bean_name(&mut self, bean_name: &str) {
        self.bean_name = Some(bean_name.to_string());
    }

    /// Set the naming directory lookup
    pub fn set_lookup(&mut self, lookup: &str) {
        self.lookup = Some(lookup.to_string());
    }

    /// Set the member the reference gets injected into
    pub fn set_injection_target(&mut self, injection_target: InjectionTargetDescriptor) {
        self.injection_target = Some(injection_target);
    }
}

impl ReferenceDescriptorInterface for EpbReferenceDescriptor {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::{
        ClassInterface, MethodFlags, ReflectionClass, ReflectionMethod, ReflectionProperty,
    };

    const TEST_CLASS: &str = "Example\\Tests\\EpbReferenceDescriptorTest";

    fn class_with_method(annotation: Annotation) -> ReflectionClass {
        ReflectionClass::new(TEST_CLASS)
            .with_method(
                ReflectionMethod::new("injectDummyEnterpriseBean").with_annotation(annotation),
            )
    }

    #[test]
    fn test_from_reflection_method() {
        let annotation = Annotation::new(annotations::ENTERPRISE_BEAN)
            .with_value("name", "SampleProcessor")
            .with_value("description", "A Description")
            .with_value("beanInterface", "SampleProcessorLocal")
            .with_value("beanName", "SampleProcessor")
            .with_value("lookup", "php:global/example/SampleProcessor");
        let class = class_with_method(annotation);

        let mut descriptor = EpbReferenceDescriptor::new();
        assert!(descriptor
            .from_reflection_method(class.methods(MethodFlags::PUBLIC)[0])
            .is_some());

        assert_eq!(descriptor.name(), Some("env/SampleProcessor"));
        assert_eq!(descriptor.description(), Some("A Description"));
        assert_eq!(descriptor.bean_interface(), Some("SampleProcessorLocal"));
        assert_eq!(descriptor.bean_name(), Some("SampleProcessor"));
        assert_eq!(descriptor.lookup(), Some("php:global/example/SampleProcessor"));
    }

    #[test]
    fn test_from_reflection_method_and_annotation_without_attributes() {
        let class = class_with_method(Annotation::new(annotations::ENTERPRISE_BEAN));

        let mut descriptor = EpbReferenceDescriptor::new();
        descriptor.from_reflection_method(class.methods(MethodFlags::PUBLIC)[0]);

        assert_eq!(descriptor.name(), Some("env/DummyEnterpriseBean"));
        assert_eq!(descriptor.bean_interface(), Some("DummyEnterpriseBeanLocal"));
        assert_eq!(descriptor.bean_name(), Some("DummyEnterpriseBean"));
        assert_eq!(descriptor.description(), None);
        assert_eq!(descriptor.lookup(), None);

        let target = descriptor.injection_target().unwrap();
        assert_eq!(target.target_class(), Some(TEST_CLASS));
        assert_eq!(target.target_method(), Some("injectDummyEnterpriseBean"));
        assert_eq!(target.target_property(), None);
    }

    #[test]
    fn test_from_reflection_property_and_annotation_with_some_attributes() {
        let annotation = Annotation::new(annotations::ENTERPRISE_BEAN)
            .with_value("description", "A Description")
            .with_value("beanInterface", "DummyEnterpriseBeanLocal")
            .with_value("beanName", "DummyEnterpriseBean")
            .with_value("lookup", "php:global/example/DummyEnterpriseBean");
        let class = ReflectionClass::new(TEST_CLASS).with_property(
            ReflectionProperty::new("dummyEnterpriseBean").with_annotation(annotation),
        );

        let mut descriptor = EpbReferenceDescriptor::new();
        descriptor.from_reflection_property(class.properties()[0]);

        assert_eq!(descriptor.name(), Some("env/DummyEnterpriseBean"));
        assert_eq!(descriptor.bean_interface(), Some("DummyEnterpriseBeanLocal"));
        assert_eq!(descriptor.bean_name(), Some("DummyEnterpriseBean"));
        assert_eq!(descriptor.description(), Some("A Description"));
        assert_eq!(descriptor.lookup(), Some("php:global/example/DummyEnterpriseBean"));
        assert_eq!(
            descriptor.injection_target().and_then(InjectionTargetDescriptor::target_property),
            Some("dummyEnterpriseBean")
        );
    }

    #[test]
    fn test_from_member_without_annotation() {
        let class = ReflectionClass::new(TEST_CLASS)
            .with_property(
                ReflectionProperty::new("dummyResource")
                    .with_annotation(Annotation::new("Resource")),
            )
            .with_method(ReflectionMethod::new("injectDummyResource"));

        let mut descriptor = EpbReferenceDescriptor::new();
        assert!(descriptor.from_reflection_property(class.properties()[0]).is_none());
        assert!(descriptor
            .from_reflection_method(class.methods(MethodFlags::PUBLIC)[0])
            .is_none());
        assert_eq!(descriptor, EpbReferenceDescriptor::new());
    }

    #[test]
    fn test_from_deployment_descriptor() {
        let node = Element::parse(
            r#"<epb-ref xmlns="http://www.appserver.io/appserver">
                   <epb-ref-name>env/UserProcessor</epb-ref-name>
                   <description>Some Description</description>
                   <epb-link>UserProcessor</epb-link>
                   <lookup-name>php:global/example/UserProcessor</lookup-name>
                   <remote>UserProcessorRemote</remote>
                   <injection-target>
                       <injection-target-class>Example\Services\ASampleProcessor</injection-target-class>
                       <injection-target-property>userProcessor</injection-target-property>
                   </injection-target>
               </epb-ref>"#,
        )
        .unwrap();

        let mut descriptor = EpbReferenceDescriptor::new();
        assert!(descriptor.from_deployment_descriptor(&node).is_some());
        assert_eq!(descriptor.name(), Some("env/UserProcessor"));
        assert_eq!(descriptor.description(), Some("Some Description"));
        assert_eq!(descriptor.bean_name(), Some("UserProcessor"));
        assert_eq!(descriptor.lookup(), Some("php:global/example/UserProcessor"));
        assert_eq!(descriptor.bean_interface(), Some("UserProcessorRemote"));
        assert_eq!(
            descriptor.injection_target().and_then(InjectionTargetDescriptor::target_property),
            Some("userProcessor")
        );
    }

    #[test]
    fn test_from_deployment_descriptor_invalid() {
        let node = Element::parse(
            r#"<message-driven xmlns="http://www.appserver.io/appserver">
                   <epb-name>ImportReceiver</epb-name>
               </message-driven>"#,
        )
        .unwrap();

        let mut descriptor = EpbReferenceDescriptor::new();
        assert!(descriptor.from_deployment_descriptor(&node).is_none());
        assert_eq!(descriptor.name(), None);
    }

    #[test]
    fn test_merge() {
        let mut descriptor = EpbReferenceDescriptor::new();
        descriptor.set_name("env/UserProcessor");
        descriptor.set_description("Some Description");
        descriptor.set_bean_name("UserProcessor");

        let mut other = EpbReferenceDescriptor::new();
        other.set_name("env/MyUserProcessor");
        other.set_lookup("php:global/example/MyUserProcessor");

        descriptor.merge(&other);
        assert_eq!(descriptor.name(), Some("env/MyUserProcessor"));
        assert_eq!(descriptor.description(), Some("Some Description"));
        assert_eq!(descriptor.bean_name(), Some("UserProcessor"));
        assert_eq!(descriptor.lookup(), Some("php:global/example/MyUserProcessor"));
    }

    #[test]
    fn test_custom_config() {
        let config = DescriptorConfig {
            reference_directory: "beans".to_string(),
            injection_method_prefix: "set".to_string(),
            ..DescriptorConfig::default()
        };
        let class = ReflectionClass::new(TEST_CLASS).with_method(
            ReflectionMethod::new("setMailer")
                .with_annotation(Annotation::new(annotations::ENTERPRISE_BEAN)),
        );

        let mut descriptor = EpbReferenceDescriptor::with_config(config);
        descriptor.from_reflection_method(class.methods(MethodFlags::PUBLIC)[0]);
        assert_eq!(descriptor.name(), Some("beans/Mailer"));
        assert_eq!(descriptor.bean_name(), Some("Mailer"));
    }
}
