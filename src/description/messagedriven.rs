use crate::{
    config::DescriptorConfig,
    deployment::Element,
    description::{annotations, BeanDescriptor, BeanDescriptorInterface, BeanKind},
    reflection::{Annotation, ClassInterface},
    Result,
};

/// Descriptor of a message driven bean
///
/// Matches classes annotated with `@MessageDriven` and `<message-driven>` deployment
/// descriptor nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageDrivenBeanDescriptor {
    bean: BeanDescriptor,
}

impl MessageDrivenBeanDescriptor {
    /// Create an empty descriptor using the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty descriptor using `config`
    #[must_use]
    pub fn with_config(config: DescriptorConfig) -> Self {
        MessageDrivenBeanDescriptor {
            bean: BeanDescriptor::with_config(config),
        }
    }
}

impl BeanDescriptorInterface for MessageDrivenBeanDescriptor {
    fn bean(&self) -> &BeanDescriptor {
        &self.bean
    }

    fn bean_mut(&mut self) -> &mut BeanDescriptor {
        &mut self.bean
    }

    fn kind(&self) -> BeanKind {
        BeanKind::MessageDriven
    }

    fn new_annotation_instance<'c>(&self, class: &'c dyn ClassInterface) -> Option<&'c Annotation> {
        class.get_annotation(annotations::MESSAGE_DRIVEN)
    }

    fn from_reflection_class(&mut self, class: &dyn ClassInterface) -> Option<&mut Self> {
        let Some(annotation) = self.new_annotation_instance(class) else {
            tracing::trace!(class_name = class.name(), "class is not a message driven bean");
            return None;
        };

        self.bean.from_reflection_class(class, annotation);

        tracing::debug!(
            class_name = class.name(),
            name = self.bean.name().unwrap_or_default(),
            references = self.bean.references().len(),
            "populated message driven bean descriptor from reflection"
        );

        Some(self)
    }

    fn from_deployment_descriptor(&mut self, node: &Element) -> Option<&mut Self> {
        if !node
            .with_namespace(&self.bean.config().namespace)
            .is("message-driven")
        {
            tracing::trace!(element = node.name(), "not a message driven bean node, skipping");
            return None;
        }

        self.bean.from_deployment_descriptor(node);

        tracing::debug!(
            class_name = self.bean.class_name().unwrap_or_default(),
            name = self.bean.name().unwrap_or_default(),
            references = self.bean.references().len(),
            "populated message driven bean descriptor from deployment descriptor"
        );

        Some(self)
    }

    fn merge(&mut self, other: &Self) -> Result<()> {
        self.bean.merge(&other.bean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::ReflectionClass;

    const MESSAGE_DRIVEN_XML: &str = r#"<message-driven xmlns="http://www.appserver.io/appserver">
        <epb-name>ImportReceiver</epb-name>
        <epb-class>Example\MessageBeans\ImportReceiver</epb-class>
        <res-ref>
            <res-ref-name>env/ImportChunkProcessor</res-ref-name>
        </res-ref>
    </message-driven>"#;

    #[test]
    fn test_from_reflection_class() {
        let class = ReflectionClass::new("Example\\MessageBeans\\ImportReceiver").with_annotation(
            Annotation::new(annotations::MESSAGE_DRIVEN).with_value("name", "Importer"),
        );

        let mut descriptor = MessageDrivenBeanDescriptor::new();
        assert!(descriptor.from_reflection_class(&class).is_some());
        assert_eq!(descriptor.kind(), BeanKind::MessageDriven);
        assert_eq!(descriptor.name(), Some("Importer"));
        assert_eq!(descriptor.class_name(), Some("Example\\MessageBeans\\ImportReceiver"));
    }

    #[test]
    fn test_from_session_bean_class() {
        let class = ReflectionClass::new("Example\\Services\\UserProcessor")
            .with_annotation(Annotation::new(annotations::STATELESS));

        let mut descriptor = MessageDrivenBeanDescriptor::new();
        assert!(descriptor.from_reflection_class(&class).is_none());
        assert_eq!(descriptor, MessageDrivenBeanDescriptor::new());
    }

    #[test]
    fn test_from_deployment_descriptor() {
        let node = Element::parse(MESSAGE_DRIVEN_XML).unwrap();

        let mut descriptor = MessageDrivenBeanDescriptor::new();
        assert!(descriptor.from_deployment_descriptor(&node).is_some());
        assert_eq!(descriptor.name(), Some("ImportReceiver"));
        assert_eq!(descriptor.class_name(), Some("Example\\MessageBeans\\ImportReceiver"));
        assert!(descriptor.res_references().contains_key("env/ImportChunkProcessor"));
    }

    #[test]
    fn test_from_session_deployment_descriptor() {
        let node = Element::parse(
            r#"<session xmlns="http://www.appserver.io/appserver">
                   <session-type>Stateless</session-type>
                   <epb-name>UserProcessor</epb-name>
               </session>"#,
        )
        .unwrap();

        let mut descriptor = MessageDrivenBeanDescriptor::new();
        assert!(descriptor.from_deployment_descriptor(&node).is_none());
        assert_eq!(descriptor.name(), None);
    }
}
