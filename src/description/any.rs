//! A bean descriptor of any kind, for sources whose kind is not known up front.

use crate::{
    config::DescriptorConfig,
    deployment::Element,
    description::{
        BeanDescriptor, BeanDescriptorInterface, BeanKind, MessageDrivenBeanDescriptor,
        SessionBeanDescriptor,
    },
    reflection::{Annotation, ClassInterface},
    Error, Result,
};

/// One of the concrete bean descriptors
///
/// Built by probing every [`BeanKind`] in turn against a class or deployment descriptor node;
/// the first kind that accepts the source wins.
///
/// # Examples
///
/// ```rust
/// use beanscope::prelude::*;
///
/// let class = ReflectionClass::new("Example\\MessageBeans\\ImportReceiver")
///     .with_annotation(Annotation::new("MessageDriven"));
///
/// let descriptor = AnyBeanDescriptor::from_reflection_class(&class, &DescriptorConfig::default())
///     .unwrap();
/// assert_eq!(descriptor.kind(), BeanKind::MessageDriven);
/// assert_eq!(descriptor.name(), Some("ImportReceiver"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyBeanDescriptor {
    /// A stateless, stateful or singleton session bean
    Session(SessionBeanDescriptor),
    /// A message driven bean
    MessageDriven(MessageDrivenBeanDescriptor),
}

impl AnyBeanDescriptor {
    /// Create an empty descriptor of `kind` using `config`
    #[must_use]
    pub fn new(kind: BeanKind, config: DescriptorConfig) -> Self {
        match kind.session_type() {
            Some(session_type) => {
                AnyBeanDescriptor::Session(SessionBeanDescriptor::with_config(session_type, config))
            }
            None => AnyBeanDescriptor::MessageDriven(MessageDrivenBeanDescriptor::with_config(
                config,
            )),
        }
    }

    /// Build a descriptor from the first bean kind whose annotation `class` carries.
    ///
    /// Returns `None` if `class` is not a bean at all.
    #[must_use]
    pub fn from_reflection_class(
        class: &dyn ClassInterface,
        config: &DescriptorConfig,
    ) -> Option<Self> {
        for kind in BeanKind::all() {
            let mut descriptor = AnyBeanDescriptor::new(kind, config.clone());
            if BeanDescriptorInterface::from_reflection_class(&mut descriptor, class).is_some() {
                return Some(descriptor);
            }
        }

        tracing::trace!(class_name = class.name(), "class is not a bean of any kind");
        None
    }

    /// Build a descriptor from the first bean kind that accepts `node`.
    ///
    /// Returns `None` if `node` is neither a `<session>` of a known session type nor a
    /// `<message-driven>` node.
    #[must_use]
    pub fn from_deployment_descriptor(node: &Element, config: &DescriptorConfig) -> Option<Self> {
        for kind in BeanKind::all() {
            let mut descriptor = AnyBeanDescriptor::new(kind, config.clone());
            if BeanDescriptorInterface::from_deployment_descriptor(&mut descriptor, node)
                .is_some()
            {
                return Some(descriptor);
            }
        }

        tracing::trace!(element = node.name(), "node is not a bean of any kind");
        None
    }

    /// The session bean descriptor, if this is one
    #[must_use]
    pub fn as_session(&self) -> Option<&SessionBeanDescriptor> {
        match self {
            AnyBeanDescriptor::Session(descriptor) => Some(descriptor),
            AnyBeanDescriptor::MessageDriven(_) => None,
        }
    }

    /// The message driven bean descriptor, if this is one
    #[must_use]
    pub fn as_message_driven(&self) -> Option<&MessageDrivenBeanDescriptor> {
        match self {
            AnyBeanDescriptor::Session(_) => None,
            AnyBeanDescriptor::MessageDriven(descriptor) => Some(descriptor),
        }
    }
}

impl From<SessionBeanDescriptor> for AnyBeanDescriptor {
    fn from(descriptor: SessionBeanDescriptor) -> Self {
        AnyBeanDescriptor::Session(descriptor)
    }
}

impl From<MessageDrivenBeanDescriptor> for AnyBeanDescriptor {
    fn from(descriptor: MessageDrivenBeanDescriptor) -> Self {
        AnyBeanDescriptor::MessageDriven(descriptor)
    }
}

impl BeanDescriptorInterface for AnyBeanDescriptor {
    fn bean(&self) -> &BeanDescriptor {
        match self {
            AnyBeanDescriptor::Session(descriptor) => descriptor.bean(),
            AnyBeanDescriptor::MessageDriven(descriptor) => descriptor.bean(),
        }
    }

    fn bean_mut(&mut self) -> &mut BeanDescriptor {
        match self {
            AnyBeanDescriptor::Session(descriptor) => descriptor.bean_mut(),
            AnyBeanDescriptor::MessageDriven(descriptor) => descriptor.bean_mut(),
        }
    }

    fn kind(&self) -> BeanKind {
        match self {
            AnyBeanDescriptor::Session(descriptor) => descriptor.kind(),
            AnyBeanDescriptor::MessageDriven(descriptor) => descriptor.kind(),
        }
    }

    fn new_annotation_instance<'c>(&self, class: &'c dyn ClassInterface) -> Option<&'c Annotation> {
        match self {
            AnyBeanDescriptor::Session(descriptor) => descriptor.new_annotation_instance(class),
            AnyBeanDescriptor::MessageDriven(descriptor) => {
                descriptor.new_annotation_instance(class)
            }
        }
    }

    fn from_reflection_class(&mut self, class: &dyn ClassInterface) -> Option<&mut Self> {
        let matched = match self {
            AnyBeanDescriptor::Session(descriptor) => {
                descriptor.from_reflection_class(class).is_some()
            }
            AnyBeanDescriptor::MessageDriven(descriptor) => {
                descriptor.from_reflection_class(class).is_some()
            }
        };
        matched.then_some(self)
    }

    fn from_deployment_descriptor(&mut self, node: &Element) -> Option<&mut Self> {
        let matched = match self {
            AnyBeanDescriptor::Session(descriptor) => {
                descriptor.from_deployment_descriptor(node).is_some()
            }
            AnyBeanDescriptor::MessageDriven(descriptor) => {
                descriptor.from_deployment_descriptor(node).is_some()
            }
        };
        matched.then_some(self)
    }

    /// Fold `other` into this descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeConflict`] if the class names differ and [`Error::KindConflict`]
    /// if both describe the same class but as different bean kinds.
    fn merge(&mut self, other: &Self) -> Result<()> {
        if self.class_name() != other.class_name() {
            return Err(Error::MergeConflict {
                this: self.class_name().unwrap_or_default().to_string(),
                other: other.class_name().unwrap_or_default().to_string(),
            });
        }

        match (self, other) {
            (AnyBeanDescriptor::Session(this), AnyBeanDescriptor::Session(other))
                if this.session_type() == other.session_type() =>
            {
                this.merge(other)
            }
            (AnyBeanDescriptor::MessageDriven(this), AnyBeanDescriptor::MessageDriven(other)) => {
                this.merge(other)
            }
            (this, other) => Err(Error::KindConflict {
                class_name: this.class_name().unwrap_or_default().to_string(),
                this: this.kind(),
                other: other.kind(),
            }),
        }
    }
}
