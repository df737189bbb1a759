//! Name-keyed collection of the bean descriptors of one application.

use std::collections::{btree_map, BTreeMap};

use crate::{
    config::DescriptorConfig,
    deployment::Element,
    description::{AnyBeanDescriptor, BeanDescriptorInterface},
    reflection::ClassInterface,
    Result,
};

/// All bean descriptors of an application, keyed by bean name
///
/// Descriptors with the same name are merged on [`add`](DescriptorRegistry::add), so adding the
/// annotation derived descriptors first and the deployment descriptor ones afterwards lets the
/// deployment descriptor override the annotations.
///
/// # Examples
///
/// ```rust
/// use beanscope::prelude::*;
///
/// let classes = vec![
///     ReflectionClass::new("Example\\Services\\UserProcessor")
///         .with_annotation(Annotation::new("Stateless")),
///     ReflectionClass::new("Example\\Entities\\User"),
/// ];
///
/// let mut registry = DescriptorRegistry::new();
/// registry.from_reflection_classes(classes.iter()).unwrap();
///
/// let xml = r#"<epb xmlns="http://www.appserver.io/appserver">
///     <enterprise-beans>
///         <session>
///             <session-type>Stateless</session-type>
///             <epb-name>UserProcessor</epb-name>
///             <epb-class>Example\Services\UserProcessor</epb-class>
///             <local>UserProcessorLocalInterface</local>
///         </session>
///     </enterprise-beans>
/// </epb>"#;
/// registry.from_deployment_descriptor(&Element::parse(xml).unwrap()).unwrap();
///
/// assert_eq!(registry.len(), 1);
/// let bean = registry.get("UserProcessor").and_then(AnyBeanDescriptor::as_session).unwrap();
/// assert_eq!(bean.local(), Some("UserProcessorLocalInterface"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptorRegistry {
    config: DescriptorConfig,
    descriptors: BTreeMap<String, AnyBeanDescriptor>,
}

impl DescriptorRegistry {
    /// Create an empty registry using the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose descriptors use `config`
    #[must_use]
    pub fn with_config(config: DescriptorConfig) -> Self {
        DescriptorRegistry {
            config,
            descriptors: BTreeMap::new(),
        }
    }

    /// The configuration new descriptors are created with
    #[must_use]
    pub fn config(&self) -> &DescriptorConfig {
        &self.config
    }

    /// Add `descriptor`, merging it into an already registered descriptor of the same name.
    ///
    /// Descriptors without a name cannot be looked up and are ignored.
    ///
    /// # Errors
    ///
    /// Propagates the merge fault if a descriptor of the same name describes another class or
    /// another bean kind. The registered descriptor is left unchanged in that case.
    pub fn add(&mut self, descriptor: AnyBeanDescriptor) -> Result<()> {
        let Some(name) = descriptor.name().map(str::to_string) else {
            tracing::warn!(
                class_name = descriptor.class_name().unwrap_or_default(),
                "ignoring bean descriptor without a name"
            );
            return Ok(());
        };

        match self.descriptors.entry(name) {
            btree_map::Entry::Occupied(mut entry) => {
                tracing::debug!(
                    name = entry.key().as_str(),
                    "merging bean descriptor into registry"
                );
                entry.get_mut().merge(&descriptor)
            }
            btree_map::Entry::Vacant(entry) => {
                tracing::debug!(
                    name = entry.key().as_str(),
                    kind = %descriptor.kind(),
                    "registering bean descriptor"
                );
                entry.insert(descriptor);
                Ok(())
            }
        }
    }

    /// Add a descriptor for every class that is a bean of some kind.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first merge fault.
    pub fn from_reflection_classes<'a, I, C>(&mut self, classes: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a C>,
        C: ClassInterface + 'a,
    {
        for class in classes {
            if let Some(descriptor) = AnyBeanDescriptor::from_reflection_class(class, &self.config)
            {
                self.add(descriptor)?;
            }
        }
        Ok(())
    }

    /// Add a descriptor for every bean of an `<epb>` deployment descriptor.
    ///
    /// Reads the `<session>` and `<message-driven>` children of `<enterprise-beans>`; other
    /// children, and roots other than `<epb>`, are skipped.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first merge fault.
    pub fn from_deployment_descriptor(&mut self, root: &Element) -> Result<()> {
        let namespace = self.config.namespace.clone();
        let root_node = root.with_namespace(&namespace);
        if !root_node.is("epb") {
            tracing::trace!(element = root.name(), "not an epb deployment descriptor, skipping");
            return Ok(());
        }

        let Some(beans) = root_node.child("enterprise-beans") else {
            return Ok(());
        };

        for node in beans.elements() {
            match AnyBeanDescriptor::from_deployment_descriptor(node.element(), &self.config) {
                Some(descriptor) => self.add(descriptor)?,
                None => tracing::debug!(
                    element = node.element().name(),
                    "skipping unknown enterprise bean node"
                ),
            }
        }
        Ok(())
    }

    /// The descriptor registered under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AnyBeanDescriptor> {
        self.descriptors.get(name)
    }

    /// Mutable access to the descriptor registered under `name`
    pub fn get_mut(&mut self, name: &str) -> Option<&mut AnyBeanDescriptor> {
        self.descriptors.get_mut(name)
    }

    /// Whether a descriptor is registered under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Iterate over the registered descriptors, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyBeanDescriptor)> {
        self.descriptors
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// Number of registered descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no descriptor is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a DescriptorRegistry {
    type Item = (&'a String, &'a AnyBeanDescriptor);
    type IntoIter = btree_map::Iter<'a, String, AnyBeanDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
