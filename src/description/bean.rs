//! The state and behaviour all bean descriptors share.

use crate::{
    config::DescriptorConfig,
    deployment::Element,
    description::{
        BeanKind, DescriptorReferences, EpbReferenceDescriptor, EpbReferenceMap,
        PersistenceUnitReferenceDescriptor, PersistenceUnitReferenceMap, Reference,
        ResReferenceDescriptor, ResReferenceMap,
    },
    reflection::{Annotation, ClassInterface},
    Error, Result,
};

/// Name, class name and references of a bean
///
/// Concrete bean descriptors embed one `BeanDescriptor` and expose it through
/// [`BeanDescriptorInterface`]. The class name is the merge key: only descriptors of the same
/// class can be merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeanDescriptor {
    config: DescriptorConfig,
    name: Option<String>,
    class_name: Option<String>,
    references: DescriptorReferences,
}

impl BeanDescriptor {
    /// Create an empty descriptor using the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty descriptor using `config`
    #[must_use]
    pub fn with_config(config: DescriptorConfig) -> Self {
        BeanDescriptor {
            config,
            ..Self::default()
        }
    }

    /// The configuration this descriptor populates itself with
    #[must_use]
    pub fn config(&self) -> &DescriptorConfig {
        &self.config
    }

    /// Bean name, used to register the bean in the naming directory
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the bean name
    pub fn set_name(&mut self, name: &str) {
        self.name = Some(name.to_string());
    }

    /// Fully qualified class name of the bean
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Set the fully qualified class name of the bean
    pub fn set_class_name(&mut self, class_name: &str) {
        self.class_name = Some(class_name.to_string());
    }

    /// The references of this bean
    #[must_use]
    pub fn references(&self) -> &DescriptorReferences {
        &self.references
    }

    /// Mutable access to the references of this bean
    pub fn references_mut(&mut self) -> &mut DescriptorReferences {
        &mut self.references
    }

    /// Populate from a class and the bean annotation found on it.
    ///
    /// The class name is taken from `class`. The bean name is the trimmed `name` attribute of
    /// `annotation`, or the short class name if the attribute is missing or blank. References are
    /// read from the annotated members of `class` afterwards.
    pub fn from_reflection_class(&mut self, class: &dyn ClassInterface, annotation: &Annotation) {
        self.class_name = Some(class.name().to_string());
        self.name = Some(
            annotation
                .get_str("name")
                .unwrap_or_else(|| class.short_name())
                .to_string(),
        );

        self.references.from_reflection_class(class, &self.config);
    }

    /// Populate from the `<epb-class>`, `<epb-name>` and reference children of `node`.
    ///
    /// Elements missing from `node` leave their fields unchanged, so a descriptor can be
    /// populated from a partial overlay.
    pub fn from_deployment_descriptor(&mut self, node: &Element) {
        let node = node.with_namespace(&self.config.namespace);

        if let Some(class_name) = node.child_text("epb-class") {
            self.class_name = Some(class_name.to_string());
        }
        if let Some(name) = node.child_text("epb-name") {
            self.name = Some(name.to_string());
        }

        self.references.from_deployment_descriptor(&node, &self.config);
    }

    /// Fold `other` into this descriptor.
    ///
    /// A non-empty name of `other` replaces this name; every reference of `other` replaces the
    /// same-named reference of the same flavour.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeConflict`] if the class names differ. This descriptor is left
    /// unchanged in that case.
    pub fn merge(&mut self, other: &BeanDescriptor) -> Result<()> {
        if self.class_name != other.class_name {
            return Err(Error::MergeConflict {
                this: self.class_name.clone().unwrap_or_default(),
                other: other.class_name.clone().unwrap_or_default(),
            });
        }

        if let Some(name) = other.name.as_deref().filter(|name| !name.is_empty()) {
            self.name = Some(name.to_string());
        }

        self.references.merge(&other.references);

        tracing::debug!(
            class_name = self.class_name.as_deref().unwrap_or_default(),
            name = self.name.as_deref().unwrap_or_default(),
            references = self.references.len(),
            "merged bean descriptor"
        );

        Ok(())
    }
}

/// The public contract of every bean descriptor
///
/// Implementors embed a [`BeanDescriptor`] and supply the kind specific parts: which annotation
/// marks a matching class, which deployment descriptor nodes they accept, and how their extra
/// fields merge. Name, class name and reference handling are delegated to the embedded
/// descriptor.
pub trait BeanDescriptorInterface {
    /// The embedded common descriptor
    fn bean(&self) -> &BeanDescriptor;

    /// Mutable access to the embedded common descriptor
    fn bean_mut(&mut self) -> &mut BeanDescriptor;

    /// The bean kind this descriptor describes
    fn kind(&self) -> BeanKind;

    /// Return the annotation that marks `class` as a bean of this kind, if any
    fn new_annotation_instance<'c>(&self, class: &'c dyn ClassInterface) -> Option<&'c Annotation>;

    /// Populate from a reflected class.
    ///
    /// Returns `None` and leaves the descriptor untouched if the class does not carry the
    /// annotation of this bean kind.
    fn from_reflection_class(&mut self, class: &dyn ClassInterface) -> Option<&mut Self>;

    /// Populate from a deployment descriptor node.
    ///
    /// Returns `None` and leaves the descriptor untouched if the node describes a different kind
    /// of bean.
    fn from_deployment_descriptor(&mut self, node: &Element) -> Option<&mut Self>;

    /// Fold `other` into this descriptor; `other` wins on every field it sets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeConflict`] if the class names differ and [`Error::KindConflict`]
    /// if the same class is described as two different bean kinds.
    fn merge(&mut self, other: &Self) -> Result<()>;

    /// Bean name
    fn name(&self) -> Option<&str> {
        self.bean().name()
    }

    /// Set the bean name
    fn set_name(&mut self, name: &str) {
        self.bean_mut().set_name(name);
    }

    /// Fully qualified class name
    fn class_name(&self) -> Option<&str> {
        self.bean().class_name()
    }

    /// Set the fully qualified class name
    fn set_class_name(&mut self, class_name: &str) {
        self.bean_mut().set_class_name(class_name);
    }

    /// Add an EPB reference, replacing one with the same name
    fn add_epb_reference(&mut self, reference: EpbReferenceDescriptor) {
        self.bean_mut().references_mut().add_epb_reference(reference);
    }

    /// Replace all EPB references
    fn set_epb_references(&mut self, references: EpbReferenceMap) {
        self.bean_mut().references_mut().set_epb_references(references);
    }

    /// EPB references by name
    fn epb_references(&self) -> &EpbReferenceMap {
        self.bean().references().epb_references()
    }

    /// Add a resource reference, replacing one with the same name
    fn add_res_reference(&mut self, reference: ResReferenceDescriptor) {
        self.bean_mut().references_mut().add_res_reference(reference);
    }

    /// Replace all resource references
    fn set_res_references(&mut self, references: ResReferenceMap) {
        self.bean_mut().references_mut().set_res_references(references);
    }

    /// Resource references by name
    fn res_references(&self) -> &ResReferenceMap {
        self.bean().references().res_references()
    }

    /// Add a persistence unit reference, replacing one with the same name
    fn add_persistence_unit_reference(&mut self, reference: PersistenceUnitReferenceDescriptor) {
        self.bean_mut()
            .references_mut()
            .add_persistence_unit_reference(reference);
    }

    /// Replace all persistence unit references
    fn set_persistence_unit_references(&mut self, references: PersistenceUnitReferenceMap) {
        self.bean_mut()
            .references_mut()
            .set_persistence_unit_references(references);
    }

    /// Persistence unit references by name
    fn persistence_unit_references(&self) -> &PersistenceUnitReferenceMap {
        self.bean().references().persistence_unit_references()
    }

    /// References of all flavours
    fn references(&self) -> Vec<Reference<'_>> {
        self.bean().references().references()
    }
}
