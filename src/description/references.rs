//! Reference handling shared by all bean descriptors.

use std::collections::HashMap;

use crate::{
    config::DescriptorConfig,
    deployment::NamespacedNode,
    description::{
        EpbReferenceDescriptor, PersistenceUnitReferenceDescriptor, Reference,
        ReferenceDescriptorInterface, ResReferenceDescriptor,
    },
    reflection::{ClassInterface, MethodFlags},
};

/// Name-keyed EPB references
pub type EpbReferenceMap = HashMap<String, EpbReferenceDescriptor>;
/// Name-keyed resource references
pub type ResReferenceMap = HashMap<String, ResReferenceDescriptor>;
/// Name-keyed persistence unit references
pub type PersistenceUnitReferenceMap = HashMap<String, PersistenceUnitReferenceDescriptor>;

fn reference_key(reference: &dyn ReferenceDescriptorInterface) -> String {
    reference.name().unwrap_or_default().to_string()
}

/// The EPB, resource and persistence unit references of a bean
///
/// Each flavour lives in its own map keyed by reference name. Adding a reference whose name is
/// already present replaces the existing entry; references of different flavours never replace
/// each other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptorReferences {
    epb_references: EpbReferenceMap,
    res_references: ResReferenceMap,
    persistence_unit_references: PersistenceUnitReferenceMap,
}

impl DescriptorReferences {
    /// Create an empty reference collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an EPB reference, replacing one with the same name
    pub fn add_epb_reference(&mut self, reference: EpbReferenceDescriptor) {
        self.epb_references.insert(reference_key(&reference), reference);
    }

    /// Replace all EPB references
    pub fn set_epb_references(&mut self, references: EpbReferenceMap) {
        self.epb_references = references;
    }

    /// All EPB references by name
    #[must_use]
    pub fn epb_references(&self) -> &EpbReferenceMap {
        &self.epb_references
    }

    /// Add a resource reference, replacing one with the same name
    pub fn add_res_reference(&mut self, reference: ResReferenceDescriptor) {
        self.res_references.insert(reference_key(&reference), reference);
    }

    /// Replace all resource references
    pub fn set_res_references(&mut self, references: ResReferenceMap) {
        self.res_references = references;
    }

    /// All resource references by name
    #[must_use]
    pub fn res_references(&self) -> &ResReferenceMap {
        &self.res_references
    }

    /// Add a persistence unit reference, replacing one with the same name
    pub fn add_persistence_unit_reference(
        &mut self,
        reference: PersistenceUnitReferenceDescriptor,
    ) {
        self.persistence_unit_references
            .insert(reference_key(&reference), reference);
    }

    /// Replace all persistence unit references
    pub fn set_persistence_unit_references(&mut self, references: PersistenceUnitReferenceMap) {
        self.persistence_unit_references = references;
    }

    /// All persistence unit references by name
    #[must_use]
    pub fn persistence_unit_references(&self) -> &PersistenceUnitReferenceMap {
        &self.persistence_unit_references
    }

    /// The references of all three flavours.
    ///
    /// Same-named references of different flavours are all returned.
    #[must_use]
    pub fn references(&self) -> Vec<Reference<'_>> {
        self.epb_references
            .values()
            .map(Reference::Epb)
            .chain(self.res_references.values().map(Reference::Res))
            .chain(
                self.persistence_unit_references
                    .values()
                    .map(Reference::PersistenceUnit),
            )
            .collect()
    }

    /// Total number of references over all flavours
    #[must_use]
    pub fn len(&self) -> usize {
        self.epb_references.len()
            + self.res_references.len()
            + self.persistence_unit_references.len()
    }

    /// Check whether no references of any flavour are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add the `<epb-ref>`, `<res-ref>` and `<persistence-unit-ref>` children of `node`
    pub fn from_deployment_descriptor(
        &mut self,
        node: &NamespacedNode<'_>,
        config: &DescriptorConfig,
    ) {
        for child in node.children("epb-ref") {
            let mut reference = EpbReferenceDescriptor::with_config(config.clone());
            if reference.from_deployment_descriptor(child.element()).is_some() {
                self.add_epb_reference(reference);
            }
        }

        for child in node.children("res-ref") {
            let mut reference = ResReferenceDescriptor::with_config(config.clone());
            if reference.from_deployment_descriptor(child.element()).is_some() {
                self.add_res_reference(reference);
            }
        }

        for child in node.children("persistence-unit-ref") {
            let mut reference = PersistenceUnitReferenceDescriptor::with_config(config.clone());
            if reference.from_deployment_descriptor(child.element()).is_some() {
                self.add_persistence_unit_reference(reference);
            }
        }
    }

    /// Add the references declared by annotated properties and public methods of `class`.
    ///
    /// Properties are scanned before methods, both in declaration order. A later member that
    /// derives the same reference name replaces the reference of an earlier one.
    pub fn from_reflection_class(&mut self, class: &dyn ClassInterface, config: &DescriptorConfig) {
        for property in class.properties() {
            let mut epb_reference = EpbReferenceDescriptor::with_config(config.clone());
            if epb_reference.from_reflection_property(property).is_some() {
                self.add_epb_reference(epb_reference);
            }

            let mut res_reference = ResReferenceDescriptor::with_config(config.clone());
            if res_reference.from_reflection_property(property).is_some() {
                self.add_res_reference(res_reference);
            }

            let mut persistence_unit_reference =
                PersistenceUnitReferenceDescriptor::with_config(config.clone());
            if persistence_unit_reference
                .from_reflection_property(property)
                .is_some()
            {
                self.add_persistence_unit_reference(persistence_unit_reference);
            }
        }

        for method in class.methods(MethodFlags::PUBLIC) {
            let mut epb_reference = EpbReferenceDescriptor::with_config(config.clone());
            if epb_reference.from_reflection_method(method).is_some() {
                self.add_epb_reference(epb_reference);
            }

            let mut res_reference = ResReferenceDescriptor::with_config(config.clone());
            if res_reference.from_reflection_method(method).is_some() {
                self.add_res_reference(res_reference);
            }

            let mut persistence_unit_reference =
                PersistenceUnitReferenceDescriptor::with_config(config.clone());
            if persistence_unit_reference.from_reflection_method(method).is_some() {
                self.add_persistence_unit_reference(persistence_unit_reference);
            }
        }
    }

    /// Add every reference of `other`, replacing same-named ones of the same flavour
    pub fn merge(&mut self, other: &DescriptorReferences) {
        for reference in other.epb_references.values() {
            self.add_epb_reference(reference.clone());
        }
        for reference in other.res_references.values() {
            self.add_res_reference(reference.clone());
        }
        for reference in other.persistence_unit_references.values() {
            self.add_persistence_unit_reference(reference.clone());
        }
    }
}
