use crate::description::{
    EpbReferenceDescriptor, InjectionTargetDescriptor, PersistenceUnitReferenceDescriptor,
    ResReferenceDescriptor,
};

/// Attributes every reference flavour shares
pub trait ReferenceDescriptorInterface {
    /// Name of the reference in the naming directory, e.g. `env/UserProcessor`.
    ///
    /// References are keyed by this name inside a bean descriptor.
    fn name(&self) -> Option<&str>;

    /// Free text description
    fn description(&self) -> Option<&str>;

    /// Naming directory lookup the reference resolves to
    fn lookup(&self) -> Option<&str>;

    /// Member the reference gets injected into
    fn injection_target(&self) -> Option<&InjectionTargetDescriptor>;
}

/// A borrowed reference of any flavour, as returned by the "all references" view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reference<'a> {
    /// Reference to another enterprise bean
    Epb(&'a EpbReferenceDescriptor),
    /// Reference to an environment resource
    Res(&'a ResReferenceDescriptor),
    /// Reference to a persistence unit
    PersistenceUnit(&'a PersistenceUnitReferenceDescriptor),
}

impl Reference<'_> {
    fn inner(&self) -> &dyn ReferenceDescriptorInterface {
        match self {
            Reference::Epb(reference) => *reference,
            Reference::Res(reference) => *reference,
            Reference::PersistenceUnit(reference) => *reference,
        }
    }
}

impl ReferenceDescriptorInterface for Reference<'_> {
    fn name(&self) -> Option<&str> {
        self.inner().name()
    }

    fn description(&self) -> Option<&str> {
        self.inner().description()
    }

    fn lookup(&self) -> Option<&str> {
        self.inner().lookup()
    }

    fn injection_target(&self) -> Option<&InjectionTargetDescriptor> {
        self.inner().injection_target()
    }
}
