//! Descriptor configuration
//!
//! This module provides the settings shared by all descriptors while they populate
//! themselves from reflection data or deployment descriptor nodes.

/// XML namespace of the appserver deployment descriptors
pub const DEFAULT_NAMESPACE: &str = "http://www.appserver.io/appserver";

/// Naming directory that reflection-derived reference names are registered in
pub const DEFAULT_REFERENCE_DIRECTORY: &str = "env";

/// Method name prefix used by injection methods, e.g. `injectUserProcessor`
pub const DEFAULT_INJECTION_METHOD_PREFIX: &str = "inject";

/// Configuration for descriptor population
///
/// Every descriptor carries its own copy. Reference descriptors created while a bean descriptor
/// populates itself inherit the configuration of that bean descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorConfig {
    /// Namespace URI deployment descriptor elements have to live in to be recognised
    pub namespace: String,

    /// Naming directory prepended to reference names derived from annotations
    /// (`env` turns `UserProcessor` into `env/UserProcessor`)
    pub reference_directory: String,

    /// Prefix stripped from method names before deriving a reference name from them
    pub injection_method_prefix: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            reference_directory: DEFAULT_REFERENCE_DIRECTORY.to_string(),
            injection_method_prefix: DEFAULT_INJECTION_METHOD_PREFIX.to_string(),
        }
    }
}

impl DescriptorConfig {
    /// Creates the default configuration but expects deployment descriptors in `namespace`
    #[must_use]
    pub fn with_namespace(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            ..Self::default()
        }
    }

    /// Builds the naming directory entry for a reference, e.g. `env/UserProcessor`
    #[must_use]
    pub fn reference_name(&self, name: &str) -> String {
        if self.reference_directory.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.reference_directory, name)
        }
    }
}
