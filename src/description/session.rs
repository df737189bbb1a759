use crate::{
    config::DescriptorConfig,
    deployment::Element,
    description::{
        annotations, util::overlay, BeanDescriptor, BeanDescriptorInterface, BeanKind, SessionType,
    },
    reflection::{Annotation, ClassInterface, MethodFlags},
    Error, Result,
};

/// Descriptor of a stateless, stateful or singleton session bean
///
/// One type serves all three session types; the session type chosen at construction decides
/// which class annotation and which `<session-type>` value the descriptor accepts.
///
/// # Examples
///
/// ```rust
/// use beanscope::prelude::*;
///
/// let class = ReflectionClass::new("Example\\Services\\UserProcessor")
///     .with_annotation(Annotation::new("Stateless"));
///
/// let mut descriptor = SessionBeanDescriptor::stateless();
/// assert!(descriptor.from_reflection_class(&class).is_some());
/// assert_eq!(descriptor.name(), Some("UserProcessor"));
/// assert_eq!(descriptor.local(), Some("UserProcessorLocal"));
///
/// // the same class is not a stateful bean
/// assert!(SessionBeanDescriptor::stateful().from_reflection_class(&class).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionBeanDescriptor {
    bean: BeanDescriptor,
    session_type: SessionType,
    local: Option<String>,
    remote: Option<String>,
    post_construct_callbacks: Vec<String>,
    pre_destroy_callbacks: Vec<String>,
    init_on_startup: bool,
}

impl SessionBeanDescriptor {
    /// Create an empty descriptor for `session_type` using the default configuration
    #[must_use]
    pub fn new(session_type: SessionType) -> Self {
        Self::with_config(session_type, DescriptorConfig::default())
    }

    /// Create an empty descriptor for `session_type` using `config`
    #[must_use]
    pub fn with_config(session_type: SessionType, config: DescriptorConfig) -> Self {
        SessionBeanDescriptor {
            bean: BeanDescriptor::with_config(config),
            session_type,
            local: None,
            remote: None,
            post_construct_callbacks: Vec::new(),
            pre_destroy_callbacks: Vec::new(),
            init_on_startup: false,
        }
    }

    /// Create an empty stateless session bean descriptor
    #[must_use]
    pub fn stateless() -> Self {
        Self::new(SessionType::Stateless)
    }

    /// Create an empty stateful session bean descriptor
    #[must_use]
    pub fn stateful() -> Self {
        Self::new(SessionType::Stateful)
    }

    /// Create an empty singleton session bean descriptor
    #[must_use]
    pub fn singleton() -> Self {
        Self::new(SessionType::Singleton)
    }

    /// The session type this descriptor accepts
    #[must_use]
    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Local business interface name
    #[must_use]
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// Set the local business interface name
    pub fn set_local(&mut self, local: &str) {
        self.local = Some(local.to_string());
    }

    /// Remote business interface name
    #[must_use]
    pub fn remote(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    /// Set the remote business interface name
    pub fn set_remote(&mut self, remote: &str) {
        self.remote = Some(remote.to_string());
    }

    /// Methods invoked after an instance has been created and injected
    #[must_use]
    pub fn post_construct_callbacks(&self) -> &[String] {
        &self.post_construct_callbacks
    }

    /// Register a post construct callback; duplicates are ignored
    pub fn add_post_construct_callback(&mut self, method_name: &str) {
        if !self.post_construct_callbacks.iter().any(|m| m == method_name) {
            self.post_construct_callbacks.push(method_name.to_string());
        }
    }

    /// Methods invoked before an instance gets destroyed
    #[must_use]
    pub fn pre_destroy_callbacks(&self) -> &[String] {
        &self.pre_destroy_callbacks
    }

    /// Register a pre destroy callback; duplicates are ignored
    pub fn add_pre_destroy_callback(&mut self, method_name: &str) {
        if !self.pre_destroy_callbacks.iter().any(|m| m == method_name) {
            self.pre_destroy_callbacks.push(method_name.to_string());
        }
    }

    /// Whether a singleton gets instantiated when the application starts
    #[must_use]
    pub fn init_on_startup(&self) -> bool {
        self.init_on_startup
    }

    /// Set whether a singleton gets instantiated when the application starts
    pub fn set_init_on_startup(&mut self, init_on_startup: bool) {
        self.init_on_startup = init_on_startup;
    }

    fn populate_session_from_reflection(
        &mut self,
        class: &dyn ClassInterface,
        annotation: &Annotation,
    ) {
        let name = self.bean.name().unwrap_or_default().to_string();

        self.local = Some(
            annotation
                .get_str("local")
                .map_or_else(|| format!("{name}Local"), str::to_string),
        );
        self.remote = Some(
            annotation
                .get_str("remote")
                .map_or_else(|| format!("{name}Remote"), str::to_string),
        );

        for method in class.methods(MethodFlags::PUBLIC) {
            if method.has_annotation(annotations::POST_CONSTRUCT) {
                self.add_post_construct_callback(method.method_name());
            }
            if method.has_annotation(annotations::PRE_DESTROY) {
                self.add_pre_destroy_callback(method.method_name());
            }
        }

        if self.session_type == SessionType::Singleton
            && class.has_annotation(annotations::STARTUP)
        {
            self.init_on_startup = true;
        }
    }
}

impl BeanDescriptorInterface for SessionBeanDescriptor {
    fn bean(&self) -> &BeanDescriptor {
        &self.bean
    }

    fn bean_mut(&mut self) -> &mut BeanDescriptor {
        &mut self.bean
    }

    fn kind(&self) -> BeanKind {
        BeanKind::from(self.session_type)
    }

    fn new_annotation_instance<'c>(&self, class: &'c dyn ClassInterface) -> Option<&'c Annotation> {
        class.get_annotation(self.session_type.annotation_name())
    }

    fn from_reflection_class(&mut self, class: &dyn ClassInterface) -> Option<&mut Self> {
        let Some(annotation) = self.new_annotation_instance(class) else {
            tracing::trace!(
                class_name = class.name(),
                session_type = %self.session_type,
                "class is not annotated as session bean of this type"
            );
            return None;
        };

        self.bean.from_reflection_class(class, annotation);
        self.populate_session_from_reflection(class, annotation);

        tracing::debug!(
            class_name = class.name(),
            name = self.bean.name().unwrap_or_default(),
            session_type = %self.session_type,
            references = self.bean.references().len(),
            "populated session bean descriptor from reflection"
        );

        Some(self)
    }

    fn from_deployment_descriptor(&mut self, node: &Element) -> Option<&mut Self> {
        let namespace = self.bean.config().namespace.clone();
        let session = node.with_namespace(&namespace);

        if !session.is("session") {
            tracing::trace!(element = node.name(), "not a session bean node, skipping");
            return None;
        }
        if session.child_text("session-type") != Some(self.session_type.as_ref()) {
            tracing::trace!(
                session_type = %self.session_type,
                found = session.child_text("session-type").unwrap_or_default(),
                "session type does not match, skipping"
            );
            return None;
        }

        self.bean.from_deployment_descriptor(node);

        if let Some(local) = session.child_text("local") {
            self.local = Some(local.to_string());
        }
        if let Some(remote) = session.child_text("remote") {
            self.remote = Some(remote.to_string());
        }
        if let Some(init_on_startup) = session.child_text("init-on-startup") {
            self.init_on_startup = init_on_startup.eq_ignore_ascii_case("true");
        }
        for callback in session.children("post-construct") {
            if let Some(method_name) = callback.child_text("lifecycle-callback-method") {
                self.add_post_construct_callback(method_name);
            }
        }
        for callback in session.children("pre-destroy") {
            if let Some(method_name) = callback.child_text("lifecycle-callback-method") {
                self.add_pre_destroy_callback(method_name);
            }
        }

        tracing::debug!(
            class_name = self.bean.class_name().unwrap_or_default(),
            name = self.bean.name().unwrap_or_default(),
            session_type = %self.session_type,
            references = self.bean.references().len(),
            "populated session bean descriptor from deployment descriptor"
        );

        Some(self)
    }

    /// Fold `other` into this descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MergeConflict`] if the class names differ and [`Error::KindConflict`]
    /// if both describe the same class with different session types. This descriptor is left
    /// unchanged in both cases.
    fn merge(&mut self, other: &Self) -> Result<()> {
        if self.session_type != other.session_type && self.class_name() == other.class_name() {
            return Err(Error::KindConflict {
                class_name: self.class_name().unwrap_or_default().to_string(),
                this: self.kind(),
                other: other.kind(),
            });
        }

        self.bean.merge(&other.bean)?;

        overlay(&mut self.local, other.local.as_ref());
        overlay(&mut self.remote, other.remote.as_ref());
        for method_name in &other.post_construct_callbacks {
            self.add_post_construct_callback(method_name);
        }
        for method_name in &other.pre_destroy_callbacks {
            self.add_pre_destroy_callback(method_name);
        }
        self.init_on_startup |= other.init_on_startup;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reflection::{ReflectionClass, ReflectionMethod},
        Error,
    };

    const TEST_CLASS: &str = "Example\\Tests\\StatelessSessionBeanDescriptorTest";

    const STATELESS_XML: &str = r#"<session xmlns="http://www.appserver.io/appserver">
        <session-type>Stateless</session-type>
        <epb-name>SchemaProcessor</epb-name>
        <epb-class>Example\Services\SchemaProcessor</epb-class>
        <local>SchemaProcessorLocal</local>
        <post-construct>
            <lifecycle-callback-method>initialize</lifecycle-callback-method>
        </post-construct>
    </session>"#;

    #[test]
    fn test_new_descriptor_instance() {
        let descriptor = SessionBeanDescriptor::stateless();
        assert_eq!(descriptor.session_type(), SessionType::Stateless);
        assert_eq!(descriptor.kind(), BeanKind::Stateless);
        assert_eq!(descriptor.name(), None);
        assert_eq!(descriptor.class_name(), None);
        assert!(descriptor.references().is_empty());
    }

    #[test]
    fn test_from_reflection_class() {
        let class = ReflectionClass::new(TEST_CLASS)
            .with_annotation(Annotation::new(annotations::STATELESS));

        let mut descriptor = SessionBeanDescriptor::stateless();
        assert!(descriptor.from_reflection_class(&class).is_some());
        assert_eq!(descriptor.name(), Some("StatelessSessionBeanDescriptorTest"));
        assert_eq!(descriptor.class_name(), Some(TEST_CLASS));
        assert_eq!(descriptor.local(), Some("StatelessSessionBeanDescriptorTestLocal"));
        assert_eq!(descriptor.remote(), Some("StatelessSessionBeanDescriptorTestRemote"));
        assert!(descriptor.epb_references().is_empty());
        assert!(descriptor.res_references().is_empty());
        assert!(descriptor.references().is_empty());
    }

    #[test]
    fn test_from_invalid_reflection_class() {
        let class = ReflectionClass::new("stdClass");

        let mut descriptor = SessionBeanDescriptor::stateless();
        assert!(descriptor.from_reflection_class(&class).is_none());
        assert_eq!(descriptor, SessionBeanDescriptor::stateless());
    }

    #[test]
    fn test_from_reflection_class_lifecycle_and_startup() {
        let class = ReflectionClass::new("Example\\Services\\Cache")
            .with_annotation(
                Annotation::new(annotations::SINGLETON).with_value("local", "CacheApi"),
            )
            .with_annotation(Annotation::new(annotations::STARTUP))
            .with_method(
                ReflectionMethod::new("warmUp")
                    .with_annotation(Annotation::new(annotations::POST_CONSTRUCT)),
            )
            .with_method(
                ReflectionMethod::new("hiddenInit")
                    .with_flags(MethodFlags::PRIVATE)
                    .with_annotation(Annotation::new(annotations::POST_CONSTRUCT)),
            )
            .with_method(
                ReflectionMethod::new("flush")
                    .with_annotation(Annotation::new(annotations::PRE_DESTROY)),
            );

        let mut descriptor = SessionBeanDescriptor::singleton();
        assert!(descriptor.from_reflection_class(&class).is_some());
        assert_eq!(descriptor.local(), Some("CacheApi"));
        assert_eq!(descriptor.remote(), Some("CacheRemote"));
        assert_eq!(descriptor.post_construct_callbacks(), ["warmUp".to_string()]);
        assert_eq!(descriptor.pre_destroy_callbacks(), ["flush".to_string()]);
        assert!(descriptor.init_on_startup());
    }

    #[test]
    fn test_startup_only_applies_to_singletons() {
        let class = ReflectionClass::new("Example\\Services\\Cache")
            .with_annotation(Annotation::new(annotations::STATELESS))
            .with_annotation(Annotation::new(annotations::STARTUP));

        let mut descriptor = SessionBeanDescriptor::stateless();
        descriptor.from_reflection_class(&class);
        assert!(!descriptor.init_on_startup());
    }

    #[test]
    fn test_from_deployment_descriptor() {
        let node = Element::parse(STATELESS_XML).unwrap();

        let mut descriptor = SessionBeanDescriptor::stateless();
        assert!(descriptor.from_deployment_descriptor(&node).is_some());
        assert_eq!(descriptor.name(), Some("SchemaProcessor"));
        assert_eq!(descriptor.class_name(), Some("Example\\Services\\SchemaProcessor"));
        assert_eq!(descriptor.local(), Some("SchemaProcessorLocal"));
        assert_eq!(descriptor.remote(), None);
        assert_eq!(descriptor.post_construct_callbacks(), ["initialize".to_string()]);
    }

    #[test]
    fn test_from_wrong_deployment_descriptor() {
        let node = Element::parse(
            r#"<message-driven xmlns="http://www.appserver.io/appserver">
                   <epb-name>ImportReceiver</epb-name>
               </message-driven>"#,
        )
        .unwrap();

        let mut descriptor = SessionBeanDescriptor::stateless();
        assert!(descriptor.from_deployment_descriptor(&node).is_none());
        assert_eq!(descriptor.name(), None);
    }

    #[test]
    fn test_from_invalid_deployment_descriptor() {
        let node = Element::parse(&STATELESS_XML.replace(
            "<session-type>Stateless</session-type>",
            "<session-type>Stateful</session-type>",
        ))
        .unwrap();

        let mut descriptor = SessionBeanDescriptor::stateless();
        assert!(descriptor.from_deployment_descriptor(&node).is_none());
        assert_eq!(descriptor, SessionBeanDescriptor::stateless());

        let mut stateful = SessionBeanDescriptor::stateful();
        assert!(stateful.from_deployment_descriptor(&node).is_some());
    }

    #[test]
    fn test_init_on_startup_from_deployment_descriptor() {
        let node = Element::parse(
            r#"<session xmlns="http://www.appserver.io/appserver">
                   <session-type>Singleton</session-type>
                   <epb-class>Example\Services\Cache</epb-class>
                   <init-on-startup>True</init-on-startup>
               </session>"#,
        )
        .unwrap();

        let mut descriptor = SessionBeanDescriptor::singleton();
        descriptor.from_deployment_descriptor(&node);
        assert!(descriptor.init_on_startup());
    }

    #[test]
    fn test_merge() {
        let mut descriptor = SessionBeanDescriptor::stateless();
        descriptor.from_deployment_descriptor(&Element::parse(STATELESS_XML).unwrap());

        let mut other = SessionBeanDescriptor::stateless();
        other.set_class_name("Example\\Services\\SchemaProcessor");
        other.set_remote("SchemaProcessorRemote");
        other.add_post_construct_callback("initialize");
        other.add_pre_destroy_callback("shutdown");

        descriptor.merge(&other).unwrap();
        assert_eq!(descriptor.name(), Some("SchemaProcessor"));
        assert_eq!(descriptor.local(), Some("SchemaProcessorLocal"));
        assert_eq!(descriptor.remote(), Some("SchemaProcessorRemote"));
        assert_eq!(descriptor.post_construct_callbacks().len(), 1);
        assert_eq!(descriptor.pre_destroy_callbacks(), ["shutdown".to_string()]);
    }

    #[test]
    fn test_merge_conflict() {
        let mut descriptor = SessionBeanDescriptor::stateless();
        descriptor.set_class_name("Example\\Services\\SchemaProcessor");

        let mut other = SessionBeanDescriptor::stateless();
        other.set_class_name("Example\\Services\\UserProcessor");
        other.set_local("UserProcessorLocal");

        assert!(matches!(
            descriptor.merge(&other),
            Err(Error::MergeConflict { .. })
        ));
        assert_eq!(descriptor.local(), None);
    }

    #[test]
    fn test_merge_other_session_type() {
        let mut descriptor = SessionBeanDescriptor::stateless();
        descriptor.set_class_name("Example\\Services\\UserProcessor");
        descriptor.set_name("UserProcessor");
        let before = descriptor.clone();

        let mut other = SessionBeanDescriptor::stateful();
        other.set_class_name("Example\\Services\\UserProcessor");
        other.set_name("Cart");

        match descriptor.merge(&other) {
            Err(Error::KindConflict {
                class_name,
                this,
                other,
            }) => {
                assert_eq!(class_name, "Example\\Services\\UserProcessor");
                assert_eq!(this, BeanKind::Stateless);
                assert_eq!(other, BeanKind::Stateful);
            }
            result => panic!("expected kind conflict, got {result:?}"),
        }
        assert_eq!(descriptor, before);
        assert_eq!(descriptor.name(), Some("UserProcessor"));
    }
}
