//! Bean kinds and the annotation names descriptors look for.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Names of the annotations the descriptors recognise
#[allow(missing_docs)]
pub mod annotations {
    pub const STATELESS: &str = "Stateless";
    pub const STATEFUL: &str = "Stateful";
    pub const SINGLETON: &str = "Singleton";
    pub const MESSAGE_DRIVEN: &str = "MessageDriven";
    pub const STARTUP: &str = "Startup";
    pub const POST_CONSTRUCT: &str = "PostConstruct";
    pub const PRE_DESTROY: &str = "PreDestroy";
    pub const ENTERPRISE_BEAN: &str = "EnterpriseBean";
    pub const RESOURCE: &str = "Resource";
    pub const PERSISTENCE_UNIT: &str = "PersistenceUnit";
}

/// The flavours of a session bean
///
/// The variant name doubles as class annotation name and as the value of the
/// `<session-type>` deployment descriptor element.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString, EnumIter,
)]
pub enum SessionType {
    /// A bean without conversational state; instances are interchangeable
    #[default]
    Stateless,
    /// A bean bound to one client, holding conversational state
    Stateful,
    /// A single shared instance per application
    Singleton,
}

impl SessionType {
    /// Annotation that marks a class as a session bean of this type
    #[must_use]
    pub fn annotation_name(self) -> &'static str {
        match self {
            SessionType::Stateless => annotations::STATELESS,
            SessionType::Stateful => annotations::STATEFUL,
            SessionType::Singleton => annotations::SINGLETON,
        }
    }
}

/// The closed set of bean kinds a descriptor can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BeanKind {
    /// Stateless session bean
    Stateless,
    /// Stateful session bean
    Stateful,
    /// Singleton session bean
    Singleton,
    /// Message driven bean
    MessageDriven,
}

impl BeanKind {
    /// The session type of this kind, `None` for message driven beans
    #[must_use]
    pub fn session_type(self) -> Option<SessionType> {
        match self {
            BeanKind::Stateless => Some(SessionType::Stateless),
            BeanKind::Stateful => Some(SessionType::Stateful),
            BeanKind::Singleton => Some(SessionType::Singleton),
            BeanKind::MessageDriven => None,
        }
    }

    /// Annotation that marks a class as a bean of this kind
    #[must_use]
    pub fn annotation_name(self) -> &'static str {
        match self.session_type() {
            Some(session_type) => session_type.annotation_name(),
            None => annotations::MESSAGE_DRIVEN,
        }
    }

    /// All bean kinds, in the order they are probed when the kind of a source is unknown
    pub fn all() -> impl Iterator<Item = BeanKind> {
        BeanKind::iter()
    }
}

impl From<SessionType> for BeanKind {
    fn from(session_type: SessionType) -> Self {
        match session_type {
            SessionType::Stateless => BeanKind::Stateless,
            SessionType::Stateful => BeanKind::Stateful,
            SessionType::Singleton => BeanKind::Singleton,
        }
    }
}
