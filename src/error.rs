use thiserror::Error;

use crate::description::BeanKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Population of descriptors never fails: a source that does not describe the expected bean or
/// reference kind is simply skipped and the populating call returns `None`. The variants below
/// cover the remaining fault categories.
///
/// # Error Categories
///
/// ## Configuration Errors
/// - [`Error::MergeConflict`] - Two descriptors for different classes were merged
/// - [`Error::KindConflict`] - Two descriptors for different bean kinds were merged
///
/// ## Deployment Descriptor Errors
/// - [`Error::Xml`] - The deployment descriptor is not well-formed XML
/// - [`Error::Malformed`] - The deployment descriptor structure could not be turned into a tree
/// - [`Error::FileError`] - The deployment descriptor could not be read from disk
///
/// # Examples
///
/// ```rust
/// use beanscope::prelude::*;
///
/// let mut left = SessionBeanDescriptor::stateless();
/// left.set_class_name("Example\\Services\\UserProcessor");
/// let mut right = SessionBeanDescriptor::stateless();
/// right.set_class_name("Example\\Services\\SchemaProcessor");
///
/// match left.merge(&right) {
///     Err(Error::MergeConflict { this, other }) => {
///         eprintln!("refusing to merge {} into {}", other, this);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
///     Ok(()) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Two bean descriptors with different class names were merged.
    ///
    /// The class name is the merge key of a bean descriptor, so merging the configuration of one
    /// class into the descriptor of another is a configuration fault. Neither descriptor is
    /// modified when this error is returned.
    ///
    /// # Fields
    ///
    /// * `this` - Class name of the descriptor that was merged into
    /// * `other` - Class name of the descriptor that should have been merged
    #[error("You try to merge a bean configuration for {other} with {this}")]
    MergeConflict {
        /// Class name of the receiving descriptor
        this: String,
        /// Class name of the descriptor passed to merge
        other: String,
    },

    /// Two descriptors of the same class but of different bean kinds were merged.
    ///
    /// # Fields
    ///
    /// * `class_name` - Class name both descriptors share
    /// * `this` - Bean kind of the receiving descriptor
    /// * `other` - Bean kind of the descriptor passed to merge
    #[error("You try to merge a {other} bean configuration for {class_name} into a {this} bean")]
    KindConflict {
        /// Class name both descriptors share
        class_name: String,
        /// Bean kind of the receiving descriptor
        this: BeanKind,
        /// Bean kind of the descriptor passed to merge
        other: BeanKind,
    },

    /// The deployment descriptor is not well-formed XML.
    ///
    /// Wraps the error reported by the `quick-xml` reader.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    /// The deployment descriptor is damaged and could not be turned into an element tree.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors raised while reading a deployment descriptor from disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
