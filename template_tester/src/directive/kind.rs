//!
//! The directive value kind.
//!

///
/// The directive value kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// A test resource.
    Resource,
    /// A boolean flag.
    Boolean,
    /// An evaluation context.
    Context,
    /// A free-form string.
    Text,
    /// A fragment specification.
    Fragment,
    /// An exception type name.
    Exception,
}

impl std::fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resource => write!(f, "resource"),
            Self::Boolean => write!(f, "boolean"),
            Self::Context => write!(f, "context"),
            Self::Text => write!(f, "text"),
            Self::Fragment => write!(f, "fragment"),
            Self::Exception => write!(f, "exception"),
        }
    }
}
