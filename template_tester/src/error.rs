//!
//! The test builder error.
//!

///
/// The test builder error.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The builder has been called with a malformed argument.
    InvalidArgument {
        /// The violated precondition.
        message: String,
    },
    /// The test document does not describe a valid test.
    TestDefinition {
        /// The execution the document belongs to.
        execution_id: String,
        /// The document name.
        document_name: String,
        /// The error description.
        message: String,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn test_definition(
        execution_id: &str,
        document_name: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::TestDefinition {
            execution_id: execution_id.to_owned(),
            document_name: document_name.to_owned(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { message } => write!(f, "Invalid argument: {message}"),
            Self::TestDefinition {
                execution_id,
                message,
                ..
            } => write!(f, "[{execution_id}] {message}"),
        }
    }
}

impl std::error::Error for Error {}
