//!
//! The expected exception type.
//!

///
/// The name of the error type a failing test is expected to raise.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ExceptionType(pub String);

impl ExceptionType {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    ///
    /// Returns the type name.
    ///
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ExceptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
