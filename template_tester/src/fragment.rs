//!
//! The template fragment specification.
//!

///
/// Selects a fragment of the processed template to be compared instead of the whole result.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FragmentSpec {
    /// The fragment selector, e.g. `div#content`.
    pub selector: String,
}

impl FragmentSpec {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl std::fmt::Display for FragmentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.selector)
    }
}
