//!
//! The template evaluation context.
//!

use std::collections::BTreeMap;

///
/// The template evaluation context.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Context {
    /// The locale, e.g. `en_US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// The context variables.
    #[serde(default)]
    pub variables: BTreeMap<String, serde_json::Value>,
}

impl Context {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(locale: Option<String>, variables: BTreeMap<String, serde_json::Value>) -> Self {
        Self { locale, variables }
    }

    ///
    /// Returns a copy of the context with the variable set.
    ///
    pub fn with_variable(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }
}
