//!
//! The template engine test.
//!


use std::collections::BTreeMap;

use crate::context::Context;
use crate::fragment::FragmentSpec;
use crate::resource::TestResource;

use self::expectation::Expectation;

///
/// The template engine test, ready to be run by the execution engine.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Test {
    /// The test name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The main template input.
    pub input: TestResource,
    /// The additional inputs, e.g. templates included by the main one.
    /// The format is `qualifier -> resource`.
    pub additional_inputs: BTreeMap<String, TestResource>,
    /// Whether the inputs may be cached by the engine.
    pub input_cacheable: bool,
    /// The template mode.
    pub template_mode: String,
    /// The evaluation context.
    pub context: Context,
    /// The fragment to compare instead of the whole output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_spec: Option<FragmentSpec>,
    /// The expected outcome.
    pub expectation: Expectation,
}

impl Test {
    ///
    /// Whether the test expects the template to be processed successfully.
    ///
    pub fn is_success_expected(&self) -> bool {
        matches!(self.expectation, Expectation::Success { .. })
    }

    ///
    /// Whether the test expects the template processing to fail.
    ///
    pub fn is_fail_expected(&self) -> bool {
        matches!(self.expectation, Expectation::Failure { .. })
    }

    ///
    /// Returns the expected output, if the test expects a success.
    ///
    pub fn output(&self) -> Option<&TestResource> {
        match self.expectation {
            Expectation::Success { ref output } => Some(output),
            Expectation::Failure { .. } => None,
        }
    }

    ///
    /// Returns the input by qualifier, where `None` denotes the main input.
    ///
    pub fn input_by_qualifier(&self, qualifier: Option<&str>) -> Option<&TestResource> {
        match qualifier {
            None => Some(&self.input),
            Some(qualifier) => self.additional_inputs.get(qualifier),
        }
    }
}

impl std::fmt::Display for Test {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref name) = self.name {
            write!(f, "{name} ")?;
        }
        write!(f, "[{}] {}", self.template_mode, self.expectation)
    }
}
