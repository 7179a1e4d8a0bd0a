//!
//! The resolved directive value.
//!

use crate::context::Context;
use crate::exception::ExceptionType;
use crate::fragment::FragmentSpec;
use crate::resource::TestResource;

use super::kind::DirectiveKind;

///
/// The resolved directive value.
///
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveValue {
    /// A test resource.
    Resource(TestResource),
    /// A boolean flag.
    Boolean(bool),
    /// An evaluation context.
    Context(Context),
    /// A free-form string.
    Text(String),
    /// A fragment specification.
    Fragment(FragmentSpec),
    /// An exception type name.
    Exception(ExceptionType),
}

impl DirectiveValue {
    ///
    /// Returns the value kind.
    ///
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Resource(_) => DirectiveKind::Resource,
            Self::Boolean(_) => DirectiveKind::Boolean,
            Self::Context(_) => DirectiveKind::Context,
            Self::Text(_) => DirectiveKind::Text,
            Self::Fragment(_) => DirectiveKind::Fragment,
            Self::Exception(_) => DirectiveKind::Exception,
        }
    }
}

impl From<TestResource> for DirectiveValue {
    fn from(value: TestResource) -> Self {
        Self::Resource(value)
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Context> for DirectiveValue {
    fn from(value: Context) -> Self {
        Self::Context(value)
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<FragmentSpec> for DirectiveValue {
    fn from(value: FragmentSpec) -> Self {
        Self::Fragment(value)
    }
}

impl From<ExceptionType> for DirectiveValue {
    fn from(value: ExceptionType) -> Self {
        Self::Exception(value)
    }
}

///
/// Borrows the typed payload out of a directive value.
///
pub trait FromDirectiveValue {
    ///
    /// Returns the payload if the value is of the matching kind.
    ///
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self>;
}

impl FromDirectiveValue for TestResource {
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self> {
        match value {
            DirectiveValue::Resource(inner) => Some(inner),
            _ => None,
        }
    }
}

impl FromDirectiveValue for bool {
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self> {
        match value {
            DirectiveValue::Boolean(inner) => Some(inner),
            _ => None,
        }
    }
}

impl FromDirectiveValue for Context {
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self> {
        match value {
            DirectiveValue::Context(inner) => Some(inner),
            _ => None,
        }
    }
}

impl FromDirectiveValue for String {
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self> {
        match value {
            DirectiveValue::Text(inner) => Some(inner),
            _ => None,
        }
    }
}

impl FromDirectiveValue for FragmentSpec {
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self> {
        match value {
            DirectiveValue::Fragment(inner) => Some(inner),
            _ => None,
        }
    }
}

impl FromDirectiveValue for ExceptionType {
    fn from_directive_value(value: &DirectiveValue) -> Option<&Self> {
        match value {
            DirectiveValue::Exception(inner) => Some(inner),
            _ => None,
        }
    }
}
