//!
//! The directive values by directive and qualifier.
//!

use std::collections::BTreeMap;

use super::value::DirectiveValue;
use super::value::FromDirectiveValue;
use super::Directive;
use super::Qualifier;
use super::MAIN;

///
/// The directive values by directive and qualifier.
///
/// Every value is checked against the kind of its directive on insertion,
/// so typed lookups never observe a value of a foreign kind.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DirectiveValues {
    /// The values. The format is `directive -> qualifier -> value`.
    inner: BTreeMap<Directive, BTreeMap<Qualifier, DirectiveValue>>,
}

impl DirectiveValues {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Inserts a value, returning the one previously stored under the same qualifier.
    ///
    pub fn insert(
        &mut self,
        directive: Directive,
        qualifier: Qualifier,
        value: impl Into<DirectiveValue>,
    ) -> anyhow::Result<Option<DirectiveValue>> {
        let value = value.into();
        if value.kind() != directive.kind() {
            anyhow::bail!(
                "Directive `{}` expects a {} value, found: {}",
                directive,
                directive.kind(),
                value.kind()
            );
        }

        Ok(self
            .inner
            .entry(directive)
            .or_default()
            .insert(qualifier, value))
    }

    ///
    /// Inserts the main value of a directive.
    ///
    pub fn insert_main(
        &mut self,
        directive: Directive,
        value: impl Into<DirectiveValue>,
    ) -> anyhow::Result<Option<DirectiveValue>> {
        self.insert(directive, MAIN, value)
    }

    ///
    /// Returns the values of a directive by qualifier.
    ///
    pub fn get(&self, directive: Directive) -> Option<&BTreeMap<Qualifier, DirectiveValue>> {
        self.inner.get(&directive)
    }

    ///
    /// Returns the typed main value of a directive.
    ///
    pub fn main_value<T>(&self, directive: Directive) -> Option<&T>
    where
        T: FromDirectiveValue,
    {
        main_directive_value(self, directive)
    }

    ///
    /// Whether the directive has a main value.
    ///
    pub fn has_main_value(&self, directive: Directive) -> bool {
        self.get(directive)
            .map(|values| values.contains_key(&MAIN))
            .unwrap_or_default()
    }

    ///
    /// Returns the number of directives with at least one value.
    ///
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    ///
    /// Whether no directive has been resolved.
    ///
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    ///
    /// Iterates over the directives and their values by qualifier.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&Directive, &BTreeMap<Qualifier, DirectiveValue>)> {
        self.inner.iter()
    }
}

///
/// Returns the main value of a directive, or `None` if the directive has not been resolved.
///
pub fn main_directive_value<T>(values: &DirectiveValues, directive: Directive) -> Option<&T>
where
    T: FromDirectiveValue,
{
    values
        .get(directive)?
        .get(&MAIN)
        .and_then(T::from_directive_value)
}
