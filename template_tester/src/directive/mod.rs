//!
//! The test document directives.
//!

pub mod kind;
pub mod value;
pub mod values;

use self::kind::DirectiveKind;

///
/// The directive value qualifier. `None` denotes the main value.
///
pub type Qualifier = Option<String>;

/// The main value qualifier.
pub const MAIN: Qualifier = None;

///
/// The test document directive.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Directive {
    /// The template inputs.
    Input,
    /// Whether the inputs may be cached by the engine.
    Cache,
    /// The evaluation context.
    Context,
    /// The template mode.
    TemplateMode,
    /// The test name.
    Name,
    /// The fragment to compare instead of the whole output.
    Fragment,
    /// The expected output.
    Output,
    /// The expected exception type.
    Exception,
    /// The expected exception message pattern.
    ExceptionMessagePattern,
}

impl Directive {
    /// All the directives in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Input,
        Self::Cache,
        Self::Context,
        Self::TemplateMode,
        Self::Name,
        Self::Fragment,
        Self::Output,
        Self::Exception,
        Self::ExceptionMessagePattern,
    ];

    ///
    /// Returns the directive name as written in test documents.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Cache => "cache",
            Self::Context => "context",
            Self::TemplateMode => "template-mode",
            Self::Name => "name",
            Self::Fragment => "fragment",
            Self::Output => "output",
            Self::Exception => "exception",
            Self::ExceptionMessagePattern => "exception-message-pattern",
        }
    }

    ///
    /// Returns the kind of values the directive accepts.
    ///
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Input | Self::Output => DirectiveKind::Resource,
            Self::Cache => DirectiveKind::Boolean,
            Self::Context => DirectiveKind::Context,
            Self::TemplateMode | Self::Name | Self::ExceptionMessagePattern => DirectiveKind::Text,
            Self::Fragment => DirectiveKind::Fragment,
            Self::Exception => DirectiveKind::Exception,
        }
    }
}

impl std::str::FromStr for Directive {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|directive| directive.name() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown directive `{}`. Supported directives: {}",
                    string,
                    Self::ALL
                        .iter()
                        .map(|directive| format!("`{}`", directive.name()))
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
