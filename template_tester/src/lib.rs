//!
//! The template tester library.
//!

pub mod builder;
pub mod context;
pub mod directive;
pub mod document;
pub mod error;
pub mod exception;
pub mod fragment;
pub mod resource;
pub mod summary;
pub mod test;

pub use self::builder::standard::StandardTestBuilder;
pub use self::builder::TestBuilder;
pub use self::context::Context;
pub use self::directive::kind::DirectiveKind;
pub use self::directive::value::DirectiveValue;
pub use self::directive::value::FromDirectiveValue;
pub use self::directive::values::DirectiveValues;
pub use self::directive::Directive;
pub use self::directive::Qualifier;
pub use self::document::Document;
pub use self::error::Error;
pub use self::exception::ExceptionType;
pub use self::fragment::FragmentSpec;
pub use self::resource::TestResource;
pub use self::summary::Summary;
pub use self::test::expectation::Expectation;
pub use self::test::Test;

/// The qualifier spelling which denotes the main value in documents.
pub const MAIN_QUALIFIER: &str = "main";

/// The template mode applied when a document does not specify one.
pub const DEFAULT_TEMPLATE_MODE: &str = "HTML";

/// Whether inputs are cacheable when a document does not specify it.
pub const DEFAULT_INPUT_CACHEABLE: bool = true;
