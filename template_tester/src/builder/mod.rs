//!
//! The test builder.
//!

pub mod standard;


use crate::directive::values::DirectiveValues;
use crate::error::Error;
use crate::test::Test;

///
/// Builds tests out of the directive values resolved from test documents.
///
pub trait TestBuilder {
    ///
    /// Builds the test described by the document directive values.
    ///
    /// `document_name` is only used in error messages.
    ///
    fn build_test(
        &self,
        execution_id: &str,
        document_name: &str,
        data: &DirectiveValues,
    ) -> Result<Test, Error>;
}
