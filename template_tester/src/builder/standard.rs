//!
//! The standard test builder.
//!

use std::collections::BTreeMap;

use crate::context::Context;
use crate::directive::value::DirectiveValue;
use crate::directive::value::FromDirectiveValue;
use crate::directive::values::main_directive_value;
use crate::directive::values::DirectiveValues;
use crate::directive::Directive;
use crate::directive::MAIN;
use crate::error::Error;
use crate::exception::ExceptionType;
use crate::fragment::FragmentSpec;
use crate::resource::TestResource;
use crate::test::expectation::Expectation;
use crate::test::Test;

use super::TestBuilder;

///
/// The standard test builder.
///
/// The presence of the `output` or `exception` directive decides whether the
/// test expects a success or a failure.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardTestBuilder;

impl StandardTestBuilder {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self
    }

    ///
    /// Returns the main value of a directive the test cannot be built without.
    ///
    fn required<'a, T>(
        execution_id: &str,
        document_name: &str,
        data: &'a DirectiveValues,
        directive: Directive,
    ) -> Result<&'a T, Error>
    where
        T: FromDirectiveValue,
    {
        main_directive_value(data, directive).ok_or_else(|| {
            Error::test_definition(
                execution_id,
                document_name,
                format!(
                    "No value has been resolved for directive \"{directive}\" in document \"{document_name}\"."
                ),
            )
        })
    }
}

impl TestBuilder for StandardTestBuilder {
    fn build_test(
        &self,
        execution_id: &str,
        document_name: &str,
        data: &DirectiveValues,
    ) -> Result<Test, Error> {
        if execution_id.is_empty() {
            return Err(Error::invalid_argument("Execution ID cannot be empty"));
        }
        if data.is_empty() {
            return Err(Error::invalid_argument("Data cannot be empty"));
        }

        let mut all_inputs = data.get(Directive::Input).cloned().unwrap_or_default();
        let input = match all_inputs.remove(&MAIN) {
            Some(DirectiveValue::Resource(input)) => input,
            _ => {
                return Err(Error::test_definition(
                    execution_id,
                    document_name,
                    format!(
                        "No main input has been specified for test in document \"{document_name}\"."
                    ),
                ))
            }
        };
        let additional_inputs = all_inputs
            .into_iter()
            .filter_map(|(qualifier, value)| match (qualifier, value) {
                (Some(qualifier), DirectiveValue::Resource(resource)) => Some((qualifier, resource)),
                _ => None,
            })
            .collect::<BTreeMap<String, TestResource>>();

        let input_cacheable = *Self::required::<bool>(
            execution_id,
            document_name,
            data,
            Directive::Cache,
        )?;
        let context = Self::required::<Context>(
            execution_id,
            document_name,
            data,
            Directive::Context,
        )?;
        let template_mode = Self::required::<String>(
            execution_id,
            document_name,
            data,
            Directive::TemplateMode,
        )?;

        let name = main_directive_value::<String>(data, Directive::Name);
        let fragment_spec = main_directive_value::<FragmentSpec>(data, Directive::Fragment);

        let output = main_directive_value::<TestResource>(data, Directive::Output);
        let exception = main_directive_value::<ExceptionType>(data, Directive::Exception);

        let expectation = match (output, exception) {
            (Some(output), _) => Expectation::success(output.to_owned()),
            (None, Some(exception)) => {
                let message_pattern =
                    main_directive_value::<String>(data, Directive::ExceptionMessagePattern);
                Expectation::failure(exception.to_owned(), message_pattern.cloned())
            }
            (None, None) => {
                return Err(Error::test_definition(
                    execution_id,
                    document_name,
                    format!(
                        "Neither output nor exception have been specified for test in document \"{document_name}\". At least one of these must be specified."
                    ),
                ))
            }
        };

        Ok(Test {
            name: name.cloned(),
            input,
            additional_inputs,
            input_cacheable,
            template_mode: template_mode.to_owned(),
            context: context.to_owned(),
            fragment_spec: fragment_spec.cloned(),
            expectation,
        })
    }
}
