//!
//! The resolved test document.
//!

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::builder::TestBuilder;
use crate::context::Context;
use crate::directive::kind::DirectiveKind;
use crate::directive::value::DirectiveValue;
use crate::directive::values::DirectiveValues;
use crate::directive::Directive;
use crate::directive::Qualifier;
use crate::directive::MAIN;
use crate::error::Error;
use crate::exception::ExceptionType;
use crate::fragment::FragmentSpec;
use crate::resource::TestResource;
use crate::test::Test;

///
/// The test document with its directive values resolved.
///
/// The data format is `directive -> qualifier -> value`, written in YAML or JSON.
/// The `main` or empty qualifier denotes the main value. A directive given a
/// scalar or a sequence instead of a qualifier mapping is a shorthand for its
/// main value.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The document name, used in error messages.
    pub name: String,
    /// The resolved directive values.
    pub values: DirectiveValues,
}

impl Document {
    ///
    /// Parses the document data.
    ///
    pub fn parse(name: &str, data: &str) -> anyhow::Result<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_yaml::from_str(data)
            .map_err(|error| anyhow::anyhow!("Failed to parse document `{name}`: {error}"))?;

        let mut values = DirectiveValues::new();
        for (directive_name, data) in raw.into_iter() {
            let directive = Directive::from_str(directive_name.as_str())
                .map_err(|error| anyhow::anyhow!("Document `{name}`: {error}"))?;

            let by_qualifier = match data {
                serde_json::Value::Object(map) => map
                    .into_iter()
                    .map(|(qualifier, value)| (Self::qualifier(qualifier), value))
                    .collect::<Vec<(Qualifier, serde_json::Value)>>(),
                serde_json::Value::Null => continue,
                value => vec![(MAIN, value)],
            };

            for (qualifier, value) in by_qualifier.into_iter() {
                let value = Self::decode(directive, value).map_err(|error| {
                    anyhow::anyhow!(
                        "Document `{}`: invalid value of directive `{}` ({}): {}",
                        name,
                        directive,
                        qualifier.as_deref().unwrap_or(crate::MAIN_QUALIFIER),
                        error
                    )
                })?;
                values.insert(directive, qualifier, value)?;
            }
        }

        Self::apply_defaults(&mut values)?;

        Ok(Self {
            name: name.to_owned(),
            values,
        })
    }

    ///
    /// Builds the test described by the document.
    ///
    pub fn build(&self, builder: &impl TestBuilder, execution_id: &str) -> Result<Test, Error> {
        builder.build_test(execution_id, self.name.as_str(), &self.values)
    }

    ///
    /// Converts the document qualifier spelling.
    ///
    fn qualifier(qualifier: String) -> Qualifier {
        if qualifier.is_empty() || qualifier == crate::MAIN_QUALIFIER {
            MAIN
        } else {
            Some(qualifier)
        }
    }

    ///
    /// Decodes a raw value according to the directive kind.
    ///
    fn decode(directive: Directive, value: serde_json::Value) -> anyhow::Result<DirectiveValue> {
        Ok(match directive.kind() {
            DirectiveKind::Resource => match value {
                serde_json::Value::String(content) => TestResource::Inline(content).into(),
                value => serde_json::from_value::<TestResource>(value)?.into(),
            },
            DirectiveKind::Boolean => serde_json::from_value::<bool>(value)?.into(),
            DirectiveKind::Context => serde_json::from_value::<Context>(value)?.into(),
            DirectiveKind::Text => serde_json::from_value::<String>(value)?.into(),
            DirectiveKind::Fragment => serde_json::from_value::<FragmentSpec>(value)?.into(),
            DirectiveKind::Exception => serde_json::from_value::<ExceptionType>(value)?.into(),
        })
    }

    ///
    /// Sets the main values the directive resolution guarantees to be present.
    ///
    fn apply_defaults(values: &mut DirectiveValues) -> anyhow::Result<()> {
        if !values.has_main_value(Directive::Cache) {
            values.insert_main(Directive::Cache, crate::DEFAULT_INPUT_CACHEABLE)?;
        }
        if !values.has_main_value(Directive::Context) {
            values.insert_main(Directive::Context, Context::default())?;
        }
        if !values.has_main_value(Directive::TemplateMode) {
            values.insert_main(Directive::TemplateMode, crate::DEFAULT_TEMPLATE_MODE)?;
        }
        Ok(())
    }

    ///
    /// Rebases relative file resources onto `base`.
    ///
    fn rebase(values: DirectiveValues, base: &Path) -> anyhow::Result<DirectiveValues> {
        let mut rebased = DirectiveValues::new();
        for (directive, by_qualifier) in values.iter() {
            for (qualifier, value) in by_qualifier.iter() {
                let value = match value {
                    DirectiveValue::Resource(resource) => {
                        DirectiveValue::Resource(resource.to_owned().relative_to(base))
                    }
                    value => value.to_owned(),
                };
                rebased.insert(*directive, qualifier.to_owned(), value)?;
            }
        }
        Ok(rebased)
    }
}

impl TryFrom<&Path> for Document {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let data = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Failed to read test document {path:?}: {error}"))?;

        let mut document = Self::parse(path.to_string_lossy().as_ref(), data.as_str())?;
        if let Some(parent) = path.parent() {
            document.values = Self::rebase(document.values, parent)?;
        }
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::builder::standard::StandardTestBuilder;
    use crate::context::Context;
    use crate::directive::Directive;
    use crate::exception::ExceptionType;
    use crate::resource::TestResource;
    use crate::test::expectation::Expectation;

    use super::Document;

    #[test]
    fn ok_success_document() {
        let data = r#"
input:
  main: "<p th:text=\"${user}\">x</p>"
  two:
    file: two.html
context:
  main:
    locale: en_US
    variables:
      user: Ann
output: "<p>Ann</p>"
"#;

        let document = Document::parse("success.yaml", data).expect("Always valid");
        let test = document
            .build(&StandardTestBuilder::new(), "exec-1")
            .expect("Always valid");

        assert_eq!(
            test.input,
            TestResource::inline("<p th:text=\"${user}\">x</p>")
        );
        assert_eq!(
            test.additional_inputs.get("two"),
            Some(&TestResource::File(PathBuf::from("two.html")))
        );
        assert_eq!(test.context.locale.as_deref(), Some("en_US"));
        assert_eq!(
            test.context.variables.get("user"),
            Some(&serde_json::json!("Ann"))
        );
        assert_eq!(
            test.expectation,
            Expectation::success(TestResource::inline("<p>Ann</p>"))
        );
    }

    #[test]
    fn ok_json_failure_document() {
        let data = r#"{
            "input": "<p th:text=\"${1/0}\">x</p>",
            "exception": "TemplateProcessingException",
            "exception-message-pattern": { "main": "Exception evaluating .*" },
            "template-mode": "XML",
            "cache": false
        }"#;

        let document = Document::parse("failure.json", data).expect("Always valid");
        let test = document
            .build(&StandardTestBuilder::new(), "exec-1")
            .expect("Always valid");

        assert!(!test.input_cacheable);
        assert_eq!(test.template_mode, "XML");
        assert_eq!(
            test.expectation,
            Expectation::failure(
                ExceptionType::new("TemplateProcessingException"),
                Some("Exception evaluating .*".to_owned())
            )
        );
    }

    #[test]
    fn ok_defaults() {
        let data = "input: \"<p/>\"\noutput: \"<p/>\"\n";

        let document = Document::parse("defaults.yaml", data).expect("Always valid");

        assert_eq!(
            document.values.main_value::<bool>(Directive::Cache),
            Some(&crate::DEFAULT_INPUT_CACHEABLE)
        );
        assert_eq!(
            document.values.main_value::<Context>(Directive::Context),
            Some(&Context::default())
        );
        assert_eq!(
            document
                .values
                .main_value::<String>(Directive::TemplateMode)
                .map(String::as_str),
            Some(crate::DEFAULT_TEMPLATE_MODE)
        );
    }

    #[test]
    fn ok_empty_qualifier_is_main() {
        let data = "input:\n  \"\": \"<p/>\"\noutput: \"<p/>\"\n";

        let document = Document::parse("empty.yaml", data).expect("Always valid");

        assert!(document.values.has_main_value(Directive::Input));
    }

    #[test]
    fn error_unknown_directive() {
        let error =
            Document::parse("unknown.yaml", "templateMode: HTML\n").expect_err("Must fail");

        assert!(error.to_string().contains("unknown.yaml"));
        assert!(error.to_string().contains("templateMode"));
    }

    #[test]
    fn error_invalid_value() {
        let data = "cache:\n  main: sometimes\n";

        let error = Document::parse("invalid.yaml", data).expect_err("Must fail");

        assert!(error
            .to_string()
            .contains("invalid value of directive `cache` (main)"));
    }

    fn documents_directory() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/documents/text")
    }

    #[test]
    fn ok_file_resources_rebased() {
        let path = documents_directory().join("th-text.yaml");

        let test = Document::try_from(path.as_path())
            .expect("Always valid")
            .build(&StandardTestBuilder::new(), "exec-1")
            .expect("Always valid");

        assert_eq!(test.name.as_deref(), Some("th:text escapes the variable"));
        assert_eq!(
            test.input,
            TestResource::File(documents_directory().join("th-text.html"))
        );
        assert_eq!(
            test.input.read().expect("Always valid"),
            "<p th:text=\"${user}\">placeholder</p>\n"
        );
        assert!(test.additional_inputs.contains_key("layout"));
        assert_eq!(
            test.output()
                .expect("Always exists")
                .read()
                .expect("Always valid"),
            "<p>&lt;Ann&gt;</p>\n"
        );
    }

    #[test]
    fn ok_file_fail_expected() {
        let path = documents_directory().join("th-text-division.json");

        let test = Document::try_from(path.as_path())
            .expect("Always valid")
            .build(&StandardTestBuilder::new(), "exec-1")
            .expect("Always valid");

        assert!(test.is_fail_expected());
        assert!(test
            .expectation
            .matches_failure(
                "TemplateProcessingException",
                "Exception evaluating SpringEL expression: \"1 / 0\""
            )
            .expect("Always valid"));
    }

    #[test]
    fn error_file_without_expectation() {
        let path = documents_directory().join("th-text-incomplete.yaml");

        let result = Document::try_from(path.as_path())
            .expect("Always valid")
            .build(&StandardTestBuilder::new(), "exec-1");

        match result {
            Err(crate::error::Error::TestDefinition { document_name, .. }) => {
                assert!(document_name.ends_with("th-text-incomplete.yaml"))
            }
            result => panic!("Unexpected result: {result:?}"),
        }
    }

    #[test]
    fn error_missing_file() {
        let path = PathBuf::from("/nonexistent/template-tester/document.yaml");

        assert!(Document::try_from(path.as_path()).is_err());
    }
}
