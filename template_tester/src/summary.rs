//!
//! The test building summary.
//!

use colored::Colorize;

use crate::test::Test;

///
/// The test building summary.
///
#[derive(Debug, Default)]
pub struct Summary {
    /// The number of documents turned into tests.
    pub built: usize,
    /// The number of documents which could not be loaded or built.
    pub failed: usize,
    /// The number of tests expecting a success.
    pub success_expected: usize,
    /// The number of tests expecting a failure.
    pub fail_expected: usize,
    /// Whether the per-document lines are suppressed.
    quiet: bool,
    /// Whether the built tests are dumped.
    verbose: bool,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            ..Default::default()
        }
    }

    ///
    /// Records a built test.
    ///
    pub fn built(&mut self, document_name: &str, test: &Test) -> anyhow::Result<()> {
        self.built += 1;
        if test.is_success_expected() {
            self.success_expected += 1;
        } else {
            self.fail_expected += 1;
        }

        if self.quiet {
            return Ok(());
        }
        println!(
            "       {} {} {}",
            "Built".bright_green().bold(),
            document_name,
            test.to_string().bright_black()
        );
        if self.verbose {
            println!("{}", serde_json::to_string_pretty(test)?);
        }
        Ok(())
    }

    ///
    /// Records a document that could not be turned into a test.
    ///
    pub fn failed(&mut self, document_name: &str, error: &anyhow::Error) {
        self.failed += 1;

        if self.quiet {
            return;
        }
        println!(
            "      {} {}: {}",
            "Failed".bright_red().bold(),
            document_name,
            error
        );
    }

    ///
    /// Whether every document has been turned into a test.
    ///
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "    {} {} documents: {} built ({} success expected, {} fail expected), {} failed",
            "Summary".bright_green().bold(),
            self.built + self.failed,
            self.built.to_string().green(),
            self.success_expected,
            self.fail_expected,
            self.failed.to_string().bright_red(),
        )
    }
}
