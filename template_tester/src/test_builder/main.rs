//!
//! The test builder executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use template_tester::Document;
use template_tester::StandardTestBuilder;
use template_tester::Summary;

use self::arguments::Arguments;

/// The process exit code on success.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let builder = StandardTestBuilder::new();
    let mut summary = Summary::new(arguments.verbose, arguments.quiet);

    for path in arguments.documents.iter() {
        let document_name = path.to_string_lossy();
        match Document::try_from(path.as_path())
            .and_then(|document| Ok(document.build(&builder, arguments.execution_id.as_str())?))
        {
            Ok(test) => summary.built(document_name.as_ref(), &test)?,
            Err(error) => summary.failed(document_name.as_ref(), &error),
        }
    }

    print!("{summary}");

    if !summary.is_successful() {
        anyhow::bail!("{} test documents are invalid", summary.failed);
    }

    Ok(())
}
