//! CLI logic for the jersey design compiler.
//!
//! Reads a `.jersey` file (or a JSON design record), runs it through the
//! compiler and writes the SVG. Inspection switches print intermediate
//! stages instead of rendering.

pub mod error_adapter;
pub mod inspect;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use jersey::{
    JerseyBuilder, JerseyError,
    template::{JerseyDesign, design_to_source},
};

/// Run the jersey CLI application
///
/// # Errors
///
/// Returns `JerseyError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid design records
/// - Lexical, syntax and semantic errors
pub fn run(args: &Args) -> Result<(), JerseyError> {
    let Some(input) = args.input.as_deref() else {
        if args.show_grammar {
            print!("{}", jersey_parser::GRAMMAR);
            return Ok(());
        }
        return Err(JerseyError::Config("no input file given".to_string()));
    };

    info!(
        input_path = input,
        output_path = args.output;
        "Processing jersey design"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.debug {
        app_config = app_config.with_show_debug(true);
    }

    let text = fs::read_to_string(input)?;
    let source = if args.from_json {
        let design = JerseyDesign::from_json(&text)?;
        info!(team = design.team(); "Generated source from design record");
        design_to_source(&design)
    } else {
        text
    };

    if args.inspects() {
        return run_inspection(args, input, &source);
    }

    let builder = JerseyBuilder::new(app_config);
    let svg = builder.compile_to_svg(&source)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

fn run_inspection(args: &Args, input: &str, source: &str) -> Result<(), JerseyError> {
    print!("{}", inspection_report(args, input, source)?);
    Ok(())
}

/// Stdout text of the inspection switches: tokens, then the syntax tree,
/// then the grammar.
fn inspection_report(args: &Args, input: &str, source: &str) -> Result<String, JerseyError> {
    let mut report = String::new();
    if args.tokens || args.write_tokens {
        report.push_str(&inspect::token_listing(source)?);
    }
    if args.write_tokens {
        inspect::write_token_listing(input, source)?;
    }
    if args.show_ast {
        report.push_str(&format!("{:#?}\n", inspect::syntax_tree(source)?));
    }
    if args.show_grammar {
        report.push_str(jersey_parser::GRAMMAR);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "jersey { number: 7; }";

    #[test]
    fn test_grammar_follows_tokens_and_tree() {
        let args = Args {
            tokens: true,
            show_ast: true,
            show_grammar: true,
            ..Default::default()
        };

        let report = inspection_report(&args, "kit.jersey", SOURCE).unwrap();

        let tokens_at = report.find("1:1\tJERSEY\tjersey").unwrap();
        let tree_at = report.find("Program {").unwrap();
        let grammar_at = report.find("Program   ::=").unwrap();
        assert!(tokens_at < tree_at);
        assert!(tree_at < grammar_at);
        assert!(report.ends_with(jersey_parser::GRAMMAR));
    }

    #[test]
    fn test_grammar_alone_with_input() {
        let args = Args {
            show_grammar: true,
            ..Default::default()
        };

        let report = inspection_report(&args, "kit.jersey", SOURCE).unwrap();
        assert_eq!(report, jersey_parser::GRAMMAR);
    }
}
