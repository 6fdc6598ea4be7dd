//! Command-line argument definitions for the jersey CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, logging verbosity and the inspection switches.

use clap::Parser;

/// Command-line arguments for the jersey design compiler
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input jersey file
    #[arg(
        help = "Path to the input file",
        required_unless_present = "show_grammar"
    )]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Draw the debug overlay regardless of the configuration file
    #[arg(long)]
    pub debug: bool,

    /// Treat the input as a JSON design record
    #[arg(long)]
    pub from_json: bool,

    /// Print the token stream instead of rendering
    #[arg(long)]
    pub tokens: bool,

    /// Print the token stream and also write it to `<INPUT>.tokens.txt`
    #[arg(long)]
    pub write_tokens: bool,

    /// Print the syntax tree instead of rendering
    #[arg(long)]
    pub show_ast: bool,

    /// Print the grammar, after any token or syntax tree output
    #[arg(long)]
    pub show_grammar: bool,
}

impl Args {
    /// Whether any switch replaces rendering with inspection output.
    pub fn inspects(&self) -> bool {
        self.tokens || self.write_tokens || self.show_ast || self.show_grammar
    }
}
