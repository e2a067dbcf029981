//! Command line argument parsing for the ckan-solr CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::criteria::{Criteria, Range, Scalar};

/// ckan-solr - compile search criteria into Solr query clauses
#[derive(Parser, Debug, Clone)]
#[command(name = "ckan-solr")]
#[command(about = "Compile structured search criteria into Lucene/Solr query clauses")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CkanSolrArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Compiler configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "CKAN_SOLR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Sort fragments for byte-stable output
    #[arg(long)]
    pub canonical_order: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CkanSolrArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compile one criteria given on the command line
    Compile(CompileArgs),

    /// Compile every criteria in a JSON or JSON Lines file
    File(FileArgs),

    /// Show how a value is escaped and quoted
    Escape(EscapeArgs),
}

/// Arguments for compiling a single criteria
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Field the clause applies to
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Exclude matches instead of including them
    #[arg(long = "not")]
    pub negate: bool,

    /// Exact-match value (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub equals: Vec<String>,

    /// Substring value (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub contains: Vec<String>,

    /// Prefix value (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub starts_with: Vec<String>,

    /// Suffix value (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub ends_with: Vec<String>,

    /// Raw query syntax, emitted without escaping (repeatable)
    #[arg(long, value_name = "EXPR")]
    pub expression: Vec<String>,

    /// Add a range predicate even if both bounds are open
    #[arg(long)]
    pub between: bool,

    /// Lower range bound
    #[arg(long, value_name = "VALUE")]
    pub lower: Option<String>,

    /// Upper range bound
    #[arg(long, value_name = "VALUE")]
    pub upper: Option<String>,

    /// Make the lower bound exclusive
    #[arg(long)]
    pub exclude_lower: bool,

    /// Make the upper bound exclusive
    #[arg(long)]
    pub exclude_upper: bool,
}

impl CompileArgs {
    /// Check whether a range predicate was requested.
    pub fn has_range(&self) -> bool {
        self.between || self.lower.is_some() || self.upper.is_some()
    }

    /// Build the criteria described by these arguments.
    pub fn to_criteria(&self) -> Criteria {
        let mut criteria = Criteria::new(self.field.as_str()).with_negating(self.negate);

        for value in &self.equals {
            criteria = criteria.equals(value.as_str());
        }
        for value in &self.contains {
            criteria = criteria.contains(value.as_str());
        }
        for value in &self.starts_with {
            criteria = criteria.starts_with(value.as_str());
        }
        for value in &self.ends_with {
            criteria = criteria.ends_with(value.as_str());
        }
        for value in &self.expression {
            criteria = criteria.expression(value.as_str());
        }

        if self.has_range() {
            criteria = criteria.between(Range::new(
                self.lower.as_deref().map(Scalar::from),
                self.upper.as_deref().map(Scalar::from),
                !self.exclude_lower,
                !self.exclude_upper,
            ));
        }

        criteria
    }
}

/// Arguments for compiling criteria from a file
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Criteria file: a JSON array or one JSON object per line
    #[arg(value_name = "CRITERIA_FILE")]
    pub path: PathBuf,
}

/// Arguments for escaping a value
#[derive(Parser, Debug, Clone)]
pub struct EscapeArgs {
    /// Value to escape
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Only escape, do not quote
    #[arg(long)]
    pub no_quote: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::criteria::Predicate;

    #[test]
    fn test_compile_command() {
        let args = CkanSolrArgs::try_parse_from([
            "ckan-solr",
            "compile",
            "tags",
            "--equals",
            "a",
            "--equals",
            "b c",
            "--contains",
            "x",
        ])
        .unwrap();

        if let Command::Compile(compile_args) = args.command {
            assert_eq!(compile_args.field, "tags");
            assert_eq!(compile_args.equals, vec!["a", "b c"]);
            assert_eq!(compile_args.contains, vec!["x"]);
            assert!(!compile_args.negate);
            assert!(!compile_args.has_range());
        } else {
            panic!("Expected Compile command");
        }
    }

    #[test]
    fn test_compile_args_to_criteria() {
        let args = CkanSolrArgs::try_parse_from([
            "ckan-solr",
            "compile",
            "age",
            "--not",
            "--upper",
            "10",
            "--exclude-upper",
        ])
        .unwrap();

        let Command::Compile(compile_args) = args.command else {
            panic!("Expected Compile command");
        };
        let criteria = compile_args.to_criteria();

        assert!(criteria.is_negating());
        assert!(criteria.predicates().contains(&Predicate::Between(Range::new(
            None,
            Some(Scalar::from("10")),
            true,
            false
        ))));
    }

    #[test]
    fn test_file_command() {
        let args = CkanSolrArgs::try_parse_from(["ckan-solr", "file", "criteria.jsonl"]).unwrap();

        if let Command::File(file_args) = args.command {
            assert_eq!(file_args.path, PathBuf::from("criteria.jsonl"));
        } else {
            panic!("Expected File command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = CkanSolrArgs::try_parse_from(["ckan-solr", "escape", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = CkanSolrArgs::try_parse_from(["ckan-solr", "-vv", "escape", "x"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = CkanSolrArgs::try_parse_from(["ckan-solr", "--quiet", "escape", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            CkanSolrArgs::try_parse_from(["ckan-solr", "--format", "json", "escape", "x"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
