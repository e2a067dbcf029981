//! Command implementations for the ckan-solr CLI.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::criteria::Criteria;
use crate::error::{CriteriaError, Result};
use crate::query::{CompilerConfig, QueryCompiler, escape, sanitize};

/// Execute a CLI command.
pub fn execute_command(args: CkanSolrArgs) -> Result<()> {
    match &args.command {
        Command::Compile(compile_args) => compile_criteria(compile_args, &args),
        Command::File(file_args) => compile_file(file_args, &args),
        Command::Escape(escape_args) => escape_value(escape_args, &args),
    }
}

/// Build the compiler from the config file and flags.
pub fn build_compiler(args: &CkanSolrArgs) -> Result<QueryCompiler> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading compiler config from: {}", path.display());
            CompilerConfig::from_file(path)?
        }
        None => CompilerConfig::default(),
    };

    if args.canonical_order {
        config.canonical_order = true;
    }

    debug!("Compiler config: {config:?}");
    Ok(QueryCompiler::with_config(config))
}

/// Compile the criteria described on the command line.
fn compile_criteria(args: &CompileArgs, cli_args: &CkanSolrArgs) -> Result<()> {
    let compiler = build_compiler(cli_args)?;
    let criteria = args.to_criteria();

    let clauses = vec![CompiledClause {
        field: criteria.field().to_string(),
        query: compiler.compile(&criteria),
    }];

    output_result(&clauses, cli_args)
}

/// Compile every criteria in a file.
fn compile_file(args: &FileArgs, cli_args: &CkanSolrArgs) -> Result<()> {
    let compiler = build_compiler(cli_args)?;

    info!("Reading criteria from: {}", args.path.display());
    let criteria = load_criteria(&args.path)?;
    info!("Loaded {} criteria", criteria.len());

    let clauses: Vec<CompiledClause> = criteria
        .iter()
        .zip(compiler.compile_all(&criteria))
        .map(|(c, query)| CompiledClause {
            field: c.field().to_string(),
            query,
        })
        .collect();

    output_result(&clauses, cli_args)
}

/// Show the escaped form of a value.
fn escape_value(args: &EscapeArgs, cli_args: &CkanSolrArgs) -> Result<()> {
    let escaped = if args.no_quote {
        escape(&args.value)
    } else {
        sanitize(&args.value)
    };

    output_result(
        &EscapedValue {
            input: args.value.clone(),
            escaped,
        },
        cli_args,
    )
}

/// Load criteria from a file.
///
/// A file whose first non-blank character is `[` is read as a JSON array;
/// anything else as JSON Lines, skipping blank lines.
pub fn load_criteria<P: AsRef<Path>>(path: P) -> Result<Vec<Criteria>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_criteria(&content)
}

/// Parse criteria from JSON array or JSON Lines text.
pub fn parse_criteria(content: &str) -> Result<Vec<Criteria>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    let mut criteria = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parsed: Criteria = serde_json::from_str(line).map_err(|e| {
            CriteriaError::invalid_argument(format!("line {}: {}", line_num + 1, e))
        })?;
        criteria.push(parsed);
    }

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"field": "name", "predicates": [{"operation": "EQUALS", "value": "foo"}]},
            {"field": "status", "negating": true}
        ]"#;

        let criteria = parse_criteria(content).unwrap();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0], Criteria::new("name").equals("foo"));
        assert_eq!(criteria[1], Criteria::new("status").negate());
    }

    #[test]
    fn test_parse_json_lines() {
        let content = "{\"field\": \"a\"}\n\n{\"field\": \"b\", \"negating\": true}\n";

        let criteria = parse_criteria(content).unwrap();
        assert_eq!(criteria, vec![Criteria::new("a"), Criteria::new("b").negate()]);
    }

    #[test]
    fn test_parse_json_lines_reports_line() {
        let content = "{\"field\": \"a\"}\n{\"field\": \"b\", \"predicates\": [{\"operation\": \"BETWEEN\", \"value\": 1}]}\n";

        match parse_criteria(content) {
            Err(CriteriaError::InvalidArgument(msg)) => assert!(msg.starts_with("line 2:")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_load_criteria_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"field": "tags", "predicates": [{{"operation": "CONTAINS", "value": "a*b"}}]}}"#).unwrap();

        let criteria = load_criteria(file.path()).unwrap();
        assert_eq!(criteria, vec![Criteria::new("tags").contains("a*b")]);
    }

    #[test]
    fn test_build_compiler_canonical_flag() {
        let args = CkanSolrArgs::try_parse_from(["ckan-solr", "--canonical-order", "escape", "x"])
            .unwrap();

        let compiler = build_compiler(&args).unwrap();
        assert!(compiler.config().canonical_order);
    }

    #[test]
    fn test_build_compiler_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"parallel_threshold": 4}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args =
            CkanSolrArgs::try_parse_from(["ckan-solr", "--config", path.as_str(), "escape", "x"])
                .unwrap();

        let compiler = build_compiler(&args).unwrap();
        assert_eq!(compiler.config().parallel_threshold, 4);
        assert!(!compiler.config().canonical_order);
    }
}
