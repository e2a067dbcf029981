//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{CkanSolrArgs, OutputFormat};
use crate::error::Result;

/// One compiled clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledClause {
    pub field: String,
    pub query: String,
}

/// Result of the escape command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscapedValue {
    pub input: String,
    pub escaped: String,
}

/// Human-readable rendering of a result.
pub trait HumanOutput {
    /// Lines printed in human format.
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for Vec<CompiledClause> {
    fn human_lines(&self) -> Vec<String> {
        self.iter().map(|clause| clause.query.clone()).collect()
    }
}

impl HumanOutput for EscapedValue {
    fn human_lines(&self) -> Vec<String> {
        vec![self.escaped.clone()]
    }
}

/// Output a result to stdout in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &CkanSolrArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, result, &args.output_format, args.pretty)
}

/// Write a result in the given format.
pub fn write_result<W, T>(writer: &mut W, result: &T, format: &OutputFormat, pretty: bool) -> Result<()>
where
    W: Write,
    T: Serialize + HumanOutput,
{
    match format {
        OutputFormat::Human => {
            for line in result.human_lines() {
                writeln!(writer, "{line}")?;
            }
        }
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(writer, "{json}")?;
        }
    }
    Ok(())
}
