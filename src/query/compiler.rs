//! Compiler from [`Criteria`] to a Lucene/Solr query clause.

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::criteria::Criteria;
use crate::query::config::CompilerConfig;
use crate::query::generator::generate;

/// Prefix marking a negated clause.
pub const NOT: &str = "-";

/// Separator between field name and value.
pub const DELIMITER: &str = ":";

/// Value emitted for a criteria without predicates: the field has any value.
pub const MATCH_ANY: &str = "[* TO *]";

/// Separator between fragments within one clause.
pub const FRAGMENT_SEPARATOR: &str = " ";

/// Stateless compiler turning criteria into query clauses.
///
/// Cheap to construct and `Send + Sync`; build one and share it.
#[derive(Debug, Clone, Default)]
pub struct QueryCompiler {
    config: CompilerConfig,
}

impl QueryCompiler {
    /// Create a compiler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with the given configuration.
    pub fn with_config(config: CompilerConfig) -> Self {
        QueryCompiler { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile one criteria into a clause such as `tags:(a "b c")`.
    ///
    /// - a negated criteria is prefixed with `-`
    /// - no predicates yields `field:[* TO *]`
    /// - a single fragment is emitted bare, several are space-joined inside
    ///   parentheses
    ///
    /// Unless `canonical_order` is set, the order of fragments inside the
    /// parentheses is unspecified.
    pub fn compile(&self, criteria: &Criteria) -> String {
        let field = criteria.field();
        if field.is_empty() {
            warn!("Compiling criteria with an empty field name");
        }

        let mut query = String::new();
        if criteria.is_negating() {
            query.push_str(NOT);
        }
        query.push_str(field);
        query.push_str(DELIMITER);

        if !criteria.has_predicates() {
            query.push_str(MATCH_ANY);
            trace!("Compiled criteria on '{field}': {query}");
            return query;
        }

        let mut fragments: Vec<_> = criteria
            .predicates()
            .iter()
            .map(|predicate| (predicate.operation(), generate(predicate)))
            .collect();

        if self.config.canonical_order {
            fragments.sort();
        }

        let grouped = fragments.len() > 1;
        if grouped {
            query.push('(');
        }
        for (i, (_, fragment)) in fragments.iter().enumerate() {
            if i > 0 {
                query.push_str(FRAGMENT_SEPARATOR);
            }
            query.push_str(fragment);
        }
        if grouped {
            query.push(')');
        }

        trace!("Compiled criteria on '{field}': {query}");
        query
    }

    /// Compile a batch of criteria, preserving input order.
    ///
    /// Batches at or above `parallel_threshold` are compiled on the rayon pool.
    pub fn compile_all(&self, criteria: &[Criteria]) -> Vec<String> {
        if criteria.len() >= self.config.parallel_threshold {
            debug!("Compiling {} criteria in parallel", criteria.len());
            criteria.par_iter().map(|c| self.compile(c)).collect()
        } else {
            debug!("Compiling {} criteria", criteria.len());
            criteria.iter().map(|c| self.compile(c)).collect()
        }
    }
}

/// Compile with a default-configured compiler.
pub fn compile(criteria: &Criteria) -> String {
    QueryCompiler::new().compile(criteria)
}
