//! # ckan-solr
//!
//! Compiles structured search criteria into Lucene/Solr query clauses.
//!
//! ## Features
//!
//! - Typed criteria model: one field, a negation flag, a set of predicates
//! - Equals, contains, starts-with, ends-with, raw expression and range
//!   predicates
//! - Escaping and quoting of values for the Solr query grammar
//! - Stateless, thread-safe compiler with parallel batch compilation
//!
//! ```
//! use ckan_solr::prelude::*;
//!
//! let criteria = Criteria::new("tags").equals("economy");
//! assert_eq!(compile(&criteria), "tags:economy");
//! ```

pub mod cli;
pub mod criteria;
pub mod error;
pub mod query;

pub mod prelude {
    pub use crate::criteria::{Criteria, Operation, Predicate, Range, Scalar};
    pub use crate::error::{CriteriaError, Result};
    pub use crate::query::{CompilerConfig, QueryCompiler, compile};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
