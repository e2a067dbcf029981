//! Query compilation.
//!
//! Turns a [`Criteria`](crate::criteria::Criteria) into one clause of the
//! Lucene/Solr query grammar, ready to be embedded in a `q` or `fq`
//! parameter by the caller.
//!
//! ```
//! use ckan_solr::criteria::{Criteria, Range};
//! use ckan_solr::query::QueryCompiler;
//!
//! let compiler = QueryCompiler::new();
//!
//! assert_eq!(compiler.compile(&Criteria::new("name").equals("foo")), "name:foo");
//! assert_eq!(compiler.compile(&Criteria::new("status").negate()), "-status:[* TO *]");
//! assert_eq!(
//!     compiler.compile(&Criteria::new("age").between(Range::at_most(10))),
//!     "age:[* TO 10]"
//! );
//! ```

pub mod compiler;
pub mod config;
pub mod escape;
pub mod generator;

pub use self::compiler::{QueryCompiler, compile};
pub use self::config::CompilerConfig;
pub use self::escape::{escape, quote, sanitize};
