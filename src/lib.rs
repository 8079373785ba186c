//! Fuzzy (substring) search predicates for [`sqlx::QueryBuilder`].
//!
//! Given a declared list of searchable fields and a user-supplied term, this
//! crate pushes a single grouped `WHERE` disjunction onto a caller-owned
//! query builder: one case-insensitive `LIKE` condition per field, OR-joined,
//! parenthesized so the group composes via AND with any other conditions.
//! "Fuzzy" means substring containment, not edit-distance matching.
//!
//! Fields come in three shapes: direct columns, composite column groups
//! (concatenated with nulls coalesced to empty strings before matching), and
//! `relation.field` references matched through a correlated `EXISTS`
//! sub-query. The search term is always a bound parameter; only declared,
//! validated identifiers ever reach the SQL text.
//!
//! ```
//! use sqlx_fuzzy_search::{FieldSpec, FuzzySearch, Relation, SearchConfig};
//!
//! # fn main() -> Result<(), sqlx_fuzzy_search::SpecError> {
//! let search = FuzzySearch::new(
//!     SearchConfig::new(
//!         "books",
//!         vec![
//!             FieldSpec::column("title"),
//!             FieldSpec::composite(["first_name", "last_name"]),
//!             FieldSpec::related("author", "email"),
//!         ],
//!     )
//!     .with_relation(Relation::new("author", "authors", "id", "book_id")),
//! )?;
//!
//! let mut query = sqlx::QueryBuilder::<sqlx::Postgres>::new("SELECT * FROM books");
//! search.push_clauses(&mut query, Some("jan"), None, false);
//!
//! assert!(query.sql().starts_with("SELECT * FROM books WHERE (title ILIKE $1"));
//! # Ok(())
//! # }
//! ```
//!
//! Executing the resulting query, pagination, and serialization stay with the
//! caller; this crate performs no I/O of its own.

mod config;
mod dialect;
mod errors;
mod search;
mod spec;
mod term;

pub use config::SearchConfig;
pub use dialect::Dialect;
pub use errors::{SpecError, SpecResult};
pub use search::FuzzySearch;
pub use spec::{FieldSpec, Relation};
pub use term::SearchTerm;
