use serde::Deserialize;

use crate::{
    dialect::Dialect,
    spec::{FieldSpec, Relation},
};

/// Per-table search declaration: which table is searched, over which fields,
/// through which relations, against which database engine.
///
/// Derives [`Deserialize`] so hosts can keep the declaration in their own
/// configuration files next to everything else.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchConfig {
    pub table: String,

    pub fields: Vec<FieldSpec>,

    #[serde(default)]
    pub relations: Vec<Relation>,

    #[serde(default = "defaults::dialect")]
    pub dialect: Dialect,

    // escaping user-supplied `%`/`_`/`\` is the default; opting out restores
    // wildcard pass-through, where user input keeps its SQL pattern meaning
    #[serde(default = "defaults::escape_wildcards")]
    pub escape_wildcards: bool,
}

impl SearchConfig {
    pub fn new(table: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            table: table.into(),
            fields,
            relations: vec![],
            dialect: defaults::dialect(),
            escape_wildcards: defaults::escape_wildcards(),
        }
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_escape_wildcards(mut self, escape: bool) -> Self {
        self.escape_wildcards = escape;
        self
    }
}

mod defaults {
    use crate::dialect::Dialect;

    pub(super) fn dialect() -> Dialect {
        Dialect::Postgres
    }

    pub(super) fn escape_wildcards() -> bool {
        true
    }
}
