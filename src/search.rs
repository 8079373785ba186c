use std::collections::HashMap;

use log::*;

use crate::{
    config::SearchConfig,
    dialect::Dialect,
    errors::{SpecError, SpecResult},
    spec::{self, FieldSpec, Relation},
    term::SearchTerm,
};

/// A validated fuzzy-search declaration for one table.
///
/// Construction checks every identifier and resolves every relation
/// reference, so [`push_clauses`](Self::push_clauses) itself cannot fail:
/// it is a pure, stateless pass over the field list and may be shared
/// freely between concurrent callers.
#[derive(Debug)]
pub struct FuzzySearch {
    table: String,
    conditions: Vec<Condition>,
    dialect: Dialect,
    escape_wildcards: bool,
}

// FieldSpec with the relation reference resolved up front
#[derive(Debug)]
enum Condition {
    Column(String),
    Composite(Vec<String>),
    Related { relation: Relation, field: String },
}

impl FuzzySearch {
    pub fn new(config: SearchConfig) -> SpecResult<Self> {
        check_identifier(&config.table)?;

        let mut relations = HashMap::new();
        for relation in config.relations {
            check_identifier(&relation.table)?;
            check_identifier(&relation.parent_column)?;
            check_identifier(&relation.child_column)?;
            relations.insert(relation.name.clone(), relation);
        }

        let mut conditions = vec![];
        for field in config.fields {
            conditions.push(match field {
                FieldSpec::Column(col) => {
                    check_identifier(&col)?;
                    Condition::Column(col)
                }
                FieldSpec::Composite(cols) => {
                    if cols.is_empty() {
                        return Err(SpecError::EmptyComposite);
                    }
                    for col in &cols {
                        check_identifier(col)?;
                    }
                    Condition::Composite(cols)
                }
                FieldSpec::Related { relation, field } => {
                    check_identifier(&field)?;
                    let relation = relations
                        .get(&relation)
                        .cloned()
                        .ok_or(SpecError::UnknownRelation(relation))?;
                    Condition::Related { relation, field }
                }
            });
        }

        Ok(Self {
            table: config.table,
            conditions,
            dialect: config.dialect,
            escape_wildcards: config.escape_wildcards,
        })
    }

    /// Pushes ` WHERE (a ILIKE $1 OR b ILIKE $2 OR ...)` onto `query`, one
    /// sub-condition per declared field, grouped so the disjunction composes
    /// via AND with whatever else the caller adds.
    ///
    /// With `term == None` or an empty field list the query passes through
    /// unchanged. `additional_conds` prepares the query for further
    /// conditions: a trailing ` AND` after the group, or a bare ` WHERE`
    /// when the group itself is skipped.
    pub fn push_clauses<'args, DB>(
        &self,
        query: &mut sqlx::QueryBuilder<'args, DB>,
        term: Option<&str>,
        table_alias: Option<&str>,
        additional_conds: bool,
    ) where
        DB: sqlx::Database,
        String: sqlx::Encode<'args, DB> + sqlx::Type<DB>,
    {
        let Some(search) = term else {
            if additional_conds {
                // need to have WHERE anyway to prepare for more conditions
                query.push(" WHERE");
            }
            return;
        };

        if self.conditions.is_empty() {
            if additional_conds {
                query.push(" WHERE");
            }
            return;
        }

        // each sub-condition binds its own copy of the pattern; push_bind
        // numbers every parameter itself, so sharing a single $1 across
        // conditions is not possible here
        let term = if self.escape_wildcards {
            SearchTerm::from(search)
        } else {
            SearchTerm::verbatim(search)
        };
        let pattern = term.anywhere();

        let parent = table_alias.unwrap_or(&self.table);

        debug!(
            "fuzzy search on {}: {} fields, {:?}",
            self.table,
            self.conditions.len(),
            self.dialect
        );

        query.push(" WHERE (");

        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                query.push(" OR ");
            }
            match condition {
                Condition::Column(col) => {
                    if let Some(alias) = table_alias {
                        query.push(alias);
                        query.push(".");
                    }
                    query.push(col.as_str());
                    self.push_match(query, &pattern);
                }
                Condition::Composite(cols) => {
                    query.push(self.dialect.concat_coalesced(cols, table_alias));
                    self.push_match(query, &pattern);
                }
                Condition::Related { relation, field } => {
                    // existential sub-query: the row matches when at least
                    // one related row's field contains the term
                    query.push("EXISTS (SELECT 1 FROM ");
                    query.push(relation.table.as_str());
                    query.push(" WHERE ");
                    query.push(relation.table.as_str());
                    query.push(".");
                    query.push(relation.child_column.as_str());
                    query.push(" = ");
                    query.push(parent);
                    query.push(".");
                    query.push(relation.parent_column.as_str());
                    query.push(" AND ");
                    query.push(relation.table.as_str());
                    query.push(".");
                    query.push(field.as_str());
                    self.push_match(query, &pattern);
                    query.push(")");
                }
            }
        }

        query.push(")");

        if additional_conds {
            // prepare for more conditions
            query.push(" AND");
        }
    }

    fn push_match<'args, DB>(&self, query: &mut sqlx::QueryBuilder<'args, DB>, pattern: &str)
    where
        DB: sqlx::Database,
        String: sqlx::Encode<'args, DB> + sqlx::Type<DB>,
    {
        query.push(" ");
        query.push(self.dialect.like_operator());
        query.push(" ");
        query.push_bind(pattern.to_owned());

        if self.escape_wildcards {
            query.push(self.dialect.escape_clause());
        }
    }
}

fn check_identifier(s: &str) -> SpecResult<()> {
    if spec::valid_identifier(s) {
        Ok(())
    } else {
        Err(SpecError::InvalidIdentifier(s.to_owned()))
    }
}
