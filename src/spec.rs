use regex::Regex;
use serde::Deserialize;

/// One searchable field on the target table.
///
/// Declarations mirror the conventional mixed-list shape: a plain string is a
/// direct column, a dotted string (`"author.email"`) references a field on a
/// declared relation, and an array of strings is a composite group whose
/// columns are concatenated (nulls as empty strings, space-separated) before
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFieldSpec")]
pub enum FieldSpec {
    Column(String),
    Composite(Vec<String>),
    Related { relation: String, field: String },
}

impl FieldSpec {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn composite<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Composite(columns.into_iter().map(Into::into).collect())
    }

    pub fn related(relation: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Related {
            relation: relation.into(),
            field: field.into(),
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(raw: &str) -> Self {
        // only the first dot separates relation from field; any extra dots
        // stay in the field part and fail identifier validation later
        match raw.split_once('.') {
            Some((relation, field)) => Self::related(relation, field),
            None => Self::Column(raw.to_owned()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldSpec {
    Single(String),
    Group(Vec<String>),
}

impl From<RawFieldSpec> for FieldSpec {
    fn from(raw: RawFieldSpec) -> Self {
        match raw {
            RawFieldSpec::Single(s) => Self::from(s.as_str()),
            RawFieldSpec::Group(columns) => Self::Composite(columns),
        }
    }
}

/// Explicit join declaration for a `relation.field` spec, standing in for the
/// association metadata an ORM would otherwise provide. Covers to-one and
/// to-many relations alike: a parent row matches when at least one row of
/// `table` satisfies `table.child_column = parent.parent_column`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Relation {
    pub name: String,
    pub table: String,
    pub parent_column: String,
    pub child_column: String,
}

impl Relation {
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        parent_column: impl Into<String>,
        child_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            parent_column: parent_column.into(),
            child_column: child_column.into(),
        }
    }
}

// Column and table names end up as raw SQL text, so only plain identifiers
// may ever pass; everything else is rejected at configuration time
pub(crate) fn valid_identifier(s: &str) -> bool {
    let re = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();

    re.is_match(s)
}
