use serde::Deserialize;

/// Target database engine, selected once at configuration time. Everything
/// engine-specific about the generated SQL text lives here.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    /// Case-insensitive substring-match operator. Postgres `LIKE` compares
    /// case-sensitively, so it gets `ILIKE`; MySQL and SQLite already compare
    /// case-insensitively under their default collations.
    pub fn like_operator(self) -> &'static str {
        match self {
            Self::Postgres => "ILIKE",
            Self::MySql | Self::Sqlite => "LIKE",
        }
    }

    /// SQLite `LIKE` has no default escape character, unlike Postgres and
    /// MySQL where backslash already escapes.
    pub fn escape_clause(self) -> &'static str {
        match self {
            Self::Sqlite => " ESCAPE '\\'",
            Self::Postgres | Self::MySql => "",
        }
    }

    /// Space-separated concatenation of `columns` with nulls coalesced to
    /// empty strings. This names real column identifiers, so it is raw SQL
    /// text rather than a bindable value; callers must only pass validated
    /// identifiers.
    pub fn concat_coalesced(self, columns: &[String], table_alias: Option<&str>) -> String {
        let parts: Vec<String> = columns
            .iter()
            .map(|col| {
                let col = match table_alias {
                    Some(alias) => format!("{alias}.{col}"),
                    None => col.clone(),
                };
                match self {
                    Self::MySql => format!("IFNULL({col}, '')"),
                    Self::Postgres | Self::Sqlite => format!("coalesce({col}, '')"),
                }
            })
            .collect();

        match self {
            Self::MySql if parts.len() > 1 => format!("CONCAT({})", parts.join(", ' ', ")),
            Self::MySql => parts.into_iter().next().unwrap_or_default(),
            Self::Postgres | Self::Sqlite => parts.join(" || ' ' || "),
        }
    }
}
