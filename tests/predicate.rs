use sqlx_fuzzy_search::{Dialect, FieldSpec, FuzzySearch, Relation, SearchConfig};

// title, first_name+last_name, author.email -- the usual mixed declaration
fn books_search(dialect: Dialect) -> FuzzySearch {
    FuzzySearch::new(
        SearchConfig::new(
            "books",
            vec![
                FieldSpec::column("title"),
                FieldSpec::composite(["first_name", "last_name"]),
                FieldSpec::related("author", "email"),
            ],
        )
        .with_relation(Relation::new("author", "authors", "id", "book_id"))
        .with_dialect(dialect),
    )
    .unwrap()
}

#[cfg(feature = "postgres")]
mod postgres {
    use super::*;

    fn query() -> sqlx::QueryBuilder<'static, sqlx::Postgres> {
        sqlx::QueryBuilder::new("SELECT * FROM books")
    }

    #[test]
    fn empty_field_list_leaves_query_unchanged() {
        let search = FuzzySearch::new(SearchConfig::new("books", vec![])).unwrap();
        let mut query = query();

        search.push_clauses(&mut query, Some("anything"), None, false);

        assert_eq!(query.sql(), "SELECT * FROM books");
    }

    #[test]
    fn no_term_leaves_query_unchanged() {
        let search = books_search(Dialect::Postgres);
        let mut query = query();

        search.push_clauses(&mut query, None, None, false);

        assert_eq!(query.sql(), "SELECT * FROM books");
    }

    #[test]
    fn no_term_still_prepares_for_additional_conds() {
        let search = books_search(Dialect::Postgres);
        let mut query = query();

        search.push_clauses(&mut query, None, None, true);

        assert_eq!(query.sql(), "SELECT * FROM books WHERE");
    }

    #[test]
    fn direct_column_condition() {
        let search =
            FuzzySearch::new(SearchConfig::new("books", vec![FieldSpec::column("title")]))
                .unwrap();
        let mut query = query();

        search.push_clauses(&mut query, Some("jan"), None, false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books WHERE (title ILIKE $1)"
        );
    }

    #[test]
    fn mixed_specs_disjoin_in_one_group() {
        let search = books_search(Dialect::Postgres);
        let mut query = query();

        search.push_clauses(&mut query, Some("jan"), None, false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books WHERE (\
             title ILIKE $1 \
             OR coalesce(first_name, '') || ' ' || coalesce(last_name, '') ILIKE $2 \
             OR EXISTS (SELECT 1 FROM authors \
             WHERE authors.book_id = books.id AND authors.email ILIKE $3))"
        );
    }

    #[test]
    fn table_alias_qualifies_columns_and_correlation() {
        let search = books_search(Dialect::Postgres);
        let mut query = sqlx::QueryBuilder::<sqlx::Postgres>::new("SELECT * FROM books bs");

        search.push_clauses(&mut query, Some("jan"), Some("bs"), false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books bs WHERE (\
             bs.title ILIKE $1 \
             OR coalesce(bs.first_name, '') || ' ' || coalesce(bs.last_name, '') ILIKE $2 \
             OR EXISTS (SELECT 1 FROM authors \
             WHERE authors.book_id = bs.id AND authors.email ILIKE $3))"
        );
    }

    #[test]
    fn group_composes_with_following_conditions() {
        let search = books_search(Dialect::Postgres);
        let mut query = query();

        search.push_clauses(&mut query, Some("jan"), None, true);
        query.push(" published = ");
        query.push_bind(true);

        let sql = query.sql().to_owned();
        assert!(sql.contains(" WHERE (title ILIKE $1 OR "));
        assert!(sql.ends_with(") AND published = $4"));
    }

    #[test]
    fn empty_term_is_still_a_condition() {
        // "%%" matches everything, but the predicate is emitted all the same
        let search =
            FuzzySearch::new(SearchConfig::new("books", vec![FieldSpec::column("title")]))
                .unwrap();
        let mut query = query();

        search.push_clauses(&mut query, Some(""), None, false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books WHERE (title ILIKE $1)"
        );
    }
}

#[cfg(feature = "mysql")]
mod mysql {
    use super::*;

    #[test]
    fn mixed_specs_use_concat_ifnull_and_like() {
        let search = books_search(Dialect::MySql);
        let mut query = sqlx::QueryBuilder::<sqlx::MySql>::new("SELECT * FROM books");

        search.push_clauses(&mut query, Some("jan"), None, false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books WHERE (\
             title LIKE ? \
             OR CONCAT(IFNULL(first_name, ''), ' ', IFNULL(last_name, '')) LIKE ? \
             OR EXISTS (SELECT 1 FROM authors \
             WHERE authors.book_id = books.id AND authors.email LIKE ?))"
        );
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;

    #[test]
    fn escaping_adds_explicit_escape_clause() {
        // SQLite LIKE has no default escape character
        let search = FuzzySearch::new(
            SearchConfig::new("books", vec![FieldSpec::column("title")])
                .with_dialect(Dialect::Sqlite),
        )
        .unwrap();
        let mut query = sqlx::QueryBuilder::<sqlx::Sqlite>::new("SELECT * FROM books");

        search.push_clauses(&mut query, Some("50%"), None, false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books WHERE (title LIKE ? ESCAPE '\\')"
        );
    }

    #[test]
    fn verbatim_wildcards_skip_escape_clause() {
        let search = FuzzySearch::new(
            SearchConfig::new("books", vec![FieldSpec::column("title")])
                .with_dialect(Dialect::Sqlite)
                .with_escape_wildcards(false),
        )
        .unwrap();
        let mut query = sqlx::QueryBuilder::<sqlx::Sqlite>::new("SELECT * FROM books");

        search.push_clauses(&mut query, Some("50%"), None, false);

        assert_eq!(
            query.sql(),
            "SELECT * FROM books WHERE (title LIKE ?)"
        );
    }
}
