pub type SpecResult<T> = Result<T, SpecError>;

/// Configuration errors detected when a [`FuzzySearch`](crate::FuzzySearch)
/// is constructed. Nothing here fires at query-building time.
#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("invalid SQL identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("field references undeclared relation: {0:?}")]
    UnknownRelation(String),
    #[error("composite field group is empty")]
    EmptyComposite,
}
