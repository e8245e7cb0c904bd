/// Recoverable outcomes of list operations that could not proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs at least one element and the list has none.
    EmptyList,
    /// The requested value or position does not exist in the chain.
    NotFound,
}

impl std::error::Error for ListError {}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::EmptyList => write!(f, "list is empty"),
            ListError::NotFound => write!(f, "no such value or position in list"),
        }
    }
}
