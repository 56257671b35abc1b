use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned when a record cannot be matched.
pub enum ModelError {
    /// Brand is missing or blank; there is nothing to retrieve candidates by.
    #[error("description has no brand")]
    MissingBrand,
}
