use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unable to find field `{field}` in point type")]
    FieldNotFound { field: String },
}
