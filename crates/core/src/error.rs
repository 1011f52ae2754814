use crate::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),
}
