use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("A stay named '{0}' already exists")]
    DuplicateName(String),

    #[error("Stay '{0}' not found")]
    NotFound(Uuid),

    #[error("Hotel name cannot be empty")]
    EmptyName,

    #[error("Cooldown must be a positive number of days")]
    InvalidCooldown,
}
