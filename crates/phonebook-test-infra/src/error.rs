use std::result::Result as StdResult;
use thiserror::Error;

/// Failures while standing up test infrastructure.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("Container error: {0}")]
    Container(#[from] testcontainers::TestcontainersError),
    #[error("MySQL still unreachable after {attempts} attempts: {source}")]
    Unreachable { attempts: u32, source: sqlx::Error },
}

pub type Result<T> = StdResult<T, TestInfraError>;
