use thiserror::Error;

use crate::core::catalog::CatalogError;
use crate::core::history::HistoryError;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
