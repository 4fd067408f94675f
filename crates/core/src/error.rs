use thiserror::Error;

use crate::model::OrderError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Order(#[from] OrderError),
}
