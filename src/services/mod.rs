//! Page-loading services, generic over the catalog reader traits.

use thiserror::Error;

use crate::catalog::errors::CatalogError;

pub mod books;
pub mod main;
pub mod shows;
pub mod stations;
pub mod topics;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed record does not exist.
    #[error("Not found")]
    NotFound,

    /// Primary data could not be fetched from the catalog API.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
