//! # Service Error Types
//!
//! Error surface for the sale transaction service. Callers match on
//! [`ServiceError::Core`] for business outcomes they can present to a user
//! (insufficient stock, not found, bad quantity) and treat
//! [`ServiceError::Storage`] as an operational failure.

use thiserror::Error;

use shelftrack_core::{CoreError, ValidationError};
use shelftrack_db::DbError;

/// Errors produced by the sale transaction service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A business rule rejected the operation. The transaction either never
    /// started or was rolled back; no state changed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database layer failed. May indicate a rolled-back transaction,
    /// a connection problem, or a constraint the business checks missed.
    #[error("Storage failure: {0}")]
    Storage(#[from] DbError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Core(CoreError::Validation(err))
    }
}

impl ServiceError {
    /// True when the error is a business rejection the caller can surface
    /// directly (as opposed to an operational failure worth retrying or
    /// alerting on).
    pub fn is_business_rejection(&self) -> bool {
        matches!(self, ServiceError::Core(_))
    }
}

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let business: ServiceError = CoreError::ProductNotFound(7).into();
        assert!(business.is_business_rejection());
        assert_eq!(business.to_string(), "Product not found: 7");

        let storage: ServiceError = DbError::not_found("Sale", 3).into();
        assert!(!storage.is_business_rejection());
        assert!(storage.to_string().starts_with("Storage failure"));
    }

    #[test]
    fn test_validation_error_maps_to_core() {
        let err: ServiceError = ValidationError::MustBePositive {
            field: "quantity_sold".to_string(),
        }
        .into();
        assert!(err.is_business_rejection());
    }
}
