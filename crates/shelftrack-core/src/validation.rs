//! # Validation Module
//!
//! Input validation for product edits and sale requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Caller (HTTP layer, out of scope here)                    │
//! │  ├── Type validation (non-numeric ids never reach the service)      │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  ├── CHECK constraints (non-negative stock)                         │
//! │  └── Foreign key constraints                                        │
//! │                                                                     │
//! │  Defense in depth: multiple layers catch different errors           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sale Validators
// =============================================================================

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be a positive integer (>= 1)
///
/// ## Example
/// ```rust
/// use shelftrack_core::validation::validate_quantity_sold;
///
/// assert!(validate_quantity_sold(1).is_ok());
/// assert!(validate_quantity_sold(0).is_err());
/// assert!(validate_quantity_sold(-3).is_err());
/// ```
pub fn validate_quantity_sold(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity_sold".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 255 characters (the column width)
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 255 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 255,
        });
    }

    Ok(())
}

/// Validates the purchase/selling price pair for a product create or update.
///
/// ## Rules
/// - Both prices non-negative
/// - `selling >= purchase`
///
/// This is the only place the price relationship is checked. Sales snapshot
/// whatever the prices are at sale time, so a later downward edit of the
/// selling price can produce negative recorded profit.
pub fn validate_prices(purchase_cents: i64, selling_cents: i64) -> ValidationResult<()> {
    if purchase_cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "purchase_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if selling_cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "selling_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if selling_cents < purchase_cents {
        return Err(ValidationError::SellingBelowPurchase {
            selling_cents,
            purchase_cents,
        });
    }

    Ok(())
}

/// Validates a stock level (initial stock or min-stock threshold).
///
/// ## Rules
/// - Must be non-negative (zero is fine)
pub fn validate_stock_level(field: &str, level: i64) -> ValidationResult<()> {
    if level < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity_sold() {
        assert!(validate_quantity_sold(1).is_ok());
        assert!(validate_quantity_sold(100).is_ok());

        assert!(validate_quantity_sold(0).is_err());
        assert!(validate_quantity_sold(-1).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Executive Office Chair").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_prices() {
        assert!(validate_prices(1000, 2000).is_ok());
        assert!(validate_prices(1000, 1000).is_ok());
        assert!(validate_prices(0, 0).is_ok());

        assert!(validate_prices(-1, 100).is_err());
        assert!(validate_prices(100, -1).is_err());
        // Selling below purchase is rejected at create/update time
        assert!(validate_prices(2000, 1999).is_err());
    }

    #[test]
    fn test_validate_stock_level() {
        assert!(validate_stock_level("stock_quantity", 0).is_ok());
        assert!(validate_stock_level("min_stock", 25).is_ok());
        assert!(validate_stock_level("stock_quantity", -1).is_err());
    }
}
