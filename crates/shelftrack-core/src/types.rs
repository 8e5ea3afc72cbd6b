//! # Domain Types
//!
//! Core domain types used throughout Shelftrack.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │     Product      │  │       Sale       │  │     Supplier     │  │
//! │  │  ──────────────  │  │  ──────────────  │  │  ──────────────  │  │
//! │  │  id (i64)        │  │  id (i64)        │  │  id (i64)        │  │
//! │  │  selling_price   │  │  product_id (FK) │  │  name            │  │
//! │  │  purchase_price  │  │  quantity_sold   │  │  phone / email   │  │
//! │  │  stock_quantity  │  │  total_amount ★  │  │  address         │  │
//! │  │  min_stock       │  │  profit ★        │  └──────────────────┘  │
//! │  │  supplier_id (FK)│  │  sale_date       │                        │
//! │  └──────────────────┘  └──────────────────┘  ★ = frozen snapshot   │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A sale's `total_amount_cents` and `profit_cents` are computed from the
//! product's prices *at the moment of sale* and never recomputed. Editing a
//! product's prices afterwards does not touch historical sales.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product tracked in inventory.
///
/// Invariant: `stock_quantity >= 0` at all times. The only code allowed to
/// move stock is the sale transaction service (and direct product edits).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (database-assigned).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional free-form category (e.g. "Electronics").
    pub category: Option<String>,

    /// What the business pays per unit, in cents. Never negative.
    pub purchase_price_cents: i64,

    /// What the customer pays per unit, in cents. Never negative and
    /// validated >= purchase price at create/update time (only).
    pub selling_price_cents: i64,

    /// Current on-hand count. Never negative.
    pub stock_quantity: i64,

    /// Threshold at or below which the product is considered low-stock.
    pub min_stock: i64,

    /// Optional reference to the supplier to contact for restocking.
    pub supplier_id: Option<i64>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (including stock movements).
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the purchase price as a Money type.
    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }

    /// Returns the selling price as a Money type.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.selling_price_cents)
    }

    /// Checks whether a sale of `quantity` units is covered by current stock.
    ///
    /// This is the central invariant guard: stock can never go negative, so
    /// a sale larger than `stock_quantity` must be rejected.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock_quantity >= quantity
    }

    /// The low-stock predicate: `stock_quantity <= min_stock`.
    ///
    /// Evaluated fresh after every stock-affecting operation; never cached
    /// or denormalized.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.min_stock
    }

    /// Computes the financial snapshot for a sale of `quantity` units at the
    /// product's *current* prices.
    ///
    /// ## Example
    /// ```rust
    /// use shelftrack_core::types::Product;
    /// use chrono::Utc;
    ///
    /// let product = Product {
    ///     id: 1,
    ///     name: "Dell Inspiron 15 Laptop".to_string(),
    ///     category: Some("Electronics".to_string()),
    ///     purchase_price_cents: 1000,
    ///     selling_price_cents: 2000,
    ///     stock_quantity: 10,
    ///     min_stock: 5,
    ///     supplier_id: None,
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    /// };
    ///
    /// let snapshot = product.sale_snapshot(6);
    /// assert_eq!(snapshot.total_amount.cents(), 12_000); // $120.00
    /// assert_eq!(snapshot.profit.cents(), 6_000);        // $60.00
    /// ```
    pub fn sale_snapshot(&self, quantity: i64) -> SaleSnapshot {
        SaleSnapshot {
            total_amount: self.selling_price() * quantity,
            profit: (self.selling_price() - self.purchase_price()) * quantity,
        }
    }
}

/// A product ready for insertion (no id or timestamps yet - the store
/// assigns them). Run through [`crate::validation`] before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: Option<String>,
    pub purchase_price_cents: i64,
    pub selling_price_cents: i64,
    pub stock_quantity: i64,
    pub min_stock: i64,
    pub supplier_id: Option<i64>,
}

/// The monetary values frozen at sale creation time.
///
/// `profit` may be negative: selling price below purchase price is only
/// rejected at product create/update time, not re-validated per sale. That
/// behavior is preserved from the original system as a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleSnapshot {
    /// `selling_price * quantity` at sale time.
    pub total_amount: Money,
    /// `(selling_price - purchase_price) * quantity` at sale time.
    pub profit: Money,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale transaction.
///
/// Created only through the transaction service; deleted only through the
/// reversal path (which restores the product's stock). The financial fields
/// are immutable snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    /// Referenced product. Required and immutable once created.
    pub product_id: i64,
    /// Units sold. Always >= 1.
    pub quantity_sold: i64,
    /// Snapshot: selling price at sale time × quantity.
    pub total_amount_cents: i64,
    /// Snapshot: per-unit margin at sale time × quantity. May be negative.
    pub profit_cents: i64,
    /// Server-assigned timestamp of the sale.
    pub sale_date: DateTime<Utc>,
}

impl Sale {
    /// Returns the total amount as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }

    /// Returns the profit as Money.
    #[inline]
    pub fn profit(&self) -> Money {
        Money::from_cents(self.profit_cents)
    }
}

/// A sale ready for insertion (no id or timestamp yet - the store assigns
/// both).
#[derive(Debug, Clone)]
pub struct NewSale {
    pub product_id: i64,
    pub quantity_sold: i64,
    pub total_amount_cents: i64,
    pub profit_cents: i64,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier - passive reference data included in low-stock alerts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A supplier ready for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64, min_stock: i64, purchase: i64, selling: i64) -> Product {
        Product {
            id: 1,
            name: "Wireless Mouse Logitech".to_string(),
            category: Some("Accessories".to_string()),
            purchase_price_cents: purchase,
            selling_price_cents: selling,
            stock_quantity: stock,
            min_stock,
            supplier_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_can_sell() {
        let p = product(10, 5, 1000, 2000);
        assert!(p.can_sell(10));
        assert!(p.can_sell(1));
        assert!(!p.can_sell(11));
    }

    #[test]
    fn test_low_stock_predicate_boundary() {
        // Predicate is inclusive: stock == min_stock counts as low
        assert!(product(5, 5, 1000, 2000).is_low_stock());
        assert!(product(4, 5, 1000, 2000).is_low_stock());
        assert!(!product(6, 5, 1000, 2000).is_low_stock());
        assert!(product(0, 0, 1000, 2000).is_low_stock());
    }

    #[test]
    fn test_sale_snapshot_math() {
        // stock=10, min=5, purchase=$10.00, selling=$20.00, qty=6
        let p = product(10, 5, 1000, 2000);
        let snap = p.sale_snapshot(6);
        assert_eq!(snap.total_amount, Money::from_cents(12_000)); // $120.00
        assert_eq!(snap.profit, Money::from_cents(6_000)); // $60.00
    }

    #[test]
    fn test_sale_snapshot_negative_profit_preserved() {
        // Selling price edited below purchase price after creation: the
        // snapshot records the loss rather than re-validating prices
        let p = product(10, 5, 2000, 1500);
        let snap = p.sale_snapshot(2);
        assert_eq!(snap.total_amount.cents(), 3000);
        assert_eq!(snap.profit.cents(), -1000);
        assert!(snap.profit.is_negative());
    }
}
