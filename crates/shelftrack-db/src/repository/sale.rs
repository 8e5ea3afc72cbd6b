//! # Sale Repository
//!
//! Database operations for sale rows.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                │
//! │                                                                     │
//! │  1. CREATE (inside one transaction with the stock decrement)        │
//! │     └── insert() → Sale with frozen total_amount/profit snapshot    │
//! │                                                                     │
//! │  2. READ                                                            │
//! │     └── get_by_id()                                                 │
//! │                                                                     │
//! │  3. REVERSE (inside one transaction with the stock restore)         │
//! │     └── delete() → stock goes back up by quantity_sold              │
//! │                                                                     │
//! │  There is no update path: a sale's financial fields are immutable.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The transactional pairs themselves are orchestrated by
//! shelftrack-service; this module only supplies the statements.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use shelftrack_core::{NewSale, Sale};

const SALE_COLUMNS: &str =
    "id, product_id, quantity_sold, total_amount_cents, profit_cents, sale_date";

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Counts sales for a product (diagnostics and tests).
    pub async fn count_for_product(&self, product_id: i64) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales WHERE product_id = ?1")
            .bind(product_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Connection-Scoped Operations
// =============================================================================
// The insert/fetch/delete trio runs on a caller-provided connection so the
// sale service can pair each with its stock movement in one transaction.

/// Inserts a sale row with a server-assigned timestamp and returns the
/// stored record.
///
/// ## Snapshot Pattern
/// `total_amount_cents` and `profit_cents` arrive pre-computed from the
/// product's prices at this moment; they are never recomputed later.
pub async fn insert(conn: &mut SqliteConnection, new: &NewSale) -> DbResult<Sale> {
    debug!(
        product_id = new.product_id,
        quantity_sold = new.quantity_sold,
        "Inserting sale"
    );

    let sale_date = Utc::now();

    let sale = sqlx::query_as::<_, Sale>(&format!(
        "INSERT INTO sales \
            (product_id, quantity_sold, total_amount_cents, profit_cents, sale_date) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING {SALE_COLUMNS}"
    ))
    .bind(new.product_id)
    .bind(new.quantity_sold)
    .bind(new.total_amount_cents)
    .bind(new.profit_cents)
    .bind(sale_date)
    .fetch_one(&mut *conn)
    .await?;

    Ok(sale)
}

/// Fetches a sale by ID on the caller's connection.
pub async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> DbResult<Option<Sale>> {
    let sale = sqlx::query_as::<_, Sale>(&format!(
        "SELECT {SALE_COLUMNS} FROM sales WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(sale)
}

/// Deletes a sale row on the caller's connection.
///
/// ## Returns
/// `true` if a row was deleted, `false` if the id did not exist.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> DbResult<bool> {
    debug!(id, "Deleting sale");

    let result = sqlx::query("DELETE FROM sales WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use shelftrack_core::NewProduct;

    async fn db_with_product() -> (Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = db
            .products()
            .insert(&NewProduct {
                name: "Mechanical Keyboard RGB".to_string(),
                category: Some("Accessories".to_string()),
                purchase_price_cents: 4_500,
                selling_price_cents: 8_999,
                stock_quantity: 20,
                min_stock: 5,
                supplier_id: None,
            })
            .await
            .unwrap();
        (db, product.id)
    }

    #[tokio::test]
    async fn test_insert_fetch_delete_round_trip() {
        let (db, product_id) = db_with_product().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let sale = insert(
            &mut conn,
            &NewSale {
                product_id,
                quantity_sold: 2,
                total_amount_cents: 17_998,
                profit_cents: 8_998,
            },
        )
        .await
        .unwrap();

        assert!(sale.id >= 1);
        assert_eq!(sale.quantity_sold, 2);
        assert_eq!(sale.total_amount_cents, 17_998);

        let fetched = fetch_by_id(&mut conn, sale.id).await.unwrap().unwrap();
        assert_eq!(fetched.profit_cents, 8_998);
        assert_eq!(fetched.sale_date, sale.sale_date);

        assert!(delete(&mut conn, sale.id).await.unwrap());
        assert!(fetch_by_id(&mut conn, sale.id).await.unwrap().is_none());
        assert!(!delete(&mut conn, sale.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_product() {
        let (db, _) = db_with_product().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let err = insert(
            &mut conn,
            &NewSale {
                product_id: 9999,
                quantity_sold: 1,
                total_amount_cents: 100,
                profit_cents: 50,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            crate::error::DbError::ForeignKeyViolation { .. }
        ));
    }

    #[tokio::test]
    async fn test_count_for_product() {
        let (db, product_id) = db_with_product().await;

        assert_eq!(db.sales().count_for_product(product_id).await.unwrap(), 0);

        // The in-memory pool has one connection; pool-scoped reads above
        // must happen before we pin it here.
        let mut conn = db.pool().acquire().await.unwrap();

        for qty in [1, 3] {
            insert(
                &mut conn,
                &NewSale {
                    product_id,
                    quantity_sold: qty,
                    total_amount_cents: 8_999 * qty,
                    profit_cents: 4_499 * qty,
                },
            )
            .await
            .unwrap();
        }
        drop(conn);

        assert_eq!(db.sales().count_for_product(product_id).await.unwrap(), 2);
    }
}
