//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD by primary key
//! - Stock deltas (the only sanctioned way to move stock)
//! - Low-stock listing
//!
//! ## Stock Delta Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                            │
//! │                                                                     │
//! │  ❌ WRONG: read stock, compute, write absolute value                │
//! │     UPDATE products SET stock_quantity = 7 WHERE id = ?             │
//! │     (two concurrent sales can both pass a stale check and oversell) │
//! │                                                                     │
//! │  ✅ CORRECT: guarded relative update                                │
//! │     UPDATE products                                                 │
//! │     SET stock_quantity = stock_quantity + ?delta                    │
//! │     WHERE id = ? AND stock_quantity + ?delta >= 0                   │
//! │                                                                     │
//! │  The WHERE clause re-checks the invariant at write time, so the     │
//! │  check and the decrement are one statement - no stale-read window.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use shelftrack_core::{NewProduct, Product};

/// Column list shared by every product query so FromRow mapping stays
/// consistent with the schema.
const PRODUCT_COLUMNS: &str = "id, name, category, purchase_price_cents, selling_price_cents, \
     stock_quantity, min_stock, supplier_id, created_at, updated_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it with its assigned id.
    pub async fn insert(&self, new: &NewProduct) -> DbResult<Product> {
        debug!(name = %new.name, "Inserting product");

        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products \
                (name, category, purchase_price_cents, selling_price_cents, \
                 stock_quantity, min_stock, supplier_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.category)
        .bind(new.purchase_price_cents)
        .bind(new.selling_price_cents)
        .bind(new.stock_quantity)
        .bind(new.min_stock)
        .bind(new.supplier_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Updates an existing product's editable fields.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = product.id, "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE products SET \
                name = ?2, \
                category = ?3, \
                purchase_price_cents = ?4, \
                selling_price_cents = ?5, \
                stock_quantity = ?6, \
                min_stock = ?7, \
                supplier_id = ?8, \
                updated_at = ?9 \
             WHERE id = ?1",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.purchase_price_cents)
        .bind(product.selling_price_cents)
        .bind(product.stock_quantity)
        .bind(product.min_stock)
        .bind(product.supplier_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", product.id));
        }

        Ok(())
    }

    /// Deletes a product by ID.
    ///
    /// Sales referencing it are removed by the FK cascade, matching the
    /// original schema. Historical reporting across deleted products is a
    /// non-goal.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Lists products at or below their low-stock threshold, most urgent
    /// first.
    pub async fn list_low_stock(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE stock_quantity <= min_stock \
             ORDER BY stock_quantity ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Connection-Scoped Operations
// =============================================================================
// These run on a caller-provided connection so they can participate in the
// sale transaction's atomic write unit.

/// Applies a stock delta (negative for sales, positive for reversals),
/// guarded so stock can never go negative.
///
/// ## Returns
/// * `Ok(Some(Product))` - The updated row (post-delta stock)
/// * `Ok(None)` - No row matched: the product is missing OR the delta
///   would have driven stock negative. The caller distinguishes the two
///   (it has usually just fetched the product).
pub async fn apply_stock_delta(
    conn: &mut SqliteConnection,
    id: i64,
    delta: i64,
) -> DbResult<Option<Product>> {
    debug!(id, delta, "Applying stock delta");

    let now = Utc::now();

    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET \
            stock_quantity = stock_quantity + ?2, \
            updated_at = ?3 \
         WHERE id = ?1 AND stock_quantity + ?2 >= 0 \
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(id)
    .bind(delta)
    .bind(now)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(product)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn sample_product() -> NewProduct {
        NewProduct {
            name: "Dell Inspiron 15 Laptop".to_string(),
            category: Some("Electronics".to_string()),
            purchase_price_cents: 65_000,
            selling_price_cents: 99_999,
            stock_quantity: 25,
            min_stock: 5,
            supplier_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let inserted = db.products().insert(&sample_product()).await.unwrap();
        assert!(inserted.id >= 1);

        let fetched = db.products().get_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Dell Inspiron 15 Laptop");
        assert_eq!(fetched.stock_quantity, 25);
        assert_eq!(fetched.selling_price_cents, 99_999);

        assert!(db.products().get_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut product = db.products().insert(&sample_product()).await.unwrap();
        product.min_stock = 10;
        product.selling_price_cents = 109_999;
        db.products().update(&product).await.unwrap();

        let fetched = db.products().get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched.min_stock, 10);
        assert_eq!(fetched.selling_price_cents, 109_999);

        db.products().delete(product.id).await.unwrap();
        assert!(db.products().get_by_id(product.id).await.unwrap().is_none());

        // Deleting again reports NotFound
        let err = db.products().delete(product.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_apply_stock_delta_decrement_and_guard() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = db.products().insert(&sample_product()).await.unwrap();

        let mut conn = db.pool().acquire().await.unwrap();

        // Normal decrement
        let updated = apply_stock_delta(&mut conn, product.id, -10)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.stock_quantity, 15);

        // Decrement past zero is refused, stock untouched
        let refused = apply_stock_delta(&mut conn, product.id, -16).await.unwrap();
        assert!(refused.is_none());

        // Release the single in-memory connection before a pool-scoped read
        drop(conn);
        let fetched = db.products().get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched.stock_quantity, 15);
        let mut conn = db.pool().acquire().await.unwrap();

        // Exact-to-zero decrement is allowed
        let zeroed = apply_stock_delta(&mut conn, product.id, -15)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(zeroed.stock_quantity, 0);

        // Missing product yields None
        assert!(apply_stock_delta(&mut conn, 9999, -1)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_low_stock() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut low = sample_product();
        low.name = "Security Camera Set".to_string();
        low.stock_quantity = 1;
        low.min_stock = 2;
        db.products().insert(&low).await.unwrap();

        let mut healthy = sample_product();
        healthy.name = "Desk Lamp LED".to_string();
        healthy.stock_quantity = 35;
        healthy.min_stock = 8;
        db.products().insert(&healthy).await.unwrap();

        let listed = db.products().list_low_stock().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Security Camera Set");
    }
}
