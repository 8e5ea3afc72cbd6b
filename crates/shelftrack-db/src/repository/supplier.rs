//! # Supplier Repository
//!
//! Database operations for suppliers. Suppliers are passive reference data:
//! the sale path only reads them to enrich low-stock alerts with restocking
//! contact details.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shelftrack_core::{NewSupplier, Supplier};

const SUPPLIER_COLUMNS: &str = "id, name, phone, email, address, created_at, updated_at";

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Gets a supplier by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(supplier)
    }

    /// Inserts a new supplier and returns it with its assigned id.
    pub async fn insert(&self, new: &NewSupplier) -> DbResult<Supplier> {
        debug!(name = %new.name, "Inserting supplier");

        let now = Utc::now();

        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "INSERT INTO suppliers (name, phone, email, address, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {SUPPLIER_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.address)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(supplier)
    }

    /// Deletes a supplier by ID. Products keep existing with their
    /// supplier_id nulled out by the FK action.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting supplier");

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Supplier", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use shelftrack_core::NewProduct;

    fn sample_supplier() -> NewSupplier {
        NewSupplier {
            name: "ABC Electronics Suppliers".to_string(),
            phone: Some("+1-555-0101".to_string()),
            email: Some("contact@abcelectronics.com".to_string()),
            address: Some("123 Tech Street, Silicon Valley, CA 94000".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let supplier = db.suppliers().insert(&sample_supplier()).await.unwrap();
        assert!(supplier.id >= 1);

        let fetched = db
            .suppliers()
            .get_by_id(supplier.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "ABC Electronics Suppliers");
        assert_eq!(fetched.phone.as_deref(), Some("+1-555-0101"));

        assert!(db.suppliers().get_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nulls_product_reference() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let supplier = db.suppliers().insert(&sample_supplier()).await.unwrap();
        let product = db
            .products()
            .insert(&NewProduct {
                name: "Webcam 1080p HD".to_string(),
                category: Some("Accessories".to_string()),
                purchase_price_cents: 3_500,
                selling_price_cents: 6_999,
                stock_quantity: 18,
                min_stock: 5,
                supplier_id: Some(supplier.id),
            })
            .await
            .unwrap();

        db.suppliers().delete(supplier.id).await.unwrap();

        let fetched = db.products().get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched.supplier_id, None);
    }
}
