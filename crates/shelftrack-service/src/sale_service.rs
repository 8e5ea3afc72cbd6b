//! # Sale Transaction Service
//!
//! The single writer for sales and stock. Every stock movement in the
//! system goes through the two operations here, each an atomic unit:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     create_sale(product_id, qty)                    │
//! │                                                                     │
//! │  validate qty >= 1                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  fetch product ──missing──► ProductNotFound                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  stock check ──short──► InsufficientStock                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  snapshot total/profit from current prices                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  BEGIN ── insert sale ── guarded stock decrement ── COMMIT          │
//! │       │                        │                                    │
//! │       │                   guard refused (concurrent sale won)       │
//! │       │                        │                                    │
//! │       │                   ROLLBACK ──► InsufficientStock            │
//! │       ▼                                                             │
//! │  post-sale stock <= min_stock? ──► detached low-stock alert         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  return Sale                                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `delete_sale` is the mirror image: one transaction restores the sold
//! quantity to stock and removes the row, returning the sale as it was.
//!
//! ## Invariants
//! - Stock never goes negative: the decrement is guarded in SQL, so the
//!   pre-check racing another sale cannot oversell.
//! - A sale row exists if and only if its stock decrement happened.
//! - `total_amount`/`profit` are frozen at sale time; later price edits
//!   never touch recorded sales.
//! - The alert pipeline runs after commit and cannot fail a sale.

use tracing::{debug, info, warn};

use shelftrack_core::{validation, CoreError, NewSale, Product, Sale, Supplier};
use shelftrack_db::repository::{product as product_repo, sale as sale_repo};
use shelftrack_db::{Database, DbError};

use crate::alerts::{AlertDispatcher, LowStockAlert};
use crate::error::{ServiceError, ServiceResult};

/// Orchestrates sale transactions over the database and the alert
/// dispatcher. Cheap to clone; clones share the pool and the worker.
#[derive(Debug, Clone)]
pub struct SaleTransactionService {
    db: Database,
    alerts: AlertDispatcher,
}

impl SaleTransactionService {
    /// Creates a service over an opened database and a running dispatcher.
    pub fn new(db: Database, alerts: AlertDispatcher) -> Self {
        SaleTransactionService { db, alerts }
    }

    /// Records a sale of `quantity_sold` units of `product_id`.
    ///
    /// On success the sale row and the stock decrement are both committed,
    /// and the returned [`Sale`] carries the frozen financial snapshot. On
    /// any error nothing changed.
    pub async fn create_sale(&self, product_id: i64, quantity_sold: i64) -> ServiceResult<Sale> {
        validation::validate_quantity_sold(quantity_sold)?;

        let product = self
            .db
            .products()
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound(product_id))?;

        // Early rejection with a precise message. The real guard is the
        // conditional decrement below; this check just avoids starting a
        // transaction that is doomed.
        if !product.can_sell(quantity_sold) {
            return Err(CoreError::InsufficientStock {
                product: product.name,
                available: product.stock_quantity,
                requested: quantity_sold,
            }
            .into());
        }

        let snapshot = product.sale_snapshot(quantity_sold);
        debug!(
            product_id,
            quantity_sold,
            total = %snapshot.total_amount,
            profit = %snapshot.profit,
            "Sale snapshot computed"
        );

        let mut tx = self.db.pool().begin().await.map_err(DbError::transaction)?;

        let sale = sale_repo::insert(
            &mut tx,
            &NewSale {
                product_id,
                quantity_sold,
                total_amount_cents: snapshot.total_amount.cents(),
                profit_cents: snapshot.profit.cents(),
            },
        )
        .await?;

        let updated = match product_repo::apply_stock_delta(&mut tx, product_id, -quantity_sold)
            .await?
        {
            Some(updated) => updated,
            None => {
                // A concurrent sale consumed the stock between our read and
                // the guarded decrement. Roll the insert back and report the
                // quantity that is actually left.
                tx.rollback().await.map_err(DbError::transaction)?;
                return Err(self.insufficient_stock(product_id, quantity_sold).await?);
            }
        };

        tx.commit().await.map_err(DbError::transaction)?;

        info!(
            sale_id = sale.id,
            product_id,
            quantity_sold,
            total = %sale.total_amount(),
            remaining_stock = updated.stock_quantity,
            "Sale recorded"
        );

        self.check_stock_level(&updated).await;

        Ok(sale)
    }

    /// Deletes a sale, restoring the sold quantity to the product's stock.
    ///
    /// Returns the sale as it was before deletion. The restore and the row
    /// delete commit together or not at all.
    pub async fn delete_sale(&self, sale_id: i64) -> ServiceResult<Sale> {
        let mut tx = self.db.pool().begin().await.map_err(DbError::transaction)?;

        let sale = sale_repo::fetch_by_id(&mut tx, sale_id)
            .await?
            .ok_or(CoreError::SaleNotFound(sale_id))?;

        // The restore is unconditional: returning previously-sold units can
        // never fail the non-negativity guard. A None here means the product
        // row is gone, which the ON DELETE CASCADE on sales rules out unless
        // the schema was bypassed.
        if product_repo::apply_stock_delta(&mut tx, sale.product_id, sale.quantity_sold)
            .await?
            .is_none()
        {
            tx.rollback().await.map_err(DbError::transaction)?;
            warn!(
                sale_id,
                product_id = sale.product_id,
                "Sale references a missing product; refusing to delete"
            );
            return Err(DbError::not_found("Product", sale.product_id).into());
        }

        if !sale_repo::delete(&mut tx, sale_id).await? {
            tx.rollback().await.map_err(DbError::transaction)?;
            return Err(CoreError::SaleNotFound(sale_id).into());
        }

        tx.commit().await.map_err(DbError::transaction)?;

        info!(
            sale_id,
            product_id = sale.product_id,
            restored = sale.quantity_sold,
            "Sale deleted, stock restored"
        );

        Ok(sale)
    }

    /// Builds the InsufficientStock error from a fresh read so the reported
    /// availability reflects whatever concurrent sale beat us.
    async fn insufficient_stock(
        &self,
        product_id: i64,
        requested: i64,
    ) -> ServiceResult<ServiceError> {
        let current = self
            .db
            .products()
            .get_by_id(product_id)
            .await?
            .ok_or(CoreError::ProductNotFound(product_id))?;

        Ok(CoreError::InsufficientStock {
            product: current.name,
            available: current.stock_quantity,
            requested,
        }
        .into())
    }

    /// Fires a detached low-stock alert when the post-sale stock is at or
    /// below the product's minimum. Supplier lookup is best-effort; a read
    /// failure degrades to an alert without contact details.
    async fn check_stock_level(&self, product: &Product) {
        if !product.is_low_stock() {
            return;
        }

        let supplier: Option<Supplier> = match product.supplier_id {
            Some(supplier_id) => match self.db.suppliers().get_by_id(supplier_id).await {
                Ok(supplier) => supplier,
                Err(err) => {
                    warn!(
                        product_id = product.id,
                        supplier_id,
                        error = %err,
                        "Supplier lookup for low-stock alert failed"
                    );
                    None
                }
            },
            None => None,
        };

        debug!(
            product_id = product.id,
            stock = product.stock_quantity,
            min_stock = product.min_stock,
            "Product at or below minimum stock, dispatching alert"
        );

        self.alerts.dispatch(LowStockAlert {
            product: product.clone(),
            supplier,
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
