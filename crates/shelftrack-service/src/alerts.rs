//! # Low-Stock Alerts
//!
//! Detached notification pipeline for products that fall to or below their
//! minimum stock level after a sale.
//!
//! ## Delivery Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Alert Delivery Pipeline                          │
//! │                                                                     │
//! │  SaleTransactionService          AlertDispatcher        worker task │
//! │                                                                     │
//! │  commit sale transaction                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  stock <= min_stock? ──yes──► try_send ──► mpsc ──► gateway.notify  │
//! │       │                          │                       │          │
//! │       no                     queue full?             Ok / Err       │
//! │       │                          │                       │          │
//! │       ▼                          ▼                       ▼          │
//! │  return sale                 warn + drop           info / warn      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sale outcome NEVER depends on this pipeline: the transaction is
//! committed before dispatch, enqueueing never blocks, and delivery
//! failures are only logged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

use shelftrack_core::{Product, Supplier};

/// Bounded queue depth for pending alerts. A small shop produces alerts
/// far slower than any gateway delivers them; overflow means the gateway
/// is down, and dropping is the correct detached behavior.
const ALERT_QUEUE_DEPTH: usize = 64;

// =============================================================================
// Alert Payload
// =============================================================================

/// A low-stock notification payload.
///
/// Carries the post-sale product state and, when the product has one, the
/// supplier to contact for restocking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowStockAlert {
    /// Product state as of the sale that triggered the alert.
    pub product: Product,
    /// Restocking contact, if the product has a supplier on file.
    pub supplier: Option<Supplier>,
}

impl LowStockAlert {
    /// Units below (or at) the reorder threshold.
    pub fn shortfall(&self) -> i64 {
        self.product.min_stock - self.product.stock_quantity
    }
}

// =============================================================================
// Gateway Seam
// =============================================================================

/// Errors from an alert gateway implementation.
#[derive(Debug, Error)]
pub enum AlertError {
    /// The gateway could not deliver the notification.
    #[error("Alert delivery failed: {0}")]
    Delivery(String),
}

/// Delivery backend for low-stock alerts.
///
/// Implementations own the transport (email, webhook, log line). They may
/// fail freely; the dispatcher logs failures and moves on.
#[async_trait]
pub trait AlertGateway: Send + Sync + 'static {
    async fn notify_low_stock(&self, alert: &LowStockAlert) -> Result<(), AlertError>;
}

/// Default gateway: writes the alert to the log and nothing else.
///
/// Stands in wherever a real transport is not configured, so the alert
/// path stays exercised end to end.
#[derive(Debug, Default, Clone)]
pub struct LoggingAlertGateway;

#[async_trait]
impl AlertGateway for LoggingAlertGateway {
    async fn notify_low_stock(&self, alert: &LowStockAlert) -> Result<(), AlertError> {
        info!(
            product = %alert.product.name,
            stock = alert.product.stock_quantity,
            min_stock = alert.product.min_stock,
            supplier = alert.supplier.as_ref().map(|s| s.name.as_str()),
            "LOW STOCK: product at or below minimum level"
        );
        Ok(())
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Hands alerts to a background worker without blocking the sale path.
///
/// Cloning is cheap; all clones feed the same worker. When every clone is
/// dropped the channel closes and the worker drains and exits.
#[derive(Debug, Clone)]
pub struct AlertDispatcher {
    tx: mpsc::Sender<LowStockAlert>,
}

impl AlertDispatcher {
    /// Spawns the delivery worker that owns `gateway` and returns the
    /// dispatcher handle feeding it.
    pub fn spawn(gateway: impl AlertGateway) -> Self {
        let (tx, mut rx) = mpsc::channel::<LowStockAlert>(ALERT_QUEUE_DEPTH);

        tokio::spawn(async move {
            while let Some(alert) = rx.recv().await {
                match gateway.notify_low_stock(&alert).await {
                    Ok(()) => info!(
                        product = %alert.product.name,
                        stock = alert.product.stock_quantity,
                        "Low-stock alert delivered"
                    ),
                    Err(err) => warn!(
                        product = %alert.product.name,
                        error = %err,
                        "Low-stock alert delivery failed"
                    ),
                }
            }
        });

        AlertDispatcher { tx }
    }

    /// Enqueues an alert. Never blocks and never fails the caller: a full
    /// or closed queue drops the alert with a warning.
    pub fn dispatch(&self, alert: LowStockAlert) {
        if let Err(err) = self.tx.try_send(alert) {
            warn!(error = %err, "Low-stock alert dropped");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn sample_product() -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: "Smart Door Lock".to_string(),
            category: Some("Smart Home".to_string()),
            purchase_price_cents: 8_000,
            selling_price_cents: 14_999,
            stock_quantity: 1,
            min_stock: 2,
            supplier_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    struct CountingGateway {
        delivered: Arc<AtomicU32>,
        fail: bool,
    }

    #[async_trait]
    impl AlertGateway for CountingGateway {
        async fn notify_low_stock(&self, _alert: &LowStockAlert) -> Result<(), AlertError> {
            if self.fail {
                return Err(AlertError::Delivery("smtp unreachable".to_string()));
            }
            self.delivered.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_shortfall() {
        let alert = LowStockAlert {
            product: sample_product(),
            supplier: None,
        };
        assert_eq!(alert.shortfall(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_reaches_gateway() {
        let delivered = Arc::new(AtomicU32::new(0));
        let dispatcher = AlertDispatcher::spawn(CountingGateway {
            delivered: delivered.clone(),
            fail: false,
        });

        dispatcher.dispatch(LowStockAlert {
            product: sample_product(),
            supplier: None,
        });

        for _ in 0..50 {
            if delivered.load(Ordering::SeqCst) == 1 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("alert never delivered");
    }

    #[tokio::test]
    async fn test_gateway_failure_does_not_propagate() {
        let dispatcher = AlertDispatcher::spawn(CountingGateway {
            delivered: Arc::new(AtomicU32::new(0)),
            fail: true,
        });

        // The caller-facing API has no failure channel at all.
        dispatcher.dispatch(LowStockAlert {
            product: sample_product(),
            supplier: None,
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
