//! # shelftrack-service: Sale Transactions for Shelftrack
//!
//! The write path of the inventory tracker. This crate owns the two
//! operations that move stock (recording a sale and reversing one) and
//! the detached low-stock alert pipeline those operations feed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Shelftrack Data Flow                           │
//! │                                                                     │
//! │  caller (CLI / HTTP surface, out of this crate)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              shelftrack-service (THIS CRATE)                 │   │
//! │  │                                                              │   │
//! │  │   ┌─────────────────────────┐   ┌───────────────────────┐   │   │
//! │  │   │ SaleTransactionService  │──►│  AlertDispatcher      │   │   │
//! │  │   │ create_sale/delete_sale │   │  + AlertGateway seam  │   │   │
//! │  │   └─────────────────────────┘   └───────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  shelftrack-db (pool, repositories)  →  SQLite                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelftrack_db::{Database, DbConfig};
//! use shelftrack_service::{AlertDispatcher, LoggingAlertGateway, SaleTransactionService};
//!
//! let db = Database::new(DbConfig::new("shelftrack.db")).await?;
//! let alerts = AlertDispatcher::spawn(LoggingAlertGateway);
//! let sales = SaleTransactionService::new(db, alerts);
//!
//! let sale = sales.create_sale(product_id, 2).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod alerts;
pub mod error;
pub mod sale_service;

// =============================================================================
// Re-exports
// =============================================================================

pub use alerts::{AlertDispatcher, AlertError, AlertGateway, LoggingAlertGateway, LowStockAlert};
pub use error::{ServiceError, ServiceResult};
pub use sale_service::SaleTransactionService;
