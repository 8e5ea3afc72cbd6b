//! # shelftrack-db: Database Layer for Shelftrack
//!
//! This crate provides database access for the Shelftrack inventory tracker.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Shelftrack Data Flow                           │
//! │                                                                     │
//! │  shelftrack-service (sale transactions)                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  shelftrack-db (THIS CRATE)                  │   │
//! │  │                                                              │   │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database   │   │ Repositories  │   │  Migrations  │   │   │
//! │  │   │  (pool.rs)   │   │ product, sale │   │  (embedded)  │   │   │
//! │  │   │              │◄──│ supplier      │   │ 001_init.sql │   │   │
//! │  │   └──────────────┘   └───────────────┘   └──────────────┘   │   │
//! │  │                                                              │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode, FK enforcement on)                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (product, sale, supplier)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelftrack_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/shelftrack.db")).await?;
//! let product = db.products().get_by_id(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
pub use repository::supplier::SupplierRepository;
