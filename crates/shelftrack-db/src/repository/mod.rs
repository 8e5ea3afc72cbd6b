//! # Repository Module
//!
//! Database repository implementations for Shelftrack.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Service code                                                       │
//! │       │                                                             │
//! │       │  db.products().get_by_id(42)                                │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── get_by_id(&self, id)         ← pool-scoped reads/writes        │
//! │  └── apply_stock_delta(conn, ...) ← connection-scoped, joins the    │
//! │       │                              caller's transaction           │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Scopes
//! Pool-scoped methods take `&self` and run on any pooled connection.
//! Connection-scoped functions take `&mut SqliteConnection` so the sale
//! transaction service can run several of them inside ONE transaction -
//! the atomic write unit that keeps sales and stock consistent.
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product reads, edits and stock deltas
//! - [`sale::SaleRepository`] - Sale rows (insert/fetch/delete)
//! - [`supplier::SupplierRepository`] - Supplier reference data

pub mod product;
pub mod sale;
pub mod supplier;
