//! # shelftrack-core: Pure Business Logic for Shelftrack
//!
//! This crate is the **heart** of Shelftrack, a small-business retail
//! inventory tracker. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Shelftrack Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              shelftrack-service (Sale Transactions)         │   │
//! │  │   create_sale, delete_sale, low-stock alert dispatch        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │            ★ shelftrack-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │  types   │  │  money   │  │  error   │  │ validation│  │   │
//! │  │   │ Product  │  │  Money   │  │CoreError │  │   rules   │  │   │
//! │  │   │  Sale    │  │  cents   │  │          │  │  checks   │  │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └───────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                 shelftrack-db (Database Layer)               │   │
//! │  │           SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shelftrack_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(2000); // $20.00
//!
//! // Snapshot math for a sale of 6 units
//! let total = price * 6i64;
//! assert_eq!(total.cents(), 12_000); // $120.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shelftrack_core::Money` instead of
// `use shelftrack_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
