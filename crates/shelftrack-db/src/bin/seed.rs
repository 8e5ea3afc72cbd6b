//! # Seed Data Generator
//!
//! Populates the database with sample suppliers and products for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p shelftrack-db --bin seed
//!
//! # Specify database path
//! cargo run -p shelftrack-db --bin seed -- --db ./data/shelftrack.db
//! ```

use std::env;

use shelftrack_core::{NewProduct, NewSupplier};
use shelftrack_db::{Database, DbConfig};

/// Sample suppliers: (name, phone, email, address)
const SUPPLIERS: &[(&str, &str, &str, &str)] = &[
    (
        "ABC Electronics Suppliers",
        "+1-555-0101",
        "contact@abcelectronics.com",
        "123 Tech Street, Silicon Valley, CA 94000",
    ),
    (
        "XYZ Furniture Distributors",
        "+1-555-0202",
        "info@xyzfurniture.com",
        "456 Oak Avenue, Furniture District, NY 10001",
    ),
    (
        "Global Tech Traders",
        "+1-555-0303",
        "sales@globaltechtraders.com",
        "789 Pine Road, Tech Hub, TX 75001",
    ),
    (
        "Premium Office Solutions",
        "+1-555-0404",
        "orders@premiumoffice.com",
        "321 Business Blvd, Corporate Center, FL 33101",
    ),
    (
        "Smart Home Distributors",
        "+1-555-0505",
        "support@smarthome.com",
        "654 Innovation Drive, Smart City, WA 98001",
    ),
];

/// Sample products:
/// (name, category, purchase_cents, selling_cents, stock, min_stock, supplier index)
const PRODUCTS: &[(&str, &str, i64, i64, i64, i64, usize)] = &[
    ("Dell Inspiron 15 Laptop", "Electronics", 65_000, 99_999, 25, 5, 0),
    ("iPhone 15 Pro", "Electronics", 85_000, 119_999, 12, 3, 0),
    ("Samsung 4K Smart TV 55\"", "Electronics", 40_000, 69_999, 8, 2, 2),
    ("MacBook Air M2", "Electronics", 95_000, 139_999, 6, 2, 0),
    ("Sony WH-1000XM5 Headphones", "Electronics", 28_000, 39_999, 15, 5, 2),
    ("Executive Office Chair", "Furniture", 12_000, 24_999, 18, 4, 1),
    ("Standing Desk Adjustable", "Furniture", 20_000, 39_999, 10, 3, 1),
    ("Conference Table 8-Seater", "Furniture", 35_000, 69_999, 5, 1, 1),
    ("Ergonomic Desk Chair", "Furniture", 8_000, 15_999, 22, 6, 3),
    ("Office Bookshelf", "Furniture", 6_000, 12_999, 12, 3, 1),
    ("Wireless Mouse Logitech", "Accessories", 1_500, 2_999, 45, 10, 0),
    ("Mechanical Keyboard RGB", "Accessories", 4_500, 8_999, 20, 5, 2),
    ("USB-C Hub 7-in-1", "Accessories", 2_500, 4_999, 30, 8, 2),
    ("Desk Lamp LED", "Accessories", 2_000, 3_999, 35, 8, 3),
    ("Webcam 1080p HD", "Accessories", 3_500, 6_999, 18, 5, 0),
    ("Smart Thermostat", "Smart Home", 12_000, 19_999, 14, 4, 4),
    ("Smart Door Lock", "Smart Home", 8_000, 14_999, 9, 2, 4),
    ("Security Camera Set", "Smart Home", 15_000, 29_999, 7, 2, 4),
    ("Smart Light Bulbs 4-Pack", "Smart Home", 2_500, 4_999, 28, 8, 4),
    ("Voice Assistant Speaker", "Smart Home", 6_000, 9_999, 16, 4, 4),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./shelftrack_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shelftrack Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./shelftrack_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Shelftrack Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    let (total, applied) = shelftrack_db::migrations::migration_status(db.pool()).await?;
    println!("Connected, migrations applied ({}/{})", applied, total);

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    let mut supplier_ids = Vec::with_capacity(SUPPLIERS.len());
    for (name, phone, email, address) in SUPPLIERS {
        let supplier = db
            .suppliers()
            .insert(&NewSupplier {
                name: name.to_string(),
                phone: Some(phone.to_string()),
                email: Some(email.to_string()),
                address: Some(address.to_string()),
            })
            .await?;
        supplier_ids.push(supplier.id);
    }
    println!("Inserted {} suppliers", supplier_ids.len());

    let mut inserted = 0;
    for (name, category, purchase, selling, stock, min_stock, supplier_idx) in PRODUCTS {
        db.products()
            .insert(&NewProduct {
                name: name.to_string(),
                category: Some(category.to_string()),
                purchase_price_cents: *purchase,
                selling_price_cents: *selling,
                stock_quantity: *stock,
                min_stock: *min_stock,
                supplier_id: Some(supplier_ids[*supplier_idx]),
            })
            .await?;
        inserted += 1;
    }
    println!("Inserted {} products", inserted);

    let low_stock = db.products().list_low_stock().await?;
    println!("Low-stock products after seeding: {}", low_stock.len());

    println!();
    println!("Seed complete!");

    Ok(())
}
