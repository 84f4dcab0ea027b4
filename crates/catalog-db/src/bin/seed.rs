//! # Seed Data Generator
//!
//! Populates the catalog with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! Products go through `ProductCatalogService::create`, the same path the
//! HTTP API uses.

use catalog_core::{NewProduct, ProductFilter};
use catalog_db::{Database, DbConfig, ProductStore};
use std::env;

/// Base names for demo products
const NAMES: &[&str] = &[
    "Desk Lamp",
    "Office Chair",
    "Notebook",
    "Ballpoint Pen",
    "Stapler",
    "Monitor Stand",
    "Keyboard",
    "Mouse Pad",
    "Coffee Mug",
    "Water Bottle",
    "Backpack",
    "Headphones",
    "USB Cable",
    "Phone Charger",
    "Whiteboard",
    "Sticky Notes",
    "Desk Organizer",
    "Paper Clips",
    "Scissors",
    "Calculator",
];

/// Variants appended to base names
const VARIANTS: &[(&str, f64)] = &[
    ("Basic", 0.0),
    ("Plus", 2.5),
    ("Pro", 7.5),
    ("Max", 15.0),
    ("Mini", -0.5),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 100;
    let mut db_path = String::from("./data/catalog.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Product Catalog Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 100)");
                println!("  -d, --db <PATH>    Database file path (default: ./data/catalog.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Product Catalog Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count(ProductFilter::any()).await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let catalog = db.catalog();
    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let product = generate_product(seed);

        if let Err(e) = catalog.create(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;
        if generated % 50 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);

    let available = db.products().count(ProductFilter::available()).await?;
    println!("  Available products: {}", available);

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds a deterministic demo product for the given index.
fn generate_product(seed: usize) -> NewProduct {
    let name = NAMES[seed % NAMES.len()];
    let (variant, addon) = VARIANTS[(seed / NAMES.len()) % VARIANTS.len()];
    let round = seed / (NAMES.len() * VARIANTS.len());

    // Base price $1.99 - $49.99, two decimals
    let base = 1.99 + ((seed * 37) % 4800) as f64 / 100.0;
    let price = ((base + addon).max(0.0) * 100.0).round() / 100.0;

    let full_name = if round == 0 {
        format!("{} {}", name, variant)
    } else {
        format!("{} {} #{}", name, variant, round + 1)
    };

    NewProduct::new(full_name, price)
}
