//! Pattern 3: Single Responsibility
//! Example: a cart that does everything (the anti-pattern)
//!
//! Run with: cargo run --bin p3_srp_violated [config.toml]

use anyhow::Context;
use colored::Colorize;
use design_patterns::{logging, DemoConfig, Product};

// Holds products, bills, prints and talks to the database: three reasons to change.
struct EverythingCart {
    products: Vec<Product>,
}

impl EverythingCart {
    fn new() -> Self {
        Self { products: Vec::new() }
    }

    fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    fn calculate_total_bill(&self) -> f64 {
        self.products.iter().map(|p| p.price).sum()
    }

    fn print_invoice(&self) {
        println!("Invoice");
        for p in &self.products {
            println!("{} : {}", p.name, p.price);
        }
        println!("Total Bill : {}", self.calculate_total_bill());
    }

    fn db_connection(&self) {
        println!("Connecting to database");
    }
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("loading demo config")?;
    logging::init(&config.log_level);

    println!("{}\n", "=== SRP Violated Demo ===".bold());

    let mut cart = EverythingCart::new();
    for product in config.cart().products() {
        cart.add_product(product.clone());
    }
    cart.print_invoice();
    cart.db_connection();

    println!("\n{}", "Violation: billing, printing and storage share one type".yellow());
    Ok(())
}
