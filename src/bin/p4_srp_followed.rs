//! Pattern 3: Single Responsibility
//! Example: cart, invoice printer and database connection as separate types
//!
//! Run with: cargo run --bin p4_srp_followed [config.toml]

use anyhow::Context;
use colored::Colorize;
use design_patterns::{logging, DbConnection, DemoConfig, InvoicePrinter};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("loading demo config")?;
    logging::init(&config.log_level);

    println!("{}\n", "=== SRP Followed Demo ===".bold());

    let cart = config.cart();
    let printer = InvoicePrinter::new(&cart);
    let db = DbConnection::new(&cart);

    printer.print_invoice();
    println!("{}", db.connect());

    println!("\n=== Key Points ===");
    println!("- ShoppingCart only stores and totals products");
    println!("- InvoicePrinter only formats");
    println!("- DbConnection only persists");
    Ok(())
}
