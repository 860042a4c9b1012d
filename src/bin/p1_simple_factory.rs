//! Pattern 1: Simple Factory
//! Example: one factory turns order keys into burgers
//!
//! Run with: cargo run --bin p1_simple_factory [config.toml]

use anyhow::Context;
use colored::Colorize;
use design_patterns::{logging, BurgerFactory, DemoConfig, Preparable};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("loading demo config")?;
    logging::init(&config.log_level);

    println!("{}", "=== Simple Factory Demo ===".bold());

    // The client only knows the factory, never the concrete burgers.
    let factory = BurgerFactory::new();

    for key in &config.orders {
        println!("\nOrdering '{key}'...");
        match factory.create(key) {
            Some(burger) => println!("{}", burger.preparation().green()),
            None => println!("{}", format!("skipping '{key}'").yellow()),
        }
    }

    println!("\n=== Key Points ===");
    println!("- Creation logic lives in one place");
    println!("- Unknown keys give None, not a default burger");
    Ok(())
}
