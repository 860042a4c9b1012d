//! Pattern 2: Factory Method
//! Example: the same order through two different creators
//!
//! Run with: cargo run --bin p2_factory_method [config.toml]

use anyhow::Context;
use colored::Colorize;
use design_patterns::{creator_for, logging, BurgerCreator, DemoConfig, Family, Preparable};

// Identical call site for every creator.
fn serve(creator: &dyn BurgerCreator, key: &str) {
    match creator.create_burger(key) {
        Some(burger) => println!("{}", burger.preparation().green()),
        None => println!("{}", format!("skipping '{key}'").yellow()),
    }
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("loading demo config")?;
    logging::init(&config.log_level);

    println!("{}", "=== Factory Method Demo ===".bold());

    let creators: Vec<(&str, Box<dyn BurgerCreator>)> = vec![
        ("KingBurger (wheat)", creator_for(Family::Wheat)),
        ("SinghBurger (regular)", creator_for(Family::Regular)),
    ];

    for (name, creator) in &creators {
        println!("\n{}", name.bold());
        for key in &config.orders {
            serve(creator.as_ref(), key);
        }
    }

    println!("\n=== Key Points ===");
    println!("- Each creator builds its own product family");
    println!("- Switching creators never touches the client code");
    Ok(())
}
