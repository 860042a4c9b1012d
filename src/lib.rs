//! # Object-Oriented Design Patterns in Rust
//!
//! This crate demonstrates a handful of classic design patterns and SOLID
//! principles, each as a small reusable module plus a runnable binary:
//!
//! ## Pattern 1: Simple Factory
//! - One factory maps a string key to a burger variant
//! - Unknown keys yield `None`, never a fallback burger
//!
//! ## Pattern 2: Factory Method
//! - `BurgerCreator` trait with `SinghBurger` and `KingBurger` creators
//! - Same key, different product family, identical call site
//!
//! ## Pattern 3: Single Responsibility
//! - A cart that only holds products and totals them
//! - Invoice printing and database access split into their own types
//!
//! ## Pattern 4: Capability Composition
//! - `Talkable`, `Walkable` and `Flyable` strategies injected into a `Robot`
//! - Each axis is independent of the others
//!
//! ## Pattern 5: Document Editor
//! - Composite document of renderable elements
//! - Memoized render and pluggable persistence
//!
//! Run examples with: `cargo run --bin <name>`
//!
//! ```bash
//! cargo run --bin p1_simple_factory
//! cargo run --bin p2_factory_method
//! cargo run --bin p3_srp_violated
//! cargo run --bin p4_srp_followed
//! cargo run --bin p5_robot_simulation
//! cargo run --bin p6_document_editor -- patterns.toml
//! ```

pub mod burger;
pub mod cart;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod logging;
pub mod robot;
pub mod storage;

pub use burger::{creator_for, Burger, BurgerCreator, BurgerFactory, Family, KingBurger, Preparable, SinghBurger, Tier};
pub use cart::{DbConnection, InvoicePrinter, Product, ShoppingCart};
pub use config::DemoConfig;
pub use document::{Document, DocumentElement, ImageElement, NewLineElement, TabSpaceElement, TextElement};
pub use editor::DocumentEditor;
pub use error::{ConfigError, FactoryError, StorageError};
pub use robot::{Flyable, Model, Outcome, Robot, Talkable, Walkable};
pub use storage::{Backend, DbStorage, FileStorage, Persistence};
