//! # Coffee Shop CLI
//!
//! Database maintenance utilities for development and testing.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use coffeeshop_cli::seeder;
//!
//! seeder::reset(&pool).await?;
//! seeder::seed_drinks(&pool, &seeder::default_drinks()).await?;
//! ```

pub mod seeder;
