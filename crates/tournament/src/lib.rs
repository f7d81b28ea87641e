//! Tournament Runner for fleet brackets
//!
//! This crate provides infrastructure for:
//! - Allocating sponsors and starting budgets to a power-of-two roster
//! - Stocking teams with a purchase strategy (greedy or exact)
//! - Running the single-elimination bracket to a champion
//! - Comparing finished tournaments and reporting win records
//!
//! # Usage
//!
//! ```bash
//! # Run one tournament from a config file
//! cargo run -p tournament -- run data/config.toml --strategy exact
//!
//! # Compare the champions of two tournaments
//! cargo run -p tournament -- compare data/config.toml data/config2.toml
//! ```

mod allocator;
mod bracket;
mod compare;
mod config;
mod error;
mod report;
mod runner;

pub use allocator::*;
pub use bracket::*;
pub use compare::*;
pub use config::*;
pub use error::*;
pub use report::*;
pub use runner::*;
