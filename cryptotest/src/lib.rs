#![doc = include_str!("../README.md")]
#![warn(rust_2018_idioms)]

pub mod aggregator;
pub mod categories;
pub mod checks;
pub mod config;
pub mod crypto;
pub mod discovery;
pub mod enumerator;
pub mod registry;
pub mod result;
pub mod runner;
pub mod utilities;
