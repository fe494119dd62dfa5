// src/lib.rs

pub mod cli;
pub mod csv;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod file;
pub mod gui;
pub mod params;
pub mod progress;
pub mod runner;
pub mod schema;

pub use runner::{ResultRow, SchemaCache};
pub use schema::{ItemListSchema, ListItem};
