pub mod analyzer;
pub mod api;
pub mod catalog;
pub mod collab;
pub mod config;
pub mod error;
// cmd and reports are binary modules (declared in main.rs).
