//! Site - Configuration, Routing, and the Build Pipeline

pub mod build;
pub mod config;
pub mod routes;
