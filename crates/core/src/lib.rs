//! Core types and traits for helpcenter
//!
//! This crate contains the domain model, configuration and the gateway trait
//! shared across all other crates.

pub mod constants;
mod config;
mod env_config;
mod error;
mod gateway;
mod models;
mod navigation;
mod resource;
mod view;

pub use config::*;
pub use env_config::*;
pub use error::*;
pub use gateway::*;
pub use models::*;
pub use navigation::*;
pub use resource::*;
pub use view::*;
