//! Mock implementations and test utilities for the todo task service
//!
//! This crate provides testing infrastructure including:
//! - A mock implementation of the repository trait
//! - Fluent builders for domain types
//! - Realistic random test data generators

pub mod builders;
pub mod generators;
pub mod repository;

pub use builders::*;
pub use generators::*;
pub use repository::MockTaskRepository;
