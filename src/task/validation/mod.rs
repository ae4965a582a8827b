//! Task-creation validation implementation.
//!
//! This module provides the default implementation of task validation,
//! including the per-field rules and the composite validator service.

pub mod rules;
pub mod service;

pub use service::DefaultTaskValidator;
