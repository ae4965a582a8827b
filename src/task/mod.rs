//! Task data contract for the task-tracking service.
//!
//! A task-creation payload arrives as untyped JSON, is checked field by field
//! against the task schema, and on success becomes a [`domain::CreateTaskRequest`].
//! The creation service then applies persistence defaults and hands the
//! resulting [`domain::Task`] to a repository. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Validation errors in [`error`]
//! - Port contracts in [`ports`]
//! - Rule implementations in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
