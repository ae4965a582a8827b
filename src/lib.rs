//! Taskboard: the task data contract for a CRUD task-tracking service.
//!
//! This crate owns the shape of a persisted task record and the validation
//! applied to inbound task-creation payloads. Transport, storage engines, and
//! request routing belong to the surrounding service.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task schema, closed enumerations, and the validated
//!   creation request
//! - **Ports**: Abstract trait interfaces for validation and persistence
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`task`]: Task schema, create-task validation, and creation flow

pub mod task;
