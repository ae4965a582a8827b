//! Step definitions for task creation behaviour tests.

pub mod given;
pub mod then;
pub mod world;
