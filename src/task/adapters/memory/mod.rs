//! In-memory adapters for tests and local wiring.

mod task;

pub use task::InMemoryTaskRepository;
