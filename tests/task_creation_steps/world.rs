//! Shared world state for task creation BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use serde_json::{Map, Value};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{CreateTaskRequest, Task},
    services::{TaskCreationError, TaskCreationService},
    validation::DefaultTaskValidator,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskCreationService<InMemoryTaskRepository, DefaultTaskValidator>;

/// Scenario world for task creation behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub payload: Map<String, Value>,
    pub last_request: Option<Result<CreateTaskRequest, TaskCreationError>>,
    pub last_create_result: Option<Result<Task, TaskCreationError>>,
}

impl TaskWorld {
    /// Creates a world with an empty payload.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskCreationService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultTaskValidator::new()),
        );
        Self {
            service,
            payload: Map::new(),
            last_request: None,
            last_create_result: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
