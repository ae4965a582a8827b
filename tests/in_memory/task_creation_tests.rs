//! In-memory integration tests for task creation.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::json;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDate, Task, TaskField, TaskId, TaskPriority, TaskStatus},
    error::ValidationReason,
    ports::validator::ValidationConfig,
    services::{TaskCreationError, TaskCreationService},
    validation::DefaultTaskValidator,
};

type TestService = TaskCreationService<InMemoryTaskRepository, DefaultTaskValidator>;

#[fixture]
fn service() -> TestService {
    TaskCreationService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultTaskValidator::new()),
    )
}

/// Asserts that a stored task can be found again under its identifier.
///
/// # Errors
///
/// Returns an error if lookup fails or yields a different task.
async fn assert_round_trip(service: &TestService, task: &Task) -> Result<(), eyre::Report> {
    let found = service
        .find_by_id(task.id())
        .await
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;
    eyre::ensure!(
        found.as_ref() == Some(task),
        "stored task mismatch: {found:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_only_payload_is_stored_with_defaults(service: TestService) {
    let task = service
        .create(&json!({"title": "Buy milk"}))
        .await
        .expect("task creation should succeed");

    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.description(), "");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.priority(), TaskPriority::Medium);
    assert_eq!(task.due_date(), None);
    assert_round_trip(&service, &task)
        .await
        .expect("task should be retrievable");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fully_specified_payload_is_stored_verbatim(service: TestService) {
    let task = service
        .create(&json!({
            "title": "Ship release",
            "description": "Cut the 1.0 tag",
            "status": "completed",
            "priority": "high",
            "dueDate": "2024-12-31T17:00:00Z",
        }))
        .await
        .expect("task creation should succeed");

    assert_eq!(task.description(), "Cut the 1.0 tag");
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(
        task.due_date(),
        Some(DueDate::parse("2024-12-31T17:00:00Z").expect("valid due date"))
    );
    assert_round_trip(&service, &task)
        .await
        .expect("task should be retrievable");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_created_task_gets_a_distinct_identifier(service: TestService) {
    let payload = json!({"title": "Water plants"});
    let first = service.create(&payload).await.expect("first create");
    let second = service.create(&payload).await.expect("second create");

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_payload_reports_every_violation(service: TestService) {
    let result = service
        .create(&json!({"title": "   ", "priority": "urgent", "dueDate": "31/12/2024"}))
        .await;

    let Err(TaskCreationError::Validation(errors)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert_eq!(
        errors.fields(),
        vec![TaskField::Title, TaskField::Priority, TaskField::DueDate]
    );
    assert_eq!(
        errors
            .for_field(TaskField::DueDate)
            .map(|error| error.reason()),
        Some(ValidationReason::InvalidFormat)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_identifier_returns_none(service: TestService) {
    let found = service
        .find_by_id(TaskId::new())
        .await
        .expect("lookup should succeed");
    assert_eq!(found, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_service_rejects_oversized_title() {
    let service = TaskCreationService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultTaskValidator::with_config(
            ValidationConfig::default().with_max_title_chars(10),
        )),
    );

    let result = service
        .create(&json!({"title": "A title well past ten characters"}))
        .await;

    assert!(matches!(
        result,
        Err(TaskCreationError::Validation(ref errors))
            if errors.for_field(TaskField::Title).map(|error| error.reason())
                == Some(ValidationReason::TooLong)
    ));
}
