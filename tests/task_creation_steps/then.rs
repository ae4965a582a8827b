//! Then steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use serde_json::json;
use taskboard::task::{domain::Task, error::ValidationErrors, services::TaskCreationError};

fn stored_task(world: &TaskWorld) -> Result<Task, eyre::Report> {
    let created = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))?;
    let found = run_async(world.service.find_by_id(created.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("created task was not persisted"))?;
    eyre::ensure!(&found == created, "stored task does not match created task");
    Ok(found)
}

fn validation_errors(world: &TaskWorld) -> Result<&ValidationErrors, eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    match result {
        Err(TaskCreationError::Validation(errors)) => Ok(errors),
        other => Err(eyre::eyre!("expected validation failure, got {other:?}")),
    }
}

fn field_names(errors: &ValidationErrors) -> Vec<&'static str> {
    errors
        .fields()
        .into_iter()
        .map(|field| field.as_str())
        .collect()
}

#[then("the creation request carries only the title")]
fn request_carries_only_title(world: &TaskWorld) -> Result<(), eyre::Report> {
    let request = world
        .last_request
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validated request in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected validation failure: {err}"))?;
    let value = serde_json::to_value(request)?;
    eyre::ensure!(
        value == json!({ "title": request.title() }),
        "expected a title-only request, got {value}"
    );
    Ok(())
}

#[then(r#"the stored task has status "{status}" and priority "{priority}""#)]
fn stored_task_has_status_and_priority(
    world: &TaskWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.status().as_str() == status,
        "expected status {status}, found {}",
        task.status()
    );
    eyre::ensure!(
        task.priority().as_str() == priority,
        "expected priority {priority}, found {}",
        task.priority()
    );
    Ok(())
}

#[then(r#"the stored task is due at "{due}""#)]
fn stored_task_is_due_at(world: &TaskWorld, due: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    let found = task
        .due_date()
        .ok_or_else(|| eyre::eyre!("expected a due date"))?;
    eyre::ensure!(
        found.to_string() == due,
        "expected due date {due}, found {found}"
    );
    Ok(())
}

#[then(r#"creation fails with errors for "{first}" and "{second}""#)]
fn creation_fails_for_two_fields(
    world: &TaskWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let errors = validation_errors(world)?;
    let fields = field_names(errors);
    eyre::ensure!(
        fields == [first.as_str(), second.as_str()],
        "expected errors for {first} and {second}, found {fields:?}"
    );
    Ok(())
}

#[then(r#"creation fails only for "{field}""#)]
fn creation_fails_for_one_field(world: &TaskWorld, field: String) -> Result<(), eyre::Report> {
    let errors = validation_errors(world)?;
    let fields = field_names(errors);
    eyre::ensure!(
        fields == [field.as_str()],
        "expected a single error for {field}, found {fields:?}"
    );
    Ok(())
}
