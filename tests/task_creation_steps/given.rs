//! Given steps for task creation BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::given;
use serde_json::Value;

#[given(r#"a task payload with title "{title}""#)]
fn payload_with_title(world: &mut TaskWorld, title: String) {
    world.payload.insert("title".to_owned(), Value::String(title));
}

#[given("a task payload with an empty title")]
fn payload_with_empty_title(world: &mut TaskWorld) {
    world
        .payload
        .insert("title".to_owned(), Value::String(String::new()));
}

#[given(r#"the payload sets "{field}" to "{value}""#)]
fn payload_sets_field(world: &mut TaskWorld, field: String, value: String) {
    world.payload.insert(field, Value::String(value));
}
