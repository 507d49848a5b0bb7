// File: examples/user_api.rs
// Purpose: HTTP layer that validates JSON bodies and answers 400 with the field map
//
// Run with: cargo run -p rusty-forms --example user_api --features axum
//
//   curl -X POST localhost:3000/users -d '{"username": "ab"}'
//   {"password":"must not be null","username":"length must be between 3 and 20"}

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::{post, put},
    Router,
};
use rusty_forms::constraints::*;
use rusty_forms::{pipeline, Config, Engine, Group, GroupSet, RecordType, Rules};
use std::sync::Arc;
use tracing::info;

const REGISTER: Group = Group::new("Register");
const UPDATE: Group = Group::new("Update");

fn user_rules() -> Rules {
    Rules::new()
        .field("username", [not_null(), length(3, 20)])
        .field(
            "password",
            [not_null().in_groups([REGISTER]), min_length(8).in_groups([REGISTER])],
        )
        .field("email", [not_null().in_groups([UPDATE]), email()])
        .field("age", [range(0, 150)])
}

fn build_engine() -> anyhow::Result<Engine> {
    // Rules from validation.toml take precedence over the built-in ones
    let config = Config::load("validation.toml")?;
    let mut engine = Engine::from_config(&config)?;

    if !engine.is_registered("User") {
        engine.register(
            RecordType::new("User", ["username", "password", "email", "age"]),
            user_rules(),
        )?;
    }

    Ok(engine)
}

async fn create_user(State(engine): State<Arc<Engine>>, body: Bytes) -> Response {
    respond(&engine, &body, GroupSet::from([REGISTER]))
}

async fn update_user(State(engine): State<Arc<Engine>>, body: Bytes) -> Response {
    respond(&engine, &body, GroupSet::from([UPDATE]))
}

fn respond(engine: &Engine, body: &[u8], active: GroupSet) -> Response {
    match pipeline::validate_json(engine, "User", body, &active) {
        Ok(outcome) => outcome.into_response(),
        Err(e) => e.into_response(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let engine = Arc::new(build_engine()?);
    info!("Validating record types: {:?}", engine.record_types());

    let app = Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user))
        .with_state(engine);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("Listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
