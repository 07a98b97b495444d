// src/adapter/cli.rs
// Command line front end: read raw form values, purchase once, report

use std::fs;
use std::io::{Read, Write};

use crate::adapter::coordinator::TicketHubApp;
use crate::application::dto::parser::parse_form_input;
use crate::application::usecase::SubmitState;
use crate::domain::validation::ValidationErrors;
use crate::errors::AppResult;

/// Raw form JSON from `path`, or from `stdin` when no path (or "-") is given
pub fn read_form_source<R: Read>(path: Option<&str>, mut stdin: R) -> AppResult<String> {
    match path {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            stdin.read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// One `label: message` line per failing field, in form order
pub fn write_errors<W: Write>(errors: &ValidationErrors, out: &mut W) -> AppResult<()> {
    for error in errors.iter() {
        writeln!(out, "{}: {}", error.field.label(), error.message)?;
    }
    Ok(())
}

pub fn exit_code(state: &SubmitState) -> i32 {
    if state.is_success() {
        0
    } else {
        1
    }
}

/// Read and submit one purchase. Field errors go to `err`; the returned
/// value is the process exit code.
pub async fn run<R: Read, W: Write>(
    app: &mut TicketHubApp,
    path: Option<&str>,
    stdin: R,
    err: &mut W,
) -> AppResult<i32> {
    let raw = read_form_source(path, stdin)?;
    let input = parse_form_input(&raw, app.form().values().concert_id)?;

    let state = app.purchase(input).await?;
    if let SubmitState::Blocked(errors) = &state {
        write_errors(errors, err)?;
    }

    Ok(exit_code(&state))
}
