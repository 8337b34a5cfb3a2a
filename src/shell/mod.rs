//! Line-based front end for [`ReplicatedStore`].
//!
//! Reads one command per line, runs it against the store and writes the
//! rendered result. Store errors are printed and the loop continues; only
//! `exit` or end of input stops it.

pub mod commands;
pub mod render;

use crate::cluster::service::ReplicatedStore;
use anyhow::Result;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use commands::{Command, USAGE};

pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Exit,
}

/// Runs `command` against the store and renders its result.
pub fn execute(store: &mut ReplicatedStore, command: Command, format: OutputFormat) -> Step {
    let output = match command {
        Command::Create { name, data } => match store.create_file(&name, data) {
            Ok(report) => render::render_created(&report),
            Err(e) => e.to_string(),
        },
        Command::Read { name } => match store.read_file(&name) {
            Ok(outcome) => render::render_read(&name, &outcome),
            Err(e) => e.to_string(),
        },
        Command::ListFiles => {
            let files = store.list_files();
            match format {
                OutputFormat::Text => render::render_files(&files),
                OutputFormat::Json => json_lines(&files),
            }
        }
        Command::ListNodes => {
            let nodes = store.list_nodes();
            match format {
                OutputFormat::Text => render::render_nodes(&nodes),
                OutputFormat::Json => json_lines(&nodes),
            }
        }
        Command::Fail { node } => match store.fail_node(node) {
            Ok(report) => {
                render::render_transition(&format!("Node {} marked as DOWN.", node), &report)
            }
            Err(e) => e.to_string(),
        },
        Command::Recover { node } => match store.recover_node(node) {
            Ok(report) => render::render_transition(&format!("Node {} is now UP.", node), &report),
            Err(e) => e.to_string(),
        },
        Command::Help => USAGE.to_string(),
        Command::Exit => return Step::Exit,
    };

    Step::Continue(output)
}

fn json_lines<T: Serialize>(items: &[T]) -> String {
    items
        .iter()
        .filter_map(|item| match serde_json::to_string(item) {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!("Failed to serialize listing entry: {}", e);
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drives the store from `input` until `exit` or end of input.
pub async fn run<R, W>(
    store: &mut ReplicatedStore,
    input: R,
    mut output: W,
    format: OutputFormat,
    prompt: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        if prompt {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let text = match Command::parse(&line) {
            Ok(command) => match execute(store, command, format) {
                Step::Continue(text) => text,
                Step::Exit => break,
            },
            Err(commands::ParseError::Empty) => continue,
            Err(e) => format!("{}. Type 'help' for commands.", e),
        };

        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    tracing::debug!("Shell loop finished");
    Ok(())
}
