//! Terminal presentation layer
//!
//! Reads commands at a prompt, forwards them to a [`RecordBrowser`] and
//! redraws from the events the session publishes.

pub mod command;
pub mod render;


use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use tokio::sync::broadcast;
use tracing::debug;

use crate::browser::{BrowserEvent, RecordBrowser};
use command::{Command, CommandError, HELP, parse_command};

/// What the prompt loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// Run one command against the session
#[inline]
pub async fn dispatch(browser: &mut RecordBrowser, command: Command) -> crate::Result<Flow> {
    debug!("Dispatching {:?}", command);
    match command {
        Command::Help => {
            eprintln!("{}", HELP);
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
        Command::Collections => {
            browser.load_collections().await?;
            eprint!("{}", render::render_collections(browser.state()));
            return Ok(Flow::Continue);
        }
        Command::Use(id) => browser.select_collection(&id).await?,
        Command::Refresh => browser.refresh().await?,
        Command::Next => browser.next_page().await?,
        Command::Previous => browser.previous_page().await?,
        Command::Page(page) => browser.go_to_page(page).await?,
        Command::PageSize(size) => browser.set_page_size(size).await?,
        Command::Select(id) => browser.toggle_one(&id, true),
        Command::Unselect(id) => browser.toggle_one(&id, false),
        Command::SelectAll => browser.select_all(true),
        Command::SelectNone => browser.select_all(false),
        Command::Open(id) => browser.open_record(&id)?,
        Command::Close => browser.close_detail(),
        Command::Draft(text) => browser.set_query_draft(text),
        Command::Query(text) => {
            let text = text.unwrap_or_else(|| browser.state().query_draft().to_string());
            browser.submit_query(text).await?;
        }
        Command::Clear => browser.clear_query(),
        Command::Delete => {
            browser.delete_selected().await?;
        }
        Command::Drop => browser.request_drop(),
        Command::Confirm => {
            browser.confirm_drop().await?;
        }
        Command::Cancel => browser.cancel_drop(),
    }
    Ok(Flow::Redraw)
}

/// Print notices for pending events. Returns whether the table needs a redraw.
fn drain_events(receiver: &mut broadcast::Receiver<BrowserEvent>) -> bool {
    let mut redraw = false;
    loop {
        match receiver.try_recv() {
            Ok(event) => {
                redraw |= event.affects_table();
                if let Some(line) = render::render_event(&event) {
                    eprintln!("{}", line);
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                debug!("Event receiver lagged by {} events", skipped);
                redraw = true;
            }
            Err(_) => break,
        }
    }
    redraw
}

async fn read_line() -> Result<String> {
    tokio::task::spawn_blocking(|| {
        Input::<String>::new()
            .with_prompt("records")
            .allow_empty(true)
            .interact_text()
    })
    .await
    .context("Prompt task failed")?
    .context("Failed to read command")
}

/// Interactive prompt loop. Errors from commands are shown and the loop carries on.
#[inline]
pub async fn run(browser: &mut RecordBrowser, preview_len: usize) -> Result<()> {
    let mut events = browser.subscribe();

    eprintln!("{}", style("📚 Record Browser").bold().cyan());
    eprintln!("Type 'help' for commands.");
    eprintln!();
    eprint!("{}", render::render_collections(browser.state()));
    eprint!("{}", render::render_view(browser.state(), preview_len));

    loop {
        let line = read_line().await?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{}", style(e).red());
                continue;
            }
        };

        let flow = match dispatch(browser, command).await {
            Ok(flow) => flow,
            Err(e) => {
                drain_events(&mut events);
                eprintln!("{}", style(e).red());
                continue;
            }
        };

        let table_changed = drain_events(&mut events);
        match flow {
            Flow::Quit => break,
            Flow::Redraw => eprint!("{}", render::render_view(browser.state(), preview_len)),
            Flow::Continue if table_changed => {
                eprint!("{}", render::render_view(browser.state(), preview_len));
            }
            Flow::Continue => {}
        }
    }

    Ok(())
}
