// Text rendering of the browser state
// Every function returns a String so the output can be checked without a terminal


use console::style;
use std::fmt::Write;

use crate::browser::{BrowserEvent, RecordBrowserState};
use crate::model::Record;

#[inline]
pub fn render_collections(state: &RecordBrowserState) -> String {
    if state.collections().is_empty() {
        return "No collections available.".to_string();
    }

    let selected = state.selected_collection_id();
    let mut out = String::from("Collections:\n");
    for collection in state.collections() {
        let marker = if selected == Some(collection.id.as_str()) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            " {} {} ({})",
            marker,
            collection.name,
            style(&collection.id).dim()
        );
    }
    out
}

/// Header, record rows, pager and any open dialog
#[inline]
pub fn render_view(state: &RecordBrowserState, preview_len: usize) -> String {
    let mut out = String::new();

    let collection = state
        .selected_collection()
        .map_or_else(|| "Choose a collection".to_string(), |c| c.name.clone());
    let _ = writeln!(
        out,
        "{}  {}",
        style(format!("Collection: {}", collection)).bold(),
        style(state.status_line()).dim()
    );

    let _ = writeln!(out, "Metadata Query: {}", state.query_draft());
    if let Some(filter) = state.effective_filter() {
        let _ = writeln!(out, "Active filter: {}", style(filter).cyan());
    }

    out.push_str(&render_table(state, preview_len));
    out.push_str(&render_pager(state));

    if state.confirmation().is_pending() {
        out.push_str(&render_drop_warning());
    }

    if let Some(record) = state.detail().record() {
        out.push_str(&render_detail(record));
    }

    out
}

#[inline]
pub fn render_table(state: &RecordBrowserState, preview_len: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {:<6} {:<16} {:<48} Embeddings",
        checkbox(state.is_all_selected()),
        "ID",
        "Document",
        "Metadata"
    );

    for record in state.displayed() {
        let _ = writeln!(
            out,
            "{} {:<6} {:<16} {:<48} {}",
            checkbox(state.selection().is_selected(&record.id)),
            record.id,
            record.document,
            record.metadata_json(),
            record.embedding_preview(preview_len)
        );
    }
    out
}

#[inline]
pub fn render_pager(state: &RecordBrowserState) -> String {
    let pagination = state.pagination();
    let previous = if pagination.has_previous() {
        style("< Previous").to_string()
    } else {
        style("< Previous").dim().to_string()
    };
    let next = if pagination.has_next() {
        style("Next >").to_string()
    } else {
        style("Next >").dim().to_string()
    };

    let mut out = format!(
        "{}  {}  {}    Per page: {}",
        previous,
        state.page_line(),
        next,
        pagination.page_size()
    );
    if !state.selection().is_empty() {
        let _ = write!(out, "    Selected: {}", state.selection().len());
    }
    if let Some(fetched_at) = state.fetched_at() {
        let _ = write!(
            out,
            "    {}",
            style(format!("fetched {}", fetched_at.format("%H:%M:%S"))).dim()
        );
    }
    out.push('\n');
    out
}

#[inline]
pub fn render_drop_warning() -> String {
    format!(
        "{}\n{}\n",
        style("⚠ Warning").red().bold(),
        style("Are you sure you want to drop this collection? This action cannot be undone. (confirm / cancel)").red()
    )
}

#[inline]
pub fn render_detail(record: &Record) -> String {
    format!(
        "{}\n  ID:         {}\n  Document:   {}\n  Metadata:   {}\n  Embeddings: {}\n",
        style("Record Details").bold().cyan(),
        record.id,
        record.document,
        record.metadata_json_pretty().replace('\n', "\n              "),
        record.embedding_full()
    )
}

/// One-line notice for events worth telling the user about
#[inline]
pub fn render_event(event: &BrowserEvent) -> Option<String> {
    let line = match event {
        BrowserEvent::CollectionDropped { id } => {
            style(format!("✓ Dropped collection {}", id)).green().to_string()
        }
        BrowserEvent::RecordsDeleted { ids } => {
            style(format!("✓ Deleted {} records", ids.len())).green().to_string()
        }
        BrowserEvent::QueryAccepted { filter } => format!("Querying metadata: {}", filter),
        BrowserEvent::QueryRejected { message } => {
            style(format!("Invalid JSON input: {}", message)).red().to_string()
        }
        BrowserEvent::SourceFailed { message } => style(format!(
            "Record source failed: {} (try again or 'refresh')",
            message
        ))
        .yellow()
        .to_string(),
        BrowserEvent::DropCancelled => "Drop cancelled.".to_string(),
        _ => return None,
    };
    Some(line)
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
