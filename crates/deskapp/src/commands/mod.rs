//! # Command Layer
//!
//! Operations that change or read dashboard data live here as plain
//! functions over domain types. The [`crate::api`] facade calls them; they
//! never render anything.
//!
//! Commands return [`CmdResult`], not strings. It carries:
//! - `affected_records`: records created by the operation
//! - `listed_records`: the page of records to display
//! - `page`: pagination metadata for `listed_records`
//! - `messages`: structured messages with levels (info, success, warning)
//!
//! Failures are not messages; they come back as [`crate::error::DeskError`].
//!
//! ## Command Modules
//!
//! - [`create`]: validate a form, mint an id, prepend the record
//! - [`list`]: filter, sort and paginate a collection

use serde::Serialize;

use crate::model::Record;
use crate::pagination::PageItem;
use crate::view::ListView;

pub mod create;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Pagination metadata of a listed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub total_count: usize,
    pub total_pages: usize,
    pub range_start: usize,
    pub range_end: usize,
    pub current_page: usize,
    pub page_numbers: Vec<PageItem>,
}

impl From<&ListView<'_>> for PageInfo {
    fn from(view: &ListView<'_>) -> Self {
        Self {
            total_count: view.total_count,
            total_pages: view.total_pages,
            range_start: view.range_start,
            range_end: view.range_end,
            current_page: view.current_page,
            page_numbers: view.page_numbers(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}
