//! # Command Layer
//!
//! This module contains the **core business logic** of placez. Each command lives
//! in its own submodule and implements plain Rust functions over the store.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Call into [`PlaceStore`](crate::store::place_store::PlaceStore) and the
//!   [`query`](crate::query) pipeline
//! - Turn store-level signals (a `None` for a missing id) into the outcome the
//!   UI needs: an error for single-place commands, a warning for batches
//! - Return a structured [`CmdResult`] with affected places and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr, or terminal concerns
//! - **Argument parsing or validation**: that's the UI's job
//! - **Session checks**: the API facade gates catalog commands on a session
//!
//! ## Command Modules
//!
//! - [`create`]: Add a place
//! - [`list`]: Filter, sort and paginate the catalog
//! - [`view`]: Fetch one place
//! - [`update`]: Replace a place's editable fields
//! - [`delete`]: Remove one or more places
//! - [`stats`]: Catalog statistics
//! - [`reset`]: Clear all places back to the sample set
//! - [`session`]: Login, logout, whoami

use crate::auth::Session;
use crate::model::Place;
use crate::stats::Statistics;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod list;
pub mod reset;
pub mod session;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Where a listing sits within the full filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    pub affected_places: Vec<Place>,
    pub listed_places: Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_places(mut self, places: Vec<Place>) -> Self {
        self.affected_places = places;
        self
    }

    pub fn with_listed_places(mut self, places: Vec<Place>) -> Self {
        self.listed_places = places;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }
}
