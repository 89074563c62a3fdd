//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all placez operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Gates** catalog operations on a logged-in session
//! - **Normalizes inputs** (loose view keys → [`ViewParams`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Validation**: callers run [`crate::validation`] before handing input over
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Two Backends
//!
//! `PlacezApi<B: StorageBackend>` is generic over the storage port and holds two
//! instances of it:
//! - **local**: places, statistics, credentials. Long-lived.
//! - **session**: the current login. Cleared on logout.
//!
//! Production wires both to [`FsBackend`](crate::store::fs_backend::FsBackend)
//! directories; tests use [`MemBackend`](crate::store::mem_backend::MemBackend).

use crate::auth::{self, Session};
use crate::commands;
use crate::error::{PlacezError, Result};
use crate::model::PlaceInput;
use crate::query::ViewParams;
use crate::store::backend::StorageBackend;
use crate::store::place_store::PlaceStore;

/// The main API facade for placez operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct PlacezApi<B: StorageBackend> {
    store: PlaceStore<B>,
    session: B,
}

impl<B: StorageBackend> PlacezApi<B> {
    pub fn new(local: B, session: B) -> Self {
        Self {
            store: PlaceStore::with_backend(local),
            session,
        }
    }

    /// Seeds places and credentials where missing. Safe to call on every start.
    pub fn initialize(&self) -> Result<()> {
        self.store.initialize()?;
        auth::ensure_default_credentials(self.store.backend())
    }

    fn require_session(&self) -> Result<Session> {
        auth::current_session(&self.session)?.ok_or(PlacezError::NotLoggedIn)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<commands::CmdResult> {
        commands::session::login(self.store.backend(), &self.session, username, password)
    }

    pub fn logout(&self) -> Result<commands::CmdResult> {
        commands::session::logout(&self.session)
    }

    pub fn whoami(&self) -> Result<commands::CmdResult> {
        commands::session::whoami(&self.session)
    }

    pub fn current_session(&self) -> Result<Option<Session>> {
        auth::current_session(&self.session)
    }

    pub fn list_places(&self, view: &ViewParams, page: usize) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::list::run(&self.store, view, page)
    }

    /// String-keyed listing, as a view layer hands its current controls over.
    pub fn render(
        &self,
        category: &str,
        status: &str,
        search: &str,
        sort: &str,
        price: &str,
        page: usize,
    ) -> Result<commands::CmdResult> {
        let view = ViewParams::from_keys(category, status, search, sort, price);
        self.list_places(&view, page)
    }

    pub fn view_place(&self, id: &str) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::view::run(&self.store, id)
    }

    pub fn create_place(&mut self, input: PlaceInput) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::create::run(&mut self.store, input)
    }

    pub fn update_place(&mut self, id: &str, input: PlaceInput) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::update::run(&mut self.store, id, input)
    }

    pub fn delete_places<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::delete::run(&mut self.store, ids)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::stats::run(&self.store)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        self.require_session()?;
        commands::reset::run(&mut self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, PageInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_input;

    fn api() -> PlacezApi<MemBackend> {
        let api = PlacezApi::new(MemBackend::new(), MemBackend::new());
        api.initialize().unwrap();
        api
    }

    fn logged_in() -> PlacezApi<MemBackend> {
        let api = api();
        api.login("admin", "admin123").unwrap();
        api
    }

    #[test]
    fn test_catalog_requires_session() {
        let mut api = api();
        assert!(matches!(
            api.list_places(&ViewParams::default(), 1),
            Err(PlacezError::NotLoggedIn)
        ));
        assert!(matches!(api.view_place("1"), Err(PlacezError::NotLoggedIn)));
        assert!(matches!(
            api.create_place(sample_input("x")),
            Err(PlacezError::NotLoggedIn)
        ));
        assert!(matches!(
            api.delete_places(&["1"]),
            Err(PlacezError::NotLoggedIn)
        ));
        assert!(matches!(api.statistics(), Err(PlacezError::NotLoggedIn)));
        assert!(matches!(api.reset(), Err(PlacezError::NotLoggedIn)));
    }

    #[test]
    fn test_logout_closes_the_gate() {
        let api = logged_in();
        assert_eq!(api.current_session().unwrap().unwrap().username, "admin");
        assert!(api.statistics().is_ok());
        api.logout().unwrap();
        assert!(matches!(api.statistics(), Err(PlacezError::NotLoggedIn)));
        assert!(api.current_session().unwrap().is_none());
    }

    #[test]
    fn test_render_dispatches_string_keys() {
        let api = logged_in();
        let result = api.render("beach", "all", "tokyo", "name", "all", 1).unwrap();
        assert_eq!(result.listed_places.len(), 1);
        assert_eq!(result.listed_places[0].name, "Tokyo City Lights");

        let result = api.render("all", "visited", "", "name", "all", 1).unwrap();
        let ids: Vec<&str> = result.listed_places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_create_update_delete_round() {
        let mut api = logged_in();

        let created = api.create_place(sample_input("Kyoto")).unwrap();
        let id = created.affected_places[0].id.clone();

        let mut input = sample_input("Kyoto Gardens");
        input.rating = 5.0;
        let updated = api.update_place(&id, input).unwrap();
        assert_eq!(updated.affected_places[0].name, "Kyoto Gardens");

        let viewed = api.view_place(&id).unwrap();
        assert_eq!(viewed.listed_places[0].rating, 5.0);

        api.delete_places(&[id.as_str()]).unwrap();
        assert!(matches!(
            api.view_place(&id),
            Err(PlacezError::PlaceNotFound(_))
        ));
    }
}
