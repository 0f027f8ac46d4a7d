//! # API Facade
//!
//! [`RosterApi`] is a thin facade over the command layer and the single
//! entry point for every roster operation, whatever UI is driving it. It
//! dispatches, it owns the live `RecordStore` and the transient
//! `SelectionSet`, and it returns structured `Result<CmdResult>` values.
//! Business logic stays in `commands/*.rs`; presentation stays above.
//!
//! Generic over [`Persistence`] so production runs on `FileStore` and tests
//! on `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::model::{EmployeeFields, PageRequest, SortSpec};
use crate::records::RecordStore;
use crate::selection::SelectionSet;
use crate::session::{self, CurrentUser, UserRole};
use crate::store::Persistence;
use std::path::Path;

pub struct RosterApi<P: Persistence> {
    store: RecordStore<P>,
    selection: SelectionSet,
}

impl<P: Persistence> RosterApi<P> {
    /// Open the roster backed by the given persistence service.
    pub fn open(persistence: P) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(persistence)?,
            selection: SelectionSet::new(),
        })
    }

    pub fn add_employee(&mut self, fields: EmployeeFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn update_employee(
        &mut self,
        id: &str,
        fields: EmployeeFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn delete_employee(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.selection, id)
    }

    pub fn delete_employees(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        commands::delete::run_bulk(&mut self.store, &mut self.selection, ids)
    }

    /// Bulk-delete whatever is currently selected.
    pub fn delete_selected(&mut self) -> Result<commands::CmdResult> {
        let ids = self.selection.to_vec();
        commands::delete::run_bulk(&mut self.store, &mut self.selection, &ids)
    }

    pub fn list_employees(
        &self,
        filter_term: &str,
        sort: &SortSpec,
        page: &PageRequest,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter_term, sort, page)
    }

    pub fn import_csv(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn export_csv(&self, filter_term: &str, out_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, filter_term, out_dir)
    }

    pub fn stats(&self, filter_term: &str) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, filter_term)
    }

    // Selection state. Held here, not persisted: it is UI state that spans
    // page changes within one session.

    pub fn toggle_select(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    /// Select exactly the ids of the currently rendered page.
    pub fn select_page(&mut self, visible_ids: Vec<String>) {
        self.selection.select_all_visible(visible_ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.deselect_all();
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // Session passthrough.

    pub fn current_user(&self) -> Result<Option<CurrentUser>> {
        session::current_user(self.store.persistence())
    }

    pub fn login(&mut self, email: &str, role: UserRole) -> Result<CurrentUser> {
        session::login(self.store.persistence_mut(), email, role)
    }

    pub fn logout(&mut self) -> Result<()> {
        session::logout(self.store.persistence_mut())
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PageInfo, StatsSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api_with(names: &[&str]) -> RosterApi<InMemoryStore> {
        let mut api = RosterApi::open(InMemoryStore::new()).unwrap();
        for name in names {
            api.add_employee(EmployeeFields::new(*name, "e@x.com", "Dev", "Eng"))
                .unwrap();
        }
        api
    }

    #[test]
    fn dispatches_add_and_list() {
        let api = api_with(&["Ann", "Bob"]);
        let result = api
            .list_employees("", &SortSpec::unsorted(), &PageRequest::default())
            .unwrap();
        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn delete_selected_clears_the_selection() {
        let mut api = api_with(&["Ann", "Bob", "Cat"]);
        let ids: Vec<String> = api
            .list_employees("", &SortSpec::unsorted(), &PageRequest::default())
            .unwrap()
            .listed
            .iter()
            .map(|e| e.id.clone())
            .take(2)
            .collect();

        api.select_page(ids);
        assert_eq!(api.selection().len(), 2);
        api.delete_selected().unwrap();
        assert!(api.selection().is_empty());

        let remaining = api
            .list_employees("", &SortSpec::unsorted(), &PageRequest::default())
            .unwrap();
        assert_eq!(remaining.listed.len(), 1);
    }

    #[test]
    fn session_round_trip() {
        let mut api = api_with(&[]);
        assert!(api.current_user().unwrap().is_none());
        api.login("boss@x.com", UserRole::Admin).unwrap();
        assert_eq!(api.current_user().unwrap().unwrap().email, "boss@x.com");
        api.logout().unwrap();
        assert!(api.current_user().unwrap().is_none());
    }
}
