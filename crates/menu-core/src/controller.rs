//! Menu Controller
//!
//! Store operations that keep the menu snapshot in step with the remote
//! `/foods` resource. Every remote call is awaited before the snapshot
//! changes, and the change is applied to whatever snapshot is current when
//! the call returns, so operations on different foods never clobber each
//! other.
//!
//! Failures are handled the same way everywhere: the operation returns the
//! error, logs it, leaves the collection alone and raises a notice.

use tracing::{debug, info, warn};

use crate::api::FoodApi;
use crate::cell::MenuCell;
use crate::error::{ApiError, MenuAction, MenuError, MenuResult};
use crate::food::{Food, FoodDraft, FoodId, FoodPatch, NewFood};
use crate::menu::Menu;

#[derive(Debug, Clone)]
pub struct MenuController<A, C> {
    api: A,
    cell: C,
}

impl<A: FoodApi, C: MenuCell> MenuController<A, C> {
    pub fn new(api: A, cell: C) -> Self {
        Self { api, cell }
    }

    /// Current snapshot
    pub fn menu(&self) -> Menu {
        self.cell.snapshot()
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Load the collection once; after a success later calls are no-ops.
    pub async fn initialize(&self) -> MenuResult<()> {
        if self.cell.snapshot().is_loaded() {
            debug!("menu already loaded");
            return Ok(());
        }

        match self.api.list_all().await {
            Ok(foods) => {
                info!(count = foods.len(), "menu loaded");
                self.cell.apply(|menu| menu.with_foods(foods));
                Ok(())
            }
            Err(e) => self.fail_remote(MenuAction::Load, e),
        }
    }

    /// Create a food and append the server's record to the collection
    pub async fn add_food(&self, draft: FoodDraft) -> MenuResult<Food> {
        let new_food = NewFood::from(draft);
        debug!(name = %new_food.name, "creating food");

        match self.api.create(&new_food).await {
            Ok(created) => {
                info!(id = created.id, "food created");
                self.cell.apply(|menu| {
                    menu.with_food_appended(created.clone()).with_add_form(false)
                });
                Ok(created)
            }
            Err(e) => self.fail_remote(MenuAction::Create, e),
        }
    }

    /// Target `food` for editing and open the edit form
    pub fn select_for_edit(&self, food: &Food) {
        debug!(id = food.id, "selected for edit");
        self.cell.apply(|menu| menu.with_selection(food));
    }

    /// Merge `patch` over the edit selection and save it.
    ///
    /// The collection entry replaced is the one carrying the id the server
    /// returned.
    pub async fn apply_edit(&self, patch: FoodPatch) -> MenuResult<Food> {
        let Some(selection) = self.cell.snapshot().editing().cloned() else {
            return self.fail(MenuAction::Update, MenuError::NoSelection);
        };

        let merged = patch.apply_to(&selection);
        debug!(id = merged.id, "updating food");

        match self.api.update(merged.id, &merged).await {
            Ok(updated) => {
                info!(id = updated.id, "food updated");
                self.cell.apply(|menu| {
                    let next = menu.with_food_replaced(&updated);
                    // the user may have picked another food meanwhile
                    if next.editing().map(|f| f.id) == Some(selection.id) {
                        next.with_selection_cleared()
                    } else {
                        next
                    }
                });
                Ok(updated)
            }
            Err(e) => self.fail_remote(MenuAction::Update, e),
        }
    }

    /// Delete a food; the local entry goes only after the server confirms.
    pub async fn remove_food(&self, id: FoodId) -> MenuResult<()> {
        debug!(id, "deleting food");

        match self.api.remove(id).await {
            Ok(()) => {
                info!(id, "food deleted");
                self.cell.apply(|menu| {
                    let next = menu.without_food(id);
                    if next.editing().map(|f| f.id) == Some(id) {
                        next.with_selection_cleared()
                    } else {
                        next
                    }
                });
                Ok(())
            }
            Err(e) => self.fail_remote(MenuAction::Delete, e),
        }
    }

    /// Flip `available` on the stored record
    pub async fn toggle_available(&self, id: FoodId) -> MenuResult<Food> {
        let action = MenuAction::ToggleAvailability;
        let Some(current) = self.cell.snapshot().find(id).cloned() else {
            return self.fail(action, MenuError::UnknownFood(id));
        };

        let toggled = current.with_availability_toggled();
        debug!(id, available = toggled.available, "toggling availability");

        match self.api.update(id, &toggled).await {
            Ok(updated) => {
                self.cell.apply(|menu| menu.with_food_replaced(&updated));
                Ok(updated)
            }
            Err(e) => self.fail_remote(action, e),
        }
    }

    // ========================
    // Forms and notices
    // ========================

    pub fn open_add_form(&self) {
        self.cell.apply(|menu| menu.with_add_form(true));
    }

    pub fn close_add_form(&self) {
        self.cell.apply(|menu| menu.with_add_form(false));
    }

    pub fn toggle_add_form(&self) {
        self.cell.apply(|menu| menu.with_add_form(!menu.is_add_form_open()));
    }

    /// Closing keeps the selection
    pub fn close_edit_form(&self) {
        self.cell.apply(|menu| menu.with_edit_form(false));
    }

    pub fn toggle_edit_form(&self) {
        self.cell.apply(|menu| menu.with_edit_form(!menu.is_edit_form_open()));
    }

    pub fn dismiss_notice(&self) {
        self.cell.apply(Menu::without_notice);
    }

    /// Timer-driven dismissal of notice `seq`
    pub fn expire_notice(&self, seq: u64) {
        self.cell.apply(|menu| menu.without_notice_seq(seq));
    }

    fn fail_remote<T>(&self, action: MenuAction, source: ApiError) -> MenuResult<T> {
        self.fail(action, MenuError::Remote { action, source })
    }

    fn fail<T>(&self, action: MenuAction, error: MenuError) -> MenuResult<T> {
        warn!(%action, %error, "menu operation failed");
        self.cell.apply(|menu| menu.with_notice(action, &error));
        Err(error)
    }
}
