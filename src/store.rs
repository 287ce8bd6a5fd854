//! Global Menu Store
//!
//! The menu snapshot lives in one signal; every write goes through the
//! controller so the collection is only ever replaced, never edited in place.

use leptos::prelude::*;
use menu_core::{ApiConfig, Menu, MenuCell, MenuController};

use crate::commands::HttpFoodApi;

/// Signal-backed menu cell
#[derive(Debug, Clone, Copy)]
pub struct MenuSignal(RwSignal<Menu>);

impl MenuSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(Menu::default()))
    }

    /// Tracked access for views
    pub fn signal(&self) -> RwSignal<Menu> {
        self.0
    }
}

impl Default for MenuSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCell for MenuSignal {
    fn snapshot(&self) -> Menu {
        self.0.get_untracked()
    }

    fn replace(&self, next: Menu) {
        self.0.set(next);
    }
}

/// Type alias for the store
pub type MenuStore = MenuController<HttpFoodApi, MenuSignal>;

/// Create the store and provide it (and the config) to all children
pub fn provide_menu_store(config: ApiConfig) -> MenuStore {
    let store = MenuStore::new(HttpFoodApi::new(config.clone()), MenuSignal::new());
    provide_context(config);
    provide_context(store.clone());
    store
}

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

/// Reactive view of the menu snapshot
pub fn use_menu() -> RwSignal<Menu> {
    use_menu_store().cell().signal()
}

pub fn use_config() -> ApiConfig {
    expect_context::<ApiConfig>()
}
