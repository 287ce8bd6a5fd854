//! Food Menu Core
//!
//! Browser-independent half of the food menu dashboard:
//! - food: records exchanged with the `/foods` resource
//! - api: the resource client contract
//! - menu: the immutable dashboard snapshot
//! - cell / controller: the store operations that keep both in step

mod api;
mod cell;
mod config;
mod controller;
mod error;
mod food;
mod menu;


pub use api::FoodApi;
pub use cell::{LocalMenu, MenuCell};
pub use config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_NOTICE_TIMEOUT_MS};
pub use controller::MenuController;
pub use error::{ApiError, MenuAction, MenuError, MenuResult};
pub use food::{Food, FoodDraft, FoodId, FoodPatch, NewFood};
pub use menu::{Menu, Notice};
