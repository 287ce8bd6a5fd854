//! Error Types
//!
//! `ApiError` describes a failed call to the `/foods` resource,
//! `MenuError` a failed store operation.

use std::fmt;

use crate::food::FoodId;

/// Errors from the resource client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request could not be built: {0}")]
    Request(String),

    #[error("Connection failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {text}")]
    Status { status: u16, text: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Store operation that talks to the remote resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Load,
    Create,
    Update,
    Delete,
    ToggleAvailability,
}

impl MenuAction {
    /// User-facing description of the failure
    pub fn failure_message(&self) -> &'static str {
        match self {
            MenuAction::Load => "Could not load the menu",
            MenuAction::Create => "Could not add the dish",
            MenuAction::Update => "Could not save the dish",
            MenuAction::Delete => "Could not delete the dish",
            MenuAction::ToggleAvailability => "Could not change availability",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuAction::Load => "load",
            MenuAction::Create => "create",
            MenuAction::Update => "update",
            MenuAction::Delete => "delete",
            MenuAction::ToggleAvailability => "toggle availability",
        };
        f.write_str(name)
    }
}

/// Errors returned by menu store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("{action} failed: {source}")]
    Remote {
        action: MenuAction,
        #[source]
        source: ApiError,
    },

    #[error("No food selected for editing")]
    NoSelection,

    #[error("Food {0} is not on the menu")]
    UnknownFood(FoodId),
}

pub type MenuResult<T> = Result<T, MenuError>;
