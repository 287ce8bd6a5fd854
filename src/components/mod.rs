//! UI Components
//!
//! Reusable Leptos components.

mod add_food_modal;
mod edit_food_modal;
mod food_card;
mod food_form;
mod header;
mod modal;
mod notice_banner;
mod remove_food_button;

pub use add_food_modal::AddFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use food_form::FoodForm;
pub use header::Header;
pub use modal::Modal;
pub use notice_banner::NoticeBanner;
pub use remove_food_button::RemoveFoodButton;
