//! Add Food Modal
//!
//! Dialog for creating a new dish.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::FoodDraft;

use crate::components::{FoodForm, Modal};
use crate::store::{use_menu, use_menu_store};

#[component]
pub fn AddFoodModal() -> impl IntoView {
    let store = use_menu_store();
    let menu = use_menu();

    let close_store = store.clone();
    let on_close = Callback::new(move |_: ()| close_store.close_add_form());

    // the store closes the dialog once the dish is created
    let on_submit = Callback::new(move |draft: FoodDraft| {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.add_food(draft).await;
        });
    });

    view! {
        <Modal
            is_open=Signal::derive(move || menu.with(|m| m.is_add_form_open()))
            on_close=on_close
        >
            <FoodForm
                title="New dish"
                submit_label="Add dish"
                submit_testid="add-food-button"
                on_submit=on_submit
            />
        </Modal>
    }
}
