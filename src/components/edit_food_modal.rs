//! Edit Food Modal
//!
//! Dialog prefilled from the edit selection. Submitting merges the form over
//! the selection, so fields the form does not show (availability) survive.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::{FoodDraft, FoodPatch};

use crate::components::{FoodForm, Modal};
use crate::store::{use_menu, use_menu_store};

#[component]
pub fn EditFoodModal() -> impl IntoView {
    let store = use_menu_store();
    let menu = use_menu();

    let close_store = store.clone();
    let on_close = Callback::new(move |_: ()| close_store.close_edit_form());

    let on_submit = Callback::new(move |draft: FoodDraft| {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.apply_edit(FoodPatch::from(draft)).await;
        });
    });

    let initial = move || {
        menu.with_untracked(|m| m.editing().map(FoodDraft::from).unwrap_or_default())
    };

    view! {
        <Modal
            is_open=Signal::derive(move || menu.with(|m| m.is_edit_form_open()))
            on_close=on_close
        >
            <FoodForm
                title="Edit dish"
                submit_label="Save dish"
                submit_testid="edit-food-button"
                initial=initial()
                on_submit=on_submit
            />
        </Modal>
    }
}
