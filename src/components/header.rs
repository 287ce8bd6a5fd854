//! Header Component

use leptos::prelude::*;

use crate::store::use_menu_store;

/// Title bar with the persistent "new dish" button
#[component]
pub fn Header() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <header class="header">
            <div class="header-title">
                <span class="logo">"🍽"</span>
                <h1>"Food Menu"</h1>
            </div>
            <button
                type="button"
                class="add-food-btn"
                on:click=move |_| store.open_add_form()
            >
                <span class="text">"New dish"</span>
                <span class="icon">"+"</span>
            </button>
        </header>
    }
}
