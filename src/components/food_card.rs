//! Food Card Component
//!
//! One dish on the dashboard with edit, delete and availability controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::Food;

use crate::components::RemoveFoodButton;
use crate::store::use_menu_store;

#[component]
pub fn FoodCard(food: Food) -> impl IntoView {
    let store = use_menu_store();

    let id = food.id;
    let available = food.available;
    let edit_store = store.clone();

    let on_toggle = move |_| {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.toggle_available(id).await;
        });
    };

    let selected = food.clone();
    let on_edit = move |_| edit_store.select_for_edit(&selected);

    view! {
        <div class=if available { "food" } else { "food unavailable" }>
            <header>
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        title="Edit dish"
                        data-testid=format!("edit-food-{}", id)
                        on:click=on_edit
                    >
                        "✎"
                    </button>
                    <RemoveFoodButton id=id name=food.name.clone() />
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch" for=format!("available-switch-{}", id)>
                        <input
                            id=format!("available-switch-{}", id)
                            type="checkbox"
                            checked=available
                            on:change=on_toggle
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
