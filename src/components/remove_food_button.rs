//! Remove Food Button
//!
//! Trash button on a food card. Asks for confirmation by name, then holds a
//! pending state until the server answers; on failure the card stays and the
//! banner reports it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::FoodId;

use crate::store::use_menu_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemoveStep {
    Idle,
    Confirming,
    Removing,
}

#[component]
pub fn RemoveFoodButton(id: FoodId, name: String) -> impl IntoView {
    let store = use_menu_store();
    let step = RwSignal::new(RemoveStep::Idle);

    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        step.set(RemoveStep::Removing);
        let store = store.clone();
        spawn_local(async move {
            // a successful delete unmounts the card with this signal
            if store.remove_food(id).await.is_err() {
                let _ = step.try_set(RemoveStep::Idle);
            }
        });
    };

    move || match step.get() {
        RemoveStep::Idle => view! {
            <button
                type="button"
                class="icon"
                title="Delete dish"
                data-testid=format!("remove-food-{}", id)
                on:click=move |ev| {
                    ev.stop_propagation();
                    step.set(RemoveStep::Confirming);
                }
            >
                "🗑"
            </button>
        }
        .into_any(),
        RemoveStep::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{format!("Delete {}?", name)}</span>
                <button type="button" class="confirm-btn" on:click=confirm.clone()>
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        step.set(RemoveStep::Idle);
                    }
                >
                    "✗"
                </button>
            </span>
        }
        .into_any(),
        RemoveStep::Removing => {
            view! { <span class="remove-pending">"Deleting…"</span> }.into_any()
        }
    }
}
