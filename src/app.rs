//! Food Menu Frontend App
//!
//! Dashboard: header, failure banner, the two dialogs and the food grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::{ApiConfig, Food};

use crate::components::{AddFoodModal, EditFoodModal, FoodCard, Header, NoticeBanner};
use crate::store::provide_menu_store;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let store = provide_menu_store(config);
    let menu = store.cell().signal();

    // Load foods on mount
    let load_store = store.clone();
    Effect::new(move |_| {
        let store = load_store.clone();
        spawn_local(async move {
            let _ = store.initialize().await;
        });
    });

    let retry_store = store.clone();
    let placeholder = move || {
        if !menu.with(|m| m.load_failed()) {
            return view! { <p class="loading">"Loading menu..."</p> }.into_any();
        }
        let store = retry_store.clone();
        view! {
            <div class="loading load-failed" data-testid="load-failed">
                <p>"Could not load the menu"</p>
                <button
                    type="button"
                    on:click=move |_| {
                        let store = store.clone();
                        store.dismiss_notice();
                        spawn_local(async move {
                            let _ = store.initialize().await;
                        });
                    }
                >
                    "Retry"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <Header />
        <NoticeBanner />
        <AddFoodModal />
        <EditFoodModal />

        <main class="foods-container" data-testid="foods-list">
            <Show
                when=move || menu.with(|m| m.is_loaded())
                fallback=placeholder
            >
                <For
                    each=move || menu.with(|m| m.foods().to_vec())
                    key=|food: &Food| food.clone()
                    children=|food: Food| view! { <FoodCard food=food /> }
                />
            </Show>
        </main>
    }
}
