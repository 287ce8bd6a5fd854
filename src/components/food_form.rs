//! Food Form Component
//!
//! The four inputs shared by the add and edit dialogs.

use leptos::prelude::*;
use menu_core::FoodDraft;

#[component]
pub fn FoodForm(
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] submit_testid: String,
    /// Prefilled values (empty for a new dish)
    #[prop(optional)] initial: FoodDraft,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let image = RwSignal::new(initial.image);
    let name = RwSignal::new(initial.name);
    let price = RwSignal::new(initial.price);
    let description = RwSignal::new(initial.description);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(FoodDraft {
            image: image.get_untracked(),
            name: name.get_untracked(),
            description: description.get_untracked(),
            price: price.get_untracked(),
        });
    };

    let field = |value: RwSignal<String>, field_name: &'static str, placeholder: &'static str| {
        view! {
            <input
                name=field_name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form class="food-form" on:submit=submit>
            <h1>{title}</h1>
            {field(image, "image", "Paste the image link here")}
            {field(name, "name", "e.g. Italian Style")}
            {field(price, "price", "e.g. 19.90")}
            {field(description, "description", "Description")}
            <button type="submit" class="food-form-submit" data-testid=submit_testid>
                <span class="text">{submit_label}</span>
                <span class="icon">"✓"</span>
            </button>
        </form>
    }
}
