//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Children are rebuilt on every
//! open, so forms start from fresh state.

use leptos::prelude::*;

#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        is_open.get().then(|| {
            view! {
                <div class="modal-overlay" on:click=move |_| on_close.run(())>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        {children()}
                    </div>
                </div>
            }
        })
    }
}
