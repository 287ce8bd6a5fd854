//! Notice Banner Component
//!
//! Shows the latest failed operation. Goes away when dismissed or after the
//! configured timeout; a failed load offers a retry.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_core::MenuAction;

use crate::store::{use_config, use_menu, use_menu_store};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_menu_store();
    let menu = use_menu();
    let timeout_ms = use_config().notice_timeout_ms;

    // Only a new notice re-runs the timer effect, not other menu writes
    let notice_seq = Memo::new(move |_| menu.with(|m| m.notice().map(|n| n.seq)));

    // Arm a timer per notice; an older timer only clears its own notice
    let timer_store = store.clone();
    Effect::new(move |_| {
        let seq = notice_seq.get();
        if timeout_ms == 0 {
            return;
        }
        if let Some(seq) = seq {
            let store = timer_store.clone();
            Timeout::new(timeout_ms, move || store.expire_notice(seq)).forget();
        }
    });

    move || {
        let notice = menu.with(|m| m.notice().cloned())?;
        let dismiss_store = store.clone();
        let retry_store = store.clone();
        let retry = (notice.action == MenuAction::Load).then(|| {
            view! {
                <button
                    type="button"
                    class="notice-retry"
                    on:click=move |_| {
                        let store = retry_store.clone();
                        store.dismiss_notice();
                        spawn_local(async move {
                            let _ = store.initialize().await;
                        });
                    }
                >
                    "Retry"
                </button>
            }
        });

        Some(view! {
            <div class="notice" role="alert">
                <span class="notice-message">{notice.message()}</span>
                <span class="notice-detail">{notice.detail.clone()}</span>
                {retry}
                <button
                    type="button"
                    class="notice-dismiss"
                    on:click=move |_| dismiss_store.dismiss_notice()
                >
                    "×"
                </button>
            </div>
        })
    }
}
