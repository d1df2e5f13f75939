//! Toast stack rendering coordinator notices.

use leptos::prelude::*;
use session::NoticeTone;

use crate::state::toasts::ToastState;

fn tone_class(tone: NoticeTone) -> &'static str {
    match tone {
        NoticeTone::Info => "toast",
        NoticeTone::Destructive => "toast toast--destructive",
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=tone_class(toast.notice.tone)>
                            <p class="toast__title">{toast.notice.title}</p>
                            <p class="toast__description">{toast.notice.description}</p>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
