use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Confirm, Close, etc.) to display in footer
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes; the listener is removed when the modal unmounts
    let _ = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });

    // Clicking the overlay discards, clicks inside the dialog do not
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|buttons| view! {
                    <div class="modal-footer">{buttons()}</div>
                })}
            </div>
        </div>
    }
}
