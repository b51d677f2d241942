use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search box with a clear button
///
/// Propagates every keystroke; the list recomputes its filter immediately,
/// so there is no debounce and no minimum term length.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback for filter updates
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
