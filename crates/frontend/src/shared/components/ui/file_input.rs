use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Metadata of a selected file. Nothing is uploaded; this is all the form
/// ever sees of the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: f64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// File input exposing selected-file metadata only
#[component]
pub fn FileInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Currently selected file, if any
    #[prop(into)]
    value: Signal<Option<FileMeta>>,
    /// Called with the metadata of a newly picked file, `None` on clear
    #[prop(optional)]
    on_select: Option<Callback<Option<FileMeta>>>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Validation error shown beneath the control
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    let handle_change = move |ev: leptos::ev::Event| {
        let Some(handler) = on_select else {
            return;
        };
        let meta = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| FileMeta {
                name: file.name(),
                size: file.size(),
                mime_type: file.type_(),
            });
        handler.run(meta);
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                type="file"
                class="form__file"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=handle_change
            />
            {move || value.get().map(|meta| view! {
                <span class="form__file-meta">
                    {format!("{} ({:.1} KB, {})", meta.name, meta.size / 1024.0, meta.mime_type)}
                </span>
            })}
            {move || error.get().map(|message| view! {
                <span class="form__error">{message}</span>
            })}
        </div>
    }
}
