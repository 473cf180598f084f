//! Labelled form controls bound to a draft field.

use leptos::prelude::*;

/// Signal/callback pair for one `String` field of an editor's draft.
macro_rules! bind_draft {
    ($editor:expr, $field:ident) => {{
        let editor = $editor;
        (
            Signal::derive(move || editor.with(|e| e.draft.$field.clone())),
            Callback::new(move |value: String| editor.update(|e| e.draft.$field = value)),
        )
    }};
}
pub(crate) use bind_draft;

/// Text input (or textarea when `multiline`).
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    binding: (Signal<String>, Callback<String>),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let (value, on_input) = binding;
    let control = if multiline {
        view! {
            <textarea
                id=id
                class="dialog__input dialog__input--multiline"
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                class="dialog__input"
                type=input_type
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="dialog__label">
            {label}
            {control}
        </label>
    }
}

/// Select over a fixed vocabulary.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    binding: (Signal<String>, Callback<String>),
    options: Vec<&'static str>,
) -> impl IntoView {
    let (value, on_change) = binding;
    view! {
        <label class="dialog__label">
            {label}
            <select
                id=id
                class="dialog__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt selected=move || value.get() == opt>{opt}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
