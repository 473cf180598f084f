//! Backdrop + dialog frame shared by the create/edit forms.

use leptos::prelude::*;

/// Dialog that submits via `on_submit` and closes on Cancel or backdrop click.
#[component]
pub fn FormModal(
    #[prop(into)] title: Signal<String>,
    submit_id: &'static str,
    #[prop(into)] submit_label: Signal<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || title.get()}</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {children()}
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button id=submit_id type="submit" class="btn btn--primary">
                            {move || submit_label.get()}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
