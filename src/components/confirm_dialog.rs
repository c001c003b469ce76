//! Confirm Dialog Component
//!
//! Modal question with confirm and cancel actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// Hidden while `prompt` is `None`. The owner resumes or abandons the
/// pending action from the callbacks and clears the prompt.
///
/// # Arguments
/// * `prompt` - Question to ask, if a confirmation is pending
/// * `on_confirm` - Callback when the user accepts
/// * `on_cancel` - Callback when the user declines
#[component]
pub fn ConfirmDialog(
    prompt: Signal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || prompt.get().is_some()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <p class="modal-prompt">{move || prompt.get().unwrap_or_default()}</p>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "OK"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_cancel.run(());
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}
