//! Success banner offering the processed file for download.

use excel_processor::{Notifier, ResultStore, Severity};
use leptos::*;

use crate::services::{trigger_download, ObjectUrl, ToastNotifier};

#[component]
pub fn ResultBanner(
    results: RwSignal<ResultStore<ObjectUrl>>,
    notifier: ToastNotifier,
) -> impl IntoView {
    let on_download = move |_: ev::MouseEvent| {
        let outcome = results.with(|store| {
            store
                .current()
                .map(|stored| trigger_download(stored.handle().as_str(), stored.file_name()))
        });
        if let Some(Err(e)) = outcome {
            log::error!("❌ {}", e);
            notifier.notify(&e.to_string(), Severity::Error);
        }
    };

    view! {
        <Show
            when=move || results.with(|store| store.is_ready())
            fallback=|| view! { }
        >
            <div class="result-banner">
                <div class="result-info">
                    <div class="result-icon">"✔"</div>
                    <div>
                        <h3 class="result-title">"Processing Complete!"</h3>
                        <p class="result-text">"Your file is ready for download"</p>
                    </div>
                </div>
                <button class="btn btn-success" on:click=on_download.clone()>
                    "Download Result"
                </button>
            </div>
        </Show>
    }
}
