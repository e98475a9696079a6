//! List of staged files with per-file removal.

use excel_processor::FileId;
use leptos::*;

use crate::FileRow;

#[component]
pub fn SelectedFiles(
    /// Rows to display, in selection order
    #[prop(into)]
    rows: Signal<Vec<FileRow>>,
    /// Called with the id of the file to remove
    on_remove: Callback<FileId>,
) -> impl IntoView {
    view! {
        <div class="selected-files">
            <h3 class="selected-files-title">"Selected Files"</h3>
            <For
                each=move || rows.get()
                key=|row| row.id
                children=move |row| {
                    let id = row.id;
                    view! {
                        <div class="file-row">
                            <div class="file-info">
                                <span class="file-icon">"📄"</span>
                                <div>
                                    <p class="file-name">{row.name}</p>
                                    <p class="file-size">{row.size_label} " · " {row.kind.to_string()}</p>
                                </div>
                            </div>
                            <button
                                class="file-remove"
                                title="Remove file"
                                on:click=move |_| on_remove.call(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
