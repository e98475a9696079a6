//! Spreadsheet upload widget with drag & drop support.
//!
//! Handles file selection, validation, upload to the processing endpoint
//! and hands the processed payload to the page.

use excel_processor::{FileId, ProcessedResult, Transport, UploadWidget};
use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::SelectedFiles;
use crate::services::{HttpTransport, ObjectUrlFactory, ToastNotifier};
use crate::{file_input_accept, files_from_list, upload_config, BrowserFile, DragDepth, FileRow};

/// Widget state as held by the component.
pub type BrowserUploadWidget = UploadWidget<BrowserFile, ObjectUrlFactory, ToastNotifier>;

#[component]
pub fn UploadSection(
    /// Raises user feedback
    notifier: ToastNotifier,
    /// Receives each successful payload
    on_upload_complete: Callback<ProcessedResult>,
) -> impl IntoView {
    let widget: RwSignal<BrowserUploadWidget> = create_rw_signal(
        UploadWidget::new(upload_config(), ObjectUrlFactory, notifier)
            .on_complete(move |result| on_upload_complete.call(result)),
    );
    let drag_depth = create_rw_signal(DragDepth::default());
    let file_input = create_node_ref::<leptos::html::Input>();

    let is_uploading = Signal::derive(move || widget.with(|w| w.is_uploading()));
    let has_files = Signal::derive(move || widget.with(|w| !w.selection().is_empty()));
    let rows = Signal::derive(move || {
        widget.with(|w| w.selection().iter().map(FileRow::from).collect::<Vec<_>>())
    });

    let accept = move |files: Vec<BrowserFile>| {
        widget.update(|w| {
            w.accept_drop(files);
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            accept(files_from_list(&list));
        }
        // Allow picking the same file again after removing it
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        drag_depth.update(DragDepth::reset);

        let Some(transfer) = ev.data_transfer() else { return };
        let Some(list) = transfer.files() else { return };
        accept(files_from_list(&list));
    };

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        drag_depth.update(DragDepth::enter);
    };

    // Required for the zone to be a drop target
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_dragleave = move |_: DragEvent| {
        drag_depth.update(DragDepth::leave);
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_remove = Callback::new(move |id: FileId| {
        widget.update(|w| {
            w.remove(id);
        });
    });

    let on_submit = move |_| {
        let Some(request) = widget.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = HttpTransport::new().send(request).await;
            widget.update(|w| {
                w.finish_submit(outcome);
            });
        });
    };

    view! {
        <div class="upload-widget">
            <div
                class="drop-zone"
                class:drag-active=move || drag_depth.with(DragDepth::is_active)
                on:click=trigger_file_input
                on:dragenter=on_dragenter
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">"Drag and drop your Excel files here"</p>
                <p class="upload-hint">"or click to browse files"</p>
                <p class="upload-hint small">"Supports .xlsx, .xls, and .csv files (max 10MB each)"</p>
                <input
                    node_ref=file_input
                    type="file"
                    accept=file_input_accept()
                    multiple=true
                    style="display:none"
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
            </div>

            <Show
                when=move || has_files.get()
                fallback=|| view! { }
            >
                <SelectedFiles rows=rows on_remove=on_remove/>

                <button
                    class="btn btn-primary upload-button"
                    prop:disabled=move || is_uploading.get()
                    on:click=on_submit
                >
                    {move || if is_uploading.get() {
                        "Processing Files..."
                    } else {
                        "Upload and Process Files"
                    }}
                </button>
            </Show>
        </div>
    }
}
