//! Excel Processor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading spreadsheets to a processing
//! endpoint and downloading the processed result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title, tagline)                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── UploadSection (drop zone, selected files, submit)      │
//! │  └── ResultBanner (when a result is stored)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToastContainer (top-center, never auto-closes)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser file wrapper, list rows, errors
//! - [`components`] - UI components (Upload, Result, Toasts, etc.)
//! - [`services`] - Transport, object URLs, notifier, download

use excel_processor::{Notifier, ProcessedResult, ResultStore, Severity};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    BrowserFile, FileRow, files_from_list,
    // Drag state
    DragDepth,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic/console hooks and mount the app on `<body>`.
///
/// Called by the trunk-built binary in `main.rs`.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Excel Processor - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

/// The page shell: owns the stored result and the toast layer.
#[component]
fn MainContent() -> impl IntoView {
    let notifier = ToastNotifier::new(toast_options());
    let results = create_rw_signal(ResultStore::<ObjectUrl>::new());

    let completion_notifier = notifier.clone();
    let on_upload_complete = Callback::new(move |result: ProcessedResult| {
        // The blob owns the payload from here on; `result` is dropped below.
        match ObjectUrl::from_bytes(result.bytes(), RESULT_MIME_TYPE) {
            Ok(url) => {
                log::info!("📦 Result ready for download: {} bytes", result.len());
                results.update(|store| store.store(result.len(), url));
            }
            Err(e) => {
                log::error!("❌ {}", e);
                completion_notifier.notify(&e.to_string(), Severity::Error);
            }
        }
    });

    view! {
        <Header/>

        <div class="container">
            <div class="card">
                <h2 class="card-title">"Upload Files"</h2>
                <UploadSection
                    notifier=notifier.clone()
                    on_upload_complete=on_upload_complete
                />
            </div>

            <ResultBanner results=results notifier=notifier.clone()/>
        </div>

        <Footer/>

        <ToastContainer notifier=notifier.clone()/>
    }
}
