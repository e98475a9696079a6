//! Toast container.
//!
//! Styles are inline so the component does not depend on a global
//! stylesheet.

use excel_processor::Severity;
use leptos::*;

use crate::services::ToastNotifier;

fn accent(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "#16a34a",
        Severity::Error => "#dc2626",
        Severity::Warning => "#d97706",
        Severity::Info => "#2563eb",
        Severity::Default => "#4b5563",
    }
}

#[component]
pub fn ToastContainer(notifier: ToastNotifier) -> impl IntoView {
    let container_style = format!(
        "position: fixed; z-index: 9999; display: flex; flex-direction: column; gap: 0.5rem; width: min(90vw, 24rem); {}",
        notifier.options().position.css()
    );
    let visible = notifier.clone();

    view! {
        <div class="toast-container" style=container_style role="status">
            <For
                each=move || visible.visible()
                key=|toast| toast.handle
                children=move |toast| {
                    let handle = toast.handle;
                    let notifier = notifier.clone();
                    let style = format!(
                        "display: flex; align-items: flex-start; gap: 0.75rem; padding: 0.75rem 1rem; \
                         background: #fff; border-left: 4px solid {}; border-radius: 0.5rem; \
                         box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);",
                        accent(toast.severity)
                    );
                    view! {
                        <div class=format!("toast {}", toast.severity.css_class()) style=style>
                            <div style="flex: 1;">
                                <strong style="display: block; font-size: 0.8rem;">{toast.severity.label()}</strong>
                                <span>{toast.message}</span>
                            </div>
                            <button
                                style="border: none; background: none; cursor: pointer; font-size: 1rem;"
                                title="Dismiss"
                                on:click=move |_| notifier.dismiss(handle)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_has_distinct_accent() {
        let accents = [
            Severity::Success,
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Default,
        ]
        .map(accent);
        let unique: std::collections::HashSet<_> = accents.iter().collect();
        assert_eq!(unique.len(), accents.len());
    }
}
