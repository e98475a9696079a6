//! HTTP transport posting the selection to the processing endpoint.

use excel_processor::{ProcessedResult, Transport, UploadError, UploadRequest, UploadResult};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::types::{describe_js_error, BrowserFile};

/// Sends uploads with `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }
}

/// Map the response status onto the upload outcome.
///
/// Any non-2xx status fails the upload, carrying the status line so the
/// widget can show it.
pub fn check_status(ok: bool, status: u16, status_text: String) -> UploadResult<()> {
    if ok {
        Ok(())
    } else {
        Err(UploadError::Http { status, status_text })
    }
}

/// Build the multipart body: one part per file, named by position.
///
/// Field names come from `UploadRequest`; their `file-<i>` contract is
/// covered by `test_submit_builds_positional_fields` in the core crate.
pub fn build_form_data(request: &UploadRequest<BrowserFile>) -> UploadResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| UploadError::Form(format!("Failed to create FormData: {}", describe_js_error(&e))))?;

    for part in &request.parts {
        form_data
            .append_with_blob_and_filename(&part.field, part.file.as_file(), &part.file_name)
            .map_err(|e| {
                UploadError::Form(format!(
                    "Failed to append {}: {}",
                    part.file_name,
                    describe_js_error(&e)
                ))
            })?;
    }

    Ok(form_data)
}

impl Transport<BrowserFile> for HttpTransport {
    async fn send(&self, request: UploadRequest<BrowserFile>) -> UploadResult<ProcessedResult> {
        let form_data = build_form_data(&request)?;

        let response = Request::post(&request.endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Form(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::Network(format!("HTTP request failed: {}", e)))?;

        check_status(response.ok(), response.status(), response.status_text())?;

        let bytes = response
            .binary()
            .await
            .map_err(|e| UploadError::Payload(format!("Failed to read response: {}", e)))?;

        log::debug!("Received {} bytes from {}", bytes.len(), request.endpoint);
        Ok(ProcessedResult::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_passes() {
        assert_eq!(check_status(true, 200, "OK".into()), Ok(()));
        assert_eq!(check_status(true, 204, String::new()), Ok(()));
    }

    #[test]
    fn test_error_status_carries_status_line() {
        let err = check_status(false, 500, "Internal Server Error".into()).unwrap_err();
        assert_eq!(
            err,
            UploadError::Http {
                status: 500,
                status_text: "Internal Server Error".into(),
            }
        );
        assert_eq!(err.to_string(), "Upload failed: Internal Server Error");
    }

    #[test]
    fn test_redirect_status_without_ok_fails() {
        assert!(matches!(
            check_status(false, 302, "Found".into()),
            Err(UploadError::Http { status: 302, .. })
        ));
    }
}
