//! Browser services.
//!
//! Implementations of the core seams plus the DOM helpers around them.
//!
//! # Services
//!
//! - [`upload`] - multipart POST to the processing endpoint
//! - [`object_url`] - self-revoking `blob:` URLs for previews and downloads
//! - [`notifier`] - toast notifier
//! - [`download`] - save-as through a transient anchor

pub mod upload;
pub mod object_url;
pub mod notifier;
pub mod download;

pub use upload::*;
pub use object_url::*;
pub use notifier::*;
pub use download::*;
