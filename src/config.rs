//! Target file locations inside the app tree
//!
//! The tool edits a fixed set of files; their paths are hard-coded relative
//! to the app root and resolved against it here.

use std::path::{Path, PathBuf};

/// Debounced persistence helpers
pub const LOCAL_STORAGE_TS: &str = "src/utils/localStorage.ts";

/// Main chat component (speech recognition handlers, session state)
pub const CHAT_INTERFACE_TSX: &str = "src/components/ChatInterface.tsx";

/// Global stylesheet
pub const GLOBALS_CSS: &str = "src/app/globals.css";

/// Path to the localStorage utility module
pub fn local_storage_file(app_root: &Path) -> PathBuf {
    app_root.join(LOCAL_STORAGE_TS)
}

/// Path to the chat interface component
pub fn chat_interface_file(app_root: &Path) -> PathBuf {
    app_root.join(CHAT_INTERFACE_TSX)
}

/// Path to the global stylesheet
pub fn stylesheet_file(app_root: &Path) -> PathBuf {
    app_root.join(GLOBALS_CSS)
}
