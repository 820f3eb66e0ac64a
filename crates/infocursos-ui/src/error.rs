//! Error types for page bootstrap and widget installation.

use thiserror::Error;

/// Primary error type for the UI crate.
///
/// Missing elements are never reported through this type; widgets treat an
/// absent node as "feature disabled" and return early.
#[derive(Debug, Error)]
pub enum UiError {
    /// `window` is not reachable (non-browser host).
    #[error("browser window unavailable")]
    WindowUnavailable,
    /// `document` is not reachable from the window.
    #[error("document unavailable")]
    DocumentUnavailable,
    /// A DOM call returned an exception.
    #[error("dom operation failed: {operation}")]
    Dom {
        /// Name of the failed DOM operation.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
    /// Page configuration could not be parsed.
    #[error("invalid ui configuration")]
    Config {
        /// Parser error detail.
        detail: String,
    },
    /// The same capability was registered twice in a dispatch table.
    #[error("capability registered twice: {capability}")]
    DuplicateCapability {
        /// Stable name of the capability.
        capability: &'static str,
    },
}

impl UiError {
    /// Wrap a thrown `JsValue` from a DOM call.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn dom(operation: &'static str, value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom {
            operation,
            detail: format!("{value:?}"),
        }
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            detail: err.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<UiError> for wasm_bindgen::JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Convenience alias for UI results.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_map_to_config_variant() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let mapped = UiError::from(err);
        assert!(matches!(mapped, UiError::Config { .. }));
        assert_eq!(mapped.to_string(), "invalid ui configuration");
    }

    #[test]
    fn duplicate_capability_names_the_capability() {
        let err = UiError::DuplicateCapability {
            capability: "toggle-card",
        };
        assert_eq!(err.to_string(), "capability registered twice: toggle-card");
    }
}
