//! Placeholder cards shown while content loads.

use web_sys::Document;

use crate::error::UiResult;
use crate::widgets::dom;

const SKELETON_CLASSES: &str = "card skeleton skeleton-card";
const SKELETON_SELECTOR: &str = ".skeleton";

/// Fills and clears the skeleton container.
#[derive(Clone, Debug)]
pub struct SkeletonLoader {
    document: Document,
    container_selector: String,
    default_count: u32,
}

impl SkeletonLoader {
    pub(crate) fn new(document: Document, container_selector: String, default_count: u32) -> Self {
        Self {
            document,
            container_selector,
            default_count,
        }
    }

    /// Replace the container's children with `count` placeholders
    /// (the configured default when `None`). No-op without a container.
    ///
    /// # Errors
    /// Returns [`crate::error::UiError::Dom`] when a node cannot be created or appended.
    pub fn create_skeleton(&self, count: Option<u32>) -> UiResult<()> {
        let Some(container) = dom::query(&self.document, &self.container_selector) else {
            return Ok(());
        };
        container.set_inner_html("");
        for _ in 0..count.unwrap_or(self.default_count) {
            let placeholder = dom::create(&self.document, "div", SKELETON_CLASSES)?;
            dom::append(&container, &placeholder)?;
        }
        Ok(())
    }

    /// Remove every placeholder in the document.
    pub fn remove_skeleton(&self) {
        for skeleton in dom::query_all(&self.document, SKELETON_SELECTOR) {
            skeleton.remove();
        }
    }
}
