//! Page-lifetime slot that lets the widget install run once per page.

use std::cell::OnceCell;

/// Holds the value produced by the first successful install.
#[derive(Debug)]
pub struct InstallSlot<T> {
    cell: OnceCell<T>,
}

impl<T> Default for InstallSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InstallSlot<T> {
    /// Empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the installed value, running `install` only while the slot is
    /// empty. A failed install leaves the slot empty so a later call can retry.
    ///
    /// # Errors
    /// Propagates the error returned by `install`.
    pub fn get_or_install<E>(&self, install: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        if let Some(installed) = self.cell.get() {
            return Ok(installed);
        }
        let value = install()?;
        Ok(self.cell.get_or_init(|| value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn install_runs_once() {
        let runs = Cell::new(0);
        let slot = InstallSlot::new();
        let install = || -> Result<&'static str, ()> {
            runs.set(runs.get() + 1);
            Ok("page")
        };
        assert_eq!(slot.get_or_install(install), Ok(&"page"));
        assert_eq!(slot.get_or_install(install), Ok(&"page"));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn failed_install_can_be_retried() {
        let slot = InstallSlot::<u8>::default();
        assert_eq!(slot.get_or_install(|| Err("no document")), Err("no document"));
        assert_eq!(slot.get_or_install(|| Ok::<_, &str>(7)), Ok(&7));
        assert_eq!(
            slot.get_or_install(|| Err("never called")),
            Ok(&7),
            "an installed slot ignores later installs"
        );
    }
}
