//! Storage for the emulated current directory.

use crate::path::{refine, ROOT};

/// Holds the emulated current directory.
///
/// The stored value is either a refined absolute path (leading separator, no
/// trailing one unless it is `/`) or the empty string, which means the
/// current directory is undefined.
///
/// # Examples
///
/// ```
/// use cwdemu::CwdStore;
///
/// let mut cwd = CwdStore::default();
/// assert_eq!(cwd.get(), "/");
///
/// cwd.set(" usr/lib/ ");
/// assert_eq!(cwd.get(), "/usr/lib");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CwdStore {
    pwd: String,
}

impl Default for CwdStore {
    fn default() -> Self {
        Self {
            pwd: ROOT.to_string(),
        }
    }
}

impl CwdStore {
    /// A store holding `initial`, stored as [`CwdStore::set`] would.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        let mut store = Self::default();
        store.set(initial);
        store
    }

    /// The stored directory, verbatim.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.pwd
    }

    /// Overwrite the stored directory without consulting the filesystem.
    ///
    /// A blank `raw` leaves the directory undefined (empty); anything else is
    /// stored refined.
    pub fn set(&mut self, raw: &str) {
        let raw = raw.trim();
        self.pwd = if raw.is_empty() {
            String::new()
        } else {
            refine(raw)
        };
    }

    /// False once the directory was reset to the empty string.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.pwd.is_empty()
    }
}
