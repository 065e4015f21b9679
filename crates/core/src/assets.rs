//! Image asset lookup
//!
//! Images are referenced by file name only. A name that does not exist under
//! the asset root resolves to `None` and the UI draws a placeholder instead.

use std::path::{Path, PathBuf};

use crate::error::{BrewError, BrewResult};

/// Bean image used for the trailing markers
pub const BEAN_IMAGE: &str = "coffee-beans.png";

/// Logo shown above the sign-in form
pub const LOGO_IMAGE: &str = "coffee-icon.png";

/// Directory that image file names are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    root: PathBuf,
}

impl AssetRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to `name` if the file exists
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        match self.require(name) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("{}", e);
                None
            }
        }
    }

    /// Path to `name`, or [`BrewError::AssetNotFound`]
    pub fn require(&self, name: &str) -> BrewResult<PathBuf> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(BrewError::AssetNotFound(path))
        }
    }

    /// `src` attribute value for `name`, if the file exists
    pub fn src(&self, name: &str) -> Option<String> {
        self.resolve(name)
            .map(|path| path.to_string_lossy().replace('\\', "/"))
    }
}

impl Default for AssetRoot {
    fn default() -> Self {
        Self::new("assets/images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(BEAN_IMAGE), b"png").unwrap();

        let assets = AssetRoot::new(dir.path());
        assert_eq!(assets.resolve(BEAN_IMAGE), Some(dir.path().join(BEAN_IMAGE)));
        assert!(assets.src(BEAN_IMAGE).unwrap().ends_with(BEAN_IMAGE));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let assets = AssetRoot::new(dir.path());

        assert_eq!(assets.resolve("espresso.jpg"), None);
        assert_eq!(assets.src("espresso.jpg"), None);
        assert!(matches!(
            assets.require("espresso.jpg"),
            Err(BrewError::AssetNotFound(_))
        ));
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        assert_eq!(AssetRoot::new(dir.path()).resolve("images"), None);
    }
}
