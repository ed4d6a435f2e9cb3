//! # Asset Sources
//!
//! Icons named in a configuration message are package-local assets, resolved
//! relative to a content root (`www` by default). The source is injected into
//! item construction through [`AssetContext`]; nothing here is global.
//!
//! ```text
//! icon: "img/save.png"
//!        │
//!        ▼
//! AssetContext::load  →  "<content_root>/img/save.png"  →  AssetSource::open_asset
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Default directory, inside the package, that icon names are relative to.
pub const DEFAULT_CONTENT_ROOT: &str = "www";

/// Something that can hand out the raw bytes of a packaged asset.
pub trait AssetSource: Send + Sync {
    fn open_asset(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
    base: PathBuf,
}

impl DirAssets {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl AssetSource for DirAssets {
    fn open_asset(&self, path: &str) -> io::Result<Vec<u8>> {
        let relative = Path::new(path);
        // Only plain relative paths; the package directory is the boundary.
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("asset path escapes package: {path}"),
            ));
        }
        fs::read(self.base.join(relative))
    }
}

/// Assets held in memory, keyed by package-relative path.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an asset and returns `self` for chaining.
    pub fn with(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), data.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn open_asset(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no asset: {path}")))
    }
}

/// An asset source paired with the content root icon names are resolved under.
#[derive(Clone)]
pub struct AssetContext {
    source: Arc<dyn AssetSource>,
    content_root: String,
}

impl AssetContext {
    pub fn new(source: Arc<dyn AssetSource>, content_root: impl Into<String>) -> Self {
        Self {
            source,
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &str {
        &self.content_root
    }

    /// Loads `name` from under the content root.
    ///
    /// This is a synchronous read; keep it off latency-sensitive paths.
    pub fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        let root = self.content_root.trim_end_matches('/');
        let path = if root.is_empty() {
            name.to_string()
        } else {
            format!("{root}/{name}")
        };
        self.source.open_asset(&path)
    }
}

impl std::fmt::Debug for AssetContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetContext")
            .field("content_root", &self.content_root)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_prefixes_content_root() {
        let assets = MemoryAssets::new().with("www/img/a.png", vec![1, 2, 3]);
        let ctx = AssetContext::new(Arc::new(assets), DEFAULT_CONTENT_ROOT);
        assert_eq!(ctx.load("img/a.png").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            ctx.load("a.png").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_context_tolerates_trailing_slash() {
        let assets = MemoryAssets::new().with("pkg/x.png", vec![9]);
        let ctx = AssetContext::new(Arc::new(assets), "pkg/");
        assert_eq!(ctx.load("x.png").unwrap(), vec![9]);
    }

    #[test]
    fn test_dir_assets_reads_file() {
        let dir = std::env::temp_dir().join(format!("navchrome-assets-{}", std::process::id()));
        fs::create_dir_all(dir.join("www")).unwrap();
        fs::write(dir.join("www").join("icon.png"), b"png").unwrap();

        let assets = DirAssets::new(&dir);
        assert_eq!(assets.open_asset("www/icon.png").unwrap(), b"png");
        assert!(assets.open_asset("www/missing.png").is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_dir_assets_refuses_escaping_paths() {
        let assets = DirAssets::new("/tmp");
        let err = assets.open_asset("www/../../etc/passwd").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        let err = assets.open_asset("/etc/passwd").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
