//! Application bootstrap module
//!
//! Locates the project root by walking parent directories until the project
//! manifest is found, loads the manifest, and owns the run loop whose result
//! becomes the process exit status.

pub mod welcome;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::config::{AppState, Config};
use crate::logger;
use crate::server;

/// Marks the project root for the upward directory search
pub const MANIFEST_FILE: &str = "site.toml";

/// Project manifest, parsed from `site.toml` at the project root
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub site: SiteSection,
}

/// `[site]` section of the manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site name shown in the welcome page title
    pub name: String,
    /// README file rendered by the welcome page, relative to the project root
    pub readme: String,
    /// Selects which of the two stylesheet sets the welcome shell references
    pub theme: Theme,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "your project".to_string(),
            readme: "README.md".to_string(),
            theme: Theme::Light,
        }
    }
}

/// Welcome page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Walk `start` and its ancestors until a directory containing the project
/// manifest is found.
///
/// Reaching the filesystem root without finding a manifest is an error;
/// there is no implicit fallback root.
pub fn find_project_root(start: &Path) -> io::Result<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(MANIFEST_FILE).is_file() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {MANIFEST_FILE} found in {} or any parent", start.display()),
            ));
        }
    }
}

/// Bootstrapped application: project root plus parsed manifest
#[derive(Debug, Clone)]
pub struct App {
    root: PathBuf,
    manifest: Manifest,
}

impl App {
    /// Locate the project root starting at `start` and load the manifest
    pub fn bootstrap(start: &Path) -> io::Result<Self> {
        let start = start.canonicalize()?;
        let root = find_project_root(&start)?;
        let raw = std::fs::read_to_string(root.join(MANIFEST_FILE))?;
        let manifest = toml::from_str(&raw).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid {MANIFEST_FILE}: {e}"),
            )
        })?;
        Ok(Self { root, manifest })
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Parsed project manifest
    pub const fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a file relative to the project root
    pub fn file(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Build the runtime and serve until shutdown.
    ///
    /// The returned value is the process exit status.
    pub fn run(self, config: Config) -> u8 {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.enable_all();
        if let Some(workers) = config.server.workers {
            builder.worker_threads(workers);
        }

        let runtime = match builder.build() {
            Ok(runtime) => runtime,
            Err(e) => {
                logger::log_error(&format!("Failed to build runtime: {e}"));
                return 1;
            }
        };

        match runtime.block_on(serve(self, config)) {
            Ok(()) => 0,
            Err(e) => {
                logger::log_error(&format!("Server error: {e}"));
                1
            }
        }
    }
}

/// Bind the listener, publish shared state, and run the accept loop
async fn serve(app: App, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let document_root = Path::new(&config.site.document_root).canonicalize()?;
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &config, app.root());

    let state = Arc::new(AppState::new(config, document_root, app));
    let shutdown = Arc::new(tokio::sync::Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    server::serve(listener, state, shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), manifest).unwrap();
        dir
    }

    #[test]
    fn nested_start_finds_same_root_as_the_root_itself() {
        let dir = project("[site]\nname = \"demo\"\n");
        let nested = dir.path().join("public").join("assets");
        fs::create_dir_all(&nested).unwrap();

        let from_root = find_project_root(dir.path()).unwrap();
        let from_nested = find_project_root(&nested).unwrap();
        assert_eq!(from_root, from_nested);
        assert_eq!(from_root, dir.path().to_path_buf());
    }

    #[test]
    fn missing_manifest_is_an_explicit_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_project_root(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn bootstrap_parses_manifest_sections() {
        let dir = project("[site]\nname = \"demo\"\nreadme = \"NOTES.md\"\ntheme = \"dark\"\n");
        let nested = dir.path().join("public");
        fs::create_dir_all(&nested).unwrap();

        let app = App::bootstrap(&nested).unwrap();
        assert_eq!(app.manifest().site.name, "demo");
        assert_eq!(app.manifest().site.readme, "NOTES.md");
        assert_eq!(app.manifest().site.theme, Theme::Dark);
        assert_eq!(app.file("NOTES.md"), app.root().join("NOTES.md"));
    }

    #[test]
    fn empty_manifest_falls_back_to_defaults() {
        let dir = project("");
        let app = App::bootstrap(dir.path()).unwrap();
        assert_eq!(app.manifest().site.readme, "README.md");
        assert_eq!(app.manifest().site.theme, Theme::Light);
    }

    #[test]
    fn malformed_manifest_is_rejected() {
        let dir = project("[site\nname=");
        let err = App::bootstrap(dir.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
