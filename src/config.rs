use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub const STORAGE_KEY: &str = "quote_management_data";
pub const BASELINE_PATH: &str = "public/Quote Data.txt";
pub const PAGE_SIZE: usize = 5;
pub const LOG_FILTER: &str = "info";

/// Runtime settings: built-in defaults, then platform directories, then
/// `QUOTE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub baseline_path: PathBuf,
    pub db_path: PathBuf,
    pub storage_key: String,
    pub page_size: usize,
    pub log_filter: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let db_path = match set("QUOTE_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };
        let page_size = match set("QUOTE_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .with_context(|| format!("QUOTE_PAGE_SIZE must be a positive integer: {raw}"))?,
            None => PAGE_SIZE,
        };

        Ok(Self {
            baseline_path: set("QUOTE_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(BASELINE_PATH)),
            db_path,
            storage_key: set("QUOTE_STORAGE_KEY").unwrap_or_else(|| STORAGE_KEY.to_string()),
            page_size,
            log_filter: set("QUOTE_LOG").unwrap_or_else(|| LOG_FILTER.to_string()),
        })
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "quote-manager")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("storage.sqlite"))
}

pub fn ensure_webview_data_dir(base_data_dir: &std::path::Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
