// Theme flag persisted as a one-key TOML file
use crate::application::theme_store::ThemeStore;
use crate::domain::theme::Theme;
use crate::infrastructure::error::DashboardError;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeEntry {
    theme: Theme,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ThemeStore for FileThemeStore {
    async fn load(&self) -> Result<Option<Theme>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DashboardError::ThemeStorage(e.to_string()).into()),
        };

        let entry: ThemeEntry = toml::from_str(&raw).map_err(DashboardError::from)?;
        Ok(Some(entry.theme))
    }

    async fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DashboardError::ThemeStorage(e.to_string()))?;
        }

        let body = toml::to_string(&ThemeEntry { theme }).map_err(DashboardError::from)?;

        // rename over the old file so readers see either value, never a partial one
        let staging = self.staging_path();
        tokio::fs::write(&staging, body)
            .await
            .map_err(|e| DashboardError::ThemeStorage(e.to_string()))?;
        if let Err(e) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(DashboardError::ThemeStorage(e.to_string()).into());
        }

        tracing::debug!("Persisted theme {:?} to {}", theme, self.path.display());
        Ok(())
    }
}
