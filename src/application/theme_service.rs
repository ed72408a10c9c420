// Theme service - Single owner of the persisted theme flag
use crate::application::theme_store::ThemeStore;
use crate::domain::theme::Theme;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct ThemeService {
    store: Arc<dyn ThemeStore>,
    current: RwLock<Theme>,
}

impl ThemeService {
    /// Read the stored theme; falls back to the default when absent or unreadable
    pub async fn load(store: Arc<dyn ThemeStore>) -> Self {
        let theme = match store.load().await {
            Ok(Some(theme)) => theme,
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Could not read stored theme, using default: {}", e);
                Theme::default()
            }
        };

        tracing::info!("Active theme: {:?}", theme);
        Self {
            store,
            current: RwLock::new(theme),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.current.read().await
    }

    /// Persist first; the in-memory value only changes once the write succeeded
    pub async fn set(&self, theme: Theme) -> anyhow::Result<Theme> {
        let mut current = self.current.write().await;
        self.store.save(theme).await?;
        *current = theme;
        Ok(theme)
    }

    pub async fn toggle(&self) -> anyhow::Result<Theme> {
        let mut current = self.current.write().await;
        let next = current.toggled();
        self.store.save(next).await?;
        *current = next;
        Ok(next)
    }
}
