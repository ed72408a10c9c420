// Persistence trait for the theme flag
use crate::domain::theme::Theme;
use async_trait::async_trait;

#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    async fn load(&self) -> anyhow::Result<Option<Theme>>;

    async fn save(&self, theme: Theme) -> anyhow::Result<()>;
}
