use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeSettings {
    #[serde(default = "default_theme_path")]
    pub path: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            path: default_theme_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    /// chrono strftime pattern for daily labels.
    #[serde(default = "default_label_format")]
    pub label_format: String,
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    #[serde(default = "default_point_hit_radius")]
    pub point_hit_radius: u32,
    /// Colors by catalog position.
    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteEntry>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            label_format: default_label_format(),
            border_width: default_border_width(),
            point_hit_radius: default_point_hit_radius(),
            palette: default_palette(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteEntry {
    pub stroke: String,
    pub fill: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_path() -> String {
    "data/data.json".to_string()
}

fn default_theme_path() -> String {
    "data/theme.toml".to_string()
}

fn default_label_format() -> String {
    "%d.%m.%y".to_string()
}

fn default_border_width() -> u32 {
    3
}

fn default_point_hit_radius() -> u32 {
    10
}

fn default_palette() -> Vec<PaletteEntry> {
    [
        ("#46464f", "rgba(70, 70, 79, 0.12)"),
        ("#4142ef", "rgba(65, 66, 239, 0.12)"),
        ("#ff8346", "rgba(255, 131, 70, 0.12)"),
        ("#35bd93", "rgba(53, 189, 147, 0.12)"),
    ]
    .into_iter()
    .map(|(stroke, fill)| PaletteEntry {
        stroke: stroke.to_string(),
        fill: fill.to_string(),
    })
    .collect()
}

/// File `config/dashboard.*` (optional) overlaid by `DASHBOARD__SECTION__KEY` env vars.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
