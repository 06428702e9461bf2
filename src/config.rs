use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    /// Optional YAML file with translation overrides
    #[serde(default)]
    pub translations: Option<String>,
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}
