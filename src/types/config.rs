use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreenscanConfig {
    pub report: Option<ReportConfig>,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Default output format when the CLI flag is absent: "md" or "json".
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            follow_symlinks: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

impl GreenscanConfig {
    pub fn batch(&self) -> BatchConfig {
        self.batch.clone().unwrap_or_default()
    }
}
