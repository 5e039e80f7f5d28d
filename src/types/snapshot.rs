use serde::{Deserialize, Serialize};

/// Point-in-time structural summary of a page, decoupled from any
/// rendering engine. Produced by the extractor (or supplied as JSON by a
/// caller that owns DOM access) and consumed read-only by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub images: Vec<ImageElement>,
    #[serde(default)]
    pub scripts: Vec<ScriptElement>,
    #[serde(default)]
    pub stylesheets: Vec<StylesheetElement>,
    #[serde(default)]
    pub meta_tags: Vec<MetaTag>,
    #[serde(default)]
    pub dark_mode: DarkModeSignals,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub lazy_loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptElement {
    /// None for inline scripts.
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub async_or_defer: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylesheetElement {
    #[serde(default)]
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub http_equiv: Option<String>,
}

/// Independent dark-mode hints; any single one counts as support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DarkModeSignals {
    #[serde(default)]
    pub color_scheme_meta: bool,
    #[serde(default)]
    pub data_theme_attr: bool,
    #[serde(default)]
    pub dark_mode_class: bool,
    #[serde(default)]
    pub black_background: bool,
}

impl DarkModeSignals {
    pub fn any(&self) -> bool {
        self.color_scheme_meta || self.data_theme_attr || self.dark_mode_class || self.black_background
    }
}

impl PageSnapshot {
    /// Scripts that reference an external source.
    pub fn external_scripts(&self) -> usize {
        self.scripts.iter().filter(|script| script.src.is_some()).count()
    }

    /// Total element count feeding the request-count criterion.
    pub fn total_elements(&self) -> usize {
        self.scripts.len() + self.stylesheets.len() + self.images.len()
    }
}
