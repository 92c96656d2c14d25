use serde::{Deserialize, Serialize};

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "zh-CN" => Some(Self::ZhCn),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the startup locale: a valid saved value wins, else a system tag
/// starting with `zh` selects Simplified Chinese, else English.
pub fn resolve_default_locale(saved: Option<&str>, system: Option<&str>) -> Locale {
    if let Some(saved) = saved {
        if let Some(locale) = Locale::parse(saved) {
            return locale;
        }
    }

    match system {
        Some(tag) if tag.to_lowercase().starts_with("zh") => Locale::ZhCn,
        _ => Locale::En,
    }
}
