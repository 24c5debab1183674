use serde::{Deserialize, Serialize};

/// Colors used by the menu renderer. Every field accepts a named color or
/// `#rrggbb`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// View titles and the panel title (default: "#c0caf5").
    #[serde(default = "ThemeConfig::default_title", deserialize_with = "deserialize_color")]
    pub title: ThemeColor,
    /// Pointer in front of the highlighted row (default: "#8eace3").
    #[serde(default = "ThemeConfig::default_accent", deserialize_with = "deserialize_color")]
    pub accent: ThemeColor,
    /// Pointer in front of the other rows (default: "#64748b").
    #[serde(default = "ThemeConfig::default_muted", deserialize_with = "deserialize_color")]
    pub muted: ThemeColor,
    /// Row ordinals (default: "#a5b4fc").
    #[serde(default = "ThemeConfig::default_number", deserialize_with = "deserialize_color")]
    pub number: ThemeColor,
    /// Badge labels (default: "#93c5fd").
    #[serde(default = "ThemeConfig::default_badge", deserialize_with = "deserialize_color")]
    pub badge: ThemeColor,
    /// Entry titles (default: "#e5e7eb").
    #[serde(default = "ThemeConfig::default_entry", deserialize_with = "deserialize_color")]
    pub entry: ThemeColor,
    /// Descriptions, subtitles and the status line (default: "#94a3b8").
    #[serde(default = "ThemeConfig::default_detail", deserialize_with = "deserialize_color")]
    pub detail: ThemeColor,
    /// Side panel border (default: "gray").
    #[serde(default = "ThemeConfig::default_border", deserialize_with = "deserialize_color")]
    pub border: ThemeColor,
    /// Failed status lines (default: "red").
    #[serde(default = "ThemeConfig::default_error", deserialize_with = "deserialize_color")]
    pub error: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            accent: Self::default_accent(),
            muted: Self::default_muted(),
            number: Self::default_number(),
            badge: Self::default_badge(),
            entry: Self::default_entry(),
            detail: Self::default_detail(),
            border: Self::default_border(),
            error: Self::default_error(),
        }
    }
}

impl ThemeConfig {
    fn default_title() -> ThemeColor {
        ThemeColor::Rgb(0xc0, 0xca, 0xf5)
    }
    fn default_accent() -> ThemeColor {
        ThemeColor::Rgb(0x8e, 0xac, 0xe3)
    }
    fn default_muted() -> ThemeColor {
        ThemeColor::Rgb(0x64, 0x74, 0x8b)
    }
    fn default_number() -> ThemeColor {
        ThemeColor::Rgb(0xa5, 0xb4, 0xfc)
    }
    fn default_badge() -> ThemeColor {
        ThemeColor::Rgb(0x93, 0xc5, 0xfd)
    }
    fn default_entry() -> ThemeColor {
        ThemeColor::Rgb(0xe5, 0xe7, 0xeb)
    }
    fn default_detail() -> ThemeColor {
        ThemeColor::Rgb(0x94, 0xa3, 0xb8)
    }
    fn default_border() -> ThemeColor {
        ThemeColor::Named(NamedColor::Gray)
    }
    fn default_error() -> ThemeColor {
        ThemeColor::Named(NamedColor::Red)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

const NAMED_COLORS: &[(&str, NamedColor)] = &[
    ("black", NamedColor::Black),
    ("blue", NamedColor::Blue),
    ("cyan", NamedColor::Cyan),
    ("darkgray", NamedColor::DarkGray),
    ("gray", NamedColor::Gray),
    ("green", NamedColor::Green),
    ("magenta", NamedColor::Magenta),
    ("red", NamedColor::Red),
    ("white", NamedColor::White),
    ("yellow", NamedColor::Yellow),
];

impl NamedColor {
    pub fn as_str(self) -> &'static str {
        NAMED_COLORS
            .iter()
            .find(|(_, color)| *color == self)
            .map_or("gray", |(name, _)| name)
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(n) => f.write_str(n.as_str()),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl Serialize for ThemeColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl ThemeColor {
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            return Some(Self::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }
        let lower = s.to_ascii_lowercase().replace(['-', '_'], "");
        let lookup = match lower.as_str() {
            "grey" => "gray",
            "darkgrey" => "darkgray",
            other => other,
        };
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lookup)
            .map(|(_, color)| Self::Named(*color))
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<ThemeColor, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ThemeColor::parse(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid color '{s}': expected a named color or hex (#rrggbb)"
        ))
    })
}
