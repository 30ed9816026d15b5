use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::diagram::{DiagramStyle, ThemeVariables};

// structs and types

// the closed set of color themes
//
// each theme maps to a body class "theme-<name>" that swaps the css color variables
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Contrast,
}

impl Theme {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Blue,
            Self::Green,
            Self::Purple,
            Self::Orange,
            Self::Contrast,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Contrast => "contrast",
        }
    }

    pub fn css_class(self) -> String {
        format!("{}{}", crate::THEME_CLASS_PREFIX, self.name())
    }

    // must match --accent-color in the stylesheet for this theme
    pub fn accent(self) -> &'static str {
        match self {
            Self::Blue => "#005EB8",
            Self::Green => "#007F3B",
            Self::Purple => "#330072",
            Self::Orange => "#ED8B00",
            Self::Contrast => "#FFEB3B",
        }
    }

    // must match --text-color, which dark mode overrides for every theme except contrast
    pub fn text_color(self, dark_mode: bool) -> &'static str {
        match (self, dark_mode) {
            (Self::Contrast, _) => "#FFFFFF",
            (_, true) => "#E8EDEE",
            (_, false) => "#212B32",
        }
    }

    // contrast is rendered light-on-black regardless of the dark mode flag
    pub fn is_dark(self) -> bool {
        self == Self::Contrast
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
            Self::Contrast => "High Contrast",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let value = value.strip_prefix(crate::THEME_CLASS_PREFIX).unwrap_or(value);

        Self::all()
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow::Error::msg(format!("unknown theme: {value}")))
    }
}

// named font size classes, at most one of which is on the body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextScale {
    Small,
    Medium,
    Large,
    XLarge,
}

impl TextScale {
    pub fn all() -> Vec<Self> {
        vec![Self::Small, Self::Medium, Self::Large, Self::XLarge]
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Small => "scale-small",
            Self::Medium => "scale-medium",
            Self::Large => "scale-large",
            Self::XLarge => "scale-xlarge",
        }
    }

    // the "A" buttons in the toolbar
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "A-",
            Self::Medium => "A",
            Self::Large => "A+",
            Self::XLarge => "A++",
        }
    }
}

impl fmt::Display for TextScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

// accepts either the full class ("scale-large") or the bare name ("large")
impl FromStr for TextScale {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let name = value.strip_prefix("scale-").unwrap_or(value);

        Self::all()
            .into_iter()
            .find(|scale| scale.css_class()["scale-".len()..].eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::Error::msg(format!("unknown text scale: {value}")))
    }
}

// the in-memory copy of everything that survives across sessions
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub theme: Theme,
    pub dark_mode: bool,
    pub text_scale: Option<TextScale>,
}

impl PreferenceSet {
    pub fn diagram_style(&self, font_size: &str, font_family: &str) -> DiagramStyle {
        let accent = self.theme.accent();

        let line = if self.dark_mode || self.theme.is_dark() {
            "#ffffff"
        } else {
            accent
        };

        DiagramStyle {
            theme: String::from("default"),
            theme_variables: ThemeVariables {
                font_size: font_size.to_owned(),
                font_family: font_family.to_owned(),
                primary_color: accent.to_owned(),
                primary_text_color: self.theme.text_color(self.dark_mode).to_owned(),
                line_color: line.to_owned(),
            },
        }
    }
}
