use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Colors every section needs from the active theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub nav_background: &'static str,
    pub footer_background: &'static str,
    pub footer_text: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    background: "linear-gradient(135deg, #020617, #0f172a, #1e3a8a)",
    text: "white",
    nav_background: "rgba(2,6,23,0.8)",
    footer_background: "#020617",
    footer_text: "white",
};

pub const LIGHT_PALETTE: Palette = Palette {
    background: "linear-gradient(135deg, #f1f5f9, #e2e8f0, #cbd5f5)",
    text: "#0f172a",
    nav_background: "rgba(255,255,255,0.9)",
    footer_background: "#e2e8f0",
    footer_text: "#0f172a",
};

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT_PALETTE,
            Self::Dark => DARK_PALETTE,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The toggle shows where a click leads: a sun while dark, a moon while light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_uses_the_documented_literals() {
        let palette = Theme::from_dark(true).palette();
        assert_eq!(
            palette.background,
            "linear-gradient(135deg, #020617, #0f172a, #1e3a8a)"
        );
        assert_eq!(palette.text, "white");
        assert_eq!(palette.nav_background, "rgba(2,6,23,0.8)");
        assert_eq!(palette.footer_background, "#020617");
        assert_eq!(palette.footer_text, "white");
    }

    #[test]
    fn light_palette_uses_the_documented_literals() {
        let palette = Theme::from_dark(false).palette();
        assert_eq!(
            palette.background,
            "linear-gradient(135deg, #f1f5f9, #e2e8f0, #cbd5f5)"
        );
        assert_eq!(palette.text, "#0f172a");
        assert_eq!(palette.nav_background, "rgba(255,255,255,0.9)");
        assert_eq!(palette.footer_background, "#e2e8f0");
        assert_eq!(palette.footer_text, "#0f172a");
    }

    #[test]
    fn toggle_control_describes_the_other_theme() {
        assert_eq!(Theme::Dark.icon(), "☀");
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
