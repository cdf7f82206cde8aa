#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
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

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Sun while dark (the way back to light), moon while light.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub white: &'static str,
    pub light_gray: &'static str,
    pub dark_gray: &'static str,
    pub input_background: &'static str,
    pub input_text: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    primary: "#2D3047",
    secondary: "#419D78",
    accent: "#E0A458",
    background: "#FAFAFA",
    text: "#2D3047",
    white: "#FFFFFF",
    light_gray: "#F5F5F5",
    dark_gray: "#4A4A4A",
    input_background: "#FFFFFF",
    input_text: "#2D3047",
};

pub const DARK_PALETTE: Palette = Palette {
    primary: "#E0A458",
    secondary: "#419D78",
    accent: "#2D3047",
    background: "#1A1A1A",
    text: "#FFFFFF",
    white: "#2D3047",
    light_gray: "#333333",
    dark_gray: "#CCCCCC",
    input_background: "#2D3047",
    input_text: "#FFFFFF",
};

impl Palette {
    /// CSS custom properties consumed by `styles.css`.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 10] {
        [
            ("--color-primary", self.primary),
            ("--color-secondary", self.secondary),
            ("--color-accent", self.accent),
            ("--color-background", self.background),
            ("--color-text", self.text),
            ("--color-white", self.white),
            ("--color-light-gray", self.light_gray),
            ("--color-dark-gray", self.dark_gray),
            ("--color-input-background", self.input_background),
            ("--color-input-text", self.input_text),
        ]
    }
}
