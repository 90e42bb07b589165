use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// NO_COLOR (per no-color.org) wins over everything except an
    /// explicit JCDIFF_COLOR=always.
    pub fn from_env() -> Self {
        if let Ok(value) = env::var("JCDIFF_COLOR") {
            if let Some(mode) = Self::parse(&value) {
                return mode;
            }
        }
        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }
        Self::Auto
    }
}

fn detect_color_support() -> bool {
    std::io::stdout().is_terminal()
}
