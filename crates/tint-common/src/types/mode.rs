use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::KeyError;

/// Light or dark color scheme. Scopes both base palettes and override layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn other(&self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(KeyError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_modes() {
        assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!(" Dark ".parse::<Mode>().unwrap(), Mode::Dark);
        assert!(matches!(
            "dusk".parse::<Mode>(),
            Err(KeyError::UnknownMode(_))
        ));
    }

    #[test]
    fn other_flips() {
        assert_eq!(Mode::Light.other(), Mode::Dark);
        assert_eq!(Mode::Dark.other(), Mode::Light);
    }

    #[test]
    fn mode_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Dark).unwrap(), "\"dark\"");
        let m: Mode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(m, Mode::Light);
    }
}
