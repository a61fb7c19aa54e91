//! Portion sizes and their price multipliers.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portion size of a burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Single patty, base price.
    #[default]
    Simple,
    /// Double patty.
    Doble,
    /// Triple patty.
    Triple,
}

impl Size {
    /// All sizes in menu order.
    pub const ALL: [Size; 3] = [Size::Simple, Size::Doble, Size::Triple];

    /// Tag used in line keys and order messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Simple => "simple",
            Size::Doble => "doble",
            Size::Triple => "triple",
        }
    }

    /// Label shown in the size selector.
    pub fn label(&self) -> &'static str {
        match self {
            Size::Simple => "Simple",
            Size::Doble => "Doble",
            Size::Triple => "Triple",
        }
    }

    /// Price multiplier in hundredths (113 means ×1.13).
    pub fn multiplier_hundredths(&self) -> u32 {
        match self {
            Size::Simple => 100,
            Size::Doble => 113,
            Size::Triple => 225,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Size::Simple),
            "doble" => Ok(Size::Doble),
            "triple" => Ok(Size::Triple),
            other => Err(CommerceError::UnknownSize(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(Size::Simple.multiplier_hundredths(), 100);
        assert_eq!(Size::Doble.multiplier_hundredths(), 113);
        assert_eq!(Size::Triple.multiplier_hundredths(), 225);
    }

    #[test]
    fn test_parse_roundtrip_tags() {
        for size in Size::ALL {
            assert_eq!(size.as_str().parse::<Size>().unwrap(), size);
        }
        assert!("cuadruple".parse::<Size>().is_err());
        assert!("Simple".parse::<Size>().is_err());
    }

    #[test]
    fn test_default_is_simple() {
        assert_eq!(Size::default(), Size::Simple);
    }
}
