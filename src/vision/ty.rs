use std::{fmt, str::FromStr};
use crate::Error;

/// Anchor of the confusion lines of a dichromat in the (u, v)
/// chromaticity plane, together with the line (slope `am`, intercept
/// `ayi`) the confused colors are projected on.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Axis {
    pub(crate) cpu: f64,
    pub(crate) cpv: f64,
    pub(crate) am: f64,
    pub(crate) ayi: f64,
}

pub(crate) const PROTAN: Axis = Axis {
    cpu: 0.735, cpv: 0.265, am: 1.273463, ayi: -0.073894 };
pub(crate) const DEUTAN: Axis = Axis {
    cpu: 1.14, cpv: -0.14, am: 0.968437, ayi: 0.003331 };
pub(crate) const TRITAN: Axis = Axis {
    cpu: 0.171, cpv: -0.003, am: 0.062921, ayi: 0.292119 };

/// Type of color vision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisionType {
    /// Normal vision.
    #[default]
    Normal,
    /// Red-green color blindness, missing L-cones (1% of males).
    Protanopia,
    /// Red-green color blindness, anomalous L-cones (1% of males,
    /// 0.01% of females).
    Protanomaly,
    /// Red-green color blindness, missing M-cones (1% of males).
    Deuteranopia,
    /// Red-green color blindness, anomalous M-cones.  The most common
    /// type: 6% of males, 0.4% of females.
    Deuteranomaly,
    /// Blue-yellow color blindness, missing S-cones (< 1% of males
    /// and females).
    Tritanopia,
    /// Blue-yellow color blindness, anomalous S-cones (0.01% of males
    /// and females).
    Tritanomaly,
    /// Total color blindness.
    Achromatopsia,
    /// Partial total color blindness.
    Achromatomaly,
}

impl VisionType {
    /// All vision types, in declaration order.
    pub const ALL: [VisionType; 9] = {
        use VisionType::*;
        [Normal, Protanopia, Protanomaly, Deuteranopia, Deuteranomaly,
         Tritanopia, Tritanomaly, Achromatopsia, Achromatomaly]
    };

    /// Lowercase name of the vision type.
    pub fn name(self) -> &'static str {
        use VisionType::*;
        match self {
            Normal => "normal",
            Protanopia => "protanopia",
            Protanomaly => "protanomaly",
            Deuteranopia => "deuteranopia",
            Deuteranomaly => "deuteranomaly",
            Tritanopia => "tritanopia",
            Tritanomaly => "tritanomaly",
            Achromatopsia => "achromatopsia",
            Achromatomaly => "achromatomaly",
        }
    }

    /// Says whether this is a partial loss (anomalous trichromacy or
    /// achromatomaly).
    pub fn is_anomalous(self) -> bool {
        use VisionType::*;
        matches!(self, Protanomaly | Deuteranomaly | Tritanomaly
                 | Achromatomaly)
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisionType {
    type Err = Error;

    /// Parse a vision type name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownVisionType(s.to_string()))
    }
}

impl TryFrom<u8> for VisionType {
    type Error = Error;

    /// Vision types are numbered in declaration order, starting with
    /// `Normal = 0`.
    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(i as usize).copied()
            .ok_or_else(|| Error::UnknownVisionType(i.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for v in VisionType::ALL {
            assert_eq!(v.name().parse::<VisionType>(), Ok(v));
            assert_eq!(v.to_string().to_uppercase().parse::<VisionType>(),
                       Ok(v));
        }
        assert_eq!("Deuteranomaly".parse(), Ok(VisionType::Deuteranomaly));
        assert_eq!("colorblind".parse::<VisionType>(),
                   Err(Error::UnknownVisionType("colorblind".into())));
    }

    #[test]
    fn from_index() {
        assert_eq!(VisionType::try_from(0), Ok(VisionType::Normal));
        assert_eq!(VisionType::try_from(8), Ok(VisionType::Achromatomaly));
        assert!(VisionType::try_from(9).is_err());
    }

    #[test]
    fn anomalous() {
        let n = VisionType::ALL.iter().filter(|v| v.is_anomalous()).count();
        assert_eq!(n, 4);
        assert!(!VisionType::Protanopia.is_anomalous());
        assert!(VisionType::Achromatomaly.is_anomalous());
    }
}
