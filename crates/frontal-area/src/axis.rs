//! Cartesian projection axes and their paired up vectors.

use std::fmt;
use std::str::FromStr;

use frontal_math::Vec3;
use serde::Serialize;

use crate::error::AreaError;

/// One of the three supported projection directions.
///
/// Each axis carries a fixed up vector chosen never to be parallel to the
/// view direction: x and y look "sideways" with z up, z looks "down" with
/// y up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Project along +x, up = +z.
    X,
    /// Project along +y, up = +z.
    Y,
    /// Project along +z, up = +y.
    Z,
}

impl Axis {
    /// All three axes, in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector of the projection direction.
    pub fn direction(self) -> Vec3 {
        match self {
            Axis::X => Vec3::new(1.0, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, 1.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Fixed up vector paired with this axis.
    pub fn view_up(self) -> Vec3 {
        match self {
            Axis::X | Axis::Y => Vec3::new(0.0, 0.0, 1.0),
            Axis::Z => Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

impl FromStr for Axis {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(AreaError::UnsupportedAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_never_parallel_to_direction() {
        for axis in Axis::ALL {
            let cross = axis.direction().cross(&axis.view_up());
            assert!(cross.norm() > 0.9, "axis {} has parallel up", axis);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "w".parse::<Axis>().unwrap_err();
        assert!(matches!(err, AreaError::UnsupportedAxis(s) if s == "w"));
    }

    #[test]
    fn test_display_round_trips() {
        for axis in Axis::ALL {
            assert_eq!(axis.to_string().parse::<Axis>().unwrap(), axis);
        }
    }
}
