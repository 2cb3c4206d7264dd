use strum::{Display, EnumIter, EnumString};

/// Length unit of a coordinate system, a power-of-ten scale of the meter.
///
/// Parses from and displays as its symbol (`"km"`, `"m"`, `"dm"`,
/// `"cm"`, `"mm"`); the full lowercase name is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum LengthUnit {
    #[strum(to_string = "km", serialize = "kilometer")]
    Kilometer,
    #[strum(to_string = "m", serialize = "meter")]
    Meter,
    #[strum(to_string = "dm", serialize = "decimeter")]
    Decimeter,
    #[strum(to_string = "cm", serialize = "centimeter")]
    Centimeter,
    #[default]
    #[strum(to_string = "mm", serialize = "millimeter")]
    Millimeter,
}

impl LengthUnit {
    /// Returns the size of one unit in meters.
    #[must_use]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Kilometer => 1e3,
            Self::Meter => 1e0,
            Self::Decimeter => 1e-1,
            Self::Centimeter => 1e-2,
            Self::Millimeter => 1e-3,
        }
    }

    /// Converts `value`, expressed in `self`, into `target` units.
    #[must_use]
    pub fn convert(self, value: f64, target: Self) -> f64 {
        if self == target {
            return value;
        }
        value * self.meters_per_unit() / target.meters_per_unit()
    }
}
