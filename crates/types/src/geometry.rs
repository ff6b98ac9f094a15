use serde::{Deserialize, Serialize};

/// The footprint a node occupies in layout units.
///
/// Values are not validated here; providers check them at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const ZERO: Extent = Extent {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clears the sign bit of negative zero and clamps overflowed
    /// (infinite) dimensions to `f64::MAX`, so a computed extent is always
    /// finite.
    pub fn normalized(self) -> Extent {
        Extent {
            width: normalize_dimension(self.width),
            height: normalize_dimension(self.height),
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Extent) -> Extent {
        Extent {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grows the extent by `dx` on the left and right and `dy` on top and bottom.
    pub fn inflate(self, dx: f64, dy: f64) -> Extent {
        Extent {
            width: self.width + 2.0 * dx,
            height: self.height + 2.0 * dy,
        }
    }
}

/// A single dimension is usable by a layout engine when it is finite and not negative.
pub fn is_valid_dimension(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Turns `-0.0` into `0.0` and `+inf` into `f64::MAX`. Other values pass through.
pub fn normalize_dimension(value: f64) -> f64 {
    if value == f64::INFINITY {
        f64::MAX
    } else {
        value + 0.0
    }
}
