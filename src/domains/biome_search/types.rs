use serde::{Deserialize, Serialize};

/// Native units per grid cell, expressed as a shift: one grid cell spans 4 blocks.
pub const QUANTIZATION_SHIFT: u32 = 2;

/// A cell on the quantized search grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: i32,
    pub z: i32,
}

impl GridCoordinate {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Offset this cell, wrapping on overflow like the native integer math of the world.
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            z: self.z.wrapping_add(dz),
        }
    }

    /// The native position of the cell's minimum corner.
    pub fn to_world(self) -> WorldPosition {
        WorldPosition {
            x: self.x << QUANTIZATION_SHIFT,
            z: self.z << QUANTIZATION_SHIFT,
        }
    }

    /// Chebyshev distance between two cells, i.e. the ring index of `other` around `self`.
    pub fn chebyshev_distance(self, other: GridCoordinate) -> i32 {
        let dx = (other.x - self.x).abs();
        let dz = (other.z - self.z).abs();
        dx.max(dz)
    }
}

/// A block position in native world units. The vertical axis is not part of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: i32,
    pub z: i32,
}

impl WorldPosition {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Arithmetic shift, so negative coordinates floor toward negative infinity.
    pub fn to_grid(self) -> GridCoordinate {
        GridCoordinate {
            x: self.x >> QUANTIZATION_SHIFT,
            z: self.z >> QUANTIZATION_SHIFT,
        }
    }

    /// Planar Euclidean distance floored to whole blocks.
    pub fn planar_distance(self, other: WorldPosition) -> u32 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dz = i64::from(other.z) - i64::from(self.z);
        ((dx * dx + dz * dz) as f64).sqrt().floor() as u32
    }
}
