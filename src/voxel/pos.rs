// ============================================
// Block Position - Координата вокселя
// ============================================

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

/// Целочисленная координата ноды в мире
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Округление вещественной позиции черепахи до ближайшей ячейки
    pub fn round(v: Vec3) -> Self {
        Self {
            x: v.x.round() as i32,
            y: v.y.round() as i32,
            z: v.z.round() as i32,
        }
    }

    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_cell() {
        assert_eq!(BlockPos::round(Vec3::new(0.49, -0.51, 2.5)), BlockPos::new(0, -1, 3));
        // погрешность поворота не должна сдвигать ячейку
        assert_eq!(BlockPos::round(Vec3::new(-4.0e-8, 3.0000002, 1.0)), BlockPos::new(0, 3, 1));
    }

    #[test]
    fn offset_and_back_to_vec3() {
        let p = BlockPos::new(-3, 7, 2).offset(1, -1, 0);
        assert_eq!(p, BlockPos::new(-2, 6, 2));
        assert_eq!(BlockPos::round(p.to_vec3()), p);
    }
}
