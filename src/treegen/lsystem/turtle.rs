// ============================================
// Turtle - Состояние 3D черепахи
// ============================================

use std::f32::consts::FRAC_PI_2;

use ultraviolet::{Mat3, Vec3};

use crate::treegen::error::TreegenError;
use crate::treegen::math::rotation_matrix;
use crate::voxel::BlockPos;

use super::symbol::TurnAxis;

impl TurnAxis {
    fn local(self) -> Vec3 {
        match self {
            TurnAxis::Roll => Vec3::unit_x(),
            TurnAxis::Pitch => Vec3::unit_y(),
            TurnAxis::Yaw => Vec3::unit_z(),
        }
    }
}

/// Позиция + ориентация. Столбцы `orientation` - локальные оси,
/// движение идёт вдоль локальной X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub position: Vec3,
    pub orientation: Mat3,
}

impl TurtleState {
    /// Черепаха в точке, смотрит вверх (+Y)
    pub fn upright(position: Vec3) -> Result<Self, TreegenError> {
        Ok(Self {
            position,
            orientation: rotation_matrix(Vec3::unit_z(), FRAC_PI_2)?,
        })
    }

    #[inline]
    pub fn heading(&self) -> Vec3 {
        self.orientation * Vec3::unit_x()
    }

    #[inline]
    pub fn cell(&self) -> BlockPos {
        BlockPos::round(self.position)
    }

    pub fn advance(&mut self) {
        self.position += self.heading();
    }

    /// Поворот вокруг локальной оси
    pub fn turn(&mut self, axis: TurnAxis, radians: f32) -> Result<(), TreegenError> {
        self.orientation = self.orientation * rotation_matrix(axis.local(), radians)?;
        Ok(())
    }

    /// Доминирующая мировая ось движения: 0 = X, 1 = Y, 2 = Z
    pub fn dominant_axis(&self) -> usize {
        let h = self.heading();
        let (ax, ay, az) = (h.x.abs(), h.y.abs(), h.z.abs());
        if ay >= ax && ay >= az {
            1
        } else if ax >= az {
            0
        } else {
            2
        }
    }
}

/// Ячейки креста толщиной `radius` в плоскости, перпендикулярной оси `axis`
pub fn cross_section(center: BlockPos, axis: usize, radius: i32) -> Vec<BlockPos> {
    let mut cells = vec![center];
    for r in 1..=radius {
        let arms: [(i32, i32, i32); 4] = match axis {
            0 => [(0, r, 0), (0, -r, 0), (0, 0, r), (0, 0, -r)],
            1 => [(r, 0, 0), (-r, 0, 0), (0, 0, r), (0, 0, -r)],
            _ => [(r, 0, 0), (-r, 0, 0), (0, r, 0), (0, -r, 0)],
        };
        cells.extend(arms.iter().map(|&(dx, dy, dz)| center.offset(dx, dy, dz)));
    }
    cells
}
