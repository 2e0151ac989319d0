// ============================================
// Voxel Buffer - Плотный воксельный бокс
// ============================================

use ndshape::{RuntimeShape, Shape};

use crate::blocks::{BlockType, Node};
use super::pos::BlockPos;

/// Контракт воксельного буфера, в который пишет генератор.
/// `get` возвращает `None` за пределами буфера (запись туда пропускается).
pub trait VoxelBuffer {
    fn get(&self, pos: BlockPos) -> Option<Node>;

    /// `false` если буфер отверг запись
    fn set(&mut self, pos: BlockPos, node: Node) -> bool;
}

/// Ограниченный бокс нод [min, max] в мировых координатах
pub struct VoxelArea {
    min: BlockPos,
    max: BlockPos,
    shape: RuntimeShape<u32, 3>,
    data: Vec<Node>,
}

impl VoxelArea {
    /// Бокс заполненный воздухом, `max` включительно
    pub fn new(min: BlockPos, max: BlockPos) -> Self {
        let dims = [
            (max.x - min.x + 1).max(0) as u32,
            (max.y - min.y + 1).max(0) as u32,
            (max.z - min.z + 1).max(0) as u32,
        ];
        let shape = RuntimeShape::<u32, 3>::new(dims);
        let data = vec![Node::AIR; shape.size() as usize];
        Self { min, max, shape, data }
    }

    /// Бокс вокруг точки с горизонтальным радиусом и высотой
    pub fn around(origin: BlockPos, radius: i32, below: i32, above: i32) -> Self {
        Self::new(
            origin.offset(-radius, -below, -radius),
            origin.offset(radius, above, radius),
        )
    }

    pub fn min(&self) -> BlockPos { self.min }
    pub fn max(&self) -> BlockPos { self.max }

    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x
            && pos.y >= self.min.y && pos.y <= self.max.y
            && pos.z >= self.min.z && pos.z <= self.max.z
    }

    #[inline]
    fn index(&self, pos: BlockPos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let local = [
            (pos.x - self.min.x) as u32,
            (pos.y - self.min.y) as u32,
            (pos.z - self.min.z) as u32,
        ];
        Some(self.shape.linearize(local) as usize)
    }

    /// Заполнить слой по Y (например "земля" для тестов)
    pub fn fill_layer(&mut self, y: i32, node: Node) {
        for z in self.min.z..=self.max.z {
            for x in self.min.x..=self.max.x {
                self.set(BlockPos::new(x, y, z), node);
            }
        }
    }

    /// Все не-воздушные ноды
    pub fn iter_solid(&self) -> impl Iterator<Item = (BlockPos, Node)> + '_ {
        self.data.iter().enumerate().filter(|(_, n)| !n.is_air()).map(move |(i, node)| {
            let [x, y, z] = self.shape.delinearize(i as u32);
            (self.min.offset(x as i32, y as i32, z as i32), *node)
        })
    }

    /// Количество нод данного типа
    pub fn count(&self, block: BlockType) -> usize {
        self.data.iter().filter(|n| n.block == block).count()
    }
}

impl VoxelBuffer for VoxelArea {
    fn get(&self, pos: BlockPos) -> Option<Node> {
        self.index(pos).map(|i| self.data[i])
    }

    fn set(&mut self, pos: BlockPos, node: Node) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.data[i] = node;
                true
            }
            None => false,
        }
    }
}
