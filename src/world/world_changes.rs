// ============================================
// World Changes - Хранение изменений мира
// ============================================
// Хранит поставленные ноды поверх процедурной генерации.
// Отсутствующая ячейка считается воздухом.

use std::collections::HashMap;

use crate::blocks::Node;
use crate::treegen::Overwrite;
use crate::voxel::{BlockPos, VoxelBuffer};

use super::pending::PendingStructure;

/// Итог применения структуры
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub written: usize,
    /// AirOnly записи, чья ячейка уже занята
    pub skipped: usize,
}

/// Хранилище изменений мира
pub struct WorldChanges {
    /// Изменённые ноды: позиция -> новая нода
    changes: HashMap<BlockPos, Node>,
}

impl WorldChanges {
    pub fn new() -> Self {
        Self {
            changes: HashMap::new(),
        }
    }

    /// Установить ноду
    pub fn set_block(&mut self, pos: BlockPos, node: Node) {
        self.changes.insert(pos, node);
    }

    /// Получить изменённую ноду (если есть)
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<Node> {
        self.changes.get(&BlockPos::new(x, y, z)).copied()
    }

    /// Нода в ячейке, воздух если изменений нет
    pub fn node_at(&self, pos: BlockPos) -> Node {
        self.changes.get(&pos).copied().unwrap_or(Node::AIR)
    }

    /// Применить структуру дерева к текущему состоянию мира
    pub fn apply_structure(&mut self, structure: &PendingStructure) -> ApplyStats {
        let mut stats = ApplyStats::default();
        for write in structure.iter() {
            if write.overwrite == Overwrite::AirOnly && !self.node_at(write.pos).is_air() {
                stats.skipped += 1;
                continue;
            }
            self.set_block(write.pos, write.node);
            stats.written += 1;
        }
        stats
    }
}

impl Default for WorldChanges {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelBuffer for WorldChanges {
    fn get(&self, pos: BlockPos) -> Option<Node> {
        Some(self.node_at(pos))
    }

    fn set(&mut self, pos: BlockPos, node: Node) -> bool {
        self.set_block(pos, node);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{STONE, TREE};
    use crate::treegen::Placement;

    #[test]
    fn untouched_cells_read_as_air() {
        let mut world = WorldChanges::new();
        world.set_block(BlockPos::new(0, 0, 0), Node::new(STONE));
        assert_eq!(world.get_block(0, 0, 0), Some(Node::new(STONE)));
        assert_eq!(world.get_block(0, 1, 0), None);
        assert!(world.node_at(BlockPos::new(0, 1, 0)).is_air());
        assert_eq!(VoxelBuffer::get(&world, BlockPos::new(9, -9, 9)), Some(Node::AIR));
    }

    #[test]
    fn trunk_overrides_live_content() {
        let p = BlockPos::new(0, 3, 0);
        let mut world = WorldChanges::new();
        world.set_block(p, Node::new(STONE));
        let structure = PendingStructure::from_placements(
            BlockPos::new(0, 0, 0),
            &[Placement { pos: p, node: Node::new(TREE), overwrite: Overwrite::Always }],
        );
        assert_eq!(world.apply_structure(&structure), ApplyStats { written: 1, skipped: 0 });
        assert_eq!(world.get_block(0, 3, 0), Some(Node::new(TREE)));
    }
}
