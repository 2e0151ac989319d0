// ============================================
// Voxel Placer - Политика перезаписи нод
// ============================================
// Ствол пишется всегда (Always), листва и плоды - только в воздух
// (AirOnly). Запись за пределами буфера молча пропускается.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::blocks::Node;
use crate::voxel::{BlockPos, VoxelBuffer};

/// Политика перезаписи ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overwrite {
    /// Только если ячейка сейчас воздух
    AirOnly,
    /// Перезаписать что угодно
    Always,
}

/// Одна успешная запись (элемент write-set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub pos: BlockPos,
    pub node: Node,
    pub overwrite: Overwrite,
}

/// Пишет ноды в буфер и ведёт журнал успешных записей
pub struct VoxelPlacer<'b, B: VoxelBuffer + ?Sized> {
    buffer: &'b mut B,
    journal: Vec<Placement>,
}

impl<'b, B: VoxelBuffer + ?Sized> VoxelPlacer<'b, B> {
    pub fn new(buffer: &'b mut B) -> Self {
        Self { buffer, journal: Vec::new() }
    }

    /// `node == None` (неразрешённая нода) - пропуск
    pub fn place(&mut self, pos: BlockPos, node: Option<Node>, overwrite: Overwrite) -> bool {
        let Some(node) = node else { return false };

        if overwrite == Overwrite::AirOnly {
            match self.buffer.get(pos) {
                Some(current) if current.is_air() => {}
                _ => return false,
            }
        }

        if !self.buffer.set(pos, node) {
            return false;
        }
        self.journal.push(Placement { pos, node, overwrite });
        true
    }

    /// Позиция черепахи округляется до ближайшей ячейки
    #[inline]
    pub fn place_at(&mut self, p: Vec3, node: Option<Node>, overwrite: Overwrite) -> bool {
        self.place(BlockPos::round(p), node, overwrite)
    }

    pub fn journal(&self) -> &[Placement] {
        &self.journal
    }

    pub fn into_journal(self) -> Vec<Placement> {
        self.journal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{LEAVES, TREE};
    use crate::voxel::VoxelArea;

    fn area() -> VoxelArea {
        VoxelArea::new(BlockPos::new(0, 0, 0), BlockPos::new(3, 3, 3))
    }

    #[test]
    fn air_only_never_replaces_trunk() {
        let mut buffer = area();
        let mut placer = VoxelPlacer::new(&mut buffer);
        let p = BlockPos::new(1, 1, 1);
        assert!(placer.place(p, Some(Node::new(TREE)), Overwrite::Always));
        assert!(!placer.place(p, Some(Node::new(LEAVES)), Overwrite::AirOnly));
        assert_eq!(placer.journal().len(), 1);
        assert_eq!(buffer.get(p), Some(Node::new(TREE)));
    }

    #[test]
    fn always_replaces_leaves() {
        let mut buffer = area();
        let mut placer = VoxelPlacer::new(&mut buffer);
        let p = BlockPos::new(2, 0, 2);
        assert!(placer.place(p, Some(Node::new(LEAVES)), Overwrite::AirOnly));
        assert!(placer.place(p, Some(Node::new(TREE)), Overwrite::Always));
        assert_eq!(buffer.get(p), Some(Node::new(TREE)));
    }

    #[test]
    fn out_of_range_and_unresolved_are_skipped() {
        let mut buffer = area();
        let mut placer = VoxelPlacer::new(&mut buffer);
        assert!(!placer.place(BlockPos::new(9, 0, 0), Some(Node::new(TREE)), Overwrite::Always));
        assert!(!placer.place(BlockPos::new(-1, 0, 0), Some(Node::new(LEAVES)), Overwrite::AirOnly));
        assert!(!placer.place(BlockPos::new(0, 0, 0), None, Overwrite::Always));
        assert!(placer.into_journal().is_empty());
    }

    #[test]
    fn turtle_positions_round_to_nearest() {
        let mut buffer = area();
        let mut placer = VoxelPlacer::new(&mut buffer);
        assert!(placer.place_at(Vec3::new(0.6, 1.4, 2.49), Some(Node::new(TREE)), Overwrite::Always));
        assert_eq!(buffer.get(BlockPos::new(1, 1, 2)), Some(Node::new(TREE)));
    }
}
