// ============================================
// Sparse Voxels - Расширяемый буфер
// ============================================
// Отсутствующая ячейка читается как воздух. Используется как
// временный буфер отложенного спавна.

use std::collections::BTreeMap;

use crate::blocks::Node;
use super::buffer::VoxelBuffer;
use super::pos::BlockPos;

#[derive(Debug, Clone, Default)]
pub struct SparseVoxels {
    nodes: BTreeMap<BlockPos, Node>,
}

impl SparseVoxels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ноды в порядке координат
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, Node)> + '_ {
        self.nodes.iter().map(|(p, n)| (*p, *n))
    }
}

impl VoxelBuffer for SparseVoxels {
    fn get(&self, pos: BlockPos) -> Option<Node> {
        Some(self.nodes.get(&pos).copied().unwrap_or(Node::AIR))
    }

    fn set(&mut self, pos: BlockPos, node: Node) -> bool {
        if node.is_air() {
            self.nodes.remove(&pos);
        } else {
            self.nodes.insert(pos, node);
        }
        true
    }
}
