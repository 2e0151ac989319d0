// ============================================
// Pending Structure - Готовый набор записей дерева
// ============================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::blocks::Node;
use crate::treegen::{Overwrite, Placement};
use crate::voxel::BlockPos;

/// Одна запись структуры
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWrite {
    pub pos: BlockPos,
    pub node: Node,
    pub overwrite: Overwrite,
}

/// Полностью посчитанное дерево, ожидающее вставки в мир
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PendingStructure {
    pub origin: BlockPos,
    /// По одной записи на ячейку, в порядке координат
    writes: Vec<PendingWrite>,
}

impl PendingStructure {
    /// Схлопнуть журнал: последняя запись в ячейку побеждает
    /// и сохраняет свою политику
    pub fn from_placements(origin: BlockPos, placements: &[Placement]) -> Self {
        let mut cells: BTreeMap<BlockPos, PendingWrite> = BTreeMap::new();
        for p in placements {
            cells.insert(p.pos, PendingWrite { pos: p.pos, node: p.node, overwrite: p.overwrite });
        }
        Self { origin, writes: cells.into_values().collect() }
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingWrite> {
        self.writes.iter()
    }

    /// Ограничивающий бокс (min, max), `None` для пустой структуры
    pub fn bounds(&self) -> Option<(BlockPos, BlockPos)> {
        let first = self.writes.first()?.pos;
        Some(self.writes.iter().fold((first, first), |(lo, hi), w| {
            (
                BlockPos::new(lo.x.min(w.pos.x), lo.y.min(w.pos.y), lo.z.min(w.pos.z)),
                BlockPos::new(hi.x.max(w.pos.x), hi.y.max(w.pos.y), hi.z.max(w.pos.z)),
            )
        }))
    }
}
