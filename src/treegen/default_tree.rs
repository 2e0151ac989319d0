// ============================================
// Default Tree - Классическое дерево / яблоня
// ============================================

use rand::Rng;

use crate::blocks::TreeNodes;
use crate::voxel::{BlockPos, VoxelBuffer};

use super::config::DefaultTreeConfig;
use super::placer::{Overwrite, VoxelPlacer};
use super::report::TreeReport;

/// Бокс листвы относительно верхушки ствола
const LEAVES_MIN: (i32, i32, i32) = (-2, -1, -2);
const LEAVES_MAX: (i32, i32, i32) = (2, 2, 2);

/// Маска листвы в боксе LEAVES_MIN..=LEAVES_MAX
struct LeafMask {
    cells: Vec<bool>,
}

impl LeafMask {
    const SX: i32 = LEAVES_MAX.0 - LEAVES_MIN.0 + 1;
    const SY: i32 = LEAVES_MAX.1 - LEAVES_MIN.1 + 1;
    const SZ: i32 = LEAVES_MAX.2 - LEAVES_MIN.2 + 1;

    fn new() -> Self {
        Self { cells: vec![false; (Self::SX * Self::SY * Self::SZ) as usize] }
    }

    #[inline]
    fn index(x: i32, y: i32, z: i32) -> usize {
        let (lx, ly, lz) = (x - LEAVES_MIN.0, y - LEAVES_MIN.1, z - LEAVES_MIN.2);
        (ly * Self::SX * Self::SZ + lz * Self::SX + lx) as usize
    }

    /// Заполнить куб [p, p + size) (обрезается боксом)
    fn fill_cube(&mut self, p: (i32, i32, i32), size: i32) {
        for y in p.1..p.1 + size {
            for z in p.2..p.2 + size {
                for x in p.0..p.0 + size {
                    if (LEAVES_MIN.0..=LEAVES_MAX.0).contains(&x)
                        && (LEAVES_MIN.1..=LEAVES_MAX.1).contains(&y)
                        && (LEAVES_MIN.2..=LEAVES_MAX.2).contains(&z)
                    {
                        self.cells[Self::index(x, y, z)] = true;
                    }
                }
            }
        }
    }

    fn is_set(&self, x: i32, y: i32, z: i32) -> bool {
        self.cells[Self::index(x, y, z)]
    }
}

/// Генератор классического дерева
pub struct DefaultTreeGenerator<'c> {
    config: &'c DefaultTreeConfig,
    fruit_chance_percent: u32,
}

impl<'c> DefaultTreeGenerator<'c> {
    pub fn new(config: &'c DefaultTreeConfig, fruit_chance_percent: u32) -> Self {
        Self { config, fruit_chance_percent }
    }

    /// Ствол вверх от `origin`, крона вокруг верхушки
    pub fn make_tree<B, R>(
        &self,
        placer: &mut VoxelPlacer<'_, B>,
        origin: BlockPos,
        is_apple_tree: bool,
        nodes: &TreeNodes,
        rng: &mut R,
        report: &mut TreeReport,
    ) where
        B: VoxelBuffer + ?Sized,
        R: Rng,
    {
        let min = self.config.trunk_height_min.max(1);
        let max = self.config.trunk_height_max.max(min);
        let trunk_h = rng.gen_range(min..=max);

        // Ствол
        for y in 0..trunk_h {
            if placer.place(origin.offset(0, y, 0), nodes.trunk, Overwrite::Always) {
                report.trunk_writes += 1;
            }
        }
        let top = origin.offset(0, trunk_h - 1, 0);

        // Ядро 3x3x3 у верхушки всегда, плюс случайные комки 2x2x2
        let mut mask = LeafMask::new();
        mask.fill_cube((-1, -1, -1), 3);
        for _ in 0..self.config.leaf_blobs {
            let p = (
                rng.gen_range(LEAVES_MIN.0..=LEAVES_MAX.0 - 1),
                rng.gen_range(LEAVES_MIN.1..=LEAVES_MAX.1 - 1),
                rng.gen_range(LEAVES_MIN.2..=LEAVES_MAX.2 - 1),
            );
            mask.fill_cube(p, 2);
        }

        let fruit = if is_apple_tree { nodes.fruit } else { None };
        for y in LEAVES_MIN.1..=LEAVES_MAX.1 {
            for z in LEAVES_MIN.2..=LEAVES_MAX.2 {
                for x in LEAVES_MIN.0..=LEAVES_MAX.0 {
                    if !mask.is_set(x, y, z) {
                        continue;
                    }
                    let cell = top.offset(x, y, z);
                    if fruit.is_some() && rng.gen_range(0..100) < self.fruit_chance_percent {
                        if placer.place(cell, fruit, Overwrite::AirOnly) {
                            report.fruit_writes += 1;
                        }
                    } else if placer.place(cell, nodes.leaves, Overwrite::AirOnly) {
                        report.leaf_writes += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::blocks::{Node, APPLE, LEAVES, TREE};
    use crate::treegen::placer::Placement;
    use crate::voxel::VoxelArea;

    fn nodes() -> TreeNodes {
        TreeNodes {
            trunk: Some(Node::new(TREE)),
            leaves: Some(Node::new(LEAVES)),
            fruit: Some(Node::new(APPLE)),
            ground: None,
        }
    }

    fn grow(apple: bool, seed: u64) -> (VoxelArea, TreeReport, Vec<Placement>) {
        let config = DefaultTreeConfig::default();
        let mut area = VoxelArea::around(BlockPos::new(0, 0, 0), 4, 1, 10);
        let mut report = TreeReport::default();
        let mut placer = VoxelPlacer::new(&mut area);
        let mut rng = StdRng::seed_from_u64(seed);
        DefaultTreeGenerator::new(&config, 10)
            .make_tree(&mut placer, BlockPos::new(0, 0, 0), apple, &nodes(), &mut rng, &mut report);
        let placements = placer.into_journal();
        (area, report, placements)
    }

    #[test]
    fn trunk_height_within_range_and_crown_on_top() {
        for seed in 0..20 {
            let (area, report, _) = grow(false, seed);
            assert!((4..=5).contains(&report.trunk_writes));
            let top = report.trunk_writes as i32 - 1;
            assert_eq!(area.get(BlockPos::new(0, top, 0)), Some(Node::new(TREE)));
            // ядро кроны рядом с верхушкой
            assert_eq!(area.get(BlockPos::new(1, top, 1)), Some(Node::new(LEAVES)));
            assert_eq!(area.get(BlockPos::new(0, top + 1, 0)), Some(Node::new(LEAVES)));
        }
    }

    #[test]
    fn plain_tree_has_no_fruit() {
        let (area, _, _) = grow(false, 3);
        assert_eq!(area.count(APPLE), 0);
    }

    #[test]
    fn apple_tree_grows_some_apples_without_touching_trunk() {
        let mut apples = 0;
        for seed in 0..20 {
            let (area, _, placements) = grow(true, seed);
            apples += area.count(APPLE);
            let trunk: HashSet<_> = placements.iter().filter(|p| p.node.block == TREE).map(|p| p.pos).collect();
            assert!(placements
                .iter()
                .filter(|p| p.node.block != TREE)
                .all(|p| !trunk.contains(&p.pos) && p.overwrite == Overwrite::AirOnly));
        }
        assert!(apples > 0);
    }

    #[test]
    fn same_seed_same_tree() {
        let (_, _, a) = grow(true, 77);
        let (_, _, b) = grow(true, 77);
        assert_eq!(a, b);
    }
}
