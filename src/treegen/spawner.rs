// ============================================
// Tree Spawner - Точки входа генерации
// ============================================
// Immediate: пишем прямо в буфер вызывающего.
// Deferred: считаем во временный буфер, отдаём PendingStructure окружению.
// Batch: независимые деревья параллельно (rayon), каждое в свой буфер.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::blocks::{NodeResolver, TreeNodeNames, TreeNodes};
use crate::voxel::{BlockPos, SparseVoxels, VoxelBuffer};
use crate::world::{Environment, PendingStructure};

use super::config::TreegenConfig;
use super::default_tree::DefaultTreeGenerator;
use super::definition::TreeDefinition;
use super::error::TreegenError;
use super::lsystem::LSystemInterpreter;
use super::placer::VoxelPlacer;
use super::report::TreeReport;

/// Какой генератор запускать
#[derive(Debug, Clone, PartialEq)]
pub enum TreeKind {
    Default { apple: bool },
    LSystem(TreeDefinition),
}

/// Запрос на одно дерево для пакетной генерации
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub origin: BlockPos,
    pub kind: TreeKind,
    pub seed: u64,
}

/// Сид из мирового сида и позиции: разные места - разные деревья,
/// одно место - всегда одно и то же дерево
pub fn seed_for_position(world_seed: u64, pos: BlockPos) -> u64 {
    let n = (pos.x as i64 as u64).wrapping_mul(374761393)
        ^ (pos.y as i64 as u64).wrapping_mul(668265263)
        ^ (pos.z as i64 as u64).wrapping_mul(1274126177)
        ^ world_seed.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    let n = (n ^ (n >> 29)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    n ^ (n >> 32)
}

pub struct TreeSpawner {
    config: TreegenConfig,
}

impl TreeSpawner {
    pub fn new(config: TreegenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreegenConfig {
        &self.config
    }

    fn resolve_nodes<R: NodeResolver + ?Sized>(&self, kind: &TreeKind, resolver: &R, report: &mut TreeReport) -> TreeNodes {
        let ground = self.config.ground_node.as_deref();
        let names = match kind {
            TreeKind::Default { apple } => {
                let cfg = &self.config.default_tree;
                TreeNodeNames {
                    trunk: &cfg.trunk_node,
                    leaves: &cfg.leaves_node,
                    fruit: apple.then_some(cfg.fruit_node.as_str()),
                    ground: None,
                }
            }
            TreeKind::LSystem(def) => TreeNodeNames {
                trunk: &def.trunk_node,
                leaves: &def.leaves_node,
                fruit: def.fruit(),
                ground,
            },
        };

        let (nodes, unresolved) = TreeNodes::resolve(resolver, names);
        for name in unresolved {
            report.warn(TreegenError::UnresolvedNode(name));
        }
        nodes
    }

    /// Синхронная генерация прямо в буфер вызывающего
    pub fn spawn_immediate<B, R>(
        &self,
        buffer: &mut B,
        origin: BlockPos,
        kind: &TreeKind,
        resolver: &R,
        seed: u64,
    ) -> Result<TreeReport, TreegenError>
    where
        B: VoxelBuffer + ?Sized,
        R: NodeResolver + ?Sized,
    {
        let mut report = TreeReport::default();
        let nodes = self.resolve_nodes(kind, resolver, &mut report);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut placer = VoxelPlacer::new(buffer);

        match kind {
            TreeKind::Default { apple } => {
                DefaultTreeGenerator::new(&self.config.default_tree, self.config.fruit_chance_percent)
                    .make_tree(&mut placer, origin, *apple, &nodes, &mut rng, &mut report);
            }
            TreeKind::LSystem(def) => {
                LSystemInterpreter::new(&self.config)
                    .make_ltree(&mut placer, origin, def, &nodes, &mut rng, &mut report)?;
            }
        }

        report.placements = placer.into_journal();
        log::debug!(
            "tree at {:?}: {} trunk, {} leaves, {} fruit, {} symbols, {} warnings",
            origin,
            report.trunk_writes,
            report.leaf_writes,
            report.fruit_writes,
            report.derived_len,
            report.warnings.len(),
        );
        Ok(report)
    }

    /// Посчитать дерево во временном буфере без блокировки мира
    pub fn build_structure<R: NodeResolver + ?Sized>(
        &self,
        origin: BlockPos,
        kind: &TreeKind,
        resolver: &R,
        seed: u64,
    ) -> Result<(PendingStructure, TreeReport), TreegenError> {
        let mut scratch = SparseVoxels::new();
        let report = self.spawn_immediate(&mut scratch, origin, kind, resolver, seed)?;
        let structure = PendingStructure::from_placements(origin, &report.placements);
        Ok((structure, report))
    }

    /// Отложенная генерация: структура передаётся окружению и
    /// применяется им позже
    pub fn spawn_deferred<E, R>(
        &self,
        env: &E,
        origin: BlockPos,
        kind: &TreeKind,
        resolver: &R,
        seed: u64,
    ) -> Result<TreeReport, TreegenError>
    where
        E: Environment + ?Sized,
        R: NodeResolver + ?Sized,
    {
        let (structure, report) = self.build_structure(origin, kind, resolver, seed)?;
        env.submit(structure);
        Ok(report)
    }

    /// Много независимых деревьев параллельно
    pub fn spawn_batch<R>(
        &self,
        requests: &[SpawnRequest],
        resolver: &R,
    ) -> Vec<Result<(PendingStructure, TreeReport), TreegenError>>
    where
        R: NodeResolver + Sync + ?Sized,
    {
        requests
            .par_iter()
            .map(|req| self.build_structure(req.origin, &req.kind, resolver, req.seed))
            .collect()
    }
}

impl Default for TreeSpawner {
    fn default() -> Self {
        Self::new(TreegenConfig::embedded())
    }
}
