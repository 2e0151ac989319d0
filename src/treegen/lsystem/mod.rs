// ============================================
// L-System Trees - Деревья по грамматике
// ============================================
//
// Ключ символов:
//   [  - сохранить состояние черепахи
//   ]  - восстановить состояние (кончик ветки -> якорь листвы)
//   +  - / -  рыскание по локальной Z
//   &  - / ^  тангаж по локальной Y
//   *  - / /  крен по локальной X
//   G  - шаг вперёд без рисования
//   T  - шаг вперёд, ствол
//   F  - шаг вперёд, ствол/ветка
//   f  - шаг вперёд, лист
//   R  - шаг вперёд, плод
//   A-D - заменить правилом A-D
//   a-d - заменить правилом A-D с шансом 90/80/70/60%
// Остальные символы игнорируются.

mod symbol;
mod derivation;
mod turtle;

pub use symbol::{parse_symbols, render, Stroke, Symbol, TurnAxis};
pub use derivation::{effective_iterations, Derivation, Grammar};
pub use turtle::{cross_section, TurtleState};

use std::collections::BTreeSet;

use rand::Rng;

use crate::blocks::{Node, TreeNodes};
use crate::voxel::{BlockPos, VoxelBuffer};

use super::config::{TreegenConfig, MAX_LEAF_CLUSTER_RADIUS, MAX_TRUNK_CROSS_RADIUS};
use super::definition::TreeDefinition;
use super::error::TreegenError;
use super::placer::{Overwrite, VoxelPlacer};
use super::report::TreeReport;

/// Интерпретатор L-system дерева
pub struct LSystemInterpreter<'c> {
    config: &'c TreegenConfig,
}

impl<'c> LSystemInterpreter<'c> {
    pub fn new(config: &'c TreegenConfig) -> Self {
        Self { config }
    }

    /// Вывести строку и исполнить её черепахой от `origin`
    pub fn make_ltree<B, R>(
        &self,
        placer: &mut VoxelPlacer<'_, B>,
        origin: BlockPos,
        def: &TreeDefinition,
        nodes: &TreeNodes,
        rng: &mut R,
        report: &mut TreeReport,
    ) -> Result<(), TreegenError>
    where
        B: VoxelBuffer + ?Sized,
        R: Rng,
    {
        let iterations = effective_iterations(def, rng);
        let derivation = Grammar::new(def).derive(iterations, self.config.max_derived_symbols, rng);
        report.iterations = iterations;
        report.derived_len = derivation.symbols.len();
        if let Some(overflow) = derivation.overflow.clone() {
            report.warn(overflow);
        }

        let jitter = match self.config.angle_jitter_degrees {
            0 => 0,
            max => rng.gen_range(0..=max),
        };
        let angle = (def.angle_degrees() as f32 + jitter as f32).to_radians();

        self.place_ground(placer, origin, def.thin_trunks, nodes);
        let anchors = self.execute(placer, origin, &derivation.symbols, angle, def.thin_trunks, nodes, report)?;

        self.place_leaf_clusters(placer, &anchors, nodes, nodes.fruit, rng, report);
        Ok(())
    }

    fn trunk_radius(&self, thin_trunks: bool) -> i32 {
        if thin_trunks {
            0
        } else {
            self.config.trunk_cross_radius.clamp(0, MAX_TRUNK_CROSS_RADIUS)
        }
    }

    /// Опора в ячейке origin, прямо под первым шагом ствола
    fn place_ground<B: VoxelBuffer + ?Sized>(
        &self,
        placer: &mut VoxelPlacer<'_, B>,
        origin: BlockPos,
        thin_trunks: bool,
        nodes: &TreeNodes,
    ) {
        for cell in cross_section(origin, 1, self.trunk_radius(thin_trunks)) {
            placer.place(cell, nodes.ground, Overwrite::Always);
        }
    }

    /// Проход по выведенной строке; возвращает якоря листвы
    #[allow(clippy::too_many_arguments)]
    fn execute<B: VoxelBuffer + ?Sized>(
        &self,
        placer: &mut VoxelPlacer<'_, B>,
        origin: BlockPos,
        symbols: &[Symbol],
        angle: f32,
        thin_trunks: bool,
        nodes: &TreeNodes,
        report: &mut TreeReport,
    ) -> Result<BTreeSet<BlockPos>, TreegenError> {
        let mut turtle = TurtleState::upright(origin.to_vec3())?;
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut anchors = BTreeSet::new();

        for (i, &symbol) in symbols.iter().enumerate() {
            match symbol {
                Symbol::Forward(stroke) => {
                    // Сначала шаг, потом запись в новую ячейку
                    turtle.advance();
                    match stroke {
                        Stroke::Move => {}
                        Stroke::Trunk | Stroke::Branch => {
                            report.trunk_writes += self.place_trunk(placer, &turtle, thin_trunks, nodes);
                        }
                        Stroke::Leaf => {
                            if placer.place_at(turtle.position, nodes.leaves, Overwrite::AirOnly) {
                                report.leaf_writes += 1;
                            }
                        }
                        Stroke::Fruit => {
                            if placer.place_at(turtle.position, nodes.fruit, Overwrite::AirOnly) {
                                report.fruit_writes += 1;
                            }
                        }
                    }
                }
                Symbol::Turn { axis, positive } => {
                    turtle.turn(axis, if positive { angle } else { -angle })?;
                }
                Symbol::Push => stack.push(turtle),
                Symbol::Pop => match stack.pop() {
                    Some(saved) => {
                        anchors.insert(turtle.cell());
                        turtle = saved;
                    }
                    // Лишняя `]` игнорируется, генерация продолжается
                    None => report.warn(TreegenError::MalformedBranch { position: i }),
                },
                Symbol::Rewrite(_) | Symbol::MaybeRewrite(_) | Symbol::Other(_) => {}
            }
        }

        if !stack.is_empty() {
            log::debug!("{} unclosed branches abandoned", stack.len());
        }
        Ok(anchors)
    }

    /// Один шаг ствола: одна ячейка или крест поперёк движения
    fn place_trunk<B: VoxelBuffer + ?Sized>(
        &self,
        placer: &mut VoxelPlacer<'_, B>,
        turtle: &TurtleState,
        thin_trunks: bool,
        nodes: &TreeNodes,
    ) -> usize {
        cross_section(turtle.cell(), turtle.dominant_axis(), self.trunk_radius(thin_trunks))
            .into_iter()
            .filter(|&cell| placer.place(cell, nodes.trunk, Overwrite::Always))
            .count()
    }

    /// Шары листвы вокруг якорей; ячейки объединяются до записи
    fn place_leaf_clusters<B, R>(
        &self,
        placer: &mut VoxelPlacer<'_, B>,
        anchors: &BTreeSet<BlockPos>,
        nodes: &TreeNodes,
        fruit: Option<Node>,
        rng: &mut R,
        report: &mut TreeReport,
    ) where
        B: VoxelBuffer + ?Sized,
        R: Rng,
    {
        let r = self.config.leaf_cluster_radius.clamp(0, MAX_LEAF_CLUSTER_RADIUS);
        let mut cells = BTreeSet::new();
        for anchor in anchors {
            for dz in -r..=r {
                for dy in -r..=r {
                    for dx in -r..=r {
                        if dx * dx + dy * dy + dz * dz <= r * r {
                            cells.insert(anchor.offset(dx, dy, dz));
                        }
                    }
                }
            }
        }

        for cell in cells {
            let is_fruit = fruit.is_some() && rng.gen_range(0..100) < self.config.fruit_chance_percent;
            if is_fruit {
                if placer.place(cell, fruit, Overwrite::AirOnly) {
                    report.fruit_writes += 1;
                }
            } else if placer.place(cell, nodes.leaves, Overwrite::AirOnly) {
                report.leaf_writes += 1;
            }
        }
    }
}
