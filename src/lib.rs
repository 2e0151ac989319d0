// ============================================
// treegen - Процедурные деревья для воксельного мира
// ============================================
// Классическое дерево / яблоня и деревья по L-system грамматике.
// Буфер вокселей, реестр нод и окружение внедряются снаружи.

pub mod blocks;
pub mod voxel;
pub mod treegen;
pub mod world;

pub use blocks::{BlockRegistry, Node, NodeResolver};
pub use treegen::{TreeDefinition, TreeKind, TreeReport, TreeSpawner, TreegenConfig, TreegenError};
pub use voxel::{BlockPos, SparseVoxels, VoxelArea, VoxelBuffer};
pub use world::{Environment, PendingStructure, StructureQueue, WorldChanges};
