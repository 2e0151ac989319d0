// ============================================
// Treegen Module - Процедурные деревья
// ============================================
//
// RotationMath -> VoxelPlacer -> DefaultTreeGenerator / LSystemInterpreter
//                                     -> TreeSpawner
//
// Ствол пишется всегда, листва и плоды - только в воздух.
// Вся случайность из StdRng с сидом от вызывающего.

mod error;
mod config;
mod definition;
mod report;
pub mod math;
mod placer;
mod default_tree;
pub mod lsystem;
mod presets;
mod spawner;

pub use error::TreegenError;
pub use config::{DefaultTreeConfig, TreegenConfig};
pub use definition::{RuleSlot, TreeDefinition};
pub use report::TreeReport;
pub use placer::{Overwrite, Placement, VoxelPlacer};
pub use default_tree::DefaultTreeGenerator;
pub use lsystem::LSystemInterpreter;
pub use presets::{TreePresets, TreesFile};
pub use spawner::{seed_for_position, SpawnRequest, TreeKind, TreeSpawner};
