// ============================================
// World Module - Отложенная вставка структур
// ============================================
// Генератор отдаёт PendingStructure окружению; окружение применяет её
// поверх живого мира (WorldChanges) не более одного раза.

mod pending;
mod world_changes;
mod environment;

pub use pending::{PendingStructure, PendingWrite};
pub use world_changes::{ApplyStats, WorldChanges};
pub use environment::{Environment, StructureQueue};
