// ============================================
// Библиотека нод для генерации деревьев
// ============================================
// Data-Driven Architecture: ноды загружаются из JSON,
// генератор получает их через внедрённый NodeResolver

mod types;
mod definition;
mod registry;
mod resolver;

pub use types::*;
pub use definition::*;
pub use registry::*;
pub use resolver::*;
