// ============================================
// Tree Report - Итог одной генерации
// ============================================

use super::error::TreegenError;
use super::placer::Placement;

#[derive(Debug, Clone, Default)]
pub struct TreeReport {
    /// Длина выведенной строки (0 для классического дерева)
    pub derived_len: usize,
    /// Итерации после разброса
    pub iterations: u32,
    pub trunk_writes: usize,
    pub leaf_writes: usize,
    pub fruit_writes: usize,
    /// Все успешные записи в порядке выполнения
    pub placements: Vec<Placement>,
    pub warnings: Vec<TreegenError>,
}

impl TreeReport {
    pub fn warn(&mut self, warning: TreegenError) {
        log::warn!("treegen: {}", warning);
        self.warnings.push(warning);
    }

    pub fn has_overflow(&self) -> bool {
        self.warnings.iter().any(|w| matches!(w, TreegenError::GrammarOverflow { .. }))
    }
}
