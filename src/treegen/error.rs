// ============================================
// Treegen Errors - Ошибки и предупреждения генерации
// ============================================
// Фатальной ошибки нет: InvalidAxis возвращается вызывающему как Err,
// остальное копится в TreeReport::warnings.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreegenError {
    /// Ось поворота нулевой длины или не конечная
    InvalidAxis,
    /// Выведенная строка упёрлась в лимит и была обрезана;
    /// `steps_done` считает и шаг, на котором случилась обрезка
    GrammarOverflow { cap: usize, steps_done: u32 },
    /// Имя ноды не найдено в реестре
    UnresolvedNode(String),
    /// `]` без парной `[`, индекс символа в выведенной строке
    MalformedBranch { position: usize },
}

impl TreegenError {
    /// Предупреждение, а не ошибка вызова
    pub fn is_warning(&self) -> bool {
        !matches!(self, TreegenError::InvalidAxis)
    }
}

impl fmt::Display for TreegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreegenError::InvalidAxis => write!(f, "rotation axis must be finite and non-zero"),
            TreegenError::GrammarOverflow { cap, steps_done } => {
                write!(f, "derived string truncated to {} symbols at rewrite step {}", cap, steps_done)
            }
            TreegenError::UnresolvedNode(name) => write!(f, "unknown node '{}'", name),
            TreegenError::MalformedBranch { position } => {
                write!(f, "branch close at symbol {} has no matching open", position)
            }
        }
    }
}

impl std::error::Error for TreegenError {}
