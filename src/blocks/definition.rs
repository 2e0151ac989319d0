// ============================================
// Data-Driven Node Definition
// ============================================
// Структуры для загрузки нод из JSON

use serde::{Deserialize, Serialize};

use super::types::{BlockType, Node};

/// Категория ноды
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    #[default]
    Basic,
    Stone,
    Wood,
    Nature,
    Fruit,
}

/// Определение ноды из JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Уникальный ID ноды (string, например "default:tree")
    pub id: String,

    /// Числовой ID (0-255)
    pub numeric_id: u8,

    /// Отображаемое имя
    pub name: String,

    /// Байт параметра, который получает нода при генерации
    #[serde(default)]
    pub param: u8,

    /// Категория
    #[serde(default)]
    pub category: BlockCategory,

    /// Альтернативные имена (например "mapgen_tree" -> "default:tree")
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Дополнительные теги для модов
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlockDefinition {
    /// Нода, которую пишет генератор
    pub fn node(&self) -> Node {
        Node::with_param(self.numeric_id as BlockType, self.param)
    }
}

impl Default for BlockDefinition {
    fn default() -> Self {
        Self {
            id: "unknown".to_string(),
            numeric_id: 0,
            name: "Unknown".to_string(),
            param: 0,
            category: BlockCategory::Basic,
            aliases: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// Файл с определениями нод
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocksFile {
    /// Версия формата
    #[serde(default = "default_version")]
    pub version: String,

    /// Список нод
    pub blocks: Vec<BlockDefinition>,
}

fn default_version() -> String { "1.0".to_string() }
