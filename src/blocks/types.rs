// ============================================
// Node Types - Data-Driven Architecture
// ============================================
// BlockType = u8 (numeric_id). Все данные из JSON.

use serde::{Deserialize, Serialize};

/// BlockType - просто numeric_id блока
pub type BlockType = u8;

// Константы базовых нод (соответствуют numeric_id в default_blocks.json)
pub const AIR: BlockType = 0;
pub const STONE: BlockType = 1;
pub const DIRT: BlockType = 2;
pub const GRASS: BlockType = 3;
pub const TREE: BlockType = 30;
pub const LEAVES: BlockType = 32;
pub const APPLE: BlockType = 40;

/// Нода в воксельном буфере: тип + непрозрачный байт параметра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Node {
    pub block: BlockType,
    #[serde(default)]
    pub param: u8,
}

impl Node {
    pub const AIR: Node = Node { block: AIR, param: 0 };

    pub const fn new(block: BlockType) -> Self {
        Self { block, param: 0 }
    }

    pub const fn with_param(block: BlockType, param: u8) -> Self {
        Self { block, param }
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.block == AIR
    }
}

impl From<BlockType> for Node {
    fn from(block: BlockType) -> Self {
        Node::new(block)
    }
}
