// ============================================
// Block Registry - Data-Driven из JSON
// ============================================
// Единый источник правды для нод. Не глобальный: генератор
// получает реестр по ссылке через NodeResolver.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::definition::{BlockCategory, BlockDefinition, BlocksFile};
use super::resolver::NodeResolver;
use super::types::Node;

/// Встроенный набор нод
const DEFAULT_BLOCKS_JSON: &str = include_str!("../../assets/blocks/default_blocks.json");

/// Реестр нод
pub struct BlockRegistry {
    /// Ноды по string ID
    blocks_by_id: HashMap<String, BlockDefinition>,
    /// Ноды по numeric ID
    blocks_by_numeric: HashMap<u8, BlockDefinition>,
    /// Маппинг имя/алиас -> string ID
    aliases: HashMap<String, String>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks_by_id: HashMap::new(),
            blocks_by_numeric: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Реестр со встроенными нодами (default_blocks.json)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        if let Err(e) = registry.load_from_json(DEFAULT_BLOCKS_JSON) {
            log::warn!("Failed to load default blocks: {}", e);
            register_fallback_blocks(&mut registry);
        }
        registry
    }

    /// Загрузить ноды из JSON строки
    pub fn load_from_json(&mut self, json: &str) -> Result<usize, String> {
        let blocks_file: BlocksFile = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?;

        let count = blocks_file.blocks.len();
        for block in blocks_file.blocks {
            self.register(block);
        }
        Ok(count)
    }

    /// Загрузить ноды из файла
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        self.load_from_json(&content)
    }

    /// Зарегистрировать ноду (перезаписывает ноду с тем же ID)
    pub fn register(&mut self, block: BlockDefinition) {
        let id = block.id.clone();

        for alias in &block.aliases {
            self.aliases.insert(alias.clone(), id.clone());
        }
        self.blocks_by_numeric.insert(block.numeric_id, block.clone());
        self.blocks_by_id.insert(id, block);
    }

    /// Получить ноду по string ID или алиасу
    pub fn get(&self, name: &str) -> Option<&BlockDefinition> {
        self.blocks_by_id.get(name).or_else(|| {
            self.aliases.get(name).and_then(|id| self.blocks_by_id.get(id))
        })
    }

    /// Получить ноду по numeric ID
    pub fn get_by_numeric(&self, id: u8) -> Option<&BlockDefinition> {
        self.blocks_by_numeric.get(&id)
    }

    /// Количество нод
    pub fn count(&self) -> usize {
        self.blocks_by_id.len()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self { Self::new() }
}

impl NodeResolver for BlockRegistry {
    fn resolve(&self, name: &str) -> Option<Node> {
        self.get(name).map(BlockDefinition::node)
    }
}

/// Fallback ноды если JSON не загрузился
fn register_fallback_blocks(registry: &mut BlockRegistry) {
    registry.register(BlockDefinition {
        id: "air".to_string(),
        numeric_id: 0,
        name: "Air".to_string(),
        ..Default::default()
    });

    registry.register(BlockDefinition {
        id: "default:dirt".to_string(),
        numeric_id: 2,
        name: "Dirt".to_string(),
        aliases: vec!["mapgen_dirt".to_string()],
        ..Default::default()
    });

    registry.register(BlockDefinition {
        id: "default:tree".to_string(),
        numeric_id: 30,
        name: "Tree".to_string(),
        category: BlockCategory::Wood,
        aliases: vec!["mapgen_tree".to_string()],
        ..Default::default()
    });

    registry.register(BlockDefinition {
        id: "default:leaves".to_string(),
        numeric_id: 32,
        name: "Leaves".to_string(),
        category: BlockCategory::Nature,
        aliases: vec!["mapgen_leaves".to_string()],
        ..Default::default()
    });
}
