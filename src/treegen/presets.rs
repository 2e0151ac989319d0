// ============================================
// Tree Presets - Готовые L-system деревья из JSON
// ============================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::definition::TreeDefinition;

/// Встроенные деревья
const DEFAULT_TREES_JSON: &str = include_str!("../../assets/trees/default_trees.json");

/// Файл с определениями деревьев
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreesFile {
    #[serde(default = "default_version")]
    pub version: String,
    pub trees: BTreeMap<String, TreeDefinition>,
}

fn default_version() -> String { "1.0".to_string() }

/// Набор именованных деревьев
#[derive(Debug, Clone, Default)]
pub struct TreePresets {
    trees: BTreeMap<String, TreeDefinition>,
}

impl TreePresets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Встроенные деревья (assets/trees/default_trees.json)
    pub fn embedded() -> Self {
        let mut presets = Self::new();
        if let Err(e) = presets.load_from_json(DEFAULT_TREES_JSON) {
            log::warn!("Failed to load default trees: {}", e);
        }
        presets
    }

    pub fn load_from_json(&mut self, json: &str) -> Result<usize, String> {
        let file: TreesFile = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?;
        let count = file.trees.len();
        self.trees.extend(file.trees);
        Ok(count)
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        self.load_from_json(&content)
    }

    pub fn get(&self, name: &str) -> Option<&TreeDefinition> {
        self.trees.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(|k| k.as_str())
    }
}
