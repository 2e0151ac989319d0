// ============================================
// Treegen Config - Константы генерации деревьев
// ============================================
// Все "магические" числа генератора в одном месте, загружаются из JSON.
// Отсутствующие поля берутся из значений по умолчанию.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Встроенный конфиг
const DEFAULT_CONFIG_JSON: &str = include_str!("../../assets/treegen.json");

/// Верхняя граница лучей креста ствола
pub const MAX_TRUNK_CROSS_RADIUS: i32 = 8;
/// Верхняя граница радиуса листвы: (2r+1)^3 ячеек на каждый якорь
pub const MAX_LEAF_CLUSTER_RADIUS: i32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreegenConfig {
    /// Лимит длины выведенной строки L-системы
    pub max_derived_symbols: usize,
    /// Длина "лучей" креста толстого ствола (1 -> 5 вокселей)
    pub trunk_cross_radius: i32,
    /// Радиус сферы листвы вокруг кончика ветки
    pub leaf_cluster_radius: i32,
    /// Шанс плода на ячейку листвы, в процентах
    pub fruit_chance_percent: u32,
    /// Случайная добавка к углу поворота, 0..=N градусов на дерево
    pub angle_jitter_degrees: u32,
    /// Нода под стволом (чтобы дерево не висело в воздухе)
    pub ground_node: Option<String>,
    pub default_tree: DefaultTreeConfig,
}

/// Параметры классического дерева
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultTreeConfig {
    pub trunk_height_min: i32,
    pub trunk_height_max: i32,
    /// Количество случайных "комков" 2x2x2 листвы
    pub leaf_blobs: u32,
    pub trunk_node: String,
    pub leaves_node: String,
    pub fruit_node: String,
}

impl Default for TreegenConfig {
    fn default() -> Self {
        Self {
            max_derived_symbols: 1 << 18,
            trunk_cross_radius: 1,
            leaf_cluster_radius: 2,
            fruit_chance_percent: 10,
            angle_jitter_degrees: 1,
            ground_node: Some("mapgen_dirt".to_string()),
            default_tree: DefaultTreeConfig::default(),
        }
    }
}

impl Default for DefaultTreeConfig {
    fn default() -> Self {
        Self {
            trunk_height_min: 4,
            trunk_height_max: 5,
            leaf_blobs: 7,
            trunk_node: "mapgen_tree".to_string(),
            leaves_node: "mapgen_leaves".to_string(),
            fruit_node: "mapgen_apple".to_string(),
        }
    }
}

impl TreegenConfig {
    /// Встроенный конфиг (assets/treegen.json), при ошибке - значения по умолчанию
    pub fn embedded() -> Self {
        Self::load_from_json(DEFAULT_CONFIG_JSON).unwrap_or_else(|e| {
            log::warn!("Failed to load embedded treegen config: {}", e);
            Self::default()
        })
    }

    /// Загрузить конфиг из JSON строки (радиусы приводятся к допустимым)
    pub fn load_from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON: {}", e))?;
        Ok(config.clamped())
    }

    /// Привести радиусы к 0..=MAX
    pub fn clamped(mut self) -> Self {
        let trunk = self.trunk_cross_radius.clamp(0, MAX_TRUNK_CROSS_RADIUS);
        if trunk != self.trunk_cross_radius {
            log::warn!("trunk_cross_radius {} clamped to {}", self.trunk_cross_radius, trunk);
            self.trunk_cross_radius = trunk;
        }
        let leaves = self.leaf_cluster_radius.clamp(0, MAX_LEAF_CLUSTER_RADIUS);
        if leaves != self.leaf_cluster_radius {
            log::warn!("leaf_cluster_radius {} clamped to {}", self.leaf_cluster_radius, leaves);
            self.leaf_cluster_radius = leaves;
        }
        self
    }

    /// Загрузить конфиг из файла
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        Self::load_from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_matches_defaults() {
        assert_eq!(TreegenConfig::embedded(), TreegenConfig::default());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = TreegenConfig::load_from_json(
            r#"{"leaf_cluster_radius": 3, "default_tree": {"leaf_blobs": 2}}"#,
        ).unwrap();
        assert_eq!(config.leaf_cluster_radius, 3);
        assert_eq!(config.default_tree.leaf_blobs, 2);
        assert_eq!(config.default_tree.trunk_height_min, 4);
        assert_eq!(config.max_derived_symbols, 1 << 18);
    }

    #[test]
    fn oversized_radii_are_clamped_on_load() {
        let config = TreegenConfig::load_from_json(
            r#"{"trunk_cross_radius": 100000, "leaf_cluster_radius": 50000}"#,
        ).unwrap();
        assert_eq!(config.trunk_cross_radius, MAX_TRUNK_CROSS_RADIUS);
        assert_eq!(config.leaf_cluster_radius, MAX_LEAF_CLUSTER_RADIUS);

        let config = TreegenConfig::load_from_json(r#"{"leaf_cluster_radius": -4}"#).unwrap();
        assert_eq!(config.leaf_cluster_radius, 0);
    }

    #[test]
    fn ground_node_can_be_disabled() {
        let config = TreegenConfig::load_from_json(r#"{"ground_node": null}"#).unwrap();
        assert_eq!(config.ground_node, None);
    }
}
