// ============================================
// Tree Definition - Описание L-system дерева
// ============================================
// Формат обмена со скриптовым слоем (JSON). Имена полей - контракт.

use serde::{Deserialize, Serialize};

/// Слот правила переписывания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSlot {
    A,
    B,
    C,
    D,
}

impl RuleSlot {
    pub const ALL: [RuleSlot; 4] = [RuleSlot::A, RuleSlot::B, RuleSlot::C, RuleSlot::D];

    pub fn index(self) -> usize {
        match self {
            RuleSlot::A => 0,
            RuleSlot::B => 1,
            RuleSlot::C => 2,
            RuleSlot::D => 3,
        }
    }

    /// Шанс срабатывания для строчных символов a-d, в процентах
    pub fn chance_percent(self) -> u32 {
        match self {
            RuleSlot::A => 90,
            RuleSlot::B => 80,
            RuleSlot::C => 70,
            RuleSlot::D => 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDefinition {
    /// Стартовая строка грамматики
    pub initial_axiom: String,
    #[serde(default)]
    pub rules_a: String,
    #[serde(default)]
    pub rules_b: String,
    #[serde(default)]
    pub rules_c: String,
    #[serde(default)]
    pub rules_d: String,
    pub trunk_node: String,
    pub leaves_node: String,
    /// Градусы на один поворот черепахи (по модулю 360)
    #[serde(default)]
    pub angle: i32,
    #[serde(default)]
    pub iterations: u32,
    /// Разброс ±N к числу итераций
    #[serde(default)]
    pub iterations_random_level: u32,
    #[serde(default)]
    pub thin_trunks: bool,
    #[serde(default)]
    pub fruit_tree: bool,
    #[serde(default)]
    pub fruit_node: String,
}

impl TreeDefinition {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse tree definition: {}", e))
    }

    pub fn rule(&self, slot: RuleSlot) -> &str {
        match slot {
            RuleSlot::A => &self.rules_a,
            RuleSlot::B => &self.rules_b,
            RuleSlot::C => &self.rules_c,
            RuleSlot::D => &self.rules_d,
        }
    }

    /// Угол, приведённый к [0, 360)
    pub fn angle_degrees(&self) -> i32 {
        self.angle.rem_euclid(360)
    }

    /// Имя ноды плода, если дерево плодовое
    pub fn fruit(&self) -> Option<&str> {
        (self.fruit_tree && !self.fruit_node.is_empty()).then_some(self.fruit_node.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_fills_defaults() {
        let def = TreeDefinition::from_json(
            r#"{"initial_axiom":"FFA","rules_a":"[&F]","trunk_node":"t","leaves_node":"l","angle":-30}"#,
        ).unwrap();
        assert_eq!(def.rule(RuleSlot::A), "[&F]");
        assert_eq!(def.rule(RuleSlot::D), "");
        assert_eq!(def.angle_degrees(), 330);
        assert_eq!(def.iterations, 0);
        assert_eq!(def.fruit(), None);
    }

    #[test]
    fn fruit_only_counts_for_fruit_trees() {
        let mut def = TreeDefinition::from_json(
            r#"{"initial_axiom":"F","trunk_node":"t","leaves_node":"l","fruit_node":"apple"}"#,
        ).unwrap();
        assert_eq!(def.fruit(), None);
        def.fruit_tree = true;
        assert_eq!(def.fruit(), Some("apple"));
    }

    #[test]
    fn negative_iterations_are_rejected() {
        let err = TreeDefinition::from_json(
            r#"{"initial_axiom":"F","trunk_node":"t","leaves_node":"l","iterations":-1}"#,
        );
        assert!(err.is_err());
    }
}
