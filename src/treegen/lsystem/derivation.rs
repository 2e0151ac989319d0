// ============================================
// L-System Derivation - Переписывание строки
// ============================================
// Длина результата ограничена: при превышении строка обрезается
// и возвращается предупреждение GrammarOverflow.

use rand::Rng;

use crate::treegen::definition::{RuleSlot, TreeDefinition};
use crate::treegen::error::TreegenError;

use super::symbol::{parse_symbols, render, Symbol};

/// Разобранная грамматика дерева
#[derive(Debug, Clone)]
pub struct Grammar {
    axiom: Vec<Symbol>,
    rules: [Vec<Symbol>; 4],
}

/// Результат вывода
#[derive(Debug, Clone)]
pub struct Derivation {
    pub symbols: Vec<Symbol>,
    /// Сколько шагов переписывания выполнено, включая обрезанный
    pub steps: u32,
    pub overflow: Option<TreegenError>,
}

impl Derivation {
    pub fn render(&self) -> String {
        render(&self.symbols)
    }
}

/// `iterations ± random_level`, не меньше нуля
pub fn effective_iterations<R: Rng>(def: &TreeDefinition, rng: &mut R) -> u32 {
    let level = def.iterations_random_level as i64;
    let jitter = if level > 0 { rng.gen_range(-level..=level) } else { 0 };
    (def.iterations as i64 + jitter).clamp(0, u32::MAX as i64) as u32
}

impl Grammar {
    pub fn new(def: &TreeDefinition) -> Self {
        Self {
            axiom: parse_symbols(&def.initial_axiom),
            rules: RuleSlot::ALL.map(|slot| parse_symbols(def.rule(slot))),
        }
    }

    /// Пустое правило означает "правила нет": символ остаётся как есть
    fn production(&self, slot: RuleSlot) -> Option<&[Symbol]> {
        let rule = &self.rules[slot.index()];
        (!rule.is_empty()).then_some(rule.as_slice())
    }

    pub fn derive<R: Rng>(&self, steps: u32, cap: usize, rng: &mut R) -> Derivation {
        let mut current = self.axiom.clone();
        if current.len() > cap {
            current.truncate(cap);
            return Derivation {
                symbols: current,
                steps: 0,
                overflow: Some(TreegenError::GrammarOverflow { cap, steps_done: 0 }),
            };
        }

        for step in 0..steps {
            let mut next = Vec::with_capacity(current.len().saturating_mul(2).min(cap));
            let mut overflowed = false;

            for &symbol in &current {
                let single = [symbol];
                let production: &[Symbol] = match symbol {
                    Symbol::Rewrite(slot) => self.production(slot).unwrap_or(&single[..]),
                    Symbol::MaybeRewrite(slot) => match self.production(slot) {
                        Some(rule) => {
                            if rng.gen_range(0..100) < slot.chance_percent() { rule } else { &[][..] }
                        }
                        None => &single[..],
                    },
                    _ => &single[..],
                };

                let room = cap - next.len();
                if production.len() > room {
                    next.extend_from_slice(&production[..room]);
                    overflowed = true;
                    break;
                }
                next.extend_from_slice(production);
            }

            current = next;
            if overflowed {
                let steps_done = step + 1;
                log::warn!("L-system derivation hit {} symbols at step {}, truncated", cap, steps_done);
                return Derivation {
                    symbols: current,
                    steps: steps_done,
                    overflow: Some(TreegenError::GrammarOverflow { cap, steps_done }),
                };
            }
        }

        Derivation { symbols: current, steps, overflow: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn def(axiom: &str, a: &str, b: &str) -> TreeDefinition {
        TreeDefinition {
            initial_axiom: axiom.to_string(),
            rules_a: a.to_string(),
            rules_b: b.to_string(),
            rules_c: String::new(),
            rules_d: String::new(),
            trunk_node: "t".to_string(),
            leaves_node: "l".to_string(),
            angle: 30,
            iterations: 0,
            iterations_random_level: 0,
            thin_trunks: true,
            fruit_tree: false,
            fruit_node: String::new(),
        }
    }

    #[test]
    fn zero_steps_is_identity() {
        let d = def("FF[+A]B?x", "FA", "BB");
        let mut rng = StdRng::seed_from_u64(1);
        let out = Grammar::new(&d).derive(0, 1000, &mut rng);
        assert_eq!(out.render(), "FF[+A]B?x");
        assert!(out.overflow.is_none());
    }

    #[test]
    fn uppercase_rules_rewrite_every_step() {
        let d = def("A", "F[A]", "");
        let mut rng = StdRng::seed_from_u64(1);
        let out = Grammar::new(&d).derive(2, 1000, &mut rng);
        assert_eq!(out.render(), "F[F[A]]");
        assert_eq!(out.steps, 2);
    }

    #[test]
    fn empty_rule_leaves_symbol_in_place() {
        let d = def("FCF", "", "");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grammar::new(&d).derive(3, 1000, &mut rng).render(), "FCF");
    }

    #[test]
    fn lowercase_rules_either_expand_or_vanish() {
        let d = def("aaaaaaaaaaaaaaaaaaaa", "F", "");
        let mut rng = StdRng::seed_from_u64(7);
        let out = Grammar::new(&d).derive(1, 1000, &mut rng).render();
        assert!(out.chars().all(|c| c == 'F'));
        assert!(out.len() <= 20);
    }

    #[test]
    fn growth_grammar_is_capped() {
        let d = def("A", "AA", "");
        let mut rng = StdRng::seed_from_u64(1);
        let out = Grammar::new(&d).derive(40, 4096, &mut rng);
        assert_eq!(out.symbols.len(), 4096);
        assert_eq!(out.steps, 13);
        assert_eq!(out.overflow, Some(TreegenError::GrammarOverflow { cap: 4096, steps_done: out.steps }));
        let message = out.overflow.map(|e| e.to_string()).unwrap_or_default();
        assert!(message.ends_with("at rewrite step 13"), "{}", message);
    }

    #[test]
    fn oversized_axiom_is_truncated() {
        let d = def("FFFFFFFF", "", "");
        let mut rng = StdRng::seed_from_u64(1);
        let out = Grammar::new(&d).derive(2, 5, &mut rng);
        assert_eq!(out.render(), "FFFFF");
        assert!(out.overflow.is_some());
    }

    #[test]
    fn iteration_jitter_stays_in_range() {
        let mut d = def("A", "", "");
        d.iterations = 1;
        d.iterations_random_level = 3;
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            assert!(effective_iterations(&d, &mut rng) <= 4);
        }
        d.iterations_random_level = 0;
        assert_eq!(effective_iterations(&d, &mut rng), 1);
    }
}
