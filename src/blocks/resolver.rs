// ============================================
// Node Resolver - Имена нод -> конкретные ноды
// ============================================
// Генератор деревьев видит реестр только через этот трейт

use std::collections::HashMap;

use super::types::Node;

/// Read-only резолвер символических имён нод
pub trait NodeResolver {
    /// `None` если имя неизвестно
    fn resolve(&self, name: &str) -> Option<Node>;
}

impl NodeResolver for HashMap<String, Node> {
    fn resolve(&self, name: &str) -> Option<Node> {
        self.get(name).copied()
    }
}

impl<R: NodeResolver + ?Sized> NodeResolver for &R {
    fn resolve(&self, name: &str) -> Option<Node> {
        (**self).resolve(name)
    }
}

/// Кэшированные ноды одного дерева. Неразрешённое имя -> `None`,
/// размещения этого типа пропускаются.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeNodes {
    pub trunk: Option<Node>,
    pub leaves: Option<Node>,
    pub fruit: Option<Node>,
    pub ground: Option<Node>,
}

/// Имена, которые нужно разрешить для дерева
#[derive(Debug, Clone, Copy)]
pub struct TreeNodeNames<'a> {
    pub trunk: &'a str,
    pub leaves: &'a str,
    pub fruit: Option<&'a str>,
    pub ground: Option<&'a str>,
}

impl TreeNodes {
    /// Резолвит все имена; возвращает ноды и список неизвестных имён
    pub fn resolve<R: NodeResolver + ?Sized>(resolver: &R, names: TreeNodeNames<'_>) -> (Self, Vec<String>) {
        let mut unresolved = Vec::new();
        let mut lookup = |name: &str| {
            let node = resolver.resolve(name);
            if node.is_none() {
                log::warn!("Unknown node '{}', placements skipped", name);
                unresolved.push(name.to_string());
            }
            node
        };

        let nodes = Self {
            trunk: lookup(names.trunk),
            leaves: lookup(names.leaves),
            fruit: names.fruit.and_then(&mut lookup),
            ground: names.ground.and_then(&mut lookup),
        };
        (nodes, unresolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake() -> HashMap<String, Node> {
        let mut map = HashMap::new();
        map.insert("trunk".to_string(), Node::new(30));
        map.insert("leaves".to_string(), Node::new(32));
        map
    }

    #[test]
    fn unknown_names_are_collected_not_fatal() {
        let resolver = fake();
        let (nodes, unresolved) = TreeNodes::resolve(&resolver, TreeNodeNames {
            trunk: "trunk",
            leaves: "leaves",
            fruit: Some("golden_apple"),
            ground: None,
        });
        assert_eq!(nodes.trunk, Some(Node::new(30)));
        assert_eq!(nodes.leaves, Some(Node::new(32)));
        assert_eq!(nodes.fruit, None);
        assert_eq!(nodes.ground, None);
        assert_eq!(unresolved, vec!["golden_apple".to_string()]);
    }
}
