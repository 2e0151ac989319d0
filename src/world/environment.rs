// ============================================
// Environment - Приём готовых структур
// ============================================
// Передача структуры - единственная граница между потоками:
// после submit генератор больше ничего не трогает.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::pending::PendingStructure;
use super::world_changes::WorldChanges;

/// Окружение, принимающее структуры для отложенной вставки
pub trait Environment {
    fn submit(&self, structure: PendingStructure);
}

/// Очередь структур, применяемых к миру на стороне его владельца
#[derive(Default)]
pub struct StructureQueue {
    pending: Mutex<VecDeque<PendingStructure>>,
}

impl StructureQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<PendingStructure>> {
        // Структуры - просто данные, отравленный мьютекс не портит очередь
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Применить все накопленные структуры; каждая извлекается
    /// из очереди и применяется ровно один раз
    pub fn apply_pending(&self, world: &mut WorldChanges) -> usize {
        let drained: Vec<PendingStructure> = self.lock().drain(..).collect();
        for structure in &drained {
            let stats = world.apply_structure(structure);
            log::debug!(
                "applied structure at {:?} (bounds {:?}): {} written, {} skipped",
                structure.origin,
                structure.bounds(),
                stats.written,
                stats.skipped,
            );
        }
        drained.len()
    }
}

impl Environment for StructureQueue {
    fn submit(&self, structure: PendingStructure) {
        self.lock().push_back(structure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn submissions_from_many_threads_are_all_kept() {
        let queue = Arc::new(StructureQueue::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || queue.submit(PendingStructure::default()))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(queue.len(), 4);

        let mut world = WorldChanges::new();
        assert_eq!(queue.apply_pending(&mut world), 4);
        assert!(queue.is_empty());
    }
}
