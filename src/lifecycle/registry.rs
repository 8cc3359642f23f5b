//! Phase-ordered registry.
//!
//! # Responsibilities
//! - Keep lifecycle-capable components sorted by ascending phase
//! - Preserve insertion order among equal phases
//! - Hand the whole sequence out via snapshot-and-clear
//!
//! # Design Decisions
//! - Forward iteration is init order, backward iteration is shutdown order
//! - No individual removal; the only way out is `snapshot_and_clear`

use crate::component::PhasedComponent;

/// Components sorted by non-decreasing phase.
#[derive(Debug, Default)]
pub struct PhaseRegistry {
    components: Vec<PhasedComponent>,
}

impl PhaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            components: Vec::with_capacity(capacity),
        }
    }

    /// Insert after every component whose phase is lower or equal.
    pub fn insert(&mut self, component: PhasedComponent) {
        let phase = component.phase();
        let at = self.components.partition_point(|c| c.phase() <= phase);
        self.components.insert(at, component);
    }

    /// Take the current sequence and leave the registry empty.
    pub fn snapshot_and_clear(&mut self) -> Vec<PhasedComponent> {
        std::mem::take(&mut self.components)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Components in init order.
    pub fn iter(&self) -> std::slice::Iter<'_, PhasedComponent> {
        self.components.iter()
    }
}

impl<'a> IntoIterator for &'a PhaseRegistry {
    type Item = &'a PhasedComponent;
    type IntoIter = std::slice::Iter<'a, PhasedComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::component::{Component, ComponentError, ComponentRecord, Lifecycle};

    struct Phased(i32);
    impl Component for Phased {
        fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
            Some(self)
        }
    }
    impl Lifecycle for Phased {
        fn phase(&self) -> i32 {
            self.0
        }
        fn init(&self) -> Result<(), ComponentError> {
            Ok(())
        }
        fn shutdown(&self) -> Result<(), ComponentError> {
            Ok(())
        }
    }

    fn phased(name: &str, phase: i32) -> PhasedComponent {
        ComponentRecord::new(Arc::new(Phased(phase)), name)
            .into_phased()
            .unwrap()
    }

    fn names(registry: &PhaseRegistry) -> Vec<&str> {
        registry.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_sorted_insert() {
        let mut registry = PhaseRegistry::new();
        registry.insert(phased("x", 0));
        registry.insert(phased("y", 5));
        registry.insert(phased("z", -1));
        registry.insert(phased("w", 2));

        assert_eq!(names(&registry), vec!["z", "x", "w", "y"]);
        let phases: Vec<i32> = registry.iter().map(|c| c.phase()).collect();
        assert!(phases.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_equal_phases_keep_insertion_order() {
        let mut registry = PhaseRegistry::new();
        registry.insert(phased("a", 1));
        registry.insert(phased("b", 0));
        registry.insert(phased("c", 1));
        registry.insert(phased("d", 1));
        registry.insert(phased("e", 0));

        assert_eq!(names(&registry), vec!["b", "e", "a", "c", "d"]);
    }

    #[test]
    fn test_snapshot_and_clear() {
        let mut registry = PhaseRegistry::with_capacity(2);
        registry.insert(phased("b", 2));
        registry.insert(phased("a", 1));
        assert_eq!(registry.len(), 2);

        let snapshot = registry.snapshot_and_clear();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        let snapshot_names: Vec<&str> = snapshot.iter().map(|c| c.name()).collect();
        assert_eq!(snapshot_names, vec!["a", "b"]);

        // Refilling in init order reproduces the same sequence.
        for component in snapshot {
            registry.insert(component);
        }
        assert_eq!(names(&registry), vec!["a", "b"]);
    }
}
