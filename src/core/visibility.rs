use std::collections::HashSet;

/// One-shot visibility trigger: an element fires the first time its
/// intersection ratio reaches the threshold, and never again.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTracker {
    threshold: f64,
    triggered: HashSet<String>,
}

impl VisibilityTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            triggered: HashSet::new(),
        }
    }

    pub fn should_trigger(&mut self, element_id: &str, intersection_ratio: f64) -> bool {
        if intersection_ratio < self.threshold || self.has_triggered(element_id) {
            return false;
        }
        self.triggered.insert(element_id.to_string())
    }

    pub fn has_triggered(&self, element_id: &str) -> bool {
        self.triggered.contains(element_id)
    }

    /// Forgets everything, used when the tracked elements are re-rendered.
    pub fn reset(&mut self) {
        self.triggered.clear();
    }
}
