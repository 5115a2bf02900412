#![allow(dead_code)]

use std::sync::Mutex;
use vecta::Callback;

// ============================================================================
// Test Callbacks
// ============================================================================

/// Records `(tag, id)` pairs into a shared log so tests can check both which
/// handler ran and in what order.
pub struct TaggedCallback<'a> {
    pub tag: &'static str,
    pub log: &'a Mutex<Vec<(&'static str, usize)>>,
}

impl Callback for TaggedCallback<'_> {
    fn on_id(&self, id: usize) {
        self.log.lock().unwrap().push((self.tag, id));
    }
}

pub fn tagged<'a>(
    tag: &'static str,
    log: &'a Mutex<Vec<(&'static str, usize)>>,
) -> TaggedCallback<'a> {
    TaggedCallback { tag, log }
}

pub fn entries(log: &Mutex<Vec<(&'static str, usize)>>) -> Vec<(&'static str, usize)> {
    log.lock().unwrap().clone()
}
