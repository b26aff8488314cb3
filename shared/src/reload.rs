use crate::error::SpinError;

/// Bookkeeping for a value that is reloaded from the server in the
/// background, where reloads may overlap.
///
/// Every reload gets a generation number. Only the newest generation may
/// update the value; a failed reload keeps the last good value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReloadTracker<T> {
    value: Option<T>,
    latest: u32,
    settled: u32,
}

impl<T> Default for ReloadTracker<T> {
    fn default() -> Self {
        Self { value: None, latest: 0, settled: 0 }
    }
}

impl<T> ReloadTracker<T> {
    /// Starts a reload and returns its generation.
    pub fn begin(&mut self) -> u32 {
        self.latest += 1;
        self.latest
    }

    /// Records the outcome of reload `generation`. Returns `false` when the
    /// outcome was dropped because a newer reload has been started since.
    pub fn finish(&mut self, generation: u32, outcome: Result<T, SpinError>) -> bool {
        if generation < self.latest {
            return false;
        }
        if let Ok(value) = outcome {
            self.value = Some(value);
        }
        self.settled = generation;
        true
    }

    /// Local edits (for example after a successful POST) apply immediately.
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) {
        if let Some(value) = self.value.as_mut() {
            edit(value);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.settled < self.latest
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_fills_the_value() {
        let mut tracker = ReloadTracker::default();
        assert!(!tracker.is_loading());

        let generation = tracker.begin();
        assert!(tracker.is_loading());
        assert_eq!(tracker.value(), None);

        assert!(tracker.finish(generation, Ok(5)));
        assert_eq!(tracker.value(), Some(&5));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn failed_reload_keeps_last_value() {
        let mut tracker = ReloadTracker::default();
        let first = tracker.begin();
        tracker.finish(first, Ok(5));

        let second = tracker.begin();
        assert!(tracker.finish(second, Err(SpinError::Status(500))));
        assert_eq!(tracker.value(), Some(&5));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn reload_after_a_spin_replaces_the_value() {
        let mut tracker = ReloadTracker::default();
        let mount = tracker.begin();
        tracker.finish(mount, Ok(1));

        let after_spin = tracker.begin();
        assert!(tracker.is_loading());
        assert_eq!(tracker.value(), Some(&1));
        tracker.finish(after_spin, Ok(2));
        assert_eq!(tracker.value(), Some(&2));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut tracker = ReloadTracker::default();
        let older = tracker.begin();
        let newer = tracker.begin();

        assert!(tracker.finish(newer, Ok("new")));
        assert!(!tracker.finish(older, Ok("old")));
        assert_eq!(tracker.value(), Some(&"new"));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn still_loading_until_the_newest_reload_settles() {
        let mut tracker = ReloadTracker::default();
        let older = tracker.begin();
        let newer = tracker.begin();

        assert!(!tracker.finish(older, Ok(1)));
        assert!(tracker.is_loading());
        assert_eq!(tracker.value(), None);

        tracker.finish(newer, Ok(2));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn update_edits_only_a_loaded_value() {
        let mut tracker: ReloadTracker<Vec<u32>> = ReloadTracker::default();
        tracker.update(|v| v.push(1));
        assert_eq!(tracker.value(), None);

        let generation = tracker.begin();
        tracker.finish(generation, Ok(vec![]));
        tracker.update(|v| v.push(1));
        assert_eq!(tracker.value(), Some(&vec![1]));
    }
}
