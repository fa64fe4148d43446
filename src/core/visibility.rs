//! Fire-once viewport visibility tracking
//!
//! `VisibilityTrigger` holds the state behind every scroll-revealed section:
//! which watcher is currently attached, the options it was created with and
//! whether the region has ever been seen. The browser binding in
//! `ui::visibility` feeds intersection samples into it; all decisions about
//! firing and reconnecting are made here so they can be tested natively.
//!
//! Semantics:
//! - a watcher fires at most once, on its first sample that is intersecting
//!   with a ratio at or above the threshold
//! - firing releases the watcher immediately
//! - changing the options re-creates an active watcher
//! - visibility never goes back to `false`

/// Default fraction of the target that must be on screen
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default root margin, shrinks the viewport bottom so reveals start slightly late
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Configuration of a visibility watcher
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the target area (0.0..=1.0) that counts as visible
    pub threshold: f64,
    /// CSS margin applied to the viewport when computing intersections
    pub root_margin: String,
}

impl VisibilityOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            ..Self::default()
        }
    }

    pub fn root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// Identifier of a single watcher instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatcherId(u64);

impl WatcherId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// One intersection observation reported by the browser
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }
}

/// Visibility state of one observed region
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    options: VisibilityOptions,
    visible: bool,
    active: Option<WatcherId>,
    next_id: u64,
}

impl VisibilityTrigger {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options: VisibilityOptions {
                threshold: clamp_threshold(options.threshold),
                ..options
            },
            visible: false,
            active: None,
            next_id: 0,
        }
    }

    /// Attach a fresh watcher, releasing the current one first.
    ///
    /// Returns `None` once the region has been seen: there is nothing left
    /// to observe.
    pub fn attach(&mut self) -> Option<WatcherId> {
        self.active = None;
        if self.visible {
            return None;
        }
        let id = WatcherId(self.next_id);
        self.next_id += 1;
        self.active = Some(id);
        Some(id)
    }

    /// Replace the options, re-creating the active watcher if they changed.
    ///
    /// Returns the id of the replacement watcher when one was created.
    pub fn reconfigure(&mut self, options: VisibilityOptions) -> Option<WatcherId> {
        let options = VisibilityOptions {
            threshold: clamp_threshold(options.threshold),
            ..options
        };
        if options == self.options {
            return None;
        }
        self.options = options;
        if self.active.is_some() {
            self.attach()
        } else {
            None
        }
    }

    /// Drop the current watcher, e.g. when the element is unbound.
    pub fn release(&mut self) -> Option<WatcherId> {
        self.active.take()
    }

    /// Feed an intersection sample for `watcher`.
    ///
    /// Returns `true` only for the sample that makes the region visible; the
    /// caller must disconnect the underlying observer then.
    pub fn on_intersection(&mut self, watcher: WatcherId, sample: IntersectionSample) -> bool {
        if self.visible || self.active != Some(watcher) {
            return false;
        }
        if !sample.is_intersecting || sample.ratio < self.options.threshold {
            return false;
        }
        self.visible = true;
        self.active = None;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active_watcher(&self) -> Option<WatcherId> {
        self.active
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VisibilityOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_without_watcher() {
        let trigger = VisibilityTrigger::default();

        assert!(!trigger.is_visible());
        assert!(trigger.active_watcher().is_none());
        assert_eq!(trigger.options().threshold, DEFAULT_THRESHOLD);
        assert_eq!(trigger.options().root_margin, DEFAULT_ROOT_MARGIN);
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let mut trigger = VisibilityTrigger::new(VisibilityOptions::with_threshold(0.5));
        let watcher = trigger.attach().unwrap();

        assert!(!trigger.on_intersection(watcher, IntersectionSample::new(true, 0.2)));
        assert!(!trigger.is_visible());

        assert!(trigger.on_intersection(watcher, IntersectionSample::new(true, 0.5)));
        assert!(trigger.is_visible());
        assert!(trigger.active_watcher().is_none());

        // Leaving and re-entering the viewport changes nothing
        assert!(!trigger.on_intersection(watcher, IntersectionSample::new(false, 0.0)));
        assert!(!trigger.on_intersection(watcher, IntersectionSample::new(true, 1.0)));
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_not_intersecting_never_fires() {
        let mut trigger = VisibilityTrigger::default();
        let watcher = trigger.attach().unwrap();

        assert!(!trigger.on_intersection(watcher, IntersectionSample::new(false, 0.9)));
        assert!(!trigger.is_visible());
        assert_eq!(trigger.active_watcher(), Some(watcher));
    }

    #[test]
    fn test_stale_watcher_is_ignored() {
        let mut trigger = VisibilityTrigger::default();
        let first = trigger.attach().unwrap();
        let second = trigger.attach().unwrap();

        assert_ne!(first, second);
        assert!(!trigger.on_intersection(first, IntersectionSample::new(true, 1.0)));
        assert!(!trigger.is_visible());
        assert!(trigger.on_intersection(second, IntersectionSample::new(true, 1.0)));
    }

    #[test]
    fn test_reconfigure_recreates_active_watcher() {
        let mut trigger = VisibilityTrigger::default();
        let first = trigger.attach().unwrap();

        let second = trigger
            .reconfigure(VisibilityOptions::with_threshold(0.6))
            .expect("active watcher should be re-created");

        assert_ne!(first, second);
        assert_eq!(trigger.active_watcher(), Some(second));
        assert_eq!(trigger.options().threshold, 0.6);
        assert!(!trigger.on_intersection(first, IntersectionSample::new(true, 1.0)));
    }

    #[test]
    fn test_reconfigure_with_same_options_keeps_watcher() {
        let mut trigger = VisibilityTrigger::default();
        let watcher = trigger.attach().unwrap();

        assert!(trigger.reconfigure(VisibilityOptions::default()).is_none());
        assert_eq!(trigger.active_watcher(), Some(watcher));
    }

    #[test]
    fn test_reconfigure_without_watcher_only_stores_options() {
        let mut trigger = VisibilityTrigger::default();

        assert!(
            trigger
                .reconfigure(VisibilityOptions::default().root_margin("0px"))
                .is_none()
        );
        assert!(trigger.active_watcher().is_none());
        assert_eq!(trigger.options().root_margin, "0px");
    }

    #[test]
    fn test_no_new_watcher_after_visible() {
        let mut trigger = VisibilityTrigger::default();
        let watcher = trigger.attach().unwrap();
        trigger.on_intersection(watcher, IntersectionSample::new(true, 1.0));

        assert!(trigger.attach().is_none());
        assert!(
            trigger
                .reconfigure(VisibilityOptions::with_threshold(0.9))
                .is_none()
        );
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_release_drops_watcher() {
        let mut trigger = VisibilityTrigger::default();
        let watcher = trigger.attach().unwrap();

        assert_eq!(trigger.release(), Some(watcher));
        assert!(trigger.release().is_none());
        assert!(!trigger.on_intersection(watcher, IntersectionSample::new(true, 1.0)));
        assert!(!trigger.is_visible());
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(VisibilityOptions::with_threshold(1.7).threshold, 1.0);
        assert_eq!(VisibilityOptions::with_threshold(-0.3).threshold, 0.0);
        assert_eq!(
            VisibilityOptions::with_threshold(f64::NAN).threshold,
            DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn test_zero_threshold_fires_on_edge_contact() {
        let mut trigger = VisibilityTrigger::new(VisibilityOptions::with_threshold(0.0));
        let watcher = trigger.attach().unwrap();

        assert!(trigger.on_intersection(watcher, IntersectionSample::new(true, 0.0)));
    }
}
