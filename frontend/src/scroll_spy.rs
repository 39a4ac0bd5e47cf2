use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, warn};
use yew::prelude::*;

use crate::capabilities::HostCapabilities;
use crate::observer::{self, ObserverHandle};
use crate::sections::SectionRegistry;

/// Shrinks the observed root to the line 45% down the viewport, so a section
/// only counts while it crosses the middle of the screen.
pub const SPY_ROOT_MARGIN: &str = "-45% 0px -55% 0px";
pub const SPY_THRESHOLDS: [f64; 4] = [0.0, 0.3, 0.6, 1.0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntersectionReport {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionReport {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

/// Tracks which section is active. The only transition is
/// `section intersecting -> active := section`, so within a batch the last
/// intersecting report wins.
#[derive(Debug)]
pub struct ScrollSpy {
    active_id: String,
    attached: bool,
}

impl ScrollSpy {
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            active_id: registry.first_id().unwrap_or_default().to_string(),
            attached: true,
        }
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// Applies one report. Returns whether the active id changed.
    pub fn on_intersection(&mut self, report: &IntersectionReport) -> bool {
        if !self.attached || !report.is_intersecting || report.id == self.active_id {
            return false;
        }
        self.active_id.clone_from(&report.id);
        true
    }

    pub fn apply_batch<I>(&mut self, reports: I) -> bool
    where
        I: IntoIterator<Item = IntersectionReport>,
    {
        reports
            .into_iter()
            .fold(false, |changed, report| self.on_intersection(&report) || changed)
    }

    /// Stops reacting to reports. Called when the owning page unmounts.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Whether the spy can follow scrolling on this host. Without an observer
/// the indicator keeps the registry's first id for the life of the page.
pub fn tracks_sections(caps: HostCapabilities) -> bool {
    caps.intersection_observer
}

struct SpyWatch {
    handle: ObserverHandle,
    spy: Rc<RefCell<ScrollSpy>>,
}

impl SpyWatch {
    fn stop(self) {
        self.handle.disconnect();
        self.spy.borrow_mut().detach();
    }
}

fn watch_sections(registry: &SectionRegistry, active: UseStateHandle<String>) -> Option<SpyWatch> {
    let document = web_sys::window().and_then(|w| w.document())?;

    let mut targets = Vec::new();
    for id in registry.ids() {
        match document.get_element_by_id(id) {
            Some(element) => targets.push(element),
            None => warn!("Section #{} has no matching element, it will never become active", id),
        }
    }

    let spy = Rc::new(RefCell::new(ScrollSpy::new(registry)));
    let handle = {
        let spy = spy.clone();
        observer::observe(&targets, Some(SPY_ROOT_MARGIN), &SPY_THRESHOLDS, move |entries, _| {
            let reports = entries
                .iter()
                .map(|entry| IntersectionReport::new(entry.target().id(), entry.is_intersecting()));
            let mut spy = spy.borrow_mut();
            if spy.apply_batch(reports) {
                debug!("Active section: {}", spy.active_id());
                active.set(spy.active_id().to_string());
            }
        })
    };

    match handle {
        Ok(handle) => Some(SpyWatch { handle, spy }),
        Err(err) => {
            error!("Failed to create section observer: {:?}", err);
            None
        }
    }
}

/// Returns the id of the section currently crossing the viewport centre.
/// Starts at the first registered id and stays there if the host cannot
/// observe intersections.
#[hook]
pub fn use_scroll_spy(registry: &SectionRegistry, caps: HostCapabilities) -> String {
    let active = use_state(|| ScrollSpy::new(registry).active_id().to_string());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(registry, caps)| {
                if let Err(err) = registry.validate() {
                    warn!("Section registry problem: {}", err);
                }
                let watch = if tracks_sections(*caps) {
                    watch_sections(registry, active)
                } else {
                    warn!("IntersectionObserver unavailable, section indicator stays on the first section");
                    None
                };
                move || {
                    if let Some(watch) = watch {
                        watch.stop();
                    }
                }
            },
            (registry.clone(), caps),
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(&SectionRegistry::courier())
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(spy().active_id(), "about");
        assert_eq!(ScrollSpy::new(&SectionRegistry::portfolio()).active_id(), "about");
    }

    #[test]
    fn intersecting_report_becomes_active() {
        let mut spy = spy();
        assert!(spy.on_intersection(&IntersectionReport::new("features", true)));
        assert_eq!(spy.active_id(), "features");
    }

    #[test]
    fn leaving_reports_are_ignored() {
        let mut spy = spy();
        spy.on_intersection(&IntersectionReport::new("how", true));
        assert!(!spy.on_intersection(&IntersectionReport::new("how", false)));
        assert_eq!(spy.active_id(), "how");
    }

    #[test]
    fn last_intersecting_report_in_batch_wins() {
        let mut spy = spy();
        let changed = spy.apply_batch(vec![
            IntersectionReport::new("how", true),
            IntersectionReport::new("support", true),
            IntersectionReport::new("features", false),
        ]);
        assert!(changed);
        assert_eq!(spy.active_id(), "support");
    }

    #[test]
    fn last_intersecting_across_many_batches() {
        let mut spy = spy();
        let batches = vec![
            vec![IntersectionReport::new("how", true)],
            vec![
                IntersectionReport::new("how", false),
                IntersectionReport::new("features", true),
            ],
            vec![IntersectionReport::new("cta", false)],
        ];
        for batch in batches {
            spy.apply_batch(batch);
        }
        assert_eq!(spy.active_id(), "features");
    }

    #[test]
    fn batch_returning_to_same_section_reports_no_change() {
        let mut spy = spy();
        assert!(!spy.apply_batch(vec![IntersectionReport::new("about", true)]));
    }

    #[test]
    fn host_without_observer_keeps_first_section() {
        for reduced_motion in [false, true] {
            let host = HostCapabilities {
                intersection_observer: false,
                reduced_motion,
            };
            assert!(!tracks_sections(host));
        }
        assert!(tracks_sections(HostCapabilities {
            intersection_observer: true,
            reduced_motion: false,
        }));
        // With no watcher nothing ever reaches the spy, so the initial id stands.
        for registry in [SectionRegistry::courier(), SectionRegistry::portfolio()] {
            assert_eq!(Some(ScrollSpy::new(&registry).active_id()), registry.first_id());
        }
    }

    #[test]
    fn detached_spy_ignores_late_reports() {
        let mut spy = spy();
        spy.on_intersection(&IntersectionReport::new("how", true));
        spy.detach();
        assert!(!spy.apply_batch(vec![IntersectionReport::new("cta", true)]));
        assert_eq!(spy.active_id(), "how");
    }
}
