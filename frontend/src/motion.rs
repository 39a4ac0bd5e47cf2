//! Entrance animation presets and the one-shot reveal state machine.
//!
//! Variants render to inline CSS: the hidden pose while an element waits to
//! be seen, then the shown pose plus a `transition` once it reveals. Reduced
//! motion collapses every duration, stagger and delay to zero.

use crate::capabilities::HostCapabilities;

/// Visual state an element is animated between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in px.
    pub y: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose { opacity: 1.0, y: 0.0 };

    pub const fn faded(y: f64) -> Self {
        Self { opacity: 0.0, y }
    }

    fn css(&self) -> String {
        format!("opacity: {}; transform: translateY({}px);", self.opacity, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Ease,
    EaseOut,
}

impl Ease {
    pub fn as_css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Ease => "ease",
            Ease::EaseOut => "ease-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
    /// Seconds before the transition starts.
    pub delay: f64,
}

impl Transition {
    pub const INSTANT: Transition = Transition {
        duration: 0.0,
        ease: Ease::Linear,
        delay: 0.0,
    };

    fn css(&self, extra_delay: f64) -> String {
        let delay = self.delay + extra_delay;
        if self.duration <= 0.0 && delay <= 0.0 {
            return "transition: none;".to_string();
        }
        let timing = format!("{}s {} {}s", self.duration, self.ease.as_css(), delay);
        format!("transition: opacity {timing}, transform {timing};")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub shown: Pose,
    pub transition: Transition,
}

impl Variant {
    pub fn collapsed(self) -> Self {
        Self {
            transition: Transition::INSTANT,
            ..self
        }
    }

    /// Inline style for an element in `state`, starting `extra_delay` seconds
    /// after the variant's own delay.
    pub fn style(&self, state: RevealState, extra_delay: f64) -> String {
        match state {
            RevealState::Hidden => self.hidden.css(),
            RevealState::Shown => {
                format!("{} {}", self.shown.css(), self.transition.css(extra_delay))
            }
        }
    }
}

/// Timing a group hands down to its children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub stagger_children: f64,
    pub delay_children: f64,
}

impl Stagger {
    pub const NONE: Stagger = Stagger {
        stagger_children: 0.0,
        delay_children: 0.0,
    };

    /// Seconds between the group revealing and child `index` starting.
    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}

const DURATION: f64 = 0.6;
const STAGGER_CHILDREN: f64 = 0.08;
const DELAY_CHILDREN: f64 = 0.05;

/// The shared preset set every section animates with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anims {
    pub fade_up: Variant,
    pub fade: Variant,
    pub stagger: Stagger,
    pub reduce: bool,
}

impl Anims {
    pub fn new(reduce: bool) -> Self {
        let fade_up = Variant {
            hidden: Pose::faded(24.0),
            shown: Pose::VISIBLE,
            transition: Transition {
                duration: DURATION,
                ease: Ease::EaseOut,
                delay: 0.0,
            },
        };
        let fade = Variant {
            hidden: Pose::faded(0.0),
            shown: Pose::VISIBLE,
            transition: Transition {
                duration: DURATION,
                ease: Ease::Ease,
                delay: 0.0,
            },
        };

        if reduce {
            return Self {
                fade_up: fade_up.collapsed(),
                fade: fade.collapsed(),
                stagger: Stagger::NONE,
                reduce,
            };
        }

        Self {
            fade_up,
            fade,
            stagger: Stagger {
                stagger_children: STAGGER_CHILDREN,
                delay_children: DELAY_CHILDREN,
            },
            reduce,
        }
    }

    /// One-off slide-in from `distance` px below.
    pub fn rise(&self, distance: f64, duration: f64, delay: f64) -> Variant {
        let variant = Variant {
            hidden: Pose::faded(distance),
            shown: Pose::VISIBLE,
            transition: Transition {
                duration,
                ease: Ease::Ease,
                delay,
            },
        };
        if self.reduce {
            variant.collapsed()
        } else {
            variant
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Shown,
}

/// What starts a reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealTrigger {
    /// As soon as the element is rendered.
    Mount,
    /// Once `amount` (0..=1) of the element is inside the viewport.
    InView { amount: f64 },
}

const DEFAULT_REVEAL_AMOUNT: f64 = 0.3;

impl Default for RevealTrigger {
    fn default() -> Self {
        RevealTrigger::InView {
            amount: DEFAULT_REVEAL_AMOUNT,
        }
    }
}

/// Reduced motion starts every element shown, whatever its visibility.
pub fn initial_reveal_state(caps: HostCapabilities) -> RevealState {
    if caps.reduced_motion {
        RevealState::Shown
    } else {
        RevealState::Hidden
    }
}

/// What a reveal does right after its element mounts, before any
/// visibility report arrives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MountAction {
    Keep,
    /// Show now. With `flush` the hidden pose is committed first so the
    /// switch still transitions.
    Show { flush: bool },
    /// Wait until `amount` of the element is in view.
    Watch { amount: f64 },
}

pub fn reveal_on_mount(state: RevealState, caps: HostCapabilities, trigger: RevealTrigger) -> MountAction {
    if state == RevealState::Shown {
        return MountAction::Keep;
    }
    match trigger {
        RevealTrigger::Mount => MountAction::Show { flush: true },
        // Content must not stay hidden on a host that cannot report visibility.
        RevealTrigger::InView { .. } if caps.reduced_motion || !caps.intersection_observer => {
            MountAction::Show { flush: false }
        }
        RevealTrigger::InView { amount } => MountAction::Watch { amount },
    }
}

/// Browsers report ratios just under the threshold that fired the callback.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-shot `Hidden -> Shown`. Scrolling back out never hides again.
#[derive(Debug)]
pub struct RevealTracker {
    state: RevealState,
    amount: f64,
    attached: bool,
}

impl RevealTracker {
    pub fn new(amount: f64) -> Self {
        Self {
            state: RevealState::Hidden,
            amount: if amount.is_finite() {
                amount.clamp(0.0, 1.0)
            } else {
                DEFAULT_REVEAL_AMOUNT
            },
            attached: true,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Returns true only for the report that reveals the element.
    pub fn on_visibility(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if !self.attached || self.state == RevealState::Shown || !is_intersecting {
            return false;
        }
        if ratio + RATIO_TOLERANCE < self.amount {
            return false;
        }
        self.state = RevealState::Shown;
        true
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn stagger_spaces_children_after_initial_delay() {
        let stagger = Anims::new(false).stagger;
        assert!(close(stagger.child_delay(0), 0.05));
        assert!(close(stagger.child_delay(1), 0.05 + 0.08));
        assert!(close(stagger.child_delay(2), 0.05 + 0.16));
    }

    #[test]
    fn reduced_motion_zeroes_every_timing() {
        let anims = Anims::new(true);
        assert_eq!(anims.stagger, Stagger::NONE);
        for variant in [anims.fade_up, anims.fade, anims.rise(18.0, 0.6, 0.05)] {
            assert_eq!(variant.transition, Transition::INSTANT);
            let style = variant.style(RevealState::Shown, anims.stagger.child_delay(2));
            assert!(style.contains("opacity: 1;"), "{}", style);
            assert!(style.contains("translateY(0px)"), "{}", style);
            assert!(style.ends_with("transition: none;"), "{}", style);
        }
    }

    #[test]
    fn fade_up_moves_from_below() {
        let fade_up = Anims::new(false).fade_up;
        assert_eq!(
            fade_up.style(RevealState::Hidden, 0.0),
            "opacity: 0; transform: translateY(24px);"
        );
        assert_eq!(
            fade_up.style(RevealState::Shown, 0.13),
            "opacity: 1; transform: translateY(0px); \
             transition: opacity 0.6s ease-out 0.13s, transform 0.6s ease-out 0.13s;"
        );
    }

    #[test]
    fn rise_keeps_own_delay() {
        let tile = Anims::new(false).rise(10.0, 0.5, 0.05);
        assert_eq!(tile.hidden, Pose::faded(10.0));
        assert!(tile
            .style(RevealState::Shown, 0.0)
            .contains("opacity 0.5s ease 0.05s"));
    }

    #[test]
    fn reveal_waits_for_amount() {
        let mut tracker = RevealTracker::new(0.4);
        assert!(!tracker.on_visibility(true, 0.1));
        assert_eq!(tracker.state(), RevealState::Hidden);
        assert!(tracker.on_visibility(true, 0.3995));
        assert_eq!(tracker.state(), RevealState::Shown);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(0.3);
        assert!(tracker.on_visibility(true, 0.5));
        assert!(!tracker.on_visibility(false, 0.0));
        assert!(!tracker.on_visibility(true, 0.9));
        assert_eq!(tracker.state(), RevealState::Shown);
    }

    #[test]
    fn non_intersecting_reports_never_reveal() {
        let mut tracker = RevealTracker::new(0.0);
        assert!(!tracker.on_visibility(false, 0.0));
        assert_eq!(tracker.state(), RevealState::Hidden);
    }

    #[test]
    fn non_finite_amount_falls_back_to_default() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut tracker = RevealTracker::new(amount);
            assert!(!tracker.on_visibility(true, 0.1), "{}", amount);
            assert_eq!(tracker.state(), RevealState::Hidden);
            assert!(tracker.on_visibility(true, 0.3), "{}", amount);
        }
    }

    fn caps(reduced_motion: bool, intersection_observer: bool) -> HostCapabilities {
        HostCapabilities {
            intersection_observer,
            reduced_motion,
        }
    }

    /// State an element settles in when no visibility report ever arrives.
    fn settled_without_reports(caps: HostCapabilities, trigger: RevealTrigger) -> RevealState {
        let state = initial_reveal_state(caps);
        match reveal_on_mount(state, caps, trigger) {
            MountAction::Show { .. } => RevealState::Shown,
            MountAction::Keep | MountAction::Watch { .. } => state,
        }
    }

    #[test]
    fn reduced_motion_starts_shown_for_every_trigger() {
        for observer in [true, false] {
            let host = caps(true, observer);
            assert_eq!(initial_reveal_state(host), RevealState::Shown);
            for trigger in [RevealTrigger::Mount, RevealTrigger::InView { amount: 0.4 }] {
                assert_eq!(reveal_on_mount(RevealState::Shown, host, trigger), MountAction::Keep);
                assert_eq!(settled_without_reports(host, trigger), RevealState::Shown);
            }
        }
    }

    #[test]
    fn mount_trigger_shows_after_flushing_hidden_pose() {
        for observer in [true, false] {
            let host = caps(false, observer);
            assert_eq!(initial_reveal_state(host), RevealState::Hidden);
            assert_eq!(
                reveal_on_mount(RevealState::Hidden, host, RevealTrigger::Mount),
                MountAction::Show { flush: true }
            );
            assert_eq!(settled_without_reports(host, RevealTrigger::Mount), RevealState::Shown);
        }
    }

    #[test]
    fn missing_observer_reveals_in_view_content_on_mount() {
        let host = caps(false, false);
        let trigger = RevealTrigger::InView { amount: 0.35 };
        assert_eq!(
            reveal_on_mount(RevealState::Hidden, host, trigger),
            MountAction::Show { flush: false }
        );
        assert_eq!(settled_without_reports(host, trigger), RevealState::Shown);
    }

    #[test]
    fn observer_host_waits_for_visibility() {
        let host = caps(false, true);
        let trigger = RevealTrigger::InView { amount: 0.35 };
        assert_eq!(
            reveal_on_mount(RevealState::Hidden, host, trigger),
            MountAction::Watch { amount: 0.35 }
        );
        assert_eq!(settled_without_reports(host, trigger), RevealState::Hidden);
    }

    #[test]
    fn detached_tracker_ignores_late_reports() {
        let mut tracker = RevealTracker::new(0.3);
        tracker.detach();
        assert!(!tracker.on_visibility(true, 1.0));
        assert_eq!(tracker.state(), RevealState::Hidden);
    }
}
