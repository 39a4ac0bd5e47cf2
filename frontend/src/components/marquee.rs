use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::js_sys::Date;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::capabilities::use_host_capabilities;
use crate::config;

/// The track holds every item twice, so sliding it by half its height lands
/// on a frame identical to the start.
const LOOP_SPAN_PERCENT: f64 = 50.0;
const FRAME_MS: u32 = 16;

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeSpec {
    pub items: Vec<String>,
    pub cycle_seconds: f64,
}

impl MarqueeSpec {
    pub fn new<I, S>(items: I, cycle_seconds: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            cycle_seconds,
        }
    }

    fn has_cycle(&self) -> bool {
        self.cycle_seconds.is_finite() && self.cycle_seconds > 0.0
    }

    pub fn is_animated(&self, reduced_motion: bool) -> bool {
        !reduced_motion && !self.items.is_empty() && self.has_cycle()
    }

    /// Items in render order: doubled while looping, as-is when static.
    pub fn rendered(&self, reduced_motion: bool) -> Vec<&str> {
        let once = self.items.iter().map(String::as_str);
        if self.is_animated(reduced_motion) {
            once.clone().chain(once).collect()
        } else {
            once.collect()
        }
    }

    /// Track offset in percent of its own height, `elapsed_seconds` into the
    /// loop. Linear within each cycle, back at 0 every `cycle_seconds`.
    pub fn offset_percent(&self, elapsed_seconds: f64) -> f64 {
        if self.items.is_empty() || !self.has_cycle() || !elapsed_seconds.is_finite() {
            return 0.0;
        }
        let phase = elapsed_seconds.rem_euclid(self.cycle_seconds) / self.cycle_seconds;
        -LOOP_SPAN_PERCENT * phase
    }
}

/// Wall-clock origin of a running loop.
#[derive(Debug)]
pub struct MarqueeClock {
    started_ms: f64,
    running: bool,
}

impl MarqueeClock {
    pub fn start(now_ms: f64) -> Self {
        Self {
            started_ms: now_ms,
            running: true,
        }
    }

    pub fn offset_at(&self, spec: &MarqueeSpec, now_ms: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        Some(spec.offset_percent((now_ms - self.started_ms) / 1000.0))
    }

    /// Offset for the next frame, or `None` while the marquee window has no
    /// height (hidden by a media query) so no re-render is scheduled.
    pub fn frame_offset(&self, spec: &MarqueeSpec, now_ms: f64, window_height_px: i32) -> Option<f64> {
        if window_height_px <= 0 {
            return None;
        }
        self.offset_at(spec, now_ms)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[derive(Properties, PartialEq)]
pub struct KeywordMarqueeProps {
    pub items: &'static [&'static str],
    #[prop_or(config::MARQUEE_CYCLE_SECONDS)]
    pub cycle_seconds: f64,
}

/// Endless upward scroll of short keywords, or a plain list under reduced
/// motion.
#[function_component(KeywordMarquee)]
pub fn keyword_marquee(props: &KeywordMarqueeProps) -> Html {
    let caps = use_host_capabilities();
    let spec = MarqueeSpec::new(props.items.iter().copied(), props.cycle_seconds);
    let animated = spec.is_animated(caps.reduced_motion);
    let offset = use_state(|| 0.0_f64);
    let window_ref = use_node_ref();

    {
        let offset = offset.clone();
        let window_ref = window_ref.clone();
        use_effect_with_deps(
            move |(animated, spec)| {
                let mut ticker = None;
                if *animated {
                    debug!("Starting marquee loop over {} items", spec.items.len());
                    let clock = Rc::new(RefCell::new(MarqueeClock::start(Date::now())));
                    let interval = {
                        let clock = clock.clone();
                        let spec = spec.clone();
                        Interval::new(FRAME_MS, move || {
                            let height = window_ref
                                .cast::<HtmlElement>()
                                .map(|el| el.offset_height())
                                .unwrap_or(0);
                            if let Some(value) = clock.borrow().frame_offset(&spec, Date::now(), height) {
                                offset.set(value);
                            }
                        })
                    };
                    ticker = Some((interval, clock));
                }
                move || {
                    if let Some((interval, clock)) = ticker {
                        drop(interval);
                        clock.borrow_mut().stop();
                    }
                }
            },
            (animated, spec.clone()),
        );
    }

    let body = if spec.items.is_empty() {
        html! {}
    } else if animated {
        html! {
            <div class="marquee-window" ref={window_ref}>
                <div
                    class="marquee-track"
                    aria-hidden="true"
                    style={format!("transform: translateY({}%);", *offset)}
                >
                    { for spec.rendered(false).into_iter().map(|item| html! {
                        <div class="marquee-item">{ item }</div>
                    }) }
                </div>
            </div>
        }
    } else {
        html! {
            <ul class="marquee-static">
                { for spec.rendered(true).into_iter().map(|item| html! {
                    <li>{ item }</li>
                }) }
            </ul>
        }
    };

    html! {
        <div class="marquee">
            <style>
                {r#"
                .marquee {
                    font-size: 1.5rem;
                    font-weight: 600;
                    opacity: 0.8;
                }
                .marquee-window {
                    height: 220px;
                    overflow: hidden;
                }
                .marquee-track {
                    display: flex;
                    flex-direction: column;
                    will-change: transform;
                }
                /* padding instead of gap keeps both halves the same height */
                .marquee-item {
                    padding-bottom: 0.5rem;
                }
                .marquee-static {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .marquee-static li + li {
                    margin-top: 0.5rem;
                }
                "#}
            </style>
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> MarqueeSpec {
        MarqueeSpec::new(["a", "b", "c"], 12.0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn animated_track_repeats_items_once() {
        assert_eq!(abc().rendered(false), ["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn reduced_motion_renders_items_once_without_motion() {
        let spec = abc();
        assert!(!spec.is_animated(true));
        assert_eq!(spec.rendered(true), ["a", "b", "c"]);
    }

    #[test]
    fn offset_is_linear_within_a_cycle() {
        let spec = abc();
        assert!(close(spec.offset_percent(0.0), 0.0));
        assert!(close(spec.offset_percent(3.0), -12.5));
        assert!(close(spec.offset_percent(6.0), -25.0));
        assert!(close(spec.offset_percent(9.0), -37.5));
        assert!(spec.offset_percent(12.0 - 1e-6) < -49.99);
    }

    #[test]
    fn offset_restarts_at_each_cycle() {
        let spec = abc();
        assert!(close(spec.offset_percent(12.0), 0.0));
        assert!(close(spec.offset_percent(15.0), spec.offset_percent(3.0)));
        assert!(close(spec.offset_percent(123.0), spec.offset_percent(3.0)));
    }

    #[test]
    fn empty_marquee_never_animates() {
        let spec = MarqueeSpec::new(Vec::<String>::new(), 12.0);
        assert!(!spec.is_animated(false));
        assert!(spec.rendered(false).is_empty());
        assert_eq!(spec.offset_percent(5.0), 0.0);
    }

    #[test]
    fn degenerate_cycle_stays_still() {
        for cycle in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let spec = MarqueeSpec::new(["a"], cycle);
            assert!(!spec.is_animated(false));
            assert_eq!(spec.offset_percent(4.0), 0.0);
        }
    }

    #[test]
    fn clock_measures_from_start() {
        let clock = MarqueeClock::start(1_000.0);
        let offset = clock.offset_at(&abc(), 7_000.0).unwrap();
        assert!(close(offset, -25.0));
    }

    #[test]
    fn hidden_window_skips_frames_and_resumes_in_phase() {
        let clock = MarqueeClock::start(0.0);
        let spec = abc();
        assert_eq!(clock.frame_offset(&spec, 3_000.0, 0), None);
        let resumed = clock.frame_offset(&spec, 9_000.0, 220).unwrap();
        assert!(close(resumed, spec.offset_percent(9.0)));
    }

    #[test]
    fn stopped_clock_yields_nothing() {
        let mut clock = MarqueeClock::start(0.0);
        clock.stop();
        assert_eq!(clock.offset_at(&abc(), 3_000.0), None);
    }
}
