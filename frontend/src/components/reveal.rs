use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::capabilities::use_host_capabilities;
use crate::motion::{
    initial_reveal_state, reveal_on_mount, Anims, MountAction, RevealState, RevealTracker, RevealTrigger,
    Stagger, Variant,
};
use crate::observer::{self, ObserverHandle};

/// The preset variants, collapsed when the user prefers reduced motion.
#[hook]
pub fn use_anims() -> Anims {
    let caps = use_host_capabilities();
    Anims::new(caps.reduced_motion)
}

struct RevealWatch {
    handle: ObserverHandle,
    tracker: Rc<RefCell<RevealTracker>>,
}

impl RevealWatch {
    fn stop(self) {
        self.handle.disconnect();
        self.tracker.borrow_mut().detach();
    }
}

fn watch_reveal(target: Element, amount: f64, state: UseStateHandle<RevealState>) -> Option<RevealWatch> {
    let tracker = Rc::new(RefCell::new(RevealTracker::new(amount)));
    let handle = {
        let tracker = tracker.clone();
        let state = state.clone();
        observer::observe(&[target], None, &[amount], move |entries, observer| {
            let mut tracker = tracker.borrow_mut();
            for entry in entries {
                if tracker.on_visibility(entry.is_intersecting(), entry.intersection_ratio()) {
                    state.set(tracker.state());
                    observer.disconnect();
                    break;
                }
            }
        })
    };

    match handle {
        Ok(handle) => Some(RevealWatch { handle, tracker }),
        Err(err) => {
            error!("Failed to observe reveal target, showing it now: {:?}", err);
            state.set(RevealState::Shown);
            None
        }
    }
}

/// Reading layout commits the hidden pose, so the switch to the shown pose
/// right after mount still transitions.
fn flush_hidden_pose(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.offset_height();
    }
}

/// Reveal state for the element behind `node`. Reduced motion starts shown;
/// a host without IntersectionObserver shows everything on mount.
#[hook]
pub fn use_reveal(node: NodeRef, trigger: RevealTrigger) -> RevealState {
    let caps = use_host_capabilities();
    let state = use_state(|| initial_reveal_state(caps));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(trigger, caps)| {
                let mut watch = None;
                match reveal_on_mount(*state, *caps, *trigger) {
                    MountAction::Keep => {}
                    MountAction::Show { flush } => {
                        if flush {
                            flush_hidden_pose(&node);
                        }
                        state.set(RevealState::Shown);
                    }
                    MountAction::Watch { amount } => match node.cast::<Element>() {
                        Some(target) => watch = watch_reveal(target, amount, state),
                        None => state.set(RevealState::Shown),
                    },
                }
                move || {
                    if let Some(watch) = watch {
                        watch.stop();
                    }
                }
            },
            (trigger, caps),
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub variant: Variant,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), props.trigger);

    html! {
        <div ref={node} class={props.class.clone()} style={props.variant.style(state, 0.0)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    pub stagger: Stagger,
    /// Variant each child animates with.
    pub item: Variant,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Reveals its children one after another once the group is seen.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), props.trigger);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(index, child)| html! {
                <div
                    class={props.item_class.clone()}
                    style={props.item.style(state, props.stagger.child_delay(index))}
                >
                    { child }
                </div>
            }) }
        </div>
    }
}
