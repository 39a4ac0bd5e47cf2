use yew::prelude::*;

use crate::sections::{href, SectionRegistry};

pub fn dot_class(id: &str, active: &str) -> &'static str {
    if id == active {
        "spy-dot spy-dot--active"
    } else {
        "spy-dot"
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollSpyDotsProps {
    pub registry: SectionRegistry,
    pub active: AttrValue,
}

/// One jump link per section, highlighting the one the scroll spy reports.
#[function_component(ScrollSpyDots)]
pub fn scroll_spy_dots(props: &ScrollSpyDotsProps) -> Html {
    html! {
        <nav class="spy-dots" aria-label="Sections">
            <style>
                {r#"
                .spy-dots {
                    position: fixed;
                    top: 50%;
                    right: 1.5rem;
                    transform: translateY(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 40;
                }
                .spy-dot {
                    width: 1rem;
                    height: 1rem;
                    border-radius: 50%;
                    border: 1px solid #d1d5db;
                    background: #fff;
                    transition: transform 0.2s ease, background 0.2s ease;
                }
                .spy-dot:hover {
                    background: #f3f4f6;
                }
                .spy-dot--active {
                    background: #ef4444;
                    border-color: #ef4444;
                    transform: scale(1.1);
                }
                .spy-dot--active:hover {
                    background: #ef4444;
                }
                @media (max-width: 1023px) {
                    .spy-dots {
                        display: none;
                    }
                }
                "#}
            </style>
            { for props.registry.sections().iter().map(|section| {
                let is_active = section.id == props.active.as_str();
                html! {
                    <a
                        key={section.id}
                        href={href(section.id)}
                        class={dot_class(section.id, &props.active)}
                        aria-label={section.label}
                        aria-current={is_active.then_some("true")}
                    />
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_section_is_highlighted() {
        let registry = SectionRegistry::courier();
        let highlighted: Vec<_> = registry
            .ids()
            .filter(|id| dot_class(id, "features").contains("--active"))
            .collect();
        assert_eq!(highlighted, ["features"]);
    }

    #[test]
    fn unknown_active_id_highlights_nothing() {
        assert!(SectionRegistry::portfolio()
            .ids()
            .all(|id| dot_class(id, "missing") == "spy-dot"));
    }
}
