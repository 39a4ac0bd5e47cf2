use yew::prelude::*;

use crate::components::primitives::Button;
use crate::components::reveal::{use_anims, Reveal};
use crate::motion::RevealTrigger;
use crate::sections::{href, SectionRegistry};

#[derive(Properties, PartialEq)]
pub struct NavbarStickyProps {
    pub brand: AttrValue,
    pub registry: SectionRegistry,
    pub cta_label: AttrValue,
    pub cta_href: AttrValue,
}

#[function_component(NavbarSticky)]
pub fn navbar_sticky(props: &NavbarStickyProps) -> Html {
    let anims = use_anims();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = props
        .registry
        .nav_links()
        .map(|section| {
            html! {
                <a key={section.id} href={href(section.id)} class="navbar__link" onclick={close_menu.clone()}>
                    { section.label }
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <header class="navbar">
            <style>
                {r#"
                .navbar {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                }
                .navbar__inner {
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }
                .navbar__bar {
                    position: relative;
                    height: 3.5rem;
                    padding: 0 1rem;
                    border-radius: 9999px;
                    border: 1px solid #e5e7eb;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .navbar__brand {
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    font-size: 1.125rem;
                }
                .navbar__links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }
                .navbar__link:hover {
                    opacity: 0.8;
                }
                .navbar__actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .navbar__burger {
                    display: none;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid #e5e7eb;
                    background: transparent;
                    cursor: pointer;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 3px;
                }
                .navbar__burger span {
                    display: block;
                    width: 1rem;
                    height: 2px;
                    background: #111827;
                }
                @media (max-width: 767px) {
                    .navbar__burger {
                        display: inline-flex;
                    }
                    .navbar__links {
                        display: none;
                    }
                    .navbar__links.open {
                        display: flex;
                        flex-direction: column;
                        align-items: stretch;
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        border-radius: 1.5rem;
                        border: 1px solid #e5e7eb;
                        background: #fff;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                }
                @media (max-width: 639px) {
                    .navbar__cta {
                        display: none;
                    }
                }
                "#}
            </style>
            <div class="container navbar__inner">
                <Reveal variant={anims.fade} trigger={RevealTrigger::Mount} class="navbar__bar">
                    <a href="#" class="navbar__brand">{ props.brand.clone() }</a>
                    <nav class={classes!("navbar__links", (*menu_open).then_some("open"))}>
                        { links }
                    </nav>
                    <div class="navbar__actions">
                        <a href={props.cta_href.clone()} target="_blank" rel="noreferrer" class="navbar__cta">
                            <Button class="btn--brand">{ props.cta_label.clone() }{" ↗"}</Button>
                        </a>
                        <button
                            class="navbar__burger"
                            aria-label="Menu"
                            aria-expanded={(*menu_open).to_string()}
                            onclick={toggle_menu}
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </Reveal>
            </div>
        </header>
    }
}
