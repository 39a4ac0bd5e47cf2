use yew::prelude::*;

use crate::config::BRAND;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "btn",
        match props.size {
            ButtonSize::Md => "btn--md",
            ButtonSize::Lg => "btn--lg",
        },
        match props.variant {
            ButtonVariant::Solid => "btn--solid",
            ButtonVariant::Outline => "btn--outline",
        },
        props.class.clone()
    );

    html! {
        <button type={props.kind.clone()} class={classes} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChipProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Chip)]
pub fn chip(props: &ChipProps) -> Html {
    html! {
        <span class={classes!("chip", props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardShellProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub grid_bg: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CardShell)]
pub fn card_shell(props: &CardShellProps) -> Html {
    html! {
        <div
            class={classes!("card-shell", props.class.clone())}
            style={format!("border-color: {};", BRAND.border_tint)}
        >
            if props.grid_bg {
                <div class="card-shell__grid"></div>
            }
            <div class="card-shell__body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PillProps {
    pub text: AttrValue,
}

/// Small rose label above section headings.
#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html! { <span class="pill">{ props.text.clone() }</span> }
}

/// Styles for the primitives above plus the shared page layout helpers.
/// Rendered once by the app root.
pub const BASE_CSS: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
    }
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #111827;
    }
    a {
        color: inherit;
        text-decoration: none;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    @media (min-width: 640px) {
        .container { padding: 0 1.5rem; }
    }
    @media (min-width: 1024px) {
        .container { padding: 0 2rem; }
    }

    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border-radius: 9999px;
        border: 1px solid;
        cursor: pointer;
        font: inherit;
        transition: transform 0.2s ease, opacity 0.2s ease, background 0.2s ease;
    }
    .btn:hover {
        transform: translateY(-2px);
    }
    .btn--md {
        height: 2.5rem;
        padding: 0 1.25rem;
        font-size: 0.875rem;
    }
    .btn--lg {
        height: 3rem;
        padding: 0 1.5rem;
        font-size: 1rem;
    }
    .btn--solid {
        background: #111827;
        color: #fff;
        border-color: #111827;
    }
    .btn--solid:hover {
        opacity: 0.95;
    }
    .btn--outline {
        background: transparent;
        color: #111827;
        border-color: #d1d5db;
    }
    .btn--outline:hover {
        background: #f9fafb;
    }
    .btn--brand {
        background: #ef4444;
        border-color: #ef4444;
        color: #fff;
    }
    .btn--on-brand {
        border-color: #fff;
        color: #fff;
    }
    .btn--on-brand:hover {
        background: rgba(255, 255, 255, 0.1);
    }

    .chip {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        border: 1px solid #fde68a;
        background: #fffbeb;
        color: #92400e;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }

    .pill {
        display: inline-flex;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        background: #ffe4e6;
        color: #9f1239;
    }

    .card-shell {
        position: relative;
        border-radius: 28px;
        border: 1px solid;
        background: #fff;
        box-shadow: 0 16px 40px -18px rgba(230, 75, 71, 0.28);
    }
    .card-shell__body {
        position: relative;
    }
    .card-shell__grid {
        pointer-events: none;
        position: absolute;
        inset: 0;
        opacity: 0.2;
        border-radius: inherit;
        background-image:
            linear-gradient(rgba(230, 75, 71, 0.25) 1px, transparent 1px),
            linear-gradient(90deg, rgba(230, 75, 71, 0.25) 1px, transparent 1px);
        background-size: 32px 32px;
        animation: grid-pan 20s linear infinite;
    }
    @keyframes grid-pan {
        from { background-position: 0 0; }
        to { background-position: 32px 32px; }
    }

    .section-heading {
        font-weight: 800;
        letter-spacing: -0.025em;
        margin: 0.75rem 0 0;
    }
    .muted {
        color: #4b5563;
    }
    .section { padding-top: 2.5rem; padding-bottom: 2.5rem; }
    .section--roomy { padding-top: 3.5rem; padding-bottom: 3.5rem; }
    .section--tight { padding-top: 1.5rem; padding-bottom: 1.5rem; }
    .card-pad-lg { padding: 2rem; }
    .card-pad-md { padding: 2rem; }
    @media (min-width: 1024px) {
        .card-pad-lg { padding: 3rem; }
        .card-pad-md { padding: 2.5rem; }
    }
    .split {
        display: grid;
        gap: 2.5rem;
        align-items: center;
    }
    .split--top { align-items: start; gap: 2rem; }
    @media (min-width: 1024px) {
        .split { grid-template-columns: 1fr 1fr; }
    }
    .centered { text-align: center; margin-bottom: 2rem; }
    .hero-title { font-size: 2.25rem; margin-top: 1rem; }
    @media (min-width: 640px) {
        .hero-title { font-size: 3rem; }
    }
    .heading-xl { font-size: 2.25rem; }
    .heading-lg { font-size: 1.875rem; }
    .lead { margin-top: 1rem; font-size: 1.125rem; }
    .button-row {
        margin-top: 1.5rem;
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
    }
    .contact-list {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0 0;
        display: grid;
        gap: 0.75rem;
        font-size: 0.875rem;
        color: #374151;
    }

    .fab {
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 50%;
        background: #ef4444;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
        animation: fab-bob 3s ease-in-out infinite;
        z-index: 45;
    }
    @keyframes fab-bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-6px); }
    }

    @media (prefers-reduced-motion: reduce) {
        .card-shell__grid,
        .fab {
            animation: none;
        }
        .btn:hover {
            transform: none;
        }
    }
"#;
