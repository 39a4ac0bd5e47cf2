use yew::prelude::*;

use crate::capabilities::use_host_capabilities;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::marquee::KeywordMarquee;
use crate::components::nav_dots::ScrollSpyDots;
use crate::components::navbar::NavbarSticky;
use crate::components::primitives::{Button, ButtonSize, ButtonVariant, CardShell, Chip, Pill};
use crate::components::reveal::{use_anims, Reveal, RevealGroup};
use crate::config::{BRAND, COURIER_KEYWORDS};
use crate::motion::RevealTrigger;
use crate::scroll_spy::use_scroll_spy;
use crate::sections::{courier_ids, SectionRegistry};

const CHIPS: &[&str] = &[
    "⚡ Quick Booking",
    "🌍 Wide Reach",
    "🚚 Flexible Delivery",
    "🧰 Secure Handling",
    "📍 Real-time Tracking",
    "🤝 User Matching",
];

struct Step {
    n: u8,
    title: &'static str,
    desc: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        n: 1,
        title: "Order with Ease",
        desc: "Enter pickup & delivery details and choose the best option.",
    },
    Step {
        n: 2,
        title: "Meet Your Traveller",
        desc: "We match your need with a verified traveller on the same route.",
    },
    Step {
        n: 3,
        title: "Track & Deliver",
        desc: "Follow live tracking until your parcel arrives safely.",
    },
];

#[function_component(FeatureChipsRibbon)]
fn feature_chips_ribbon() -> Html {
    let anims = use_anims();
    html! {
        <div class="ribbon">
            <CardShell class="ribbon__card">
                <RevealGroup
                    stagger={anims.stagger}
                    item={anims.fade_up}
                    trigger={RevealTrigger::InView { amount: 0.4 }}
                    class="ribbon__chips"
                >
                    { for CHIPS.iter().map(|label| html! { <Chip>{ *label }</Chip> }) }
                </RevealGroup>
            </CardShell>
        </div>
    }
}

#[function_component(SectionAbout)]
fn section_about() -> Html {
    let anims = use_anims();
    html! {
        <section id={courier_ids::ABOUT} class="container section section--roomy">
            <Reveal variant={anims.fade_up} trigger={RevealTrigger::InView { amount: 0.3 }}>
                <CardShell class="card-pad-lg">
                    <div class="split">
                        <div>
                            <Pill text="Easy to use • Process" />
                            <h1 class="section-heading hero-title" style={format!("color: {};", BRAND.heading)}>
                                {"Got something urgent to send?"}
                            </h1>
                            <p class="muted lead">
                                {"Connect with nearby travellers & couriers to deliver your parcel in hours, not days. Real-time tracking, trusted verification, and secure handling."}
                            </p>
                            <div class="button-row">
                                <a href={BRAND.play_store_url} target="_blank" rel="noreferrer">
                                    <Button size={ButtonSize::Lg} class="btn--brand">{"Play Store"}</Button>
                                </a>
                                <a href={BRAND.app_store_url} target="_blank" rel="noreferrer">
                                    <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline}>{"App Store"}</Button>
                                </a>
                            </div>
                            <div class="trust-row">
                                <div>{"🛡️ Verified Travellers"}</div>
                                <div>{"⏱️ On-time Delivery"}</div>
                                <div>{"📍 Live Tracking"}</div>
                            </div>
                        </div>
                        <div class="hero-visual">
                            <Reveal
                                variant={anims.rise(18.0, 0.6, 0.0)}
                                trigger={RevealTrigger::InView { amount: 0.4 }}
                                class="hero-visual__phone"
                            >
                                <span class="hero-visual__icon">{"📱"}</span>
                            </Reveal>
                            <Reveal
                                variant={anims.rise(10.0, 0.5, 0.05)}
                                trigger={RevealTrigger::InView { amount: 0.4 }}
                                class="hero-visual__eta"
                            >
                                <span class="hero-visual__truck">{"🚚"}</span>
                                <div>
                                    <p class="eta-title">{"Real-time ETA"}</p>
                                    <p class="eta-sub">{"Stay updated every second"}</p>
                                </div>
                            </Reveal>
                        </div>
                    </div>
                </CardShell>
            </Reveal>
        </section>
    }
}

#[function_component(SectionHowItWorks)]
fn section_how_it_works() -> Html {
    let anims = use_anims();
    html! {
        <section id={courier_ids::HOW} class="container section section--tight">
            <CardShell>
                <div class="card-pad-lg">
                    <div class="centered">
                        <Pill text="Easy to use • Process" />
                        <h2 class="section-heading heading-xl" style={format!("color: {};", BRAND.heading)}>
                            {"How it works?"}
                        </h2>
                    </div>
                    <RevealGroup
                        stagger={anims.stagger}
                        item={anims.fade_up}
                        trigger={RevealTrigger::InView { amount: 0.35 }}
                        class="steps"
                    >
                        { for STEPS.iter().map(|step| html! {
                            <div class="step">
                                <div class="step__number">{ step.n.to_string() }</div>
                                <div>
                                    <h3 class="step__title">{ step.title }</h3>
                                    <p class="muted step__desc">{ step.desc }</p>
                                </div>
                            </div>
                        }) }
                    </RevealGroup>
                </div>
            </CardShell>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    pill: AttrValue,
    title: AttrValue,
    body: AttrValue,
    options: [&'static str; 2],
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let anims = use_anims();
    html! {
        <Reveal variant={anims.fade_up} trigger={RevealTrigger::InView { amount: 0.35 }}>
            <CardShell grid_bg={true} class="card-pad-md">
                <Pill text={props.pill.clone()} />
                <h3 class="section-heading heading-lg" style={format!("color: {};", BRAND.heading)}>
                    { props.title.clone() }
                </h3>
                <p class="muted">{ props.body.clone() }</p>
                <div class="button-row">
                    { for props.options.iter().map(|option| html! {
                        <Button variant={ButtonVariant::Outline}>{ *option }</Button>
                    }) }
                </div>
            </CardShell>
        </Reveal>
    }
}

#[function_component(SectionFeatures)]
fn section_features() -> Html {
    html! {
        <section id={courier_ids::FEATURES} class="container section">
            <div class="split split--top">
                <FeatureCard
                    pill="Have Information • Every sec"
                    title="Real Time Tracking."
                    body="Stay updated every step of the way with our real-time tracking feature, ensuring your package is always within reach."
                    options={["Multiple Vehicle Options", "Multiple Size Options"]}
                />
                <FeatureCard
                    pill="Fastest Time • Best in class"
                    title="On Time Delivery"
                    body="We prioritize punctuality with smart matching and route optimization so shipments arrive exactly when expected."
                    options={["Fastest Service", "Trusted Travellers"]}
                />
            </div>
        </section>
    }
}

#[function_component(SectionSupport)]
fn section_support() -> Html {
    let anims = use_anims();
    html! {
        <section id={courier_ids::SUPPORT} class="container section">
            <Reveal variant={anims.fade_up} trigger={RevealTrigger::InView { amount: 0.35 }}>
                <CardShell class="card-pad-lg">
                    <div class="split">
                        <div>
                            <Pill text="Call us • anytime" />
                            <h3 class="section-heading heading-lg" style={format!("color: {};", BRAND.heading)}>
                                {"Customer Support"}
                            </h3>
                            <ul class="contact-list">
                                <li>{"📞 "}{ BRAND.phone }</li>
                                <li>{"✉️ "}{ BRAND.email }</li>
                                <li>{"📍 "}{ BRAND.address }</li>
                            </ul>
                        </div>
                        <div>
                            <ContactForm />
                        </div>
                    </div>
                </CardShell>
            </Reveal>
        </section>
    }
}

#[function_component(SectionCta)]
fn section_cta() -> Html {
    let anims = use_anims();
    html! {
        <section id={courier_ids::CTA} class="container section">
            <CardShell class="cta-shell">
                <Reveal
                    variant={anims.rise(20.0, 0.6, 0.0)}
                    trigger={RevealTrigger::InView { amount: 0.4 }}
                    class="cta"
                >
                    <div class="cta__grid">
                        <div>
                            <h3 class="cta__title">{"Ready to get started?"}</h3>
                            <p class="cta__sub">{"Download now and experience our unique services"}</p>
                            <div class="button-row">
                                <a href={BRAND.app_store_url} target="_blank" rel="noreferrer">
                                    <Button variant={ButtonVariant::Outline} class="btn--on-brand">{" App Store"}</Button>
                                </a>
                                <a href={BRAND.play_store_url} target="_blank" rel="noreferrer">
                                    <Button variant={ButtonVariant::Outline} class="btn--on-brand">{"▶ Play Store"}</Button>
                                </a>
                            </div>
                        </div>
                        <div class="cta__keywords">
                            <KeywordMarquee items={COURIER_KEYWORDS} />
                        </div>
                    </div>
                </Reveal>
            </CardShell>
        </section>
    }
}

/// Courier-matching service landing page.
#[function_component(CourierLanding)]
pub fn courier_landing() -> Html {
    let caps = use_host_capabilities();
    let registry = SectionRegistry::courier();
    let active = use_scroll_spy(&registry, caps);

    let policies = vec![
        (AttrValue::from("Terms & Conditions"), AttrValue::from("#")),
        (AttrValue::from("Privacy Policy"), AttrValue::from("#")),
        (AttrValue::from("Refund & Cancellation Policy"), AttrValue::from("#")),
        (AttrValue::from("Declaration Policy"), AttrValue::from("#")),
        (AttrValue::from("Insurance policy"), AttrValue::from("#")),
    ];

    html! {
        <div class="courier-page">
            <style>
                {r#"
                .courier-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #ffdbe0, #ffe9ea, #ffdbe0);
                }
                .trust-row {
                    margin-top: 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #374151;
                }

                .ribbon {
                    max-width: 64rem;
                    margin: -0.5rem auto 0;
                    padding: 0 1rem;
                }
                .ribbon__card { padding: 0.75rem; }
                .ribbon__chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }

                .hero-visual { position: relative; }
                .hero-visual__phone {
                    aspect-ratio: 4 / 3;
                    border-radius: 28px;
                    border: 1px solid #f3f4f6;
                    background: linear-gradient(to top right, #fecdd3, #fff, #ffe4e6);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .hero-visual__icon { font-size: 6rem; }
                .hero-visual__eta {
                    position: absolute;
                    bottom: -1.5rem;
                    left: -1.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    border: 1px solid #f3f4f6;
                    padding: 1rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .hero-visual__truck { font-size: 1.5rem; }
                .eta-title { margin: 0; font-size: 0.875rem; font-weight: 600; }
                .eta-sub { margin: 0; font-size: 0.75rem; color: #4b5563; }

                .steps {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .steps { grid-template-columns: repeat(3, 1fr); }
                }
                .step { display: flex; gap: 1rem; }
                .step__number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #ffe4e6;
                    color: #be123c;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step__title { margin: 0; font-size: 1.125rem; font-weight: 600; }
                .step__desc { margin: 0.25rem 0 0; font-size: 0.875rem; }

                .cta-shell { overflow: hidden; }
                .cta {
                    background: #ef4444;
                    color: #fff;
                    padding: 2rem;
                    border-radius: 28px;
                }
                @media (min-width: 1024px) {
                    .cta { padding: 3rem; }
                }
                .cta__grid {
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                }
                @media (min-width: 768px) {
                    .cta__grid { grid-template-columns: 1fr 1fr; }
                }
                .cta__title {
                    margin: 0;
                    font-size: 2.25rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                }
                .cta__sub { margin: 0.5rem 0 0; color: rgba(255, 255, 255, 0.9); }
                @media (max-width: 767px) {
                    .cta__keywords { display: none; }
                }
                "#}
            </style>
            <NavbarSticky
                brand={BRAND.name}
                registry={registry.clone()}
                cta_label="Get App"
                cta_href={BRAND.play_store_url}
            />
            <FeatureChipsRibbon />
            <SectionAbout />
            <SectionHowItWorks />
            <SectionFeatures />
            <SectionSupport />
            <SectionCta />
            <Footer
                owner={BRAND.name}
                mark="₹"
                links={policies}
                social_label="Instagram"
                social_href={BRAND.instagram}
            />
            <a
                href={BRAND.play_store_url}
                target="_blank"
                rel="noreferrer"
                class="fab"
                aria-label="Get App"
                style={format!("background: {};", BRAND.primary)}
            >
                {"🚀"}
            </a>
            <ScrollSpyDots registry={registry} active={active} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_rendered_sections() {
        // Order `CourierLanding` renders its `<section>`s in.
        let rendered = [
            courier_ids::ABOUT,
            courier_ids::HOW,
            courier_ids::FEATURES,
            courier_ids::SUPPORT,
            courier_ids::CTA,
        ];
        let registered: Vec<_> = SectionRegistry::courier().ids().collect();
        assert_eq!(registered, rendered);
    }
}
