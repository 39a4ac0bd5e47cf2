use yew::prelude::*;

use crate::capabilities::use_host_capabilities;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::marquee::KeywordMarquee;
use crate::components::nav_dots::ScrollSpyDots;
use crate::components::navbar::NavbarSticky;
use crate::components::primitives::{Button, ButtonSize, ButtonVariant, CardShell, Chip, Pill};
use crate::components::reveal::{use_anims, Reveal, RevealGroup};
use crate::config::{PORTFOLIO_KEYWORDS, PROFILE};
use crate::motion::RevealTrigger;
use crate::scroll_spy::use_scroll_spy;
use crate::sections::{href, portfolio_ids, SectionRegistry};

struct Project {
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
    href: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Parcel matching app",
        summary: "Booking flow and live tracking for a peer-to-peer courier service.",
        tags: &["Mobile", "Maps", "Design system"],
        href: "#",
    },
    Project {
        title: "Clinic scheduling",
        summary: "Replaced a phone-only booking desk with a calm, accessible web scheduler.",
        tags: &["Web", "Accessibility"],
        href: "#",
    },
    Project {
        title: "Energy dashboard",
        summary: "Real-time usage charts rendered from a Rust/WebAssembly core.",
        tags: &["Rust", "WebAssembly", "Data viz"],
        href: "#",
    },
];

struct SkillGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Design",
        items: &["Figma", "Design tokens", "Prototyping", "Motion"],
    },
    SkillGroup {
        title: "Engineering",
        items: &["Rust", "TypeScript", "Yew", "CSS architecture"],
    },
    SkillGroup {
        title: "Practice",
        items: &["Usability testing", "WCAG audits", "Workshops"],
    },
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Shipped the redesign two weeks early and our support tickets halved.",
        author: "Priya N.",
        role: "Head of Product, courier startup",
    },
    Testimonial {
        quote: "Rare mix of taste and rigour. Every animation respects reduced motion.",
        author: "Marco B.",
        role: "Engineering lead",
    },
    Testimonial {
        quote: "Our booking completion rate went up the week the new flow launched.",
        author: "Dr. Lena K.",
        role: "Clinic owner",
    },
];

#[function_component(SectionIntro)]
fn section_intro() -> Html {
    let anims = use_anims();
    html! {
        <section id={portfolio_ids::ABOUT} class="container section section--roomy">
            <Reveal variant={anims.fade_up} trigger={RevealTrigger::InView { amount: 0.3 }}>
                <CardShell class="card-pad-lg">
                    <div class="split">
                        <div>
                            <Pill text={format!("{} • {}", PROFILE.role, PROFILE.location)} />
                            <h1 class="section-heading hero-title">
                                { format!("Hi, I'm {}.", PROFILE.name) }
                            </h1>
                            <p class="muted lead">
                                {"I design and build interfaces that feel quick, read clearly and stay usable for everyone, from first sketch to production code."}
                            </p>
                            <div class="button-row">
                                <a href={href(portfolio_ids::WORK)}>
                                    <Button size={ButtonSize::Lg} class="btn--brand">{"See my work"}</Button>
                                </a>
                                <a href={href(portfolio_ids::CONTACT)}>
                                    <Button size={ButtonSize::Lg} variant={ButtonVariant::Outline}>{"Get in touch"}</Button>
                                </a>
                            </div>
                        </div>
                        <Reveal
                            variant={anims.rise(18.0, 0.6, 0.0)}
                            trigger={RevealTrigger::InView { amount: 0.4 }}
                            class="portrait"
                        >
                            <span class="portrait__initials">
                                { PROFILE.name.split_whitespace().filter_map(|part| part.chars().next()).collect::<String>() }
                            </span>
                        </Reveal>
                    </div>
                </CardShell>
            </Reveal>
        </section>
    }
}

#[function_component(SectionWork)]
fn section_work() -> Html {
    let anims = use_anims();
    html! {
        <section id={portfolio_ids::WORK} class="container section">
            <div class="centered">
                <Pill text="Selected work" />
                <h2 class="section-heading heading-xl">{"Recent projects"}</h2>
            </div>
            <RevealGroup
                stagger={anims.stagger}
                item={anims.fade_up}
                trigger={RevealTrigger::InView { amount: 0.35 }}
                class="projects"
            >
                { for PROJECTS.iter().map(|project| html! {
                    <CardShell grid_bg={true} class="card-pad-md project">
                        <h3 class="project__title">{ project.title }</h3>
                        <p class="muted">{ project.summary }</p>
                        <div class="project__tags">
                            { for project.tags.iter().map(|tag| html! { <Chip>{ *tag }</Chip> }) }
                        </div>
                        <a class="project__link" href={project.href}>{"Case study ↗"}</a>
                    </CardShell>
                }) }
            </RevealGroup>
        </section>
    }
}

#[function_component(SectionSkills)]
fn section_skills() -> Html {
    let anims = use_anims();
    html! {
        <section id={portfolio_ids::SKILLS} class="container section">
            <CardShell class="card-pad-lg">
                <div class="split">
                    <div>
                        <Pill text="Toolbox" />
                        <h2 class="section-heading heading-lg">{"Skills"}</h2>
                        <RevealGroup
                            stagger={anims.stagger}
                            item={anims.fade_up}
                            trigger={RevealTrigger::InView { amount: 0.4 }}
                            class="skills"
                        >
                            { for SKILLS.iter().map(|group| html! {
                                <div class="skills__group">
                                    <h3 class="skills__title">{ group.title }</h3>
                                    <div class="skills__chips">
                                        { for group.items.iter().map(|item| html! { <Chip>{ *item }</Chip> }) }
                                    </div>
                                </div>
                            }) }
                        </RevealGroup>
                    </div>
                    <div class="skills__marquee">
                        <KeywordMarquee items={PORTFOLIO_KEYWORDS} />
                    </div>
                </div>
            </CardShell>
        </section>
    }
}

#[function_component(SectionTestimonials)]
fn section_testimonials() -> Html {
    let anims = use_anims();
    html! {
        <section id={portfolio_ids::TESTIMONIALS} class="container section">
            <div class="centered">
                <Pill text="Kind words" />
                <h2 class="section-heading heading-xl">{"Testimonials"}</h2>
            </div>
            <RevealGroup
                stagger={anims.stagger}
                item={anims.fade}
                trigger={RevealTrigger::InView { amount: 0.35 }}
                class="quotes"
            >
                { for TESTIMONIALS.iter().map(|t| html! {
                    <CardShell class="card-pad-md">
                        <blockquote class="quote">
                            <p>{ format!("“{}”", t.quote) }</p>
                            <footer>
                                <strong>{ t.author }</strong>
                                <span class="muted">{ format!(" · {}", t.role) }</span>
                            </footer>
                        </blockquote>
                    </CardShell>
                }) }
            </RevealGroup>
        </section>
    }
}

#[function_component(SectionContact)]
fn section_contact() -> Html {
    let anims = use_anims();
    html! {
        <section id={portfolio_ids::CONTACT} class="container section">
            <Reveal variant={anims.fade_up} trigger={RevealTrigger::InView { amount: 0.35 }}>
                <CardShell class="card-pad-lg">
                    <div class="split">
                        <div>
                            <Pill text="Open for projects" />
                            <h2 class="section-heading heading-lg">{"Let's work together"}</h2>
                            <ul class="contact-list">
                                <li>{"✉️ "}{ PROFILE.email }</li>
                                <li>{"📍 "}{ PROFILE.location }</li>
                                <li><a href={PROFILE.github}>{"GitHub ↗"}</a></li>
                                <li><a href={PROFILE.linkedin}>{"LinkedIn ↗"}</a></li>
                            </ul>
                        </div>
                        <ContactForm message_placeholder="Tell me about your project" />
                    </div>
                </CardShell>
            </Reveal>
        </section>
    }
}

/// Personal portfolio landing page.
#[function_component(PortfolioLanding)]
pub fn portfolio_landing() -> Html {
    let caps = use_host_capabilities();
    let registry = SectionRegistry::portfolio();
    let active = use_scroll_spy(&registry, caps);

    html! {
        <div class="portfolio-page">
            <style>
                {r#"
                .portfolio-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #fff7ed, #ffe9ea, #fff7ed);
                }
                .portrait {
                    aspect-ratio: 1 / 1;
                    max-width: 22rem;
                    margin: 0 auto;
                    border-radius: 50%;
                    background: linear-gradient(to top right, #fecdd3, #fff, #fde68a);
                    border: 1px solid #f3f4f6;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .portrait__initials {
                    font-size: 5rem;
                    font-weight: 800;
                    color: #3b2f2f;
                }
                .projects,
                .quotes {
                    display: grid;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .projects,
                    .quotes {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .project__title {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .project__tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .project__link {
                    display: inline-block;
                    margin-top: 1rem;
                    font-weight: 600;
                    color: #e64b47;
                }
                .skills {
                    margin-top: 1.5rem;
                    display: grid;
                    gap: 1.25rem;
                }
                .skills__title {
                    margin: 0 0 0.5rem;
                    font-size: 1rem;
                    font-weight: 600;
                }
                .skills__chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .skills__marquee {
                    color: #e64b47;
                }
                .quote {
                    margin: 0;
                }
                .quote p {
                    margin: 0 0 1rem;
                    font-size: 1.125rem;
                }
                "#}
            </style>
            <NavbarSticky
                brand={PROFILE.name}
                registry={registry.clone()}
                cta_label="Hire me"
                cta_href={format!("mailto:{}", PROFILE.email)}
            />
            <SectionIntro />
            <SectionWork />
            <SectionSkills />
            <SectionTestimonials />
            <SectionContact />
            <Footer
                owner={PROFILE.name}
                links={vec![
                    (AttrValue::from("GitHub"), AttrValue::from(PROFILE.github)),
                    (AttrValue::from("LinkedIn"), AttrValue::from(PROFILE.linkedin)),
                ]}
                social_label="Email"
                social_href={format!("mailto:{}", PROFILE.email)}
            />
            <ScrollSpyDots registry={registry} active={active} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_rendered_sections() {
        // Order `PortfolioLanding` renders its `<section>`s in.
        let rendered = [
            portfolio_ids::ABOUT,
            portfolio_ids::WORK,
            portfolio_ids::SKILLS,
            portfolio_ids::TESTIMONIALS,
            portfolio_ids::CONTACT,
        ];
        let registered: Vec<_> = SectionRegistry::portfolio().ids().collect();
        assert_eq!(registered, rendered);
    }

    #[test]
    fn hero_buttons_jump_to_registered_sections() {
        let registry = SectionRegistry::portfolio();
        for target in [href(portfolio_ids::WORK), href(portfolio_ids::CONTACT)] {
            assert!(registry.ids().any(|id| href(id) == target), "{}", target);
        }
    }
}
