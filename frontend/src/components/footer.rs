use chrono::Datelike;
use yew::prelude::*;

use crate::components::primitives::CardShell;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub owner: AttrValue,
    /// Mark shown before the owner name.
    #[prop_or_default]
    pub mark: AttrValue,
    #[prop_or_default]
    pub links: Vec<(AttrValue, AttrValue)>,
    pub social_label: AttrValue,
    pub social_href: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <style>
                {r#"
                .footer {
                    padding: 3rem 0;
                }
                .footer__card {
                    padding: 1.5rem;
                }
                .footer__top {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .footer__owner {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                }
                .footer__mark {
                    font-size: 1.25rem;
                }
                .footer__links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                }
                .footer__links a:hover,
                .footer__bottom a:hover {
                    text-decoration: underline;
                }
                .footer__bottom {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .footer__bottom p {
                    margin: 0;
                }
                "#}
            </style>
            <div class="container">
                <CardShell class="footer__card">
                    <div class="footer__top">
                        <div class="footer__owner">
                            if !props.mark.is_empty() {
                                <span class="footer__mark">{ props.mark.clone() }</span>
                            }
                            <span>{ props.owner.clone() }</span>
                        </div>
                        <nav class="footer__links">
                            { for props.links.iter().map(|(label, href)| html! {
                                <a key={label.to_string()} href={href.clone()}>{ label.clone() }</a>
                            }) }
                        </nav>
                    </div>
                    <div class="footer__bottom">
                        <p>{ format!("© {} {}. All Rights Reserved.", year, props.owner) }</p>
                        <a href={props.social_href.clone()} target="_blank" rel="noreferrer">
                            { props.social_label.clone() }
                        </a>
                    </div>
                </CardShell>
            </div>
        </footer>
    }
}
