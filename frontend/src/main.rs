use yew::prelude::*;
use log::info;

mod config;
mod capabilities;
mod sections;
mod observer;
mod scroll_spy;
mod motion;
mod contact;
mod components {
    pub mod primitives;
    pub mod reveal;
    pub mod marquee;
    pub mod nav_dots;
    pub mod navbar;
    pub mod contact_form;
    pub mod footer;
}
mod pages {
    pub mod courier;
    pub mod portfolio;
}

use capabilities::HostCapabilities;
use components::primitives::BASE_CSS;
use config::LandingPage;
use pages::{
    courier::CourierLanding,
    portfolio::PortfolioLanding,
};


fn render_page(page: LandingPage) -> Html {
    match page {
        LandingPage::Courier => {
            info!("Rendering Courier page");
            html! { <CourierLanding /> }
        },
        LandingPage::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <PortfolioLanding /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Probed once per mount; components read it through context.
    let caps = use_state(HostCapabilities::detect);

    html! {
        <ContextProvider<HostCapabilities> context={*caps}>
            <style>{ BASE_CSS }</style>
            { render_page(config::ACTIVE_PAGE) }
        </ContextProvider<HostCapabilities>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
