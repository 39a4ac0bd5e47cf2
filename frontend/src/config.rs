use log::Level;

/// Which landing page the app mounts. There is no router; edit this to switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingPage {
    Courier,
    Portfolio,
}

pub const ACTIVE_PAGE: LandingPage = LandingPage::Courier;

pub struct Brand {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub app_store_url: &'static str,
    pub play_store_url: &'static str,
    pub instagram: &'static str,
    pub primary: &'static str,
    pub border_tint: &'static str,
    pub heading: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "YourBrand",
    phone: "+91 98XXXXXXX",
    email: "support@yourbrand.com",
    address: "Your Address, City 400000",
    app_store_url: "#",
    play_store_url: "#",
    instagram: "#",
    primary: "#e64b47",     // CTA red
    border_tint: "#f3b3a6", // warm card border
    heading: "#3b2f2f",     // deep brown
};

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Doe",
    role: "Product designer & frontend engineer",
    location: "Remote, UTC+1",
    email: "hello@alexdoe.dev",
    github: "#",
    linkedin: "#",
};

pub const COURIER_KEYWORDS: &[&str] = &[
    "Courier carriers",
    "Delivery seekers",
    "Tourists",
    "Anytime Delivery",
    "Travelling Change",
    "Earn on the way",
];

pub const PORTFOLIO_KEYWORDS: &[&str] = &[
    "Design systems",
    "Rust & WebAssembly",
    "Accessible UI",
    "Motion design",
    "Prototyping",
    "Performance audits",
];

/// Seconds for one full marquee loop.
pub const MARQUEE_CYCLE_SECONDS: f64 = 12.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
