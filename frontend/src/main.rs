use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod styles;
mod theme;
mod components {
    pub mod navigation;
    pub mod header;
    pub mod hero;
    pub mod features;
    pub mod courses;
    pub mod cta;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod account;
}

use components::navigation::NavStrategy;
use pages::{
    landing::LandingPage,
    account::{AccountMode, AccountPage, NotFound},
};
use theme::ThemeService;


#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/preview")]
    Preview,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, theme: &ThemeService) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <LandingPage strategy={NavStrategy::Router} theme={theme.clone()} /> }
        },
        Route::Preview => {
            info!("Rendering Preview page");
            html! { <LandingPage strategy={NavStrategy::Placeholder} theme={theme.clone()} /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <AccountPage mode={AccountMode::Login} /> }
        },
        Route::Register => {
            info!("Rendering Register page");
            html! { <AccountPage mode={AccountMode::Register} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    // Created once: LandingPage props compare the theme host by pointer
    let theme = use_state(ThemeService::browser);
    let render = {
        let theme = (*theme).clone();
        Callback::from(move |routes: Route| switch(routes, &theme))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
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
