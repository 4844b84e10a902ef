use std::fmt::Debug;

use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// How navigation actions on the landing page behave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStrategy {
    /// Real links: router paths and in-page anchors.
    Router,
    /// Inert links that only announce where they would go.
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Route(Route),
    /// In-page anchor, without the leading `#`.
    Section(&'static str),
    /// A page the site does not have yet.
    Page(&'static str),
}

impl Destination {
    /// Name shown by the placeholder dialog.
    pub fn page_name(self) -> &'static str {
        match self {
            Destination::Route(Route::Home) => "home",
            Destination::Route(Route::Preview) => "preview",
            Destination::Route(Route::Login) => "login",
            Destination::Route(Route::Register) => "signup",
            Destination::Route(Route::NotFound) => "not-found",
            Destination::Section(id) | Destination::Page(id) => id,
        }
    }

    pub fn href(self) -> String {
        match self {
            Destination::Route(route) => route.to_path(),
            Destination::Section(id) => format!("#{}", id),
            Destination::Page(_) => "#".to_string(),
        }
    }
}

/// Shows the placeholder message through `alert`. Returns whether it was shown.
fn show_placeholder<E: Debug>(page: &str, alert: impl FnOnce(&str) -> Result<(), E>) -> bool {
    info!("Placeholder navigation to {}", page);
    match alert(&config::placeholder_message(page)) {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not open placeholder dialog: {:?}", e);
            false
        }
    }
}

fn announce(page: &str) {
    match web_sys::window() {
        Some(window) => {
            show_placeholder(page, |message| window.alert_with_message(message));
        }
        None => warn!("No window to show the placeholder dialog for {}", page),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavActionProps {
    pub to: Destination,
    pub strategy: NavStrategy,
    #[prop_or_default]
    pub classes: Classes,
    /// Fired after any click, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NavAction)]
pub fn nav_action(props: &NavActionProps) -> Html {
    let NavActionProps { to, strategy, classes, on_navigate, children } = props;
    let to = *to;

    let notify = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    match (*strategy, to) {
        (NavStrategy::Placeholder, _) => {
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                notify.emit(e);
                announce(to.page_name());
            });
            html! {
                <a class={classes.clone()} {onclick}>{ for children.iter() }</a>
            }
        }
        (NavStrategy::Router, Destination::Route(route)) => {
            html! {
                <span class="nav-action" onclick={notify}>
                    <Link<Route> to={route} classes={classes.clone()}>
                        { for children.iter() }
                    </Link<Route>>
                </span>
            }
        }
        (NavStrategy::Router, _) => {
            html! {
                <a href={to.href()} class={classes.clone()} onclick={notify}>
                    { for children.iter() }
                </a>
            }
        }
    }
}
