use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::navigation::{Destination, NavAction, NavStrategy};
use crate::config;
use crate::content::HEADER_LINKS;
use crate::Route;

/// Open/closed state of the mobile navigation panel. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn links_class(self) -> Classes {
        classes!("nav-links", self.open.then(|| "nav-links-open"))
    }
}

/// Clicks the header reports to the page that owns its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderEvent {
    /// Any navigation action (logo, nav link, call to action).
    Navigate,
    ToggleMenu,
    ToggleDark,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub strategy: NavStrategy,
    pub menu: MenuState,
    pub dark_mode: bool,
    pub on_event: Callback<HeaderEvent>,
}

fn dark_icon(dark_mode: bool) -> &'static str {
    if dark_mode {
        "☀️"
    } else {
        "🌙"
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        strategy,
        menu,
        dark_mode,
        on_event,
    } = props;
    let strategy = *strategy;

    let navigate = on_event.reform(|_: ()| HeaderEvent::Navigate);

    let toggle_menu = {
        let on_event = on_event.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_event.emit(HeaderEvent::ToggleMenu);
        })
    };

    let toggle_dark = on_event.reform(|_: MouseEvent| HeaderEvent::ToggleDark);

    html! {
        <header class="header">
            <div class="container">
                <div class="nav">
                    <NavAction
                        to={Destination::Route(Route::Home)}
                        {strategy}
                        classes="logo"
                        on_navigate={navigate.clone()}
                    >
                        <span class="logo-icon">{"🚀"}</span>
                        <span class="logo-text">{config::BRAND_NAME}</span>
                    </NavAction>

                    <nav class={menu.links_class()}>
                        {
                            for HEADER_LINKS.iter().map(|item| html! {
                                <NavAction
                                    key={item.label}
                                    to={item.to}
                                    {strategy}
                                    on_navigate={navigate.clone()}
                                >
                                    {item.label}
                                </NavAction>
                            })
                        }
                        <button class="dark-toggle" onclick={toggle_dark.clone()}>
                            {dark_icon(*dark_mode)}
                        </button>
                        <NavAction
                            to={Destination::Route(Route::Register)}
                            {strategy}
                            classes="btn btn-primary nav-cta"
                            on_navigate={navigate.clone()}
                        >
                            {"Get Started"}
                        </NavAction>
                    </nav>

                    <div class="nav-controls">
                        <button class="dark-toggle" onclick={toggle_dark}>
                            {dark_icon(*dark_mode)}
                        </button>
                        <button class="menu-toggle" onclick={toggle_menu}>
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_inverts_and_close_always_closes() {
        let menu = MenuState::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
        assert!(!menu.closed().is_open());
        assert!(!MenuState::default().closed().is_open());
    }

    #[test]
    fn links_class_tracks_state() {
        let closed = MenuState::default().links_class();
        assert!(closed.contains("nav-links"));
        assert!(!closed.contains("nav-links-open"));
        assert!(MenuState::default().toggled().links_class().contains("nav-links-open"));
    }

    #[test]
    fn icon_reflects_mode() {
        assert_eq!(dark_icon(true), "☀️");
        assert_eq!(dark_icon(false), "🌙");
    }
}
