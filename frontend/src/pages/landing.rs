use log::debug;
use yew::prelude::*;

use crate::components::courses::Courses;
use crate::components::cta::CallToAction;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::header::{Header, HeaderEvent, MenuState};
use crate::components::hero::Hero;
use crate::components::navigation::NavStrategy;
use crate::config;
use crate::styles::SITE_CSS;
use crate::theme::ThemeService;

/// Everything on the page that reacts to header clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    pub menu: MenuState,
    pub dark_mode: bool,
}

impl PageState {
    pub fn initial(theme: &ThemeService) -> Self {
        Self {
            menu: MenuState::default(),
            dark_mode: theme.initial(),
        }
    }

    /// Next state after a header click. Toggling dark mode also persists the
    /// choice and updates the document marker through `theme`.
    pub fn handle(self, event: HeaderEvent, theme: &ThemeService) -> Self {
        match event {
            HeaderEvent::Navigate => Self {
                menu: self.menu.closed(),
                ..self
            },
            HeaderEvent::ToggleMenu => Self {
                menu: self.menu.toggled(),
                ..self
            },
            HeaderEvent::ToggleDark => {
                let dark_mode = theme.toggle(self.dark_mode);
                debug!("Dark mode toggled to {}", dark_mode);
                Self { dark_mode, ..self }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub strategy: NavStrategy,
    pub theme: ThemeService,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let LandingPageProps { strategy, theme } = props;
    let strategy = *strategy;

    let state = {
        let theme = theme.clone();
        use_state(move || PageState::initial(&theme))
    };

    // Scroll to top and set the title only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(&config::page_title("Learn Full-Stack Development"));
                    }
                }
                || ()
            },
            (),
        );
    }

    // Keep the document marker in sync with the current mode
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |dark: &bool| {
                theme.apply(*dark);
                || ()
            },
            state.dark_mode,
        );
    }

    let on_event = {
        let theme = theme.clone();
        let state = state.clone();
        Callback::from(move |event: HeaderEvent| {
            let next = state.handle(event, &theme);
            if next != *state {
                state.set(next);
            }
        })
    };

    html! {
        <div class="landing-page">
            <style>{SITE_CSS}</style>
            <Header
                {strategy}
                menu={state.menu}
                dark_mode={state.dark_mode}
                {on_event}
            />
            <main>
                <Hero {strategy} />
                <Features />
                <Courses {strategy} />
                <CallToAction {strategy} />
            </main>
            <Footer {strategy} />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::rc::Rc;

    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    use super::*;
    use crate::content::{COURSES, FEATURES};
    use crate::theme::MemoryHost;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        strategy: NavStrategy,
        stored: Option<&'static str>,
        prefers_dark: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let theme = ThemeService::new(Rc::new(MemoryHost::new(props.stored, props.prefers_dark)));
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <LandingPage strategy={props.strategy} {theme} />
            </Router>
        }
    }

    async fn render(strategy: NavStrategy, stored: Option<&'static str>, prefers_dark: bool) -> String {
        let props = HarnessProps {
            strategy,
            stored,
            prefers_dark,
        };
        LocalSet::new()
            .run_until(LocalServerRenderer::<Harness>::with_props(props).render())
            .await
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
    }

    #[tokio::test]
    async fn renders_one_card_per_feature_in_order() {
        let html = render(NavStrategy::Router, None, false).await;

        assert_eq!(html.matches("class=\"feature-card\"").count(), FEATURES.len());

        let mut cursor = 0;
        for feature in FEATURES.iter() {
            for text in [feature.icon, feature.title, feature.description] {
                let text = escape(text);
                let found = html[cursor..]
                    .find(&text)
                    .unwrap_or_else(|| panic!("{:?} missing or out of order", text));
                cursor += found + text.len();
            }
        }
    }

    #[tokio::test]
    async fn course_badges_match_levels() {
        let html = render(NavStrategy::Router, None, false).await;

        assert_eq!(html.matches("class=\"course-card\"").count(), COURSES.len());
        let badges: Vec<&str> = html
            .match_indices("class=\"level-badge ")
            .map(|(at, pattern)| {
                let rest = &html[at + pattern.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect();
        let expected: Vec<&str> = COURSES.iter().map(|c| c.level.badge_class()).collect();
        assert_eq!(badges, expected);
        assert_eq!(badges[0], "level-beginner");
    }

    #[tokio::test]
    async fn stored_preference_selects_dark_icon() {
        let html = render(NavStrategy::Router, Some("true"), false).await;
        assert!(html.contains("☀️"));
        assert!(!html.contains("🌙"));
    }

    #[tokio::test]
    async fn ambient_signal_used_without_stored_preference() {
        let dark = render(NavStrategy::Router, None, true).await;
        assert!(dark.contains("☀️"));

        let light = render(NavStrategy::Router, None, false).await;
        assert!(light.contains("🌙"));
        assert!(!light.contains("☀️"));
    }

    #[tokio::test]
    async fn menu_starts_closed() {
        let html = render(NavStrategy::Router, None, false).await;
        assert!(html.contains("class=\"nav-links\""));
        assert!(!html.contains("class=\"nav-links nav-links-open\""));
    }

    #[tokio::test]
    async fn router_strategy_renders_real_targets() {
        let html = render(NavStrategy::Router, None, false).await;
        for href in ["href=\"/register\"", "href=\"/login\"", "href=\"/\"", "href=\"#courses\"", "href=\"#features\""] {
            assert!(html.contains(href), "missing {}", href);
        }
        assert!(html.contains("id=\"features\""));
        assert!(html.contains("id=\"courses\""));
        assert!(html.contains("id=\"testimonials\""));
    }

    #[tokio::test]
    async fn placeholder_strategy_renders_inert_links() {
        let html = render(NavStrategy::Placeholder, None, false).await;
        assert!(!html.contains("href=\"/register\""));
        assert!(!html.contains("href=\"#courses\""));
        assert!(html.contains("Get Started"));
        assert_eq!(html.matches("class=\"feature-card\"").count(), FEATURES.len());
    }

    fn memory_theme(stored: Option<&str>, prefers_dark: bool) -> (Rc<MemoryHost>, ThemeService) {
        let host = Rc::new(MemoryHost::new(stored, prefers_dark));
        let theme = ThemeService::new(host.clone());
        (host, theme)
    }

    #[test]
    fn burger_click_opens_and_closes_menu() {
        let (_, theme) = memory_theme(None, false);
        let state = PageState::initial(&theme);
        assert!(!state.menu.is_open());

        let opened = state.handle(HeaderEvent::ToggleMenu, &theme);
        assert!(opened.menu.is_open());
        assert_eq!(opened.dark_mode, state.dark_mode);
        assert!(!opened.handle(HeaderEvent::ToggleMenu, &theme).menu.is_open());
    }

    #[test]
    fn header_navigation_closes_open_menu() {
        let (_, theme) = memory_theme(None, false);
        let opened = PageState::initial(&theme).handle(HeaderEvent::ToggleMenu, &theme);

        let navigated = opened.handle(HeaderEvent::Navigate, &theme);
        assert!(!navigated.menu.is_open());
        assert_eq!(navigated.handle(HeaderEvent::Navigate, &theme), navigated);
    }

    #[test]
    fn dark_toggle_persists_and_marks_document() {
        let (host, theme) = memory_theme(None, false);
        let state = PageState::initial(&theme);
        assert!(!state.dark_mode);

        let dark = state.handle(HeaderEvent::ToggleDark, &theme);
        assert!(dark.dark_mode);
        assert_eq!(host.stored().as_deref(), Some("true"));
        assert!(host.marker());
        assert_eq!(dark.menu, state.menu);

        let light = dark.handle(HeaderEvent::ToggleDark, &theme);
        assert!(!light.dark_mode);
        assert_eq!(host.stored().as_deref(), Some("false"));
        assert!(!host.marker());
    }

    #[test]
    fn menu_clicks_leave_preference_untouched() {
        let (host, theme) = memory_theme(Some("true"), false);
        let state = PageState::initial(&theme)
            .handle(HeaderEvent::ToggleMenu, &theme)
            .handle(HeaderEvent::Navigate, &theme);
        assert!(state.dark_mode);
        assert_eq!(host.stored().as_deref(), Some("true"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    use super::*;
    use crate::theme::MemoryHost;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        theme: ThemeService,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <LandingPage strategy={NavStrategy::Router} theme={props.theme.clone()} />
            </Router>
        }
    }

    fn query(root: &Element, selector: &str) -> HtmlElement {
        root.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| panic!("{} not rendered", selector))
    }

    fn menu_open(root: &Element) -> bool {
        query(root, "nav.nav-links").class_list().contains("nav-links-open")
    }

    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    async fn mount(host: &Rc<MemoryHost>) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let theme = ThemeService::new(host.clone());
        yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { theme }).render();
        settle().await;
        root
    }

    #[wasm_bindgen_test]
    async fn burger_then_header_link_closes_menu() {
        let host = Rc::new(MemoryHost::new(None, false));
        let root = mount(&host).await;
        assert!(!menu_open(&root));

        query(&root, ".menu-toggle").click();
        settle().await;
        assert!(menu_open(&root));

        query(&root, "nav a[href='#courses']").click();
        settle().await;
        assert!(!menu_open(&root));
    }

    #[wasm_bindgen_test]
    async fn dark_toggle_click_flips_icon_and_persists() {
        let host = Rc::new(MemoryHost::new(None, false));
        let root = mount(&host).await;
        let toggle = query(&root, ".nav-controls .dark-toggle");
        assert_eq!(toggle.text_content().as_deref(), Some("🌙"));

        toggle.click();
        settle().await;
        assert_eq!(query(&root, ".nav-controls .dark-toggle").text_content().as_deref(), Some("☀️"));
        assert_eq!(host.stored().as_deref(), Some("true"));
        assert!(host.marker());
    }
}
