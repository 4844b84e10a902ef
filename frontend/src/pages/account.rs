use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::styles::SITE_CSS;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountMode {
    Login,
    Register,
}

impl AccountMode {
    fn heading(self) -> &'static str {
        match self {
            AccountMode::Login => "Welcome back",
            AccountMode::Register => "Create your account",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            AccountMode::Login => "Sign-in opens together with the next cohort. We will email you the moment it is live.",
            AccountMode::Register => "Registration opens together with the next cohort. Every course starts with a free first week.",
        }
    }

    /// The other account page, offered as a secondary link.
    fn counterpart(self) -> (Route, &'static str) {
        match self {
            AccountMode::Login => (Route::Register, "Need an account? Register"),
            AccountMode::Register => (Route::Login, "Already have an account? Login"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountPageProps {
    pub mode: AccountMode,
}

#[function_component(AccountPage)]
pub fn account_page(props: &AccountPageProps) -> Html {
    let mode = props.mode;
    {
        use_effect_with_deps(
            move |mode: &AccountMode| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&config::page_title(mode.heading()));
                }
                || ()
            },
            mode,
        );
    }
    let (other_route, other_label) = mode.counterpart();

    html! {
        <div class="simple-page">
            <style>{SITE_CSS}</style>
            <h1 class="gradient-text">{mode.heading()}</h1>
            <p>{mode.blurb()}</p>
            <div class="cta-buttons">
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to courses"}
                </Link<Route>>
                <Link<Route> to={other_route} classes="btn btn-secondary">
                    {other_label}
                </Link<Route>>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="simple-page">
            <style>{SITE_CSS}</style>
            <h1 class="gradient-text">{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Go home"}
            </Link<Route>>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;

    use super::*;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        mode: AccountMode,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <AccountPage mode={props.mode} />
            </Router>
        }
    }

    async fn render(mode: AccountMode) -> String {
        LocalSet::new()
            .run_until(LocalServerRenderer::<Harness>::with_props(HarnessProps { mode }).render())
            .await
    }

    #[tokio::test]
    async fn login_links_home_and_to_register() {
        let html = render(AccountMode::Login).await;
        assert!(html.contains("Welcome back"));
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("href=\"/register\""));
    }

    #[tokio::test]
    async fn register_links_to_login() {
        let html = render(AccountMode::Register).await;
        assert!(html.contains("Create your account"));
        assert!(html.contains("href=\"/login\""));
    }
}
