use yew::prelude::*;

use crate::components::navigation::{Destination, NavAction, NavStrategy};
use crate::content::HERO_STATS;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub strategy: NavStrategy,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let strategy = props.strategy;

    html! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1 class="hero-title">
                            {"Master "}<span class="gradient-text">{"MERN Stack"}</span>{" with"}
                            <span class="gradient-text">{" Real Projects"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Become a full-stack developer by building production-ready applications. \
                              Learn MongoDB, Express.js, React with TypeScript, and Node.js through \
                              hands-on projects that prepare you for the real world."}
                        </p>
                        <div class="hero-buttons">
                            <NavAction to={Destination::Route(Route::Register)} {strategy} classes="btn btn-primary">
                                {"Start Learning Free"}
                            </NavAction>
                            <NavAction to={Destination::Section("courses")} {strategy} classes="btn btn-secondary">
                                {"View Curriculum"}
                            </NavAction>
                        </div>
                        <div class="hero-stats">
                            {
                                for HERO_STATS.iter().map(|stat| html! {
                                    <div class="stat" key={stat.label}>
                                        <strong>{stat.value}</strong>
                                        <span>{stat.label}</span>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                    <div class="hero-visual">
                        <CodeWindow />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Decorative editor window with a highlighted TSX snippet.
#[function_component(CodeWindow)]
fn code_window() -> Html {
    html! {
        <div class="code-window">
            <div class="window-header">
                <div class="window-dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
            <div class="code-content">
                <div class="code-line">
                    <span class="code-keyword">{"import"}</span>
                    <span class="code-text">{" React from "}</span>
                    <span class="code-string">{"'react'"}</span>{";"}
                </div>
                <div class="code-line">
                    <span class="code-keyword">{"interface"}</span>
                    <span class="code-class">{" Props "}</span>
                    {"{"}
                </div>
                <div class="code-line indent">
                    <span class="code-property">{"title"}</span>{": "}<span class="code-string">{"string"}</span>{";"}
                </div>
                <div class="code-line">{"}"}</div>
                <div class="code-line">
                    <span class="code-keyword">{"const"}</span>
                    <span class="code-function">{" App"}</span>{" = ()"}
                    <span class="code-operator">{" => "}</span>
                    {"("}
                </div>
                <div class="code-line indent">
                    <span class="code-keyword">{"return"}</span>{" <"}<span class="code-tag">{"div"}</span>{">"}
                </div>
                <div class="code-line double-indent">
                    {"<"}<span class="code-tag">{"h1"}</span>{">"}
                    <span class="code-text">{"Hello World"}</span>
                    {"</"}<span class="code-tag">{"h1"}</span>{">"}
                </div>
                <div class="code-line indent">{"</"}<span class="code-tag">{"div"}</span>{">"}</div>
                <div class="code-line">{");"}</div>
            </div>
        </div>
    }
}
