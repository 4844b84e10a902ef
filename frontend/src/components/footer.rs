use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::navigation::{Destination, NavAction, NavStrategy};
use crate::config;
use crate::content::{FOOTER_COLUMNS, SOCIAL_LINKS};
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub strategy: NavStrategy,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let strategy = props.strategy;
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-column footer-brand">
                        <NavAction to={Destination::Route(Route::Home)} {strategy} classes="logo">
                            <span class="logo-icon">{"🚀"}</span>
                            <span class="logo-text">{config::BRAND_NAME}</span>
                        </NavAction>
                        <p>
                            {"Master the MERN stack with TypeScript through project-based learning. \
                              Build real applications and launch your tech career."}
                        </p>
                        <div class="social-links">
                            {
                                for SOCIAL_LINKS.iter().map(|item| html! {
                                    <NavAction key={item.label} to={item.to} {strategy}>{item.label}</NavAction>
                                })
                            }
                        </div>
                    </div>
                    {
                        for FOOTER_COLUMNS.iter().map(|column| html! {
                            <div class="footer-column" key={column.heading}>
                                <h3>{column.heading}</h3>
                                <ul>
                                    {
                                        for column.links.iter().map(|item| html! {
                                            <li key={item.label}>
                                                <NavAction to={item.to} {strategy}>{item.label}</NavAction>
                                            </li>
                                        })
                                    }
                                </ul>
                            </div>
                        })
                    }
                </div>
                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>
        </footer>
    }
}
