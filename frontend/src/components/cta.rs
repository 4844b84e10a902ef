use yew::prelude::*;

use crate::components::navigation::{Destination, NavAction, NavStrategy};
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub strategy: NavStrategy,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let strategy = props.strategy;
    html! {
        <section id="testimonials" class="cta-section">
            <div class="container">
                <div class="section-header">
                    <h2>{"Ready to Start Your Journey?"}</h2>
                    <p>{format!("Join thousands of students who have transformed their careers with {}", config::BRAND_NAME)}</p>
                </div>
                <div class="cta-buttons">
                    <NavAction to={Destination::Route(Route::Register)} {strategy} classes="btn btn-primary btn-large">
                        {"Enroll Now - Start for Free"}
                    </NavAction>
                    <NavAction to={Destination::Route(Route::Login)} {strategy} classes="btn btn-secondary">
                        {"Already have an account? Login"}
                    </NavAction>
                </div>
                <p class="cta-note">{"No credit card required • 7-day free trial • Cancel anytime"}</p>
            </div>
        </section>
    }
}
