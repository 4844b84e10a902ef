use yew::prelude::*;

use crate::config;
use crate::content::{Feature, FEATURES};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { icon, title, description } = props.feature;
    html! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2>{format!("Why Choose {}?", config::BRAND_NAME)}</h2>
                    <p>{"We provide everything you need to become a professional full-stack developer"}</p>
                </div>
                <div class="features-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <FeatureCard key={feature.title} feature={*feature} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
