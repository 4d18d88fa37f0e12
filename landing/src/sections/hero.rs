use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};

const HERO_IMAGE: &str = "https://images.pexels.com/photos/4021775/pexels-photo-4021775.jpeg";

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">"Excellence in Medical Education"</h1>
                        <p class="hero-description">
                            "Access your MD program modules and resources anytime, anywhere. "
                            "Continue your medical education journey with our comprehensive "
                            "online learning platform designed specifically for Soma Mwanza "
                            "University medical students."
                        </p>
                        <div class="hero-actions">
                            <a href="/modules" class="btn btn-primary btn-arrow">
                                "Access Your Modules"
                                <Icon paths=ICON_ARROW_RIGHT size="18" class="btn-arrow-icon" />
                            </a>
                        </div>
                    </div>
                    <div class="hero-media">
                        <img src=HERO_IMAGE alt="Medical students learning" class="hero-image" />
                    </div>
                </div>
            </div>
        </section>
    }
}
