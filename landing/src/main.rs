// Soma Mwanza University landing page — Leptos 0.8 CSR

mod sections;

use leptos::prelude::*;
use sections::*;
use smu_courses::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Moodle settings are baked in at build time, like any other static asset.
fn site_config() -> SiteConfig {
    SiteConfig::new(option_env!("MOODLE_URL"), option_env!("MOODLE_TOKEN"))
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Header />
        <main>
            <HeroSection />
            <FeatureCards />
            <LatestCourses config=site_config() />
        </main>
    }
}
