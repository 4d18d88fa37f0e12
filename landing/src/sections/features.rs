use leptos::prelude::*;

use super::icons::{ICON_AWARD, ICON_BOOK_OPEN, ICON_LIGHTBULB, ICON_USERS, Icon};

/// Feature card content
struct Feature {
    icon: &'static [&'static str],
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: ICON_BOOK_OPEN,
        title: "Interactive Learning",
        description: "Access comprehensive MD program modules with interactive content and multimedia resources.",
    },
    Feature {
        icon: ICON_AWARD,
        title: "Clinical Excellence",
        description: "Study materials aligned with international medical education standards and best practices.",
    },
    Feature {
        icon: ICON_LIGHTBULB,
        title: "Continuous Support",
        description: "Get assistance from experienced medical faculty and access study resources 24/7.",
    },
    Feature {
        icon: ICON_USERS,
        title: "Collaborative Learning",
        description: "Connect with fellow medical students through discussion forums and virtual study groups.",
    },
];

/// Cards alternate between the primary and the light accent.
fn accent_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "feature-icon accent-primary"
    } else {
        "feature-icon accent-light"
    }
}

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="features-grid">
                    {FEATURES.iter().enumerate().map(|(index, feature)| {
                        view! {
                            <FeatureCard
                                icon=feature.icon
                                title=feature.title
                                description=feature.description
                                accent=accent_class(index)
                            />
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static [&'static str],
    title: &'static str,
    description: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class=accent>
                <Icon paths=icon size="24" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
