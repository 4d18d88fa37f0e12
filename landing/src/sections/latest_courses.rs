use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use smu_courses::config::{MOODLE_TOKEN_VAR, MOODLE_URL_VAR};
use smu_courses::present::PLACEHOLDER_CARDS;
use smu_courses::{
    CourseCard, CoursePanel, ReqwestTransport, SiteConfig, cancellable, load_latest_courses,
};

use super::icons::{ICON_ALERT_CIRCLE, ICON_CHEVRON_RIGHT, Icon};

/// Example environment block shown when Moodle is not configured.
fn env_example() -> String {
    format!("{MOODLE_URL_VAR}=your_moodle_url\n{MOODLE_TOKEN_VAR}=your_moodle_token")
}

#[component]
pub fn LatestCourses(config: SiteConfig) -> impl IntoView {
    let (panel, set_panel) = signal(CoursePanel::initial(&config));

    // One fetch per mount. Unmounting aborts it so a late response is dropped.
    if config.is_complete() {
        let load = async move {
            let outcome = load_latest_courses(&config, ReqwestTransport::new()).await;
            if let Err(e) = &outcome {
                logging::error!("Error fetching courses: {e}");
            }
            CoursePanel::from_outcome(&config, outcome)
        };
        let (task, abort) = cancellable(load, move |settled| {
            let _ = set_panel.try_set(settled);
        });
        on_cleanup(move || abort.abort());
        spawn_local(task);
    }

    view! {
        <section id="courses" class="latest-courses">
            <div class="container">
                {move || match panel.get() {
                    CoursePanel::ConfigurationMissing { settings } => {
                        view! { <ConfigurationNotice settings=settings /> }.into_any()
                    }
                    CoursePanel::Failed => view! { <FailureNotice /> }.into_any(),
                    CoursePanel::Loading => view! {
                        <SectionTitle />
                        <div class="courses-grid">
                            {(0..PLACEHOLDER_CARDS).map(|_| view! { <PlaceholderCard /> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                    CoursePanel::Empty => view! {
                        <SectionTitle />
                        <div class="courses-grid">
                            <div class="courses-empty">"No courses available at the moment."</div>
                        </div>
                    }.into_any(),
                    CoursePanel::Ready(cards) => view! {
                        <SectionTitle />
                        <div class="courses-grid">
                            {cards.into_iter().map(|card| view! { <CourseCardView card=card /> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn SectionTitle() -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">"Latest Courses"</h2>
        </div>
    }
}

#[component]
fn ConfigurationNotice(settings: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="notice notice-warning">
            <Icon paths=ICON_ALERT_CIRCLE size="32" class="notice-icon" />
            <h3 class="notice-title">"Moodle Configuration Required"</h3>
            <p class="notice-text">"To display courses, you need to configure your Moodle integration."</p>
            <div class="notice-box">
                <p class="notice-hint">"Add these variables to your environment:"</p>
                <pre class="notice-code"><code>{env_example()}</code></pre>
                <p class="notice-missing">"Missing: "{settings.join(", ")}</p>
            </div>
        </div>
    }
}

#[component]
fn FailureNotice() -> impl IntoView {
    view! {
        <div class="notice notice-error">
            <Icon paths=ICON_ALERT_CIRCLE size="20" class="notice-icon" />
            <p>"Failed to load courses. Please verify your Moodle API token and try again."</p>
        </div>
    }
}

#[component]
fn PlaceholderCard() -> impl IntoView {
    view! {
        <div class="course-card placeholder">
            <div class="placeholder-image"></div>
            <div class="placeholder-line short"></div>
            <div class="placeholder-line wide"></div>
            <div class="placeholder-footer">
                <div class="placeholder-line short"></div>
                <div class="placeholder-line short"></div>
            </div>
        </div>
    }
}

#[component]
fn CourseCardView(card: CourseCard) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let CourseCard {
        image,
        title,
        category,
        description,
        link,
        ..
    } = card;
    let alt = title.clone();

    view! {
        <article class="course-card">
            <div class="course-media">
                <Show when=move || !loaded.get()>
                    <div class="course-spinner"></div>
                </Show>
                <img
                    src=image
                    alt=alt
                    class="course-image"
                    class:loaded=move || loaded.get()
                    on:load=move |_| set_loaded.set(true)
                />
            </div>
            <div class="course-body">
                <span class="course-badge">{category}</span>
                <h3 class="course-title">{title}</h3>
                <p class="course-description">{description}</p>
                <div class="course-footer">
                    <a href=link target="_blank" rel="noopener noreferrer" class="course-link">
                        <span>"Learn more"</span>
                        <Icon paths=ICON_CHEVRON_RIGHT size="16" />
                    </a>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_example_names_both_settings() {
        assert_eq!(
            env_example(),
            "MOODLE_URL=your_moodle_url\nMOODLE_TOKEN=your_moodle_token"
        );
    }
}
