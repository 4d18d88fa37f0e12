use leptos::ev;
use leptos::prelude::*;

use super::SITE_NAME;
use super::icons::{ICON_GRADUATION_CAP, ICON_MENU, ICON_X, Icon};

/// Scroll offset (px) past which the header turns opaque.
const SCROLL_THRESHOLD: f64 = 10.0;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/modules", "MD Modules"),
    ("/resources", "Learning Resources"),
    ("/support", "Student Support"),
];

const MODULE_YEARS: &[(&str, &str)] = &[
    ("/modules/year-1", "Year 1 Modules"),
    ("/modules/year-2", "Year 2 Modules"),
    ("/modules/year-3", "Year 3 Modules"),
];

const PORTAL_LINK: &str = "/student-portal";

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-header scrolled"
    } else {
        "site-header"
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(offset > SCROLL_THRESHOLD);
    });
    on_cleanup(move || listener.remove());

    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="container header-inner">
                <a href="/" class="header-brand">
                    <Icon paths=ICON_GRADUATION_CAP size="32" class="brand-icon" />
                    <span class="brand-title">{SITE_NAME}</span>
                </a>

                <nav class="header-nav">
                    {NAV_LINKS.iter().map(|&(href, label)| {
                        if href == "/modules" {
                            view! {
                                <div class="nav-dropdown">
                                    <a href=href class="nav-link">
                                        <span>{label}</span>
                                        <span class="nav-caret">"▼"</span>
                                    </a>
                                    <div class="nav-dropdown-menu">
                                        {MODULE_YEARS.iter().map(|&(href, label)| view! {
                                            <a href=href class="nav-dropdown-link">{label}</a>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }.into_any()
                        } else {
                            view! { <a href=href class="nav-link">{label}</a> }.into_any()
                        }
                    }).collect::<Vec<_>>()}
                </nav>

                <div class="header-actions">
                    <a href=PORTAL_LINK class="btn btn-primary">"Student Portal"</a>
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <Icon paths=ICON_X size="24" /> }.into_any()
                    } else {
                        view! { <Icon paths=ICON_MENU size="24" /> }.into_any()
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <div class="container mobile-menu-inner">
                        {NAV_LINKS.iter().map(|&(href, label)| view! {
                            <a href=href class="mobile-link">{label}</a>
                        }).collect::<Vec<_>>()}
                        <div class="mobile-portal">
                            <a href=PORTAL_LINK class="btn btn-primary">"Student Portal"</a>
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
