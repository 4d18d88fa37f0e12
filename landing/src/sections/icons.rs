//! Inline SVG icons (Lucide, 24px grid, stroked).

use leptos::prelude::*;

/// Renders a stroked icon from one or more SVG path strings.
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_MENU size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// Path data, one entry per `<path>` element
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

pub const ICON_GRADUATION_CAP: &[&str] = &[
    "M22 10v6",
    "M2 10l10-5 10 5-10 5z",
    "M6 12v5c3 3 9 3 12 0v-5",
];

pub const ICON_MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];

pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

pub const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

pub const ICON_CHEVRON_RIGHT: &[&str] = &["m9 18 6-6-6-6"];

pub const ICON_ALERT_CIRCLE: &[&str] = &[
    "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
    "M12 8v4",
    "M12 16h.01",
];

pub const ICON_BOOK_OPEN: &[&str] = &[
    "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
    "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
];

pub const ICON_AWARD: &[&str] = &[
    "M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
    "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
];

pub const ICON_LIGHTBULB: &[&str] = &[
    "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
    "M9 18h6",
    "M10 22h4",
];

pub const ICON_USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];
