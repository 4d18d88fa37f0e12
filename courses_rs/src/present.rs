//! Card mapping and view state for the "Latest Courses" panel.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{MoodleConfig, SiteConfig};
use crate::error::FetchError;
use crate::fetch::load_latest_courses;
use crate::transport::Transport;
use crate::types::EnrichedCourse;

/// Placeholder cards shown while a fetch is outstanding.
pub const PLACEHOLDER_CARDS: usize = 3;

/// Summary characters kept before the ellipsis.
pub const SUMMARY_LIMIT: usize = 150;

/// Thumbnail for courses without an overview file.
pub const DEFAULT_THUMBNAIL: &str = "https://images.pexels.com/photos/5905555/pexels-photo-5905555.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Remove every `<...>` tag. Entities are left as they are.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Card description: tags stripped, cut to [`SUMMARY_LIMIT`] characters, and
/// `...` appended. The suffix is appended even when nothing was cut.
pub fn summarize(summary: &str) -> String {
    let text = strip_tags(summary);
    let mut out: String = text.chars().take(SUMMARY_LIMIT).collect();
    out.push_str("...");
    out
}

/// Outbound link to the course page on the LMS.
pub fn course_link(base_url: &str, course_id: i64) -> String {
    format!("{base_url}/course/view.php?id={course_id}")
}

/// Everything a course card renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCard {
    pub id: i64,
    pub image: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub link: String,
}

impl CourseCard {
    pub fn from_enriched(course: &EnrichedCourse, config: &MoodleConfig) -> Self {
        let image = course
            .thumbnail()
            .map(|file| file.fileurl.as_str())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_THUMBNAIL)
            .to_string();

        Self {
            id: course.course.id,
            image,
            title: course.course.fullname.clone(),
            category: course.course.shortname.clone(),
            description: summarize(&course.course.summary),
            link: course_link(config.base_url(), course.course.id),
        }
    }
}

/// The mutually exclusive states of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursePanel {
    Loading,
    /// Nothing was attempted; `settings` names what to set.
    ConfigurationMissing { settings: Vec<&'static str> },
    Failed,
    Empty,
    Ready(Vec<CourseCard>),
}

impl CoursePanel {
    /// State before any fetch: loading when configured, otherwise the
    /// configuration notice.
    pub fn initial(site: &SiteConfig) -> Self {
        if site.is_complete() {
            CoursePanel::Loading
        } else {
            CoursePanel::ConfigurationMissing {
                settings: site.missing_settings(),
            }
        }
    }

    /// Map a finished fetch onto the panel.
    pub fn from_outcome(
        site: &SiteConfig,
        outcome: Result<Vec<EnrichedCourse>, FetchError>,
    ) -> Self {
        match (outcome, site.moodle()) {
            // A successful fetch implies a complete `site`. `Ok` paired with an
            // incomplete one means the caller passed a different record than the
            // one it fetched with; show the configuration notice for the record given.
            (Err(FetchError::ConfigurationMissing(_)), _) | (Ok(_), Err(_)) => {
                CoursePanel::ConfigurationMissing {
                    settings: site.missing_settings(),
                }
            }
            (Err(FetchError::Retrieval(_)), _) => CoursePanel::Failed,
            (Ok(courses), Ok(_)) if courses.is_empty() => CoursePanel::Empty,
            (Ok(courses), Ok(config)) => CoursePanel::Ready(
                courses
                    .iter()
                    .map(|course| CourseCard::from_enriched(course, &config))
                    .collect(),
            ),
        }
    }

    /// Run the whole pipeline and produce the settled state.
    pub async fn resolve<T: Transport>(site: &SiteConfig, transport: T) -> Self {
        let outcome = load_latest_courses(site, transport).await;
        Self::from_outcome(site, outcome)
    }
}
