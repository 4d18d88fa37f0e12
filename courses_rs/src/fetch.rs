//! Latest-courses retrieval.
//!
//! Two strictly sequential calls against the Moodle REST endpoint: list all
//! courses, keep the head of the list, then ask for the overview files of
//! exactly those courses in one batched call. Either call failing fails the
//! whole operation; there is no partial result.

use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::config::{MoodleConfig, SiteConfig};
use crate::error::{FetchError, RetrievalError, Stage};
use crate::transport::Transport;
use crate::types::{
    Course, EnrichedCourse, OverviewFilesByCourse, WsResponse, overview_files_from_value,
};

/// Display cap: at most this many courses are shown.
pub const COURSE_LIMIT: usize = 3;

const REST_PATH: &str = "webservice/rest/server.php";
const FN_GET_COURSES: &str = "core_course_get_courses";
const FN_GET_OVERVIEW_FILES: &str = "core_course_get_course_overview_files";

/// Fetches and merges course data for one configured Moodle site.
pub struct CourseFetcher<T> {
    config: MoodleConfig,
    transport: T,
}

impl<T: Transport> CourseFetcher<T> {
    pub fn new(config: MoodleConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Up to [`COURSE_LIMIT`] courses in service order, each with its overview
    /// files (empty when the service has none for it).
    pub async fn latest_courses(&self) -> Result<Vec<EnrichedCourse>, RetrievalError> {
        let body = self.get_body(Stage::Courses, FN_GET_COURSES, &[]).await?;
        let courses: Vec<Course> = decode_strict(Stage::Courses, &body)?;
        let total = courses.len();
        let selected: Vec<Course> = courses.into_iter().take(COURSE_LIMIT).collect();
        debug!(total, selected = selected.len(), "listed courses");

        // Nothing to decorate; the files call would only carry an empty id list.
        if selected.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<(String, String)> = selected
            .iter()
            .enumerate()
            .map(|(i, course)| (format!("courseids[{i}]"), course.id.to_string()))
            .collect();
        let body = self
            .get_body(Stage::OverviewFiles, FN_GET_OVERVIEW_FILES, &ids)
            .await?;
        let files = decode_files(&body)?;

        Ok(merge(selected, &files))
    }

    /// Build the REST URL for a web-service function.
    pub fn endpoint(
        &self,
        function: &str,
        extra: &[(String, String)],
    ) -> Result<Url, RetrievalError> {
        let base = format!("{}/{}", self.config.base_url(), REST_PATH);
        let params = [
            ("wstoken", self.config.token()),
            ("wsfunction", function),
            ("moodlewsrestformat", "json"),
        ];
        let extra = extra.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        Url::parse_with_params(&base, params.into_iter().chain(extra)).map_err(|source| {
            RetrievalError::InvalidUrl {
                url: self.config.base_url().to_string(),
                source,
            }
        })
    }

    /// Send one web-service request; any non-2xx status is a failure.
    async fn get_body(
        &self,
        stage: Stage,
        function: &str,
        extra: &[(String, String)],
    ) -> Result<String, RetrievalError> {
        let url = self.endpoint(function, extra)?;
        let response = self
            .transport
            .get(url)
            .await
            .map_err(|source| RetrievalError::Transport { stage, source })?;

        if !response.is_success() {
            return Err(RetrievalError::Status {
                stage,
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

/// Decode a payload that must have the expected shape. An exception envelope
/// is a service failure.
fn decode_strict<R: DeserializeOwned>(stage: Stage, body: &str) -> Result<R, RetrievalError> {
    match serde_json::from_str::<WsResponse<R>>(body) {
        Ok(WsResponse::Data(data)) => Ok(data),
        Ok(WsResponse::Exception(e)) => Err(RetrievalError::Service {
            stage,
            errorcode: e.errorcode,
            message: e.message,
        }),
        Err(_) => {
            // Re-decode as the bare payload for a precise error message.
            let source = serde_json::from_str::<R>(body)
                .err()
                .unwrap_or_else(|| serde::de::Error::custom("unrecognised response body"));
            Err(RetrievalError::Decode { stage, source })
        }
    }
}

/// Decode the files reply. Any JSON body is accepted: PHP encodes an empty map
/// as `[]`, and courses the reply says nothing about just get no files.
fn decode_files(body: &str) -> Result<OverviewFilesByCourse, RetrievalError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| RetrievalError::Decode {
            stage: Stage::OverviewFiles,
            source,
        })?;
    if !value.is_object() {
        debug!("course files reply is not a map; no thumbnails");
    }
    Ok(overview_files_from_value(value))
}

fn merge(courses: Vec<Course>, files: &OverviewFilesByCourse) -> Vec<EnrichedCourse> {
    courses
        .into_iter()
        .map(|course| {
            let overview_files = files
                .get(&course.id.to_string())
                .cloned()
                .unwrap_or_default();
            EnrichedCourse {
                course,
                overview_files,
            }
        })
        .collect()
}

/// Full pipeline from raw configuration: short-circuits without any request
/// when a setting is missing, otherwise runs [`CourseFetcher::latest_courses`].
/// Retrieval failures are logged and returned unchanged.
pub async fn load_latest_courses<T: Transport>(
    site: &SiteConfig,
    transport: T,
) -> Result<Vec<EnrichedCourse>, FetchError> {
    let config = match site.moodle() {
        Ok(config) => config,
        Err(missing) => {
            debug!(%missing, "skipping course fetch");
            return Err(missing.into());
        }
    };

    let fetcher = CourseFetcher::new(config, transport);
    match fetcher.latest_courses().await {
        Ok(courses) => Ok(courses),
        Err(e) => {
            error!(error = %e, "error fetching courses");
            Err(e.into())
        }
    }
}
