//! Moodle web-service records.
//!
//! Only the fields the site uses are modelled; everything else in the payload
//! is ignored during decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `core_course_get_courses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub shortname: String,
    /// Free text, usually HTML.
    #[serde(default)]
    pub summary: String,
}

/// A course overview (preview) file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewFile {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub fileurl: String,
    #[serde(default)]
    pub filesize: u64,
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub mimetype: String,
    /// Unix timestamp, seconds.
    #[serde(default)]
    pub timemodified: i64,
}

/// A course merged with its overview files. Built per fetch, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedCourse {
    #[serde(flatten)]
    pub course: Course,
    #[serde(rename = "overviewFiles", default)]
    pub overview_files: Vec<OverviewFile>,
}

impl EnrichedCourse {
    /// First overview file, used as the card thumbnail.
    pub fn thumbnail(&self) -> Option<&OverviewFile> {
        self.overview_files.first()
    }
}

/// Error envelope Moodle returns (with HTTP 200) for bad tokens, unknown
/// functions or invalid parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceException {
    pub exception: String,
    pub errorcode: String,
    #[serde(default)]
    pub message: String,
}

/// A web-service body: either the expected payload or an exception envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WsResponse<T> {
    Exception(ServiceException),
    Data(T),
}

/// Files response: course id (as a string key) to its files.
pub(crate) type OverviewFilesByCourse = HashMap<String, Vec<OverviewFile>>;

/// Read a files reply leniently. Only an object carries files; any other JSON
/// value (PHP writes an empty map as `[]`, or an exception envelope) yields no
/// files. Entries that are `null` or do not decode as a file list are empty.
pub(crate) fn overview_files_from_value(value: Value) -> OverviewFilesByCourse {
    let Value::Object(entries) = value else {
        return HashMap::new();
    };
    entries
        .into_iter()
        .map(|(id, files)| {
            let files = serde_json::from_value::<Option<Vec<OverviewFile>>>(files)
                .ok()
                .flatten()
                .unwrap_or_default();
            (id, files)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_ignores_unknown_fields() {
        let json = r#"{
            "id": 7,
            "fullname": "Human Anatomy I",
            "shortname": "ANAT101",
            "summary": "<p>Intro to Anatomy</p>",
            "categoryid": 3,
            "format": "topics",
            "visible": 1
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, 7);
        assert_eq!(course.shortname, "ANAT101");
        assert_eq!(course.summary, "<p>Intro to Anatomy</p>");
    }

    #[test]
    fn course_defaults_missing_text() {
        let course: Course = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(course.fullname, "");
        assert_eq!(course.summary, "");
    }

    #[test]
    fn exception_envelope_wins_over_data() {
        let json = r#"{
            "exception": "moodle_exception",
            "errorcode": "invalidtoken",
            "message": "Invalid token - token not found"
        }"#;
        let parsed: WsResponse<Vec<Course>> = serde_json::from_str(json).unwrap();
        match parsed {
            WsResponse::Exception(e) => assert_eq!(e.errorcode, "invalidtoken"),
            WsResponse::Data(_) => panic!("expected exception envelope"),
        }

        let parsed: WsResponse<Vec<Course>> = serde_json::from_str("[]").unwrap();
        assert!(matches!(parsed, WsResponse::Data(ref courses) if courses.is_empty()));
    }

    #[test]
    fn files_map_reads_null_and_garbage_as_empty() {
        let value = serde_json::json!({
            "1": [{"filename": "a.jpg", "fileurl": "https://lms/a.jpg", "filesize": 10,
                   "filepath": "/", "mimetype": "image/jpeg", "timemodified": 1700000000}],
            "2": null,
            "3": "unexpected"
        });
        let map = overview_files_from_value(value);
        assert_eq!(map["1"].len(), 1);
        assert_eq!(map["1"][0].fileurl, "https://lms/a.jpg");
        assert!(map["2"].is_empty());
        assert!(map["3"].is_empty());
    }

    #[test]
    fn non_object_files_reply_has_no_files() {
        assert!(overview_files_from_value(serde_json::json!([])).is_empty());
        assert!(overview_files_from_value(Value::Null).is_empty());
        assert!(overview_files_from_value(serde_json::json!([[{"fileurl": "x"}]])).is_empty());
    }

    #[test]
    fn enriched_course_thumbnail_is_first_file() {
        let file = |name: &str| OverviewFile {
            filename: name.into(),
            fileurl: format!("https://lms/{name}"),
            filesize: 1,
            filepath: "/".into(),
            mimetype: "image/png".into(),
            timemodified: 0,
        };
        let enriched = EnrichedCourse {
            course: Course {
                id: 1,
                fullname: "A".into(),
                shortname: "a".into(),
                summary: String::new(),
            },
            overview_files: vec![file("first.png"), file("second.png")],
        };
        assert_eq!(enriched.thumbnail().map(|f| f.filename.as_str()), Some("first.png"));
    }
}
