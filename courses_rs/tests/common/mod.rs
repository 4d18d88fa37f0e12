//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{Value, json};
use smu_courses::{HttpResponse, Transport, TransportError};
use url::Url;

/// Replays queued responses in order and records every requested URL.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<Url>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
        self
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError::new(message)));
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.borrow().clone()
    }

    /// Value of `key` in the query string of the `index`-th request.
    pub fn param(&self, index: usize, key: &str) -> Option<String> {
        self.requests.borrow().get(index).and_then(|url| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        })
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(url);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted reply left")))
    }
}

pub fn course(id: i64) -> Value {
    json!({
        "id": id,
        "fullname": format!("Course {id}"),
        "shortname": format!("MD{id}"),
        "summary": format!("<p>Summary of course {id}</p>"),
        "categoryid": 1,
        "format": "topics"
    })
}

pub fn courses(ids: &[i64]) -> Value {
    Value::Array(ids.iter().map(|id| course(*id)).collect())
}

pub fn overview_file(course_id: i64) -> Value {
    json!({
        "filename": format!("cover-{course_id}.jpg"),
        "fileurl": format!("https://lms.smu.ac.tz/pluginfile.php/{course_id}/course/overviewfiles/cover.jpg"),
        "filesize": 48213,
        "filepath": "/",
        "mimetype": "image/jpeg",
        "timemodified": 1717000000
    })
}
