//! # smu-courses
//!
//! The "latest courses" pipeline behind the Soma Mwanza University landing page.
//!
//! Given the Moodle base URL and web-service token, the pipeline lists the
//! courses exposed by the LMS, keeps the first three, asks for their overview
//! (preview) files in one batched call, and merges the two answers into
//! [`EnrichedCourse`] records. The [`present`] module turns those records into
//! card view models and the mutually exclusive panel states the page renders.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smu_courses::{CoursePanel, ReqwestTransport, SiteConfig};
//!
//! # async fn run() {
//! let site = SiteConfig::from_env();
//! let panel = CoursePanel::resolve(&site, ReqwestTransport::new()).await;
//! match panel {
//!     CoursePanel::Ready(cards) => println!("{} courses", cards.len()),
//!     other => println!("{other:?}"),
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - explicit configuration record (no ambient reads in the fetcher)
//! - [`types`] - Moodle wire records
//! - [`transport`] - the HTTP seam and its reqwest implementation
//! - [`fetch`] - the two-call retrieval and merge
//! - [`present`] - card mapping and view state
//! - [`task`] - abortable loads for views that can unmount mid-flight
//! - [`error`] - error taxonomy

pub mod config;
pub mod error;
pub mod fetch;
pub mod present;
pub mod task;
pub mod transport;
pub mod types;

pub use config::{MoodleConfig, SiteConfig};
pub use error::{ConfigError, FetchError, RetrievalError, TransportError};
pub use fetch::{COURSE_LIMIT, CourseFetcher, load_latest_courses};
pub use present::{CourseCard, CoursePanel};
pub use task::cancellable;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{Course, EnrichedCourse, OverviewFile};
