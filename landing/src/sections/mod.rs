// Landing page sections

/// Institution name shown in the header.
pub const SITE_NAME: &str = "Soma Mwanza University";

mod features;
mod header;
mod hero;
mod icons;
mod latest_courses;

pub use features::FeatureCards;
pub use header::Header;
pub use hero::HeroSection;
pub use latest_courses::LatestCourses;
