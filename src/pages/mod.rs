//! Page components for Folio.

mod blog;
mod blog_post;
mod entry_detail;
mod home;
mod photography;
mod portfolio;
mod skillset;
mod timeline;

pub use blog::Blog;
pub use blog_post::BlogPost;
pub use entry_detail::{EducationDetail, ProjectDetail, WorkDetail};
pub use home::Home;
pub use photography::Photography;
pub use portfolio::Portfolio;
pub use skillset::Skillset;
pub use timeline::Timeline;
