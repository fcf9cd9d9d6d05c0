//! Backend endpoint catalogue.

use std::fmt;
use std::str::FromStr;

/// A path on the backend API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Work,
    Projects,
    Education,
    Photos,
    BlogPosts,
    BlogPost(String),
    BlogTag(String),
    BlogTags,
    /// CDN folder listing; the folder path goes in raw, slashes included
    FolderImages(String),
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Work => "/data/work".to_string(),
            Endpoint::Projects => "/data/projects.json".to_string(),
            Endpoint::Education => "/data/education.json".to_string(),
            Endpoint::Photos => "/data/photos.json".to_string(),
            Endpoint::BlogPosts => "/blog".to_string(),
            Endpoint::BlogPost(slug) => format!("/blog/{}", slug),
            Endpoint::BlogTag(tag) => format!("/blog/tag/{}", tag),
            Endpoint::BlogTags => "/blog/tags".to_string(),
            Endpoint::FolderImages(folder) => {
                format!("/cloudinary/images/{}", folder.trim_start_matches('/'))
            }
        }
    }

    /// Content endpoints mirrored by bundled JSON
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            Endpoint::Work | Endpoint::Projects | Endpoint::Education | Endpoint::Photos
        )
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Content collections addressable by name from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Work,
    Projects,
    Education,
    Photos,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Work,
        Collection::Projects,
        Collection::Education,
        Collection::Photos,
    ];

    pub fn endpoint(self) -> Endpoint {
        match self {
            Collection::Work => Endpoint::Work,
            Collection::Projects => Endpoint::Projects,
            Collection::Education => Endpoint::Education,
            Collection::Photos => Endpoint::Photos,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Collection::Work => "work",
            Collection::Projects => "projects",
            Collection::Education => "education",
            Collection::Photos => "photos",
        }
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown collection '{}' (expected work, projects, education or photos)",
                    s
                )
            })
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Work.path(), "/data/work");
        assert_eq!(Endpoint::Projects.path(), "/data/projects.json");
        assert_eq!(Endpoint::BlogPost("hello-world".into()).path(), "/blog/hello-world");
        assert_eq!(Endpoint::BlogTag("rust".into()).path(), "/blog/tag/rust");
        assert_eq!(
            Endpoint::FolderImages("portfolio/work/casa-ato".into()).path(),
            "/cloudinary/images/portfolio/work/casa-ato"
        );
    }

    #[test]
    fn test_content_endpoints() {
        assert!(Endpoint::Photos.is_content());
        assert!(!Endpoint::BlogPosts.is_content());
        assert!(!Endpoint::FolderImages("x".into()).is_content());
    }

    #[test]
    fn test_collection_parse() {
        assert_eq!("Photos".parse::<Collection>(), Ok(Collection::Photos));
        assert!("blog".parse::<Collection>().is_err());
        assert_eq!(Collection::Work.endpoint(), Endpoint::Work);
    }
}
