use serde::Serialize;

/// Where an uploaded image is used on the site. Each category maps to its own
/// subdirectory of the upload root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Profile,
    Gallery,
    Achievement,
}

impl ImageCategory {
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "profile" => Some(Self::Profile),
            "gallery" => Some(Self::Gallery),
            "achievements" => Some(Self::Achievement),
            _ => None,
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Gallery => "gallery",
            Self::Achievement => "achievements",
        }
    }
}

/// Result of a successful upload, echoed back so the admin UI can link the
/// image into page content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    pub file_name: String,
    pub url: String,
    pub size_bytes: usize,
}
