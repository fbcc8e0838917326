use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Home page records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    /// Empty string means "no image".
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Achievement {
    pub const DEFAULT_ICON: &'static str = "🏆";

    /// Icon shown when none was set.
    pub fn display_icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(Self::DEFAULT_ICON)
    }
}

/// Free-form, user-ordered custom content block. The same shape serves the
/// home page and the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeadings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements_subtitle: Option<String>,
}

/// Persisted aggregate of the home page, snapshot key `home_page_data`.
///
/// Optional fields carry partial-load semantics: a snapshot that omits a
/// field must not erase the value the defaults provide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageData {
    pub gallery_items: Vec<GalleryItem>,
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_headings: Option<SectionHeadings>,
}

impl HomePageData {
    pub fn profile_image_count(&self) -> usize {
        self.profile_images.as_ref().map_or(0, |imgs| imgs.len())
    }
}

//
// ──────────────────────────────────────────────────────────
// Portfolio records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// One per dataset; no identity beyond the aggregate it lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Other,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// Conceptually 0–100; persisted exactly as given, no range enforcement.
    pub proficiency: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Insertion-ordered; duplicates permitted.
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persisted aggregate of the portfolio page, snapshot key `portfolio_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

/// Fresh identifier for a newly created record.
///
/// Random UUIDs rather than wall-clock strings, so rapid successive creates
/// cannot collide.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
