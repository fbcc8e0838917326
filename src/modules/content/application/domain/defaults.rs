//! Compiled-in default datasets.
//!
//! These are what a first-ever load seeds storage with, and what the merge
//! policy reconciles stored snapshots against when a later build ships new
//! default entries.

use chrono::{TimeZone, Utc};

use super::entities::{
    Achievement, GalleryItem, HomePageData, PortfolioData, Profile, Project, Skill,
    SkillCategory, SocialLinks,
};

fn gallery_item(
    id: &str,
    title: &str,
    image_url: &str,
    description: &str,
    category: &str,
) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        title: title.to_string(),
        image_url: image_url.to_string(),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
    }
}

fn achievement(
    id: &str,
    title: &str,
    description: &str,
    icon: &str,
    date: &str,
    organization: &str,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: Some(icon.to_string()),
        date: Some(date.to_string()),
        organization: Some(organization.to_string()),
        background_image: None,
    }
}

pub fn default_gallery_items() -> Vec<GalleryItem> {
    vec![
        gallery_item(
            "1",
            "Project Showcase",
            "https://via.placeholder.com/400x300/667eea/ffffff?text=Project+1",
            "Subscription Management System",
            "Web Application",
        ),
        gallery_item(
            "2",
            "AI Chatbot",
            "https://via.placeholder.com/400x300/764ba2/ffffff?text=AI+Chatbot",
            "Spring AI Chatbot Implementation",
            "AI/ML",
        ),
        gallery_item(
            "3",
            "Medical Imaging",
            "https://via.placeholder.com/400x300/10b981/ffffff?text=Brain+Tumor+Detection",
            "ResNet-based Brain Tumor Detection",
            "Deep Learning",
        ),
        gallery_item(
            "4",
            "Full Stack App",
            "https://via.placeholder.com/400x300/f59e0b/ffffff?text=Full+Stack",
            "Modern Web Application",
            "Web Development",
        ),
        gallery_item(
            "5",
            "API Development",
            "https://via.placeholder.com/400x300/ef4444/ffffff?text=API+Design",
            "RESTful API Architecture",
            "Backend",
        ),
        gallery_item(
            "6",
            "UI/UX Design",
            "https://via.placeholder.com/400x300/8b5cf6/ffffff?text=UI+Design",
            "Modern User Interface",
            "Frontend",
        ),
    ]
}

pub fn default_achievements() -> Vec<Achievement> {
    vec![
        achievement(
            "1",
            "Certified Java Developer",
            "Oracle Certified Professional Java SE Developer",
            "🏆",
            "2023",
            "Oracle",
        ),
        achievement(
            "2",
            "Best Project Award",
            "Won best project award for Subscription Management System",
            "🥇",
            "2024",
            "Tech Innovation Summit",
        ),
        achievement(
            "3",
            "AI/ML Specialist",
            "Completed advanced course in Machine Learning and Deep Learning",
            "🎓",
            "2024",
            "Coursera",
        ),
        achievement(
            "4",
            "Open Source Contributor",
            "Active contributor to multiple open-source projects",
            "🌟",
            "2023-2024",
            "GitHub",
        ),
        achievement(
            "5",
            "Hackathon Winner",
            "First place in regional coding hackathon",
            "💻",
            "2023",
            "Tech Community",
        ),
        achievement(
            "6",
            "Published Research",
            "Co-authored paper on AI in Medical Imaging",
            "📄",
            "2024",
            "IEEE",
        ),
    ]
}

pub fn default_profile_images() -> Vec<String> {
    vec![
        "assets/images/profile1.jpg".to_string(),
        "assets/images/profile2.jpg".to_string(),
        "assets/images/profile3.jpg".to_string(),
    ]
}

pub fn default_home_page() -> HomePageData {
    HomePageData {
        gallery_items: default_gallery_items(),
        achievements: default_achievements(),
        sections: Vec::new(),
        bio_data: None,
        profile_images: Some(default_profile_images()),
        section_headings: None,
    }
}

fn skill(id: &str, name: &str, category: SkillCategory, proficiency: i32) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category,
        proficiency,
        icon: None,
    }
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    github_url: &str,
    created: (i32, u32, u32),
) -> Project {
    let (y, m, d) = created;
    let stamp = Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap_or_default();
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image_url: None,
        github_url: Some(github_url.to_string()),
        live_url: None,
        featured: true,
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn default_portfolio() -> PortfolioData {
    PortfolioData {
        profile: Profile {
            name: "Abbana Durga Prasad".to_string(),
            title: "Java Full Stack Developer | Spring Boot | Angular | AI".to_string(),
            bio: "Passionate full-stack developer with expertise in Java, Spring Boot, \
                  Angular, and AI technologies. Building scalable applications and \
                  exploring the intersection of software development and artificial \
                  intelligence."
                .to_string(),
            email: "durga.prasad@example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            location: Some("United States".to_string()),
            avatar: None,
            social_links: Some(SocialLinks {
                github: Some("https://github.com/durgaprasad".to_string()),
                linkedin: Some("https://linkedin.com/in/durgaprasad".to_string()),
                twitter: Some("https://twitter.com/durgaprasad".to_string()),
                website: None,
            }),
        },
        skills: vec![
            skill("1", "Java", SkillCategory::Backend, 90),
            skill("2", "Spring Boot", SkillCategory::Backend, 85),
            skill("3", "Angular", SkillCategory::Frontend, 88),
            skill("4", "TypeScript", SkillCategory::Frontend, 85),
            skill("5", "MySQL", SkillCategory::Database, 80),
            skill("6", "PostgreSQL", SkillCategory::Database, 75),
            skill("7", "Docker", SkillCategory::Devops, 70),
            skill("8", "Python", SkillCategory::Backend, 75),
            skill("9", "TensorFlow", SkillCategory::Other, 65),
        ],
        projects: vec![
            project(
                "1",
                "Subscription Management System",
                "A comprehensive subscription management platform built with Spring Boot \
                 and Angular, featuring payment processing, user management, and analytics.",
                &["Java", "Spring Boot", "Angular", "MySQL", "Stripe API"],
                "https://github.com/durgaprasad/subscription-system",
                (2024, 1, 15),
            ),
            project(
                "2",
                "Spring AI Chatbot",
                "Intelligent chatbot application leveraging Spring AI framework for \
                 natural language processing and conversation management.",
                &["Java", "Spring Boot", "Spring AI", "OpenAI API"],
                "https://github.com/durgaprasad/spring-ai-chatbot",
                (2024, 2, 20),
            ),
            project(
                "3",
                "Brain Tumor Detection (ResNet)",
                "Deep learning model using ResNet architecture for medical image analysis \
                 and brain tumor detection with high accuracy.",
                &["Python", "TensorFlow", "Keras", "ResNet", "Medical Imaging"],
                "https://github.com/durgaprasad/brain-tumor-detection",
                (2024, 3, 10),
            ),
        ],
        sections: Vec::new(),
    }
}
