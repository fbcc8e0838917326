mod achievements;
mod drafts;
mod gallery;
mod home_page;
mod home_sections;
mod home_settings;
mod portfolio_page;
mod portfolio_sections;
mod profile;
mod projects;
mod skills;

pub use achievements::{delete_achievement_handler, save_achievement_handler};
pub use drafts::{
    cancel_home_draft_handler, cancel_portfolio_draft_handler, start_home_draft_handler,
    start_portfolio_draft_handler,
};
pub use gallery::{delete_gallery_item_handler, save_gallery_item_handler};
pub use home_page::{get_carousel_handler, get_home_page_handler};
pub use home_sections::{delete_home_section_handler, save_home_section_handler};
pub use home_settings::{
    update_bio_handler, update_headings_handler, update_profile_images_handler,
};
pub use portfolio_page::get_portfolio_handler;
pub use portfolio_sections::{
    delete_portfolio_section_handler, reorder_portfolio_sections_handler,
    save_portfolio_section_handler,
};
pub use profile::patch_profile_handler;
pub use projects::{delete_project_handler, save_project_handler};
pub use skills::{delete_skill_handler, save_skill_handler};
