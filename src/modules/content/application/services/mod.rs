pub mod carousel;
pub mod home_content_service;
pub mod portfolio_content_service;
pub mod snapshot_codec;
