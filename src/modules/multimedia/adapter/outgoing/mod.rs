pub mod image_store_fs;
pub mod image_store_memory;
