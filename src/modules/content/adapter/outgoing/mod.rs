pub mod snapshot_store_memory;
pub mod snapshot_store_redb;
