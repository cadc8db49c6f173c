pub mod entity;
pub mod errors;
pub mod item_id;
pub mod like_count;
pub mod repository;
