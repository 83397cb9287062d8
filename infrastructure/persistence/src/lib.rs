pub mod db;
mod errors;
pub mod item {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
