pub mod db;
pub mod file_store;
pub mod product {
    pub mod entity;
    pub mod file_repository;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod file_repository;
    pub mod repository;
}
