pub mod db;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod brand {
    pub mod entity;
    pub mod repository;
}
pub mod sector {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod bin {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
