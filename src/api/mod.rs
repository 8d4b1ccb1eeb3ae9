pub mod photo_query;
pub mod photos_api;
pub mod photos_structs;
