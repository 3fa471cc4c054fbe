pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod ingredient_classifier;
pub mod shared_main;
pub mod shopping_list;
pub mod suggestion;
