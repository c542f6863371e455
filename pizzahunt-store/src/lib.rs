pub mod app_config;
pub mod spoonacular;

pub use app_config::Config;
pub use spoonacular::SpoonacularClient;
