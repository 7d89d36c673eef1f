//! Configuration management

mod file_store;
mod settings;

pub use file_store::JsonFileConfigStore;
pub use settings::AppSettings;
