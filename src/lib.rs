pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::azure::AzureChatClient;
pub use adapters::storage::LocalStorage;
pub use config::{AzureConfig, CliConfig};
pub use core::generator::GenerationEngine;
pub use core::prompt::PromptTemplate;
pub use utils::error::{GenError, Result};
