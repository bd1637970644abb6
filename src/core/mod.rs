pub mod generator;
pub mod prompt;

pub use crate::domain::model::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use crate::domain::ports::{ChatCompletion, ConfigProvider, Storage};
pub use crate::utils::error::Result;
