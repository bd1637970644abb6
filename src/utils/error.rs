use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Remote service returned {status}: {message}")]
    RemoteServiceError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GenError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GenError::MissingConfigError { .. } | GenError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GenError::ApiError(e) => format!("無法連線到生成服務: {}", e),
            GenError::RemoteServiceError { status, .. } => {
                format!("生成服務回應失敗 (HTTP {})", status)
            }
            GenError::IoError(e) => format!("無法寫入輸出檔案: {}", e),
            GenError::SerializationError(e) => format!("回應內容解析失敗: {}", e),
            GenError::MissingConfigError { field } => format!("缺少必要設定: {}", field),
            GenError::InvalidConfigValueError { field, reason, .. } => {
                format!("設定 {} 無效: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::ApiError(_) => "Check network connectivity and the endpoint URL",
            GenError::RemoteServiceError { .. } => {
                "Check the API key, deployment name and API version"
            }
            GenError::IoError(_) => "Check the output path exists and is writable",
            GenError::SerializationError(_) => "The service returned an unexpected payload",
            GenError::MissingConfigError { .. } => {
                "Set the AZURE_OPENAI_* environment variables (a .env file works too)"
            }
            GenError::InvalidConfigValueError { .. } => "Fix the configuration value and run again",
        }
    }

    // 退出碼依失敗階段區分
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::MissingConfigError { .. } | GenError::InvalidConfigValueError { .. } => 2,
            GenError::ApiError(_)
            | GenError::RemoteServiceError { .. }
            | GenError::SerializationError(_) => 1,
            GenError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
