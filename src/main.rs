use clap::Parser;
use testgen::utils::{logger, validation::Validate};
use testgen::{AzureChatClient, AzureConfig, CliConfig, GenerationEngine, LocalStorage};

// 未指定 --snippet-file 時使用的內建範例
const SAMPLE_SNIPPET: &str = r#"def calculator(a, b, operator):
    if operator == 'addition':
        return a + b
    elif operator == 'subtraction':
        return a - b
    elif operator == 'multiplication':
        return a * b
    elif operator == 'division':
        if b == 0:
            raise ValueError("Division by zero not allowed")
        return a / b
    else:
        raise ValueError("Operation not supported")
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在時直接沿用現有環境變數
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting testgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證遠端服務設定，任何缺漏都在發出請求前失敗
    let azure_config = AzureConfig::from_env();
    if let Err(e) = azure_config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // 讀取程式碼片段
    let snippet = match &config.snippet_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("❌ Failed to read snippet file {}: {}", path, e);
                eprintln!("❌ 無法讀取片段檔案 {}: {}", path, e);
                std::process::exit(3);
            }
        },
        None => {
            tracing::warn!("No snippet file given, using the built-in sample");
            SAMPLE_SNIPPET.to_string()
        }
    };

    // 建立客戶端與儲存，組成產生引擎
    let client = match AzureChatClient::new(azure_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };
    let storage = LocalStorage::new(".".to_string());
    let engine = GenerationEngine::new(client, storage);

    println!("🧪 Generating unit tests for the provided code...\n");

    let tests = match engine.generate(&snippet).await {
        Ok(tests) => tests,
        Err(e) => {
            tracing::error!("❌ Test generation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    println!("✅ Successfully generated tests:\n");
    println!("{}", tests);

    if let Err(e) = engine.persist(&tests, &config.output).await {
        tracing::error!("❌ Failed to save tests: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Test generation completed successfully!");
    println!("\n💾 Tests saved to '{}'", config.output);

    Ok(())
}
