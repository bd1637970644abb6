use httpmock::prelude::*;
use testgen::utils::error::GenError;
use testgen::{AzureChatClient, AzureConfig, GenerationEngine, LocalStorage};
use tempfile::TempDir;

fn test_config(endpoint: String) -> AzureConfig {
    AzureConfig {
        deployment_name: "gpt-4o-tests".to_string(),
        model_name: "gpt-4o".to_string(),
        api_key: "test-key".to_string(),
        api_version: "2024-02-15-preview".to_string(),
        endpoint,
    }
}

#[tokio::test]
async fn test_end_to_end_generation_with_mock_api() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let response_body = serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "def test_x(): assert True"},
                "finish_reason": "stop"
            }
        ]
    });

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/deployments/gpt-4o-tests/chat/completions")
            .query_param("api-version", "2024-02-15-preview")
            .header("api-key", "test-key")
            .body_contains("def x(): return 1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(response_body);
    });

    let client = AzureChatClient::new(test_config(server.base_url())).unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let engine = GenerationEngine::new(client, storage);

    let result = engine.run("def x(): return 1", "out.py").await;

    assert!(result.is_ok());
    api_mock.assert();

    let full_path = temp_dir.path().join("out.py");
    let content = std::fs::read_to_string(full_path).unwrap();
    assert_eq!(content, "def test_x(): assert True");
}

#[tokio::test]
async fn test_remote_failure_leaves_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/deployments/gpt-4o-tests/chat/completions");
        then.status(500).body("internal error");
    });

    let client = AzureChatClient::new(test_config(server.base_url())).unwrap();
    let storage = LocalStorage::new(output_path.clone());
    let engine = GenerationEngine::new(client, storage);

    let result = engine.run("def x(): return 1", "out.py").await;

    api_mock.assert();
    match result {
        Err(GenError::RemoteServiceError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("internal error"));
        }
        other => panic!("expected RemoteServiceError, got {:?}", other.map(|_| ())),
    }

    assert!(!temp_dir.path().join("out.py").exists());
}

#[tokio::test]
async fn test_auth_failure_surfaces_status_and_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/deployments/gpt-4o-tests/chat/completions");
        then.status(401).body("invalid api key");
    });

    let client = AzureChatClient::new(test_config(server.base_url())).unwrap();
    let storage = LocalStorage::new(".".to_string());
    let engine = GenerationEngine::new(client, storage);

    let result = engine.generate("def x(): return 1").await;

    api_mock.assert();
    match result {
        Err(GenError::RemoteServiceError { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid api key"));
        }
        other => panic!("expected RemoteServiceError, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_missing_config_fails_before_any_network_call() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path_contains("/openai/");
        then.status(200);
    });

    let config = AzureConfig {
        api_key: "".to_string(),
        ..test_config(server.base_url())
    };

    let result = AzureChatClient::new(config);

    match result {
        Err(GenError::MissingConfigError { field }) => {
            assert!(field.contains("AZURE_OPENAI_API_KEY"));
        }
        _ => panic!("expected MissingConfigError"),
    }
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_empty_choices_is_a_remote_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/deployments/gpt-4o-tests/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"choices": []}));
    });

    let client = AzureChatClient::new(test_config(server.base_url())).unwrap();
    let storage = LocalStorage::new(".".to_string());
    let engine = GenerationEngine::new(client, storage);

    let result = engine.generate("def x(): return 1").await;

    api_mock.assert();
    assert!(matches!(
        result,
        Err(GenError::RemoteServiceError { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_response_text_is_not_trimmed_or_reformatted() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // Leading/trailing whitespace must survive into the file untouched
    let raw_text = "\n\ndef test_x():\n    assert True\n\n";

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/deployments/gpt-4o-tests/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": raw_text}}]
            }));
    });

    let client = AzureChatClient::new(test_config(server.base_url())).unwrap();
    let storage = LocalStorage::new(output_path);
    let engine = GenerationEngine::new(client, storage);

    engine.run("def x(): return 1", "out.py").await.unwrap();

    api_mock.assert();
    let content = std::fs::read_to_string(temp_dir.path().join("out.py")).unwrap();
    assert_eq!(content, raw_text);
}

#[tokio::test]
async fn test_persist_overwrites_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/openai/deployments/gpt-4o-tests/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "second run"}}]
            }));
    });

    std::fs::write(
        temp_dir.path().join("out.py"),
        "a much longer first run output that must disappear",
    )
    .unwrap();

    let client = AzureChatClient::new(test_config(server.base_url())).unwrap();
    let storage = LocalStorage::new(output_path);
    let engine = GenerationEngine::new(client, storage);

    engine.run("def x(): return 1", "out.py").await.unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("out.py")).unwrap();
    assert_eq!(content, "second run");
}
