#![cfg(feature = "api")]

//! Live API tests. Require GEMINI_API_KEY and network access:
//! `cargo test -p contentcraft_models --features api`

use contentcraft_core::GenerateRequest;
use contentcraft_interface::{ImageGenerator, TextGenerator};
use contentcraft_models::GeminiClient;
use serde_json::json;

#[tokio::test]
async fn live_generate_text() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::new()?;

    let request = GenerateRequest::text("Reply with the single word: pong");
    let text = client.generate(&request).await?;
    assert!(!text.is_empty());
    Ok(())
}

#[tokio::test]
async fn live_generate_structured() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::new()?;

    let schema = json!({
        "type": "OBJECT",
        "properties": { "answer": { "type": "STRING" } },
        "required": ["answer"]
    });
    let request = GenerateRequest::text("Answer with the word pong.");
    let value = client.generate_structured(&request, &schema).await?;
    assert!(value.get("answer").is_some());
    Ok(())
}

#[tokio::test]
async fn live_render_image() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let client = GeminiClient::new()?;

    let image = client.render("a lighthouse at dawn").await?;
    if let Some(image) = image {
        assert!(!image.data.is_empty());
        assert!(image.to_data_url().starts_with("data:image/"));
    }
    Ok(())
}
