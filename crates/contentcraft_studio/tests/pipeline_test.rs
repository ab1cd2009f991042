//! Tests for the generation-and-merge pipeline, driven through mocks.

mod test_utils;

use contentcraft_core::{
    ContentCraftConfig, Input, Platform, Post, SourceInput, ToneSelection,
};
use contentcraft_error::{
    ContentCraftError, ContentCraftErrorKind, GeminiErrorKind, StudioErrorKind,
};
use contentcraft_studio::Studio;
use std::sync::Arc;
use test_utils::{MockImageGenerator, MockTextGenerator};

fn full_payload() -> String {
    serde_json::json!({
        "LinkedIn": { "content": "linkedin body" },
        "Twitter": { "content": "tweet body" },
        "Reddit": { "title": "reddit title", "content": "reddit body" },
        "Instagram": { "content": "insta body" },
        "YouTube": { "title": "yt title", "content": "yt body" },
        "Script Ideas": { "content": "* idea one" }
    })
    .to_string()
}

fn build_studio_with(
    text: MockTextGenerator,
    image: MockImageGenerator,
    config: ContentCraftConfig,
) -> (Studio, Arc<MockTextGenerator>, Arc<MockImageGenerator>) {
    let text = Arc::new(text);
    let image = Arc::new(image);
    let studio = Studio::new(text.clone(), image.clone(), config);
    (studio, text, image)
}

fn build_studio(
    text: MockTextGenerator,
    image: MockImageGenerator,
) -> (Studio, Arc<MockTextGenerator>, Arc<MockImageGenerator>) {
    build_studio_with(text, image, ContentCraftConfig::default())
}

fn studio_kind(err: &ContentCraftError) -> Option<&StudioErrorKind> {
    match err.kind() {
        ContentCraftErrorKind::Studio(e) => Some(&e.kind),
        _ => None,
    }
}

#[tokio::test]
async fn unusable_source_issues_no_request() {
    for input in [
        SourceInput::Url("not a url".to_string()),
        SourceInput::Url(String::new()),
        SourceInput::Text("hi".to_string()),
        SourceInput::Text(String::new()),
        SourceInput::Video("/nonexistent/clip.mp4".into()),
    ] {
        let (studio, text, image) =
            build_studio(MockTextGenerator::new_success(full_payload()), MockImageGenerator::new_success());

        let err = studio
            .generate_posts(&input, &ToneSelection::default())
            .await
            .unwrap_err();
        assert_eq!(studio_kind(&err), Some(&StudioErrorKind::MissingSource));
        assert!(err.user_message().contains("provide a source"));
        assert_eq!(text.call_count(), 0);
        assert_eq!(image.call_count(), 0);
    }
}

#[tokio::test]
async fn successful_generation_merges_six_posts_with_images() {
    let (studio, text, image) =
        build_studio(MockTextGenerator::new_success(full_payload()), MockImageGenerator::new_success());

    let posts = studio
        .generate_posts(
            &SourceInput::Text("Example input text here".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap();

    assert_eq!(posts.len(), 6);
    assert_eq!(posts.reddit.title.as_deref(), Some("reddit title"));
    assert_eq!(posts.twitter.content, "tweet body");
    for (_, post) in posts.iter() {
        assert_eq!(post.image_url.as_deref(), Some("data:image/png;base64,aW1n"));
    }

    assert_eq!(text.call_count(), 1);
    assert_eq!(image.call_count(), 6);
}

#[tokio::test]
async fn post_request_carries_configured_temperature_and_model() {
    let (studio, text, _image) =
        build_studio(MockTextGenerator::new_success(full_payload()), MockImageGenerator::new_success());

    studio
        .generate_posts(
            &SourceInput::Url("https://a.com/article".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap();

    let requests = text.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].temperature, Some(0.7));
    assert_eq!(requests[0].model.as_deref(), Some("gemini-2.5-flash"));
    match &requests[0].inputs[..] {
        [Input::Text(prompt)] => {
            assert!(prompt.starts_with("Analyze the content from the following URL: https://a.com/article"));
        }
        other => panic!("unexpected inputs: {other:?}"),
    }
}

#[tokio::test]
async fn missing_platform_key_fails_like_malformed_json() {
    let partial = serde_json::json!({
        "LinkedIn": { "content": "a" },
        "Reddit": { "title": "t", "content": "b" },
        "Instagram": { "content": "c" },
        "YouTube": { "title": "t", "content": "d" },
        "Script Ideas": { "content": "e" }
    })
    .to_string();

    let (studio, _text, image) =
        build_studio(MockTextGenerator::new_success(partial), MockImageGenerator::new_success());
    let missing_key_err = studio
        .generate_posts(
            &SourceInput::Text("Example input text here".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(studio_kind(&missing_key_err), Some(&StudioErrorKind::Generation));
    assert_eq!(image.call_count(), 0);

    let (studio, _text, image) = build_studio(
        MockTextGenerator::new_success("definitely not json"),
        MockImageGenerator::new_success(),
    );
    let malformed_err = studio
        .generate_posts(
            &SourceInput::Text("Example input text here".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(image.call_count(), 0);

    assert_eq!(missing_key_err.user_message(), malformed_err.user_message());
    assert!(missing_key_err.user_message().contains("try a different source"));
}

#[tokio::test]
async fn provider_error_fails_with_generic_message() {
    let (studio, _text, image) = build_studio(
        MockTextGenerator::new_error(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "Model is overloaded".to_string(),
        }),
        MockImageGenerator::new_success(),
    );

    let err = studio
        .generate_posts(
            &SourceInput::Text("Example input text here".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(studio_kind(&err), Some(&StudioErrorKind::Generation));
    assert_eq!(image.call_count(), 0);
}

#[tokio::test]
async fn image_failure_degrades_only_that_platform() {
    let (studio, _text, image) = build_studio(
        MockTextGenerator::new_success(full_payload()),
        MockImageGenerator::new_success().fail_when("linkedin body"),
    );

    let posts = studio
        .generate_posts(
            &SourceInput::Text("Example input text here".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap();

    assert!(posts.linked_in.image_url.is_none());
    assert!(posts.twitter.image_url.is_some());
    assert!(posts.reddit.image_url.is_some());
    assert_eq!(image.call_count(), 6);
}

#[tokio::test]
async fn empty_image_result_degrades_only_that_platform() {
    let (studio, _text, _image) = build_studio(
        MockTextGenerator::new_success(full_payload()),
        MockImageGenerator::new_success().empty_when("tweet body"),
    );

    let posts = studio
        .generate_posts(
            &SourceInput::Text("Example input text here".to_string()),
            &ToneSelection::default(),
        )
        .await
        .unwrap();

    assert!(posts.twitter.image_url.is_none());
    assert!(posts.linked_in.image_url.is_some());
}

#[tokio::test]
async fn video_source_is_encoded_inline() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("clip.mp4");
    tokio::fs::write(&path, b"fake video bytes").await?;

    let (studio, text, _image) =
        build_studio(MockTextGenerator::new_success(full_payload()), MockImageGenerator::new_success());

    studio
        .generate_posts(&SourceInput::Video(path), &ToneSelection::default())
        .await?;

    let requests = text.requests();
    match &requests[0].inputs[..] {
        [Input::Media(media), Input::Text(prompt)] => {
            assert_eq!(media.mime_type, "video/mp4");
            assert_eq!(media.data, "ZmFrZSB2aWRlbyBieXRlcw==");
            assert!(prompt.starts_with("Analyze the content of this video."));
        }
        other => panic!("unexpected inputs: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn oversized_video_is_rejected_before_any_request() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("clip.mp4");
    tokio::fs::write(&path, vec![0u8; 64]).await?;

    let config = ContentCraftConfig {
        max_video_bytes: 16,
        ..ContentCraftConfig::default()
    };
    let (studio, text, _image) = build_studio_with(
        MockTextGenerator::new_success(full_payload()),
        MockImageGenerator::new_success(),
        config,
    );

    let err = studio
        .generate_posts(&SourceInput::Video(path), &ToneSelection::default())
        .await
        .unwrap_err();
    assert!(matches!(
        studio_kind(&err),
        Some(StudioErrorKind::VideoTooLarge { size_bytes: 64, max_bytes: 16 })
    ));
    assert_eq!(text.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn unrecognized_video_extension_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("clip.xyz");
    tokio::fs::write(&path, b"??").await?;

    let (studio, text, _image) =
        build_studio(MockTextGenerator::new_success(full_payload()), MockImageGenerator::new_success());

    let err = studio
        .generate_posts(&SourceInput::Video(path), &ToneSelection::default())
        .await
        .unwrap_err();
    assert!(matches!(
        studio_kind(&err),
        Some(StudioErrorKind::UnsupportedMedia(ext)) if ext == "xyz"
    ));
    assert_eq!(text.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn article_generation_uses_article_temperature() {
    let (studio, text, _image) = build_studio(
        MockTextGenerator::new_success("Title line\n\nBody paragraph."),
        MockImageGenerator::new_success(),
    );

    let article = studio
        .generate_article(&SourceInput::Text("Example input text here".to_string()), 500)
        .await
        .unwrap();
    assert_eq!(article, "Title line\n\nBody paragraph.");

    let requests = text.requests();
    assert_eq!(requests[0].temperature, Some(0.6));
    match &requests[0].inputs[..] {
        [Input::Text(prompt)] => assert!(prompt.contains("approximately 500 words")),
        other => panic!("unexpected inputs: {other:?}"),
    }
}

#[tokio::test]
async fn article_failure_gets_its_own_message() {
    let (studio, _text, _image) = build_studio(
        MockTextGenerator::new_error(GeminiErrorKind::ApiRequest("boom".to_string())),
        MockImageGenerator::new_success(),
    );

    let err = studio
        .generate_article(&SourceInput::Text("Example input text here".to_string()), 500)
        .await
        .unwrap_err();
    assert_eq!(studio_kind(&err), Some(&StudioErrorKind::Article));
    assert!(err.user_message().contains("adjust the word count"));
}

#[tokio::test]
async fn titled_translation_returns_both_fields() {
    let payload = serde_json::json!({
        "translatedTitle": "Título",
        "translatedContent": "Cuerpo"
    })
    .to_string();
    let (studio, text, _image) =
        build_studio(MockTextGenerator::new_success(payload), MockImageGenerator::new_success());

    let translation = studio
        .translate_post(&Post::titled("Headline", "Body"), "Spanish")
        .await
        .unwrap();
    assert_eq!(translation.title.as_deref(), Some("Título"));
    assert_eq!(translation.content, "Cuerpo");
    assert_eq!(text.call_count(), 1);
}

#[tokio::test]
async fn untitled_translation_returns_plain_content() {
    let (studio, _text, _image) = build_studio(
        MockTextGenerator::new_success("Cuerpo plano"),
        MockImageGenerator::new_success(),
    );

    let translation = studio
        .translate_post(&Post::new("Body"), "Spanish")
        .await
        .unwrap();
    assert!(translation.title.is_none());
    assert_eq!(translation.content, "Cuerpo plano");
}

#[tokio::test]
async fn translation_failure_is_scoped_to_the_language() {
    let (studio, _text, _image) = build_studio(
        MockTextGenerator::new_error(GeminiErrorKind::ApiRequest("boom".to_string())),
        MockImageGenerator::new_success(),
    );

    let err = studio
        .translate_post(&Post::new("Body"), "Spanish")
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "Failed to translate text to Spanish."
    );
}

#[tokio::test]
async fn regenerate_image_propagates_provider_errors() {
    let (studio, _text, _image) = build_studio(
        MockTextGenerator::new_success(full_payload()),
        MockImageGenerator::new_success().fail_when("tweet body"),
    );

    let err = studio
        .regenerate_image(Platform::Twitter, &Post::new("tweet body"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ContentCraftErrorKind::Gemini(_)));

    // An empty render is not an error, just no image.
    let (studio, _text, _image) = build_studio(
        MockTextGenerator::new_success(full_payload()),
        MockImageGenerator::new_success().empty_when("tweet body"),
    );
    let image_url = studio
        .regenerate_image(Platform::Twitter, &Post::new("tweet body"))
        .await
        .unwrap();
    assert!(image_url.is_none());
}
