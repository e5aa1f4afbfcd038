use impact_core::constants::personas;
use impact_core::*;
use std::sync::{Arc, Mutex};

struct RecordingLlm {
    prompts: Arc<Mutex<Vec<String>>>,
    reply: fn() -> Result<String, ImpactError>,
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlm {
    async fn generate_content(&self, prompt: &str) -> Result<String, ImpactError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.reply)()
    }
}

fn ok_reply() -> Result<String, ImpactError> {
    Ok("# Clean Water\nEvery shilling counts.".to_string())
}

fn server_error() -> Result<String, ImpactError> {
    Err(ImpactError::Status {
        status: 500,
        body: "boom".to_string(),
    })
}

fn studio(reply: fn() -> Result<String, ImpactError>) -> (ContentStudio, Arc<Mutex<Vec<String>>>) {
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let llm = RecordingLlm {
        prompts: prompts.clone(),
        reply,
    };
    (ContentStudio::new(PromptRelay::new(Arc::new(llm))), prompts)
}

#[tokio::test]
async fn test_compose_sends_copywriter_prompt() {
    let (studio, prompts) = studio(ok_reply);

    let draft = studio
        .compose(&ContentRequest::new("school meals", Tone::Gratitude))
        .await
        .unwrap();

    assert_eq!(draft, "# Clean Water\nEvery shilling counts.");
    assert_eq!(
        prompts.lock().unwrap()[0],
        format!(
            "{}\n\nUser Query: Write a Gratitude piece about: school meals. Format nicely with headers if needed.",
            personas::COPYWRITER_CONTEXT
        )
    );
}

#[tokio::test]
async fn test_compose_rejects_empty_topic_without_call() {
    let (studio, prompts) = studio(ok_reply);

    let err = studio
        .compose(&ContentRequest::new("  ", Tone::Professional))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::InvalidInput);
    assert!(prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_compose_surfaces_transport_failure() {
    let (studio, _) = studio(server_error);

    let err = studio
        .compose(&ContentRequest::new("wells", Tone::SocialMediaPost))
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_custom_studio_context() {
    let (studio, prompts) = studio(ok_reply);
    let studio = studio.with_system_context("Write for teenagers.");

    studio
        .compose(&ContentRequest::new("health camps", Tone::Professional))
        .await
        .unwrap();

    assert!(prompts.lock().unwrap()[0].starts_with("Write for teenagers.\n\nUser Query: "));
}
