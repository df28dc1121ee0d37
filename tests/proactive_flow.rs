//! Proactive prompts driven by host events, delivered over a channel.

use std::path::PathBuf;
use std::sync::Arc;

use storefront_concierge::adapters::{ChannelPromptPublisher, JsonFileSnapshotSource};
use storefront_concierge::application::ProactiveService;
use storefront_concierge::domain::conversation::WidgetState;
use storefront_concierge::domain::proactive::{
    ProactiveSettings, PromptKind, EXIT_INTENT_MESSAGE, INACTIVITY_MESSAGE,
};
use storefront_concierge::domain::storefront::{PageContext, StoreSnapshot};
use storefront_concierge::ports::StoreDataSource;

async fn fixture_snapshot() -> StoreSnapshot {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/store.json");
    JsonFileSnapshotSource::new(path)
        .load()
        .await
        .expect("fixture snapshot should load")
}

#[tokio::test]
async fn product_page_visit_sequence() {
    let snapshot = fixture_snapshot().await;
    let (publisher, mut prompts) = ChannelPromptPublisher::channel(8);
    let mut service = ProactiveService::new(ProactiveSettings::default(), Arc::new(publisher));

    service.on_welcome().unwrap();
    assert_eq!(service.widget(), WidgetState::Launcher);

    service.on_page_settled(&snapshot).await.unwrap();
    let contextual = prompts.recv().await.unwrap();
    assert_eq!(contextual.kind, PromptKind::Contextual);
    assert_eq!(
        contextual.message,
        "I see you're looking at Steel Watch. Can I help answer any questions about this product?"
    );

    // A visible bubble suppresses the inactivity nudge.
    assert!(service.on_inactivity().await.unwrap().is_none());

    service.dismiss_prompt().unwrap();
    service.on_exit_intent(1440).await.unwrap();
    assert_eq!(prompts.recv().await.unwrap().message, EXIT_INTENT_MESSAGE);

    service.open_chat().unwrap();
    assert!(service.visible_prompt().is_none());
    assert!(service.on_inactivity().await.unwrap().is_none());

    service.close_chat().unwrap();
    service.on_inactivity().await.unwrap();
    assert_eq!(prompts.recv().await.unwrap().message, INACTIVITY_MESSAGE);

    // Exit intent already used for this page view.
    service.dismiss_prompt().unwrap();
    assert!(service.on_exit_intent(1440).await.unwrap().is_none());
}

#[tokio::test]
async fn exit_intent_ignored_on_narrow_viewports() {
    let (publisher, _prompts) = ChannelPromptPublisher::channel(1);
    let mut service = ProactiveService::new(ProactiveSettings::default(), Arc::new(publisher));
    service.on_welcome().unwrap();

    assert!(service.on_exit_intent(768).await.unwrap().is_none());
    assert!(service.on_exit_intent(375).await.unwrap().is_none());
    assert_eq!(service.widget(), WidgetState::Launcher);
}

#[tokio::test]
async fn search_page_prompt_reflects_result_count() {
    let (publisher, mut prompts) = ChannelPromptPublisher::channel(2);
    let mut service = ProactiveService::new(ProactiveSettings::default(), Arc::new(publisher));
    let snapshot = StoreSnapshot::empty().with_page(PageContext::search_page("duffel", 0));

    service.on_page_settled(&snapshot).await.unwrap();
    let prompt = prompts.recv().await.unwrap();
    assert!(prompt.message.contains("duffel"));
    assert!(prompt.message.contains("couldn't find any matches"));
}

#[tokio::test]
async fn disabled_contextual_prompts_only_show_launcher() {
    let settings = ProactiveSettings {
        contextual_prompts: false,
        ..Default::default()
    };
    let (publisher, _prompts) = ChannelPromptPublisher::channel(1);
    let mut service = ProactiveService::new(settings, Arc::new(publisher));
    let snapshot = fixture_snapshot().await;

    service.on_welcome().unwrap();
    assert!(service.on_page_settled(&snapshot).await.unwrap().is_none());
    assert_eq!(service.widget(), WidgetState::Launcher);
}
