//! Loading bundles from disk with configuration-built components

mod helpers;

use assert_matches::assert_matches;
use bundle_loader::{
    config::{FetchBackend, Settings},
    services::{create_fetcher, create_loader, FileFetcher, MemoryFetcher},
    BundleError, LoadConfig, ResourceLoadError, ResolutionMode,
};
use helpers::*;

fn file_settings(ctx: &SimpleTestContext) -> Settings {
    let mut settings = Settings::default();
    settings.fetch.backend = FetchBackend::File;
    settings.fetch.root = ctx.temp_path().display().to_string();
    settings
}

#[tokio::test]
async fn test_default_bundle_from_disk() {
    let ctx = SimpleTestContext::new().expect("Failed to create simple test context");
    ctx.write_bundle("i18n/messages.properties", DEFAULT_MESSAGES).unwrap();

    let settings = file_settings(&ctx);
    let loader = create_loader(&settings);
    let fetcher = create_fetcher(&settings.fetch).unwrap();

    let bundle = loader
        .load(None, &*fetcher, &LoadConfig::runtime())
        .await
        .unwrap()
        .into_bundle()
        .unwrap();

    assert_eq!(bundle.get("app.title"), Some("Data Integration"));
    assert!(!bundle.contains_key("this line has no separator"));
}

#[tokio::test]
async fn test_paths_and_parent_module_from_settings() {
    let ctx = SimpleTestContext::new().unwrap();
    ctx.write_bundle("web/pentaho/type/i18n/types.properties", "number=Number\n").unwrap();
    ctx.write_bundle("web/shared/nls/messages.properties", COMMON_MESSAGES).unwrap();

    let mut settings = file_settings(&ctx);
    settings.loader.base_url = "web/".to_string();
    settings.loader.parent_module = Some("pentaho/type/value".to_string());
    settings.loader.paths.insert("common".to_string(), "shared".to_string());
    settings.validate().unwrap();

    let loader = create_loader(&settings);
    let fetcher = FileFetcher::new(ctx.temp_path());

    assert_eq!(
        loader.normalize_for_cache(Some("types")).unwrap().as_str(),
        "pentaho/type/i18n/types"
    );

    let types = loader
        .load(Some("types"), &fetcher, &LoadConfig::runtime())
        .await
        .unwrap()
        .into_bundle()
        .unwrap();
    assert_eq!(types.get("number"), Some("Number"));

    let common = loader
        .load(Some("/common/nls/messages"), &fetcher, &LoadConfig::runtime())
        .await
        .unwrap()
        .into_bundle()
        .unwrap();
    assert_eq!(common.get_or_key("ok"), "OK");
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let ctx = SimpleTestContext::new().unwrap();
    let settings = file_settings(&ctx);
    let loader = create_loader(&settings);
    let fetcher = FileFetcher::new(ctx.temp_path());

    let err = loader
        .load(Some("absent"), &fetcher, &LoadConfig::runtime())
        .await
        .unwrap_err();

    assert!(!err.is_recoverable());
    assert_matches!(err, BundleError::ResourceLoad(ResourceLoadError::NotFound { .. }));
}

#[tokio::test]
async fn test_parent_reference_cannot_leave_root() {
    let ctx = SimpleTestContext::new().unwrap();
    ctx.write_bundle("secret.properties", "pw=hunter2\n").unwrap();
    let root = ctx.temp_path().join("web");
    std::fs::create_dir_all(&root).unwrap();

    let loader = create_loader(&Settings::default());
    let fetcher = FileFetcher::new(&root);

    let result = loader
        .load(Some("../secret"), &fetcher, &LoadConfig::runtime())
        .await;

    assert_matches!(
        result,
        Err(BundleError::ResourceLoad(ResourceLoadError::InvalidLocator { locator, .. }))
            if locator == "../secret.properties"
    );
}

#[tokio::test]
async fn test_configured_build_mode_defers() {
    let ctx = SimpleTestContext::new().unwrap();
    let mut settings = file_settings(&ctx);
    settings.loader.mode = ResolutionMode::Build;

    let loader = create_loader(&settings);
    let fetcher = MemoryFetcher::new();
    let config = LoadConfig { mode: settings.loader.mode };

    let outcome = loader.load(Some("messages"), &fetcher, &config).await.unwrap();
    assert!(outcome.is_deferred());
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn test_each_load_is_independent() {
    let fetcher = MemoryFetcher::new().with_resource("./i18n/messages.properties", "a=1");
    let loader = create_loader(&Settings::default());

    let first = loader.load(None, &fetcher, &LoadConfig::runtime()).await.unwrap();
    let second = loader.load(None, &fetcher, &LoadConfig::runtime()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(fetcher.calls(), 2);
}
