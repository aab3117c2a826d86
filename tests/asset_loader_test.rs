mod utils;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use diabetes_shield::{AssetLoader, Error, FsAssetSource};
use utils::{CountingSource, LOGISTIC_MODEL, write_artifacts};

#[tokio::test]
async fn test_ensure_loaded_is_idempotent() {
    let (source, loads) = CountingSource::new(0.8);
    let loader = AssetLoader::new(source);
    assert!(!loader.is_loaded());
    assert!(loader.get().is_none());

    let first = loader.ensure_loaded().await.unwrap();
    for _ in 0..5 {
        let again = loader.ensure_loaded().await.unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(loader.is_loaded());
    assert!(Arc::ptr_eq(&first, &loader.get().unwrap()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_use_loads_once() {
    let (source, loads) = CountingSource::new(0.3);
    let loader = Arc::new(AssetLoader::new(source));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.ensure_loaded().await.unwrap() })
        })
        .collect();

    let mut loaded = Vec::new();
    for handle in handles {
        loaded.push(handle.await.unwrap());
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(loaded.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[tokio::test]
async fn test_loads_json_artifacts_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path(), LOGISTIC_MODEL, None);

    let loader = AssetLoader::new(FsAssetSource::new(paths));
    let assets = loader.ensure_loaded().await.unwrap();

    assert_eq!(assets.encoders().len(), 8);
    assert_eq!(assets.classifier().name(), "logistic");
    assert!(assets.scaler().is_none());
}

#[tokio::test]
async fn test_optional_scaler_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    let scaler = r#"{"mean": [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],
                     "scale": [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5]}"#;
    let paths = write_artifacts(dir.path(), LOGISTIC_MODEL, Some(scaler));

    let assets = AssetLoader::new(FsAssetSource::new(paths))
        .ensure_loaded()
        .await
        .unwrap();
    assert_eq!(assets.scaler().unwrap().width(), 8);
}

#[tokio::test]
async fn test_missing_artifacts_are_configuration_errors() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path(), LOGISTIC_MODEL, None);
    std::fs::remove_file(&paths.model).unwrap();

    let loader = AssetLoader::new(FsAssetSource::new(paths));
    let err = loader.ensure_loaded().await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("model.json"));
    assert!(!loader.is_loaded());
}

#[tokio::test]
async fn test_model_width_must_match_fields() {
    let dir = tempfile::tempdir().unwrap();
    let narrow = r#"{"type": "logistic", "coefficients": [1.0, 1.0], "intercept": 0.0}"#;
    let paths = write_artifacts(dir.path(), narrow, None);

    let err = AssetLoader::new(FsAssetSource::new(paths))
        .ensure_loaded()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("Classifier expects 2 inputs"));
}

#[tokio::test]
async fn test_corrupt_encoder_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path(), LOGISTIC_MODEL, None);
    std::fs::write(&paths.encoders, "not json").unwrap();

    let err = AssetLoader::new(FsAssetSource::new(paths))
        .ensure_loaded()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("Malformed encoder artifact"));
}
