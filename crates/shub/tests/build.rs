use shub::InitError;
use shub::domain::config::ApiConfig;
use shub::domain::sentiment::Label;
use shub::features::classifier::Predict;
use std::path::PathBuf;

fn config() -> ApiConfig {
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/model");
    let mut config = ApiConfig::default();
    config.model.vectorizer = assets.join("vectorizer.json");
    config.model.classifier = assets.join("classifier.json");
    config
}

#[test]
fn slices_share_one_classifier() {
    let slices = shub::build(&config()).unwrap();

    assert_eq!(slices.classifier.predict("What a wonderful surprise!"), Label::Positive);
    let report = slices.analysis.analyzer.analyze_demo(Some(6)).unwrap();
    assert_eq!(report.summary.positive, 3);
}

#[test]
fn missing_artifact_is_a_classifier_error() {
    let mut config = config();
    config.model.classifier = PathBuf::from("does/not/exist.json");

    let err = shub::build_analysis(&config).unwrap_err();
    assert!(matches!(err, InitError::Classifier { .. }));
    assert!(err.to_string().contains("(model)"));
}

#[test]
fn empty_instance_list_is_a_posts_error() {
    let mut config = config();
    config.posts.instances.clear();

    assert!(matches!(shub::build(&config), Err(InitError::Posts { .. })));
}

#[test]
fn core_features_are_always_enabled() {
    assert!(shub::features::is_enabled("classifier"));
    assert!(shub::features::is_enabled("analysis"));
    assert!(!shub::features::is_enabled("desktop"));
}
