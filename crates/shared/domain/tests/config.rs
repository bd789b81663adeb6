use shub_domain::config::{ApiConfig, LabelConfig, ModelConfig, PostsConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let model = ModelConfig::default();
    assert!(model.vectorizer.ends_with("vectorizer.json"));
    assert!(model.stopwords.is_none());
    assert_eq!(model.labels, LabelConfig { negative: 0, positive: 1 });

    let posts = PostsConfig::default();
    assert!(!posts.instances.is_empty());
    assert_eq!(posts.timeout_seconds, 15);

    let cfg = ApiConfig::default();
    assert_eq!(cfg.analysis.demo_count, 10);
    assert_eq!(cfg.analysis.fetch_count, 50);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn api_config_deserializes_partial_sections() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "model": { "classifier": "/srv/model.bin", "labels": { "negative": 4, "positive": 0 } },
        "posts": { "instances": ["http://127.0.0.1:9000"] }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.model.classifier, std::path::PathBuf::from("/srv/model.bin"));
    assert!(cfg.model.vectorizer.ends_with("vectorizer.json"));
    assert_eq!(cfg.model.labels.negative, 4);
    assert_eq!(cfg.posts.instances, vec!["http://127.0.0.1:9000".to_owned()]);
    assert_eq!(cfg.posts.max_pages, 10);
}

#[test]
fn deref_mut_clones_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.analysis.demo_count = 20;

    assert_eq!(original.analysis.demo_count, 10);
    assert_eq!(changed.analysis.demo_count, 20);
}
