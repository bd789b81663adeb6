#![allow(dead_code, unreachable_pub)]

use async_trait::async_trait;
use shub_analysis::{Analysis, Analyzer};
use shub_classifier::Classifier;
use shub_kernel::domain::config::{AnalysisConfig, ModelConfig};
use shub_posts::{Post, PostSource, Posts, PostsError};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn classifier() -> Classifier {
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../assets/model");
    Classifier::load(&ModelConfig {
        vectorizer: assets.join("vectorizer.json"),
        classifier: assets.join("classifier.json"),
        ..ModelConfig::default()
    })
    .expect("bundled model")
}

/// Scripted post source that records how often it was called.
#[derive(Debug, Clone)]
pub struct FakeSource {
    pub answer: Result<Vec<Post>, &'static str>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn posts(texts: &[&str]) -> Self {
        Self {
            answer: Ok(texts
                .iter()
                .enumerate()
                .map(|(i, t)| Post {
                    text: (*t).to_owned(),
                    link: Some(format!("https://nitter.test/u/status/{i}")),
                })
                .collect()),
            calls: Arc::default(),
        }
    }

    pub fn failing(kind: &'static str) -> Self {
        Self { answer: Err(kind), calls: Arc::default() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for FakeSource {
    async fn fetch(&self, _username: &str, count: usize) -> Result<Vec<Post>, PostsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answer {
            Ok(ref posts) => Ok(posts.iter().take(count).cloned().collect()),
            Err("not_found") => {
                Err(PostsError::NotFound { message: "@ghost".into(), context: None })
            },
            Err(_) => Err(PostsError::Unavailable {
                message: "All 1 instance(s) failed".into(),
                context: None,
            }),
        }
    }
}

pub fn analyzer(source: FakeSource) -> Analyzer {
    Analyzer::new(classifier(), Posts::from_source(source), AnalysisConfig::default())
}

pub fn analysis(source: FakeSource) -> Analysis {
    Analysis::new(shub_analysis::AnalysisInner { analyzer: analyzer(source) })
}
