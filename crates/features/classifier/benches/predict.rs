use criterion::{Criterion, criterion_group, criterion_main};
use shub_classifier::{Predict, SentimentPredictor};
use shub_kernel::domain::config::ModelConfig;
use std::hint::black_box;
use std::path::PathBuf;

fn predictor() -> SentimentPredictor {
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../assets/model");
    SentimentPredictor::load(&ModelConfig {
        vectorizer: assets.join("vectorizer.json"),
        classifier: assets.join("classifier.json"),
        ..ModelConfig::default()
    })
    .expect("bundled model")
}

fn bench_predict(c: &mut Criterion) {
    let predictor = predictor();
    let short = "I absolutely love this product!";
    let long = "Stuck in traffic for hours. This is the worst commute of my life. ".repeat(20);

    c.bench_function("predict_short", |b| b.iter(|| predictor.predict(black_box(short))));
    c.bench_function("predict_long", |b| b.iter(|| predictor.predict(black_box(&long))));
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
