mod common;

use common::{FakeSource, analyzer};
use shub_analysis::demo::DEMO_BATCH;
use shub_analysis::{AnalysisError, ErrorKind};
use shub_kernel::domain::sentiment::{BatchSource, Label};

#[test]
fn first_ten_demo_posts_split_evenly() {
    let report = analyzer(FakeSource::posts(&[])).analyze_demo(None).unwrap();

    assert_eq!(report.source, BatchSource::Demo);
    assert_eq!(report.results.len(), 10);
    assert_eq!(report.summary.positive, 5);
    assert_eq!(report.summary.negative, 5);
    assert!((report.summary.positive_pct - 50.0).abs() < 1e-9);
    assert!((report.summary.negative_pct - 50.0).abs() < 1e-9);
    assert_eq!(report.id.len(), 12);
}

#[test]
fn every_demo_post_alternates_positive_negative() {
    let report = analyzer(FakeSource::posts(&[])).analyze_demo(Some(20)).unwrap();

    for (i, result) in report.results.iter().enumerate() {
        let expected = if i % 2 == 0 { Label::Positive } else { Label::Negative };
        assert_eq!(result.label, expected, "demo post #{}: {}", i + 1, result.text);
        assert_eq!(result.text, DEMO_BATCH[i]);
    }
}

#[test]
fn demo_count_is_bounded() {
    let analyzer = analyzer(FakeSource::posts(&[]));
    assert_eq!(analyzer.analyze_demo(Some(5)).unwrap().results.len(), 5);
    assert!(matches!(analyzer.analyze_demo(Some(4)), Err(AnalysisError::Validation { .. })));
    assert!(analyzer.analyze_demo(Some(21)).is_err());
}

#[test]
fn text_analysis_is_a_batch_of_one() {
    let analyzer = analyzer(FakeSource::posts(&[]));

    let report = analyzer.analyze_text("I absolutely love this product!");
    assert_eq!(report.source, BatchSource::Text);
    assert_eq!(report.results[0].label, Label::Positive);
    assert_eq!(report.summary.total, 1);

    let report = analyzer.analyze_text("This is terrible. Worst experience ever.");
    assert_eq!(report.results[0].label, Label::Negative);
    assert!((report.summary.negative_pct - 100.0).abs() < 1e-9);

    for blank in ["", "   "] {
        let report = analyzer.analyze_text(blank);
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.results[0].label, Label::Negative);
    }
}

#[test]
fn analyze_core_preserves_order() {
    let analyzer = analyzer(FakeSource::posts(&[]));
    let batch = analyzer.analyze(["What a horrible, awful day.", "", "Great, great, GREAT!!!"]);

    let labels: Vec<Label> = batch.results.iter().map(|r| r.label).collect();
    assert_eq!(labels, [Label::Negative, Label::Negative, Label::Positive]);
    assert_eq!(batch.summary.positive + batch.summary.negative, 3);
}

#[tokio::test]
async fn user_posts_are_classified_in_fetch_order() {
    let source = FakeSource::posts(&DEMO_BATCH[..12]);
    let analyzer = analyzer(source.clone());

    let report = analyzer.analyze_user("@someone", Some(10), false).await.unwrap();
    assert_eq!(report.source, BatchSource::User { username: "someone".to_owned() });
    assert_eq!(report.results.len(), 10);
    assert_eq!(report.results[3].text, DEMO_BATCH[3]);
    assert_eq!(report.results[3].link.as_deref(), Some("https://nitter.test/u/status/3"));
    assert_eq!(report.summary.positive, 5);
    assert!(report.notice.is_none());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn input_errors_never_reach_the_source() {
    let source = FakeSource::posts(&DEMO_BATCH);
    let analyzer = analyzer(source.clone());

    let err = analyzer.analyze_user("", None, true).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Guard { .. }));
    let err = analyzer.analyze_user("someone", Some(5), true).await.unwrap_err();
    assert!(matches!(err, AnalysisError::Validation { .. }));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn collaborator_errors_carry_hints() {
    let err = analyzer(FakeSource::failing("unavailable"))
        .analyze_user("someone", None, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.hint().unwrap().contains("demo mode"));

    let err = analyzer(FakeSource::failing("not_found"))
        .analyze_user("ghost", None, false)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = analyzer(FakeSource::posts(&[])).analyze_user("quiet", None, false).await.unwrap_err();
    assert!(matches!(err, AnalysisError::NoResults { .. }));
    assert!(err.to_string().contains("@quiet"));
}

#[tokio::test]
async fn fallback_answers_with_the_demo_batch() {
    let report = analyzer(FakeSource::failing("unavailable"))
        .analyze_user("someone", None, true)
        .await
        .unwrap();

    assert_eq!(report.source, BatchSource::Demo);
    assert_eq!(report.results.len(), 10);
    assert!(report.notice.unwrap().contains("Showing the demo batch instead"));
}
