use shub::domain::sentiment::{AnalysisReport, BatchSource};
use std::io::{self, Write};

const PREVIEW_CHARS: usize = 100;

/// Plain-text report: one line per item, then the summary.
pub(crate) fn text(out: &mut impl Write, report: &AnalysisReport) -> io::Result<()> {
    if let Some(notice) = &report.notice {
        writeln!(out, "note: {notice}\n")?;
    }

    match &report.source {
        BatchSource::Text => {},
        BatchSource::Demo => writeln!(out, "Demo batch ({} posts)", report.results.len())?,
        BatchSource::User { username } => {
            writeln!(out, "@{username} ({} posts)", report.results.len())?;
        },
    }

    for result in &report.results {
        let label: &str = result.label.as_ref();
        writeln!(out, "{label:<8} {}", preview(&result.text))?;
        if let Some(link) = &result.link {
            writeln!(out, "         {link}")?;
        }
    }

    let summary = &report.summary;
    writeln!(
        out,
        "\nTotal: {}  Positive: {} ({:.1}%)  Negative: {} ({:.1}%)",
        summary.total,
        summary.positive,
        summary.positive_pct,
        summary.negative,
        summary.negative_pct
    )
}

pub(crate) fn json(out: &mut impl Write, report: &AnalysisReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

fn preview(text: &str) -> String {
    let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        line
    }
}
