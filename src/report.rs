use anyhow::Result;
use std::io::Write;
use std::time::Instant;
use tracing::info;

use crate::{ingest, stats, stats::AnalysisResult, Args};

/// Runs the whole batch: every file in `args.files` in order, then the report.
/// Per-file failures are written to `out` and do not stop the run; only a
/// failure to write `out` itself is returned as an error.
pub fn analyze_logs<W: Write>(
    args: &Args,
    started: Instant,
    out: &mut W,
) -> Result<AnalysisResult> {
    info!(
        action = "start",
        component = "analysis",
        file_count = args.files.len(),
        "Starting log analysis"
    );

    let mut state = stats::AggregateState::new();
    let mut files_failed = 0usize;

    for path in &args.files {
        writeln!(out, "Reading {}...", path.display())?;
        if let Err(e) = ingest::ingest_file(path, &mut state) {
            info!(action = "ingest", component = "analysis", file_path = ?path, error = %e, "File failed");
            writeln!(out, "{}", e)?;
            files_failed += 1;
        }
    }

    let result = stats::summarize(&state, args.top_domains, args.top_crawlers, started);
    write_report(&result, args, out)?;

    info!(
        action = "complete",
        component = "analysis",
        files_failed,
        lines_valid = state.totals.lines_valid,
        lines_skipped = state.totals.lines_skipped,
        domains_unextractable = state.totals.domains_unextractable,
        duration_ms = result.elapsed.as_millis(),
        "Analysis completed"
    );

    Ok(result)
}

pub fn write_report<W: Write>(result: &AnalysisResult, args: &Args, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "* Unique URLs: {}", result.unique_url_count)?;
    writeln!(out, "* Unique Domains: {}", result.unique_domain_count)?;

    writeln!(out, "* Top {} Websites:", args.top_domains)?;
    for domain in &result.top_domains {
        writeln!(out, "    - {}", domain)?;
    }

    writeln!(out, "* Top {} crawlers:", args.top_crawlers)?;
    for ip in &result.top_crawlers {
        writeln!(out, "    - {}", ip)?;
    }

    writeln!(out)?;
    writeln!(out, "Completed in {:.1}s.", result.elapsed.as_secs_f64())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn report_layout() {
        let args = Args::try_parse_from(["logtally", "a.log"]).unwrap();
        let result = AnalysisResult {
            unique_url_count: 2,
            unique_domain_count: 2,
            top_domains: vec!["a.com".into(), "b.com".into()],
            top_crawlers: vec!["1.2.3.4".into()],
            elapsed: Duration::from_millis(1260),
        };

        let mut out = Vec::new();
        write_report(&result, &args, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n* Unique URLs: 2\n\
             * Unique Domains: 2\n\
             * Top 10 Websites:\n    - a.com\n    - b.com\n\
             * Top 5 crawlers:\n    - 1.2.3.4\n\
             \nCompleted in 1.3s.\n"
        );
    }

    #[test]
    fn empty_run_still_reports() {
        let args = Args::try_parse_from(["logtally", "-d", "3", "-c", "1"]).unwrap();
        let mut out = Vec::new();
        let result = analyze_logs(&args, Instant::now(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(result.unique_url_count, 0);
        assert!(text.contains("* Top 3 Websites:\n* Top 1 crawlers:\n"));
    }
}
