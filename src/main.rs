//! Command-line interface for the gh-activity binary.
//!
//! The CLI fetches the public timeline of the user given with `--user`,
//! optionally authenticated with the `GH_TOKEN` environment variable, and
//! prints the aggregated report once every page has been retrieved.

use std::{io, process, time::Duration};

use clap::Parser;
use gh_activity::{
    ActivityConfig, ActivityReport, Error, GitHubPageSource, PageProgress, RendererRegistry,
    ReportRenderer, collect_activity,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

/// Command line interface for summarizing a user's recent activity.
#[derive(Debug, Parser,)]
#[command(name = "gh-activity", version, about = "Summarize a GitHub user's public activity")]
struct Cli
{
    /// GitHub login whose public events are summarized.
    #[arg(short = 'u', long = "user", value_name = "USER")]
    user: Option<String,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    init_tracing();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration errors before any request is made, and the first
/// API or transport error encountered while paging. Nothing is printed to
/// stdout in either case.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let config = ActivityConfig::from_env(cli.user.as_deref(),)?;
    let source = GitHubPageSource::new(&config,)?;
    let registry = RendererRegistry::default();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );
    spinner.enable_steady_tick(Duration::from_millis(120,),);
    spinner.set_message(format!("Fetching activity for {}...", config.user()),);

    let result = collect_activity(&source, &registry, config.first_page_url(), |progress| {
        spinner.set_message(progress_message(progress,),);
    },)
    .await;
    spinner.finish_and_clear();
    let report = result?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &report, ReportRenderer::for_terminal(),)
}

fn progress_message(progress: &PageProgress,) -> String
{
    format!(
        "Fetched page {} ({} events, {} kept){}",
        progress.page,
        progress.events,
        progress.recorded,
        if progress.has_next { ", continuing..." } else { "" }
    )
}

fn write_report<W: io::Write,>(
    writer: &mut W,
    report: &ActivityReport,
    renderer: ReportRenderer,
) -> Result<(), Error,>
{
    let value = report.to_value()?;
    renderer.write(writer, &value,)
}

#[cfg(test)]
mod tests
{
    use std::io::Cursor;

    use clap::Parser;
    use gh_activity::{ActivityReport, PageProgress, ReportRenderer};

    use super::{Cli, progress_message, run, write_report};

    #[test]
    fn cli_accepts_short_and_long_user_flags()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "-u", "octocat",],)
            .expect("failed to parse CLI",);
        assert_eq!(cli.user.as_deref(), Some("octocat"));

        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--user", "hubot",],)
            .expect("failed to parse CLI",);
        assert_eq!(cli.user.as_deref(), Some("hubot"));
    }

    #[test]
    fn cli_rejects_unknown_flags()
    {
        let result = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--token", "secret",],);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_user_fails_before_any_request()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME")],).expect("failed to parse CLI",);

        let error = run(cli,).await.expect_err("expected configuration error",);

        match error {
            gh_activity::Error::Configuration {
                message,
            } => assert_eq!(message, "user is required to go on"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn write_report_prints_plain_tree()
    {
        let mut report = ActivityReport::new();
        report.record("IssuesEvent", "octo/repo", Some("[action:OPENED] (5) Fix bug".to_owned(),),);

        let mut buffer = Cursor::new(Vec::new(),);
        write_report(&mut buffer, &report, ReportRenderer::new(false,),)
            .expect("failed to write report",);

        let output = String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",);
        assert_eq!(
            output,
            "- summary\n\t- IssuesEvent\n\t\t- 1\n- activity\n\t- IssuesEvent\n\t\t- \
             octo/repo\n\t\t\t- [action:OPENED] (5) Fix bug\n"
        );
    }

    #[test]
    fn progress_message_mentions_continuation_only_when_more_pages_follow()
    {
        let progress = PageProgress {
            page: 2, events: 30, recorded: 4, has_next: true,
        };
        assert_eq!(progress_message(&progress,), "Fetched page 2 (30 events, 4 kept), continuing...");

        let last = PageProgress {
            has_next: false, ..progress
        };
        assert_eq!(progress_message(&last,), "Fetched page 2 (30 events, 4 kept)");
    }
}
