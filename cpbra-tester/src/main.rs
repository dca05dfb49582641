mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, SitePage, new_session};
use common::scenario::{ScenarioCtx, expand_scenarios, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Router and feed logic against the core crate (fast, no browser)
    Logic,
    /// Browser automation against a running site
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "cpbra-tester", version)]
#[command(about = "Automated QA for the CPBRA league site - routing logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds for randomized route walks (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 5)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the site is served from
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and page dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(split_csv(&args.scenarios));
    let seeds = parse_seeds(&args.seeds)?;

    let results = run_logic_scenarios(&args, &scenarios, &seeds).await;
    let browser_failures = run_browser_scenarios(&args, &scenarios).await;

    write_reports(&args, &results, start_time)?;

    if browser_failures > 0 || results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:18} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🏀 CPBRA Automated Tester".bright_cyan().bold());
    println!("{}", "=========================".cyan());
}

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    split_csv(raw)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

async fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(args.verbose);
    for scenario_name in scenarios {
        if let Some(scenario) = get_scenario(scenario_name) {
            results.extend(
                tester
                    .run_scenario(scenario.as_ref(), seeds, args.iterations)
                    .await,
            );
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }
    results
}

/// Returns the number of failed browser runs.
async fn run_browser_scenarios(args: &Args, scenarios: &[String]) -> usize {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return 0;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    let mut failures = 0;

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, scenarios, kind, &driver).await;
        let _ = driver.quit().await;
    }
    failures
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let mut failures = 0;
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let ctx = ScenarioCtx {
            page: SitePage::new(driver, &args.base_url),
            verbose: args.verbose,
        };

        let label = kind.label();
        let scenario_start = Instant::now();
        match scenario.run_browser(driver, &ctx).await {
            Ok(()) => {
                println!(
                    "✅ [{}] {} - {:?}",
                    label.green(),
                    scenario.name(),
                    scenario_start.elapsed()
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!(
                    "❌ [{}] {} - {:?}: {e:#}",
                    label.red(),
                    scenario.name(),
                    scenario_start.elapsed()
                );
                let dir = artifacts_dir(&args.artifacts_dir, label, scenario_name);
                if let Err(err) = capture_artifacts(driver, &dir, &e).await {
                    log::warn!("could not write artifacts to {dir}: {err:#}");
                }
            }
        }
    }
    failures
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# CPBRA Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != ReportFormat::Json {
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "cpbra-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn seeds_parse_and_reject_garbage() {
        assert_eq!(parse_seeds("1, 2 ,3").expect("seeds"), vec![1, 2, 3]);
        assert!(parse_seeds("1,abc").is_err());
    }

    #[test]
    fn headless_mode_maps_to_config() {
        let mut args = base_args();
        assert!(build_browser_config(&args).headless);
        args.headless = HeadlessMode::Windowed;
        assert!(!build_browser_config(&args).headless);
    }

    #[tokio::test]
    async fn logic_mode_runs_requested_scenarios() {
        let args = base_args();
        let scenarios = expand_scenarios(vec!["join".to_string(), "not-found".to_string()]);
        let results = run_logic_scenarios(&args, &scenarios, &[1, 2]).await;
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed));
    }

    #[tokio::test]
    async fn browser_mode_skips_logic() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        let results = run_logic_scenarios(&args, &["smoke".to_string()], &[1]).await;
        assert!(results.is_empty());
    }

    #[test]
    fn markdown_report_notes_empty_run() {
        let mut args = base_args();
        args.report = ReportFormat::Markdown;
        let path = temp_path("md");
        args.output = Some(path.clone());
        write_reports(&args, &[], Instant::now()).expect("report");
        let text = std::fs::read_to_string(path).expect("read");
        assert!(text.contains("_No scenarios executed._"));
    }
}
