use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Meridian workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmarks once per feature profile and compare them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// (baseline name, cargo feature list)
const PROFILES: &[(&str, &str)] = &[("serial", "tracing"), ("parallel", "tracing,parallel")];

const BENCHES: &[&str] = &["graph_benchmark", "disjoint_set_benchmark"];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for (baseline, features) in PROFILES {
        println!("\n>>> Benchmarking profile: {baseline} (features: {features})");
        let start = Instant::now();

        for bench in BENCHES {
            let mut cmd = Command::new("cargo");
            cmd.env("CARGO_INCREMENTAL", "0")
                .args(["bench", "-p", "meridian", "--bench", bench])
                .args(["--no-default-features", "--features", features]);

            // Args for the test runner (Criterion) go after --
            cmd.arg("--").arg("--save-baseline").arg(baseline);
            if quick {
                cmd.args(["--measurement-time", "0.1", "--sample-size", "10", "--noplot"]);
            }

            let status = cmd
                .status()
                .with_context(|| format!("failed to run {bench} for {baseline}"))?;
            if !status.success() {
                eprintln!("Warning: {bench} failed for profile {baseline}");
            }
        }

        println!("Finished {baseline} in {:.2?}", start.elapsed());
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // workload -> baseline -> mean nanoseconds
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    write!(file, "| Workload |")?;
    for (baseline, _) in PROFILES {
        write!(file, " {baseline} (mean) |")?;
    }
    writeln!(file, " speedup |")?;
    write!(file, "|---|")?;
    for _ in PROFILES {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        for (baseline, _) in PROFILES {
            match by_baseline.get(*baseline) {
                Some(ns) => write!(file, " {} |", format_duration(*ns))?,
                None => write!(file, " N/A |")?,
            }
        }
        let speedup = match (by_baseline.get("serial"), by_baseline.get("parallel")) {
            (Some(s), Some(p)) if *p > 0.0 => format!("**{:.2}x**", s / p),
            _ => "-".to_string(),
        };
        writeln!(file, " {speedup} |")?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_duration(ns: f64) -> String {
    if ns >= 1e6 {
        format!("{:.2} ms", ns / 1e6)
    } else if ns >= 1e3 {
        format!("{:.2} µs", ns / 1e3)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Walks `target/criterion`, reading `<workload...>/<baseline>/estimates.json`.
fn collect_results(
    root: &Path,
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<()> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Ok(());
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !PROFILES.iter().any(|(name, _)| *name == baseline) {
            continue;
        }
        let workload = workload_dir
            .strip_prefix(root)
            .unwrap_or(workload_dir)
            .display()
            .to_string();

        let content = fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("malformed {}", path.display()))?;
        if estimates.mean.point_estimate > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(baseline.to_string(), estimates.mean.point_estimate);
        }
    }
    Ok(())
}
