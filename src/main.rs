use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cpu_schedule::loader::load_file;
use cpu_schedule::models::ProcessDescriptor;
use cpu_schedule::report::{render_comparison, render_gantt, render_table};
use cpu_schedule::scheduler::{Policy, ScheduleResult, Simulator};
use cpu_schedule::workload::{generate_workload, WorkloadConfig};

/// Non-preemptive CPU scheduling simulator.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Process table (header line, then `PID Arrival_Time Burst_Time Priority` rows)
    #[arg(short, long, default_value = "processes.txt")]
    input: PathBuf,

    /// Policy to run: fcfs, sjf, priority or all
    #[arg(short, long, default_value = "all", value_parser = parse_policies)]
    policy: PolicySelection,

    /// Generate N random processes instead of reading the input file
    #[arg(long, value_name = "N")]
    random: Option<u32>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Latest arrival time for --random
    #[arg(long, default_value_t = 20)]
    max_arrival: i64,

    /// Longest burst time for --random
    #[arg(long, default_value_t = 10)]
    max_burst: i64,

    /// Clock origin of every run
    #[arg(long, default_value_t = 0)]
    start_time: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Debug, Clone)]
struct PolicySelection(Vec<Policy>);

fn parse_policies(s: &str) -> Result<PolicySelection, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(PolicySelection(Policy::ALL.to_vec()));
    }
    s.split(',')
        .map(|name| name.parse::<Policy>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map(PolicySelection)
}

fn load_descriptors(cli: &Cli) -> Result<Vec<ProcessDescriptor>> {
    if let Some(count) = cli.random {
        let config = WorkloadConfig::new(count)
            .with_max_arrival(cli.max_arrival)
            .with_max_burst(cli.max_burst);
        let mut rng = StdRng::seed_from_u64(cli.seed);
        info!("generated {count} random processes (seed {})", cli.seed);
        return Ok(generate_workload(&config, &mut rng));
    }

    let report = load_file(&cli.input)
        .with_context(|| format!("loading process table {}", cli.input.display()))?;
    for w in &report.warnings {
        warn!("{}: {w}", cli.input.display());
    }
    if report.descriptors.is_empty() {
        bail!("no processes loaded from {}", cli.input.display());
    }
    info!(
        "loaded {} processes from {}",
        report.descriptors.len(),
        cli.input.display()
    );
    Ok(report.descriptors)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let descriptors = load_descriptors(&cli)?;

    let results: Vec<(Policy, ScheduleResult)> = cli
        .policy
        .0
        .iter()
        .map(|&policy| {
            Simulator::new(policy)
                .with_start_time(cli.start_time)
                .run(&descriptors)
                .map(|r| (policy, r))
                .with_context(|| format!("running {policy}"))
        })
        .collect::<Result<_>>()?;

    match cli.format {
        Format::Json => {
            let runs: Vec<&ScheduleResult> = results.iter().map(|(_, r)| r).collect();
            println!("{}", serde_json::to_string_pretty(&runs)?);
        }
        Format::Table => {
            for (_, result) in &results {
                println!("{}", render_gantt(result));
                println!("{}", render_table(result));
            }
            if results.len() > 1 {
                println!("{}", render_comparison(&results));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_policies() {
        let PolicySelection(policies) = parse_policies("ALL").unwrap();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_parse_policy_list() {
        let PolicySelection(policies) = parse_policies("priority, fifo").unwrap();
        assert_eq!(policies, vec![Policy::Priority, Policy::Fcfs]);

        let PolicySelection(single) = parse_policies("sjf").unwrap();
        assert_eq!(single, vec![Policy::Sjf]);
    }

    #[test]
    fn test_parse_unknown_policy() {
        let err = parse_policies("fcfs,rr").unwrap_err();
        assert!(err.contains("rr"));
        assert!(parse_policies("").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["cpu-schedule"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("processes.txt"));
        assert_eq!(cli.policy.0.len(), 3);
        assert_eq!(cli.format, Format::Table);
        assert!(cli.random.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_policy() {
        assert!(Cli::try_parse_from(["cpu-schedule", "--policy", "lottery"]).is_err());
    }
}
