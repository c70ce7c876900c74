// HTTP benchmark client for the MCP time server
use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use hdrhistogram::Histogram;
use serde::Deserialize;
use std::fs;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "bench")]
#[command(about = "Run benchmarks against an MCP server over HTTP", long_about = None)]
struct Args {
    /// Server endpoint to benchmark
    #[arg(short, long, default_value = "http://127.0.0.1:3000/mcp")]
    url: String,

    /// Path to the benchmark configuration file (TOML format)
    #[arg(short, long, default_value = "bench.toml")]
    config: String,

    /// Suppress per-step progress output
    #[arg(long)]
    silent: bool,
}

#[derive(Deserialize)]
struct Config {
    steps: Vec<Step>,
}

#[derive(Deserialize)]
struct Step {
    name: String,
    #[serde(default)]
    bench: bool,
    #[serde(default = "default_tasks")]
    tasks: usize,
    #[serde(default = "default_concurrency")]
    concurrency: usize,
    payload: serde_json::Value,
}

fn default_tasks() -> usize {
    1
}

fn default_concurrency() -> usize {
    1
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_content =
        fs::read_to_string(&args.config).context("Failed to read benchmark configuration")?;
    let config: Config = toml::from_str(&config_content)?;

    let client = reqwest::Client::new();

    for step in config.steps {
        if !args.silent {
            println!("Executing step: '{}'...", step.name);
        }

        let step_start = Instant::now();
        let latencies: Vec<Duration> = stream::iter(0..step.tasks)
            .map(|task_num| {
                let client = &client;
                let url = &args.url;
                // Unique id per request so responses stay attributable
                let mut payload = step.payload.clone();
                if let Some(obj) = payload.as_object_mut() {
                    obj.insert("id".to_string(), (100 + task_num as u64).into());
                }
                async move {
                    let start = Instant::now();
                    let resp = client.post(url).json(&payload).send().await?;
                    let body: serde_json::Value = resp.json().await?;
                    if let Some(error) = body.get("error") {
                        eprintln!("  response error: {error}");
                    }
                    Ok::<Duration, anyhow::Error>(start.elapsed())
                }
            })
            .buffer_unordered(step.concurrency)
            .filter_map(|r| async move { r.ok() })
            .collect()
            .await;

        if step.bench {
            print_step_stats(&step.name, &latencies, step_start.elapsed(), step.tasks);
        }
    }

    Ok(())
}

fn print_step_stats(name: &str, latencies: &[Duration], total_time: Duration, tasks: usize) {
    if latencies.is_empty() {
        return;
    }

    let mut hist = match Histogram::<u64>::new_with_bounds(1, 1_000_000_000, 3) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("failed to build histogram: {e}");
            return;
        }
    };
    for lat in latencies {
        let _ = hist.record(lat.as_nanos() as u64);
    }

    let rps = tasks as f64 / total_time.as_secs_f64();
    println!("---");
    println!("Step '{}' stats ({} ok of {} sent):", name, latencies.len(), tasks);
    println!("  Median: {:.3}ms", hist.value_at_quantile(0.5) as f64 / 1_000_000.0);
    println!("  P95:    {:.3}ms", hist.value_at_quantile(0.95) as f64 / 1_000_000.0);
    println!("  P99:    {:.3}ms", hist.value_at_quantile(0.99) as f64 / 1_000_000.0);
    println!("  RPS:    {:.2}", rps);
    println!("---");
}
