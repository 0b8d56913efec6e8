//! Command-line front end: analyze one LCG request and print the JSON outcome.

use anyhow::{Context, Result};
use clap::Parser;
use rand_cesaro::export::write_report;
use rand_cesaro::{Analyzer, AnalyzerConfig, LcgParams, Outcome, THEORETICAL_PI};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Generate an LCG sequence and estimate its quality")]
struct Args {
    /// Modulus.
    #[arg(long, env = "LCG_M", allow_negative_numbers = true)]
    m: i128,

    /// Multiplier.
    #[arg(long, env = "LCG_A", allow_negative_numbers = true)]
    a: i128,

    /// Increment.
    #[arg(long, env = "LCG_C", allow_negative_numbers = true)]
    c: i128,

    /// Seed, reduced modulo m.
    #[arg(long, env = "LCG_X0", allow_negative_numbers = true)]
    x0: i128,

    /// Sequence length.
    #[arg(long, env = "LCG_N", allow_negative_numbers = true)]
    n: i128,

    /// Seed for the reference sequence. Fresh entropy when omitted.
    #[arg(long, env = "LCG_REFERENCE_SEED")]
    reference_seed: Option<u64>,

    /// Run all stages on the calling thread.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Also write the parameters and sequence as text to this file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON outcome.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let params = LcgParams { m: args.m, a: args.a, c: args.c, x0: args.x0, n: args.n };
    let analyzer = Analyzer::new(AnalyzerConfig {
        reference_seed: args.reference_seed,
        parallel: !args.sequential,
    });

    let result = analyzer.analyze(params);
    if let Ok(result) = &result {
        info!(
            period = result.lcg.period.period,
            pi = ?result.lcg.cesaro.pi_estimate,
            reference_period = result.reference.period.period,
            reference_pi = ?result.reference.cesaro.pi_estimate,
            theoretical = THEORETICAL_PI,
            "analysis complete"
        );
        if let Some(path) = &args.output {
            let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            write_report(BufWriter::new(file), &result.request, &result.sequence)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "sequence saved");
        }
    }
    let failed = result.is_err();

    let outcome = Outcome::from(result);
    let json = if args.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", json);

    if failed {
        std::process::exit(2);
    }
    Ok(())
}
