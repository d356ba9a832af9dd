use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use conic::rand::{draw_central, draw_conic, AxesSign, ReplayToken, SampleCfg};
use conic::{Coefficients, ConicSection};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;

use provenance::Payload;
use report::ConicReport;

#[derive(Parser)]
#[command(name = "conic")]
#[command(about = "Classify and normalize planar conic sections")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    /// Arbitrary symmetric conics
    Any,
    Ellipse,
    Hyperbola,
    ImaginaryEllipse,
}

#[derive(Subcommand)]
enum Action {
    /// Classify `A x² + B xy + C y² + D x + E y + F = 0` and print a JSON report
    Classify {
        /// Six comma-separated coefficients A,B,C,D,E,F
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, num_args = 1..)]
        coeffs: Vec<f64>,
        /// Also write the report (plus provenance sidecar) to this path
        #[arg(long)]
        out: Option<String>,
    },
    /// Draw reproducible random conics and write their reports as a JSON array
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long, value_enum, default_value_t = Family::Any)]
        family: Family,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Classify { coeffs, out } => classify(coeffs, out, cmd.tag),
        Action::Sample {
            seed,
            count,
            family,
            out,
        } => sample(seed, count, family, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn parse_coefficients(coeffs: &[f64]) -> Result<Coefficients> {
    let arr: [f64; 6] = match coeffs.try_into() {
        Ok(arr) => arr,
        Err(_) => bail!("expected 6 coefficients A,B,C,D,E,F, got {}", coeffs.len()),
    };
    Ok(Coefficients::from(arr))
}

fn classify(coeffs: Vec<f64>, out: Option<String>, tag: Option<String>) -> Result<()> {
    let c = parse_coefficients(&coeffs)?;
    let conic = ConicSection::from_coefficients(&c);
    let rep = ConicReport::new(&conic);
    tracing::info!(
        equation = %conic,
        conic_type = rep.conic_type.as_deref().unwrap_or("unclassified"),
        proper = rep.proper,
        central = rep.central,
        tag = ?tag,
        "classify"
    );
    if let Some(err) = &rep.classification_error {
        tracing::warn!(error = %err, "classification gap");
    }
    let body = serde_json::to_string_pretty(&rep)?;
    println!("{body}");
    if let Some(out) = out {
        write_artifact(&out, body.as_bytes())?;
        let payload = Payload::new("classify", serde_json::json!({ "coeffs": coeffs })).with_tag(tag);
        let prov = provenance::write_sidecar(&out, payload)?;
        tracing::info!(out, provenance = %prov.display(), "wrote report");
    }
    Ok(())
}

fn sample(seed: u64, count: u64, family: Family, out: String, tag: Option<String>) -> Result<()> {
    tracing::info!(seed, count, family = ?family, out, tag = ?tag, "sample");
    let cfg = SampleCfg::default();
    let reports: Vec<ConicReport> = (0..count)
        .map(|index| {
            let tok = ReplayToken { seed, index };
            let conic = match family {
                Family::Any => draw_conic(cfg, tok),
                Family::Ellipse => draw_central(cfg, tok, AxesSign::Ellipse),
                Family::Hyperbola => draw_central(cfg, tok, AxesSign::Hyperbola),
                Family::ImaginaryEllipse => draw_central(cfg, tok, AxesSign::ImaginaryEllipse),
            };
            ConicReport::new(&conic)
        })
        .collect();
    let gaps = reports
        .iter()
        .filter(|r| r.classification_error.is_some())
        .count();
    tracing::info!(n = reports.len(), gaps, "sampled");

    write_artifact(&out, &serde_json::to_vec_pretty(&reports)?)?;
    let payload = Payload::new(
        "sample",
        serde_json::json!({
            "seed": seed,
            "count": count,
            "family": format!("{family:?}"),
            "coeff_range": cfg.coeff_range,
            "center_range": cfg.center_range,
            "axis_range": [cfg.axis_range.0, cfg.axis_range.1],
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::document("report", tag.as_deref(), serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_artifact(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))?;
    Ok(())
}
