// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates to the application layer. The web layer
// (Layer 1b) is started from here by `serve`.
//
// Startup order for `serve`:
//   1. load every artifact (any failure → error, exit code 1)
//   2. only then bind the listener
// so a process with a missing artifact never accepts a request.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{ArtifactArgs, CheckArgs, Commands, PredictArgs, ServeArgs};

use crate::application::{self, FormPredictor};
use crate::data::form::FormFields;
use crate::infra::artifact_store::ArtifactStore;

#[derive(Parser, Debug)]
#[command(
    name = "health-predict",
    version,
    about = "Serve pre-trained stroke and depression classifiers behind a web form."
)]
pub struct Cli {
    /// Verbose (debug-level) logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)   => run_serve(args),
            Commands::Predict(args) => run_predict(args),
            Commands::Check(args)   => run_check(args),
        }
    }
}

fn load(args: &ArtifactArgs) -> Result<Arc<dyn FormPredictor>> {
    let store = ArtifactStore::new(&args.artifacts_dir);
    application::load(args.app.into(), &store)
        .with_context(|| format!("Cannot start the {} app", application::AppKind::from(args.app)))
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let predictor = load(&args.artifacts)?;
    let addr = SocketAddr::new(args.host, args.port);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot start the async runtime")?;
    runtime.block_on(crate::web::serve(predictor, addr))
}

fn run_predict(args: PredictArgs) -> Result<()> {
    let predictor = load(&args.artifacts)?;
    let form = FormFields::from_pairs(args.fields);

    let prediction = predictor.predict(&form)?;
    println!("{}", prediction.message);
    match prediction.probability {
        Some(p) => println!("score={:.4} probability={:.4}", prediction.score, p),
        None    => println!("score={:.4}", prediction.score),
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let predictor = load(&args.artifacts)?;
    let summary = predictor.summary();

    println!("{} artifacts OK ({})", predictor.kind(), args.artifacts.artifacts_dir.display());
    println!("estimator: {}", summary.estimator);
    println!("features ({}):", summary.features.len());
    for (i, name) in summary.features.iter().enumerate() {
        println!("  {i:>2}  {name}");
    }
    for (field, classes) in &summary.encoders {
        println!("encoder {field}: {}", classes.join(", "));
    }
    Ok(())
}
