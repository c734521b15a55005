// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   serve    — load artifacts, then serve the web form
//   predict  — one-shot prediction from --field name=value pairs
//   check    — load artifacts and print the feature contract
//
// All three load artifacts the same way, so a `check` that
// passes means `serve` will start.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::application::AppKind;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the prediction form over HTTP
    Serve(ServeArgs),

    /// Run one prediction from the command line
    Predict(PredictArgs),

    /// Load and validate artifacts without serving
    Check(CheckArgs),
}

/// Which model to load
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppArg {
    Stroke,
    Depression,
}

/// The application layer never sees clap types.
impl From<AppArg> for AppKind {
    fn from(a: AppArg) -> Self {
        match a {
            AppArg::Stroke     => AppKind::Stroke,
            AppArg::Depression => AppKind::Depression,
        }
    }
}

/// Arguments every subcommand shares
#[derive(Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Model to serve
    #[arg(long, value_enum)]
    pub app: AppArg,

    /// Directory holding the encoder and model artifacts
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// A form field as name=value; repeat for every field
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

/// Split `name=value` at the first '='.
fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("smoking_status=formerly smoked"),
            Ok(("smoking_status".to_string(), "formerly smoked".to_string()))
        );
        assert_eq!(parse_field("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
    }

    #[test]
    fn test_app_arg_maps_to_kind() {
        assert_eq!(AppKind::from(AppArg::Stroke), AppKind::Stroke);
        assert_eq!(AppKind::from(AppArg::Depression), AppKind::Depression);
    }
}
