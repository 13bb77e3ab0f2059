use std::path::PathBuf;

use anyhow::Result;
use graphpeek_core::prelude::*;
use graphpeek_libcli::{DisplayParams, ModelParams};
use structopt::StructOpt;

fn main() {
    let cli_args = CliArgs::from_args();

    let level = match cli_args.verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = cli_args.run() {
        eprintln!("Error: {e:?}");
        std::process::exit(IntrospectError::kind_of(&e).map(|k| k.exit_code()).unwrap_or(1))
    }
}

/// Print the declared interface or the nodes of a model.
#[derive(Debug, StructOpt)]
#[structopt(name = "graphpeek", about = "Print the inputs, outputs or nodes of a model")]
pub struct CliArgs {
    /// Verbosity, repeat for more
    #[structopt(short = "v", parse(from_occurrences))]
    pub verbosity: usize,

    /// Model format, guessed from the path when absent
    #[structopt(long, possible_values = ModelFormat::variants())]
    pub format: Option<ModelFormat>,

    /// Saved model signature key
    #[structopt(long, default_value = "serving_default")]
    pub signature: String,

    /// Saved model meta graph tag
    #[structopt(long = "tag", number_of_values = 1)]
    pub tags: Vec<String>,

    /// Print the report as JSON
    #[structopt(long)]
    pub json: bool,

    /// What to list
    #[structopt(possible_values = Mode::variants())]
    pub mode: Mode,

    /// Model file, or saved model directory
    #[structopt(parse(from_os_str))]
    pub path: PathBuf,
}

impl CliArgs {
    pub fn model_params(&self) -> ModelParams {
        let default = ModelParams::default();
        ModelParams {
            format: self.format,
            signature: self.signature.clone(),
            tags: if self.tags.is_empty() { default.tags } else { self.tags.clone() },
        }
    }

    pub fn run(&self) -> Result<()> {
        let graph = graphpeek_libcli::load(&self.path, &self.model_params())?;
        log::info!("Loaded {} nodes from {:?} as {}", graph.nodes.len(), self.path, graph.format);
        let report = introspect(&graph, self.mode)?;
        let display = DisplayParams { json: self.json };
        print!("{}", display.render(&report)?);
        Ok(())
    }
}
