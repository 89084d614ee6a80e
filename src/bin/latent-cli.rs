use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use latent::{Artifact, Engine, GenerationRequest, SeedSource, Style};

#[derive(Parser)]
struct Opts {
    /// Style to render, e.g. `organic_flow`. See `--list-styles`.
    #[clap(conflicts_with_all = ["request", "all"])]
    style: Option<Style>,

    /// Seed for the random stream. Taken from the clock when omitted.
    #[clap(long)]
    seed: Option<u64>,

    /// Density of the artwork, in [0, 1].
    #[clap(long)]
    complexity: Option<f64>,

    /// Comma-separated `#rrggbb` colors replacing the style's default palette.
    #[clap(long, value_delimiter = ',')]
    palette: Option<Vec<String>>,

    /// Read a JSON generation request from this file instead.
    #[clap(long, conflicts_with = "all")]
    request: Option<PathBuf>,

    /// Render every style once.
    #[clap(long)]
    all: bool,

    /// Output file, or output directory with `--all`. Defaults to `<style>-<seed>.png` in the
    /// working directory.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Print the PNG as base64 on stdout instead of writing a file.
    #[clap(long)]
    base64: bool,

    /// Print the available style names and exit.
    #[clap(long)]
    list_styles: bool,

    #[clap(flatten)]
    config: latent::Config,
}

impl Opts {
    fn request_for(&self, style: Style) -> GenerationRequest {
        let mut request = GenerationRequest::new(style);
        request.seed = self.seed;
        request.parameters.complexity = self.complexity;
        request.parameters.palette = self.palette.clone();
        request
    }

    fn requests(&self) -> anyhow::Result<Vec<GenerationRequest>> {
        if let Some(path) = &self.request {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read request at {}", path.display()))?;
            let request = serde_json::from_str(&json)
                .with_context(|| format!("Invalid request in {}", path.display()))?;
            return Ok(vec![request]);
        }
        if self.all {
            return Ok(Style::ALL.iter().map(|&s| self.request_for(s)).collect());
        }
        match self.style {
            Some(style) => Ok(vec![self.request_for(style)]),
            None => bail!("no style given; pass a style name, --request or --all"),
        }
    }

    fn output_path(&self, artifact: &Artifact) -> PathBuf {
        let filename = format!("{}-{}.png", artifact.style, artifact.seed);
        match &self.output {
            Some(dir) if self.all => dir.join(filename),
            Some(path) => path.clone(),
            None => PathBuf::from(filename),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    if opts.list_styles {
        for style in Style::ALL {
            println!("{}", style);
        }
        return Ok(());
    }

    let engine = Engine::new(opts.config.clone()).context("Invalid configuration")?;
    for request in opts.requests()? {
        let artifact = engine
            .generate(&request)
            .with_context(|| format!("Failed to generate {}", request.style))?;
        if artifact.seed_source == SeedSource::Clock {
            eprintln!(
                "warning: no seed given for {}; using clock seed {}",
                artifact.style, artifact.seed
            );
        }

        if opts.base64 {
            println!("{}", artifact.to_base64());
            continue;
        }
        let filename = opts.output_path(&artifact);
        std::fs::write(&filename, &artifact.png)
            .with_context(|| format!("Failed to write {}", filename.display()))?;
        eprintln!("wrote png: {}", filename.display());
    }
    Ok(())
}
