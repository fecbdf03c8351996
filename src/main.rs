use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rafa::attributes::KNOWN_ATTRIBUTES;
use rafa::canvas::escape_html;
use rafa::{Canvas, CanvasTarget, ErrorCode, RafaConfig, RafaError, SceneFormat, parse_scene, render_scene};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "rafa", about = "Generate Raphael.js scripts from scene documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a YAML or JSON scene to JavaScript.
    Render {
        file: PathBuf,
        /// Input format; guessed from the extension when omitted.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Wrap the script in a `<script>` block.
        #[arg(long, conflicts_with = "html")]
        tag: bool,
        /// Emit a standalone HTML page that loads Raphael.
        #[arg(long)]
        html: bool,
    },
    /// List the attribute names Raphael understands.
    Attributes,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for SceneFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Yaml => Self::Yaml,
            FormatArg::Json => Self::Json,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.error_code(), "command failed");
            eprintln!("error [{}]: {err}", err.error_code());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RafaError> {
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Render { file, format, tag, html } => {
            let config = RafaConfig::from_env()?;
            let format = format.map_or_else(|| SceneFormat::from_path(&file).unwrap_or(SceneFormat::Yaml), Into::into);
            let canvas = load(&file, format, &config)?;
            let rendered = if html {
                html_page(&canvas, &config)
            } else if tag {
                canvas.javascript_tag()
            } else {
                canvas.to_script()
            };
            writeln!(out, "{rendered}")?;
        }
        Command::Attributes => {
            for name in KNOWN_ATTRIBUTES {
                writeln!(out, "{name}")?;
            }
        }
    }
    Ok(())
}

fn load(file: &Path, format: SceneFormat, config: &RafaConfig) -> Result<Canvas, RafaError> {
    let text = std::fs::read_to_string(file)?;
    let scene = parse_scene(&text, format)?;
    tracing::info!(file = %file.display(), elements = scene.elements.len(), "rendering scene");
    render_scene(&scene, config)
}

fn html_page(canvas: &Canvas, config: &RafaConfig) -> String {
    let holder = match canvas.target() {
        CanvasTarget::Container { id, .. } => format!("<div id=\"{}\"></div>\n", escape_html(id)),
        CanvasTarget::Position { .. } => String::new(),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n{}\n</head>\n<body>\n{holder}{}\n</body>\n</html>",
        config.script_include_tag(),
        canvas.javascript_tag()
    )
}
