use anyhow::{Context, Result};
use markdown_lite_config::{Config, ConfigError};
use markdown_lite_engine::MarkdownConverter;
use std::{
    collections::HashSet,
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// What a display gets for empty input; the converter is not called.
const EMPTY_DOCUMENT: &str = "<p></p>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read markdown from stdin")?;
                Ok(text)
            }
            Input::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Converts `text` the way a preview pane shows it.
fn render_for_display(converter: &MarkdownConverter, text: &str) -> String {
    if text.is_empty() {
        return EMPTY_DOCUMENT.to_string();
    }
    converter.to_html(text)
}

/// `<output_dir>/<stem>.html` for file inputs; stdin always goes to stdout.
fn output_path(output_dir: Option<&Path>, input: &Input) -> Option<PathBuf> {
    let (dir, Input::File(path)) = (output_dir?, input) else {
        return None;
    };
    let stem = path.file_stem()?;
    Some(dir.join(stem).with_extension("html"))
}

/// Converts one input. Inputs whose output file was already written in this
/// run (same stem, different directory) are skipped with a warning.
fn convert_input(
    converter: &MarkdownConverter,
    input: &Input,
    output_dir: Option<&Path>,
    written: &mut HashSet<PathBuf>,
    stdout: &mut impl Write,
) -> Result<()> {
    let target = output_path(output_dir, input);
    if let Some(path) = &target
        && written.contains(path)
    {
        log::warn!(
            "Skipping {input:?}: {} was already written by an earlier input",
            path.display()
        );
        return Ok(());
    }

    let text = input.read()?;
    if text.is_empty() {
        log::warn!("Empty input {input:?}, rendering empty paragraph");
    }
    let html = render_for_display(converter, &text);

    match target {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
            written.insert(path);
        }
        None => {
            writeln!(stdout, "{html}").context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Explicit files don't need the config, so a broken one only costs the tag
/// overrides and output directory; without files it is fatal.
fn config_for_run(
    loaded: Result<Option<Config>, ConfigError>,
    explicit_files: bool,
) -> Result<Option<Config>, ConfigError> {
    match loaded {
        Err(e) if explicit_files => {
            log::warn!("Ignoring config file: {e}");
            Ok(None)
        }
        other => other,
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [FILE|-]...");
    eprintln!("With no files, inputs come from {}", Config::config_path().display());
    eprintln!("or, when there is no config file, from stdin.");
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("markdown-lite-cli");
    let file_args = args.get(1..).unwrap_or_default();

    if file_args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(program);
        return Ok(());
    }
    if let Some(flag) = file_args.iter().find(|a| a.starts_with("--")) {
        eprintln!("Error: Unknown option '{flag}'");
        print_usage(program);
        process::exit(1);
    }

    let config = match config_for_run(Config::load(), !file_args.is_empty()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let inputs: Vec<Input> = if !file_args.is_empty() {
        file_args.iter().map(|a| Input::from_arg(a)).collect()
    } else {
        match &config {
            Some(config) => config
                .resolve_inputs()?
                .into_iter()
                .map(Input::File)
                .collect(),
            None => vec![Input::Stdin],
        }
    };

    if inputs.is_empty() {
        log::warn!("No input files matched the configured patterns");
        return Ok(());
    }

    let converter = match &config {
        Some(config) => MarkdownConverter::with_registry(config.tag_registry()?),
        None => MarkdownConverter::new(),
    };
    let output_dir = config.as_ref().and_then(|c| c.output_dir.as_deref());

    log::info!("markdown-lite converting {} input(s)", inputs.len());
    let mut stdout = io::stdout().lock();
    let mut written = HashSet::new();
    for input in &inputs {
        convert_input(&converter, input, output_dir, &mut written, &mut stdout)?;
    }

    Ok(())
}
