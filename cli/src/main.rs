//! text-layout - lay out styled text from a JSON settings file
//!
//! Usage: `text-layout <settings.json> [--font <file>] [--measure-only]`
//!
//! Prints the layout info and, unless `--measure-only` is given, the draw
//! plan as JSON. With `--font` the text is measured by shaping it against
//! that font; otherwise a fixed-width estimate is used.

use anyhow::{bail, Context, Result};
use layout_engine::StyleSettings;
use render_model::{render_text, RenderMode};
use std::path::PathBuf;
use text_engine::{FixedWidthMeasurer, TextMeasurer, TextShaper, DEFAULT_FONT_FAMILY};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, PartialEq)]
struct Options {
    settings_path: PathBuf,
    font_path: Option<PathBuf>,
    mode: RenderMode,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut settings_path = None;
    let mut font_path = None;
    let mut mode = RenderMode::Draw;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--font" => {
                let path = args.next().context("--font needs a file path")?;
                font_path = Some(PathBuf::from(path));
            }
            "--measure-only" => mode = RenderMode::MeasureOnly,
            flag if flag.starts_with("--") => bail!("unknown option {}", flag),
            path => {
                if settings_path.is_some() {
                    bail!("only one settings file may be given");
                }
                settings_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Options {
        settings_path: settings_path
            .context("usage: text-layout <settings.json> [--font <file>] [--measure-only]")?,
        font_path,
        mode,
    })
}

fn load_settings(options: &Options) -> Result<StyleSettings> {
    let content = std::fs::read_to_string(&options.settings_path)
        .with_context(|| format!("reading {}", options.settings_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", options.settings_path.display()))
}

fn build_measurer(options: &Options, settings: &StyleSettings) -> Result<Box<dyn TextMeasurer>> {
    let Some(font_path) = &options.font_path else {
        return Ok(Box::new(FixedWidthMeasurer::default()));
    };

    let data = std::fs::read(font_path)
        .with_context(|| format!("reading font {}", font_path.display()))?;
    let font = settings.font_state();
    let family = font.primary_family().unwrap_or(DEFAULT_FONT_FAMILY).to_string();

    let mut shaper = TextShaper::new();
    shaper
        .load_font(family.clone(), data)
        .with_context(|| format!("loading font {} as \"{}\"", font_path.display(), family))?;
    Ok(Box::new(shaper))
}

fn run() -> Result<()> {
    let options = parse_args(std::env::args().skip(1))?;
    let settings = load_settings(&options)?;
    let measurer = build_measurer(&options, &settings)?;

    tracing::info!(
        settings = %options.settings_path.display(),
        shaped = options.font_path.is_some(),
        "laying out text"
    );

    let output = render_text(&settings, measurer.as_ref(), options.mode)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        tracing::error!("text-layout failed: {:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_settings_only() {
        let options = parse_args(args(&["text.json"])).unwrap();
        assert_eq!(options.settings_path, PathBuf::from("text.json"));
        assert_eq!(options.font_path, None);
        assert_eq!(options.mode, RenderMode::Draw);
    }

    #[test]
    fn test_parse_font_and_measure_only() {
        let options =
            parse_args(args(&["--measure-only", "text.json", "--font", "Roboto.ttf"])).unwrap();
        assert_eq!(options.font_path, Some(PathBuf::from("Roboto.ttf")));
        assert_eq!(options.mode, RenderMode::MeasureOnly);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
        assert!(parse_args(args(&["a.json", "--font"])).is_err());
        assert!(parse_args(args(&["a.json", "--bogus"])).is_err());
    }

    #[test]
    fn test_default_measurer_without_font() {
        let options = parse_args(args(&["text.json"])).unwrap();
        let settings = StyleSettings::new("abc").with_font_size(10.0);
        let measurer = build_measurer(&options, &settings).unwrap();
        let width = measurer.measure_width("abc", &settings.font_state()).unwrap();
        assert!((width - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_font_registered_under_primary_family() {
        let font_path = concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../crates/text_engine/tests/fonts/DejaVuSansMono.ttf"
        );
        let options = parse_args(args(&["text.json", "--font", font_path])).unwrap();

        let settings = StyleSettings::new("abc").with_font_face(["Mono", "serif"]);
        let measurer = build_measurer(&options, &settings).unwrap();
        let width = measurer.measure_width("abc", &settings.font_state()).unwrap();
        assert!(width > 0.0);

        // Default font face registers the font as sans-serif
        let settings = StyleSettings::new("abc");
        let measurer = build_measurer(&options, &settings).unwrap();
        assert!(measurer.measure_width("abc", &settings.font_state()).is_ok());
    }
}
