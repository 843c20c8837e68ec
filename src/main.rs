//! codeedit - print a source file with live-editor highlighting

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use codeedit::error::{EditorError, Result};
use codeedit::{terminal, CodeEditor, Config, LanguageRegistry};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    error_line: usize,
    tab_width: Option<usize>,
    languages: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --help and --version
    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("codeedit {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    let args = parse_args(&args)?;
    let path = args
        .file
        .ok_or_else(|| EditorError::Message("no input file (try --help)".to_string()))?;

    let mut registry = LanguageRegistry::new()?;
    for lang in &args.languages {
        registry.load_file(lang)?;
    }
    let language = registry.detect(&path).ok_or_else(|| {
        EditorError::Message(format!(
            "no language for {} (known: {})",
            path.display(),
            registry.list_languages().join(", ")
        ))
    })?;

    let mut config = Config::load();
    if let Some(width) = args.tab_width {
        config.tab_width = width;
    }

    let mut editor = CodeEditor::new(language, codeedit::Theme::one_dark());
    config.apply_to(&mut editor);

    let source = fs::read_to_string(&path)?;
    editor.set_text(&source);
    if args.error_line > 0 {
        editor.set_error_line(args.error_line);
        editor.update_highlighting();
    }

    terminal::render(&mut io::stdout(), editor.buffer(), editor.theme())?;
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--error-line" | "-e" => parsed.error_line = number_arg(arg, iter.next())?,
            "--tab-width" | "-t" => parsed.tab_width = Some(number_arg(arg, iter.next())?),
            "--language" | "-l" => {
                let path = iter
                    .next()
                    .ok_or_else(|| EditorError::Message(format!("{arg} needs a file")))?;
                parsed.languages.push(PathBuf::from(path));
            }
            _ if arg.starts_with('-') => {
                return Err(EditorError::Message(format!("unknown option {arg}")));
            }
            _ => parsed.file = Some(PathBuf::from(arg)),
        }
    }

    Ok(parsed)
}

fn number_arg(flag: &str, value: Option<&String>) -> Result<usize> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| EditorError::Message(format!("{flag} needs a number")))
}

fn print_usage() {
    println!("codeedit {} - highlight a source file", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codeedit [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -e, --error-line N   Mark line N (1-based) as an error");
    println!("  -t, --tab-width N    Draw tabs N characters wide");
    println!("  -l, --language FILE  Load a TOML language definition");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.codeedit.toml; RUST_LOG enables logging.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args = parse_args(&strings(&["-e", "3", "--tab-width", "4", "init.lua"])).unwrap();
        assert_eq!(args.error_line, 3);
        assert_eq!(args.tab_width, Some(4));
        assert_eq!(args.file, Some(PathBuf::from("init.lua")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&strings(&["--error-line"])).is_err());
        assert!(parse_args(&strings(&["--error-line", "x"])).is_err());
        assert!(parse_args(&strings(&["--bogus"])).is_err());
    }
}
