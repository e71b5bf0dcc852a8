use anyhow::{Context, Result};
use postit_config::Config;
use postit_engine::parsing::snapshot;
use postit_engine::{Block, ParseOptions, ParseScheduler, io, parse_with};
use serde::Serialize;
use std::io::{BufRead, Read};
use std::path::PathBuf;
use std::{env, process};

const USAGE: &str = "[--json] [--live] [--no-markdown] [--no-autolinks] [PATH|-]";

#[derive(Debug, Default)]
struct Args {
    json: bool,
    live: bool,
    no_markdown: bool,
    no_autolinks: bool,
    path: Option<String>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--live" => parsed.live = true,
                "--no-markdown" => parsed.no_markdown = true,
                "--no-autolinks" => parsed.no_autolinks = true,
                flag if flag.starts_with("--") => return Err(format!("Unknown option {flag}")),
                path => {
                    if parsed.path.replace(path.to_string()).is_some() {
                        return Err("Only one PATH may be given".to_string());
                    }
                }
            }
        }
        Ok(parsed)
    }

    fn options(&self, config: &Config) -> ParseOptions {
        ParseOptions {
            markdown: config.markdown.enabled_by_default && !self.no_markdown,
            autolinks: config.markdown.autolinks && !self.no_autolinks,
        }
    }
}

/// Where the notes come from.
#[derive(Debug, PartialEq)]
enum Source {
    Stdin,
    File(PathBuf),
    Dir(PathBuf),
}

fn resolve_source(path: Option<&str>, config: &Config) -> Source {
    match path {
        Some("-") => Source::Stdin,
        Some(path) => {
            let path = PathBuf::from(path);
            if path.is_dir() {
                Source::Dir(path)
            } else {
                Source::File(path)
            }
        }
        None => match &config.notes_path {
            Some(notes_path) => Source::Dir(notes_path.clone()),
            None => Source::Stdin,
        },
    }
}

#[derive(Debug, Serialize)]
struct ParsedNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation: Option<u64>,
    blocks: Vec<Block>,
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

fn parse_source(source: &Source, options: &ParseOptions) -> Result<Vec<ParsedNote>> {
    let paths = match source {
        Source::Stdin => {
            return Ok(vec![ParsedNote {
                path: None,
                generation: None,
                blocks: parse_with(&read_stdin()?, options),
            }]);
        }
        Source::File(path) => vec![path.clone()],
        Source::Dir(dir) => io::scan_notes(dir)?,
    };

    paths
        .into_iter()
        .map(|path| -> Result<ParsedNote> {
            let text = io::read_note(&path)?;
            log::debug!("Parsing {}", path.display());
            Ok(ParsedNote {
                blocks: parse_with(&text, options),
                path: Some(path),
                generation: None,
            })
        })
        .collect()
}

/// Feeds stdin through the scheduler one appended line at a time, the way
/// an editor re-parses while the user types.
fn parse_live(options: ParseOptions) -> Result<ParsedNote> {
    let scheduler = ParseScheduler::new(options);
    let mut text = String::new();

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&line);
        scheduler.request(text.as_str());
    }

    let requested = scheduler.latest_requested();
    let result = scheduler.wait_idle();
    log::info!(
        "Requested {requested} parses, last delivered generation {}",
        scheduler.latest_delivered()
    );

    Ok(match result {
        Some(result) => ParsedNote {
            path: None,
            generation: Some(result.generation),
            blocks: result.blocks,
        },
        None => ParsedNote {
            path: None,
            generation: None,
            blocks: Vec::new(),
        },
    })
}

fn print_notes(notes: &[ParsedNote], json: bool) -> Result<()> {
    if json {
        let out = match notes {
            [note] => serde_json::to_string_pretty(note)?,
            _ => serde_json::to_string_pretty(notes)?,
        };
        println!("{out}");
        return Ok(());
    }

    for note in notes {
        if notes.len() > 1
            && let Some(path) = &note.path
        {
            println!("== {} ==", path.display());
        }
        print!("{}", snapshot::normalize(&note.blocks));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = env::args();
    let program_name = args.next().unwrap_or_else(|| "postit-cli".to_string());
    let args = match Args::parse(args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} {USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };
    let options = args.options(&config);
    log::debug!("Parse options: {options:?}");

    let notes = if args.live {
        vec![parse_live(options)?]
    } else {
        let source = resolve_source(args.path.as_deref(), &config);
        if let Source::Dir(dir) = &source
            && let Err(e) = io::validate_notes_dir(dir)
        {
            eprintln!("Error: Notes path '{}' is invalid: {e}", dir.display());
            process::exit(1);
        }
        parse_source(&source, &options)?
    };

    print_notes(&notes, args.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postit_config::MarkdownConfig;

    fn args(list: &[&str]) -> Result<Args, String> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_flags_and_path() {
        let parsed = args(&["--json", "--no-autolinks", "notes/"]).unwrap();
        assert!(parsed.json);
        assert!(parsed.no_autolinks);
        assert!(!parsed.live);
        assert_eq!(parsed.path.as_deref(), Some("notes/"));
    }

    #[test]
    fn test_reject_unknown_flag_and_extra_path() {
        assert!(args(&["--colour"]).is_err());
        assert!(args(&["a.md", "b.md"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            notes_path: None,
            markdown: MarkdownConfig {
                enabled_by_default: true,
                autolinks: false,
            },
        };
        assert_eq!(
            args(&[]).unwrap().options(&config),
            ParseOptions {
                markdown: true,
                autolinks: false
            }
        );
        assert!(!args(&["--no-markdown"]).unwrap().options(&config).markdown);
    }

    #[test]
    fn test_resolve_source() {
        let config = Config::default();
        assert_eq!(resolve_source(None, &config), Source::Stdin);
        assert_eq!(resolve_source(Some("-"), &config), Source::Stdin);

        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        assert_eq!(
            resolve_source(Some(dir_str), &config),
            Source::Dir(dir.path().to_path_buf())
        );

        let file = dir.path().join("note.md");
        assert_eq!(
            resolve_source(file.to_str(), &config),
            Source::File(file.clone())
        );

        let configured = Config {
            notes_path: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        assert_eq!(
            resolve_source(None, &configured),
            Source::Dir(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_parse_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "**a**").unwrap();
        std::fs::write(dir.path().join("b.txt"), "---").unwrap();

        let source = Source::Dir(dir.path().to_path_buf());
        let notes = parse_source(&source, &ParseOptions::default()).unwrap();

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].blocks[0].content(), Some("<Bold>a</>"));
        assert_eq!(notes[1].blocks[0].content(), None);
    }
}
