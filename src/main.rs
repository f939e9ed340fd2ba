mod dispatch;
mod fallback;
mod language;
mod printer;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use dispatch::{DispatchResult, dispatch};
use language::{LanguageId, infer};
use printer::{PrettierCli, StyleOptions};
use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "webfmt",
    version,
    about = "Experimental JavaScript/HTML/CSS beautifier"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Fmt {
        /// Paths (files or directories) to format; `-` reads stdin (defaults to current dir)
        paths: Vec<PathBuf>,
        /// Write the formatted content back to the files
        #[arg(long)]
        write: bool,
        /// Check if files are formatted; non-zero exit if changes needed
        #[arg(long)]
        check: bool,
        /// Format as this language instead of detecting it per file
        #[arg(long)]
        language: Option<LanguageId>,
        /// Indent width
        #[arg(long, default_value_t = 2)]
        indent: u32,
    },
    Detect {
        /// File to inspect
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug)]
enum Mode {
    Stdout,
    Write,
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Fmt {
            paths,
            write,
            check,
            language,
            indent,
        } => {
            if write && check {
                bail!("--write and --check are mutually exclusive");
            }
            let mode = if write {
                Mode::Write
            } else if check {
                Mode::Check
            } else {
                Mode::Stdout
            };
            let style = StyleOptions {
                tab_width: indent,
                ..StyleOptions::default()
            };
            if paths.len() == 1 && paths[0] == Path::new("-") {
                return format_stdin(language, &style);
            }
            let targets = if paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                paths
            };
            let mut web_files = Vec::new();
            for p in targets {
                collect_web_files(&p, &mut web_files);
            }

            let printer = PrettierCli::new();
            let results: Vec<_> = web_files
                .par_iter()
                .map(|path| process_file(path, &printer, language, &style, mode))
                .collect();
            let mut had_change = false;
            for r in results {
                match r {
                    Ok(changed) => had_change |= changed,
                    Err(e) => eprintln!("{}", e),
                }
            }
            if matches!(mode, Mode::Check) && had_change {
                std::process::exit(1);
            }
        }
        Commands::Detect { file } => {
            detect_file(&file)?;
        }
    }
    Ok(())
}

fn format_stdin(language: Option<LanguageId>, style: &StyleOptions) -> Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    let printer = PrettierCli::new();
    match dispatch(&printer, &text, language, style) {
        DispatchResult::Formatted { text } => {
            print!("{}", text);
            Ok(())
        }
        DispatchResult::Failed {
            message,
            fallback_text,
        } => {
            eprintln!("{}", message);
            if !fallback_text.is_empty() {
                println!("{}", fallback_text);
            }
            std::process::exit(1);
        }
    }
}

fn detect_file(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let by_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .and_then(LanguageId::from_extension);
    match by_extension {
        Some(lang) => println!("{}: {} (from extension)", path.display(), lang),
        None => println!("{}: {} (inferred)", path.display(), infer(&content)),
    }
    Ok(())
}

fn is_web_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| LanguageId::from_extension(ext).is_some())
}

fn collect_web_files(path: &Path, out: &mut Vec<PathBuf>) {
    if path.is_file() {
        if is_web_file(path) {
            out.push(path.to_path_buf());
        }
        return;
    }
    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_file() && is_web_file(p) {
            out.push(p.to_path_buf());
        }
    }
}

fn process_file(
    path: &Path,
    printer: &PrettierCli,
    override_language: Option<LanguageId>,
    style: &StyleOptions,
    mode: Mode,
) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let language = override_language.or_else(|| {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(LanguageId::from_extension)
    });
    match dispatch(printer, &content, language, style) {
        DispatchResult::Formatted { text } => {
            let changed = text != content;
            match mode {
                Mode::Stdout => {
                    println!("===== {} =====", path.display());
                    print!("{}", text);
                }
                Mode::Write => {
                    if changed {
                        fs::write(path, text)?;
                    }
                }
                Mode::Check => {}
            }
            Ok(changed)
        }
        DispatchResult::Failed {
            message,
            fallback_text,
        } => {
            eprintln!("{}: {}", path.display(), message);
            // Keep the output pane populated, but never write fallback text
            // back to a file.
            if matches!(mode, Mode::Stdout) && !fallback_text.is_empty() {
                println!("===== {} =====", path.display());
                println!("{}", fallback_text);
            }
            Ok(false)
        }
    }
}
