//! Convert PDFs into word-frequency lists.
//!
//! Usage:
//!   zipf --filepath book.pdf
//!   zipf --filepath book.pdf --sections 10 --show-numbers
//!   zipf --filepath book.pdf --sections 0 50 120 200 --show-duplicates
//!   zipf --filepath book.pdf --language it --models-dir ~/lemma-models
//!
//! With `--sections` absent, the whole document is counted as one list.
//! A single `--sections` value is a pages-per-section size; several values
//! are explicit section start indices (the last bounds the final section).
//! By default counts are hidden and a word repeated across sections is
//! shown only in its first section. Set `RUST_LOG=debug` for pipeline
//! logging; `ZIPF_MODELS_DIR` overrides the default models directory.

use std::path::PathBuf;
use std::process::ExitCode;

use zipf_oxide::format::{format_sections, format_table};
use zipf_oxide::{
    FrequencyCounter, IdentityPreprocessor, LemmaPreprocessor, PdfPageSource, Preprocessor,
    Result, SectionSpec,
};

struct ZipfConfig {
    filepath: Option<PathBuf>,
    sections: Vec<String>,
    show_numbers: bool,
    show_duplicates: bool,
    language: Option<String>,
    models_dir: PathBuf,
    help: bool,
}

impl ZipfConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();

        let mut config = Self {
            filepath: None,
            sections: Vec::new(),
            show_numbers: false,
            show_duplicates: false,
            language: None,
            models_dir: std::env::var_os("ZIPF_MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("models")),
            help: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--filepath" | "-f" => {
                    i += 1;
                    if i < args.len() {
                        config.filepath = Some(PathBuf::from(&args[i]));
                    }
                },
                "--sections" | "-s" => {
                    // Consume every following value up to the next flag.
                    while i + 1 < args.len() && !args[i + 1].starts_with('-') {
                        i += 1;
                        config.sections.push(args[i].clone());
                    }
                },
                "--show-numbers" | "-n" => {
                    config.show_numbers = true;
                },
                "--hide-numbers" => {
                    config.show_numbers = false;
                },
                "--show-duplicates" | "-d" => {
                    config.show_duplicates = true;
                },
                "--hide-duplicates" => {
                    config.show_duplicates = false;
                },
                "--language" | "-l" => {
                    i += 1;
                    if i < args.len() {
                        config.language = Some(args[i].clone());
                    }
                },
                "--models-dir" => {
                    i += 1;
                    if i < args.len() {
                        config.models_dir = PathBuf::from(&args[i]);
                    }
                },
                "--help" | "-h" => {
                    config.help = true;
                },
                other => {
                    eprintln!("Warning: ignoring unknown argument '{}'", other);
                },
            }
            i += 1;
        }

        config
    }
}

fn print_usage() {
    eprintln!("Convert PDFs into word-frequency lists.");
    eprintln!();
    eprintln!("Usage: zipf --filepath <pdf> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --filepath <path>   Path to the target PDF (required)");
    eprintln!("  -s, --sections <n ...>  One value: pages per section;");
    eprintln!("                          several values: section start indices");
    eprintln!("  -n, --show-numbers      Show the count next to each entry");
    eprintln!("      --hide-numbers      Hide counts (default)");
    eprintln!("  -d, --show-duplicates   Show words already seen in earlier sections");
    eprintln!("      --hide-duplicates   Hide them (default)");
    eprintln!("  -l, --language <code>   Lemmatize with this language's model");
    eprintln!("      --models-dir <dir>  Lemma model directory (default: models,");
    eprintln!("                          or $ZIPF_MODELS_DIR)");
    eprintln!("  -h, --help              Show this help");
}

fn run(config: &ZipfConfig, filepath: &std::path::Path) -> Result<()> {
    let source = PdfPageSource::open(filepath)?;

    let preprocessor: Box<dyn Preprocessor> = match &config.language {
        Some(language) => Box::new(LemmaPreprocessor::for_language(language, &config.models_dir)?),
        None => Box::new(IdentityPreprocessor),
    };

    let counter = FrequencyCounter::with_preprocessor(source, preprocessor);

    if config.sections.is_empty() {
        let table = counter.count_document()?;
        print!("{}", format_table(&table, config.show_numbers));
    } else {
        let spec = SectionSpec::parse(&config.sections)?;
        let sections = counter.count_by_sections(&spec, config.show_duplicates)?;
        print!("{}", format_sections(&sections, config.show_numbers));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let config = ZipfConfig::from_args();

    if config.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let Some(filepath) = config.filepath.clone() else {
        eprintln!("Error: --filepath is required");
        eprintln!();
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(&config, &filepath) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
