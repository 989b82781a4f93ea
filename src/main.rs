use std::path::PathBuf;

use clap::Parser;
use md2docx::{Config, DocumentConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "md2docx")]
#[command(about = "Convert Markdown resumes and write-ups to Word documents")]
struct Cli {
    /// Input Markdown files (defaults to the documents listed in the config)
    inputs: Vec<PathBuf>,

    /// Output file (single input only; defaults to input name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long, default_value = "md2docx.toml")]
    config: PathBuf,

    /// Output format (defaults to the output file's extension)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the parsed nodes instead of writing documents
    #[arg(long)]
    dump: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };

    if cli.output.is_some() && cli.inputs.len() > 1 {
        eprintln!("Error: --output needs exactly one input");
        std::process::exit(1);
    }

    let explicit_inputs = !cli.inputs.is_empty();
    let documents = if !explicit_inputs {
        let mut documents = config.documents.clone();
        if cli.format.is_some() {
            for doc in &mut documents {
                doc.format = cli.format;
            }
        }
        documents
    } else {
        cli.inputs
            .iter()
            .map(|input| {
                let format = cli
                    .format
                    .or_else(|| cli.output.as_deref().map(OutputFormat::from_path))
                    .unwrap_or(OutputFormat::Docx);
                let output = cli
                    .output
                    .clone()
                    .unwrap_or_else(|| input.with_extension(format.extension()));
                DocumentConfig {
                    input: input.clone(),
                    output,
                    format: Some(format),
                }
            })
            .collect()
    };

    if cli.dump {
        for doc in &documents {
            match std::fs::read_to_string(&doc.input) {
                Ok(markdown) => {
                    println!("{}", doc.input.display());
                    for node in md2docx::parse(&markdown) {
                        println!("  {:<10} {:?}", node.kind(), node);
                    }
                }
                Err(e) => eprintln!("Error reading {}: {}", doc.input.display(), e),
            }
        }
        return;
    }

    // Failures are logged per document; the run itself always completes
    let report = md2docx::batch::run(&documents, &config);
    for output in &report.converted {
        println!("Created {}", output.display());
    }

    // Only the configured batch exits cleanly after a failed document
    if explicit_inputs && !report.is_success() {
        std::process::exit(1);
    }
}
