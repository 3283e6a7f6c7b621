use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{info, error, LevelFilter};
use docassist::{
    Assistant,
    DocAssistConfig,
    DocumentInput,
    Result,
    prompt::Feature,
};

#[derive(Parser)]
#[command(name = "docassist", about = "Document assistant: LLM features and plagiarism checks")]
struct Cli {
    /// INI configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// error | warn | info | debug | trace | none
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a few-shot prompt feature over a document
    Assist {
        /// summarize | feedback | extract | questions | grade
        #[arg(long, short)]
        feature: String,
        #[command(flatten)]
        input: InputArgs,
        /// Rubric used by the grade feature
        #[arg(long)]
        rubric: Option<String>,
    },
    /// Compare a document against previously uploaded documents
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Compare a document using the remote plagiarism service
    Online {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// A .pdf or .txt document
    #[arg(long)]
    file: Option<PathBuf>,
    /// Pasted text
    #[arg(long)]
    text: Option<String>,
}

impl InputArgs {
    fn into_input(self) -> DocumentInput {
        match (self.file, self.text) {
            (Some(path), _) => DocumentInput::File(path),
            (None, Some(text)) => DocumentInput::Pasted(text),
            (None, None) => DocumentInput::Pasted(String::new()),
        }
    }
}

fn init_logging(level: &str, log_file: Option<&PathBuf>) -> Result<()> {
    // Convert level string to LevelFilter
    let log_level = match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "none" => LevelFilter::Off,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to Warn", level);
            LevelFilter::Warn
        }
    };

    let mut builder = Builder::new();
    builder.filter(None, log_level);
    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<DocAssistConfig> {
    match path {
        Some(path) => DocAssistConfig::from_ini(path),
        None => DocAssistConfig::from_env(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let assistant = Assistant::from_config(config)?;

    match cli.command {
        Command::Assist { feature, input, rubric } => {
            let feature = Feature::from_str(&feature).ok_or_else(|| {
                docassist::Error::config(format!(
                    "unknown feature '{}' (expected one of: {})",
                    feature,
                    Feature::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
                ))
            })?;
            let input = input.into_input();
            if let DocumentInput::File(path) = &input {
                assistant.store_upload(path)?;
            }
            let content = assistant.resolve_input(&input)?.unwrap_or_default();
            match assistant.respond(feature, &content, rubric.as_deref()) {
                Some(output) => println!("{}", output),
                None => eprintln!("No text could be read from the document"),
            }
        },
        Command::Compare { input } => {
            let results = assistant.compare_local(&input.into_input())?;
            info!("Local comparison produced {} results", results.len());
            println!("{}", serde_json::to_string_pretty(&results)?);
        },
        Command::Online { input } => {
            let report = assistant.compare_online(&input.into_input())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_level, cli.log_file.as_ref()) {
        eprintln!("Failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
