//! Assemble prompts and read the guide from the command line.
//!
//! # Examples
//!
//! ```sh
//! # Assemble from fields
//! promptcraft assemble --task "Summarize this article" --format "3 bullet points"
//!
//! # Start from a template and override one field
//! promptcraft assemble --template "Professional Email" --context "to a refund request"
//!
//! # Machine-readable output
//! promptcraft assemble --template "Data Analysis" --json
//!
//! # List templates, including user templates from a file
//! promptcraft --templates-file my-templates.json templates
//!
//! # Print a guide page
//! promptcraft guide techniques
//! ```

use std::process;

use clap::{Args, Parser, Subcommand};
use promptcraft::guide::{self, Page};
use promptcraft::{PromptDraft, TemplateLibrary, assemble, load_template};
use serde::Serialize;
use tracing::Level;

/// Assemble prompts and read the prompt-engineering guide.
#[derive(Parser)]
#[command(name = "promptcraft")]
struct Cli {
    /// JSON file with extra templates to merge into the built-in set
    #[arg(long, global = true)]
    templates_file: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble a prompt from task, context, examples, and format
    Assemble(AssembleArgs),
    /// List available templates
    Templates {
        /// Dump full templates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a page of the guide
    Guide {
        /// home, fundamentals, builder, or techniques
        #[arg(default_value = "home")]
        page: String,

        /// Print the page content as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct AssembleArgs {
    /// Start from a named template; field flags override its fields
    #[arg(long)]
    template: Option<String>,

    /// The action requested
    #[arg(long)]
    task: Option<String>,

    /// Background and constraints
    #[arg(long)]
    context: Option<String>,

    /// Style or sample reference
    #[arg(long)]
    examples: Option<String>,

    /// Desired output structure
    #[arg(long)]
    format: Option<String>,

    /// Print `{"prompt": ..., "word_count": ...}` instead of plain text
    #[arg(long)]
    json: bool,
}

// ── Helpers ────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_library(path: Option<&str>) -> Result<TemplateLibrary, String> {
    let mut library = TemplateLibrary::new();
    if let Some(path) = path {
        library.load_file(path).map_err(|e| e.to_string())?;
    }
    Ok(library)
}

/// Build the draft for `assemble`: template first, then explicit fields.
fn build_draft(args: &AssembleArgs, library: &TemplateLibrary) -> Result<PromptDraft, String> {
    let mut draft = match &args.template {
        Some(name) => load_template(library.require(name).map_err(|e| e.to_string())?),
        None => PromptDraft::new(),
    };
    if let Some(task) = &args.task {
        draft.task = task.clone();
    }
    if let Some(context) = &args.context {
        draft.context = context.clone();
    }
    if let Some(examples) = &args.examples {
        draft.examples = examples.clone();
    }
    if let Some(format) = &args.format {
        draft.format = format.clone();
    }
    Ok(draft)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to encode JSON: {e}"))
}

#[derive(Serialize)]
struct PageJson {
    page: Page,
    title: &'static str,
    summary: &'static str,
    text: String,
}

fn run(cli: Cli) -> Result<(), String> {
    let library = load_library(cli.templates_file.as_deref())?;

    match cli.command {
        Command::Assemble(args) => {
            let draft = build_draft(&args, &library)?;
            let assembled = assemble(&draft);
            if args.json {
                println!("{}", to_json(&assembled)?);
            } else {
                println!("{}", assembled.prompt);
                eprintln!("({} words)", assembled.word_count);
            }
        }
        Command::Templates { json } => {
            if json {
                println!("{}", to_json(&library.templates())?);
            } else {
                for template in library.templates() {
                    println!("{}", template.name);
                }
            }
        }
        Command::Guide { page, json } => {
            let page = Page::parse(&page).ok_or_else(|| {
                format!("unknown page '{page}' (expected home, fundamentals, builder, or techniques)")
            })?;
            let text = guide::page_text(page);
            if json {
                println!(
                    "{}",
                    to_json(&PageJson {
                        page,
                        title: page.title(),
                        summary: page.summary(),
                        text,
                    })?
                );
            } else {
                print!("{text}");
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(template: Option<&str>) -> AssembleArgs {
        AssembleArgs {
            template: template.map(str::to_string),
            task: None,
            context: None,
            examples: None,
            format: None,
            json: false,
        }
    }

    #[test]
    fn cli_parses_assemble_flags() {
        let cli = Cli::try_parse_from([
            "promptcraft",
            "assemble",
            "--task",
            "Summarize",
            "--format",
            "bullets",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Assemble(a) => {
                assert_eq!(a.task.as_deref(), Some("Summarize"));
                assert_eq!(a.format.as_deref(), Some("bullets"));
                assert!(a.json);
            }
            _ => panic!("expected assemble"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["promptcraft", "templates", "--templates-file", "t.json", "-v"])
                .unwrap();
        assert_eq!(cli.templates_file.as_deref(), Some("t.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn field_flags_override_template() {
        let library = TemplateLibrary::new();
        let mut a = args(Some("professional email"));
        a.context = Some("to a refund request".into());
        let draft = build_draft(&a, &library).unwrap();
        assert_eq!(draft.task, "Write a professional email response");
        assert_eq!(draft.context, "to a refund request");
    }

    #[test]
    fn explicit_empty_flag_clears_template_field() {
        let library = TemplateLibrary::new();
        let mut a = args(Some("Professional Email"));
        a.format = Some(String::new());
        let draft = build_draft(&a, &library).unwrap();
        assert_eq!(draft.format, "");
        assert!(!assemble(&draft).prompt.contains("Format:"));
    }

    #[test]
    fn unknown_template_is_error() {
        let library = TemplateLibrary::new();
        let err = build_draft(&args(Some("missing")), &library).unwrap_err();
        assert_eq!(err, "unknown template: missing");
    }

    #[test]
    fn missing_templates_file_is_error() {
        let err = load_library(Some("/nonexistent/promptcraft/templates.json")).unwrap_err();
        assert!(err.contains("failed to read templates file"));
    }
}
