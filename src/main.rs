use annogen::{config, output, plan, scan, write};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "annogen")]
#[command(about = "Annotation scaffolding generator for markdown knowledge vaults")]
#[command(long_about = "\
Annotation scaffolding generator for markdown knowledge vaults

Your vault's filesystem is the data source. Top-level folders are classes,
their subfolders are topics, and the sources folder (default: pdf/) holds
the articles you read.

Vault structure:

  vault/
  ├── annogen.toml                 # Config (optional)
  ├── pdf/                         # Source articles
  │   ├── Smith2020.pdf            # Filename carries the year
  │   └── Jones2019.pdf
  ├── Biology/                     # Class folder
  │   └── Gene_Editing/            # Topic folder (generated)
  │       ├── Gene_Editing.canvas
  │       ├── Gene_Editing_Reaction_Paper.md
  │       ├── Gene_Editing_Notes.md
  │       └── Smith2020_Annotated.md
  └── .obsidian/                   # Hidden - ignored

'annogen topic' scaffolds a new topic folder; 'annogen paper' adds
annotations to an existing one. Existing files are never overwritten.

Run 'annogen gen-config' to generate a documented annogen.toml.")]
#[command(version)]
struct Cli {
    /// Vault root directory
    #[arg(long, default_value = ".", global = true)]
    vault: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Shared flags for the two scaffolding commands.
#[derive(clap::Args, Clone)]
struct PlanArgs {
    /// Print the plan without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the plan as JSON (implies --dry-run)
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List class folders under the vault root
    Classes,
    /// List topic folders under a class
    Topics {
        /// Class folder to list
        class: String,
    },
    /// List source articles
    Articles,
    /// Scaffold a new topic folder (canvas, reaction paper, notes, annotations)
    Topic {
        /// Topic display name (whitespace becomes underscores)
        #[arg(long)]
        name: String,
        /// Class folder the topic lives under
        #[arg(long)]
        class: String,
        /// Selected source articles (filenames under the sources folder)
        articles: Vec<String>,
        #[command(flatten)]
        plan_args: PlanArgs,
    },
    /// Add annotated papers to an existing topic folder
    Paper {
        /// Existing topic folder (bare name or class-relative path)
        #[arg(long)]
        topic: String,
        /// Class folder the topic lives under
        #[arg(long)]
        class: String,
        /// Selected source articles (filenames under the sources folder)
        articles: Vec<String>,
        #[command(flatten)]
        plan_args: PlanArgs,
    },
    /// Print a stock annogen.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Classes => {
            let config = config::load_config(&cli.vault)?;
            let classes = scan::class_folders(&cli.vault, &config)?;
            output::print_listing(&classes);
        }
        Command::Topics { class } => {
            let topics = scan::topic_folders(&cli.vault, &class)?;
            output::print_listing(&topics);
        }
        Command::Articles => {
            let config = config::load_config(&cli.vault)?;
            let articles = scan::articles(&cli.vault, &config)?;
            output::print_listing(&articles);
        }
        Command::Topic {
            name,
            class,
            articles,
            plan_args,
        } => {
            let config = config::load_config(&cli.vault)?;
            scan::ensure_class(&cli.vault, &config, &class)?;
            scan::ensure_articles(&cli.vault, &config, &articles)?;

            let request = plan::TopicRequest {
                topic: name,
                class,
                articles,
            };
            let plan = plan::topic_plan(&request, &config)?;
            run_plan(&cli.vault, &plan, &plan_args)?;
        }
        Command::Paper {
            topic,
            class,
            articles,
            plan_args,
        } => {
            let config = config::load_config(&cli.vault)?;
            scan::ensure_class(&cli.vault, &config, &class)?;
            scan::ensure_topic(&cli.vault, &class, plan::topic_folder_name(&topic))?;
            scan::ensure_articles(&cli.vault, &config, &articles)?;

            let request = plan::PaperRequest {
                topic_folder: topic,
                class,
                articles,
            };
            let plan = plan::paper_plan(&request, &config)?;
            run_plan(&cli.vault, &plan, &plan_args)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Shared tail of the two scaffolding commands: show or materialize the plan.
fn run_plan(
    vault: &std::path::Path,
    plan: &plan::Plan,
    args: &PlanArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else if args.dry_run {
        output::print_plan(plan);
    } else {
        let reports = write::materialize(vault, plan)?;
        output::print_write_reports(&reports);
    }
    Ok(())
}
