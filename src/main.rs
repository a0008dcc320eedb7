use clap::{Parser, Subcommand};
use colored::Colorize;
use darkneo_tasks::{Config, FileStore, Priority, SortOrder, Stats, Task, TaskStore, View};
use eyre::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "darkneo")]
#[command(about = "darkNEO - brutalist task list")]
#[command(version)]
struct Cli {
    /// Data directory for the task list (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text
        #[arg(required = true)]
        text: Vec<String>,

        /// Priority: low, medium, high or urgent
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
    },

    /// List tasks
    List {
        /// Which tasks to show: all, active or completed
        #[arg(short, long, default_value = "all")]
        view: View,

        /// Sort order: created-desc, created-asc, priority-desc,
        /// priority-asc or alphabetical
        #[arg(short, long)]
        sort: Option<SortOrder>,
    },

    /// Toggle a task's completed flag
    Done {
        /// Task id (may be a unique prefix)
        id: String,
    },

    /// Replace a task's text
    Edit {
        /// Task id (may be a unique prefix)
        id: String,

        /// Replacement text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Delete a task
    Rm {
        /// Task id (may be a unique prefix)
        id: String,
    },

    /// Remove all completed tasks
    Clear,

    /// Show task counts
    Stats,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let backend = FileStore::open(&config.data_dir)?;
    let mut store = TaskStore::open(Box::new(backend), config.key);

    match cli.command {
        Commands::Add { text, priority } => {
            match store.create_with_priority(&text.join(" "), priority) {
                Some(id) => println!("{} {}", "ADDED".green().bold(), short_id(&id)),
                None => println!("{}", "NOTHING TO ADD (empty text)".yellow()),
            }
        }
        Commands::List { view, sort } => {
            let tasks = match sort {
                Some(order) => store.sorted(view, order),
                None => store.filtered(view),
            };
            print_tasks(&tasks, view);
        }
        Commands::Done { id } => {
            if let Some(id) = resolve_id(&store, &id) {
                store.toggle(&id);
                let label = if store.get(&id).is_some_and(|t| t.completed) {
                    "DONE".green().bold()
                } else {
                    "REOPENED".cyan().bold()
                };
                println!("{} {}", label, short_id(&id));
            }
        }
        Commands::Edit { id, text } => {
            if let Some(id) = resolve_id(&store, &id) {
                if store.edit(&id, &text.join(" ")) {
                    println!("{} {}", "EDITED".green().bold(), short_id(&id));
                } else {
                    println!("{}", "EDIT DISCARDED (empty text)".yellow());
                }
            }
        }
        Commands::Rm { id } => {
            if let Some(id) = resolve_id(&store, &id) {
                store.delete(&id);
                println!("{} {}", "DELETED".red().bold(), short_id(&id));
            }
        }
        Commands::Clear => {
            let removed = store.clear_completed();
            println!("{} {} task(s)", "CLEARED".red().bold(), removed);
        }
        Commands::Stats => print_stats(store.stats()),
    }

    Ok(())
}

/// Resolve a full id or unique prefix against the current list.
///
/// Prints a hint and returns None when the prefix matches nothing or more
/// than one task; the store only ever sees exact ids.
fn resolve_id(store: &TaskStore, prefix: &str) -> Option<String> {
    let matches: Vec<&Task> = store
        .tasks()
        .iter()
        .filter(|t| t.id.starts_with(prefix))
        .collect();

    match matches.len() {
        0 => {
            println!("{} no task matches '{}'", "?".yellow().bold(), prefix);
            None
        }
        1 => Some(matches[0].id.clone()),
        n => {
            println!(
                "{} '{}' is ambiguous ({} matches), use more characters",
                "?".yellow().bold(),
                prefix,
                n
            );
            None
        }
    }
}

fn print_tasks(tasks: &[&Task], view: View) {
    if tasks.is_empty() {
        let message = match view {
            View::All => "NO TASKS YET",
            View::Active => "NO ACTIVE TASKS",
            View::Completed => "NO COMPLETED TASKS",
        };
        println!("{}", message.dimmed());
        return;
    }

    println!(
        "{:<10} {:<5} {:<8} {:<12} {}",
        "ID", "DONE", "PRI", "CREATED", "TEXT"
    );
    for task in tasks {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let text = if task.completed {
            task.text.strikethrough().dimmed()
        } else {
            task.text.normal()
        };
        println!(
            "{:<10} {:<5} {:<8} {:<12} {}",
            short_id(&task.id),
            mark,
            priority_label(task.priority),
            task.created_at.format("%Y-%m-%d"),
            text
        );
    }
}

fn print_stats(stats: Stats) {
    println!("{:>6}  {}", stats.total, "TOTAL".bold());
    println!("{:>6}  {}", stats.active, "ACTIVE".cyan().bold());
    println!("{:>6}  {}", stats.completed, "DONE".green().bold());
}

fn priority_label(priority: Priority) -> String {
    let label = priority.to_string();
    match priority {
        Priority::Urgent => label.red().bold().to_string(),
        Priority::High => label.red().to_string(),
        Priority::Medium => label,
        Priority::Low => label.dimmed().to_string(),
    }
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}
