//! Roster CLI - an interactive terminal form over the student table

use std::path::PathBuf;

use clap::Parser;
use console::Term;
use roster::{FormController, FormError, SqliteStore, config, ui};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Student roster manager - add, update and delete student records")]
#[command(long_about = r#"
Roster keeps a small table of students (name, age, grade) in a local SQLite
file and edits it through an interactive form session:

  add           prompt for name/age/grade and insert a row
  select <id>   mirror a row into the input fields
  update        rewrite the selected row with edited values
  delete        remove the selected row
  list          reload the table from the database
  quit          leave the session
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to the database file (overrides roster.toml)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Path to a roster.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let database = cli
        .database
        .or_else(|| {
            config
                .as_ref()
                .and_then(|c| c.database.clone())
                .map(PathBuf::from)
        })
        .unwrap_or_else(config::default_database_path);

    config::ensure_db_dir(&database)?;
    let store = SqliteStore::open(&database)?;
    tracing::debug!("database ready at {}", store.path().display());

    let mut controller = FormController::new(store);
    controller.refresh()?;

    run_form(&mut controller)
}

/// The event loop: render the table, read one command, fire the matching
/// controller transition. Every error is reported and the session keeps
/// going, the way a dialog box leaves a desktop form usable.
fn run_form(controller: &mut FormController<SqliteStore>) -> anyhow::Result<()> {
    let term = Term::stdout();

    ui::header("Student Management");
    println!(
        "{}",
        ui::dim("commands: add, select <id>, update, delete, list, quit (empty line quits)")
    );

    loop {
        println!();
        println!("{}", ui::roster_table(controller.rows()));
        if let Some(id) = controller.selection() {
            ui::info("Selected", &id.to_string());
        }

        term.write_str("> ")?;
        let line = term.read_line()?.trim().to_string();
        if line.is_empty() {
            break;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        match command {
            "add" | "a" => do_add(&term, controller)?,
            "select" | "s" => match parts.next().and_then(|s| s.parse::<i64>().ok()) {
                Some(id) => {
                    if let Err(e) = controller.select_row(id) {
                        ui::error(&e.to_string());
                    }
                }
                None => ui::error("usage: select <id>"),
            },
            "update" | "u" => do_update(&term, controller)?,
            "delete" | "d" => report(controller.delete().map(|()| "student deleted")),
            "list" | "l" => report(controller.refresh().map(|()| "table reloaded")),
            "quit" | "q" | "exit" => break,
            other => ui::error(&format!("unknown command: {other} (try: add, select, update, delete, list, quit)")),
        }
    }

    Ok(())
}

fn do_add(term: &Term, controller: &mut FormController<SqliteStore>) -> anyhow::Result<()> {
    let name = prompt(term, "Name")?;
    let age = prompt(term, "Age")?;
    let grade = prompt(term, "Grade")?;

    let fields = controller.fields_mut();
    fields.name = name;
    fields.age = age;
    fields.grade = grade;

    report(controller.add().map(|()| "student added"));
    Ok(())
}

fn do_update(term: &Term, controller: &mut FormController<SqliteStore>) -> anyhow::Result<()> {
    if controller.selection().is_none() {
        // Let the controller produce the selection error
        report(controller.update().map(|()| ""));
        return Ok(());
    }

    // The fields hold the selected row's values; empty input keeps them.
    let current = controller.fields().clone();
    let name = prompt_with_default(term, "Name", &current.name)?;
    let age = prompt_with_default(term, "Age", &current.age)?;
    let grade = prompt_with_default(term, "Grade", &current.grade)?;

    let fields = controller.fields_mut();
    fields.name = name;
    fields.age = age;
    fields.grade = grade;

    report(controller.update().map(|()| "student updated"));
    Ok(())
}

fn prompt(term: &Term, label: &str) -> anyhow::Result<String> {
    term.write_str(&format!("{label}: "))?;
    Ok(term.read_line()?.trim().to_string())
}

fn prompt_with_default(term: &Term, label: &str, current: &str) -> anyhow::Result<String> {
    term.write_str(&format!("{label} [{current}]: "))?;
    let line = term.read_line()?.trim().to_string();
    Ok(if line.is_empty() {
        current.to_string()
    } else {
        line
    })
}

fn report(result: Result<&str, FormError>) {
    match result {
        Ok(msg) if !msg.is_empty() => ui::success(msg),
        Ok(_) => {}
        Err(e) => ui::error(&e.to_string()),
    }
}
