use dairy_ledger::{AppConfig, Branch, Category, LedgerStore, NewRecord, RecordPatch,
    summary::{format_currency, BranchSummary, Summary}};

use std::path::PathBuf;
use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to dairy-ledger.toml when present)
    #[clap(long, value_parser)]
    config: Option<PathBuf>,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Summaries of every branch and the federation total
    Overview,
    /// List a branch's records, newest first
    List(ListRecords),
    /// Show one branch's summary
    Summary(ShowSummary),
    /// Add a new record
    Add(AddRecord),
    /// Edit an existing record
    Edit(EditRecord),
    /// Delete a record
    Delete(DeleteRecord)
}

fn paint(amount: f64) -> colored::ColoredString {
    let text = format_currency(amount);
    if amount < 0.0 {
        text.bright_red()
    } else if amount > 0.0 {
        text.green()
    } else {
        text.normal()
    }
}

fn print_summary(title: &str, summary: &Summary) {
    println!("{}", title.bold());
    println!("  income:   {}", format_currency(summary.total_income));
    println!("  expenses: {}", format_currency(summary.total_expenses));
    let label = if summary.is_loss() { "loss" } else { "profit" };
    println!("  {}:{} {}", label, " ".repeat(8 - label.len()), paint(summary.profit_loss));
    println!("  records:  {}", summary.record_count);
}

fn fail_on_error(store: &LedgerStore) -> anyhow::Result<()> {
    match store.last_error() {
        Some(err) => Err(anyhow!("{} ({})", err, store.branch().display_name())),
        None => Ok(())
    }
}

#[derive(Args, Debug)]
struct ListRecords {
    #[clap(value_parser)]
    branch: Branch
}

impl ListRecords {
    fn run(&self, store: &LedgerStore) {
        if store.records().is_empty() {
            println!("No records yet for {}", self.branch.display_name());
            return;
        }
        for record in store.records() {
            println!("{}  {}", record.id.dimmed(), record);
        }
    }
}

#[derive(Args, Debug)]
struct ShowSummary {
    #[clap(value_parser)]
    branch: Branch,

    /// Print as JSON
    #[clap(long)]
    json: bool
}

impl ShowSummary {
    fn run(&self, store: &LedgerStore) -> anyhow::Result<()> {
        let summary = BranchSummary::new(self.branch, store.summarize());
        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(summary.name, &summary.summary);
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
struct AddRecord {
    #[clap(value_parser)]
    branch: Branch,

    /// Transaction date, YYYY-MM-DD (defaults to today)
    #[clap(long, value_parser)]
    date: Option<NaiveDate>,

    #[clap(short, long, value_parser)]
    description: String,

    #[clap(short, long, value_parser, default_value_t = Category::MilkSales)]
    category: Category,

    #[clap(short, long, value_parser, default_value_t = 0.0)]
    income: f64,

    #[clap(short, long, value_parser, default_value_t = 0.0)]
    expense: f64,

    #[clap(short, long, value_parser)]
    note: Option<String>
}

impl AddRecord {
    fn run(&self, store: &mut LedgerStore) -> anyhow::Result<()> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let new = NewRecord::validated(date, &self.description, self.category,
            self.income, self.expense, self.note.as_deref())?;

        if !store.create(new) {
            return fail_on_error(store);
        }
        println!("Record added successfully");
        Ok(())
    }
}

#[derive(Args, Debug)]
struct EditRecord {
    #[clap(value_parser)]
    branch: Branch,

    #[clap(value_parser)]
    id: String,

    #[clap(long, value_parser)]
    date: Option<NaiveDate>,

    #[clap(short, long, value_parser)]
    description: Option<String>,

    #[clap(short, long, value_parser)]
    category: Option<Category>,

    #[clap(short, long, value_parser)]
    income: Option<f64>,

    #[clap(short, long, value_parser)]
    expense: Option<f64>,

    #[clap(short, long, value_parser, conflicts_with = "clear_note")]
    note: Option<String>,

    /// Remove the record's note
    #[clap(long)]
    clear_note: bool
}

impl EditRecord {
    fn run(&self, store: &mut LedgerStore) -> anyhow::Result<()> {
        let current = store.get(&self.id)
            .with_context(|| format!("no record {} in {}", self.id, self.branch.display_name()))?;

        let note = if self.clear_note {
            Some(None)
        } else {
            self.note.clone().map(Some)
        };
        let edit = RecordPatch {
            date: self.date,
            description: self.description.clone(),
            category: self.category,
            income: self.income,
            expense: self.expense,
            balance: None,
            note
        };
        let patch = edit.revalidated(current)?;

        if !store.update(&self.id, patch) {
            return fail_on_error(store);
        }
        println!("Record updated successfully");
        Ok(())
    }
}

#[derive(Args, Debug)]
struct DeleteRecord {
    #[clap(value_parser)]
    branch: Branch,

    #[clap(value_parser)]
    id: String
}

impl DeleteRecord {
    fn run(&self, store: &mut LedgerStore) -> anyhow::Result<()> {
        if store.get(&self.id).is_none() {
            println!("No record {} in {}, nothing to delete", self.id, self.branch.display_name());
            return Ok(());
        }
        if !store.delete(&self.id) {
            return fail_on_error(store);
        }
        println!("Record deleted successfully");
        Ok(())
    }
}

fn overview(config: &AppConfig) -> anyhow::Result<()> {
    let backend = config.open_backend();
    let mut total = Summary::default();

    for branch in Branch::ALL {
        let store = LedgerStore::new(backend.clone(), branch);
        fail_on_error(&store)?;

        let summary = BranchSummary::new(branch, store.summarize());
        print_summary(summary.name, &summary.summary);
        total = total.combine(&summary.summary);
    }

    print_summary("All branches", &total);
    Ok(())
}

fn branch_of(action: &Subcommands) -> Option<Branch> {
    match action {
        Subcommands::Overview => None,
        Subcommands::List(cmd) => Some(cmd.branch),
        Subcommands::Summary(cmd) => Some(cmd.branch),
        Subcommands::Add(cmd) => Some(cmd.branch),
        Subcommands::Edit(cmd) => Some(cmd.branch),
        Subcommands::Delete(cmd) => Some(cmd.branch)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    let branch = match branch_of(&args.action) {
        Some(branch) => branch,
        None => return overview(&config)
    };

    let mut store = LedgerStore::new(config.open_backend(), branch);
    fail_on_error(&store)?;

    match &args.action {
        Subcommands::Overview => bail!("overview does not operate on a single branch"),
        Subcommands::List(cmd) => cmd.run(&store),
        Subcommands::Summary(cmd) => cmd.run(&store)?,
        Subcommands::Add(cmd) => cmd.run(&mut store)?,
        Subcommands::Edit(cmd) => cmd.run(&mut store)?,
        Subcommands::Delete(cmd) => cmd.run(&mut store)?
    }
    Ok(())
}
