//! `sitegen draft set|unset|show|clear` — saved form state.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use sitegen_core::{draft, SiteDraft, SiteKind};

use super::site::home_dir;

/// Manage the saved draft.
#[derive(Subcommand, Debug)]
pub enum DraftCommand {
    /// Set one field (and optionally the page kind).
    Set(SetArgs),

    /// Remove one field.
    Unset {
        /// Field name.
        field: String,
    },

    /// Show the saved draft.
    Show {
        /// Emit machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete the saved draft.
    Clear,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Field name (e.g. name, description, color, title, bio, themeColor).
    pub field: String,

    /// Field value. Empty is allowed.
    pub value: String,

    /// Also switch the draft's page kind.
    #[arg(long, short = 'k', value_name = "KIND")]
    pub kind: Option<SiteKind>,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "field")]
    field: String,
    #[tabled(rename = "value")]
    value: String,
    #[tabled(rename = "used as")]
    role: String,
}

pub fn run(cmd: DraftCommand) -> Result<()> {
    let home = home_dir()?;
    match cmd {
        DraftCommand::Set(args) => {
            let mut d = load_or_default(&home)?;
            if let Some(kind) = args.kind {
                d.kind = kind;
            }
            d.set_field(&args.field, args.value);
            draft::save_at(&home, &d).context("failed to save draft")?;
            println!("✓ Set '{}' on {} draft", args.field, d.kind);
        }
        DraftCommand::Unset { field } => {
            let mut d = load_or_default(&home)?;
            if d.remove_field(&field).is_none() {
                println!("Field '{field}' was not set.");
                return Ok(());
            }
            draft::save_at(&home, &d).context("failed to save draft")?;
            println!("✓ Removed '{field}'");
        }
        DraftCommand::Show { json } => {
            let Some(d) = draft::load_at(&home).context("failed to read saved draft")? else {
                println!("No saved draft.");
                println!("Run: sitegen draft set <field> <value>");
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&d)?);
            } else {
                print_table(&d);
            }
        }
        DraftCommand::Clear => {
            if draft::clear_at(&home).context("failed to delete draft")? {
                println!("✓ Draft cleared");
            } else {
                println!("No saved draft.");
            }
        }
    }
    Ok(())
}

fn load_or_default(home: &std::path::Path) -> Result<SiteDraft> {
    Ok(draft::load_at(home)
        .context("failed to read saved draft")?
        .unwrap_or_default())
}

fn role_of(kind: SiteKind, field: &str) -> &'static str {
    if field == kind.title_field() {
        "title"
    } else if field == kind.body_field() {
        "body"
    } else if field == kind.color_field() {
        "background"
    } else {
        "extra section"
    }
}

fn print_table(d: &SiteDraft) {
    println!(
        "{} draft (updated {})",
        d.kind.to_string().bold(),
        d.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if d.fields.is_empty() {
        println!("  (no fields set)");
        return;
    }
    let rows: Vec<FieldRow> = d
        .fields
        .iter()
        .map(|(field, value)| FieldRow {
            field: field.to_string(),
            value: value.to_string(),
            role: role_of(d.kind, field).to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
