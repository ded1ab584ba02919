//! gridcalc CLI - formula evaluation and cell scripts

mod script;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridcalc::prelude::*;
use gridcalc::format_number;
use script::Statement;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(author, version, about = "Formula evaluation and spreadsheet scripting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an arithmetic expression
    Eval {
        /// Expression, e.g. "A1*(B2+3)"; a leading '=' is accepted
        expression: String,

        /// Bind a variable (repeatable)
        #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
        vars: Vec<(String, f64)>,
    },

    /// Run a cell script against a fresh sheet and print the non-empty cells
    Run {
        /// Script file
        script: PathBuf,

        /// Number of rows (default: 50)
        #[arg(short, long)]
        rows: Option<u32>,

        /// Number of columns (default: 26)
        #[arg(short, long)]
        columns: Option<u16>,

        /// Maximum number of undo steps to keep
        #[arg(long)]
        history_limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { expression, vars } => eval(&expression, &vars),
        Commands::Run {
            script,
            rows,
            columns,
            history_limit,
        } => {
            let defaults = SheetOptions::default();
            let options = SheetOptions {
                rows: rows.unwrap_or(defaults.rows),
                columns: columns.unwrap_or(defaults.columns),
                history_limit,
            };
            run(&script, options)
        }
    }
}

fn parse_binding(s: &str) -> std::result::Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn eval(expression: &str, vars: &[(String, f64)]) -> Result<()> {
    let body: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let body = body.strip_prefix('=').unwrap_or(&body);

    let mut tree = ExpressionTree::parse(body)
        .with_context(|| format!("Failed to parse '{}'", expression))?;
    for (name, value) in vars {
        tree.set_variable(name, *value)
            .with_context(|| format!("Failed to bind '{}'", name))?;
    }

    let result = tree.evaluate().context("Failed to evaluate expression")?;
    println!("{}", format_number(result));
    Ok(())
}

fn run(path: &Path, options: SheetOptions) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let mut sheet = Spreadsheet::with_options(options);

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let statement = script::parse_line(line)
            .with_context(|| format!("{}:{}: invalid statement", path.display(), line_no))?;
        let Some(statement) = statement else {
            continue;
        };

        let outcome = match statement {
            Statement::Set { address, text } => sheet.edit_cell_text(address.row, address.col, text),
            Statement::Color { color, cells } => sheet.edit_cell_color(&cells, color),
            Statement::Undo => sheet.undo().map(|_| ()),
            Statement::Redo => sheet.redo().map(|_| ()),
        };

        match outcome {
            Ok(()) => {}
            // The cell keeps its text and shows REF ERROR
            Err(err) if err.is_committed() => {
                eprintln!("Warning: {}:{}: {}", path.display(), line_no, err);
            }
            Err(err) => bail!("{}:{}: {}", path.display(), line_no, err),
        }
    }

    let mut stdout = io::stdout().lock();
    for cell in sheet.cells() {
        writeln!(
            stdout,
            "{}\t{}\t{}",
            cell.name(),
            cell.text(),
            cell.value().unwrap_or_default()
        )
        .context("Failed to write to stdout")?;
    }

    Ok(())
}
