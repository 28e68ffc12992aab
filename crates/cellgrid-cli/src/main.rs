//! cellgrid CLI - interactive grid calculator shell

use anyhow::{bail, Context, Result};
use cellgrid::format_number;
use cellgrid::prelude::*;
use clap::Parser;
use regex::Regex;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(author, version, about = "Interactive grid calculator")]
struct Cli {
    /// Number of rows in the grid
    #[arg(long, default_value_t = 10)]
    rows: u32,

    /// Number of columns in the grid (A, B, C, ...)
    #[arg(long, default_value_t = 7)]
    cols: u16,
}

/// One parsed shell command
enum Command {
    Set { cell: CellRef, text: String },
    Get { cell: CellRef },
    Clear { cell: CellRef },
    Reset,
    Show,
    Help,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut model = GridModel::new(cli.rows, cli.cols)
        .with_context(|| format!("cannot create a {} x {} grid", cli.rows, cli.cols))?;
    model.set_display_callback(Box::new(|cell, text| {
        if text.is_empty() {
            println!("  {} cleared", cell);
        } else {
            println!("  {} = {}", cell, text);
        }
    }));

    println!(
        "cellgrid: {} rows x {} columns. Type 'help' for commands.",
        cli.rows, cli.cols
    );
    run(&mut model)
}

fn run(model: &mut GridModel) -> Result<()> {
    // "set" keeps the rest of the line verbatim, so it gets its own pattern
    let set_pattern = Regex::new(r"^set\s+(\S+)(?:\s(.*))?$")?;

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush().context("cannot flush stdout")?;

        input.clear();
        if io::stdin()
            .read_line(&mut input)
            .context("cannot read input")?
            == 0
        {
            println!();
            break;
        }

        let line = normalize_line(&input);
        if line.is_empty() {
            continue;
        }

        match parse_command(line, &set_pattern).and_then(|command| execute(model, command)) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => eprintln!("error: {:#}", err),
        }
    }

    Ok(())
}

/// Strip the line ending and leading whitespace, keeping trailing text
/// intact so `set` payloads survive verbatim
fn normalize_line(input: &str) -> &str {
    input.trim_end_matches(&['\n', '\r'][..]).trim_start()
}

fn parse_command(line: &str, set_pattern: &Regex) -> Result<Command> {
    if let Some(caps) = set_pattern.captures(line) {
        let cell: CellRef = caps[1].parse()?;
        let text = caps.get(2).map_or("", |m| m.as_str()).to_string();
        return Ok(Command::Set { cell, text });
    }

    let mut words = line.split_whitespace();
    match words.next().unwrap_or("") {
        "set" => bail!("usage: set <cell> <text>"),
        "get" => Ok(Command::Get {
            cell: cell_argument(words.next())?,
        }),
        "clear" => Ok(Command::Clear {
            cell: cell_argument(words.next())?,
        }),
        "reset" => Ok(Command::Reset),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => bail!("unknown command '{}' (try 'help')", other),
    }
}

fn cell_argument(word: Option<&str>) -> Result<CellRef> {
    let word = word.context("missing cell reference")?;
    Ok(word.parse()?)
}

fn execute(model: &mut GridModel, command: Command) -> Result<bool> {
    match command {
        Command::Set { cell, text } => model.set_cell(cell.row, cell.col, &text)?,
        Command::Get { cell } => describe_cell(model, cell)?,
        Command::Clear { cell } => model.clear_cell(cell.row, cell.col)?,
        Command::Reset => model.clear_all(),
        Command::Show => render_grid(model),
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn describe_cell(model: &GridModel, cell: CellRef) -> Result<()> {
    let kind = model.kind(cell.row, cell.col)?;
    let text = model.text(cell.row, cell.col)?;

    match kind {
        CellKind::Empty => println!("{} is empty", cell),
        CellKind::Text => println!("{}: text {:?}", cell, text),
        CellKind::Number => {
            let value = model.value(cell.row, cell.col)?;
            println!(
                "{}: number {:?} (value {})",
                cell,
                text,
                format_number(value)
            );
        }
        CellKind::Formula(state) => {
            let source = model
                .grid()
                .cell(cell.row, cell.col)
                .and_then(Cell::formula_source)
                .unwrap_or_default();
            let value = format_number(model.value(cell.row, cell.col)?);
            match state {
                FormulaState::Evaluated => {
                    println!("{}: formula {:?} = {}", cell, source, value)
                }
                FormulaState::Invalid => println!(
                    "{}: formula {:?} failed to evaluate (stale value {})",
                    cell, source, value
                ),
            }
        }
    }

    Ok(())
}

fn render_grid(model: &GridModel) {
    const COLUMN_WIDTH: usize = 10;

    let mut header = String::from("    ");
    for col in 0..model.cols() {
        header.push_str(&format!(
            " {:<COLUMN_WIDTH$}",
            CellRef::column_to_letters(col)
        ));
    }
    println!("{}", header.trim_end());

    for row in 0..model.rows() {
        let mut line = format!("{:>4}", row + 1);
        for col in 0..model.cols() {
            let text = model.text(row, col).unwrap_or_default();
            line.push_str(&format!(" {:<COLUMN_WIDTH$}", clip(&text, COLUMN_WIDTH)));
        }
        println!("{}", line.trim_end());
    }

    let total = model.rows() as usize * model.cols() as usize;
    println!("{} of {} cells occupied", model.grid().occupied(), total);
}

/// Cut text down to the column width for the grid view
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        text.chars().take(width).collect()
    }
}

fn print_help() {
    println!("commands:");
    println!("  set <cell> <text>   store text, a number, or a formula like =A1+2");
    println!("  get <cell>          describe one cell");
    println!("  clear <cell>        empty one cell");
    println!("  reset               empty the whole grid");
    println!("  show                render the grid");
    println!("  help                show this message");
    println!("  quit                leave the shell");
}
