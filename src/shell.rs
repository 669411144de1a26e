//! Purpose: Menu-driven interactive loop over the record store.
//! Exports: `run`, `run_with`.
//! Role: Console front-end; prompts for selections, delegates to the store, renders results.
//! Invariants: Invalid selections re-prompt locally and never abort the loop.
//! Invariants: EOF or `x` at the action menu exits cleanly; at a submenu it returns to the action menu.

use std::io::{self, BufRead, Write};

use jobsift::store::{Error, ErrorKind, JobStore};

use crate::render;

const ACTION_HEADER: &str = "View jobs by (type 'x' to quit):";

enum ColumnChoice {
    Field(String),
    All,
}

pub(crate) fn run(store: &JobStore, use_color: bool) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_with(store, &mut input, &mut out, use_color)
}

pub(crate) fn run_with<R: BufRead, W: Write>(
    store: &JobStore,
    input: &mut R,
    out: &mut W,
    use_color: bool,
) -> Result<(), Error> {
    let actions = ["Search".to_string(), "List".to_string()];

    put_line(out, "Welcome to jobsift!")?;
    loop {
        let Some(action) = prompt_selection(input, out, ACTION_HEADER, &actions)? else {
            return Ok(());
        };
        match action {
            0 => run_search(store, input, out, use_color)?,
            _ => run_list(store, input, out, use_color)?,
        }
    }
}

fn run_list<R: BufRead, W: Write>(
    store: &JobStore,
    input: &mut R,
    out: &mut W,
    use_color: bool,
) -> Result<(), Error> {
    let Some(choice) = prompt_column(store, input, out, "List")? else {
        return Ok(());
    };
    put_line(out, "")?;
    match choice {
        ColumnChoice::All => {
            let records: Vec<_> = store.records().iter().collect();
            put_line(out, &render::record_blocks(store.fields(), &records, use_color))
        }
        ColumnChoice::Field(field) => {
            let values = store.unique_values(&field);
            put_line(out, &render::value_list(&field, &values, use_color))
        }
    }
}

fn run_search<R: BufRead, W: Write>(
    store: &JobStore,
    input: &mut R,
    out: &mut W,
    use_color: bool,
) -> Result<(), Error> {
    let Some(choice) = prompt_column(store, input, out, "Search by:")? else {
        return Ok(());
    };
    put_line(out, "")?;
    put_line(out, "Search term:")?;
    flush(out)?;
    let Some(term) = read_line(input)? else {
        return Ok(());
    };

    let matches = match &choice {
        ColumnChoice::All => store.search_any(&term),
        ColumnChoice::Field(field) => store.search_field(field, &term),
    };
    put_line(out, "")?;
    put_line(out, &render::record_blocks(store.fields(), &matches, use_color))
}

fn prompt_column<R: BufRead, W: Write>(
    store: &JobStore,
    input: &mut R,
    out: &mut W,
    header: &str,
) -> Result<Option<ColumnChoice>, Error> {
    let mut choices: Vec<String> = store.fields().to_vec();
    choices.push("all".to_string());
    let Some(idx) = prompt_selection(input, out, header, &choices)? else {
        return Ok(None);
    };
    if idx == choices.len() - 1 {
        Ok(Some(ColumnChoice::All))
    } else {
        Ok(Some(ColumnChoice::Field(choices[idx].clone())))
    }
}

fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    header: &str,
    choices: &[String],
) -> Result<Option<usize>, Error> {
    loop {
        put_line(out, "")?;
        put_line(out, header)?;
        for (idx, choice) in choices.iter().enumerate() {
            put_line(out, &format!("{idx} - {choice}"))?;
        }
        flush(out)?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let line = line.trim();
        if line == "x" {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(idx) if idx < choices.len() => return Ok(Some(idx)),
            _ => put_line(out, "Invalid choice. Try again.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read line from stdin")
            .with_source(err)
    })?;
    if n == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn put_line<W: Write>(out: &mut W, text: &str) -> Result<(), Error> {
    writeln!(out, "{text}").map_err(write_error)
}

fn flush<W: Write>(out: &mut W) -> Result<(), Error> {
    out.flush().map_err(write_error)
}

fn write_error(err: io::Error) -> Error {
    Error::new(ErrorKind::Io)
        .with_message("failed to write output")
        .with_source(err)
}
