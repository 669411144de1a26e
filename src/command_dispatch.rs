//! Purpose: Hold top-level CLI command dispatch for `jobsift`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Output envelopes and exit code semantics stay stable.
//! Invariants: Every command reaches the dataset through `JobStore`.

use super::*;

pub(super) fn dispatch_command(
    command: Command,
    data_path: PathBuf,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "jobsift", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output();
            Ok(RunOutcome::ok())
        }
        Command::Browse => {
            let store = JobStore::new(data_path);
            let use_color = color_mode.use_color(io::stdout().is_terminal());
            shell::run(&store, use_color)?;
            Ok(RunOutcome::ok())
        }
        Command::Fields { json } => {
            let store = open_store(data_path)?;
            if json {
                emit_json(json!({ "fields": store.fields() }));
            } else {
                for field in store.fields() {
                    println!("{field}");
                }
            }
            Ok(RunOutcome::ok())
        }
        Command::List { field, json } => {
            let store = open_store(data_path)?;
            let use_color = color_mode.use_color(io::stdout().is_terminal());
            if field == "all" {
                let records: Vec<_> = store.records().iter().collect();
                if json {
                    emit_json(json!({ "count": records.len(), "records": records }));
                } else {
                    println!("{}", render::record_blocks(store.fields(), &records, use_color));
                }
            } else {
                let values = store.unique_values(&field);
                if json {
                    emit_json(json!({ "field": field, "values": values }));
                } else {
                    println!("{}", render::value_list(&field, &values, use_color));
                }
            }
            Ok(RunOutcome::ok())
        }
        Command::Search { term, field, json } => {
            let store = open_store(data_path)?;
            let use_color = color_mode.use_color(io::stdout().is_terminal());
            let matches = match field.as_deref() {
                None | Some("all") => store.search_any(&term),
                Some(field) => store.search_field(field, &term),
            };
            if json {
                emit_json(json!({ "term": term, "count": matches.len(), "matches": matches }));
            } else {
                println!("{}", render::record_blocks(store.fields(), &matches, use_color));
            }
            Ok(RunOutcome::ok())
        }
    }
}

/// Build the store for a one-shot command, surfacing a failed load as the
/// process error instead of a silently empty result.
fn open_store(data_path: PathBuf) -> Result<JobStore, Error> {
    let store = JobStore::new(data_path);
    if let Some(failure) = store.load_failure() {
        let mut err = Error::new(failure.kind()).with_path(store.path());
        if let Some(message) = failure.message() {
            err = err.with_message(message);
        }
        if let Some(row) = failure.row() {
            err = err.with_row(row);
        }
        return Err(err.with_hint("Check the data file, or pass --data with a readable CSV."));
    }
    Ok(store)
}
