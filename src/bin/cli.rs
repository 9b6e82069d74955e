//! Linkar CLI
//!
//! Offline tooling for the Linkar wire format: MV string operations and
//! request payload previews. Strings are read and printed in visible
//! notation (`^` AM, `]` VM, `\` SM, `<US>` ...).

use std::path::PathBuf;
use std::process;

use clap::{Args as ClapArgs, Parser, Subcommand};
use linkar::mv::{lk_change, lk_count, lk_dcount, lk_extract, lk_replace};
use linkar::options::{ReadOptions, SelectOptions};
use linkar::protocol::marks::{from_visible, to_visible};
use linkar::protocol::{
    delete_args, execute_args, new_args, read_args, select_args, subroutine_args, update_args,
    version_args,
};
use linkar::{Config, CredentialOptions, LkItem, LkItems};
use tracing_subscriber::{fmt, EnvFilter};

/// Linkar CLI
#[derive(Parser, Debug)]
#[command(name = "linkar-cli")]
#[command(about = "Inspect and compose Linkar multivalue payloads")]
#[command(version)]
struct Args {
    /// JSON config file (custom vars, timeout)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// MV string operations
    #[command(subcommand)]
    Mv(MvCommand),

    /// Print the request payload for an operation
    #[command(subcommand)]
    Args(ArgsCommand),

    /// Print the wire form of a credentials JSON file
    Credentials {
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum MvCommand {
    /// Number of elements separated by a delimiter
    Dcount { text: String, delimiter: String },

    /// Number of delimiter occurrences
    Count { text: String, delimiter: String },

    /// Extract a field, value or subvalue
    Extract {
        record: String,
        field: usize,
        #[arg(default_value_t = 0)]
        value: usize,
        #[arg(default_value_t = 0)]
        subvalue: usize,
    },

    /// Replace a field, value or subvalue
    Replace {
        record: String,
        new_value: String,
        field: usize,
        #[arg(default_value_t = 0)]
        value: usize,
        #[arg(default_value_t = 0)]
        subvalue: usize,
    },

    /// Substring replacement
    Change {
        text: String,
        old: String,
        new: String,
        /// Maximum replacements (0 = all)
        #[arg(long, default_value_t = 0)]
        occurrence: usize,
        /// Character position where matching starts, 0-based
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
}

#[derive(Subcommand, Debug)]
enum ArgsCommand {
    Read {
        filename: String,
        ids: Vec<String>,
        /// Restrict to these dictionaries (space separated)
        #[arg(long, default_value = "")]
        dictionaries: String,
        #[arg(long)]
        calculated: bool,
    },

    Update(RecordsArg),

    New(RecordsArg),

    Delete { filename: String, ids: Vec<String> },

    Select {
        filename: String,
        #[arg(long, default_value = "")]
        select: String,
        #[arg(long, default_value = "")]
        sort: String,
        #[arg(long, default_value = "")]
        dict: String,
        #[arg(long, default_value = "")]
        preselect: String,
        #[arg(long)]
        only_ids: bool,
    },

    Execute { statement: String },

    Subroutine { name: String, arguments: Vec<String> },

    Version,
}

#[derive(ClapArgs, Debug)]
struct RecordsArg {
    filename: String,

    /// `ID=RECORD` pairs, record in visible notation
    #[arg(required = true)]
    items: Vec<String>,
}

impl RecordsArg {
    fn to_items(&self) -> linkar::Result<LkItems> {
        let mut items = LkItems::new();
        for pair in &self.items {
            let (id, record) = pair.split_once('=').ok_or_else(|| {
                linkar::LinkarError::Protocol(format!("Expected ID=RECORD, got '{pair}'"))
            })?;
            items.add(LkItem::with_record(id, from_visible(record)));
        }
        Ok(items)
    }
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,linkar=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> linkar::Result<String> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Mv(command) => Ok(run_mv(command)),
        Command::Args(command) => run_args(command, &config).map(|payload| to_visible(&payload)),
        Command::Credentials { file } => {
            let credentials = CredentialOptions::from_file(file)?;
            Ok(to_visible(&credentials.to_string()))
        }
    }
}

fn run_mv(command: MvCommand) -> String {
    match command {
        MvCommand::Dcount { text, delimiter } => {
            lk_dcount(&from_visible(&text), &from_visible(&delimiter)).to_string()
        }
        MvCommand::Count { text, delimiter } => {
            lk_count(&from_visible(&text), &from_visible(&delimiter)).to_string()
        }
        MvCommand::Extract {
            record,
            field,
            value,
            subvalue,
        } => to_visible(lk_extract(&from_visible(&record), field, value, subvalue)),
        MvCommand::Replace {
            record,
            new_value,
            field,
            value,
            subvalue,
        } => to_visible(&lk_replace(
            &from_visible(&record),
            &from_visible(&new_value),
            field,
            value,
            subvalue,
        )),
        MvCommand::Change {
            text,
            old,
            new,
            occurrence,
            start,
        } => to_visible(&lk_change(
            &from_visible(&text),
            &from_visible(&old),
            &from_visible(&new),
            occurrence,
            start,
        )),
    }
}

fn run_args(command: ArgsCommand, config: &Config) -> linkar::Result<String> {
    let cv = config.custom_vars.as_str();
    let payload = match command {
        ArgsCommand::Read {
            filename,
            ids,
            dictionaries,
            calculated,
        } => {
            let mut items = LkItems::new();
            items.add_ids(ids);
            let options = ReadOptions::new().calculated(calculated);
            read_args(
                &filename,
                &items.compose_read_buffer(),
                &dictionaries,
                Some(&options),
                cv,
            )
        }
        ArgsCommand::Update(records) => {
            let items = records.to_items()?;
            update_args(
                &records.filename,
                &items.compose_update_buffer(false),
                None,
                cv,
            )
        }
        ArgsCommand::New(records) => {
            let items = records.to_items()?;
            new_args(&records.filename, &items.compose_new_buffer(), None, cv)
        }
        ArgsCommand::Delete { filename, ids } => {
            let mut items = LkItems::new();
            items.add_ids(ids);
            delete_args(&filename, &items.compose_delete_buffer(false), None, cv)
        }
        ArgsCommand::Select {
            filename,
            select,
            sort,
            dict,
            preselect,
            only_ids,
        } => {
            let options = SelectOptions::new().only_record_id(only_ids);
            select_args(
                &filename,
                &select,
                &sort,
                &dict,
                &preselect,
                Some(&options),
                cv,
            )
        }
        ArgsCommand::Execute { statement } => execute_args(&statement, cv),
        ArgsCommand::Subroutine { name, arguments } => {
            subroutine_args(&name, arguments.len(), &arguments, cv)
        }
        ArgsCommand::Version => version_args(),
    };
    Ok(payload)
}
