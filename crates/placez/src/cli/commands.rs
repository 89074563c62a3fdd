//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Validates raw user input before it reaches the API
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::print::{
    list_title, print_full_places, print_messages, print_place_list, print_session,
    print_statistics,
};
use super::setup::{AddArgs, Cli, Commands, EditArgs, ListArgs, OutputFormat};
use clap::Parser;
use placezapp::api::{CmdResult, PlacezApi};
use placezapp::error::{PlacezError, Result};
use placezapp::init::initialize;
use placezapp::model::PlaceInput;
use placezapp::query::{SortKey, ViewParams};
use placezapp::store::fs_backend::FsBackend;
use placezapp::validation::{validate_login, validate_place, FieldError};
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: PlacezApi<FsBackend>,
    default_sort: SortKey,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;
    debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Some(Commands::Login { username, password }) => handle_login(&ctx, username, password),
        Some(Commands::Logout) => handle_logout(&ctx),
        Some(Commands::Whoami) => handle_whoami(&ctx),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Add(args)) => handle_add(&mut ctx, args),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        None => handle_list(&ctx, ListArgs::default()),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(None)?;
    debug!(data_dir = %ctx.data_dir.display(), "using data directory");
    Ok(AppContext {
        api: ctx.api,
        default_sort: ctx.config.default_sort(),
        output: cli.output,
    })
}

/// Prints a result either as JSON or through the given text renderer.
fn emit(ctx: &AppContext, result: &CmdResult, text: impl FnOnce(&CmdResult)) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => text(result),
    }
    Ok(())
}

fn field_errors(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let joined: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    Err(PlacezError::Invalid(joined.join("; ")))
}

fn read_password() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn handle_login(ctx: &AppContext, username: String, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password()?,
    };
    field_errors(validate_login(&username, &password))?;

    let result = ctx.api.login(username.trim(), &password)?;
    emit(ctx, &result, |r| print_messages(&r.messages))
}

fn handle_logout(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    emit(ctx, &result, |r| print_messages(&r.messages))
}

fn handle_whoami(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    emit(ctx, &result, |r| {
        if let Some(session) = &r.session {
            print_session(session);
        }
    })
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let view = list_view(&args, ctx.default_sort);

    let result = ctx.api.list_places(&view, args.page)?;
    emit(ctx, &result, |r| {
        let total = r.page.map(|p| p.total_items).unwrap_or(r.listed_places.len());
        print_place_list(&list_title(&view, total), &r.listed_places, r.page);
        print_messages(&r.messages);
    })
}

/// View parameters for `list`; `--sort` overrides the configured default.
fn list_view(args: &ListArgs, default_sort: SortKey) -> ViewParams {
    let mut view = ViewParams::from_keys(
        args.category.as_deref().unwrap_or("all"),
        args.status.as_deref().unwrap_or("all"),
        args.search.as_deref().unwrap_or(""),
        "",
        args.price.as_deref().unwrap_or("all"),
    );
    view.sort = args.sort.as_deref().map_or(default_sort, SortKey::parse);
    view
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_place(id)?;
    emit(ctx, &result, |r| print_full_places(&r.listed_places))
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let input = PlaceInput::from(args);
    field_errors(validate_place(&input))?;

    let result = ctx.api.create_place(input)?;
    emit(ctx, &result, |r| print_messages(&r.messages))
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: EditArgs) -> Result<()> {
    let current = ctx
        .api
        .view_place(id)?
        .listed_places
        .into_iter()
        .next()
        .ok_or_else(|| PlacezError::PlaceNotFound(id.to_string()))?;

    let input = fields.merge_into(current.to_input());
    field_errors(validate_place(&input))?;

    let result = ctx.api.update_place(id, input)?;
    emit(ctx, &result, |r| print_messages(&r.messages))
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_places(ids.as_slice())?;
    emit(ctx, &result, |r| print_messages(&r.messages))
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    emit(ctx, &result, |r| {
        if let Some(stats) = &r.statistics {
            print_statistics(stats);
        }
    })
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        return Err(PlacezError::Api(
            "Reset clears every place. Re-run with --yes to confirm".to_string(),
        ));
    }
    let result = ctx.api.reset()?;
    emit(ctx, &result, |r| print_messages(&r.messages))
}
