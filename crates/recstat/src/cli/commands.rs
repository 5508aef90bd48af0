use super::render;
use super::setup::{parse_cli, Cli, Commands, OutputFormat};
use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use record_status::api::{self, StatusOptions, VisibilityOptions};
use record_status::config::{RecordStatusConfig, CONFIG_FILE_NAME};
use record_status::filter::SqlFragment;
use record_status::host::MemModel;
use record_status::{CodeTable, FilterExpression, StatusBinding, StatusName, UnknownCodePolicy};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the per-user config directory (used by tests).
const HOME_ENV: &str = "RECSTAT_HOME";
const LOG_ENV: &str = "RECSTAT_LOG";

struct AppContext {
    config: RecordStatusConfig,
    codes: CodeTable,
    table: Option<String>,
    output: OutputFormat,
}

impl AppContext {
    fn qualifier(&self) -> Option<&str> {
        self.table.as_deref()
    }
}

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Codes);
    // The template must stay reachable when the config on disk is broken.
    if matches!(command, Commands::Config { template: true }) {
        print!("{}", RecordStatusConfig::template());
        return Ok(());
    }

    let ctx = init_context(&cli)?;
    match command {
        Commands::Codes => handle_codes(&ctx),
        Commands::Resolve { value } => handle_resolve(&ctx, &value),
        Commands::Read {
            stored,
            default,
            strict,
        } => handle_read(&ctx, stored.as_deref(), default, strict),
        Commands::Scopes { attr, field } => handle_scopes(&ctx, &attr, field),
        Commands::Visibility {
            statuses,
            field,
            allow_null,
            allow_blank,
        } => handle_visibility(&ctx, &statuses, &field, allow_null, allow_blank),
        Commands::Config { .. } => handle_config(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// Config files in priority order: project first, then the per-user directory.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_FILE_NAME));
    }
    match std::env::var_os(HOME_ENV) {
        Some(home) => paths.push(PathBuf::from(home).join(CONFIG_FILE_NAME)),
        None => {
            if let Some(dirs) = ProjectDirs::from("com", "recstat", "recstat") {
                paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
            }
        }
    }
    paths
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let files = match &cli.config {
        Some(path) => {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            vec![path.clone()]
        }
        None => config_search_paths(),
    };
    tracing::debug!(?files, "loading configuration");

    let config = RecordStatusConfig::load(&files).context("Failed to load configuration")?;
    let codes = config.code_table()?;
    let table = cli
        .table
        .clone()
        .or_else(|| config.table_name().map(str::to_string));

    Ok(AppContext {
        config,
        codes,
        table,
        output: cli.output,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_codes(ctx: &AppContext) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => print_json(&ctx.codes),
        OutputFormat::Text => {
            print!("{}", render::render_codes(&ctx.codes));
            Ok(())
        }
    }
}

fn handle_resolve(ctx: &AppContext, value: &str) -> Result<()> {
    let binding = StatusBinding::builder("status")
        .codes(ctx.codes.clone())
        .build();
    let code = binding.write(value)?;

    match ctx.output {
        OutputFormat::Json => print_json(&serde_json::json!({ "input": value, "code": code })),
        OutputFormat::Text => {
            println!("{}", code);
            Ok(())
        }
    }
}

fn handle_read(
    ctx: &AppContext,
    stored: Option<&str>,
    default: Option<String>,
    strict: bool,
) -> Result<()> {
    let policy = if strict {
        UnknownCodePolicy::Strict
    } else {
        ctx.config.unknown_code_policy()
    };
    let mut builder = StatusBinding::builder("status")
        .codes(ctx.codes.clone())
        .unknown_code_policy(policy);
    if let Some(default) = default {
        builder = builder.default_status(default);
    }
    let name = builder.build().read(stored)?;

    match ctx.output {
        OutputFormat::Json => print_json(&serde_json::json!({ "stored": stored, "name": name })),
        OutputFormat::Text => {
            print!("{}", render::render_name(name.as_ref()));
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct ScopeOutput {
    name: StatusName,
    filter: FilterExpression,
    sql: SqlFragment,
}

fn handle_scopes(ctx: &AppContext, attr: &str, field: Option<String>) -> Result<()> {
    let mut options = StatusOptions::default()
        .codes(ctx.codes.clone())
        .unknown_code_policy(ctx.config.unknown_code_policy());
    if let Some(field) = field {
        options = options.field(field);
    }

    let mut model = MemModel::new();
    api::status(&mut model, attr, options)?;

    match ctx.output {
        OutputFormat::Json => {
            let scopes: Vec<ScopeOutput> = model
                .scopes
                .into_iter()
                .map(|(name, filter)| ScopeOutput {
                    sql: filter.to_sql(ctx.qualifier()),
                    name,
                    filter,
                })
                .collect();
            print_json(&scopes)
        }
        OutputFormat::Text => {
            print!("{}", render::render_scopes(&model.scopes, ctx.qualifier()));
            Ok(())
        }
    }
}

fn handle_visibility(
    ctx: &AppContext,
    statuses: &[String],
    field: &str,
    allow_null: bool,
    allow_blank: bool,
) -> Result<()> {
    let options = VisibilityOptions::default()
        .codes(ctx.codes.clone())
        .allow_null(allow_null)
        .allow_blank(allow_blank);

    let mut model = MemModel::new();
    let filter = api::default_scope_by_status(&mut model, field, statuses, options)?;

    match ctx.output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "filter": filter,
            "sql": filter.to_sql(ctx.qualifier()),
        })),
        OutputFormat::Text => {
            print!("{}", render::render_filter(&filter, ctx.qualifier()));
            Ok(())
        }
    }
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => print_json(&ctx.config),
        OutputFormat::Text => {
            let text = toml::to_string(&ctx.config).context("Failed to render configuration")?;
            if text.trim().is_empty() {
                println!("(defaults)");
            } else {
                print!("{}", text);
            }
            Ok(())
        }
    }
}
