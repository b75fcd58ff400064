mod cli;
mod commands;

use std::process::ExitCode;

use tint_common::{TintError, UserId};
use tint_config::TintConfig;
use tint_engine::{ListFilter, SaveOutcome, ThemeSession, Visibility};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use cli::Command;

fn init_logging(override_directive: Option<&str>, config: &TintConfig) {
    let fallback = config.logging.level.directive();
    let directive = override_directive
        .unwrap_or(fallback)
        .parse::<Directive>()
        .or_else(|_| fallback.parse::<Directive>());

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    // stdout carries artifacts
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command, config: &TintConfig) -> Result<ExitCode, TintError> {
    match command {
        Command::Targets => print!("{}", commands::list_targets()),
        Command::Render {
            session,
            target,
            out,
        } => {
            let session = commands::open_session(config, &session)?;
            commands::write_or_print(out.as_deref(), &session.render(target)?)?;
        }
        Command::Export { session, out_dir } => {
            let mut session = commands::open_session(config, &session)?;
            let out_dir = out_dir.unwrap_or_else(|| config.export.out_dir.clone());
            let written = commands::export(&mut session, &config.export.targets, &out_dir)?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Command::Resolve { session } => {
            let session = commands::open_session(config, &session)?;
            print!("{}", commands::resolve_json(&session)?);
        }
        Command::Random { seed, out } => commands::random(seed, out.as_deref())?,
        Command::Save {
            session,
            user,
            public,
        } => {
            let session = commands::open_session(config, &session)?;
            let visibility = if public {
                Visibility::Public
            } else {
                Visibility::Private
            };
            let report =
                commands::save(config, session, user.map(UserId::new), visibility).await?;
            match report.outcome {
                SaveOutcome::Saved { digest } => {
                    println!("saved {} ({})", report.theme_id, &digest[..12.min(digest.len())]);
                }
                SaveOutcome::Failed(message) => {
                    eprintln!("tint: save failed: {message}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::List { public, name } => {
            let filter = ListFilter {
                visibility: public.then_some(Visibility::Public),
                name_contains: name,
                ..Default::default()
            };
            for saved in commands::list(config, &filter).await? {
                println!("{}", commands::describe_saved(&saved));
            }
        }
        Command::Status => match commands::startup_snapshot(config).await? {
            Some(snapshot) => {
                let session = ThemeSession::from_snapshot(snapshot);
                print!("{}", commands::describe_session(&session));
            }
            None => println!("no saved session"),
        },
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // config first: `logging.level` feeds the filter
    let loaded = tint_config::load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(args.log_level.as_deref(), &config);

    match &loaded {
        Ok(_) => tracing::debug!("config loaded (theme: {})", config.theme.name),
        Err(e) => tracing::warn!("config load failed, using defaults: {e}"),
    }

    match run(args.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("tint: {e}");
            ExitCode::FAILURE
        }
    }
}
