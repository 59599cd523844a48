use clap::Parser;
use salary_lookup::{browse, cli, client, config, display, error, workflow};
use cli::{Cli, Commands};
use client::BackendClient;
use config::Config;
use error::Result;
use salary_lookup_common::{ListView, SalaryRecord, SessionState};

/// クライアントと空のセッションを用意
fn connect(config: &Config, url: Option<&str>, verbose: bool) -> Result<(BackendClient, SessionState)> {
    let endpoints = config.endpoints(url)?;
    if verbose {
        eprintln!("Backend: {}", endpoints.base_url());
    }
    let client = BackendClient::new(endpoints, config.timeout_seconds, verbose)?;
    Ok((client, SessionState::new(config.currency.clone())))
}

/// 読み込み後、失敗・0件ならメッセージを表示してfalse
async fn load_or_report(session: &mut SessionState, client: &BackendClient) -> bool {
    workflow::load(session, client, true).await;
    if let ListView::Message(message) = session.list() {
        println!("{}", message);
        return false;
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    let url = cli.url.as_deref();

    match cli.command {
        Commands::List => {
            let (client, mut session) = connect(&config, url, cli.verbose)?;
            if load_or_report(&mut session, &client).await {
                println!("{}", display::list_text(session.list()));
            }
        }

        Commands::Search { query } => {
            let (client, mut session) = connect(&config, url, cli.verbose)?;
            if load_or_report(&mut session, &client).await {
                session.search(&query);
                println!("{}", display::list_text(session.list()));
            }
        }

        Commands::Show { query, analyze } => {
            let (client, mut session) = connect(&config, url, cli.verbose)?;
            if !load_or_report(&mut session, &client).await {
                return Ok(());
            }
            session.search(&query);

            let Some(row) = session.list().rows().first().cloned() else {
                println!("{}", display::list_text(session.list()));
                return Ok(());
            };
            session.select(row.record);
            if let Some(detail) = session.detail() {
                println!("{}", display::detail_text(&detail));
            }

            if analyze {
                workflow::analyze(&mut session, &client, true).await;
                if let Some(text) = display::analysis_text(session.analysis()) {
                    println!("{}", text);
                }
            }
        }

        Commands::Analyze { job_title } => {
            let (client, mut session) = connect(&config, url, cli.verbose)?;
            session.select(SalaryRecord {
                title: Some(job_title.trim().to_string()),
                ..Default::default()
            });
            workflow::analyze(&mut session, &client, true).await;
            if let Some(text) = display::analysis_text(session.analysis()) {
                println!("{}", text);
            }
        }

        Commands::Browse => {
            let (client, mut session) = connect(&config, url, cli.verbose)?;
            browse::run_browse(&mut session, &client).await?;
        }

        Commands::Config { set_url, show } => {
            if let Some(new_url) = set_url {
                config.set_base_url(new_url)?;
                println!("✔ URL base guardada");
            }

            if show {
                println!("Configuración:");
                println!("  URL base: {}", config.effective_base_url(url));
                println!("  Tiempo de espera: {}s", config.timeout_seconds);
                println!(
                    "  Moneda: {} (miles '{}', decimales '{}')",
                    config.currency.symbol, config.currency.grouping, config.currency.decimal
                );
            }
        }
    }

    Ok(())
}
