//! Pagekit - Main Entry Point
//!
//! Renders the page to the terminal: the user list after page-ready, then the
//! registration feedback for username/email/password read from stdin.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Context;
use pagekit::app::Application;
use pagekit::domain::RegistrationForm;
use pagekit::helpers::init_tracing;
use pagekit::page::render_page;
use pagekit::utils::config_store::load_config;

fn main() -> anyhow::Result<()> {
    let loaded = load_config();
    let log_config = loaded
        .as_ref()
        .map(|loaded| loaded.config.log.clone())
        .unwrap_or_default();

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_tracing(&log_config).context("Failed to initialize logging")?;

    tracing::info!("Starting Pagekit...");

    let loaded = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            return Err(e).context("Failed to load configuration");
        }
    };
    loaded.log_source();
    let config = loaded.config;

    let color = io::stdout().is_terminal();
    let mut app = Application::new(config);
    println!("{}", render_page(app.page(), color));

    app.ready_blocking().context("Page setup failed")?;
    println!("{}", render_page(app.page(), color));

    let form = read_form(&mut io::stdin().lock())?;
    app.submit(form)?;
    println!("{}", render_page(app.page(), color));

    Ok(())
}

/// Read the three registration fields, one line each; missing lines are empty
fn read_form(input: &mut impl BufRead) -> anyhow::Result<RegistrationForm> {
    let mut fields = Vec::with_capacity(3);
    for label in ["Username", "Email", "Password"] {
        print!("{label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        fields.push(line.trim_end_matches(['\r', '\n']).to_string());
    }
    println!();

    let [username, email, password]: [String; 3] = fields
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected three form fields"))?;
    Ok(RegistrationForm::new(username, email, password))
}
