use clap::Parser;
use portfolio_client::config::Command;
use portfolio_client::core::contact::SubmissionState;
use portfolio_client::core::page::ContactForm;
use portfolio_client::utils::{logger, validation::Validate};
use portfolio_client::{
    App, CliConfig, ClientConfig, Event, MemoryClipboard, Outcome, ReqwestHttpClient, UiContext,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let http = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout())?);
    let clipboard = Arc::new(MemoryClipboard::new());
    let ctx = UiContext::new().with_grids().with_contact_form("Send Message");
    let mut app = App::new(&config, ctx, http, clipboard);

    match cli.command {
        Command::Render => {
            tracing::info!("Loading portfolio content from {}", config.api.base_url);
            for outcome in app.dispatch(&Event::loaded()).await {
                if let Outcome::Loaded(report) = outcome {
                    tracing::info!(
                        "Skills rendered: {}, projects rendered: {}",
                        report.skills_rendered,
                        report.projects_rendered
                    );
                }
            }

            if let Some(grid) = &app.ctx.skills_grid {
                println!("<!-- #skillsGrid -->\n{}", grid.inner_html);
            }
            if let Some(grid) = &app.ctx.projects_grid {
                println!("<!-- #projectsGrid -->\n{}", grid.inner_html);
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let form = app
                .ctx
                .contact_form
                .get_or_insert_with(|| ContactForm::new("Send Message"));
            form.fill(&name, &email, &subject, &message);

            let mut state = SubmissionState::Idle;
            for outcome in app.dispatch(&Event::submit()).await {
                if let Outcome::Submitted(submitted) = outcome {
                    state = submitted;
                }
            }

            if let Some(form) = &app.ctx.contact_form {
                let text = &form.form_message.text;
                match state {
                    SubmissionState::Succeeded => println!("✅ {}", text),
                    _ => {
                        eprintln!("❌ {}", text);
                        std::process::exit(2);
                    }
                }
            }
        }
    }

    Ok(())
}
