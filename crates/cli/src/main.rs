mod command;
mod console;

use std::io::BufRead;
use std::sync::Arc;

use orderflow_observability::LogFormat;
use orderflow_pipeline::{OrderDesk, PipelineConfig};

use crate::command::{Command, USAGE};
use crate::console::ConsoleSink;

/// Log format override, read before anything else.
const LOG_FORMAT_VAR: &str = "ORDERFLOW_LOG_FORMAT";

/// Resolve the log format; an unusable value is handed back for reporting.
fn log_format(raw: Option<String>) -> (LogFormat, Option<String>) {
    match raw {
        None => (LogFormat::default(), None),
        Some(raw) => match LogFormat::parse(&raw) {
            Some(format) => (format, None),
            None => (LogFormat::default(), Some(raw)),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let (format, rejected) = log_format(std::env::var(LOG_FORMAT_VAR).ok());
    orderflow_observability::init_with(format);
    if let Some(raw) = rejected {
        tracing::warn!(
            var = LOG_FORMAT_VAR,
            value = %raw,
            "unrecognised log format; using json"
        );
    }

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let config = PipelineConfig::from_env();
    tracing::info!(?config, json, "starting order desk");

    let sink = Arc::new(ConsoleSink::new(std::io::stdout(), json));
    let desk = OrderDesk::with_config(sink.clone(), &config)?;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(problem) => {
                eprintln!("{problem}\n{USAGE}");
                continue;
            }
        };

        match command {
            Command::Order {
                product,
                quantity,
                customer_name,
            } => {
                let outcome = desk.submit_order(&customer_name, &product, quantity)?;
                tracing::debug!(?outcome, "order handled");
            }
            Command::Ship { product, express } => {
                let outcome = desk.request_shipment(&product, express)?;
                tracing::debug!(?outcome, "shipment handled");
            }
            Command::Status => {
                println!(
                    "status: {} (last order confirmed: {})",
                    sink.status().as_deref().unwrap_or("-"),
                    desk.last_order_confirmed()
                );
            }
            Command::Products => {
                println!("{}", desk.catalog().products().join(", "));
            }
            Command::Quit => break,
        }
    }

    Ok(())
}
