use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use client_core::{submit, TriageApi, TriageClient, DEFAULT_API_BASE_URL};
use shared::domain::{AnalysisResult, HistoryRecord};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "TRIAGE_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: Url,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit symptoms for analysis.
    Check {
        /// Confirm you understand the tool is not a substitute for medical advice.
        #[arg(long)]
        agree: bool,
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// List past checks, most recent first.
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let client = TriageClient::new(cli.api_base_url);

    match cli.command {
        Command::Check { agree, symptoms } => {
            let result = submit(&client, &symptoms.join(" "), agree).await?;
            print!("{}", format_analysis(&result));
        }
        Command::History => {
            let records = client.fetch_history().await?;
            if records.is_empty() {
                println!("No history found.");
            }
            for record in &records {
                println!("{}", format_history_line(record));
            }
        }
    }

    Ok(())
}

fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::from("Potential conditions:\n");
    for condition in &result.potential_conditions {
        out.push_str(&format!(
            "  - {} ({}): {}\n",
            condition.name, condition.likelihood, condition.description
        ));
    }
    out.push_str(&format!("Urgency: {}\n", result.urgency_level()));
    for step in &result.recommended_next_steps.steps {
        out.push_str(&format!("  * {step}\n"));
    }
    out.push_str(&format!("\n{}\n", result.safety_disclaimer));
    out
}

fn format_history_line(record: &HistoryRecord) -> String {
    format!(
        "#{} [{}] {} -> {} | urgency: {}",
        record.id.0,
        record
            .created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        record.symptoms,
        record.response.condition_names().join(", "),
        record.response.urgency_level()
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
