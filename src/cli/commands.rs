use crate::acm::client::AcmClient;
use crate::cert::lookup::list_all_certificates;
use crate::cert::{CertificateResolver, Query, SummaryColumn, DEFAULT_STATUS};
use crate::cli::args::*;
use crate::cli::completions::{handle_completion_command, handle_completion_helper_command};
use crate::config::{load_settings, SettingsOverrides};
use crate::utils::errors::{AcmLookupError, Result};
use crate::utils::output::{build_table_data, OutputFormat};
use std::io;
use std::str::FromStr;

pub async fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "acm_lookup=warn",  // Default: warnings only
            1 => "acm_lookup=info",  // -v: info level
            2 => "acm_lookup=debug", // -vv: debug level
            _ => "acm_lookup=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let output = OutputFormat::new(cli.raw);

    match cli.command {
        Commands::Lookup {
            ref domain,
            ref statuses,
            ref types,
            most_recent,
        } => {
            let query = Query::new(domain.clone())
                .with_statuses(statuses.iter().cloned())
                .with_types(types.iter().cloned())
                .most_recent(most_recent);
            handle_lookup_command(&cli, &query, &output).await
        }
        Commands::List {
            ref statuses,
            ref domain,
            ref columns,
        } => handle_list_command(&cli, statuses, domain.as_deref(), columns.as_deref(), &output).await,
        Commands::Completion { ref command } => handle_completion_command(command),
        Commands::CompletionHelper { ref command } => {
            handle_completion_helper_command(command, &output)
        }
    }
}

fn create_client(cli: &Cli) -> Result<AcmClient> {
    let settings = load_settings(SettingsOverrides {
        config_path: cli.config.clone(),
        region: cli.region.clone(),
        endpoint: cli.endpoint_url.clone(),
    })?;
    AcmClient::new(settings)
}

async fn handle_lookup_command(cli: &Cli, query: &Query, output: &OutputFormat) -> Result<()> {
    let client = create_client(cli)?;
    let resolver = CertificateResolver::new(&client, &client);
    let arn = resolver.resolve(query).await?;

    if output.raw {
        output.print_list(&[arn]);
    } else {
        output.print_key_value(&[("Domain", query.domain.as_str()), ("ARN", arn.as_str())]);
    }
    Ok(())
}

async fn handle_list_command(
    cli: &Cli,
    statuses: &[String],
    domain: Option<&str>,
    columns: Option<&str>,
    output: &OutputFormat,
) -> Result<()> {
    let columns = parse_columns(columns)?;
    let statuses = if statuses.is_empty() {
        vec![DEFAULT_STATUS.to_string()]
    } else {
        statuses.to_vec()
    };

    let client = create_client(cli)?;
    let summaries: Vec<_> = list_all_certificates(&client, &statuses)
        .await?
        .into_iter()
        .filter(|summary| domain.map_or(true, |d| summary.domain_name == d))
        .collect();

    if summaries.is_empty() {
        tracing::info!("No certificates found with statuses {:?}", statuses);
        return Ok(());
    }

    let mut table_data = Vec::with_capacity(summaries.len() + 1);
    if !output.raw {
        table_data.push(columns.iter().map(|c| c.header().to_string()).collect());
    }
    table_data.extend(build_table_data(&summaries, &columns));
    output.print_table(&table_data);
    Ok(())
}

/// Parse the comma-separated columns parameter, falling back to the defaults
fn parse_columns(columns: Option<&str>) -> Result<Vec<SummaryColumn>> {
    let Some(columns) = columns else {
        return Ok(SummaryColumn::DEFAULT.to_vec());
    };

    let parsed = columns
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(SummaryColumn::from_str)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(AcmLookupError::InvalidInput)?;

    if parsed.is_empty() {
        return Err(AcmLookupError::InvalidInput(
            "No columns selected".to_string(),
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns(None).unwrap(), SummaryColumn::DEFAULT.to_vec());
        assert_eq!(
            parse_columns(Some("arn, domain")).unwrap(),
            vec![SummaryColumn::Arn, SummaryColumn::Domain]
        );
        assert!(matches!(
            parse_columns(Some("arn,serial")),
            Err(AcmLookupError::InvalidInput(_))
        ));
        assert!(parse_columns(Some(" , ")).is_err());
    }
}
