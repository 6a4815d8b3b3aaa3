//! Command implementations.

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use roster_cli::logging::redact_value;
use roster_core::{ImportSession, SessionContext};
use roster_ingest::{read_raw_table, structure_table};
use roster_phone::resolve_alpha2;

use crate::cli::{InspectArgs, PreviewArgs, SubmitArgs};
use crate::summary::{print_analysis, print_countries, print_mapping, print_preview};

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let table = read_raw_table(&args.file)?;
    if table.is_empty() {
        bail!("no parseable rows in {}", args.file.display());
    }
    let structure = structure_table(&table);
    print_mapping(&structure);
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let session = build_session(
        &args.file,
        args.country.as_deref(),
        args.billing_country.as_deref(),
        args.inviter_phone.as_deref(),
    )?;
    print_analysis(&session.phone_analysis(), session.assumed_country());
    print_preview(session.rows(), &session.summary());
    Ok(())
}

/// Returns true when a payload was produced.
pub fn run_submit(args: &SubmitArgs) -> Result<bool> {
    let session = build_session(
        &args.file,
        args.country.as_deref(),
        args.billing_country.as_deref(),
        args.inviter_phone.as_deref(),
    )?;
    let summary = session.summary();
    let records = session.submission();
    if records.is_empty() {
        eprintln!("nothing to submit: 0 valid rows ({} excluded)", summary.excluded);
        return Ok(false);
    }
    for record in &records {
        debug!(email = redact_value(&record.email), "collected invite");
    }

    let payload = serde_json::to_string_pretty(&records).context("serialize payload")?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, payload)
                .with_context(|| format!("write payload: {}", path.display()))?;
            info!(path = %path.display(), records = records.len(), "wrote invitation payload");
        }
        None => println!("{payload}"),
    }
    eprintln!(
        "submitting {} rows, {} excluded with errors",
        summary.valid, summary.excluded
    );
    Ok(true)
}

pub fn run_countries() -> Result<()> {
    print_countries();
    Ok(())
}

fn build_session(
    file: &std::path::Path,
    country: Option<&str>,
    billing_country: Option<&str>,
    inviter_phone: Option<&str>,
) -> Result<ImportSession> {
    let context = SessionContext {
        billing_country: billing_country.map(resolve_alpha2).transpose()?,
        inviter_phone: inviter_phone.map(str::to_string),
    };
    let mut session = ImportSession::new(context);

    let table = read_raw_table(file)?;
    if !session.load_table(table) {
        bail!("no parseable rows in {}", file.display());
    }
    if !session.continue_to_preview() {
        bail!(
            "no email column detected in {}; an email column is required",
            file.display()
        );
    }

    let assumed = match country {
        Some(code) => Some(resolve_alpha2(code)?),
        None => session.phone_analysis().suggested_country,
    };
    debug!(
        assumed = assumed.as_ref().map(|c| c.alpha2.as_str()),
        "applying dial-code assumption"
    );
    session.set_assumed_country(assumed);
    Ok(session)
}
