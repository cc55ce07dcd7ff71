mod args;
mod config;
mod messages;
mod reader;
mod writer;

use tbl::{input::InputEvent, services::Teller, ReportStatus, Result, TellerReport};

use csv::StringRecord;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning session...");

    let mut teller = tbl::build_teller();

    let reports = process_script(&mut teller)?;

    log::debug!(
        "Session complete with {} accounts. Beginning report...",
        teller.registry().len()
    );

    report_to_std_out(&reports)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the teller script, run every request against the registry, and collect one report per
/// request
fn process_script(teller: &mut Teller) -> Result<Vec<TellerReport>> {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;
    let headers = rdr.headers()?.clone();

    let mut reports = vec![];

    log::debug!("Reading records...");
    for record in rdr.records() {
        let report = match record {
            Ok(record) => process_record(teller, &record, &headers),
            Err(e) => {
                let line = e.position().map(|pos| pos.line()).unwrap_or_default();
                log::warn!("Line {line}: {e}");

                TellerReport {
                    line,
                    command: String::new(),
                    account: String::new(),
                    status: ReportStatus::Error,
                    message: messages::UNREADABLE_REQUEST.to_string(),
                }
            }
        };

        reports.push(report);
    }

    Ok(reports)
}

/// Parse one row and run it, reporting parse failures separately from ledger failures
fn process_record(
    teller: &mut Teller,
    record: &StringRecord,
    headers: &StringRecord,
) -> TellerReport {
    let line = record.position().map(|pos| pos.line()).unwrap_or_default();
    let command = record.get(0).unwrap_or_default().trim().to_string();
    let account = record.get(1).unwrap_or_default().to_string();

    log::debug!("Parsing {command:?} request for account {account:?} at line {line}");
    let parsed = InputEvent::from_record(record, headers).and_then(|input_event| {
        let typ = input_event.event_type()?;
        Ok((typ, input_event.parse_event()?))
    });

    let (status, message) = match parsed {
        Err(e) => {
            log::warn!("Line {line}: {e}");
            (ReportStatus::Error, messages::describe_input_error(&e))
        }
        Ok((typ, event)) => match teller.process_event(event) {
            Ok(outcome) => (ReportStatus::Ok, messages::describe_outcome(&outcome)),
            Err(e) => {
                log::warn!("Line {line}: {e}");
                (ReportStatus::Error, messages::describe_error(&e, typ))
            }
        },
    };

    TellerReport {
        line,
        command,
        account,
        status,
        message,
    }
}

/// Write reports as CSV to stdout
fn report_to_std_out(reports: &[TellerReport]) -> Result {
    log::debug!("Serializing {} reports...", reports.len());

    let output = writer::write_reports(reports)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
