use tbl::{Result, TellerReport};

use csv::Writer;

pub fn write_reports(reports: &[TellerReport]) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    for report in reports.iter() {
        log::debug!("Serializing report for line {}", report.line);
        writer.serialize(report)?;
    }

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
