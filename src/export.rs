//! Delimited-text export of calculated payroll records.
//!
//! Produces the CSV table consumed by spreadsheet imports: one row per
//! calculated record with nurse and client names resolved from the rosters
//! and monetary fields formatted to 2 decimal places. Quoting and escaping
//! are handled by the `csv` writer.

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculatedPayrollRecord, ClientCompany, Month, Nurse};

/// Column headers of the payroll export table.
const HEADERS: [&str; 16] = [
    "Payroll ID",
    "Month",
    "Nurse",
    "Client",
    "Start Date",
    "End Date",
    "Days Worked",
    "Contract Amount",
    "Billed Amount",
    "Nurse Salary",
    "Transportation",
    "Overtime Days",
    "Overtime Amount",
    "Fines / Deductions",
    "Payable Amount",
    "Profit",
];

/// Renders calculated records as a CSV table.
///
/// Records referencing a nurse or client missing from the rosters are kept
/// and labelled `"Unknown Nurse"` / `"Unknown Client"` — the export must
/// not lose money rows to a deleted roster entry.
pub fn payroll_csv(
    records: &[CalculatedPayrollRecord],
    nurses: &[Nurse],
    clients: &[ClientCompany],
    month: Month,
) -> EngineResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADERS).map_err(write_error)?;

    for calc in records {
        let nurse_name = nurses
            .iter()
            .find(|nurse| nurse.id == calc.record.nurse_id)
            .map(|nurse| nurse.name.as_str())
            .unwrap_or("Unknown Nurse");
        let client_name = clients
            .iter()
            .find(|client| client.id == calc.record.client_id)
            .map(|client| client.name.as_str())
            .unwrap_or("Unknown Client");

        writer
            .write_record([
                calc.record.id.clone(),
                month.to_string(),
                nurse_name.to_string(),
                client_name.to_string(),
                calc.record.start_date.to_string(),
                calc.record.end_date.to_string(),
                calc.days_worked.to_string(),
                format!("{:.2}", calc.record.contract_amount),
                format!("{:.2}", calc.billed_amount),
                format!("{:.2}", calc.base_salary_amount),
                format!("{:.2}", calc.transportation_amount),
                calc.record.overtime_days.to_string(),
                format!("{:.2}", calc.overtime_amount),
                format!("{:.2}", calc.record.fines),
                format!("{:.2}", calc.payable_amount),
                format!("{:.2}", calc.profit),
            ])
            .map_err(write_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::ExportFailed {
            message: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ExportFailed {
        message: e.to_string(),
    })
}

fn write_error(error: csv::Error) -> EngineError {
    EngineError::ExportFailed {
        message: error.to_string(),
    }
}
