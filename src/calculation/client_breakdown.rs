//! Per-client profitability breakdown.

use rust_decimal::Decimal;

use crate::models::{CalculatedPayrollRecord, ClientBreakdownEntry, ClientCompany};

/// Regroups calculated records by client into income/expense/profit rollups.
///
/// Entries appear in the order their client is first encountered while
/// scanning the records. Records whose `client_id` has no matching roster
/// entry are silently excluded — orphaned references are tolerated, e.g.
/// after a client was deleted upstream. Margins are computed after
/// accumulation and are 0 for a client with zero income.
pub fn calculate_client_breakdown(
    records: &[CalculatedPayrollRecord],
    clients: &[ClientCompany],
) -> Vec<ClientBreakdownEntry> {
    let mut entries: Vec<ClientBreakdownEntry> = Vec::new();

    for calc in records {
        let Some(client) = clients.iter().find(|c| c.id == calc.record.client_id) else {
            continue;
        };

        let entry = match entries.iter_mut().find(|e| e.client_id == client.id) {
            Some(existing) => existing,
            None => {
                entries.push(ClientBreakdownEntry {
                    client_id: client.id.clone(),
                    client_name: client.name.clone(),
                    income: Decimal::ZERO,
                    expenses: Decimal::ZERO,
                    profit: Decimal::ZERO,
                    margin: Decimal::ZERO,
                });
                entries.last_mut().expect("entry was just pushed")
            }
        };

        entry.income += calc.billed_amount;
        entry.expenses += calc.payable_amount;
        entry.profit += calc.billed_amount - calc.payable_amount;
    }

    for entry in &mut entries {
        entry.margin = if entry.income > Decimal::ZERO {
            entry.profit / entry.income * Decimal::from(100)
        } else {
            Decimal::ZERO
        };
    }

    entries
}
