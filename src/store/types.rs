//! Store data types: company settings and roster file wrappers.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_INVOICE_PREFIX;
use crate::models::{ClientCompany, Nurse, StaffMember};

/// Supported billing currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// United Arab Emirates dirham.
    Aed,
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Saudi riyal.
    Sar,
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CurrencyCode::Aed => "AED",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Sar => "SAR",
        };
        write!(f, "{code}")
    }
}

/// Company-wide settings supplied by the store.
///
/// The calculation core never reads these; the API layer uses them for
/// attribution (currency on responses and filenames) and for the
/// document-boundary VAT computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
    /// The company's display name.
    pub company_name: String,
    /// The company's tax registration number, when registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_trn: Option<String>,
    /// Billing currency for all amounts.
    pub currency: CurrencyCode,
    /// VAT rate in percent applied by document consumers.
    pub vat_rate: Decimal,
    /// Prefix for generated invoice numbers.
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
    /// Bank name printed on invoices.
    #[serde(default)]
    pub bank_name: String,
    /// Bank account number printed on invoices.
    #[serde(default)]
    pub bank_account_number: String,
    /// IBAN printed on invoices.
    #[serde(default)]
    pub iban: String,
    /// Contact line printed on financial documents.
    #[serde(default)]
    pub contact_note: String,
}

fn default_invoice_prefix() -> String {
    DEFAULT_INVOICE_PREFIX.to_string()
}

/// Wrapper for the `nurses.yaml` store file.
#[derive(Debug, Clone, Deserialize)]
pub struct NursesFile {
    /// The nurse roster.
    pub nurses: Vec<Nurse>,
}

/// Wrapper for the `staff.yaml` store file.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffFile {
    /// The internal staff roster.
    pub staff: Vec<StaffMember>,
}

/// Wrapper for the `clients.yaml` store file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientsFile {
    /// The client company roster.
    pub clients: Vec<ClientCompany>,
}
