//! Store loading functionality.
//!
//! This module provides the [`StoreLoader`] type for loading company
//! settings and rosters from a directory of YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClientCompany, Nurse, StaffMember};

use super::types::{ClientsFile, CompanySettings, NursesFile, StaffFile};

/// Loads and provides read access to the company dataset.
///
/// The `StoreLoader` realizes the injected-repository boundary: it reads the
/// settings and roster files once at startup and hands out immutable
/// references. Payroll records are never stored here — they arrive
/// caller-supplied with each calculation request, keeping every engine call
/// a pure function of its inputs.
///
/// # Directory Structure
///
/// ```text
/// store/company/
/// ├── settings.yaml   # Company settings (currency, VAT rate, bank details)
/// ├── nurses.yaml     # Nurse roster
/// ├── staff.yaml      # Internal staff roster
/// └── clients.yaml    # Client company roster
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::store::StoreLoader;
///
/// let store = StoreLoader::load("./store/company").unwrap();
/// println!("Loaded company: {}", store.settings().company_name);
/// ```
#[derive(Debug, Clone)]
pub struct StoreLoader {
    settings: CompanySettings,
    nurses: Vec<Nurse>,
    staff: Vec<StaffMember>,
    clients: Vec<ClientCompany>,
}

impl StoreLoader {
    /// Loads the dataset from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the store directory (e.g. "./store/company")
    ///
    /// # Returns
    ///
    /// Returns a `StoreLoader` instance on success, or an error if any
    /// required file is missing ([`EngineError::StoreNotFound`]) or contains
    /// invalid YAML ([`EngineError::StoreParseError`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CompanySettings>(&path.join("settings.yaml"))?;
        let nurses = Self::load_yaml::<NursesFile>(&path.join("nurses.yaml"))?.nurses;
        let staff = Self::load_yaml::<StaffFile>(&path.join("staff.yaml"))?.staff;
        let clients = Self::load_yaml::<ClientsFile>(&path.join("clients.yaml"))?.clients;

        Ok(Self {
            settings,
            nurses,
            staff,
            clients,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::StoreNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::StoreParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the company settings.
    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    /// Returns the nurse roster.
    pub fn nurses(&self) -> &[Nurse] {
        &self.nurses
    }

    /// Returns the internal staff roster.
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Returns the client company roster.
    pub fn clients(&self) -> &[ClientCompany] {
        &self.clients
    }

    /// Looks up a nurse by id. Missing ids are the caller's concern.
    pub fn get_nurse(&self, id: &str) -> Option<&Nurse> {
        self.nurses.iter().find(|nurse| nurse.id == id)
    }

    /// Looks up a client company by id. Missing ids are the caller's concern.
    pub fn get_client(&self, id: &str) -> Option<&ClientCompany> {
        self.clients.iter().find(|client| client.id == id)
    }
}
