use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::domain::keys::{SettingKey, SettingValue};
use crate::app::infrastructure::error::{AppError, Result};

/// The parts of a SimBrief OFP the overlay uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub aircraft: PlanAircraft,
    pub origin: PlanAirport,
    pub destination: PlanAirport,
    pub general: PlanGeneral,
    pub atc: PlanAtc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAircraft {
    pub icaocode: String,
    pub reg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAirport {
    pub icao_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanGeneral {
    pub icao_airline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAtc {
    pub callsign: String,
}

impl FlightPlan {
    pub fn from_json(json: &str) -> Result<FlightPlan> {
        serde_json::from_str(json).map_err(|e| AppError::FlightPlan(format!("Failed to parse flight plan: {}", e)))
    }

    /// Store writes that bring the overlay in line with this plan.
    pub fn updates(&self) -> Vec<(SettingKey, SettingValue)> {
        vec![
            (SettingKey::Type, self.aircraft.icaocode.clone().into()),
            (SettingKey::Registration, self.aircraft.reg.clone().into()),
            (SettingKey::Origin, self.origin.icao_code.clone().into()),
            (SettingKey::Destination, self.destination.icao_code.clone().into()),
            (SettingKey::Iata, format!("{} - {}", self.general.icao_airline, self.atc.callsign).into()),
        ]
    }
}

/// Something that can produce the latest flight plan of a SimBrief user.
pub trait FlightPlanSource {
    fn fetch(&mut self, username: &str) -> Result<FlightPlan>;
}

impl<T: FlightPlanSource + ?Sized> FlightPlanSource for Box<T> {
    fn fetch(&mut self, username: &str) -> Result<FlightPlan> {
        (**self).fetch(username)
    }
}

/// Reads a saved OFP JSON document instead of calling the SimBrief API.
#[derive(Debug, Clone)]
pub struct FileFlightPlanSource {
    path: PathBuf,
}

impl FileFlightPlanSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlightPlanSource for FileFlightPlanSource {
    fn fetch(&mut self, username: &str) -> Result<FlightPlan> {
        tracing::debug!("Loading flight plan for '{}' from {}", username, self.path.display());
        let contents = fs::read_to_string(&self.path)?;
        FlightPlan::from_json(&contents)
    }
}

/// Source for setups without SimBrief.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFlightPlan;

impl FlightPlanSource for NoFlightPlan {
    fn fetch(&mut self, _username: &str) -> Result<FlightPlan> {
        Err(AppError::FlightPlan("No flight plan source configured".to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) const OFP: &str = r#"{
        "general": { "icao_airline": "DLH", "flight_number": "400" },
        "origin": { "icao_code": "EDDF", "iata_code": "FRA" },
        "destination": { "icao_code": "KJFK", "iata_code": "JFK" },
        "aircraft": { "icaocode": "B748", "reg": "D-ABYA", "name": "Boeing 747-8" },
        "atc": { "callsign": "DLH400" }
    }"#;

    #[test]
    fn test_parse_ignores_extra_fields() {
        let plan = FlightPlan::from_json(OFP).unwrap();
        assert_eq!(plan.aircraft.icaocode, "B748");
        assert_eq!(plan.destination.icao_code, "KJFK");
    }

    #[test]
    fn test_parse_error_is_flight_plan_error() {
        let err = FlightPlan::from_json(r#"{"general": {}}"#).unwrap_err();
        assert!(matches!(err, AppError::FlightPlan(_)));
    }

    #[test]
    fn test_updates() {
        let plan = FlightPlan::from_json(OFP).unwrap();
        let updates = plan.updates();
        assert!(updates.contains(&(SettingKey::Type, SettingValue::from("B748"))));
        assert!(updates.contains(&(SettingKey::Registration, SettingValue::from("D-ABYA"))));
        assert!(updates.contains(&(SettingKey::Origin, SettingValue::from("EDDF"))));
        assert!(updates.contains(&(SettingKey::Destination, SettingValue::from("KJFK"))));
        assert!(updates.contains(&(SettingKey::Iata, SettingValue::from("DLH - DLH400"))));
    }

    #[test]
    fn test_file_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ofp.json");
        fs::write(&path, OFP).unwrap();

        let mut source = FileFlightPlanSource::new(&path);
        assert_eq!(source.fetch("pilot").unwrap().atc.callsign, "DLH400");

        let mut missing = FileFlightPlanSource::new(dir.path().join("nope.json"));
        assert!(matches!(missing.fetch("pilot"), Err(AppError::Io(_))));
    }

    #[test]
    fn test_no_flight_plan() {
        assert!(NoFlightPlan.fetch("pilot").is_err());
    }
}
