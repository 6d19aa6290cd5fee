//! This module is responsible for loading the static city and route
//! catalogs from JSON files and building the planner model.
//!
//! Risk levels and transport modes arrive as strings and are validated
//! against their closed enumerations here: an out-of-range value aborts
//! loading instead of being assigned a default weight.

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

use crate::error::Error;
use crate::model::catalog::{Catalog, City, Position, Route};
use crate::model::graph::Hour;
use crate::model::PlannerModel;

/// Paths to the two catalog files consumed by the planner.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    pub cities_path: PathBuf,
    pub routes_path: PathBuf,
}

/// Raw city record as stored on disk.
#[derive(Debug, Deserialize)]
struct RawCity {
    name: String,
    position: Position,
    risk: String,
}

/// Raw route record as stored on disk. The transport mode field is named
/// `type` in the data files.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoute {
    from: String,
    to: String,
    start_time: Hour,
    end_time: Hour,
    #[serde(rename = "type")]
    mode: String,
}

/// Creates a planner model based on the provided configuration.
///
/// # Errors
///
/// Returns an error if either file is missing or unreadable, if the JSON
/// is malformed, or if the catalog contains values outside the closed
/// risk/mode enumerations.
pub fn create_planner_model(config: &PlannerConfig) -> Result<PlannerModel, Error> {
    validate_config(config)?;

    info!("Loading city catalog: {}", config.cities_path.display());
    let cities_json = std::fs::read_to_string(&config.cities_path)?;

    info!("Loading route catalog: {}", config.routes_path.display());
    let routes_json = std::fs::read_to_string(&config.routes_path)?;

    let catalog = catalog_from_json(&cities_json, &routes_json)?;
    info!(
        "Catalog loaded: {} cities, {} routes",
        catalog.city_count(),
        catalog.routes().len()
    );

    PlannerModel::new(catalog)
}

/// Parses a catalog from in-memory JSON documents: an array of city
/// records and an array of route records.
///
/// # Errors
///
/// Returns [`Error::UnknownRiskLevel`] or [`Error::UnknownRouteType`] for
/// values outside the closed enumerations, [`Error::JsonError`] for
/// malformed documents.
pub fn catalog_from_json(cities_json: &str, routes_json: &str) -> Result<Catalog, Error> {
    let raw_cities: Vec<RawCity> = serde_json::from_str(cities_json)?;
    let raw_routes: Vec<RawRoute> = serde_json::from_str(routes_json)?;

    let cities = raw_cities
        .into_iter()
        .map(|raw| {
            Ok(City {
                name: raw.name,
                position: raw.position,
                risk: raw.risk.parse()?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let routes = raw_routes
        .into_iter()
        .map(|raw| {
            Ok(Route {
                from: raw.from,
                to: raw.to,
                start_time: raw.start_time,
                end_time: raw.end_time,
                mode: raw.mode.parse()?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Catalog::new(cities, routes)
}

fn validate_config(config: &PlannerConfig) -> Result<(), Error> {
    if !config.cities_path.exists() {
        return Err(Error::InvalidData(format!(
            "City catalog not found: {}",
            config.cities_path.display()
        )));
    }
    if !config.routes_path.exists() {
        return Err(Error::InvalidData(format!(
            "Route catalog not found: {}",
            config.routes_path.display()
        )));
    }
    Ok(())
}
