//! Static city and route catalog
//!
//! The catalog is read-only reference data: it is loaded once and stays
//! immutable for the life of the planner model. City names are interned to
//! dense [`CityId`] indices so the search works on `Copy` keys and plan
//! output converts back to names at the boundary.

use std::fmt;
use std::str::FromStr;

use geo::Point;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::graph::Hour;

/// Dense index of a city inside the catalog.
pub type CityId = usize;

/// Epidemic risk level of a city. Closed enumeration: any other value in the
/// input data is a fatal configuration error, never a defaulted weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            other => Err(Error::UnknownRiskLevel(other.to_string())),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// Transport mode of a scheduled route. Closed enumeration, same rules as
/// [`RiskLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Plane,
    Train,
    Bus,
}

impl FromStr for TransportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "PLANE" => Ok(Self::Plane),
            "TRAIN" => Ok(Self::Train),
            "BUS" => Ok(Self::Bus),
            other => Err(Error::UnknownRouteType(other.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Plane => "PLANE",
            Self::Train => "TRAIN",
            Self::Bus => "BUS",
        };
        f.write_str(s)
    }
}

/// Geographic position of a city, as stored in the catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

/// A city: unique name, map position and epidemic risk level.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub position: Position,
    pub risk: RiskLevel,
}

impl City {
    /// Map location of the city.
    pub fn location(&self) -> Point<f64> {
        Point::new(self.position.longitude, self.position.latitude)
    }
}

/// One scheduled directed departure between two cities.
///
/// `end_time > start_time` is expected; routes never span midnight. Multiple
/// routes between the same city pair at different times are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub start_time: Hour,
    pub end_time: Hour,
    pub mode: TransportMode,
}

/// Immutable city/route catalog with a name-to-id interning map.
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<City>,
    routes: Vec<Route>,
    city_index: HashMap<String, CityId>,
}

impl Catalog {
    /// Builds a catalog from city and route records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if two cities share a name.
    pub fn new(cities: Vec<City>, routes: Vec<Route>) -> Result<Self, Error> {
        let mut city_index = HashMap::with_capacity(cities.len());
        for (id, city) in cities.iter().enumerate() {
            if city_index.insert(city.name.clone(), id).is_some() {
                return Err(Error::InvalidData(format!(
                    "duplicate city name in the catalog: {}",
                    city.name
                )));
            }
        }
        Ok(Self {
            cities,
            routes,
            city_index,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City record for a valid id. Ids are only produced by this catalog,
    /// so the index is always in range.
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id]
    }

    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.city_index.get(name).copied()
    }

    /// Resolves a city name to its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CityNotFound`] for a name absent from the catalog.
    pub fn require_city(&self, name: &str) -> Result<CityId, Error> {
        self.city_id(name)
            .ok_or_else(|| Error::CityNotFound(name.to_string()))
    }
}
