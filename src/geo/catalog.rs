use crate::geo::error::{CatalogError, GeoError};
use crate::geo::models::Location;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

static BUILTIN_CLASSIC_LOCATIONS: &str = include_str!("../../locations/classic.ndjson");
static BUILTIN_TRIVIA_LOCATIONS: &str = include_str!("../../locations/trivia.ndjson");

/// Which catalog a round draws its target from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    Classic,
    Trivia,
}

/// A non-empty, immutable list of locations.
#[derive(Clone, Debug)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    pub fn new(locations: Vec<Location>) -> Result<Self, GeoError> {
        if locations.is_empty() {
            return Err(GeoError::EmptyCatalog);
        }
        Ok(Self { locations })
    }

    /// Parses one JSON location per line, skipping blank lines.
    pub fn from_ndjson<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let mut locations = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let location = serde_json::from_str::<Location>(&line).map_err(|source| {
                CatalogError::InvalidLine {
                    line: index + 1,
                    source,
                }
            })?;
            locations.push(location);
        }
        Ok(Self::new(locations)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_ndjson(BufReader::new(file))
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn random(&self) -> Result<&Location, GeoError> {
        select_random_location(&self.locations)
    }
}

/// Uniformly picks one location out of `locations`.
pub fn select_random_location(locations: &[Location]) -> Result<&Location, GeoError> {
    select_random_location_with(locations, &mut rand::thread_rng())
}

pub fn select_random_location_with<'a, R: Rng + ?Sized>(
    locations: &'a [Location],
    rng: &mut R,
) -> Result<&'a Location, GeoError> {
    if locations.is_empty() {
        return Err(GeoError::EmptyCatalog);
    }
    Ok(&locations[rng.gen_range(0..locations.len())])
}

/// The catalogs of every game mode, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Catalogs {
    pub classic: Catalog,
    pub trivia: Catalog,
}

impl Catalogs {
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            classic: Catalog::from_ndjson(BUILTIN_CLASSIC_LOCATIONS.as_bytes())?,
            trivia: Catalog::from_ndjson(BUILTIN_TRIVIA_LOCATIONS.as_bytes())?,
        })
    }

    /// Built-in catalogs, with each one replaced by the given file when present.
    pub fn load(classic: Option<&Path>, trivia: Option<&Path>) -> Result<Self, CatalogError> {
        let mut catalogs = Self::builtin()?;
        if let Some(path) = classic {
            catalogs.classic = Catalog::from_file(path)?;
        }
        if let Some(path) = trivia {
            catalogs.trivia = Catalog::from_file(path)?;
        }
        Ok(catalogs)
    }

    pub fn for_mode(&self, mode: GameMode) -> &Catalog {
        match mode {
            GameMode::Classic => &self.classic,
            GameMode::Trivia => &self.trivia,
        }
    }
}
