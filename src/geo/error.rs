use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside of [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside of [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("location catalog is empty")]
    EmptyCatalog,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line} of the locations file is not a valid location: {source}")]
    InvalidLine {
        line: usize,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Geo(#[from] GeoError),
}
