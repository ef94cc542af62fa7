use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid search request: {reason}")]
    InvalidSearch { reason: String },

    #[error("Invalid resource location '{input}': {reason}")]
    InvalidResourceLocation { input: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    /// The identifier is not present in the biome registry. No search ran.
    #[error("There is no biome named {identifier}")]
    UnknownBiome { identifier: String },

    /// Every ring up to the radius cap was scanned without a hit.
    #[error("Could not find a {biome} within reasonable distance")]
    BiomeNotFound { biome: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
