//! Store and collection configuration.

use services::env::{EnvError, env_opt, must_env};

use crate::errors::StoreError;

/// Documents per insert call.
pub const INSERT_BATCH_SIZE: usize = 20;

/// Distance function used for the vector space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceKind {
    /// Dot product (default for the configured embedding model).
    Dot,
    /// Cosine distance.
    Cosine,
    /// Euclidean distance (L2).
    Euclid,
}

impl DistanceKind {
    /// Parses the metric names used by the configuration surface.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dot_product" => Some(Self::Dot),
            "cosine" => Some(Self::Cosine),
            "euclidean" => Some(Self::Euclid),
            _ => None,
        }
    }
}

/// Describes the vector space of the collection.
#[derive(Clone, Copy, Debug)]
pub struct VectorSpace {
    /// Dimensionality of vectors.
    pub size: usize,
    /// Distance function.
    pub distance: DistanceKind,
}

/// Configuration for the document store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Qdrant endpoint, e.g. `http://localhost:6334`.
    pub url: String,
    /// Optional API key (Qdrant Cloud).
    pub api_key: Option<String>,
    /// Optional namespace, applied as a collection-name prefix.
    pub namespace: Option<String>,
    /// Target collection name.
    pub collection: String,
    /// Vector dimension configured for the collection.
    pub dimension: usize,
    /// Distance function.
    pub distance: DistanceKind,
    /// Documents per insert call.
    pub insert_batch: usize,
}

impl StoreConfig {
    /// Loads the store configuration from the environment.
    ///
    /// `dimension` comes from the embedding configuration so the two can
    /// never drift apart.
    ///
    /// # Env
    /// - `QDRANT_URL` (required)
    /// - `RAG_COLLECTION` (required)
    /// - `QDRANT_API_KEY`, `RAG_NAMESPACE` (optional)
    /// - `SIMILARITY_METRIC` (optional: `dot_product` | `cosine` |
    ///   `euclidean`; default `dot_product`)
    ///
    /// # Errors
    /// Returns [`StoreError::Env`] for missing or malformed variables.
    pub fn from_env(dimension: usize) -> Result<Self, StoreError> {
        let distance = match env_opt("SIMILARITY_METRIC") {
            Some(raw) => DistanceKind::parse(&raw).ok_or_else(|| EnvError::InvalidValue {
                var: "SIMILARITY_METRIC",
                reason: format!("unknown metric `{raw}`"),
            })?,
            None => DistanceKind::Dot,
        };

        Ok(Self {
            url: must_env("QDRANT_URL")?,
            api_key: env_opt("QDRANT_API_KEY"),
            namespace: env_opt("RAG_NAMESPACE"),
            collection: must_env("RAG_COLLECTION")?,
            dimension,
            distance,
            insert_batch: INSERT_BATCH_SIZE,
        })
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.url.trim().is_empty() {
            return Err(StoreError::Config("url is empty".into()));
        }
        if self.collection.trim().is_empty() {
            return Err(StoreError::Config("collection is empty".into()));
        }
        if self.dimension == 0 {
            return Err(StoreError::Config("dimension must be > 0".into()));
        }
        if self.insert_batch == 0 {
            return Err(StoreError::Config("insert_batch must be > 0".into()));
        }
        Ok(())
    }

    /// Effective collection name, namespace-prefixed when configured.
    pub fn collection_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}_{}", self.collection),
            None => self.collection.clone(),
        }
    }

    /// The vector space the collection is created with.
    pub fn vector_space(&self) -> VectorSpace {
        VectorSpace {
            size: self.dimension,
            distance: self.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> StoreConfig {
        StoreConfig {
            url: "http://localhost:6334".into(),
            api_key: None,
            namespace: None,
            collection: "pages".into(),
            dimension: 1536,
            distance: DistanceKind::Dot,
            insert_batch: INSERT_BATCH_SIZE,
        }
    }

    #[test]
    fn metric_names_parse() {
        assert_eq!(DistanceKind::parse("dot_product"), Some(DistanceKind::Dot));
        assert_eq!(DistanceKind::parse("cosine"), Some(DistanceKind::Cosine));
        assert_eq!(DistanceKind::parse("euclidean"), Some(DistanceKind::Euclid));
        assert_eq!(DistanceKind::parse("manhattan"), None);
    }

    #[test]
    fn namespace_prefixes_collection_name() {
        let mut cfg = base_config();
        assert_eq!(cfg.collection_name(), "pages");
        cfg.namespace = Some("prod".into());
        assert_eq!(cfg.collection_name(), "prod_pages");
    }

    #[test]
    fn validate_rejects_zero_dimension() {
        let mut cfg = base_config();
        cfg.dimension = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_base_config() {
        assert!(base_config().validate().is_ok());
    }
}
