//! Thin adapter around `qdrant-client` to isolate API usage.
//!
//! Concentrates every Qdrant interaction behind [`QdrantStore`], keeping
//! the verbose builder pattern out of the pipeline and the rest of the
//! code decoupled from the client crate.

use std::collections::HashMap;

use qdrant_client::Qdrant;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointId, PointStruct, SearchPointsBuilder,
    UpsertPointsBuilder, Value as QValue, Vector, VectorParamsBuilder, Vectors, value, vectors,
};
use services::retry::with_retry;
use services::uuid::stable_uuid;
use tracing::{debug, info, warn};

use crate::config::{DistanceKind, StoreConfig};
use crate::errors::StoreError;
use crate::record::{Document, RetrievalMatch, title_from_source};
use crate::store::DocumentStore;

/// Qdrant-backed [`DocumentStore`].
///
/// Encapsulates the underlying client, the resolved collection name, and
/// the collection's vector space.
pub struct QdrantStore {
    client: Qdrant,
    collection: String,
    cfg: StoreConfig,
}

impl QdrantStore {
    /// Creates a new store from the given configuration.
    ///
    /// # Errors
    /// Returns `StoreError::Config` for invalid configuration and
    /// `StoreError::Qdrant` if the client fails to initialize.
    pub fn new(cfg: StoreConfig) -> Result<Self, StoreError> {
        cfg.validate()?;

        let mut builder = Qdrant::from_url(&cfg.url);
        if let Some(key) = &cfg.api_key {
            builder = builder.api_key(key.clone());
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Qdrant(e.to_string()))?;

        Ok(Self {
            client,
            collection: cfg.collection_name(),
            cfg,
        })
    }

    /// Effective collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    async fn ensure(&self) -> Result<(), StoreError> {
        let space = self.cfg.vector_space();
        info!(
            "ensuring collection '{}' with size={} distance={:?}",
            self.collection, space.size, space.distance
        );

        // Probe first: an existing collection is a no-op.
        match self.client.collection_info(&self.collection).await {
            Ok(_) => {
                debug!("collection '{}' already exists", self.collection);
                return Ok(());
            }
            Err(err) => {
                warn!(
                    "collection '{}' not found, will be created (error={})",
                    self.collection, err
                );
            }
        }

        let distance = match space.distance {
            DistanceKind::Cosine => Distance::Cosine,
            DistanceKind::Dot => Distance::Dot,
            DistanceKind::Euclid => Distance::Euclid,
        };

        let created = self
            .client
            .create_collection(
                CreateCollectionBuilder::new(&self.collection)
                    .vectors_config(VectorParamsBuilder::new(space.size as u64, distance)),
            )
            .await;

        match created {
            Ok(_) => {
                info!("collection '{}' created", self.collection);
                Ok(())
            }
            // Lost a create race after the probe; still success.
            Err(err) if already_exists(&err.to_string()) => {
                debug!("collection '{}' created concurrently", self.collection);
                Ok(())
            }
            Err(err) => Err(StoreError::Qdrant(err.to_string())),
        }
    }

    async fn insert(&self, documents: &[Document]) -> Result<usize, StoreError> {
        if documents.is_empty() {
            debug!("no documents provided for insert");
            return Ok(0);
        }
        for doc in documents {
            if doc.vector.len() != self.cfg.dimension {
                return Err(StoreError::VectorSizeMismatch {
                    got: doc.vector.len(),
                    want: self.cfg.dimension,
                });
            }
        }

        let mut written = 0usize;
        for group in documents.chunks(self.cfg.insert_batch) {
            let points = build_points(group);
            with_retry("vector upsert", || {
                let points = points.clone();
                async move {
                    self.client
                        .upsert_points(UpsertPointsBuilder::new(&self.collection, points))
                        .await
                        .map_err(|e| StoreError::Qdrant(e.to_string()))
                }
            })
            .await?;
            written += group.len();
        }

        info!(
            "upserted {} documents into collection '{}'",
            written, self.collection
        );
        Ok(written)
    }

    async fn query(&self, vector: Vec<f32>, limit: u64) -> Result<Vec<RetrievalMatch>, StoreError> {
        debug!(
            "searching '{}' with limit={} dim={}",
            self.collection,
            limit,
            vector.len()
        );

        let res = self
            .client
            .search_points(
                SearchPointsBuilder::new(&self.collection, vector, limit).with_payload(true),
            )
            .await
            .map_err(|e| StoreError::Qdrant(e.to_string()))?;

        let mut out = Vec::with_capacity(res.result.len());
        for point in res.result {
            out.push(scored_point_to_match(point.score, &point.payload));
        }

        debug!("search completed: {} hits", out.len());
        Ok(out)
    }
}

impl DocumentStore for QdrantStore {
    fn ensure_collection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), StoreError>> + Send + 'a>>
    {
        Box::pin(self.ensure())
    }

    fn insert_batch<'a>(
        &'a self,
        documents: &'a [Document],
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<usize, StoreError>> + Send + 'a>>
    {
        Box::pin(self.insert(documents))
    }

    fn search<'a>(
        &'a self,
        vector: Vec<f32>,
        limit: u64,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<RetrievalMatch>, StoreError>> + Send + 'a>,
    > {
        Box::pin(self.query(vector, limit))
    }
}

/// Creation responses that mean the collection is already there.
fn already_exists(message: &str) -> bool {
    message.to_ascii_lowercase().contains("already exists")
}

/// Builds Qdrant points for one insert group.
///
/// Point ids are deterministic over `(source, text)` so re-ingestion
/// upserts instead of duplicating.
fn build_points(documents: &[Document]) -> Vec<PointStruct> {
    let mut pts = Vec::with_capacity(documents.len());

    for doc in documents {
        let mut payload: HashMap<String, QValue> = HashMap::new();
        payload.insert("text".into(), qstring(&doc.text));
        payload.insert("source".into(), qstring(&doc.source));
        payload.insert("timestamp".into(), qstring(&doc.timestamp));

        let pid: PointId = stable_uuid(&format!("{}|{}", doc.source, doc.text))
            .to_string()
            .into();

        let vectors = Vectors {
            vectors_options: Some(vectors::VectorsOptions::Vector(Vector {
                data: doc.vector.clone(),
                indices: None,
                vectors_count: None,
                vector: None,
            })),
        };

        pts.push(PointStruct {
            id: Some(pid),
            payload,
            vectors: Some(vectors),
            ..Default::default()
        });
    }

    pts
}

/// Maps a scored payload onto the retrieval record shape.
fn scored_point_to_match(
    score: f32,
    payload: &HashMap<String, QValue>,
) -> RetrievalMatch {
    let content = payload_str(payload, "text").unwrap_or_default();
    let url = payload_str(payload, "source").unwrap_or_default();
    RetrievalMatch {
        score,
        title: title_from_source(&url),
        content,
        url,
    }
}

/// Wraps a string into a Qdrant `Value`.
fn qstring(s: &str) -> QValue {
    QValue {
        kind: Some(value::Kind::StringValue(s.to_string())),
    }
}

/// Reads a string field from a Qdrant payload.
fn payload_str(payload: &HashMap<String, QValue>, key: &str) -> Option<String> {
    match payload.get(key).and_then(|v| v.kind.as_ref()) {
        Some(value::Kind::StringValue(s)) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document {
            vector: vec![0.0, 1.0],
            text: text.into(),
            source: "https://example.org/a".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn already_exists_classification() {
        assert!(already_exists("Collection `pages` already exists!"));
        assert!(already_exists("ALREADY EXISTS"));
        assert!(!already_exists("deadline exceeded"));
        assert!(!already_exists("invalid vector size"));
    }

    #[test]
    fn points_carry_payload_and_stable_ids() {
        let docs = vec![doc("alpha"), doc("beta")];
        let points = build_points(&docs);
        assert_eq!(points.len(), 2);

        let payload = &points[0].payload;
        assert_eq!(payload_str(payload, "text").as_deref(), Some("alpha"));
        assert_eq!(
            payload_str(payload, "source").as_deref(),
            Some("https://example.org/a")
        );
        assert!(payload_str(payload, "timestamp").is_some());

        // Same document → same id on re-ingestion.
        let again = build_points(&docs);
        assert_eq!(points[0].id, again[0].id);
        assert_ne!(points[0].id, points[1].id);
    }

    #[test]
    fn scored_point_mapping_fills_all_fields() {
        let docs = vec![doc("body text")];
        let points = build_points(&docs);
        let hit = scored_point_to_match(0.87, &points[0].payload);
        assert_eq!(hit.content, "body text");
        assert_eq!(hit.url, "https://example.org/a");
        assert_eq!(hit.title, "example.org");
        assert!((hit.score - 0.87).abs() < f32::EPSILON);
    }
}
