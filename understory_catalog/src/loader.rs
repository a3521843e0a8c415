// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog loading: nested records in, validated [`Catalog`] out.
//!
//! ## Source format
//!
//! The source is an ordered array of records. Every field is optional:
//!
//! ```json
//! [
//!   {
//!     "displayName": "Maps",
//!     "descriptionText": "Display and navigate maps",
//!     "children": [
//!       { "displayName": "Display a map", "screenIdentifier": "DisplayMap" }
//!     ]
//!   }
//! ]
//! ```
//!
//! `storyboardName` is accepted as an alias of `screenIdentifier`. Unknown keys are ignored.
//!
//! ## Validation
//!
//! Loading is all-or-nothing. Any of the following aborts with a [`CatalogLoadError`]:
//!
//! - the source is not an array of mappings, or a field has the wrong type;
//! - two siblings share a non-empty display name;
//! - a record has both children and a screen identifier.
//!
//! Absent fields default to empty. A record without a display name is kept with an
//! empty name and reported with a warning. A record without children becomes a leaf;
//! a leaf without a screen identifier is kept with an empty [`ScreenId`] and also
//! reported with a warning.

use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{Node, NodeId, NodeKind, ScreenId};

/// One entry of the catalog source, as it appears on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Display name; unique among siblings when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description shown when the entry is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    /// Screen opened by a leaf.
    #[serde(
        default,
        alias = "storyboardName",
        skip_serializing_if = "Option::is_none"
    )]
    pub screen_identifier: Option<String>,
    /// Nested entries in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CatalogRecord>,
}

impl CatalogRecord {
    /// A leaf record opening `screen`.
    pub fn leaf(name: impl Into<String>, screen: impl Into<String>) -> Self {
        Self {
            display_name: Some(name.into()),
            screen_identifier: Some(screen.into()),
            ..Default::default()
        }
    }

    /// A category record grouping `children`.
    pub fn category(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            display_name: Some(name.into()),
            children,
            ..Default::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description_text = Some(text.into());
        self
    }

    /// Number of records in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

/// Fatal catalog load failure. No partial catalog is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// The catalog resource could not be read.
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The source is not an array of mappings, or a field has the wrong type.
    #[error("malformed catalog source: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two siblings share a display name.
    #[error("display name {name:?} at {location} is already used by a sibling")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Position of the second record, e.g. `[1].children[0]`.
        location: String,
    },

    /// A record has both children and a screen identifier.
    #[error("category {name:?} at {location} also names screen {screen:?}")]
    CategoryWithScreen {
        /// Display name of the record.
        name: String,
        /// The stray screen identifier.
        screen: String,
        /// Position of the record.
        location: String,
    },

    /// The source holds more records than node ids can address.
    #[error("catalog has more than {max} records", max = u32::MAX)]
    TooLarge,
}

/// Build a catalog from records. Alias of [`Catalog::from_records`].
pub fn load_catalog(records: Vec<CatalogRecord>) -> Result<Catalog, CatalogLoadError> {
    Catalog::from_records(records)
}

impl Catalog {
    /// Build a catalog from already-deserialized records.
    pub fn from_records(records: Vec<CatalogRecord>) -> Result<Self, CatalogLoadError> {
        let mut catalog = Self::default();
        catalog.roots = catalog.insert_siblings(records, None, "")?;
        tracing::info!(
            nodes = catalog.len(),
            roots = catalog.roots.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a JSON catalog source.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogLoadError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(source)?;
        Self::from_records(records)
    }

    /// Parse a JSON catalog source from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogLoadError> {
        let records: Vec<CatalogRecord> = serde_json::from_reader(reader)?;
        Self::from_records(records)
    }

    /// Read and parse a JSON catalog file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening catalog");
        let file = std::fs::File::open(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn insert_siblings(
        &mut self,
        records: Vec<CatalogRecord>,
        parent: Option<NodeId>,
        prefix: &str,
    ) -> Result<Vec<NodeId>, CatalogLoadError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut ids = Vec::with_capacity(records.len());
        for (i, record) in records.into_iter().enumerate() {
            let location = format!("{prefix}[{i}]");
            let name = record.display_name.clone().unwrap_or_default();
            if name.is_empty() {
                tracing::warn!(%location, "record has no display name");
            } else if !seen.insert(name.clone()) {
                return Err(CatalogLoadError::DuplicateName { name, location });
            }
            ids.push(self.insert_record(record, name, parent, &location)?);
        }
        Ok(ids)
    }

    fn insert_record(
        &mut self,
        record: CatalogRecord,
        name: String,
        parent: Option<NodeId>,
        location: &str,
    ) -> Result<NodeId, CatalogLoadError> {
        let idx = u32::try_from(self.nodes.len()).map_err(|_| CatalogLoadError::TooLarge)?;
        let id = NodeId::new(idx);
        let CatalogRecord {
            description_text,
            screen_identifier,
            children,
            ..
        } = record;

        let kind = if children.is_empty() {
            if screen_identifier.is_none() {
                tracing::warn!(%name, %location, "leaf has no screen identifier");
            }
            NodeKind::Leaf {
                screen: ScreenId::new(screen_identifier.unwrap_or_default()),
            }
        } else if let Some(screen) = screen_identifier {
            return Err(CatalogLoadError::CategoryWithScreen {
                name,
                screen,
                location: location.to_owned(),
            });
        } else {
            NodeKind::Category {
                children: Vec::new(),
            }
        };
        tracing::trace!(?id, %name, %location, leaf = kind_is_leaf(&kind), "insert node");

        // Reserve the slot before descending so ids stay in pre-order.
        self.nodes.push(Node {
            name,
            description: description_text.unwrap_or_default(),
            kind,
            parent,
        });

        if !children.is_empty() {
            let child_ids =
                self.insert_siblings(children, Some(id), &format!("{location}.children"))?;
            self.nodes[id.idx()].kind = NodeKind::Category {
                children: child_ids,
            };
        }
        Ok(id)
    }
}

fn kind_is_leaf(kind: &NodeKind) -> bool {
    matches!(kind, NodeKind::Leaf { .. })
}
