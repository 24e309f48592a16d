// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Factory snapshots on disk.
//!
//! A graph is written as a JSON document (catalog variants by name, links by node reference) and
//! handed out as a [`Download`]: a named file body that can be saved or turned into a data URI.

use std::io;
use std::path::PathBuf;

use crate::model::{FactoryGraph, GraphError, IdError, ParseNodeRefError};

mod download;
mod json;

pub use download::{Download, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME};
pub use json::JsonSerializer;

/// Turns a graph into a shareable text document.
pub trait GraphSerializer {
    fn serialize(&self, graph: &FactoryGraph) -> Result<String, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid factory json")]
    Json(#[from] serde_json::Error),
    #[error("node {node} uses unknown equipment {name:?}")]
    UnknownEquipment { node: String, name: String },
    #[error("invalid {field} {value:?}")]
    InvalidId {
        field: &'static str,
        value: String,
        #[source]
        source: IdError,
    },
    #[error("invalid node reference {value:?}")]
    InvalidNodeRef {
        value: String,
        #[source]
        source: ParseNodeRefError,
    },
    #[error("snapshot violates the factory graph rules")]
    Graph(#[from] GraphError),
}
