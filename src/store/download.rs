// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::StoreError;

pub const DOWNLOAD_FILE_NAME: &str = "factory.json";
pub const DOWNLOAD_MIME: &str = "text/json";

/// A serialized factory ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    file_name: &'static str,
    mime: &'static str,
    body: String,
}

impl Download {
    pub fn new(body: String) -> Self {
        Self { file_name: DOWNLOAD_FILE_NAME, mime: DOWNLOAD_MIME, body }
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// `data:` URI carrying the body, for pasting into a browser.
    pub fn data_uri(&self) -> String {
        let encoded = STANDARD.encode(self.body.as_bytes());
        format!("data:{};charset=utf-8;base64,{encoded}", self.mime)
    }

    /// Writes the body to `dir/<file_name>`, replacing any previous download.
    ///
    /// Goes through a temp file in `dir` that is renamed into place.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(dir)
            .map_err(|source| StoreError::Io { path: dir.to_path_buf(), source })?;

        let path = dir.join(self.file_name);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_nanos())
            .unwrap_or(0);
        let tmp_path = dir.join(format!(".fabrik.tmp.{}.{nanos}", self.file_name));

        replace_via_temp(&tmp_path, &path, |file| file.write_all(self.body.as_bytes()))?;

        tracing::info!(path = %path.display(), bytes = self.body.len(), "wrote download");
        Ok(path)
    }
}

/// Writes `tmp_path` with `write`, then renames it over `path`. The temp file never outlives a
/// failure.
fn replace_via_temp(
    tmp_path: &Path,
    path: &Path,
    write: impl FnOnce(&mut fs::File) -> io::Result<()>,
) -> Result<(), StoreError> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)
        .map_err(|source| StoreError::Io { path: tmp_path.to_path_buf(), source })?;
    let written = write(&mut file);
    drop(file);

    if let Err(source) = written {
        let _ = fs::remove_file(tmp_path);
        return Err(StoreError::Io { path: tmp_path.to_path_buf(), source });
    }
    if let Err(source) = rename_overwrite(tmp_path, path) {
        let _ = fs::remove_file(tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }
    Ok(())
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}
