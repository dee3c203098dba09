//! Background image loading.
//!
//! Reading and decoding happen on worker threads so placing an image never
//! blocks input handling. Results come back over an mpsc channel and are
//! drained by the canvas on the UI thread, the same way dropped files and
//! player events are delivered elsewhere in the app.
//!
//! Only the header is decoded: the canvas needs natural dimensions, and the
//! original bytes are embedded as a data URL for the renderer.

use crate::error::{LoadError, LoadResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, ImageReader};
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Identifies one image load from request to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadId(pub u64);

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load-{}", self.0)
    }
}

/// A decoded image ready to be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    /// `data:` URL embedding the original bytes
    pub source: String,
    /// Natural pixel dimensions
    pub natural_size: (u32, u32),
}

/// Decode the header of `bytes` and wrap them as a data URL.
pub fn decode_image(bytes: &[u8]) -> LoadResult<LoadedImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let format = reader.format();
    let (width, height) = reader.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage { width, height });
    }

    let mime = format
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream");
    Ok(LoadedImage {
        source: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        natural_size: (width, height),
    })
}

/// Read and decode an image file.
pub fn load_image_file(path: &Path) -> LoadResult<LoadedImage> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes)
}

/// Whether `path` has an extension of a format the decoder understands.
pub fn is_image_path(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

/// Input for one background load.
#[derive(Debug)]
pub enum LoadSource {
    File(PathBuf),
    Bytes(Vec<u8>),
}

/// Spawns decode workers and collects their results.
#[derive(Debug)]
pub struct ImageLoader {
    tx: Sender<(LoadId, LoadResult<LoadedImage>)>,
    rx: Receiver<(LoadId, LoadResult<LoadedImage>)>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Start loading `source` on a worker thread.
    pub fn spawn(&self, id: LoadId, source: LoadSource) {
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("image-{}", id))
            .spawn(move || {
                let result = match source {
                    LoadSource::File(path) => load_image_file(&path),
                    LoadSource::Bytes(bytes) => decode_image(&bytes),
                };
                // Receiver gone means the canvas was dropped
                let _ = tx.send((id, result));
            });

        if let Err(e) = spawned {
            tracing::warn!(load_id = %id, "Failed to spawn image loader: {}", e);
            let _ = self.tx.send((
                id,
                Err(LoadError::Io {
                    path: PathBuf::new(),
                    source: e,
                }),
            ));
        }
    }

    /// Drain every finished load without blocking.
    pub fn try_drain(&self) -> Vec<(LoadId, LoadResult<LoadedImage>)> {
        let mut finished = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(result) => finished.push(result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        finished
    }

    /// Block until the next load finishes.
    pub fn recv(&self) -> LoadResult<(LoadId, LoadResult<LoadedImage>)> {
        self.rx.recv().map_err(|_| LoadError::Disconnected)
    }
}
