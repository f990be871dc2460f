//! Random-access byte sources for uploads.

use bytes::Bytes;
use reqwest::Body;
use std::{
    future::Future,
    io::{self, SeekFrom},
    path::{Path, PathBuf},
};
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncSeekExt},
};
use tokio_util::codec::{BytesCodec, FramedRead};

/// A byte range of a file ready to be sent as a request body.
#[derive(Debug)]
pub struct Chunk {
    pub body: Body,
    pub len: u64,
}

/// Read-only file borrowed by the orchestrator for the duration of one upload.
pub trait FileHandle: Send + Sync {
    fn name(&self) -> &str;

    fn size(&self) -> u64;

    /// Bytes in `[start, end)`.
    ///
    /// # Errors
    /// Will return `Err` if the range is out of bounds or the source can not be read
    fn slice(&self, start: u64, end: u64) -> impl Future<Output = io::Result<Chunk>> + Send;
}

fn check_range(start: u64, end: u64, size: u64) -> io::Result<u64> {
    if start > end || end > size {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid range {start}..{end} for size {size}"),
        ));
    }
    Ok(end - start)
}

/// A file on the local filesystem, streamed from disk one range at a time.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl LocalFile {
    /// # Errors
    /// Will return `Err` if the path does not exist or is not a regular file
    pub async fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;

        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a file: {}", path.display()),
            ));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn slice(&self, start: u64, end: u64) -> io::Result<Chunk> {
        let len = check_range(start, end, self.size)?;

        let mut file = File::open(&self.path).await?;
        file.seek(SeekFrom::Start(start)).await?;

        let stream = FramedRead::new(file.take(len), BytesCodec::new());

        Ok(Chunk {
            body: Body::wrap_stream(stream),
            len,
        })
    }
}

/// An in-memory file, handy for tests and for data that is already buffered.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    data: Bytes,
}

impl MemoryFile {
    #[must_use]
    pub fn new<N: Into<String>, D: Into<Bytes>>(name: N, data: D) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    async fn slice(&self, start: u64, end: u64) -> io::Result<Chunk> {
        let len = check_range(start, end, self.size())?;

        let to_usize = |n: u64| {
            usize::try_from(n).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
        };

        let bytes = self.data.slice(to_usize(start)?..to_usize(end)?);

        Ok(Chunk {
            body: Body::from(bytes),
            len,
        })
    }
}
