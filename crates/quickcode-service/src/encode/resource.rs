//! Attached resource access for shared content.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};

/// A readable resource that can report how many bytes it holds.
pub trait ResourceStream: Read {
    /// Bytes that can be read without blocking.
    ///
    /// ## Errors
    /// Propagates I/O failures of the underlying source.
    fn available(&self) -> io::Result<usize>;
}

/// Opens streams for resource handles.
pub trait ResourceReader {
    type Stream<'a>: ResourceStream
    where
        Self: 'a;

    /// ## Errors
    /// Returns `NotFound` for unknown handles, or any I/O error of the source.
    fn open_stream(&self, handle: &str) -> io::Result<Self::Stream<'_>>;
}

/// In-memory resources keyed by handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceReader {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryResourceReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `handle`, replacing any previous resource.
    pub fn insert(&mut self, handle: impl Into<String>, bytes: Vec<u8>) {
        self.resources.insert(handle.into(), bytes);
    }

    #[must_use]
    pub fn with(mut self, handle: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(handle, bytes);
        self
    }
}

impl ResourceReader for MemoryResourceReader {
    type Stream<'a> = MemoryStream<'a>;

    fn open_stream(&self, handle: &str) -> io::Result<MemoryStream<'_>> {
        self.resources
            .get(handle)
            .map(|bytes| MemoryStream(Cursor::new(bytes.as_slice())))
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no resource for {handle}"))
            })
    }
}

/// Stream over a borrowed byte buffer.
#[derive(Debug)]
pub struct MemoryStream<'a>(Cursor<&'a [u8]>);

impl Read for MemoryStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl ResourceStream for MemoryStream<'_> {
    fn available(&self) -> io::Result<usize> {
        let len = self.0.get_ref().len();
        let position = usize::try_from(self.0.position()).unwrap_or(len);
        Ok(len.saturating_sub(position))
    }
}
