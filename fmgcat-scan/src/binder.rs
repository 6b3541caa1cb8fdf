//! The binder-reader seam.
//!
//! Low-level container decoding is not this crate's business; the walker
//! only needs to decompress a buffer and enumerate named entries. Anything
//! that can do that — the bundled reader, or a stub in tests — plugs in
//! here.

/// One named entry inside a binder container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderEntry {
    /// The entry's file name (often a full original build path).
    pub name: String,
    /// The binder-assigned entry id.
    pub id: i32,
}

/// Capability for reading binder containers.
pub trait BinderReader {
    /// Whether the buffer is a compressed container wrapper.
    fn is_compressed(&self, bytes: &[u8]) -> bool;

    /// Decompress a wrapper into the raw container bytes.
    fn decompress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>>;

    /// Enumerate the entries of a raw container.
    ///
    /// `None` means the bytes are not a recognized container layout. That is
    /// an expected outcome — unrelated binaries share the extension — and
    /// callers skip the file rather than fail.
    fn parse_entries(&self, bytes: &[u8]) -> Option<Vec<BinderEntry>>;
}
