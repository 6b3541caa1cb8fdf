//! Minimal binder reader: DCX wrappers and BND3/BND4 entry tables.
//!
//! Only the subset the census needs: entry ids and names. Entry payloads are
//! never touched, compression formats other than DFLT (zlib) and binder
//! layouts other than the standard msgbnd ones are simply not recognized —
//! the walker treats unrecognized bytes as "not a resource container" and
//! moves on.

use std::io::{self, Read};

use flate2::read::ZlibDecoder;
use fmgcat_scan::{BinderEntry, BinderReader};

const DCX_MAGIC: &[u8] = b"DCX\0";
const BND3_MAGIC: &[u8] = b"BND3";
const BND4_MAGIC: &[u8] = b"BND4";

fn u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    bytes
        .get(offset..offset + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    bytes
        .get(offset..offset + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn i32_le(bytes: &[u8], offset: usize) -> Option<i32> {
    bytes
        .get(offset..offset + 4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

/// Null-terminated byte string at `offset`, decoded as UTF-8 (lossily — a
/// handful of early titles use legacy encodings for Japanese entry names).
fn cstring_at(bytes: &[u8], offset: usize) -> Option<String> {
    let tail = bytes.get(offset..)?;
    let end = tail.iter().position(|&b| b == 0)?;
    Some(String::from_utf8_lossy(&tail[..end]).into_owned())
}

/// Null-terminated UTF-16LE string at `offset`.
fn utf16_at(bytes: &[u8], offset: usize) -> Option<String> {
    let tail = bytes.get(offset..)?;
    let mut units = Vec::new();
    for pair in tail.chunks_exact(2) {
        let unit = u16::from_le_bytes([pair[0], pair[1]]);
        if unit == 0 {
            return Some(String::from_utf16_lossy(&units));
        }
        units.push(unit);
    }
    None
}

/// The bundled [`BinderReader`]: DCX/DFLT decompression plus BND3 and BND4
/// entry tables in their common little-endian msgbnd layouts.
#[derive(Debug, Default)]
pub struct DcxBndReader;

impl DcxBndReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_bnd3(bytes: &[u8]) -> Option<Vec<BinderEntry>> {
        // 0x0C: format byte. 0x74 entries carry an uncompressed size after
        // the name offset, 0x54 entries do not; both carry ids and names.
        let format = *bytes.get(0x0c)?;
        let entry_size = match format {
            0x74 => 0x18,
            0x54 => 0x14,
            _ => return None,
        };
        let count = i32_le(bytes, 0x10)?;
        if count < 0 {
            return None;
        }
        let count = count as usize;
        // The header count is untrusted until the entry table is known to
        // fit the buffer; unrelated binaries can share the magic.
        let table_end = count.checked_mul(entry_size)?.checked_add(0x20)?;
        if table_end > bytes.len() {
            return None;
        }
        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let base = 0x20 + index * entry_size;
            // flags u8 + pad at base; sizes and offsets follow.
            let id = i32_le(bytes, base + 0x0c)?;
            let name_offset = u32_le(bytes, base + 0x10)? as usize;
            let name = cstring_at(bytes, name_offset)?;
            entries.push(BinderEntry { name, id });
        }
        Some(entries)
    }

    fn parse_bnd4(bytes: &[u8]) -> Option<Vec<BinderEntry>> {
        let count = i32_le(bytes, 0x0c)?;
        if count < 0 {
            return None;
        }
        // 0x20: per-entry header size. Only the standard 0x24-byte msgbnd
        // entry layout is recognized.
        let entry_size = u32_le(bytes, 0x20)? as usize;
        if entry_size != 0x24 {
            log::debug!("unsupported BND4 entry header size {entry_size:#x}");
            return None;
        }
        let unicode = *bytes.get(0x30)? != 0;
        let count = count as usize;
        // Same as BND3: never trust the header count before checking the
        // table fits.
        let table_end = count.checked_mul(entry_size)?.checked_add(0x40)?;
        if table_end > bytes.len() {
            return None;
        }
        let mut entries = Vec::with_capacity(count);
        for index in 0..count {
            let base = 0x40 + index * entry_size;
            // flags u8, pad, -1 i32, compressed/uncompressed sizes i64,
            // data offset u32, then id and name offset.
            let id = i32_le(bytes, base + 0x1c)?;
            let name_offset = u32_le(bytes, base + 0x20)? as usize;
            let name = if unicode {
                utf16_at(bytes, name_offset)?
            } else {
                cstring_at(bytes, name_offset)?
            };
            entries.push(BinderEntry { name, id });
        }
        Some(entries)
    }
}

impl BinderReader for DcxBndReader {
    fn is_compressed(&self, bytes: &[u8]) -> bool {
        bytes.starts_with(DCX_MAGIC)
    }

    fn decompress(&self, bytes: &[u8]) -> io::Result<Vec<u8>> {
        if !bytes.starts_with(DCX_MAGIC) {
            return Err(invalid("missing DCX magic"));
        }
        let format = bytes
            .get(0x28..0x2c)
            .ok_or_else(|| invalid("truncated DCX header"))?;
        if format != b"DFLT" {
            return Err(invalid(format!(
                "unsupported DCX compression {:?}",
                String::from_utf8_lossy(format)
            )));
        }
        let uncompressed_size =
            u32_be(bytes, 0x1c).ok_or_else(|| invalid("truncated DCX header"))? as usize;

        // Compressed data begins after the DCA block.
        let search_end = bytes.len().min(0x100);
        let dca = bytes[..search_end]
            .windows(4)
            .position(|w| w == b"DCA\0")
            .ok_or_else(|| invalid("DCX without DCA block"))?;
        let dca_size = u32_be(bytes, dca + 4).ok_or_else(|| invalid("truncated DCA block"))? as usize;
        let data = bytes
            .get(dca + dca_size..)
            .ok_or_else(|| invalid("DCX data offset out of range"))?;

        let mut out = Vec::with_capacity(uncompressed_size);
        ZlibDecoder::new(data).read_to_end(&mut out)?;
        if out.len() != uncompressed_size {
            return Err(invalid(format!(
                "DCX size mismatch: expected {uncompressed_size}, got {}",
                out.len()
            )));
        }
        Ok(out)
    }

    fn parse_entries(&self, bytes: &[u8]) -> Option<Vec<BinderEntry>> {
        if bytes.starts_with(BND3_MAGIC) {
            Self::parse_bnd3(bytes)
        } else if bytes.starts_with(BND4_MAGIC) {
            Self::parse_bnd4(bytes)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn write_u32_le(buf: &mut Vec<u8>, offset: usize, value: u32) {
        buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Build a minimal BND3 (format 0x74) with the given (id, name) entries.
    fn make_bnd3(entries: &[(i32, &str)]) -> Vec<u8> {
        let entry_size = 0x18;
        let names_start = 0x20 + entries.len() * entry_size;
        let mut buf = vec![0u8; names_start];
        buf[..4].copy_from_slice(BND3_MAGIC);
        buf[4..12].copy_from_slice(b"07D7R6\0\0");
        buf[0x0c] = 0x74;
        write_u32_le(&mut buf, 0x10, entries.len() as u32);
        for (index, (id, name)) in entries.iter().enumerate() {
            let base = 0x20 + index * entry_size;
            let name_offset = buf.len() as u32;
            buf.extend_from_slice(name.as_bytes());
            buf.push(0);
            write_u32_le(&mut buf, base + 0x0c, *id as u32);
            write_u32_le(&mut buf, base + 0x10, name_offset);
        }
        buf
    }

    /// Build a minimal BND4 with UTF-16 names.
    fn make_bnd4(entries: &[(i32, &str)], unicode: bool) -> Vec<u8> {
        let entry_size = 0x24;
        let names_start = 0x40 + entries.len() * entry_size;
        let mut buf = vec![0u8; names_start];
        buf[..4].copy_from_slice(BND4_MAGIC);
        write_u32_le(&mut buf, 0x0c, entries.len() as u32);
        write_u32_le(&mut buf, 0x20, entry_size as u32);
        buf[0x30] = unicode as u8;
        for (index, (id, name)) in entries.iter().enumerate() {
            let base = 0x40 + index * entry_size;
            let name_offset = buf.len() as u32;
            if unicode {
                for unit in name.encode_utf16() {
                    buf.extend_from_slice(&unit.to_le_bytes());
                }
                buf.extend_from_slice(&[0, 0]);
            } else {
                buf.extend_from_slice(name.as_bytes());
                buf.push(0);
            }
            write_u32_le(&mut buf, base + 0x1c, *id as u32);
            write_u32_le(&mut buf, base + 0x20, name_offset);
        }
        buf
    }

    /// Wrap raw bytes in a DCX/DFLT container.
    fn make_dcx(payload: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        let compressed = encoder.finish().unwrap();

        let mut buf = vec![0u8; 0x4c];
        buf[..4].copy_from_slice(DCX_MAGIC);
        buf[0x1c..0x20].copy_from_slice(&(payload.len() as u32).to_be_bytes());
        buf[0x20..0x24].copy_from_slice(&(compressed.len() as u32).to_be_bytes());
        buf[0x28..0x2c].copy_from_slice(b"DFLT");
        buf[0x44..0x48].copy_from_slice(b"DCA\0");
        buf[0x48..0x4c].copy_from_slice(&8u32.to_be_bytes());
        buf.extend_from_slice(&compressed);
        buf
    }

    #[test]
    fn bnd3_entries_round_trip() {
        let reader = DcxBndReader::new();
        let bytes = make_bnd3(&[(1, "会話.fmg"), (11, "武器名.fmg")]);
        let entries = reader.parse_entries(&bytes).unwrap();
        assert_eq!(
            entries,
            vec![
                BinderEntry { name: "会話.fmg".into(), id: 1 },
                BinderEntry { name: "武器名.fmg".into(), id: 11 },
            ]
        );
    }

    #[test]
    fn bnd4_utf16_entries_round_trip() {
        let reader = DcxBndReader::new();
        let bytes = make_bnd4(&[(11, r"N:\GR\data\INTERROOT_win64\msg\engUS\WeaponName.fmg")], true);
        let entries = reader.parse_entries(&bytes).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 11);
        assert!(entries[0].name.ends_with("WeaponName.fmg"));
    }

    #[test]
    fn bnd4_narrow_names_round_trip() {
        let reader = DcxBndReader::new();
        let bytes = make_bnd4(&[(70, "menu.fmg")], false);
        let entries = reader.parse_entries(&bytes).unwrap();
        assert_eq!(entries[0].name, "menu.fmg");
    }

    #[test]
    fn unknown_layouts_are_not_recognized() {
        let reader = DcxBndReader::new();
        assert!(reader.parse_entries(b"not a binder").is_none());
        assert!(reader.parse_entries(b"").is_none());
        // Unknown BND3 format byte.
        let mut bytes = make_bnd3(&[(1, "a.fmg")]);
        bytes[0x0c] = 0x2e;
        assert!(reader.parse_entries(&bytes).is_none());
        // Truncated entry table.
        let bytes = make_bnd3(&[(1, "a.fmg")]);
        assert!(reader.parse_entries(&bytes[..0x28]).is_none());
    }

    #[test]
    fn oversized_entry_counts_are_not_recognized() {
        // A non-resource binary sharing the magic can carry an arbitrary
        // count; it must come back as "not a container", not abort the
        // process trying to allocate for it.
        let reader = DcxBndReader::new();

        let mut bnd4 = vec![0u8; 0x40];
        bnd4[..4].copy_from_slice(BND4_MAGIC);
        write_u32_le(&mut bnd4, 0x0c, 0x7fff_ffff);
        write_u32_le(&mut bnd4, 0x20, 0x24);
        assert!(reader.parse_entries(&bnd4).is_none());

        let mut bnd3 = vec![0u8; 0x20];
        bnd3[..4].copy_from_slice(BND3_MAGIC);
        bnd3[0x0c] = 0x74;
        write_u32_le(&mut bnd3, 0x10, 0x7fff_ffff);
        assert!(reader.parse_entries(&bnd3).is_none());
    }

    #[test]
    fn dcx_round_trips_through_zlib() {
        let reader = DcxBndReader::new();
        let payload = make_bnd3(&[(10, "アイテム名.fmg")]);
        let wrapped = make_dcx(&payload);

        assert!(reader.is_compressed(&wrapped));
        assert!(!reader.is_compressed(&payload));

        let unwrapped = reader.decompress(&wrapped).unwrap();
        assert_eq!(unwrapped, payload);
        let entries = reader.parse_entries(&unwrapped).unwrap();
        assert_eq!(entries[0].name, "アイテム名.fmg");
    }

    #[test]
    fn non_dflt_compression_is_an_error() {
        let reader = DcxBndReader::new();
        let mut wrapped = make_dcx(b"payload");
        wrapped[0x28..0x2c].copy_from_slice(b"KRAK");
        assert!(reader.decompress(&wrapped).is_err());
    }

    #[test]
    fn truncated_dcx_is_an_error() {
        let reader = DcxBndReader::new();
        let wrapped = make_dcx(b"payload");
        assert!(reader.decompress(&wrapped[..0x20]).is_err());
    }
}
