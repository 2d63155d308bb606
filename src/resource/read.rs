//! Reading source files from disk.

use std::fs;
use std::path::Path;

use crate::diagnostic::PluginError;

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, PluginError> {
    let bytes = fs::read(path).map_err(|e| PluginError::io(path, e))?;
    decode_utf8(&bytes)
        .map(str::to_owned)
        .ok_or_else(|| PluginError::InvalidUtf8 {
            path: path.to_path_buf(),
        })
}

/// Decode bytes as UTF-8, stripping BOM if present.
pub fn decode_utf8(buf: &[u8]) -> Option<&str> {
    let buf = buf.strip_prefix(b"\xef\xbb\xbf").unwrap_or(buf);
    std::str::from_utf8(buf).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_decode_utf8_strips_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"@import \"tailwindcss\";");
        assert_eq!(decode_utf8(&bytes), Some("@import \"tailwindcss\";"));
    }

    #[test]
    fn test_decode_utf8_invalid() {
        assert!(decode_utf8(&[0xff, 0xfe]).is_none());
    }

    #[test]
    fn test_read_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shadow.css");
        fs::write(&path, ".a { color: red }").unwrap();
        assert_eq!(read_text(&path).unwrap(), ".a { color: red }");
    }

    #[test]
    fn test_read_text_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.css");
        assert!(matches!(read_text(&missing), Err(PluginError::Io { .. })));

        let binary = dir.path().join("binary.css");
        fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_text(&binary), Err(PluginError::InvalidUtf8 { .. })));
    }
}
