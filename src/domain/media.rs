//! Inline data URLs for uploaded photos and videos.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes `bytes` as `data:<mime>;base64,<payload>`.
/// When the caller has no MIME type (or an empty one) it is sniffed from the content.
pub fn to_data_url(bytes: &[u8], mime: Option<&str>) -> String {
    let mime = mime
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| sniff_mime(bytes));
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Best-effort content type from magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
        "video/mp4"
    } else if bytes.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]) {
        "video/webm"
    } else {
        FALLBACK_MIME
    }
}

/// Whether a url is already inline (and therefore large); the editor shows a summary instead.
pub fn is_data_url(url: &str) -> bool {
    url.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_mime_wins() {
        assert_eq!(to_data_url(b"abc", Some("image/svg+xml")), "data:image/svg+xml;base64,YWJj");
    }

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_mime(b"\x89PNG\r\n\x1a\nrest"), "image/png");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(b"GIF89a...."), "image/gif");
        assert_eq!(sniff_mime(b"RIFF\0\0\0\0WEBPVP8 "), "image/webp");
        assert_eq!(sniff_mime(b"\0\0\0\x18ftypmp42"), "video/mp4");
        assert_eq!(sniff_mime(&[0x1A, 0x45, 0xDF, 0xA3, 0x01]), "video/webm");
        assert_eq!(sniff_mime(b"plain"), FALLBACK_MIME);
    }

    #[test]
    fn blank_mime_falls_back_to_sniffing() {
        let url = to_data_url(b"GIF87a", Some("  "));
        assert!(url.starts_with("data:image/gif;base64,"));
        assert!(is_data_url(&url));
    }
}
