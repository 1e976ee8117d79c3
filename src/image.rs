//! Logo encoding: raw image bytes to an embeddable data URI

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{ReportError, ReportResult};

/// Encode image bytes into a `data:{mime};base64,...` URI for the header logo
///
/// The format is sniffed from the file signature; unreadable or unrecognized
/// input is an error so a broken logo never reaches the generator.
pub fn encode_image(bytes: &[u8]) -> ReportResult<String> {
    if bytes.is_empty() {
        return Err(ReportError::EmptyImage);
    }
    let mime = sniff_mime(bytes).ok_or(ReportError::UnrecognizedImageFormat)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(b"\xff\xd8\xff") {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if looks_like_svg(bytes) {
        Some("image/svg+xml")
    } else {
        None
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    let trimmed = text.trim_start();
    trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && text.contains("<svg"))
}
