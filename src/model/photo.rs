// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Photo glue: image bytes ⇄ `data:` URL.
//!
//! The core treats a person's `photo` as an opaque string; these helpers exist
//! for front-ends that want to inline a local image into the snapshot.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn parse_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_owned(), bytes))
}

/// Best-effort MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_round_trip() {
        let url = data_url("image/png", b"\x89PNG");
        assert!(url.starts_with("data:image/png;base64,"));
        let (mime, bytes) = parse_data_url(&url).expect("parses");
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, b"\x89PNG");
    }

    #[test]
    fn rejects_non_base64_urls() {
        assert!(parse_data_url("http://example.com/a.png").is_none());
        assert!(parse_data_url("data:image/png,rawpayload").is_none());
        assert!(parse_data_url("data:image/png;base64,!!!").is_none());
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for_path(Path::new("a.png")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("b.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("c.txt")), None);
        assert_eq!(mime_for_path(Path::new("noext")), None);
    }
}
