//! Charset detection and decoding of fetched pages.
//!
//! Detection order: Content-Type header, `<meta>` tags in the first 4KB,
//! then a chardetng heuristic over the same prefix.

use crate::fetcher::{
    errors::FetchError,
    types::{Charset, PageResponse},
};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use url::Url;

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

pub fn decode_page(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let encoding = detect_encoding(content_type, &body_bytes);
    let charset = Charset::from_encoding(encoding);
    let (decoded, _encoding, had_errors) = encoding.decode(&body_bytes);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }

    Ok(PageResponse {
        url_final,
        status,
        body_utf8: decoded.into_owned(),
        charset,
        fetched_at: Utc::now(),
    })
}

fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = encoding_from_capture(&HEADER_CHARSET_REGEX, content_type) {
        return encoding;
    }

    // Only the document head is interesting for <meta charset>.
    let prefix = &body_bytes[..body_bytes.len().min(4096)];
    let prefix_str = String::from_utf8_lossy(prefix);
    if let Some(encoding) = encoding_from_capture(&META_CHARSET_REGEX, &prefix_str) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(prefix, false);
    detector.guess(None, true)
}

fn encoding_from_capture(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_charset_from_content_type() {
        let body = b"<html><head><title>Test</title></head></html>";
        let encoding = detect_encoding("text/html; charset=utf-8", body);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn detects_charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"euc-kr\"><title>Test</title></head></html>";
        let encoding = detect_encoding("text/html", body);
        assert_eq!(encoding, encoding_rs::EUC_KR);
    }

    #[test]
    fn decodes_euc_kr_body() {
        // "뉴스" encoded as EUC-KR
        let body = Bytes::from_static(&[0xB4, 0xBA, 0xBD, 0xBA]);
        let page = decode_page(
            Url::parse("https://news.example.com/a").unwrap(),
            StatusCode::OK,
            body,
            "text/html; charset=euc-kr",
        )
        .unwrap();
        assert_eq!(page.body_utf8, "뉴스");
        assert_eq!(page.charset, Charset::EucKr);
    }

    #[test]
    fn decodes_utf8_body() {
        let body = Bytes::from("안녕하세요 world".as_bytes().to_vec());
        let page = decode_page(
            Url::parse("https://example.com").unwrap(),
            StatusCode::OK,
            body,
            "text/html; charset=utf-8",
        )
        .unwrap();
        assert_eq!(page.body_utf8, "안녕하세요 world");
        assert_eq!(page.charset, Charset::Utf8);
    }
}
