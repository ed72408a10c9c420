// HTTP response utilities for JSON+Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use serde::Serialize;
use tokio::io::AsyncReadExt;

/// True when Accept-Encoding lists `br` with a non-zero q-value
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(|entry| coding_weight(entry, "br") > 0.0))
        .unwrap_or(false)
}

/// q-value of `entry` when it names `coding`, else 0. Missing q means 1.
fn coding_weight(entry: &str, coding: &str) -> f32 {
    let mut parts = entry.split(';');
    let name = parts.next().unwrap_or_default().trim();
    if !name.eq_ignore_ascii_case(coding) {
        return 0.0;
    }

    for param in parts {
        if let Some((key, value)) = param.split_once('=') {
            if key.trim().eq_ignore_ascii_case("q") {
                return value
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|q| q.is_finite())
                    .unwrap_or(0.0);
            }
        }
    }
    1.0
}

/// Serialize a value to JSON with optional Brotli compression
pub async fn json_response<T: Serialize>(
    data: &T,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let json_bytes = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let (body_bytes, content_encoding) = if compress {
        let cursor = std::io::Cursor::new(json_bytes.as_slice());
        let mut encoder = BrotliEncoder::new(cursor);
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            "Compressed: {} -> {} bytes",
            json_bytes.len(),
            compressed.len()
        );
        (compressed, Some("br"))
    } else {
        (json_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()))
        .header(header::VARY, "accept-encoding");

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, br;q=0.9"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("BR"));
        assert!(accepts_brotli(&headers));
    }

    #[test]
    fn test_brotli_refused_with_zero_weight() {
        let mut headers = HeaderMap::new();
        for refusal in ["br;q=0", "gzip, br; q=0.0", "br;q=junk", "brotli", "gzip;q=1, br;q=0"] {
            headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(refusal));
            assert!(!accepts_brotli(&headers), "{}", refusal);
        }

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("br;q=0, br;q=0.5"));
        assert!(accepts_brotli(&headers));
    }

    #[tokio::test]
    async fn test_plain_and_compressed_bodies() {
        let plain = json_response(&vec!["Original"], false).await.unwrap();
        assert!(plain.headers().get(header::CONTENT_ENCODING).is_none());
        assert_eq!(plain.headers()[header::CONTENT_LENGTH], "12");

        let compressed = json_response(&vec!["Original"], true).await.unwrap();
        assert_eq!(compressed.headers()[header::CONTENT_ENCODING], "br");
    }
}
