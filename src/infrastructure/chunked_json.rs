// Chunked JSON streaming utilities
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;

pub const FRAME_CONTENT_TYPE: &str = "application/x-raah-frames";

/// Create a chunked streaming response of length-prefixed JSON frames
pub fn chunked_json_stream<S, T>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + Sync + 'static,
{
    let byte_stream = stream.then(move |msg| async move { encode_frame(&msg, compress).await });

    let body = Body::from_stream(byte_stream);

    // Frames are compressed individually, so no Content-Encoding on the response itself
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, FRAME_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize a single message to a frame: 4-byte big-endian length, then the payload
pub async fn encode_frame<T: Serialize>(msg: &T, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(msg)?;

    let payload = if compress {
        brotli_compress(&json).await?
    } else {
        json
    };

    let length = payload.len() as u32;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Wrap a stream into a framed response, falling back to a bare status on failure
pub fn stream_response<S, T>(stream: S, compress: bool) -> impl IntoResponse
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + Sync + 'static,
{
    match chunked_json_stream(stream, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Buf;

    #[tokio::test]
    async fn test_frame_layout() {
        let mut buf = encode_frame(&serde_json::json!({ "activeBuses": 142 }), false)
            .await
            .unwrap();

        let length = buf.get_u32() as usize;
        assert_eq!(length, buf.remaining());
        assert_eq!(&buf[..], br#"{"activeBuses":142}"#);
    }

    #[tokio::test]
    async fn test_stream_body_concatenates_frames() {
        let items = futures::stream::iter(vec![1u32, 22, 333]);
        let response = chunked_json_stream(items, false).unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], FRAME_CONTENT_TYPE);

        let mut body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let mut decoded = Vec::new();
        while body.has_remaining() {
            let length = body.get_u32() as usize;
            let payload = body.split_to(length);
            decoded.push(serde_json::from_slice::<u32>(&payload).unwrap());
        }
        assert_eq!(decoded, vec![1, 22, 333]);
    }
}
