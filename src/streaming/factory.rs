//! Stream Factory
//!
//! Turns a provider's SSE response body into a [`DeltaStream`]. The shape of
//! the decode loop is the same for every provider; only the JSON envelope the
//! delta is pulled out of differs, which is what [`DeltaExtractor`] captures.

use std::io::Cursor;

use futures_util::{Stream, StreamExt};
use tokio_util::codec::{AnyDelimiterCodec, FramedRead};
use tokio_util::io::StreamReader;

use super::sse::{SseLine, classify_line};
use super::types::DeltaStream;
use crate::error::AdapterError;
use crate::types::ProviderId;

/// Pulls the incremental text out of one parsed `data:` payload.
pub type DeltaExtractor = fn(&serde_json::Value) -> Option<String>;

/// Knobs for [`StreamFactory::delta_stream`].
#[derive(Debug, Clone)]
pub struct SseDecodeOptions {
    /// Provider the stream belongs to, for logs and error messages.
    pub provider: ProviderId,
    /// Fail the stream after this many unparsable `data:` lines in a row.
    /// `None` skips malformed lines indefinitely.
    pub max_consecutive_malformed: Option<usize>,
}

impl SseDecodeOptions {
    pub const fn new(provider: ProviderId) -> Self {
        Self {
            provider,
            max_consecutive_malformed: None,
        }
    }

    pub const fn with_max_consecutive_malformed(mut self, limit: usize) -> Self {
        self.max_consecutive_malformed = Some(limit);
        self
    }
}

/// Outcome of feeding one line through the decoder.
enum LineOutcome {
    Delta(String),
    Nothing,
    Malformed,
}

fn decode_line(line: &str, extractor: DeltaExtractor, provider: ProviderId) -> LineOutcome {
    let payload = match classify_line(line) {
        SseLine::Data(payload) => payload,
        SseLine::Ignore | SseLine::Done => return LineOutcome::Nothing,
    };
    match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(value) => match extractor(&value) {
            Some(delta) if !delta.is_empty() => LineOutcome::Delta(delta),
            _ => LineOutcome::Nothing,
        },
        Err(e) => {
            tracing::debug!(provider = %provider, error = %e, "skipping malformed SSE line");
            LineOutcome::Malformed
        }
    }
}

/// Counts malformed lines in a row and decides when to give up.
struct MalformedGuard {
    limit: Option<usize>,
    run: usize,
}

impl MalformedGuard {
    /// Record an outcome; returns an error once the configured limit is hit.
    fn observe(&mut self, outcome: &LineOutcome, provider: ProviderId) -> Option<AdapterError> {
        match outcome {
            LineOutcome::Malformed => self.run += 1,
            LineOutcome::Delta(_) => self.run = 0,
            LineOutcome::Nothing => {}
        }
        match self.limit {
            Some(limit) if limit > 0 && self.run >= limit => Some(AdapterError::unknown(format!(
                "{provider} stream produced {} consecutive malformed events",
                self.run
            ))),
            _ => None,
        }
    }
}

/// Stream Factory
pub struct StreamFactory;

impl StreamFactory {
    /// Decode a byte stream of SSE lines into text deltas.
    ///
    /// Chunks may split lines (and characters) anywhere; the output depends
    /// only on the concatenated bytes. Lines are framed on `\n` and decoded
    /// lossily, so one line of invalid UTF-8 is skipped like any other
    /// malformed line. The unterminated last line is decoded at end of body.
    /// Malformed `data:` lines are skipped unless `options` sets an escalation
    /// limit. A transport error is yielded once and ends the stream. The byte
    /// stream is owned by the returned stream and dropped with it on every
    /// exit path.
    pub fn delta_stream<S, B, E>(
        byte_stream: S,
        extractor: DeltaExtractor,
        options: SseDecodeOptions,
    ) -> DeltaStream
    where
        S: Stream<Item = Result<B, E>> + Send + 'static,
        B: AsRef<[u8]> + Send + 'static,
        E: Into<AdapterError> + Send + 'static,
    {
        let provider = options.provider;
        // Transport errors cross the AsyncRead boundary as io::Error and are
        // unwrapped again by `From<AnyDelimiterCodecError>`.
        let reader = StreamReader::new(byte_stream.map(|chunk| match chunk {
            Ok(bytes) => Ok(Cursor::new(bytes)),
            Err(e) => {
                let error: AdapterError = e.into();
                Err(std::io::Error::other(error))
            }
        }));
        let codec = AnyDelimiterCodec::new(b"\n".to_vec(), Vec::new());

        let out = async_stream::stream! {
            let mut lines = Box::pin(FramedRead::new(reader, codec));
            let mut guard = MalformedGuard {
                limit: options.max_consecutive_malformed,
                run: 0,
            };

            while let Some(frame) = lines.next().await {
                let frame = match frame {
                    Ok(frame) => frame,
                    Err(e) => {
                        let error = AdapterError::from(e);
                        tracing::debug!(provider = %provider, error = %error, "stream read failed");
                        yield Err(error);
                        return;
                    }
                };
                let line = String::from_utf8_lossy(&frame);
                let outcome = decode_line(&line, extractor, provider);
                if let Some(error) = guard.observe(&outcome, provider) {
                    yield Err(error);
                    return;
                }
                if let LineOutcome::Delta(delta) = outcome {
                    yield Ok(delta);
                }
            }
            tracing::debug!(provider = %provider, "stream finished");
        };
        Box::pin(out)
    }

    /// Decode a successful streaming response.
    pub fn from_response(
        response: reqwest::Response,
        extractor: DeltaExtractor,
        options: SseDecodeOptions,
    ) -> DeltaStream {
        Self::delta_stream(response.bytes_stream(), extractor, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn text_field(v: &serde_json::Value) -> Option<String> {
        v.get("t").and_then(|t| t.as_str()).map(str::to_string)
    }

    async fn collect(chunks: Vec<&'static str>, options: SseDecodeOptions) -> Vec<Result<String, AdapterError>> {
        let byte_stream = futures::stream::iter(
            chunks
                .into_iter()
                .map(|c| Ok::<_, AdapterError>(c.as_bytes().to_vec())),
        );
        StreamFactory::delta_stream(byte_stream, text_field, options)
            .collect()
            .await
    }

    fn opts() -> SseDecodeOptions {
        SseDecodeOptions::new(ProviderId::OpenAi)
    }

    #[tokio::test]
    async fn yields_deltas_in_order_and_skips_noise() {
        let out = collect(
            vec![
                ": ping\n",
                "data: {\"t\":\"Hel\"}\n\n",
                "data: {\"t\":\"\"}\n",
                "data: {\"other\":1}\n",
                "data: {\"t\":\"lo\"}\ndata: [DONE]\n",
            ],
            opts(),
        )
        .await;
        let texts: Vec<String> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["Hel".to_string(), "lo".to_string()]);
    }

    #[tokio::test]
    async fn malformed_line_between_valid_ones_is_skipped() {
        let out = collect(
            vec!["data: {\"t\":\"a\"}\ndata: {oops\ndata: {\"t\":\"b\"}\n"],
            opts(),
        )
        .await;
        let texts: Vec<String> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn flushes_unterminated_last_line() {
        let out = collect(vec!["data: {\"t\":\"a\"}\ndata: {\"t\":\"b\"}"], opts()).await;
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].as_deref().unwrap(), "b");
    }

    #[tokio::test]
    async fn escalates_after_consecutive_malformed_lines_when_configured() {
        let out = collect(
            vec!["data: {\"t\":\"a\"}\ndata: x\ndata: y\ndata: z\ndata: {\"t\":\"b\"}\n"],
            opts().with_max_consecutive_malformed(3),
        )
        .await;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_deref().unwrap(), "a");
        assert_eq!(out[1].as_ref().unwrap_err().code, ErrorCode::UnknownError);
    }

    #[tokio::test]
    async fn valid_line_resets_the_malformed_run() {
        let out = collect(
            vec!["data: x\ndata: y\ndata: {\"t\":\"a\"}\ndata: z\ndata: {\"t\":\"b\"}\n"],
            opts().with_max_consecutive_malformed(3),
        )
        .await;
        let texts: Vec<String> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn multibyte_character_split_across_chunks_survives() {
        let text = "data: {\"t\":\"你好\"}\n".as_bytes();
        // Cut inside the first CJK character (3 bytes each).
        let (a, b) = text.split_at(14);
        let chunks = vec![Ok::<_, AdapterError>(a.to_vec()), Ok(b.to_vec())];
        let out: Vec<_> =
            StreamFactory::delta_stream(futures::stream::iter(chunks), text_field, opts())
                .collect()
                .await;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].as_deref().unwrap(), "你好");
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_skipped_without_ending_stream() {
        let mut body = b"data: {\"t\":\"a\"}\ndata: \xff\xfe\n".to_vec();
        body.extend_from_slice(b"data: {\"t\":\"b\"}\n");
        let chunks = vec![Ok::<_, AdapterError>(body)];
        let out: Vec<_> =
            StreamFactory::delta_stream(futures::stream::iter(chunks), text_field, opts())
                .collect()
                .await;
        let texts: Vec<String> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn transport_error_is_yielded_once_and_ends_stream() {
        let items: Vec<Result<Vec<u8>, AdapterError>> = vec![
            Ok(b"data: {\"t\":\"a\"}\n".to_vec()),
            Err(AdapterError::network_timeout("reset")),
            Ok(b"data: {\"t\":\"b\"}\n".to_vec()),
        ];
        let out: Vec<_> =
            StreamFactory::delta_stream(futures::stream::iter(items), text_field, opts())
                .collect()
                .await;
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_deref().unwrap(), "a");
        assert_eq!(out[1].as_ref().unwrap_err().code, ErrorCode::NetworkTimeout);
    }
}
