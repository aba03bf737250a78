//! W3C Trace Context propagation for outgoing Upspinner API calls.
//!
//! Adds `traceparent` and `tracestate` headers so the API side can link its
//! traces to the span of the `send` call. Without a registered global
//! propagator this adds nothing.

use opentelemetry::propagation::Injector;
use opentelemetry::{Context, global};
use reqwest::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

struct RequestHeaders<'a>(&'a mut HeaderMap);

impl Injector for RequestHeaders<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let Ok(name) = HeaderName::from_bytes(key.as_bytes())
            && let Ok(value) = HeaderValue::from_str(&value)
        {
            self.0.insert(name, value);
        }
    }
}

/// The trace headers for the current context, empty without a propagator.
pub fn trace_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    let cx = Context::current();
    global::get_text_map_propagator(|propagator| {
        propagator.inject_context(&cx, &mut RequestHeaders(&mut headers));
    });
    headers
}

/// Attach the current trace context to an outgoing request.
pub fn inject_trace_context(builder: RequestBuilder) -> RequestBuilder {
    builder.headers(trace_headers())
}
