//! Failure classification policy.
//!
//! Decides whether a failure raised while enhancing a prompt is handed back
//! to the caller or masked by the local fallback template. The rule matches
//! on message text and must stay byte-compatible with the existing clients:
//! any of [`SURFACED_MESSAGE_FRAGMENTS`] in the message, or a `Type`/`Network`
//! kind, surfaces the failure. Everything else degrades.

use std::fmt;

/// Message fragments that mark a failure as a transport or protocol problem.
pub const SURFACED_MESSAGE_FRAGMENTS: &[&str] = &[
    "HTTP error",
    "fetch",
    "404",
    "401",
    "403",
    "429",
    "500",
    "Invalid response format",
];

/// Declared kind of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx status from the model service
    Http,
    /// 2xx body without `choices[0].message.content`
    Format,
    /// Connection-level failure (DNS, refused, timeout)
    Network,
    /// Generic type error, e.g. a request that could not be built
    Type,
    /// Body that is not valid JSON
    Decode,
    /// Anything else raised locally
    Local,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Http => "http",
            FailureKind::Format => "format",
            FailureKind::Network => "network",
            FailureKind::Type => "type",
            FailureKind::Decode => "decode",
            FailureKind::Local => "local",
        };
        f.write_str(label)
    }
}

/// What the client does with a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Re-raise to the caller
    Surface,
    /// Return the fallback template instead
    Degrade,
}

pub fn classify(kind: FailureKind, message: &str) -> Disposition {
    if matches!(kind, FailureKind::Type | FailureKind::Network) {
        return Disposition::Surface;
    }

    if SURFACED_MESSAGE_FRAGMENTS
        .iter()
        .any(|fragment| message.contains(fragment))
    {
        Disposition::Surface
    } else {
        Disposition::Degrade
    }
}
