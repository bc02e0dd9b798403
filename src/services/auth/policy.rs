use std::str::FromStr;

/// What the identity step does when a presented bearer token fails verification.
///
/// Absent or non-bearer `Authorization` headers are never failures: both
/// policies treat them as anonymous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthFailurePolicy {
    /// Continue as anonymous, exactly as if no token had been sent.
    #[default]
    FailOpenAnonymous,
    /// Reject the request with 401.
    FailClosedReject,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown auth failure policy: {0}")]
pub struct UnknownPolicy(String);

impl FromStr for AuthFailurePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "fail_open" | "open" | "anonymous" => Ok(Self::FailOpenAnonymous),
            "fail_closed" | "closed" | "reject" => Ok(Self::FailClosedReject),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_spellings() {
        for s in ["fail_open", "FAIL-OPEN", " open ", "anonymous"] {
            assert_eq!(
                s.parse::<AuthFailurePolicy>().unwrap(),
                AuthFailurePolicy::FailOpenAnonymous
            );
        }
        for s in ["fail_closed", "Fail-Closed", "reject"] {
            assert_eq!(
                s.parse::<AuthFailurePolicy>().unwrap(),
                AuthFailurePolicy::FailClosedReject
            );
        }
    }

    #[test]
    fn rejects_unknown() {
        assert!("maybe".parse::<AuthFailurePolicy>().is_err());
    }
}
