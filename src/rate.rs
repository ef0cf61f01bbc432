//! Request rate limit information reported by the API.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use reqwest::header::HeaderMap;

const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";
const HEADER_RATE_RETRY: &str = "Retry-After";

/// Rate limit state as reported by the most recent response.
///
/// Counts are unsigned: a negative header value is treated as unparsable
/// and reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rate {
    /// Maximum number of requests permitted per window.
    pub limit: u64,
    /// Requests remaining in the current window.
    pub remaining: u64,
    /// When the current window refills.
    pub reset: Option<DateTime<Utc>>,
    /// When requests are permitted again after the limit was reached.
    pub retry: Option<DateTime<Utc>>,
}

impl Rate {
    /// Parse rate headers, resolving relative seconds against the current time.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_headers_at(headers, Utc::now())
    }

    /// Parse rate headers, resolving relative seconds against `now`.
    ///
    /// Absent or unparsable counts become zero. Absent, unparsable or zero
    /// second offsets leave the corresponding time unset.
    pub fn from_headers_at(headers: &HeaderMap, now: DateTime<Utc>) -> Self {
        Self {
            limit: header_value(headers, HEADER_RATE_LIMIT).unwrap_or(0),
            remaining: header_value(headers, HEADER_RATE_REMAINING).unwrap_or(0),
            reset: seconds_from(headers, HEADER_RATE_RESET, now),
            retry: seconds_from(headers, HEADER_RATE_RETRY, now),
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "limit: {}, remaining: {}", self.limit, self.remaining)?;
        if let Some(reset) = self.reset {
            write!(f, ", reset at {}", reset.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        if let Some(retry) = self.retry {
            write!(f, ", retry at {}", retry.format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        Ok(())
    }
}

fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

fn seconds_from(headers: &HeaderMap, name: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let seconds: i64 = header_value(headers, name)?;
    if seconds == 0 {
        return None;
    }
    now.checked_add_signed(Duration::try_seconds(seconds)?)
}

/// Holder of the last observed [`Rate`].
///
/// Snapshots are replaced whole, never merged, so readers see either the
/// previous or the next snapshot and nothing in between.
#[derive(Debug, Default)]
pub(crate) struct RateTracker {
    current: RwLock<Rate>,
}

impl RateTracker {
    pub(crate) fn update(&self, headers: &HeaderMap) {
        let rate = Rate::from_headers(headers);
        tracing::debug!(%rate, "rate limit updated");
        self.replace(rate);
    }

    pub(crate) fn replace(&self, rate: Rate) {
        // A poisoned lock still guards a whole snapshot.
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = rate;
    }

    pub(crate) fn read(&self) -> Rate {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::header::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_parse_all_headers() {
        let now = Utc::now();
        let rate = Rate::from_headers_at(
            &headers(&[
                ("x-ratelimit-limit", "10"),
                ("x-ratelimit-remaining", "20"),
                ("x-ratelimit-reset", "500"),
                ("retry-after", "30"),
            ]),
            now,
        );

        assert_eq!(rate.limit, 10);
        assert_eq!(rate.remaining, 20);
        assert_eq!(rate.reset, Some(now + Duration::seconds(500)));
        assert_eq!(rate.retry, Some(now + Duration::seconds(30)));
    }

    #[test]
    fn test_missing_headers_are_zero() {
        let rate = Rate::from_headers(&HeaderMap::new());
        assert_eq!(rate, Rate::default());
    }

    #[test]
    fn test_negative_counts_read_as_zero() {
        let rate = Rate::from_headers(&headers(&[
            ("x-ratelimit-limit", "-1"),
            ("x-ratelimit-remaining", "-20"),
        ]));
        assert_eq!(rate.limit, 0);
        assert_eq!(rate.remaining, 0);
    }

    #[test]
    fn test_unparsable_and_zero_values() {
        let rate = Rate::from_headers(&headers(&[
            ("x-ratelimit-limit", "ten"),
            ("x-ratelimit-remaining", "-1"),
            ("x-ratelimit-reset", "0"),
            ("retry-after", "soon"),
        ]));
        assert_eq!(rate, Rate::default());
    }

    #[test]
    fn test_tracker_replaces_whole_snapshot() {
        let tracker = RateTracker::default();
        tracker.update(&headers(&[
            ("x-ratelimit-limit", "10"),
            ("x-ratelimit-reset", "60"),
        ]));
        assert!(tracker.read().reset.is_some());

        tracker.update(&headers(&[("x-ratelimit-limit", "5")]));
        let rate = tracker.read();
        assert_eq!(rate.limit, 5);
        assert_eq!(rate.reset, None);
    }

    #[test]
    fn test_concurrent_replace_never_tears() {
        let tracker = Arc::new(RateTracker::default());
        let epoch = DateTime::<Utc>::UNIX_EPOCH;

        let writers: Vec<_> = (1..=16u64)
            .map(|nonce| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        tracker.replace(Rate {
                            limit: nonce,
                            remaining: nonce,
                            reset: Some(epoch + Duration::seconds(nonce as i64)),
                            retry: Some(epoch + Duration::seconds(nonce as i64)),
                        });
                    }
                })
            })
            .collect();

        let reader = {
            let tracker = Arc::clone(&tracker);
            std::thread::spawn(move || {
                for _ in 0..2000 {
                    let rate = tracker.read();
                    if rate.limit == 0 {
                        continue;
                    }
                    let tag = Some(epoch + Duration::seconds(rate.limit as i64));
                    assert_eq!(rate.remaining, rate.limit);
                    assert_eq!(rate.reset, tag);
                    assert_eq!(rate.retry, tag);
                }
            })
        };

        for writer in writers {
            writer.join().unwrap();
        }
        reader.join().unwrap();

        let last = tracker.read();
        assert!((1..=16).contains(&last.limit));
        assert_eq!(last.remaining, last.limit);
    }
}
