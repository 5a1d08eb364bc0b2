use std::collections::HashMap;

use tracing::{debug, warn};

use crate::guidelines::client::GuidelineSource;
use crate::guidelines::region::Region;

/// Outcome of a guideline lookup. A failed lookup stays `Unavailable`;
/// it is never replaced with a stand-in amount.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Resolved(f64),
    Unavailable(String),
}

impl Lookup {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Lookup::Resolved(amount) => Some(*amount),
            Lookup::Unavailable(_) => None,
        }
    }
}

/// Memoizing front for a [`GuidelineSource`], scoped to one report run.
///
/// Each `(region, size)` pair reaches the source at most once, whether the
/// lookup succeeded or failed.
pub struct GuidelineClient<S> {
    source: S,
    cache: HashMap<(Region, u32), Lookup>,
    remote_calls: usize,
}

impl<S: GuidelineSource> GuidelineClient<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            remote_calls: 0,
        }
    }

    pub async fn lookup(&mut self, region: Region, size: u32) -> Lookup {
        if let Some(cached) = self.cache.get(&(region, size)) {
            debug!("Guideline cache hit for {} size {}", region, size);
            return cached.clone();
        }

        self.remote_calls += 1;
        let outcome = match self.source.fetch(region, size).await {
            Ok(amount) => {
                debug!("Guideline for {} size {}: {:.2}", region, size, amount);
                Lookup::Resolved(amount)
            }
            Err(e) => {
                warn!("Guideline lookup failed for {} size {}: {}", region, size, e);
                Lookup::Unavailable(e.to_string())
            }
        };

        self.cache.insert((region, size), outcome.clone());
        outcome
    }

    /// Number of lookups that actually reached the source
    pub fn remote_calls(&self) -> usize {
        self.remote_calls
    }
}


#[cfg(test)]
mod tests {
    use super::stub::StubSource;
    use super::*;

    #[tokio::test]
    async fn test_repeated_lookups_hit_source_once() {
        let mut client = GuidelineClient::new(StubSource::standard());

        for _ in 0..5 {
            assert_eq!(
                client.lookup(Region::Contiguous, 2).await,
                Lookup::Resolved(20_000.0)
            );
        }
        assert_eq!(client.remote_calls(), 1);
    }

    #[tokio::test]
    async fn test_regions_are_cached_separately() {
        let mut client = GuidelineClient::new(StubSource::standard());

        client.lookup(Region::Contiguous, 2).await;
        client.lookup(Region::Alaska, 2).await;
        client.lookup(Region::Alaska, 2).await;
        assert_eq!(client.remote_calls(), 2);
        assert_eq!(
            *client.source.calls.borrow(),
            vec![(Region::Contiguous, 2), (Region::Alaska, 2)]
        );
    }

    #[tokio::test]
    async fn test_failure_is_unavailable_and_cached() {
        let mut client = GuidelineClient::new(StubSource::standard());

        let first = client.lookup(Region::Contiguous, 5).await;
        assert!(matches!(first, Lookup::Unavailable(_)));
        assert_eq!(first.amount(), None);

        client.lookup(Region::Contiguous, 5).await;
        assert_eq!(client.remote_calls(), 1);

        // a failed size does not block others
        assert_eq!(
            client.lookup(Region::Contiguous, 4).await.amount(),
            Some(25_000.0)
        );
    }
}
