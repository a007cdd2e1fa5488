//! Memoization of successful responses.

use sieve_cache::ShardedSieveCache;

use crate::format::Response;
use crate::request::Request;

/// A bounded, thread-safe memo of successful responses keyed by the full
/// normalized request.
#[derive(Clone)]
pub struct ResponseCache {
    cache: ShardedSieveCache<Request, Response>,
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("cache", &self.cache.len())
            .finish()
    }
}

impl ResponseCache {
    /// Returns `None` for a zero capacity.
    pub fn new(capacity: usize) -> Option<Self> {
        ShardedSieveCache::new(capacity)
            .ok()
            .map(|cache| ResponseCache { cache })
    }

    pub fn get(&self, request: &Request) -> Option<Response> {
        self.cache.get(request)
    }

    pub fn insert(&self, request: Request, response: Response) -> bool {
        self.cache.insert(request, response)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Selection;
    use crate::request::Mode;
    use pretty_assertions::assert_eq;

    fn request(regions: Option<&str>) -> Request {
        Request {
            infinitive: "ot̆axu".into(),
            subject: Selection::All,
            object: None,
            mode: Mode::Tense("present".into()),
            applicative: false,
            causative: false,
            optative: false,
            regions: regions.map(|filter| crate::region::Region::parse_filter(filter).unwrap()),
        }
    }

    #[test]
    fn zero_capacity_disables() {
        assert!(ResponseCache::new(0).is_none());
    }

    #[test]
    fn keyed_by_the_whole_request() {
        let cache = ResponseCache::new(16).unwrap();
        assert!(cache.is_empty());
        cache.insert(request(None), Response::default());
        assert_eq!(cache.get(&request(None)), Some(Response::default()));
        assert_eq!(cache.get(&request(Some("HO"))), None);
        assert_eq!(cache.len(), 1);
    }
}
