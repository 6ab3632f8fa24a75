//! Pluggable resolution of `Embed` payloads (spec section 6.3): something
//! outside the core (an import, a host-provided primitive) that produces
//! a [`Value`] given a key.

use std::cell::RefCell;
use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::value::Value;

pub trait Resolver {
    type Key: AsRef<[u8]>;

    fn resolve(&self, key: &Self::Key) -> Result<Value, ResolveError>;
}

/// Wraps a [`Resolver`], memoizing successful resolutions by the SHA-256
/// digest of their key. Repeated embeds of the same key (a shared import,
/// say) resolve once.
pub struct CachingResolver<R: Resolver> {
    inner: R,
    cache: RefCell<HashMap<[u8; 32], Value>>,
    config: ResolverConfig,
}

impl<R: Resolver> CachingResolver<R> {
    pub fn new(inner: R, config: ResolverConfig) -> Self {
        CachingResolver { inner, cache: RefCell::new(HashMap::new()), config }
    }

    pub fn resolve(&self, key: &R::Key) -> Result<Value, ResolveError> {
        let digest: [u8; 32] = Sha256::digest(key.as_ref()).into();
        if let Some(cached) = self.cache.borrow().get(&digest) {
            return Ok(cached.clone());
        }
        let value = self.inner.resolve(key)?;
        let mut cache = self.cache.borrow_mut();
        if cache.len() < self.config.cache_capacity {
            cache.insert(digest, value.clone());
        }
        Ok(value)
    }
}
