/// Tuning knobs for [`crate::embed::CachingResolver`]. Lives outside the
/// normalization core entirely — `evaluate` and `quote` take no
/// configuration (spec section 6.1/6.2 pin their signatures down to
/// exactly `Env`/`Expr` and `&[Label]`/`Value`), so anything configurable
/// has to live in the ambient layer around them instead.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Maximum number of resolved embeds to keep cached. Exceeding it
    /// stops caching new entries rather than evicting old ones — good
    /// enough for the bounded, mostly-static embed sets this crate
    /// expects.
    pub cache_capacity: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig { cache_capacity: 1024 }
    }
}
