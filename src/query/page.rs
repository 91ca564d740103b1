use crate::user_config::QueryConfig;

/// A validated page request.
///
/// Built from raw query-string values, which clients may omit or mangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub search: String,
    pub skip: usize,
    pub limit: usize,
}

impl PageRequest {
    /// Parse raw `skip`, `limit` and `search` values.
    ///
    /// - `skip`: missing, unparseable or negative → `0`
    /// - `limit`: missing or unparseable → `config.default_limit`;
    ///   `<= 0` → `0` (empty page); above `config.max_limit` → clamped
    /// - `search`: missing → empty (matches everything)
    #[must_use]
    pub fn from_raw(
        raw_skip: Option<&str>,
        raw_limit: Option<&str>,
        raw_search: Option<&str>,
        config: &QueryConfig,
    ) -> Self {
        let skip = raw_skip
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        let limit = match raw_limit.and_then(|raw| raw.trim().parse::<i64>().ok()) {
            None => widen(config.default_limit),
            Some(n) => usize::try_from(n)
                .unwrap_or(0)
                .min(widen(config.max_limit)),
        };
        Self {
            search: raw_search.unwrap_or_default().to_string(),
            skip,
            limit,
        }
    }
}

fn widen(n: u32) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
