//! Filter initialization from URL query parameters.

use crate::money::Money;
use crate::search::FilterSpec;

impl FilterSpec {
    /// Build a spec from a listing URL's query string.
    ///
    /// Recognised keys: `category` and `brand` (single values), `price`
    /// (`min-max`; only the max is honoured), and `search`. A leading `?` is
    /// ignored. Unknown keys, empty values and unparseable prices leave the
    /// corresponding default in place.
    ///
    /// ```
    /// use storefront_core::search::FilterSpec;
    /// let spec = FilterSpec::from_query_string("?category=Bags&price=0-100&search=day+pack");
    /// assert!(spec.categories.contains("Bags"));
    /// assert_eq!(spec.price_ceiling.amount_cents, 10_000);
    /// assert_eq!(spec.search, "day pack");
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        Self::default().with_query_string(query)
    }

    /// Apply a query string on top of this spec.
    ///
    /// Each recognised parameter that is present and valid replaces the
    /// matching dimension; everything else keeps its current value.
    pub fn with_query_string(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "category" => {
                    self.categories.clear();
                    self.categories.insert(value.to_string());
                }
                "brand" => {
                    self.brands.clear();
                    self.brands.insert(value.to_string());
                }
                "price" => {
                    if let Some(ceiling) = parse_price_max(value) {
                        self.price_ceiling = ceiling;
                    }
                }
                "search" => self.search = value.to_string(),
                other => tracing::trace!(key = other, "ignoring unknown query parameter"),
            }
        }

        self
    }
}

/// Parse the max of a `min-max` price range. A bare number is treated as the
/// max.
fn parse_price_max(range: &str) -> Option<Money> {
    let max = match range.split_once('-') {
        Some((_, max)) => max,
        None => range,
    };
    let max: f64 = max.trim().parse().ok()?;
    if !max.is_finite() || max < 0.0 {
        return None;
    }
    Some(Money::from_dollars(max))
}
