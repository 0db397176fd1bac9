//! Typed filter state and the query-string boundary.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::catalog::Product;

/// Active filter criteria. Every field is optional; an absent or empty
/// field does not constrain the result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterParams {
    /// Case-insensitive title substring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Requested sizes as sent by the client.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    /// Requested color ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Requested brand names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(deserialize_with = "deserialize_flag", skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    #[serde(deserialize_with = "deserialize_flag", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(deserialize_with = "deserialize_flag", skip_serializing_if = "Option::is_none")]
    pub is_hit: Option<bool>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Set the inclusive price bounds.
    pub fn with_price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
    }

    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    pub fn with_hit(mut self, is_hit: bool) -> Self {
        self.is_hit = Some(is_hit);
        self
    }

    /// The trimmed query, if it is not blank.
    pub fn active_query(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Check whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.active_query().is_none()
            && self.sizes.is_empty()
            && self.colors.is_empty()
            && self.brands.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.on_sale.is_none()
            && self.is_new.is_none()
            && self.is_hit.is_none()
    }

    /// Number of active criteria.
    pub fn active_count(&self) -> usize {
        [
            self.active_query().is_some(),
            !self.sizes.is_empty(),
            !self.colors.is_empty(),
            !self.brands.is_empty(),
            self.min_price.is_some(),
            self.max_price.is_some(),
            self.on_sale.is_some(),
            self.is_new.is_some(),
            self.is_hit.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Flag value from the query bag: only the literal `"true"` is true.
pub fn normalize_flag(value: &str) -> bool {
    value == "true"
}

fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
        Flag::Bool(value) => value,
        Flag::Text(text) => normalize_flag(&text),
    }))
}

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog (link declaration) order.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Title A-Z.
    Title,
}

impl SortOrder {
    /// Parse a `sort` value; unknown values keep catalog order.
    pub fn parse(value: &str) -> Self {
        match value {
            "price_asc" => SortOrder::PriceAsc,
            "price_desc" => SortOrder::PriceDesc,
            "title" => SortOrder::Title,
            _ => SortOrder::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "price_asc",
            SortOrder::PriceDesc => "price_desc",
            SortOrder::Title => "title",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Default => "По умолчанию",
            SortOrder::PriceAsc => "Сначала дешевле",
            SortOrder::PriceDesc => "Сначала дороже",
            SortOrder::Title => "По названию",
        }
    }

    /// Stable sort; equal keys keep their catalog order.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortOrder::Default => {}
            SortOrder::PriceAsc => products.sort_by_key(|p| p.current_price()),
            SortOrder::PriceDesc => products.sort_by_key(|p| std::cmp::Reverse(p.current_price())),
            SortOrder::Title => products.sort_by_cached_key(|p| p.title.to_lowercase()),
        }
    }
}

/// Page, filters and order parsed from a navigation query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Requested page (1-indexed).
    pub page: usize,
    pub filters: FilterParams,
    pub sort: SortOrder,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            filters: FilterParams::default(),
            sort: SortOrder::Default,
        }
    }
}

impl SearchParams {
    pub fn new(filters: FilterParams) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Parse `pag=2&brands=ARA,CAPRICE&isNew=true&q=...`.
    ///
    /// A leading `?` is ignored. Unknown keys, a page that is not a
    /// positive number and prices that are not numbers are dropped; the
    /// last occurrence of a repeated key wins.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        let filters = &mut params.filters;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "pag" => params.page = value.trim().parse().ok().filter(|p| *p > 0).unwrap_or(1),
                "q" => filters.query = Some(value.into_owned()),
                "sizes" => filters.sizes = split_list(&value),
                "colors" => filters.colors = split_list(&value),
                "brands" => filters.brands = split_list(&value),
                "minPrice" => filters.min_price = value.trim().parse().ok(),
                "maxPrice" => filters.max_price = value.trim().parse().ok(),
                "onSale" => filters.on_sale = Some(normalize_flag(&value)),
                "isNew" => filters.is_new = Some(normalize_flag(&value)),
                "isHit" => filters.is_hit = Some(normalize_flag(&value)),
                "sort" => params.sort = SortOrder::parse(&value),
                _ => {}
            }
        }

        debug!(
            page = params.page,
            active_filters = params.filters.active_count(),
            sort = params.sort.as_str(),
            "parsed query string"
        );
        params
    }

    /// Encode back into query-string form; defaults are omitted.
    pub fn to_query_string(&self) -> String {
        let filters = &self.filters;
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(query) = filters.active_query() {
            out.append_pair("q", query);
        }
        for (key, list) in [("sizes", &filters.sizes), ("colors", &filters.colors), ("brands", &filters.brands)] {
            if !list.is_empty() {
                out.append_pair(key, &list.join(","));
            }
        }
        for (key, bound) in [("minPrice", filters.min_price), ("maxPrice", filters.max_price)] {
            if let Some(bound) = bound {
                out.append_pair(key, &bound.to_string());
            }
        }
        for (key, flag) in [("onSale", filters.on_sale), ("isNew", filters.is_new), ("isHit", filters.is_hit)] {
            if let Some(flag) = flag {
                out.append_pair(key, if flag { "true" } else { "false" });
            }
        }
        if self.sort != SortOrder::Default {
            out.append_pair("sort", self.sort.as_str());
        }
        if self.page > 1 {
            out.append_pair("pag", &self.page.to_string());
        }

        out.finish()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
