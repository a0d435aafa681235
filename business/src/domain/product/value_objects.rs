use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Active => write!(f, "active"),
            ProductStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceSort {
    Ascending,
    Descending,
    #[default]
    Unsorted,
}

impl PriceSort {
    /// Lenient parse used for query strings: `asc` / `desc`, anything else is unsorted.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("asc") => PriceSort::Ascending,
            Some("desc") => PriceSort::Descending,
            _ => PriceSort::Unsorted,
        }
    }
}

impl std::fmt::Display for PriceSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceSort::Ascending => write!(f, "asc"),
            PriceSort::Descending => write!(f, "desc"),
            PriceSort::Unsorted => write!(f, "unsorted"),
        }
    }
}
