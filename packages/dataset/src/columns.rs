//! Canonical column schema and alternate-header mapping.
//!
//! The source spreadsheet has gone through several export tools, so the
//! same field shows up under different header spellings. Each recognized
//! spelling maps to one canonical [`Column`]; anything else is ignored.

/// A recognized column of the transaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Locality name.
    Locality,
    /// Transaction year.
    Year,
    /// Total sales value.
    TotalSales,
    /// Total units sold.
    TotalSold,
    /// Flat weighted-average rate.
    FlatRate,
    /// Office weighted-average rate.
    OfficeRate,
    /// Shop weighted-average rate.
    ShopRate,
    /// Total carpet area supplied.
    CarpetArea,
}

impl Column {
    /// Maps a raw header cell to its canonical column.
    ///
    /// Matching is whitespace-trimmed and case-insensitive. Returns
    /// `None` for headers downstream logic does not use.
    #[must_use]
    pub fn from_header(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "final location" | "area" | "locality" => Some(Self::Locality),
            "year" => Some(Self::Year),
            "total_sales - igr" | "total_sales" | "total sales" => Some(Self::TotalSales),
            "total sold - igr" | "total_sold" | "total sold" => Some(Self::TotalSold),
            "flat - weighted average rate" | "flat_avg_rate" | "flat_rate" => Some(Self::FlatRate),
            "office - weighted average rate" | "office_avg_rate" | "office_rate" => {
                Some(Self::OfficeRate)
            }
            "shop - weighted average rate" | "shop_avg_rate" | "shop_rate" => Some(Self::ShopRate),
            "total carpet area supplied (sqft)" | "total_carpet_area" | "carpet_area" => {
                Some(Self::CarpetArea)
            }
            _ => None,
        }
    }
}
