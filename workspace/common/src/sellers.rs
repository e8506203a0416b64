use serde::{Deserialize, Serialize};

/// Aggregated sales for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerRecord {
    pub crop: String,
    pub total_sales: f64,
}

impl SellerRecord {
    pub fn new(crop: impl Into<String>, total_sales: f64) -> Self {
        Self {
            crop: crop.into(),
            total_sales,
        }
    }
}

/// Response of the best/worst sellers endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SellersSummary {
    pub best_sellers: Vec<SellerRecord>,
    pub worst_sellers: Vec<SellerRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_summary() {
        let body = r#"{
            "best_sellers": [{"Crop": "Rice", "TotalSales": 1520}, {"Crop": "Wheat", "TotalSales": 980.5}],
            "worst_sellers": [{"Crop": "Barley", "TotalSales": 12}]
        }"#;
        let summary: SellersSummary = serde_json::from_str(body).unwrap();

        assert_eq!(summary.best_sellers.len(), 2);
        assert_eq!(summary.best_sellers[0], SellerRecord::new("Rice", 1520.0));
        assert_eq!(summary.best_sellers[1].total_sales, 980.5);
        assert_eq!(summary.worst_sellers[0].crop, "Barley");
    }

    #[test]
    fn test_decode_empty_summary() {
        let summary: SellersSummary =
            serde_json::from_str(r#"{"best_sellers": [], "worst_sellers": []}"#).unwrap();
        assert!(summary.best_sellers.is_empty());
        assert!(summary.worst_sellers.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let result = serde_json::from_str::<SellersSummary>(r#"{"best_sellers": []}"#);
        assert!(result.is_err());
    }
}
