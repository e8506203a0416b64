use std::collections::HashSet;

use crate::SellerRecord;

/// Distinct crop names offered by the selector, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CropCatalog {
    crops: Vec<String>,
}

impl CropCatalog {
    /// Unions best then worst sellers, dropping repeated names.
    pub fn from_sellers(best: &[SellerRecord], worst: &[SellerRecord]) -> Self {
        let mut seen = HashSet::new();
        let crops = best
            .iter()
            .chain(worst)
            .filter(|record| seen.insert(record.crop.as_str()))
            .map(|record| record.crop.clone())
            .collect();
        Self { crops }
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.crops.iter().any(|c| c == crop)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dedups_in_first_seen_order() {
        let best = vec![SellerRecord::new("Rice", 300.0), SellerRecord::new("Wheat", 200.0)];
        let worst = vec![SellerRecord::new("Wheat", 200.0), SellerRecord::new("Corn", 10.0)];

        let catalog = CropCatalog::from_sellers(&best, &worst);

        assert_eq!(catalog.as_slice(), &["Rice", "Wheat", "Corn"]);
        assert!(catalog.contains("Corn"));
        assert!(!catalog.contains("Barley"));
    }

    #[test]
    fn test_catalog_from_empty_sellers() {
        let catalog = CropCatalog::from_sellers(&[], &[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_catalog_worst_only() {
        let worst = vec![SellerRecord::new("Oats", 1.0), SellerRecord::new("Oats", 1.0)];
        let catalog = CropCatalog::from_sellers(&[], &worst);
        assert_eq!(catalog.len(), 1);
    }
}
