//! Property catalog: listings, brokerage services, and articles.
//!
//! The catalog is static demo data; listings are immutable at runtime and
//! filtered in memory by the presentation layer.

pub mod fixtures;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commission::DealType;

/// Property kind offered by the brokerage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Office,
    Commercial,
    Building,
}

impl PropertyType {
    /// Translation key of the type label.
    pub fn label_key(&self) -> &'static str {
        match self {
            PropertyType::Office => "properties.filter.office",
            PropertyType::Commercial => "properties.filter.commercial",
            PropertyType::Building => "properties.filter.building",
        }
    }

    /// All property kinds.
    pub fn all() -> &'static [PropertyType] {
        &[
            PropertyType::Office,
            PropertyType::Commercial,
            PropertyType::Building,
        ]
    }
}

/// Listing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Rent,
    Sale,
    Rented,
    Sold,
}

impl PropertyStatus {
    /// Translation key of the status badge.
    pub fn label_key(&self) -> &'static str {
        match self {
            PropertyStatus::Rent => "properties.status.rent",
            PropertyStatus::Sale => "properties.status.sale",
            PropertyStatus::Rented => "properties.status.rented",
            PropertyStatus::Sold => "properties.status.sold",
        }
    }

    /// Whether the listing is still on the market.
    pub fn is_available(&self) -> bool {
        matches!(self, PropertyStatus::Rent | PropertyStatus::Sale)
    }
}

/// Contact details attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A single property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    /// Sale price, or monthly rent for rental listings, in shekels.
    pub price: f64,
    pub area_sqm: f64,
    pub location: String,
    pub address: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub contact: ContactInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Price per square meter, when the area is known.
    pub fn price_per_sqm(&self) -> Option<f64> {
        crate::commission::price_per_sqm(self.price, self.area_sqm)
    }
}

/// A brokerage service line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub deal_type: DealType,
    pub property_type: PropertyType,
    /// Commission in percent of the deal price (sales), or months of rent.
    pub commission: f64,
    pub features: Vec<String>,
}

/// A published article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filter selection on the properties screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub query: String,
}

impl PropertyFilter {
    /// Whether a listing passes the filter.
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(kind) = self.property_type {
            if property.property_type != kind {
                return false;
            }
        }
        if let Some(status) = self.status {
            if property.status != status {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        property.title.to_lowercase().contains(&query)
            || property.location.to_lowercase().contains(&query)
            || property.address.to_lowercase().contains(&query)
    }

    /// Apply the filter to a listing slice.
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}
