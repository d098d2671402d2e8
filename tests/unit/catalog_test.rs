//! Unit tests for the property catalog.

use nadlan::catalog::{fixtures, PropertyFilter, PropertyStatus, PropertyType};
use nadlan::i18n::Language;

#[test]
fn test_fixtures_are_localized() {
    let hebrew = fixtures::properties(Language::Hebrew);
    let english = fixtures::properties(Language::English);

    assert_eq!(hebrew.len(), english.len());
    for (he, en) in hebrew.iter().zip(&english) {
        assert_ne!(he.title, en.title);
        assert_eq!(he.property_type, en.property_type);
        assert_eq!(he.price, en.price);
    }
}

#[test]
fn test_filter_by_type_and_status() {
    let listings = fixtures::properties(Language::Hebrew);

    let offices = PropertyFilter {
        property_type: Some(PropertyType::Office),
        ..PropertyFilter::default()
    };
    assert!(offices
        .apply(&listings)
        .iter()
        .all(|p| p.property_type == PropertyType::Office));
    assert!(!offices.apply(&listings).is_empty());

    let for_rent = PropertyFilter {
        status: Some(PropertyStatus::Rent),
        ..PropertyFilter::default()
    };
    assert!(for_rent
        .apply(&listings)
        .iter()
        .all(|p| p.status == PropertyStatus::Rent));
}

#[test]
fn test_filter_query_matches_title_and_location() {
    let listings = fixtures::properties(Language::English);

    let query = PropertyFilter {
        query: "tel aviv".to_string(),
        ..PropertyFilter::default()
    };
    let matches = query.apply(&listings);
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|p| {
        p.title.to_lowercase().contains("tel aviv")
            || p.location.to_lowercase().contains("tel aviv")
            || p.address.to_lowercase().contains("tel aviv")
    }));

    let nothing = PropertyFilter {
        query: "zzzz-no-such-listing".to_string(),
        ..PropertyFilter::default()
    };
    assert!(nothing.apply(&listings).is_empty());
}

#[test]
fn test_status_availability() {
    assert!(PropertyStatus::Rent.is_available());
    assert!(PropertyStatus::Sale.is_available());
    assert!(!PropertyStatus::Rented.is_available());
    assert!(!PropertyStatus::Sold.is_available());
}

#[test]
fn test_property_price_per_sqm() {
    let listings = fixtures::properties(Language::Hebrew);
    for property in &listings {
        let per_sqm = property.price_per_sqm().unwrap();
        assert!((per_sqm - property.price / property.area_sqm).abs() < 1e-9);
    }
}

#[test]
fn test_service_and_article_fixtures() {
    let services = fixtures::services(Language::Hebrew);
    assert_eq!(services.len(), 4);
    assert!(services.iter().any(|s| s.commission == 2.0));

    let articles = fixtures::articles(Language::English);
    assert!(!articles.is_empty());
    assert!(articles.iter().all(|a| a.published));
}
