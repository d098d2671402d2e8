//! Unit tests for the market model and valuation arithmetic.

use chrono::Utc;
use nadlan::market::analysis::MS_PER_DAY;
use nadlan::market::types::series;
use nadlan::market::{
    ApiStatus, Condition, Histogram, HistogramPoint, MarketEvent, MarketModel, MarketStats,
    Region, ResidenceType, ValuationError, ValuationRequest,
};

fn histogram(name: &str, points: &[(i64, f64)]) -> Histogram {
    Histogram {
        histogram_type: name.to_string(),
        histogram_points: points
            .iter()
            .map(|&(epoch_time, value)| HistogramPoint { epoch_time, value })
            .collect(),
    }
}

/// Payload giving a 30,000/sqm sell baseline, 100/sqm rent baseline, and
/// 4% yearly growth.
fn sample_stats() -> MarketStats {
    MarketStats {
        real_estate_count: 52_340,
        real_estate_histograms: vec![
            histogram(
                series::SELL_APARTMENT_PRICE,
                &[(400 * MS_PER_DAY, 2_400_000.0)],
            ),
            histogram(series::RENT_APARTMENT_PRICE, &[(400 * MS_PER_DAY, 8_000.0)]),
            histogram(
                series::SELL_PRICE,
                &[(35 * MS_PER_DAY, 100.0), (400 * MS_PER_DAY, 104.0)],
            ),
        ],
    }
}

fn base_request() -> ValuationRequest {
    ValuationRequest {
        region: Region::TelAviv,
        residence_type: ResidenceType::ApartmentBuilding,
        condition: Condition::New,
        size_sqm: 100.0,
        rooms: None,
        floor: None,
        parking_spots: 1,
        year_built: 2026,
    }
}

#[test]
fn test_model_derives_regional_baselines() {
    let model = MarketModel::from_stats(&sample_stats());
    assert!(model.has_data());

    let tel_aviv = model.region(Region::TelAviv);
    assert_eq!(tel_aviv.price_per_sqm, 42_000.0);
    assert_eq!(tel_aviv.avg_rent_per_sqm, 140.0);
    assert_eq!(tel_aviv.growth_pct, 4.0);

    let jerusalem = model.region(Region::Jerusalem);
    assert_eq!(jerusalem.price_per_sqm, 24_000.0);
    assert_eq!(jerusalem.avg_rent_per_sqm, 80.0);

    let overview = model.overview();
    assert_eq!(overview.total_properties, 52_340);
    assert_eq!(overview.avg_sell_price, 2_400_000.0);
    assert_eq!(overview.avg_rent_price, 8_000.0);
}

#[test]
fn test_appraisal_base_case() {
    let model = MarketModel::from_stats(&sample_stats());
    let valuation = model.appraise(&base_request(), 2026).unwrap();

    // 42,000/sqm * 100 sqm + one 80,000 parking spot
    assert_eq!(valuation.current_value, 4_280_000.0);
    assert_eq!(valuation.price_per_sqm, 42_000.0);
    assert_eq!(valuation.monthly_rent, 14_000.0);
    assert_eq!(valuation.annual_rent, 168_000.0);
    assert!((valuation.rent_yield_pct - 3.9252).abs() < 0.001);
    assert_eq!(valuation.expected_growth_pct, 4.0);
    assert!((valuation.value_in_5_years - 5_207_274.0).abs() <= 1.0);
    assert_eq!(valuation.occupancy_pct, 92.0);
    assert_eq!(valuation.market_share_pct, 45.0);
}

#[test]
fn test_appraisal_adjustments_compound() {
    let model = MarketModel::from_stats(&sample_stats());

    // Penthouse (x1.8), high floor (x1.05), two rooms (x0.9)
    let request = ValuationRequest {
        residence_type: ResidenceType::Penthouse,
        floor: Some(6),
        rooms: Some(2),
        parking_spots: 0,
        ..base_request()
    };
    let valuation = model.appraise(&request, 2026).unwrap();
    assert_eq!(valuation.price_per_sqm, 71_442.0);

    // Condition and building age discount
    let request = ValuationRequest {
        condition: Condition::Good,
        year_built: 2016,
        parking_spots: 0,
        ..base_request()
    };
    let valuation = model.appraise(&request, 2026).unwrap();
    // 42,000 * 0.8 * (1 - 10 * 0.01)
    assert_eq!(valuation.price_per_sqm, 30_240.0);
}

#[test]
fn test_age_discount_is_floored() {
    let model = MarketModel::from_stats(&sample_stats());
    let request = ValuationRequest {
        year_built: 1950,
        parking_spots: 0,
        ..base_request()
    };
    let valuation = model.appraise(&request, 2026).unwrap();
    // Age discount never drops below x0.7
    assert_eq!(valuation.price_per_sqm, 29_400.0);
}

#[test]
fn test_appraisal_refuses_bad_input_and_missing_data() {
    let model = MarketModel::from_stats(&sample_stats());

    let request = ValuationRequest {
        size_sqm: 0.0,
        ..base_request()
    };
    assert_eq!(
        model.appraise(&request, 2026),
        Err(ValuationError::InvalidSize)
    );

    let empty = MarketModel::from_stats(&MarketStats {
        real_estate_count: 10,
        real_estate_histograms: Vec::new(),
    });
    assert!(!empty.has_data());
    assert_eq!(
        empty.appraise(&base_request(), 2026),
        Err(ValuationError::NoMarketData)
    );
}

#[test]
fn test_api_status_follows_feed_events() {
    let mut status = ApiStatus::default();
    assert!(!status.connected);

    status.apply(&MarketEvent::Loading);
    assert!(status.loading);
    assert!(status.error.is_none());

    status.apply(&MarketEvent::Updated {
        stats: sample_stats(),
        at: Utc::now(),
    });
    assert!(status.connected);
    assert!(!status.loading);
    assert!(status.last_update.is_some());

    status.apply(&MarketEvent::Failed {
        message: "HTTP 503".to_string(),
    });
    assert!(!status.connected);
    assert!(!status.loading);
    assert!(status.last_update.is_none());
    assert_eq!(status.error.as_deref(), Some("HTTP 503"));
}

#[test]
fn test_stats_wire_format_decodes() {
    let payload = r#"{
        "real_estate_count": 1200,
        "real_estate_histograms": [
            {
                "histogram_type": "sell_price",
                "histogram_points": [
                    {"epoch_time": 1700000000000, "value": 2100000.0}
                ]
            }
        ]
    }"#;
    let stats: MarketStats = serde_json::from_str(payload).unwrap();
    assert_eq!(stats.real_estate_count, 1200);
    assert_eq!(stats.series("sell_price").unwrap().histogram_points.len(), 1);
    assert!(stats.series("rent_price").is_none());
}
