//! End-to-end valuation flow: a wire payload decodes into statistics, the
//! model derives baselines, and an appraisal comes out consistent.

use nadlan::market::analysis::MS_PER_DAY;
use nadlan::market::{
    Condition, MarketModel, MarketStats, Region, ResidenceType, ValuationRequest,
};

fn wire_payload() -> String {
    let day = MS_PER_DAY;
    format!(
        r#"{{
            "real_estate_count": 48000,
            "real_estate_histograms": [
                {{
                    "histogram_type": "sell_Apartment_price",
                    "histogram_points": [
                        {{"epoch_time": {p1}, "value": 2000000.0}},
                        {{"epoch_time": {p2}, "value": 2160000.0}}
                    ]
                }},
                {{
                    "histogram_type": "rent_Apartment_price",
                    "histogram_points": [
                        {{"epoch_time": {p2}, "value": 7200.0}}
                    ]
                }},
                {{
                    "histogram_type": "sell_price",
                    "histogram_points": [
                        {{"epoch_time": {p1}, "value": 2000000.0}},
                        {{"epoch_time": {p2}, "value": 2160000.0}}
                    ]
                }}
            ]
        }}"#,
        p1 = 30 * day,
        p2 = 395 * day,
    )
}

#[test]
fn test_payload_to_valuation() {
    let stats: MarketStats = serde_json::from_str(&wire_payload()).unwrap();
    let model = MarketModel::from_stats(&stats);
    assert!(model.has_data());

    // 2,160,000 / 80 sqm = 27,000; Tel Aviv x1.4 = 37,800
    let tel_aviv = model.region(Region::TelAviv);
    assert_eq!(tel_aviv.price_per_sqm, 37_800.0);
    // Growth: 2,000,000 -> 2,160,000 = +8%
    assert_eq!(tel_aviv.growth_pct, 8.0);

    let request = ValuationRequest {
        region: Region::TelAviv,
        residence_type: ResidenceType::Apartment,
        condition: Condition::New,
        size_sqm: 90.0,
        rooms: Some(3),
        floor: None,
        parking_spots: 0,
        year_built: 2026,
    };
    let valuation = model.appraise(&request, 2026).unwrap();

    assert_eq!(valuation.current_value, 37_800.0 * 90.0);
    assert_eq!(valuation.expected_growth_pct, 8.0);
    assert!(valuation.value_in_5_years > valuation.current_value);
    assert!(valuation.rent_yield_pct > 0.0);

    // The same payload appraised in a cheaper region is consistently lower
    let haifa = ValuationRequest {
        region: Region::Haifa,
        ..request
    };
    let haifa_valuation = model.appraise(&haifa, 2026).unwrap();
    assert!(haifa_valuation.current_value < valuation.current_value);
}
