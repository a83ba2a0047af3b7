//! Canned fixture data for demo mode, one record per persona.

use std::sync::LazyLock;

use serde_json::{Value, json};

pub const INDIVIDUAL_PORTFOLIO_TOTAL: f64 = 12_487.52;
pub const FAMILY_PORTFOLIO_TOTAL: f64 = 48_215.37;
pub const BUSINESS_PORTFOLIO_TOTAL: f64 = 186_940.12;

static INDIVIDUAL: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "profile": {
            "name": "Alex Rivera",
            "accountNumber": "I-DEMO-1001",
            "memberSince": "2023-04-12"
        },
        "portfolio": {
            "totalValue": INDIVIDUAL_PORTFOLIO_TOTAL,
            "totalInvested": 11_200.00,
            "totalGain": 1_287.52,
            "gainPercent": 11.5,
            "holdings": [
                {"symbol": "AAPL", "name": "Apple", "shares": 12.4, "value": 2_871.30},
                {"symbol": "SBUX", "name": "Starbucks", "shares": 18.2, "value": 1_702.10},
                {"symbol": "AMZN", "name": "Amazon", "shares": 9.1, "value": 1_655.42},
                {"symbol": "VTI", "name": "Vanguard Total Market", "shares": 24.0, "value": 6_258.70}
            ]
        },
        "transactions": [
            {"id": "t-101", "date": "2026-09-28", "merchant": "Starbucks", "amount": 6.45, "roundUp": 0.55, "ticker": "SBUX", "status": "invested"},
            {"id": "t-102", "date": "2026-09-27", "merchant": "Amazon", "amount": 42.18, "roundUp": 0.82, "ticker": "AMZN", "status": "invested"},
            {"id": "t-103", "date": "2026-09-26", "merchant": "Apple Store", "amount": 129.00, "roundUp": 1.00, "ticker": "AAPL", "status": "pending"}
        ],
        "roundups": {"thisMonth": 38.40, "lifetime": 1_104.75, "multiplier": 1},
        "goals": [
            {"id": "g-1", "title": "Emergency fund", "target": 5_000.0, "current": 3_250.0},
            {"id": "g-2", "title": "New laptop", "target": 2_000.0, "current": 640.0}
        ]
    })
});

static FAMILY: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "profile": {
            "name": "The Nakamura Family",
            "accountNumber": "F-DEMO-2001",
            "memberSince": "2022-11-03"
        },
        "portfolio": {
            "totalValue": FAMILY_PORTFOLIO_TOTAL,
            "totalInvested": 43_900.00,
            "totalGain": 4_315.37,
            "gainPercent": 9.83,
            "holdings": [
                {"symbol": "COST", "name": "Costco", "shares": 21.0, "value": 18_102.40},
                {"symbol": "TGT", "name": "Target", "shares": 46.5, "value": 7_120.97},
                {"symbol": "DIS", "name": "Disney", "shares": 38.0, "value": 4_212.00},
                {"symbol": "VOO", "name": "Vanguard S&P 500", "shares": 34.0, "value": 18_780.00}
            ]
        },
        "members": [
            {"id": "m-1", "name": "Kenji", "role": "parent", "contributed": 21_400.0},
            {"id": "m-2", "name": "Maya", "role": "parent", "contributed": 18_250.0},
            {"id": "m-3", "name": "Sora", "role": "child", "contributed": 4_250.0}
        ],
        "transactions": [
            {"id": "t-201", "date": "2026-09-29", "merchant": "Costco", "amount": 214.37, "roundUp": 0.63, "ticker": "COST", "status": "invested", "member": "Maya"},
            {"id": "t-202", "date": "2026-09-28", "merchant": "Target", "amount": 58.10, "roundUp": 0.90, "ticker": "TGT", "status": "invested", "member": "Kenji"},
            {"id": "t-203", "date": "2026-09-25", "merchant": "Disney+", "amount": 13.99, "roundUp": 0.01, "ticker": "DIS", "status": "pending", "member": "Sora"}
        ],
        "roundups": {"thisMonth": 142.85, "lifetime": 5_912.40, "multiplier": 2},
        "goals": [
            {"id": "g-10", "title": "College fund", "target": 60_000.0, "current": 22_300.0},
            {"id": "g-11", "title": "Family vacation", "target": 8_000.0, "current": 5_150.0}
        ]
    })
});

static BUSINESS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "profile": {
            "name": "Harbor Street Coffee Co.",
            "accountNumber": "B-DEMO-3001",
            "memberSince": "2021-06-21"
        },
        "portfolio": {
            "totalValue": BUSINESS_PORTFOLIO_TOTAL,
            "totalInvested": 171_000.00,
            "totalGain": 15_940.12,
            "gainPercent": 9.32,
            "holdings": [
                {"symbol": "MSFT", "name": "Microsoft", "shares": 140.0, "value": 61_320.00},
                {"symbol": "SQ", "name": "Block", "shares": 420.0, "value": 30_240.00},
                {"symbol": "SHOP", "name": "Shopify", "shares": 300.0, "value": 25_380.12},
                {"symbol": "SCHD", "name": "Schwab Dividend Equity", "shares": 870.0, "value": 70_000.00}
            ]
        },
        "employees": [
            {"id": "e-1", "name": "Priya Shah", "department": "Operations", "enrolled": true},
            {"id": "e-2", "name": "Marcus Lee", "department": "Roastery", "enrolled": true},
            {"id": "e-3", "name": "Dana Ortiz", "department": "Retail", "enrolled": false}
        ],
        "transactions": [
            {"id": "t-301", "date": "2026-09-30", "merchant": "Restaurant Depot", "amount": 1_842.26, "roundUp": 0.74, "ticker": "SQ", "status": "invested"},
            {"id": "t-302", "date": "2026-09-29", "merchant": "Shopify", "amount": 299.00, "roundUp": 1.00, "ticker": "SHOP", "status": "invested"},
            {"id": "t-303", "date": "2026-09-27", "merchant": "Microsoft 365", "amount": 66.00, "roundUp": 1.00, "ticker": "MSFT", "status": "pending"}
        ],
        "roundups": {"thisMonth": 612.30, "lifetime": 24_880.15, "multiplier": 3},
        "goals": [
            {"id": "g-20", "title": "Equipment reserve", "target": 75_000.0, "current": 51_200.0}
        ]
    })
});

/// Fixture for `persona`, whole or one section. Unknown personas and
/// sections return `None`.
pub fn lookup(persona: &str, section: Option<&str>) -> Option<Value> {
    let record: &Value = match persona {
        "individual" => &*INDIVIDUAL,
        "family" => &*FAMILY,
        "business" => &*BUSINESS,
        _ => return None,
    };
    match section {
        None => Some(record.clone()),
        Some(name) => record.get(name).cloned(),
    }
}
