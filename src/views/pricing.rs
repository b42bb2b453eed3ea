use crate::models::Plan;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Element id the shell inserts rendered cards after.
pub const INSERT_AFTER_ELEMENT: &str = "free-plan-card";

/// Selector the shell animates once the cards are in the DOM.
pub const ANIMATE_SELECTOR: &str = ".pricing-card.dynamic";

const BASELINE_FEATURES: [&str; 3] = [
    "Access to all courses",
    "Progress tracking",
    "Course certificates",
];
const GOAL_TRACKER_FEATURE: &str = "Goal tracking";
const ACCOUNTABILITY_FEATURE: &str = "Accountability partner";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureItem {
    pub label: String,
    pub included: bool,
}

/// One plan, mapped to the fields the card template needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCard {
    pub name: String,
    pub currency_symbol: String,
    pub amount: f64,
    pub period: String, // "month", "3 months", "year", ...
    pub savings_percent: i64, // 0 renders no badge
    pub popular: bool,
    pub featured: bool,
    pub features: Vec<FeatureItem>,
    pub purchase_url: String,
}

impl PlanCard {
    pub fn from_plan(plan: &Plan, featured: bool, purchase_url: String) -> Self {
        Self {
            name: plan.name.clone(),
            currency_symbol: currency_symbol(plan.currency.as_deref()),
            amount: plan.price,
            period: period_label(plan.duration_days),
            savings_percent: savings_percent(plan.price, plan.original_price),
            popular: plan.is_popular,
            featured,
            features: feature_items(plan),
            purchase_url,
        }
    }
}

/// One rendered card: the HTML fragment plus what the shell needs to place it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFragment {
    pub name: String,
    pub featured: bool,
    pub html: String,
}

/// Payload of GET /pricing/cards. Fragments come in insertion order: the
/// shell puts each one right after `insert_after`, so the last fragment
/// ends up closest to the anchor.
#[derive(Debug, Clone, Serialize)]
pub struct PricingCardsView {
    pub source: PricingSource,
    pub insert_after: String,
    pub animate_selector: String,
    pub generated_at: DateTime<Utc>,
    pub cards: Vec<CardFragment>,
}

// Label for the billing period, from the plan duration in days
fn period_label(duration_days: Option<i64>) -> String {
    let days = match duration_days {
        Some(days) => days,
        None => return "month".to_string(),
    };

    let months = (days as f64 / 30.0).round() as i64;
    match months {
        1 => "month".to_string(),
        3 => "3 months".to_string(),
        6 => "6 months".to_string(),
        12 => "year".to_string(),
        other => format!("{} months", other),
    }
}

// Rounded discount percent, only when the pre-discount price is higher
fn savings_percent(price: f64, original_price: Option<f64>) -> i64 {
    match original_price {
        Some(original) if original > price => ((1.0 - price / original) * 100.0).round() as i64,
        _ => 0,
    }
}

fn currency_symbol(currency: Option<&str>) -> String {
    match currency {
        None => "₦",
        Some("NGN") => "₦",
        Some("USD") => "$",
        Some(code) if code.is_empty() => "₦",
        Some(code) => code,
    }
    .to_string()
}

// Upstream feature list when present, otherwise the standard set with the
// plan's add-on flags deciding what is crossed out
fn feature_items(plan: &Plan) -> Vec<FeatureItem> {
    if let Some(features) = plan.features.as_ref().filter(|list| !list.is_empty()) {
        return features
            .iter()
            .map(|label| FeatureItem {
                label: label.clone(),
                included: true,
            })
            .collect();
    }

    let mut items: Vec<FeatureItem> = BASELINE_FEATURES
        .iter()
        .map(|label| FeatureItem {
            label: (*label).to_string(),
            included: true,
        })
        .collect();
    items.push(FeatureItem {
        label: GOAL_TRACKER_FEATURE.to_string(),
        included: plan.includes_goal_tracker,
    });
    items.push(FeatureItem {
        label: ACCOUNTABILITY_FEATURE.to_string(),
        included: plan.includes_accountability_partner,
    });

    items
}
