//! PricingRenderer Service - Landing Page Pricing Cards
//!
//! This service turns subscription plans into the HTML card fragments the
//! landing page shell inserts next to its static free-plan card. It owns the
//! selection policy (which plans are worth a card), the card template, and
//! the built-in fallback catalog rendered when the plans service gives us
//! nothing usable.

use crate::configuration::PaymentSettings;
use crate::models::Plan;
use crate::views::pricing::{
    CardFragment, PlanCard, PricingCardsView, PricingSource, ANIMATE_SELECTOR,
    INSERT_AFTER_ELEMENT,
};
use anyhow::{Context, Result};
use std::collections::HashMap;
use tera::{Context as TeraContext, Tera};

/// The shell already shows a static free card, two more make a full row
const MAX_DISPLAY_PLANS: usize = 2;

/// PricingRenderer - selects plans and renders card fragments
pub struct PricingRenderer {
    tera: Tera,
    payment: PaymentSettings,
}

impl PricingRenderer {
    /// Create a new PricingRenderer with the embedded card template
    pub fn new(payment: PaymentSettings) -> Result<Self> {
        let mut tera = Tera::default();
        tera.register_filter("group_digits", group_digits);

        // The .html name keeps Tera's autoescaping on for every field
        tera.add_raw_template("pricing_card.html", PRICING_CARD_TEMPLATE)
            .context("Failed to add pricing card template")?;

        Ok(Self { tera, payment })
    }

    /// Render cards for plans fetched from the plans service
    pub fn render_cards(&self, plans: Vec<Plan>) -> Result<PricingCardsView> {
        self.build_view(plans, PricingSource::Live)
    }

    /// Render the built-in fallback pair, used when no live plans are available
    pub fn render_fallback(&self) -> Result<PricingCardsView> {
        self.build_view(fallback_plans(), PricingSource::Fallback)
    }

    fn build_view(&self, plans: Vec<Plan>, source: PricingSource) -> Result<PricingCardsView> {
        let display = select_display_plans(plans);

        // Fragments are emitted in reverse visual order: the shell inserts
        // each one right after the anchor, so the last emitted card lands
        // closest to it
        let mut cards = Vec::with_capacity(display.len());
        for (position, plan) in display.iter().enumerate().rev() {
            let featured = plan.is_popular || (display.len() > 1 && position == 0);
            let card = PlanCard::from_plan(plan, featured, self.purchase_url(plan, source));
            let html = self.render_card(&card)?;
            cards.push(CardFragment {
                name: card.name,
                featured,
                html,
            });
        }

        Ok(PricingCardsView {
            source,
            insert_after: INSERT_AFTER_ELEMENT.to_string(),
            animate_selector: ANIMATE_SELECTOR.to_string(),
            generated_at: chrono::Utc::now(),
            cards,
        })
    }

    // Fallback cards link to the generic subscription page, there is no
    // stable plan id to deep-link to
    fn purchase_url(&self, plan: &Plan, source: PricingSource) -> String {
        match source {
            PricingSource::Live => self.payment.plan_checkout_url(&plan.id),
            PricingSource::Fallback => self.payment.subscription_url(),
        }
    }

    fn render_card(&self, card: &PlanCard) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("card", card);

        self.tera
            .render("pricing_card.html", &context)
            .with_context(|| format!("Failed to render pricing card for {}", card.name))
    }
}

/// Order plans popular-first, then by ascending price, and keep the first two.
/// The sort is stable so equally priced plans keep their upstream order.
fn select_display_plans(mut plans: Vec<Plan>) -> Vec<Plan> {
    plans.sort_by(|a, b| {
        b.is_popular
            .cmp(&a.is_popular)
            .then(a.price.total_cmp(&b.price))
    });
    plans.truncate(MAX_DISPLAY_PLANS);
    plans
}

/// Built-in catalog rendered when the plans service cannot be used.
/// Quarterly is flagged popular, so the usual selection policy puts it in
/// the featured slot and orders the fragments Annual-then-Quarterly.
fn fallback_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "annual".to_string(),
            name: "Annual".to_string(),
            price: 35_000.0,
            original_price: Some(58_333.0), // reads as "Save 40%"
            currency: None,
            duration_days: Some(365),
            is_popular: false,
            includes_goal_tracker: true,
            includes_accountability_partner: true,
            features: Some(vec![
                "Everything in Quarterly".to_string(),
                "Accountability partner".to_string(),
                "Priority support".to_string(),
                "AI Tutor access".to_string(),
                "Offline access".to_string(),
                "Custom learning paths".to_string(),
            ]),
        },
        Plan {
            id: "quarterly".to_string(),
            name: "Quarterly".to_string(),
            price: 13_000.0,
            original_price: None,
            currency: None,
            duration_days: Some(90),
            is_popular: true,
            includes_goal_tracker: true,
            includes_accountability_partner: false,
            features: None,
        },
    ]
}

// Tera filter: thousands separators for amounts, "13000" -> "13,000"
fn group_digits(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let amount = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("group_digits expects a numeric value"))?;
    Ok(tera::Value::String(format_amount(amount)))
}

fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

const PRICING_CARD_TEMPLATE: &str = r#"<div class="pricing-card dynamic{% if card.featured %} featured{% endif %}">
{%- if card.popular %}
    <div class="popular-badge">Most Popular</div>
{%- endif %}
    <div class="pricing-header">
        <h3>{{ card.name }}</h3>
        <div class="price">
            <span class="currency">{{ card.currency_symbol }}</span>
            <span class="amount">{{ card.amount | group_digits }}</span>
            <span class="period">/{{ card.period }}</span>
        </div>
{%- if card.savings_percent > 0 %}
        <span class="savings">Save {{ card.savings_percent }}%</span>
{%- endif %}
    </div>
    <ul class="pricing-features">
{%- for feature in card.features %}
        <li{% if not feature.included %} class="disabled"{% endif %}><i class="fas fa-{% if feature.included %}check{% else %}times{% endif %}"></i> {{ feature.label }}</li>
{%- endfor %}
    </ul>
    <a href="{{ card.purchase_url | safe }}" class="btn {% if card.featured %}btn-primary{% else %}btn-outline{% endif %} btn-block">Start {{ card.name }} Plan</a>
</div>"#;
