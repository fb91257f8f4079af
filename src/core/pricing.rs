//! Pricing comparison model
//!
//! Three offers are compared side by side. The highlighted offer is scaled
//! up, more so when it sits in the middle column. On mobile the middle card
//! is moved last.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Offer highlighted when none is specified
pub const DEFAULT_HIGHLIGHT_ID: &str = "gruntworks";
/// Index of the card rendered in the middle column
pub const CENTER_OFFER_INDEX: usize = 1;
/// Number of offers the layout is designed for
pub const REQUIRED_OFFERS: usize = 3;

/// Accessible descriptions for leading status emojis
const EMOJI_DESCRIPTIONS: &[(&str, &str)] = &[
    ("✅", "Feature included."),
    ("⚠️", "Feature has limitations."),
    ("⚠", "Feature has limitations."),
    ("💸", "Cost implication."),
    ("💰", "Cost implication."),
    ("🕑", "Time related information."),
    ("❌", "Feature not included."),
    ("🤔", "Consideration or mixed outcome."),
];

/// Reasons the pricing section cannot render
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("pricing section needs a headline, a subtext and at least one feature row")]
    MissingContent,
    #[error(
        "The pricing comparison section requires exactly three offers to display correctly. Received {0}."
    )]
    WrongOfferCount(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub price_note: Option<String>,
    pub main_differentiator: Option<String>,
}

impl Offer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_note: None,
            main_differentiator: None,
        }
    }

    pub fn with_price_note(mut self, note: impl Into<String>) -> Self {
        self.price_note = Some(note.into());
        self
    }

    pub fn with_differentiator(mut self, text: impl Into<String>) -> Self {
        self.main_differentiator = Some(text.into());
        self
    }
}

/// One compared feature, keyed by offer id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub label: String,
    pub values: HashMap<String, String>,
}

impl FeatureRow {
    pub fn new<I, K, V>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            label: label.into(),
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn value_for(&self, offer_id: &str) -> Option<FeatureValue> {
        self.values.get(offer_id).map(|v| FeatureValue::parse(v))
    }
}

/// A feature cell split into its status emoji and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureValue {
    pub emoji: Option<String>,
    /// Screen-reader description of the emoji, when known
    pub description: Option<&'static str>,
    pub text: String,
}

impl FeatureValue {
    /// Splits a leading status emoji off `raw`. Emojis outside the known
    /// set are kept for display but get no description.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();

        let known = EMOJI_DESCRIPTIONS
            .iter()
            .find(|(emoji, _)| trimmed.starts_with(emoji));

        let (emoji, description, rest) = match known {
            Some((emoji, description)) => {
                let rest = &trimmed[emoji.len()..];
                // Variation selector left behind by a bare "⚠"
                let rest = rest.trim_start_matches('\u{FE0F}');
                (Some(emoji.to_string()), Some(*description), rest)
            }
            None => match trimmed.chars().next() {
                Some(c) if is_pictograph(c) => {
                    let rest = trimmed[c.len_utf8()..].trim_start_matches('\u{FE0F}');
                    (Some(trimmed[..trimmed.len() - rest.len()].to_string()), None, rest)
                }
                _ => (None, None, trimmed),
            },
        };

        Self {
            emoji,
            description,
            text: rest.trim().to_string(),
        }
    }
}

fn is_pictograph(c: char) -> bool {
    matches!(c as u32, 0x2600..=0x27BF | 0x1F300..=0x1FAFF)
}

/// Per-card layout decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub highlighted: bool,
    pub center: bool,
    pub scale_class: &'static str,
    pub order_classes: &'static str,
}

impl CardLayout {
    pub fn for_offer(index: usize, offer: &Offer, highlight_id: &str) -> Self {
        let highlighted = offer.id == highlight_id;
        let center = index == CENTER_OFFER_INDEX;

        let scale_class = match (highlighted, center) {
            (true, true) => "lg:scale-110",
            (true, false) => "md:scale-105",
            _ => "",
        };

        let order_classes = match index {
            1 => "order-3 lg:order-2",
            2 => "order-2 lg:order-3",
            _ => "order-1",
        };

        Self {
            highlighted,
            center,
            scale_class,
            order_classes,
        }
    }
}

/// Validated comparison ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct PricingComparison {
    pub headline: String,
    pub subtext: String,
    pub offers: Vec<Offer>,
    pub features: Vec<FeatureRow>,
    pub highlight_id: String,
}

impl PricingComparison {
    pub fn new(
        headline: impl Into<String>,
        subtext: impl Into<String>,
        offers: Vec<Offer>,
        features: Vec<FeatureRow>,
        highlight_id: Option<&str>,
    ) -> Result<Self, PricingError> {
        let headline = headline.into();
        let subtext = subtext.into();

        if headline.trim().is_empty() || subtext.trim().is_empty() || features.is_empty() {
            return Err(PricingError::MissingContent);
        }
        if offers.len() != REQUIRED_OFFERS {
            return Err(PricingError::WrongOfferCount(offers.len()));
        }

        Ok(Self {
            headline,
            subtext,
            offers,
            features,
            highlight_id: highlight_id.unwrap_or(DEFAULT_HIGHLIGHT_ID).to_string(),
        })
    }

    pub fn cards(&self) -> impl Iterator<Item = (&Offer, CardLayout)> {
        self.offers
            .iter()
            .enumerate()
            .map(|(i, offer)| (offer, CardLayout::for_offer(i, offer, &self.highlight_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offers() -> Vec<Offer> {
        vec![
            Offer::new("diy", "DIY"),
            Offer::new("gruntworks", "Gruntworks"),
            Offer::new("agency", "Agency"),
        ]
    }

    fn features() -> Vec<FeatureRow> {
        vec![FeatureRow::new(
            "Price",
            [("diy", "💸 Free"), ("gruntworks", "✅ $97 once")],
        )]
    }

    #[test]
    fn test_requires_exactly_three_offers() {
        let two = offers().into_iter().take(2).collect();

        let err = PricingComparison::new("Compare", "Pick one", two, features(), None).unwrap_err();

        assert_eq!(err, PricingError::WrongOfferCount(2));
        assert_eq!(
            err.to_string(),
            "The pricing comparison section requires exactly three offers to display correctly. Received 2."
        );
    }

    #[test]
    fn test_requires_content() {
        assert_eq!(
            PricingComparison::new("", "Pick one", offers(), features(), None),
            Err(PricingError::MissingContent)
        );
        assert_eq!(
            PricingComparison::new("Compare", "Pick one", offers(), Vec::new(), None),
            Err(PricingError::MissingContent)
        );
    }

    #[test]
    fn test_default_highlight() {
        let comparison =
            PricingComparison::new("Compare", "Pick one", offers(), features(), None).unwrap();

        assert_eq!(comparison.highlight_id, DEFAULT_HIGHLIGHT_ID);
    }

    #[test]
    fn test_center_highlight_scales_largest() {
        let comparison =
            PricingComparison::new("Compare", "Pick one", offers(), features(), None).unwrap();
        let layouts: Vec<_> = comparison.cards().map(|(_, layout)| layout).collect();

        assert_eq!(layouts[1].scale_class, "lg:scale-110");
        assert!(layouts[1].highlighted && layouts[1].center);
        assert_eq!(layouts[0].scale_class, "");
        assert_eq!(layouts[2].scale_class, "");
    }

    #[test]
    fn test_side_highlight_scales_less() {
        let comparison =
            PricingComparison::new("Compare", "Pick one", offers(), features(), Some("agency"))
                .unwrap();
        let layouts: Vec<_> = comparison.cards().map(|(_, layout)| layout).collect();

        assert_eq!(layouts[2].scale_class, "md:scale-105");
        assert_eq!(layouts[1].scale_class, "");
    }

    #[test]
    fn test_order_classes() {
        let comparison =
            PricingComparison::new("Compare", "Pick one", offers(), features(), None).unwrap();
        let orders: Vec<_> = comparison
            .cards()
            .map(|(_, layout)| layout.order_classes)
            .collect();

        assert_eq!(orders, vec!["order-1", "order-3 lg:order-2", "order-2 lg:order-3"]);
    }

    #[test]
    fn test_parse_known_emoji() {
        let value = FeatureValue::parse("✅ Included in every plan");

        assert_eq!(value.emoji.as_deref(), Some("✅"));
        assert_eq!(value.description, Some("Feature included."));
        assert_eq!(value.text, "Included in every plan");
    }

    #[test]
    fn test_parse_warning_with_and_without_selector() {
        for raw in ["⚠️ Limited", "⚠ Limited"] {
            let value = FeatureValue::parse(raw);
            assert_eq!(value.description, Some("Feature has limitations."));
            assert_eq!(value.text, "Limited");
        }
    }

    #[test]
    fn test_parse_unknown_emoji_has_no_description() {
        let value = FeatureValue::parse("🚀 Fast");

        assert_eq!(value.emoji.as_deref(), Some("🚀"));
        assert_eq!(value.description, None);
        assert_eq!(value.text, "Fast");
    }

    #[test]
    fn test_parse_plain_text() {
        let value = FeatureValue::parse("  Weeks of work ");

        assert_eq!(value.emoji, None);
        assert_eq!(value.text, "Weeks of work");
    }

    #[test]
    fn test_missing_value_for_offer() {
        let row = &features()[0];

        assert!(row.value_for("agency").is_none());
        assert_eq!(row.value_for("diy").unwrap().description, Some("Cost implication."));
    }
}
