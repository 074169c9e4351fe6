//! Economy charging settings

use serde::Serialize;

use crate::document::Section;
use crate::tristate::{TriState, parse_tri_state};

/// Keyword that marks a refund as going back to the payer.
pub const REFUND_PAYER: &str = "payer";

/// Who gets the unused balance back when flight ends early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefundTarget {
    /// The flying player
    Flyer,
    /// Whoever paid for the flight
    Payer,
}

/// Charging settings. Only built for a positive price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomyConfig {
    pub price: f64,
    /// Economy account that receives payments, if any
    pub server: Option<String>,
    /// `true` refunds the flyer, `payer` refunds the payer
    pub refund: TriState,
}

impl EconomyConfig {
    /// Read the `economy` section; `None` when the price is not positive.
    pub fn from_section(section: &Section<'_>) -> Option<Self> {
        let price = section.get_double("price");
        if price.is_nan() || price <= 0.0 {
            return None;
        }

        Some(Self {
            price,
            server: section.get_string("server").filter(|s| !s.is_empty()),
            refund: parse_tri_state(section.get_string("refund").as_deref(), REFUND_PAYER),
        })
    }

    /// Refund recipient, or `None` when refunds are off.
    pub fn refund_target(&self) -> Option<RefundTarget> {
        match self.refund {
            TriState::Affirmative => Some(RefundTarget::Flyer),
            TriState::Alternate => Some(RefundTarget::Payer),
            TriState::Unset => None,
        }
    }
}
