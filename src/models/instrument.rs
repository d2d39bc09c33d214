//! Tradable instruments and the assets they swap between

use crate::models::signal::SignalAction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub address: String,
    pub decimals: u8,
}

impl Asset {
    pub fn new(symbol: impl Into<String>, address: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            address: address.into(),
            decimals,
        }
    }
}

/// A pair identified by its price-history key plus the assets it trades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Display label, e.g. `ETH/USDC`
    pub pair: String,
    /// Data-provider identifier, e.g. `ethereum`
    pub price_key: String,
    pub token0: Asset,
    pub token1: Asset,
    /// Pool fee in hundredths of a basis point
    #[serde(default = "default_fee_rate")]
    pub fee_rate: u32,
}

fn default_fee_rate() -> u32 {
    3000
}

impl Instrument {
    /// Input and output asset for a decision. BUY spends token1 for token0,
    /// SELL spends token0 for token1, HOLD has no route.
    pub fn swap_route(&self, action: SignalAction) -> Option<(&Asset, &Asset)> {
        match action {
            SignalAction::Buy => Some((&self.token1, &self.token0)),
            SignalAction::Sell => Some((&self.token0, &self.token1)),
            SignalAction::Hold => None,
        }
    }
}
