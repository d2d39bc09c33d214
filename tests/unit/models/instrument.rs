//! Unit tests for instrument swap routing

use tradeloom::config::default_instruments;
use tradeloom::models::signal::SignalAction;

#[test]
fn test_buy_spends_quote_for_base() {
    let eth_usdc = &default_instruments()[0];
    let (input, output) = eth_usdc.swap_route(SignalAction::Buy).unwrap();
    assert_eq!(input.symbol, "USDC");
    assert_eq!(output.symbol, "WETH");
}

#[test]
fn test_sell_spends_base_for_quote() {
    let uni_eth = &default_instruments()[1];
    let (input, output) = uni_eth.swap_route(SignalAction::Sell).unwrap();
    assert_eq!(input.symbol, "UNI");
    assert_eq!(output.symbol, "WETH");
}

#[test]
fn test_hold_has_no_route() {
    assert!(default_instruments()[0].swap_route(SignalAction::Hold).is_none());
}
