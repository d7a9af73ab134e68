//! Unit tests for the card-legality predicate.

use super::cards_types::CardColor;
use super::rules::can_play_card;
use super::test_state_helpers::{card, cards};

#[test]
fn matching_color_is_always_legal() {
    for (c, top) in [("R5", "R9"), ("RS", "R2"), ("RD", "RR"), ("R0", "RS")] {
        assert!(
            can_play_card(card(c), card(top), CardColor::Red, 0, None),
            "{c} on {top}"
        );
    }
}

#[test]
fn cross_color_number_match_is_legal() {
    assert!(can_play_card(card("R5"), card("B5"), CardColor::Blue, 0, None));
    assert!(!can_play_card(card("R5"), card("B6"), CardColor::Blue, 0, None));
}

#[test]
fn cross_color_type_match_is_legal() {
    assert!(can_play_card(card("RS"), card("BS"), CardColor::Blue, 0, None));
    assert!(can_play_card(card("GR"), card("YR"), CardColor::Yellow, 0, None));
    assert!(can_play_card(card("RD"), card("BD"), CardColor::Blue, 0, None));
}

#[test]
fn off_color_off_type_is_illegal() {
    assert!(!can_play_card(card("R5"), card("BS"), CardColor::Blue, 0, None));
    assert!(!can_play_card(card("GS"), card("B3"), CardColor::Blue, 0, None));
}

#[test]
fn plain_wild_is_always_legal() {
    assert!(can_play_card(card("W"), card("B5"), CardColor::Blue, 0, None));
    // Even mid-stack and even while holding active-colour cards.
    let hand = cards(&["B3", "W"]);
    assert!(can_play_card(card("W"), card("BD"), CardColor::Blue, 4, Some(&hand)));
}

#[test]
fn wild_top_only_matches_on_active_color() {
    // Top is a chosen-colour wild with green active: type/number of the
    // wild are never consulted.
    assert!(can_play_card(card("G7"), card("W"), CardColor::Green, 0, None));
    assert!(!can_play_card(card("R7"), card("W"), CardColor::Green, 0, None));
    assert!(!can_play_card(card("RS"), card("W4"), CardColor::Green, 0, None));
}

#[test]
fn wild_draw_four_color_holding_restriction() {
    // Legal with no hand supplied, illegal once the hand shows a non-wild
    // card of the active colour.
    assert!(can_play_card(card("W4"), card("B5"), CardColor::Blue, 0, None));
    let holding_blue = cards(&["B3", "R2"]);
    assert!(!can_play_card(
        card("W4"),
        card("B5"),
        CardColor::Blue,
        0,
        Some(&holding_blue)
    ));
    let no_blue = cards(&["G3", "R2", "W"]);
    assert!(can_play_card(
        card("W4"),
        card("B5"),
        CardColor::Blue,
        0,
        Some(&no_blue)
    ));
    // A wild of the active "colour" does not trigger the restriction.
    let only_wilds = cards(&["W", "W4"]);
    assert!(can_play_card(
        card("W4"),
        card("B5"),
        CardColor::Blue,
        0,
        Some(&only_wilds)
    ));
}

#[test]
fn wild_draw_four_cannot_interrupt_a_non_maxed_stack() {
    for pending in 1..8u8 {
        assert!(
            !can_play_card(card("W4"), card("BD"), CardColor::Blue, pending, None),
            "pending {pending}"
        );
    }
    // At the cap it continues the stack; with no stack it is plain legal.
    assert!(can_play_card(card("W4"), card("BD"), CardColor::Blue, 8, None));
    assert!(can_play_card(card("W4"), card("BD"), CardColor::Blue, 12, None));
    assert!(can_play_card(card("W4"), card("BD"), CardColor::Blue, 0, None));
}

#[test]
fn draw_two_chain_stays_legal_in_active_color() {
    for pending in [2u8, 4, 6, 8] {
        assert!(
            can_play_card(card("BD"), card("BD"), CardColor::Blue, pending, None),
            "pending {pending}"
        );
    }
}

#[test]
fn draw_two_on_draw_two_matches_by_type_even_off_color() {
    // Rule order: the type match fires before the pending-stack rules, so
    // an off-colour DrawTwo on a DrawTwo top is legal.
    assert!(can_play_card(card("GD"), card("BD"), CardColor::Blue, 4, None));
}

#[test]
fn off_color_draw_two_on_wild_top_is_illegal_mid_stack() {
    // Top is a chosen-colour wild-draw-four, blue active, stack at 4: a
    // green DrawTwo has no colour match and a wild top short-circuits every
    // later rule, stacking included.
    assert!(!can_play_card(card("GD"), card("W4"), CardColor::Blue, 4, None));
    assert!(can_play_card(card("BD"), card("W4"), CardColor::Blue, 4, None));
}
