//! Unit tests for the play-resolution state transition.

use time::OffsetDateTime;

use super::cards_types::{CardColor, CardType};
use super::game_transition::process_card_play;
use super::test_state_helpers::{card, state_with_top};
use super::turn_order::Direction;

fn now() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + time::Duration::seconds(1_700_000_000)
}

#[test]
fn version_bumps_by_exactly_one_for_every_card_type() {
    let state = state_with_top(&["a", "b", "c"], "B5", CardColor::Blue);
    for token in ["B7", "BS", "BR", "BD", "W", "W4"] {
        let next = process_card_play(&state, card(token), Some(CardColor::Green), "a", &state.player_ids, now());
        assert_eq!(next.state_version, state.state_version + 1, "{token}");
        assert_eq!(state.state_version, 0, "input state must not be mutated");
    }
}

#[test]
fn number_play_advances_one_and_sets_color() {
    let state = state_with_top(&["a", "b", "c"], "B5", CardColor::Blue);
    let next = process_card_play(&state, card("R5"), None, "a", &state.player_ids, now());
    assert_eq!(next.active_color, CardColor::Red);
    assert_eq!(next.current_turn_player_id, "b");
    assert_eq!(next.pending_draw_count, 0);
    assert_eq!(next.top_card().copied(), Some(card("R5")));
    assert_eq!(next.discard_pile.len(), state.discard_pile.len() + 1);
}

#[test]
fn skip_advances_twice() {
    let state = state_with_top(&["a", "b", "c"], "B5", CardColor::Blue);
    let next = process_card_play(&state, card("BS"), None, "a", &state.player_ids, now());
    assert_eq!(next.current_turn_player_id, "c");
}

#[test]
fn skip_with_two_players_returns_to_the_actor() {
    let state = state_with_top(&["a", "b"], "B5", CardColor::Blue);
    let next = process_card_play(&state, card("BS"), None, "a", &state.player_ids, now());
    assert_eq!(next.current_turn_player_id, "a");
}

#[test]
fn reverse_flips_direction() {
    let state = state_with_top(&["a", "b", "c"], "B5", CardColor::Blue);
    assert_eq!(state.direction, Direction::Clockwise);
    let next = process_card_play(&state, card("BR"), None, "a", &state.player_ids, now());
    assert_eq!(next.direction, Direction::CounterClockwise);
    // With more than two players the reverser keeps the turn; the next
    // play then rotates the other way.
    assert_eq!(next.current_turn_player_id, "a");
}

#[test]
fn reverse_with_two_players_acts_as_a_pass() {
    let state = state_with_top(&["a", "b"], "B5", CardColor::Blue);
    let next = process_card_play(&state, card("BR"), None, "a", &state.player_ids, now());
    assert_eq!(next.direction, Direction::CounterClockwise);
    assert_eq!(next.current_turn_player_id, "b");
}

#[test]
fn draw_two_starts_and_continues_an_even_chain() {
    let mut state = state_with_top(&["a", "b", "c", "d"], "B5", CardColor::Blue);

    let chain = process_card_play(&state, card("BD"), None, "a", &state.player_ids, now());
    assert_eq!(chain.pending_draw_count, 2);
    assert_eq!(chain.current_turn_player_id, "b");

    let chain = process_card_play(&chain, card("BD"), None, "b", &chain.player_ids, now());
    assert_eq!(chain.pending_draw_count, 4);
    let chain = process_card_play(&chain, card("BD"), None, "c", &chain.player_ids, now());
    assert_eq!(chain.pending_draw_count, 6);
    let chain = process_card_play(&chain, card("BD"), None, "d", &chain.player_ids, now());
    assert_eq!(chain.pending_draw_count, 8);

    // An odd leftover count does not chain; the play resets it to two.
    state.pending_draw_count = 3;
    let reset = process_card_play(&state, card("BD"), None, "a", &state.player_ids, now());
    assert_eq!(reset.pending_draw_count, 2);
}

#[test]
fn wild_draw_four_resets_below_cap_and_extends_at_cap() {
    let mut state = state_with_top(&["a", "b"], "B5", CardColor::Blue);

    let fresh = process_card_play(&state, card("W4"), Some(CardColor::Green), "a", &state.player_ids, now());
    assert_eq!(fresh.pending_draw_count, 4);
    assert_eq!(fresh.active_color, CardColor::Green);

    state.pending_draw_count = 6;
    let below_cap = process_card_play(&state, card("W4"), Some(CardColor::Green), "a", &state.player_ids, now());
    assert_eq!(below_cap.pending_draw_count, 4);

    state.pending_draw_count = 8;
    let capped = process_card_play(&state, card("W4"), Some(CardColor::Green), "a", &state.player_ids, now());
    assert_eq!(capped.pending_draw_count, 12);
}

#[test]
fn non_stacking_play_clears_pending_obligation() {
    let mut state = state_with_top(&["a", "b"], "BD", CardColor::Blue);
    state.pending_draw_count = 4;
    let next = process_card_play(&state, card("B5"), None, "a", &state.player_ids, now());
    assert_eq!(next.pending_draw_count, 0);
}

#[test]
fn wild_without_choice_defaults_to_red() {
    let state = state_with_top(&["a", "b"], "B5", CardColor::Blue);
    let next = process_card_play(&state, card("W"), None, "a", &state.player_ids, now());
    assert_eq!(next.active_color, CardColor::Red);
    assert_eq!(next.pending_wild_color_choice, None);
}

#[test]
fn wild_with_choice_records_it() {
    let state = state_with_top(&["a", "b"], "B5", CardColor::Blue);
    let next = process_card_play(&state, card("W"), Some(CardColor::Yellow), "a", &state.player_ids, now());
    assert_eq!(next.active_color, CardColor::Yellow);
    assert_eq!(next.pending_wild_color_choice, Some(CardColor::Yellow));
}

#[test]
fn non_wild_play_clears_wild_choice_record() {
    let mut state = state_with_top(&["a", "b"], "B5", CardColor::Blue);
    state.pending_wild_color_choice = Some(CardColor::Green);
    let next = process_card_play(&state, card("B7"), None, "a", &state.player_ids, now());
    assert_eq!(next.pending_wild_color_choice, None);
}

#[test]
fn play_is_stamped_for_animation() {
    let state = state_with_top(&["a", "b"], "B5", CardColor::Blue);
    let played = card("BS");
    let next = process_card_play(&state, played, None, "a", &state.player_ids, now());
    let json = next.last_played_card_json.as_deref().expect("card json");
    assert_eq!(json, serde_json::to_string(&played).unwrap());
    let anim = next
        .last_played_card_animation_id
        .as_deref()
        .expect("animation id");
    assert!(anim.starts_with("a|"));
    assert!(anim.contains(json));
    assert_eq!(next.last_activity, now());
}

#[test]
fn skip_reverse_have_action_types() {
    // Guard against constructor typos in the fixtures used above.
    assert_eq!(card("BS").card_type, CardType::Skip);
    assert_eq!(card("BR").card_type, CardType::Reverse);
    assert_eq!(card("BD").card_type, CardType::DrawTwo);
}
