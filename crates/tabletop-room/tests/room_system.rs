//! Integration tests for the room registry and board state machine.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabletop_protocol::{
    CardToken, HandCount, MarkerKind, ParticipantId, PlacedCard, Recipient, RoomId, ServerEvent,
};
use tabletop_room::deck::{MAIN_DECK_SIZE, SPECIAL_DECK_SIZE};
use tabletop_room::{Room, RoomConfig, RoomError, RoomRegistry};

// =========================================================================
// Helpers
// =========================================================================

fn pid(id: &str) -> ParticipantId {
    ParticipantId::from(id)
}

fn rid(id: &str) -> RoomId {
    RoomId::from(id)
}

/// Counts every token in the room: decks, hands, and table.
fn token_census(room: &Room) -> HashMap<CardToken, usize> {
    let mut census = HashMap::new();
    let hands = room
        .players()
        .iter()
        .flat_map(|p| room.hand(p).unwrap_or_default().iter());
    let table = room.table().iter().map(|placed| &placed.card);
    for card in room
        .deck()
        .iter()
        .chain(room.special_deck())
        .chain(hands)
        .chain(table)
    {
        *census.entry(card.clone()).or_default() += 1;
    }
    census
}

fn assert_conserved(room: &Room) {
    let census = token_census(room);
    assert_eq!(census.len(), MAIN_DECK_SIZE + SPECIAL_DECK_SIZE);
    assert!(census.values().all(|n| *n == 1), "a token was duplicated");
    assert_eq!(census.keys().filter(|c| c.is_special()).count(), SPECIAL_DECK_SIZE);
}

// =========================================================================
// RoomRegistry
// =========================================================================

#[test]
fn test_get_or_create_builds_room_once() {
    let mut registry = RoomRegistry::default();
    registry.get_or_create(&rid("R1")).join(pid("a")).unwrap();
    registry.get_or_create(&rid("R1")).join(pid("b")).unwrap();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(&rid("R1")).unwrap().player_count(), 2);
}

#[test]
fn test_rooms_are_independent() {
    let mut registry = RoomRegistry::default();
    let r1 = registry.get_or_create(&rid("R1"));
    r1.join(pid("a")).unwrap();
    r1.draw_card(&pid("a"));

    let r2 = registry.get_or_create(&rid("R2"));
    assert_eq!(r2.deck().len(), MAIN_DECK_SIZE);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_third_join_is_rejected_without_state_change() {
    let mut registry = RoomRegistry::default();
    let room = registry.get_or_create(&rid("R1"));
    room.join(pid("a")).unwrap();
    room.join(pid("b")).unwrap();

    let result = room.join(pid("c"));

    assert!(matches!(result, Err(RoomError::RoomFull(ref id)) if *id == rid("R1")));
    assert_eq!(room.players(), &[pid("a"), pid("b")]);
    assert!(room.hand(&pid("c")).is_none());
}

#[test]
fn test_remove_if_empty_keeps_occupied_rooms() {
    let mut registry = RoomRegistry::default();
    registry.get_or_create(&rid("R1")).join(pid("a")).unwrap();

    assert!(!registry.remove_if_empty(&rid("R1")));
    assert!(registry.contains(&rid("R1")));

    registry.get_mut(&rid("R1")).unwrap().leave(&pid("a")).unwrap();
    assert!(registry.remove_if_empty(&rid("R1")));
    assert!(registry.is_empty());
}

#[test]
fn test_recreated_room_starts_from_fresh_decks() {
    let mut registry = RoomRegistry::default();
    let room = registry.get_or_create(&rid("R1"));
    room.join(pid("a")).unwrap();
    for _ in 0..10 {
        room.draw_card(&pid("a"));
    }
    let card = room.hand(&pid("a")).unwrap()[0].clone();
    room.play_card(&pid("a"), card, 1.0, 1.0);
    room.move_marker(MarkerKind::Dot, 0, 99.0, 99.0);
    room.leave(&pid("a")).unwrap();
    assert!(registry.remove_if_empty(&rid("R1")));

    let fresh = registry.get_or_create(&rid("R1"));
    assert!(fresh.is_empty());
    assert!(fresh.table().is_empty());
    assert_eq!(fresh.deck().len(), MAIN_DECK_SIZE);
    assert_eq!(fresh.dots(), &RoomConfig::default().layout.dots()[..]);
}

#[test]
fn test_list_is_sorted_and_reports_fullness() {
    let mut registry = RoomRegistry::default();
    registry.get_or_create(&rid("zeta")).join(pid("a")).unwrap();
    let alpha = registry.get_or_create(&rid("alpha"));
    alpha.join(pid("b")).unwrap();
    alpha.join(pid("c")).unwrap();

    let list = registry.list();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].room_id, rid("alpha"));
    assert!(list[0].full);
    assert_eq!(list[1].room_id, rid("zeta"));
    assert_eq!(list[1].player_count, 1);
    assert!(!list[1].full);
}

// =========================================================================
// Conservation
// =========================================================================

#[test]
fn test_tokens_are_conserved_across_random_operations() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut room = Room::with_rng(rid("C"), &RoomConfig::default(), StdRng::seed_from_u64(1));
    let players = [pid("a"), pid("b")];
    for p in &players {
        room.join(p.clone()).unwrap();
    }
    assert_conserved(&room);

    for _ in 0..2_000 {
        let who = &players[rng.random_range(0..players.len())];
        match rng.random_range(0..8) {
            0 | 1 => {
                room.draw_card(who);
            }
            2 => {
                if let Some(card) = room.hand(who).and_then(|h| h.first()).cloned() {
                    room.return_card_from_hand(who, card);
                }
            }
            3 => {
                if let Some(card) = room.hand(who).and_then(|h| h.last()).cloned() {
                    room.play_card(who, card, 10.0, 20.0);
                }
            }
            4 => {
                if !room.table().is_empty() {
                    let i = rng.random_range(0..room.table().len());
                    let card = room.table()[i].card.clone();
                    room.return_card_from_table(i, card);
                }
            }
            5 => {
                if !room.table().is_empty() {
                    let i = rng.random_range(0..room.table().len());
                    let card = room.table()[i].card.clone();
                    room.take_card_from_table(who, i, card);
                }
            }
            6 => {
                // Leaving folds the hand back into its decks; the seat
                // comes back empty.
                room.leave(who).unwrap();
                room.join(who.clone()).unwrap();
                assert_eq!(room.hand(who).map(|h| h.len()), Some(0));
            }
            _ => {
                room.shuffle_main_deck();
                room.shuffle_special_deck();
            }
        }
        assert_conserved(&room);
    }
}

#[test]
fn test_stale_table_return_is_noop() {
    let mut room = Room::new(rid("S"), &RoomConfig::default());
    room.join(pid("a")).unwrap();
    room.draw_card(&pid("a"));
    room.draw_card(&pid("a"));
    let hand = room.hand(&pid("a")).unwrap().to_vec();
    room.play_card(&pid("a"), hand[0].clone(), 0.0, 0.0);
    room.play_card(&pid("a"), hand[1].clone(), 0.0, 0.0);

    // Both clients saw hand[1] at index 1; the first return wins.
    assert_eq!(room.return_card_from_table(1, hand[1].clone()).len(), 2);
    assert!(room.return_card_from_table(1, hand[1].clone()).is_empty());
    // Index 0 still holds hand[0], so a request naming hand[1] there misses.
    assert!(room.return_card_from_table(0, hand[1].clone()).is_empty());
    assert_eq!(room.table().len(), 1);
    assert_conserved(&room);
}

// =========================================================================
// End-to-end scenario at the room level
// =========================================================================

#[test]
fn test_two_player_scenario() {
    let mut registry = RoomRegistry::default();
    let a = pid("A");
    let b = pid("B");

    let out = registry.get_or_create(&rid("R1")).join(a.clone()).unwrap();
    assert_eq!(out[0], (Recipient::Participant(a.clone()), ServerEvent::Joined(1)));

    let out = registry.get_or_create(&rid("R1")).join(b.clone()).unwrap();
    assert_eq!(out[0], (Recipient::Participant(b.clone()), ServerEvent::Joined(2)));

    let room = registry.get_mut(&rid("R1")).unwrap();
    let out = room.draw_card(&a);
    let drawn = match &out[0] {
        (Recipient::Participant(p), ServerEvent::YourHand(hand)) if *p == a => {
            assert_eq!(hand.len(), 1);
            hand[0].clone()
        }
        other => panic!("expected YourHand for A, got {other:?}"),
    };
    assert_eq!(
        out[1],
        (
            Recipient::All,
            ServerEvent::HandCounts(vec![
                HandCount { id: a.clone(), count: 1 },
                HandCount { id: b.clone(), count: 0 },
            ])
        )
    );

    let out = room.play_card(&a, drawn.clone(), 100.0, 150.0);
    assert_eq!(
        out,
        vec![
            (
                Recipient::All,
                ServerEvent::TableUpdate(vec![PlacedCard { card: drawn, x: 100.0, y: 150.0 }])
            ),
            (Recipient::Participant(a.clone()), ServerEvent::YourHand(vec![])),
            (
                Recipient::All,
                ServerEvent::HandCounts(vec![
                    HandCount { id: a, count: 0 },
                    HandCount { id: b, count: 0 },
                ])
            ),
        ]
    );
}
