//! The room state machine: one shared board and its two seats.
//!
//! A [`Room`] owns everything a game session has: seats, private hands,
//! the table, both decks, and the three marker arrays. Operations are
//! called by the gateway on behalf of a seated participant and return
//! the events that change produced, each tagged with its audience. An
//! empty return means nothing changed and nobody is told.
//!
//! There are no game rules here. Input is only checked structurally
//! (does the index exist, is the card where the caller says it is), so
//! the board behaves like a shared whiteboard.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tabletop_protocol::{
    CardToken, DeckKind, Dot, HandCount, MarkerKind, ParticipantId, PlacedCard, Recipient,
    RoomId, RoomListEntry, ServerEvent, ValuedMarker,
};

use crate::deck::{new_main_deck, new_special_deck, shuffle};
use crate::{RoomConfig, RoomError};

/// Events produced by one room operation, in delivery order.
pub type Outbound = Vec<(Recipient, ServerEvent)>;

/// Authoritative state of one room.
pub struct Room {
    room_id: RoomId,
    max_players: usize,
    /// Seat order = join order.
    players: Vec<ParticipantId>,
    hands: HashMap<ParticipantId, Vec<CardToken>>,
    table: Vec<PlacedCard>,
    /// Stack: draws pop from the end.
    deck: Vec<CardToken>,
    special_deck: Vec<CardToken>,
    dots: Vec<Dot>,
    hexes: Vec<ValuedMarker>,
    squares: Vec<ValuedMarker>,
    rng: StdRng,
}

impl Room {
    /// Creates a fresh room: shuffled decks, default marker layout, no
    /// players.
    pub fn new(room_id: RoomId, config: &RoomConfig) -> Self {
        Self::with_rng(room_id, config, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like [`Room::new`] but with a caller-supplied generator, so shuffles
    /// can be reproduced.
    pub fn with_rng(room_id: RoomId, config: &RoomConfig, mut rng: StdRng) -> Self {
        let deck = new_main_deck(&mut rng);
        let special_deck = new_special_deck(&mut rng);
        Self {
            room_id,
            max_players: config.max_players,
            players: Vec::with_capacity(config.max_players),
            hands: HashMap::new(),
            table: Vec::new(),
            deck,
            special_deck,
            dots: config.layout.dots(),
            hexes: config.layout.hexes(),
            squares: config.layout.squares(),
            rng,
        }
    }

    // -----------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------

    /// Seats a participant.
    ///
    /// On success the newcomer gets the full board (seat count, empty
    /// hand, table, all markers) and the room gets fresh hand counts.
    ///
    /// # Errors
    /// - [`RoomError::RoomFull`] if every seat is taken. Nothing changes.
    /// - [`RoomError::AlreadyInRoom`] if the participant is already seated.
    pub fn join(&mut self, participant: ParticipantId) -> Result<Outbound, RoomError> {
        if self.players.contains(&participant) {
            return Err(RoomError::AlreadyInRoom(participant, self.room_id.clone()));
        }
        if self.is_full() {
            return Err(RoomError::RoomFull(self.room_id.clone()));
        }

        self.players.push(participant.clone());
        self.hands.insert(participant.clone(), Vec::new());
        tracing::info!(
            room_id = %self.room_id,
            %participant,
            players = self.players.len(),
            "participant joined"
        );

        let me = Recipient::Participant(participant);
        Ok(vec![
            (me.clone(), ServerEvent::Joined(self.players.len())),
            (me.clone(), ServerEvent::YourHand(Vec::new())),
            (me.clone(), self.table_update()),
            (me.clone(), self.marker_update(MarkerKind::Dot)),
            (me.clone(), self.marker_update(MarkerKind::Hex)),
            (me, self.marker_update(MarkerKind::Square)),
            (Recipient::All, self.hand_counts()),
        ])
    }

    /// Removes a participant and their hand.
    ///
    /// Cards still in the hand go back into their decks, which are then
    /// reshuffled. The remaining participant (if any) gets new hand counts.
    ///
    /// # Errors
    /// Returns [`RoomError::NotInRoom`] if the participant isn't seated.
    pub fn leave(&mut self, participant: &ParticipantId) -> Result<Outbound, RoomError> {
        let Some(seat) = self.players.iter().position(|p| p == participant) else {
            return Err(RoomError::NotInRoom(participant.clone(), self.room_id.clone()));
        };
        self.players.remove(seat);
        let hand = self.hands.remove(participant).unwrap_or_default();
        tracing::info!(
            room_id = %self.room_id,
            %participant,
            returned = hand.len(),
            players = self.players.len(),
            "participant left"
        );

        let mut touched = (false, false);
        for card in hand {
            match card.deck() {
                DeckKind::Main => touched.0 = true,
                DeckKind::Special => touched.1 = true,
            }
            self.deck_mut(card.deck()).push(card);
        }
        if touched.0 {
            self.reshuffle(DeckKind::Main);
        }
        if touched.1 {
            self.reshuffle(DeckKind::Special);
        }

        if self.players.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![(Recipient::All, self.hand_counts())])
    }

    // -----------------------------------------------------------------
    // Decks and hands
    // -----------------------------------------------------------------

    /// Moves the top main-deck card into the participant's hand.
    pub fn draw_card(&mut self, participant: &ParticipantId) -> Outbound {
        let Some(hand) = self.hands.get_mut(participant) else {
            return self.ignored("draw-card", "not seated");
        };
        let Some(card) = self.deck.pop() else {
            tracing::debug!(room_id = %self.room_id, %participant, "main deck is empty");
            return Vec::new();
        };
        hand.push(card);
        self.hand_changed(participant)
    }

    /// Reshuffles the main deck. Decks are never shown to clients, so
    /// nobody is notified.
    pub fn shuffle_main_deck(&mut self) -> Outbound {
        self.reshuffle(DeckKind::Main);
        Vec::new()
    }

    /// Reshuffles the special deck. Silent, like the main deck.
    pub fn shuffle_special_deck(&mut self) -> Outbound {
        self.reshuffle(DeckKind::Special);
        Vec::new()
    }

    /// Puts `card` on the table at `(x, y)`.
    ///
    /// The first matching card leaves the caller's hand if it is there.
    /// If it isn't, the card is placed anyway: placement is never refused
    /// on ownership grounds.
    pub fn play_card(
        &mut self,
        participant: &ParticipantId,
        card: CardToken,
        x: f64,
        y: f64,
    ) -> Outbound {
        let Some(hand) = self.hands.get_mut(participant) else {
            return self.ignored("play-card", "not seated");
        };
        if let Some(i) = hand.iter().position(|c| *c == card) {
            hand.remove(i);
        } else {
            tracing::debug!(
                room_id = %self.room_id,
                %participant,
                %card,
                "played card was not in hand"
            );
        }
        self.table.push(PlacedCard { card, x, y });

        let mut out = vec![(Recipient::All, self.table_update())];
        out.extend(self.hand_changed(participant));
        out
    }

    /// Moves a table card. Anyone may move any card.
    pub fn move_table_card(&mut self, index: usize, x: f64, y: f64) -> Outbound {
        let Some(placed) = self.table.get_mut(index) else {
            return self.ignored("move-table-card", "index out of bounds");
        };
        placed.x = x;
        placed.y = y;
        vec![(Recipient::All, self.table_update())]
    }

    /// Returns a card from the caller's hand to its deck and reshuffles
    /// that deck.
    pub fn return_card_from_hand(
        &mut self,
        participant: &ParticipantId,
        card: CardToken,
    ) -> Outbound {
        let Some(hand) = self.hands.get_mut(participant) else {
            return self.ignored("return-card-from-hand", "not seated");
        };
        let Some(i) = hand.iter().position(|c| *c == card) else {
            return self.ignored("return-card-from-hand", "card not in hand");
        };
        hand.remove(i);
        let out = self.hand_changed(participant);
        self.return_to_deck(card);
        out
    }

    /// Returns the table card at `index` to its deck, provided it is still
    /// `card`. A mismatch means the caller's view is stale (the other
    /// participant moved or took something first) and nothing happens.
    pub fn return_card_from_table(&mut self, index: usize, card: CardToken) -> Outbound {
        if !self.table_card_is(index, &card) {
            return self.ignored("return-card-from-table", "stale table reference");
        }
        self.table.remove(index);
        let out = vec![
            (Recipient::All, self.table_update()),
            (Recipient::All, self.hand_counts()),
        ];
        self.return_to_deck(card);
        out
    }

    /// Picks the table card at `index` up into the caller's hand. Same
    /// stale-reference guard as [`Room::return_card_from_table`].
    pub fn take_card_from_table(
        &mut self,
        participant: &ParticipantId,
        index: usize,
        card: CardToken,
    ) -> Outbound {
        if !self.hands.contains_key(participant) {
            return self.ignored("return-card-from-table-to-hand", "not seated");
        }
        if !self.table_card_is(index, &card) {
            return self.ignored("return-card-from-table-to-hand", "stale table reference");
        }
        let placed = self.table.remove(index);
        if let Some(hand) = self.hands.get_mut(participant) {
            hand.push(placed.card);
        }

        let mut out = vec![(Recipient::All, self.table_update())];
        out.extend(self.hand_changed(participant));
        out
    }

    // -----------------------------------------------------------------
    // Markers
    // -----------------------------------------------------------------

    /// Moves marker `index` of `kind` and broadcasts that kind's array.
    pub fn move_marker(&mut self, kind: MarkerKind, index: usize, x: f64, y: f64) -> Outbound {
        let moved = match kind {
            MarkerKind::Dot => self.dots.get_mut(index).map(|d| {
                d.x = x;
                d.y = y;
            }),
            MarkerKind::Hex => self.hexes.get_mut(index).map(|m| {
                m.x = x;
                m.y = y;
            }),
            MarkerKind::Square => self.squares.get_mut(index).map(|m| {
                m.x = x;
                m.y = y;
            }),
        };
        if moved.is_none() {
            return self.ignored("move-marker", "index out of bounds");
        }
        vec![(Recipient::All, self.marker_update(kind))]
    }

    /// Sets the counter of hex or square `index`. Dots carry no value, so
    /// a dot update is ignored.
    pub fn update_marker_value(&mut self, kind: MarkerKind, index: usize, value: i64) -> Outbound {
        let marker = match kind {
            MarkerKind::Dot => return self.ignored("update-marker", "dots have no value"),
            MarkerKind::Hex => self.hexes.get_mut(index),
            MarkerKind::Square => self.squares.get_mut(index),
        };
        let Some(marker) = marker else {
            return self.ignored("update-marker", "index out of bounds");
        };
        marker.value = value;
        vec![(Recipient::All, self.marker_update(kind))]
    }

    // -----------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Seated participants in join order.
    pub fn players(&self) -> &[ParticipantId] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    pub fn hand(&self, participant: &ParticipantId) -> Option<&[CardToken]> {
        self.hands.get(participant).map(Vec::as_slice)
    }

    pub fn table(&self) -> &[PlacedCard] {
        &self.table
    }

    pub fn deck(&self) -> &[CardToken] {
        &self.deck
    }

    pub fn special_deck(&self) -> &[CardToken] {
        &self.special_deck
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn hexes(&self) -> &[ValuedMarker] {
        &self.hexes
    }

    pub fn squares(&self) -> &[ValuedMarker] {
        &self.squares
    }

    /// Listing entry for this room.
    pub fn info(&self) -> RoomListEntry {
        RoomListEntry {
            room_id: self.room_id.clone(),
            player_count: self.players.len(),
            max_players: self.max_players,
            full: self.is_full(),
        }
    }

    // -----------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------

    fn hand_counts(&self) -> ServerEvent {
        ServerEvent::HandCounts(
            self.players
                .iter()
                .map(|id| HandCount {
                    id: id.clone(),
                    count: self.hands.get(id).map_or(0, Vec::len),
                })
                .collect(),
        )
    }

    fn table_update(&self) -> ServerEvent {
        ServerEvent::TableUpdate(self.table.clone())
    }

    fn marker_update(&self, kind: MarkerKind) -> ServerEvent {
        match kind {
            MarkerKind::Dot => ServerEvent::DotsUpdate(self.dots.clone()),
            MarkerKind::Hex => ServerEvent::HexesUpdate(self.hexes.clone()),
            MarkerKind::Square => ServerEvent::SquaresUpdate(self.squares.clone()),
        }
    }

    /// The participant's hand to them, then hand counts to everyone.
    fn hand_changed(&self, participant: &ParticipantId) -> Outbound {
        let hand = self.hands.get(participant).cloned().unwrap_or_default();
        vec![
            (
                Recipient::Participant(participant.clone()),
                ServerEvent::YourHand(hand),
            ),
            (Recipient::All, self.hand_counts()),
        ]
    }

    fn table_card_is(&self, index: usize, card: &CardToken) -> bool {
        self.table.get(index).is_some_and(|placed| placed.card == *card)
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut Vec<CardToken> {
        match kind {
            DeckKind::Main => &mut self.deck,
            DeckKind::Special => &mut self.special_deck,
        }
    }

    fn reshuffle(&mut self, kind: DeckKind) {
        let deck = match kind {
            DeckKind::Main => &mut self.deck,
            DeckKind::Special => &mut self.special_deck,
        };
        shuffle(deck, &mut self.rng);
    }

    fn return_to_deck(&mut self, card: CardToken) {
        let kind = card.deck();
        self.deck_mut(kind).push(card);
        self.reshuffle(kind);
    }

    fn ignored(&self, event: &'static str, reason: &'static str) -> Outbound {
        tracing::debug!(room_id = %self.room_id, event, reason, "ignoring event");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::with_rng(
            RoomId::from("T"),
            &RoomConfig::default(),
            StdRng::seed_from_u64(11),
        )
    }

    fn p(id: &str) -> ParticipantId {
        ParticipantId::from(id)
    }

    #[test]
    fn test_new_room_starts_empty_with_full_decks() {
        let room = room();
        assert!(room.is_empty());
        assert!(room.table().is_empty());
        assert_eq!(room.deck().len(), 54);
        assert_eq!(room.special_deck().len(), 10);
        assert_eq!(room.dots().len(), 6);
        assert_eq!(room.hexes().len(), 6);
        assert_eq!(room.squares().len(), 20);
    }

    #[test]
    fn test_join_sends_board_to_newcomer_and_counts_to_room() {
        let mut room = room();
        let out = room.join(p("a")).unwrap();

        let me = Recipient::Participant(p("a"));
        assert_eq!(out[0], (me.clone(), ServerEvent::Joined(1)));
        assert_eq!(out[1], (me.clone(), ServerEvent::YourHand(vec![])));
        assert_eq!(out[2], (me.clone(), ServerEvent::TableUpdate(vec![])));
        assert!(matches!(&out[3], (r, ServerEvent::DotsUpdate(d)) if *r == me && d.len() == 6));
        assert!(matches!(&out[4], (r, ServerEvent::HexesUpdate(h)) if *r == me && h.len() == 6));
        assert!(matches!(&out[5], (r, ServerEvent::SquaresUpdate(s)) if *r == me && s.len() == 20));
        assert_eq!(
            out[6],
            (
                Recipient::All,
                ServerEvent::HandCounts(vec![HandCount { id: p("a"), count: 0 }])
            )
        );
    }

    #[test]
    fn test_join_same_participant_twice_is_rejected() {
        let mut room = room();
        room.join(p("a")).unwrap();
        assert!(matches!(room.join(p("a")), Err(RoomError::AlreadyInRoom(..))));
        assert_eq!(room.player_count(), 1);
    }

    #[test]
    fn test_draw_card_pops_from_deck_end() {
        let mut room = room();
        room.join(p("a")).unwrap();
        let top = room.deck().last().cloned().unwrap();

        let out = room.draw_card(&p("a"));

        assert_eq!(room.hand(&p("a")).unwrap(), &[top.clone()]);
        assert_eq!(room.deck().len(), 53);
        assert_eq!(
            out[0],
            (Recipient::Participant(p("a")), ServerEvent::YourHand(vec![top]))
        );
        assert!(matches!(&out[1], (Recipient::All, ServerEvent::HandCounts(_))));
    }

    #[test]
    fn test_draw_card_on_empty_deck_is_noop() {
        let mut room = room();
        room.join(p("a")).unwrap();
        for _ in 0..54 {
            assert!(!room.draw_card(&p("a")).is_empty());
        }
        assert!(room.draw_card(&p("a")).is_empty());
        assert_eq!(room.hand(&p("a")).unwrap().len(), 54);
    }

    #[test]
    fn test_draw_card_by_stranger_is_ignored() {
        let mut room = room();
        assert!(room.draw_card(&p("ghost")).is_empty());
        assert_eq!(room.deck().len(), 54);
    }

    #[test]
    fn test_shuffles_produce_no_events() {
        let mut room = room();
        assert!(room.shuffle_main_deck().is_empty());
        assert!(room.shuffle_special_deck().is_empty());
        assert_eq!(room.deck().len(), 54);
        assert_eq!(room.special_deck().len(), 10);
    }

    #[test]
    fn test_play_card_not_in_hand_still_reaches_table() {
        let mut room = room();
        room.join(p("a")).unwrap();

        let out = room.play_card(&p("a"), CardToken::from("glads/99"), 5.0, 6.0);

        assert_eq!(room.table().len(), 1);
        assert_eq!(room.table()[0].card, CardToken::from("glads/99"));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_play_card_removes_only_first_match() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.hands
            .insert(p("a"), vec![CardToken::from("07"), CardToken::from("07")]);

        room.play_card(&p("a"), CardToken::from("07"), 0.0, 0.0);

        assert_eq!(room.hand(&p("a")).unwrap(), &[CardToken::from("07")]);
    }

    #[test]
    fn test_move_table_card_updates_in_place() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.play_card(&p("a"), CardToken::from("01"), 0.0, 0.0);

        let out = room.move_table_card(0, 42.0, 24.0);

        assert_eq!((room.table()[0].x, room.table()[0].y), (42.0, 24.0));
        assert_eq!(out.len(), 1);
        assert!(matches!(&out[0], (Recipient::All, ServerEvent::TableUpdate(_))));
    }

    #[test]
    fn test_move_table_card_out_of_range_is_silent() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.play_card(&p("a"), CardToken::from("01"), 1.0, 2.0);

        assert!(room.move_table_card(1, 9.0, 9.0).is_empty());
        assert_eq!((room.table()[0].x, room.table()[0].y), (1.0, 2.0));
    }

    #[test]
    fn test_return_card_from_hand_goes_to_matching_deck() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.hands.insert(p("a"), vec![CardToken::from("glads/01")]);
        room.special_deck.retain(|c| c.as_str() != "glads/01");

        let out = room.return_card_from_hand(&p("a"), CardToken::from("glads/01"));

        assert_eq!(room.hand(&p("a")).unwrap().len(), 0);
        assert_eq!(room.special_deck().len(), 10);
        assert_eq!(room.deck().len(), 54);
        assert_eq!(
            out[0],
            (Recipient::Participant(p("a")), ServerEvent::YourHand(vec![]))
        );
    }

    #[test]
    fn test_return_card_from_hand_missing_card_is_noop() {
        let mut room = room();
        room.join(p("a")).unwrap();
        assert!(room
            .return_card_from_hand(&p("a"), CardToken::from("01"))
            .is_empty());
        assert_eq!(room.deck().len(), 54);
    }

    #[test]
    fn test_return_card_from_table_requires_matching_card() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.draw_card(&p("a"));
        let card = room.hand(&p("a")).unwrap()[0].clone();
        room.play_card(&p("a"), card.clone(), 0.0, 0.0);

        assert!(room
            .return_card_from_table(0, CardToken::from("not-it"))
            .is_empty());
        assert_eq!(room.table().len(), 1);

        let out = room.return_card_from_table(0, card);
        assert!(room.table().is_empty());
        assert_eq!(room.deck().len(), 54);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|(r, _)| *r == Recipient::All));
    }

    #[test]
    fn test_take_card_from_table_moves_card_to_hand() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.join(p("b")).unwrap();
        room.play_card(&p("a"), CardToken::from("33"), 0.0, 0.0);

        let out = room.take_card_from_table(&p("b"), 0, CardToken::from("33"));

        assert!(room.table().is_empty());
        assert_eq!(room.hand(&p("b")).unwrap(), &[CardToken::from("33")]);
        assert_eq!(
            out[1],
            (
                Recipient::Participant(p("b")),
                ServerEvent::YourHand(vec![CardToken::from("33")])
            )
        );
    }

    #[test]
    fn test_move_marker_each_kind_broadcasts_its_array() {
        let mut room = room();
        let out = room.move_marker(MarkerKind::Dot, 5, 1.0, 2.0);
        assert!(matches!(&out[0], (Recipient::All, ServerEvent::DotsUpdate(d)) if d[5] == Dot { x: 1.0, y: 2.0 }));

        let out = room.move_marker(MarkerKind::Hex, 0, 3.0, 4.0);
        assert!(matches!(&out[0], (Recipient::All, ServerEvent::HexesUpdate(h)) if h[0].x == 3.0 && h[0].value == 20));

        let out = room.move_marker(MarkerKind::Square, 19, 5.0, 6.0);
        assert!(matches!(&out[0], (Recipient::All, ServerEvent::SquaresUpdate(s)) if s[19].y == 6.0));
    }

    #[test]
    fn test_move_marker_out_of_range_is_noop() {
        let mut room = room();
        let before = room.dots().to_vec();
        assert!(room.move_marker(MarkerKind::Dot, 6, 0.0, 0.0).is_empty());
        assert_eq!(room.dots(), &before[..]);
        assert!(room.move_marker(MarkerKind::Square, 20, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_update_marker_value() {
        let mut room = room();
        let out = room.update_marker_value(MarkerKind::Hex, 2, 13);
        assert_eq!(room.hexes()[2].value, 13);
        assert!(matches!(&out[0], (Recipient::All, ServerEvent::HexesUpdate(_))));

        assert!(room.update_marker_value(MarkerKind::Square, 20, 1).is_empty());
        assert!(room.update_marker_value(MarkerKind::Dot, 0, 1).is_empty());
    }

    #[test]
    fn test_leave_returns_hand_to_decks() {
        let mut room = room();
        room.join(p("a")).unwrap();
        room.join(p("b")).unwrap();
        room.draw_card(&p("a"));
        room.draw_card(&p("a"));

        let out = room.leave(&p("a")).unwrap();

        assert_eq!(room.players(), &[p("b")]);
        assert!(room.hand(&p("a")).is_none());
        assert_eq!(room.deck().len(), 54);
        assert_eq!(
            out,
            vec![(
                Recipient::All,
                ServerEvent::HandCounts(vec![HandCount { id: p("b"), count: 0 }])
            )]
        );
    }

    #[test]
    fn test_leave_last_participant_broadcasts_nothing() {
        let mut room = room();
        room.join(p("a")).unwrap();
        assert!(room.leave(&p("a")).unwrap().is_empty());
        assert!(room.is_empty());
    }

    #[test]
    fn test_leave_unknown_participant_errors() {
        let mut room = room();
        assert!(matches!(room.leave(&p("x")), Err(RoomError::NotInRoom(..))));
    }

    #[test]
    fn test_info_reports_fullness() {
        let mut room = room();
        room.join(p("a")).unwrap();
        assert!(!room.info().full);
        room.join(p("b")).unwrap();
        let info = room.info();
        assert_eq!(info.player_count, 2);
        assert_eq!(info.max_players, 2);
        assert!(info.full);
    }
}
