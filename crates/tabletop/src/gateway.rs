//! The gateway: one task that owns every room and every session.
//!
//! Connection handlers never touch board state. They turn frames into
//! [`ClientEvent`]s and hand them to the gateway over a channel. The
//! gateway applies them strictly one at a time, so an event always sees
//! the complete effect of the one before it, including rooms created by
//! a join or destroyed by a disconnect.
//!
//! ```text
//!  handler(conn-1) ─┐                        ┌─→ outbox(conn-1) → writer
//!  handler(conn-2) ─┼─→ GatewayCommand ─→ Gateway ─→ outbox(conn-2) → writer
//!  handler(conn-3) ─┘       (mpsc)           └─→ ...
//! ```

use std::collections::HashMap;

use tabletop_protocol::{
    ClientEvent, MarkerKind, ParticipantId, Recipient, RoomId, RoomListEntry, ServerEvent,
};
use tabletop_room::{Outbound, Room, RoomError, RoomRegistry};
use tabletop_session::SessionManager;
use tabletop_transport::ConnectionId;
use tokio::sync::{mpsc, oneshot};

use crate::TabletopError;

/// Channel a connection's writer task drains. Unbounded so the gateway
/// never waits on a slow client.
pub type ConnectionSender = mpsc::UnboundedSender<ServerEvent>;

/// Commands sent to the gateway through its channel.
///
/// The `oneshot::Sender` in some variants is a reply channel: the caller
/// sends a command and waits for the answer on it.
pub(crate) enum GatewayCommand {
    /// Register a connection and the outbox its events go to.
    Connect {
        connection: ConnectionId,
        outbox: ConnectionSender,
        reply: oneshot::Sender<Result<ParticipantId, TabletopError>>,
    },

    /// An event decoded from a connection's frame.
    Event {
        connection: ConnectionId,
        event: ClientEvent,
    },

    /// The connection is gone; vacate its seat.
    Disconnect { connection: ConnectionId },

    /// Snapshot of the open rooms.
    ListRooms {
        reply: oneshot::Sender<Vec<RoomListEntry>>,
    },

    /// Stop processing commands.
    Shutdown,
}

/// Cloneable handle for talking to the gateway task.
#[derive(Clone)]
pub struct GatewayHandle {
    sender: mpsc::Sender<GatewayCommand>,
}

impl GatewayHandle {
    /// Registers a connection. Returns the participant id it will act as
    /// once it joins a room.
    pub async fn connect(
        &self,
        connection: ConnectionId,
        outbox: ConnectionSender,
    ) -> Result<ParticipantId, TabletopError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(GatewayCommand::Connect {
            connection,
            outbox,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(|_| TabletopError::GatewayClosed)?
    }

    /// Forwards an event from a connection. Fire-and-forget: the effects
    /// arrive on the outboxes.
    pub async fn event(
        &self,
        connection: ConnectionId,
        event: ClientEvent,
    ) -> Result<(), TabletopError> {
        self.send(GatewayCommand::Event { connection, event }).await
    }

    /// Tells the gateway a connection has closed.
    pub async fn disconnect(&self, connection: ConnectionId) -> Result<(), TabletopError> {
        self.send(GatewayCommand::Disconnect { connection }).await
    }

    /// Returns every live room, sorted by id.
    pub async fn list_rooms(&self) -> Result<Vec<RoomListEntry>, TabletopError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(GatewayCommand::ListRooms { reply: reply_tx }).await?;
        reply_rx.await.map_err(|_| TabletopError::GatewayClosed)
    }

    /// Stops the gateway. Pending commands queued behind this one are
    /// dropped.
    pub async fn shutdown(&self) -> Result<(), TabletopError> {
        self.send(GatewayCommand::Shutdown).await
    }

    async fn send(&self, command: GatewayCommand) -> Result<(), TabletopError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| TabletopError::GatewayClosed)
    }
}

/// The gateway actor. Owns all mutable server state.
pub(crate) struct Gateway {
    rooms: RoomRegistry,
    sessions: SessionManager,
    outboxes: HashMap<ConnectionId, ConnectionSender>,
    receiver: mpsc::Receiver<GatewayCommand>,
}

impl Gateway {
    /// Runs the command loop until shutdown or until every handle is
    /// dropped.
    async fn run(mut self) {
        tracing::debug!("gateway started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                GatewayCommand::Connect {
                    connection,
                    outbox,
                    reply,
                } => {
                    let result = self.handle_connect(connection, outbox);
                    let _ = reply.send(result);
                }
                GatewayCommand::Event { connection, event } => {
                    self.handle_event(connection, event);
                }
                GatewayCommand::Disconnect { connection } => {
                    self.handle_disconnect(connection);
                }
                GatewayCommand::ListRooms { reply } => {
                    let _ = reply.send(self.rooms.list());
                }
                GatewayCommand::Shutdown => {
                    tracing::info!(rooms = self.rooms.len(), "gateway shutting down");
                    break;
                }
            }
        }

        tracing::debug!("gateway stopped");
    }

    fn handle_connect(
        &mut self,
        connection: ConnectionId,
        outbox: ConnectionSender,
    ) -> Result<ParticipantId, TabletopError> {
        let participant = self.sessions.connect(connection)?.participant.clone();
        self.outboxes.insert(connection, outbox);
        Ok(participant)
    }

    fn handle_event(&mut self, connection: ConnectionId, event: ClientEvent) {
        let name = event.name();
        match event {
            ClientEvent::JoinRoom(room_id) => self.handle_join(connection, room_id),
            ClientEvent::ListRooms => {
                let rooms = self.rooms.list();
                self.send_to(connection, ServerEvent::RoomList(rooms));
            }
            ClientEvent::DrawCard => self.on_board(connection, name, |room, p| room.draw_card(p)),
            ClientEvent::ShuffleMainDeck => {
                self.on_board(connection, name, |room, _| room.shuffle_main_deck())
            }
            ClientEvent::ShuffleSpecialDeck => {
                self.on_board(connection, name, |room, _| room.shuffle_special_deck())
            }
            ClientEvent::PlayCard { card, x, y } => {
                self.on_board(connection, name, |room, p| room.play_card(p, card, x, y))
            }
            ClientEvent::MoveTableCard { index, x, y } => {
                self.on_board(connection, name, |room, _| room.move_table_card(index, x, y))
            }
            ClientEvent::ReturnCardFromHand { card } => {
                self.on_board(connection, name, |room, p| room.return_card_from_hand(p, card))
            }
            ClientEvent::ReturnCardFromTable { index, card } => {
                self.on_board(connection, name, |room, _| room.return_card_from_table(index, card))
            }
            ClientEvent::ReturnCardFromTableToHand { index, card } => {
                self.on_board(connection, name, |room, p| room.take_card_from_table(p, index, card))
            }
            ClientEvent::MoveDot { index, x, y } => self.on_board(connection, name, |room, _| {
                room.move_marker(MarkerKind::Dot, index, x, y)
            }),
            ClientEvent::MoveHex { index, x, y } => self.on_board(connection, name, |room, _| {
                room.move_marker(MarkerKind::Hex, index, x, y)
            }),
            ClientEvent::MoveSquare { index, x, y } => self.on_board(connection, name, |room, _| {
                room.move_marker(MarkerKind::Square, index, x, y)
            }),
            ClientEvent::UpdateHex { index, value } => self.on_board(connection, name, |room, _| {
                room.update_marker_value(MarkerKind::Hex, index, value)
            }),
            ClientEvent::UpdateSquare { index, value } => {
                self.on_board(connection, name, |room, _| {
                    room.update_marker_value(MarkerKind::Square, index, value)
                })
            }
        }
    }

    /// Applies a board operation to the caller's room on behalf of its
    /// participant. Dropped if the connection has no binding.
    fn on_board<F>(&mut self, connection: ConnectionId, event: &'static str, op: F)
    where
        F: FnOnce(&mut Room, &ParticipantId) -> Outbound,
    {
        let Some((room_id, participant)) = self
            .sessions
            .binding(&connection)
            .map(|(r, p)| (r.clone(), p.clone()))
        else {
            tracing::debug!(%connection, event, "no room binding, event dropped");
            return;
        };
        let Some(room) = self.rooms.get_mut(&room_id) else {
            tracing::debug!(%connection, %room_id, event, "room gone, event dropped");
            return;
        };

        let out = op(room, &participant);
        self.deliver(&room_id, out);
    }

    fn handle_join(&mut self, connection: ConnectionId, room_id: RoomId) {
        let Some(session) = self.sessions.get(&connection) else {
            tracing::debug!(%connection, "join from unknown connection dropped");
            return;
        };
        if let Some(current) = session.room_id() {
            tracing::debug!(%connection, %current, requested = %room_id, "already seated, join ignored");
            return;
        }
        let participant = session.participant.clone();

        match self.rooms.get_or_create(&room_id).join(participant) {
            Ok(out) => {
                if let Err(e) = self.sessions.bind(connection, room_id.clone()) {
                    tracing::warn!(%connection, error = %e, "failed to bind session");
                }
                self.deliver(&room_id, out);
            }
            Err(RoomError::RoomFull(_)) => {
                tracing::info!(%connection, %room_id, "join rejected, room full");
                self.send_to(connection, ServerEvent::RoomFull);
            }
            Err(e) => {
                tracing::debug!(%connection, %room_id, error = %e, "join ignored");
            }
        }
    }

    fn handle_disconnect(&mut self, connection: ConnectionId) {
        self.outboxes.remove(&connection);
        let session = match self.sessions.disconnect(connection) {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!(%connection, error = %e, "disconnect for unknown connection");
                return;
            }
        };
        let Some(room_id) = session.room_id() else {
            return;
        };

        if let Some(room) = self.rooms.get_mut(room_id) {
            match room.leave(&session.participant) {
                Ok(out) => self.deliver(room_id, out),
                Err(e) => tracing::debug!(%connection, error = %e, "leave failed"),
            }
        }
        self.rooms.remove_if_empty(room_id);
    }

    /// Sends each outbound event to its audience.
    ///
    /// `Recipient::All` resolves against the room's seats at delivery
    /// time, so a participant who just left is not included.
    fn deliver(&self, room_id: &RoomId, out: Outbound) {
        for (recipient, event) in out {
            match recipient {
                Recipient::Participant(participant) => self.send_to_participant(&participant, event),
                Recipient::All => {
                    let Some(room) = self.rooms.get(room_id) else {
                        continue;
                    };
                    for participant in room.players() {
                        self.send_to_participant(participant, event.clone());
                    }
                }
            }
        }
    }

    fn send_to_participant(&self, participant: &ParticipantId, event: ServerEvent) {
        match self.sessions.connection_of(participant) {
            Some(connection) => self.send_to(connection, event),
            None => tracing::debug!(%participant, "participant has no connection"),
        }
    }

    fn send_to(&self, connection: ConnectionId, event: ServerEvent) {
        let Some(outbox) = self.outboxes.get(&connection) else {
            tracing::debug!(%connection, "no outbox for connection");
            return;
        };
        if outbox.send(event).is_err() {
            tracing::warn!(%connection, "outbox closed, event lost");
        }
    }
}

/// Spawns the gateway task and returns a handle to it.
pub(crate) fn spawn_gateway(rooms: RoomRegistry, channel_size: usize) -> GatewayHandle {
    let (tx, rx) = mpsc::channel(channel_size);

    let gateway = Gateway {
        rooms,
        sessions: SessionManager::new(),
        outboxes: HashMap::new(),
        receiver: rx,
    };

    tokio::spawn(gateway.run());

    GatewayHandle { sender: tx }
}

// =========================================================================
// Tests
// =========================================================================
