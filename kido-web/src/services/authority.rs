//! The game authority: a single task that owns the registry and applies
//! every operation one at a time, in arrival order.
//!
//! Callers hold a cloneable [`Authority`] handle and talk to the task over a
//! bounded mailbox. A mutation is only acknowledged once the whole registry
//! has been written to the store; if that write fails the in-memory entry is
//! restored and the caller gets [`AppError::Persistence`].

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::error::AppError;
use crate::models::game::{GameState, GameSummary};
use crate::models::player::Player;
use crate::services::registry::Registry;
use crate::services::{game_actions, game_creator};
use crate::store::{Store, StoreError};

/// A game together with the player who was just seated in it.
#[derive(Debug, Clone, Serialize)]
pub struct Seated {
    pub game: GameState,
    pub player: Player,
}

#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub game_id: String,
    pub player_id: String,
    pub session_id: String,
    pub row: i32,
    pub col: i32,
}

enum Command {
    Create {
        player_name: String,
        reply: oneshot::Sender<Result<Seated, AppError>>,
    },
    Join {
        game_id: String,
        player_name: String,
        reply: oneshot::Sender<Result<Seated, AppError>>,
    },
    Get {
        game_id: String,
        reply: oneshot::Sender<Option<GameState>>,
    },
    List {
        reply: oneshot::Sender<Vec<GameSummary>>,
    },
    Move {
        request: MoveRequest,
        reply: oneshot::Sender<Result<GameState, AppError>>,
    },
}

#[derive(Debug, Clone)]
pub struct Authority {
    tx: mpsc::Sender<Command>,
}

impl Authority {
    /// Load the registry stored under `key` and start the authority task.
    pub async fn start<S: Store>(
        store: S,
        key: impl Into<String>,
        mailbox: usize,
    ) -> Result<Authority, StoreError> {
        let key = key.into();
        let registry = match store.get(&key).await? {
            Some(snapshot) => serde_json::from_str::<Registry>(&snapshot)?,
            None => Registry::new(),
        };
        tracing::info!(games = registry.len(), %key, "Loaded game registry");

        let (tx, rx) = mpsc::channel(mailbox.max(1));
        let actor = Actor {
            registry,
            store,
            key,
        };
        tokio::spawn(actor.run(rx));

        Ok(Authority { tx })
    }

    pub async fn create_game(&self, player_name: &str) -> Result<Seated, AppError> {
        let player_name = player_name.to_string();
        self.request(|reply| Command::Create { player_name, reply })
            .await?
    }

    pub async fn join_game(&self, game_id: &str, player_name: &str) -> Result<Seated, AppError> {
        let game_id = game_id.to_string();
        let player_name = player_name.to_string();
        self.request(|reply| Command::Join {
            game_id,
            player_name,
            reply,
        })
        .await?
    }

    pub async fn get_game(&self, game_id: &str) -> Result<GameState, AppError> {
        let game_id = game_id.to_string();
        self.request(|reply| Command::Get { game_id, reply })
            .await?
            .ok_or_else(game_not_found)
    }

    pub async fn list_games(&self) -> Result<Vec<GameSummary>, AppError> {
        self.request(|reply| Command::List { reply }).await
    }

    pub async fn play_move(
        &self,
        game_id: &str,
        player_id: &str,
        session_id: &str,
        row: i32,
        col: i32,
    ) -> Result<GameState, AppError> {
        let request = MoveRequest {
            game_id: game_id.to_string(),
            player_id: player_id.to_string(),
            session_id: session_id.to_string(),
            row,
            col,
        };
        self.request(|reply| Command::Move { request, reply })
            .await?
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, AppError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| authority_unavailable())?;
        rx.await.map_err(|_| authority_unavailable())
    }
}

fn game_not_found() -> AppError {
    AppError::NotFound("Game not found.".to_string())
}

fn authority_unavailable() -> AppError {
    AppError::Internal("authority unavailable".to_string())
}

struct Actor<S> {
    registry: Registry,
    store: S,
    key: String,
}

impl<S: Store> Actor<S> {
    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        while let Some(command) = rx.recv().await {
            self.handle(command).await;
        }
        tracing::debug!("Authority mailbox closed");
    }

    async fn handle(&mut self, command: Command) {
        // A dropped receiver means the caller went away; nothing to do.
        match command {
            Command::Create { player_name, reply } => {
                let _ = reply.send(self.create_game(&player_name).await);
            }
            Command::Join {
                game_id,
                player_name,
                reply,
            } => {
                let _ = reply.send(self.join_game(&game_id, &player_name).await);
            }
            Command::Get { game_id, reply } => {
                let _ = reply.send(self.registry.get(&game_id).cloned());
            }
            Command::List { reply } => {
                let _ = reply.send(self.registry.summaries());
            }
            Command::Move { request, reply } => {
                let _ = reply.send(self.play_move(request).await);
            }
        }
    }

    async fn create_game(&mut self, player_name: &str) -> Result<Seated, AppError> {
        let (game, player) = game_creator::new_game(player_name, Utc::now());
        self.commit(game.clone()).await?;
        tracing::info!(game_id = %game.game_id, "Game created");
        Ok(Seated { game, player })
    }

    async fn join_game(&mut self, game_id: &str, player_name: &str) -> Result<Seated, AppError> {
        let game = self.registry.get(game_id).ok_or_else(game_not_found)?;
        let (game, player) = game_creator::seat_opponent(game, player_name, Utc::now())?;
        self.commit(game.clone()).await?;
        tracing::info!(%game_id, "Second player joined");
        Ok(Seated { game, player })
    }

    async fn play_move(&mut self, request: MoveRequest) -> Result<GameState, AppError> {
        let game = self
            .registry
            .get(&request.game_id)
            .ok_or_else(game_not_found)?;

        let next = match game_actions::play_move(
            game,
            &request.player_id,
            &request.session_id,
            request.row,
            request.col,
            Utc::now(),
        ) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!(game_id = %request.game_id, code = e.code(), "Move rejected");
                return Err(e);
            }
        };

        self.commit(next.clone()).await?;
        tracing::debug!(
            game_id = %request.game_id,
            row = request.row,
            col = request.col,
            turn = next.turn,
            "Move accepted"
        );
        Ok(next)
    }

    /// Stage `game` in the registry and persist the whole registry, undoing
    /// the staging if the write fails.
    async fn commit(&mut self, game: GameState) -> Result<(), AppError> {
        let game_id = game.game_id.clone();
        let displaced = self.registry.insert(game);

        let persisted = match serde_json::to_string(&self.registry) {
            Ok(snapshot) => self.store.put(&self.key, &snapshot).await,
            Err(e) => Err(StoreError::from(e)),
        };

        if let Err(e) = persisted {
            match displaced {
                Some(previous) => {
                    self.registry.insert(previous);
                }
                None => {
                    self.registry.remove(&game_id);
                }
            }
            tracing::error!(%game_id, "Failed to persist registry: {e}");
            return Err(AppError::Persistence(e));
        }

        Ok(())
    }
}
