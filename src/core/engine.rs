//! Reveal engine: picks the secret word and the fake, then streams one reveal per player
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use rand::Rng;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::core::words::WordSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("words map cannot be empty")]
    EmptyWordSet,
    #[error("player count cannot be less than 1")]
    InvalidPlayerCount,
    #[error("invalid Json file format")]
    MalformedEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// Always first; everyone, including the fake, learns the category
    CategoryAnnouncement { category: String },
    /// One per player, in player order
    PlayerReveal {
        player: usize,
        is_impostor: bool,
        word: String,
    },
    /// Terminal; nothing follows it
    Failure(RevealError),
}

/// Outcome of one game, fixed before the first event is emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    player_count: usize,
    word: String,
    category: String,
    impostor: usize,
}

impl Session {
    pub fn draw(words: &WordSet, player_count: i64) -> Result<Self, RevealError> {
        Self::draw_with(words, player_count, &mut rand::rng())
    }

    pub fn draw_with<R: Rng>(
        words: &WordSet,
        player_count: i64,
        rng: &mut R,
    ) -> Result<Self, RevealError> {
        if words.is_empty() {
            return Err(RevealError::EmptyWordSet);
        }
        let player_count = usize::try_from(player_count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(RevealError::InvalidPlayerCount)?;

        let impostor = rng.random_range(0..player_count);
        let entry_index = rng.random_range(0..words.len());
        let (word, category) = words
            .get(entry_index)
            .and_then(|entry| entry.fields())
            .ok_or(RevealError::MalformedEntry)?;

        Ok(Self {
            player_count,
            word: word.to_owned(),
            category: category.to_owned(),
            impostor,
        })
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn impostor(&self) -> usize {
        self.impostor
    }

    /// The full event sequence of a successful session
    pub fn into_events(self) -> impl Iterator<Item = RevealEvent> {
        let Self {
            player_count,
            word,
            category,
            impostor,
        } = self;
        let announcement = RevealEvent::CategoryAnnouncement { category };
        let reveals = (0..player_count).map(move |player| RevealEvent::PlayerReveal {
            player,
            is_impostor: player == impostor,
            word: word.clone(),
        });
        std::iter::once(announcement).chain(reveals)
    }
}

/// Receiving end of a reveal session.
///
/// Holds at most one event the consumer has not asked for yet. Dropping it
/// stops the producer at its next send.
pub struct RevealStream {
    rx: mpsc::Receiver<RevealEvent>,
    producer: JoinHandle<()>,
}

impl RevealStream {
    /// Next event, or `None` once the session is over
    pub async fn next_event(&mut self) -> Option<RevealEvent> {
        self.rx.recv().await
    }

    /// Stops consuming and waits for the producer task to exit
    pub async fn abandon(self) {
        let Self { rx, producer } = self;
        drop(rx);
        if let Err(e) = producer.await {
            debug!(error = ?e, "reveal producer did not shut down cleanly");
        }
    }
}

impl Stream for RevealStream {
    type Item = RevealEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// Starts a freshly randomized session. Must be called inside a tokio runtime.
pub fn run_reveal(words: &WordSet, player_count: i64) -> RevealStream {
    spawn_producer(Session::draw(words, player_count))
}

/// Same as [`run_reveal`] with a caller-supplied random source
pub fn run_reveal_with<R: Rng>(words: &WordSet, player_count: i64, rng: &mut R) -> RevealStream {
    spawn_producer(Session::draw_with(words, player_count, rng))
}

fn spawn_producer(outcome: Result<Session, RevealError>) -> RevealStream {
    // Capacity 1: the producer waits on every send until the consumer takes the previous event.
    let (tx, rx) = mpsc::channel(1);

    let producer = tokio::spawn(async move {
        let session = match outcome {
            Ok(session) => session,
            Err(error) => {
                info!(%error, "reveal session rejected");
                let _ = tx.send(RevealEvent::Failure(error)).await;
                return;
            }
        };

        info!(players = session.player_count(), "reveal session started");
        for event in session.into_events() {
            if tx.send(event).await.is_err() {
                debug!("reveal consumer went away, stopping early");
                return;
            }
        }
        debug!("reveal session finished");
    });

    RevealStream { rx, producer }
}
