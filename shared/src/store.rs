use std::sync::Arc;

use crate::battle::Battle;
use crate::error::FetchError;

/// What the detail page should render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BattleState {
    #[default]
    Idle,
    Loading {
        id: String,
    },
    Ready(Arc<Battle>),
    Failed(String),
}

/// Proof of an issued battle request. Responses carrying an outdated ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub id: String,
}

/// Holds the battle shown by the detail page.
///
/// Only `fetch_battle`, `resolve` and `clear_battle` mutate it.
#[derive(Debug, Clone, Default)]
pub struct BattleStore {
    state: BattleState,
    generation: u64,
}

impl BattleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn battle(&self) -> Option<&Arc<Battle>> {
        match &self.state {
            BattleState::Ready(battle) => Some(battle),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, BattleState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            BattleState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start loading `id`, superseding any request still in flight.
    pub fn fetch_battle(&mut self, id: &str) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = BattleState::Loading { id: id.to_string() };
        FetchTicket {
            generation: self.generation,
            id: id.to_string(),
        }
    }

    /// Apply a response if its ticket is still current. Returns whether it was applied.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<Battle, FetchError>) -> bool {
        let current = ticket.generation == self.generation
            && matches!(&self.state, BattleState::Loading { id } if *id == ticket.id);
        if !current {
            return false;
        }
        self.state = match result {
            Ok(battle) => BattleState::Ready(Arc::new(battle)),
            Err(err) => BattleState::Failed(err.to_string()),
        };
        true
    }

    /// Drop the current battle and invalidate outstanding tickets.
    pub fn clear_battle(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = BattleState::Idle;
    }
}
