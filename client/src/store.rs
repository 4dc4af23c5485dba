use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use battlelog_shared::{BattleState, BattleStore};

use crate::api;

/// Reactive handle to the battle store, provided through context by `App`.
#[derive(Clone, Copy)]
pub struct BattleStoreHandle(RwSignal<BattleStore>);

impl BattleStoreHandle {
    pub fn new() -> Self {
        Self(RwSignal::new(BattleStore::new()))
    }

    /// Current render state; tracks the store.
    pub fn state(self) -> BattleState {
        self.0.with(|store| store.state().clone())
    }

    /// Request `id`; a response arriving after a newer request or a clear is dropped.
    pub fn fetch_battle(self, id: String) {
        let Some(ticket) = self.0.try_update(|store| store.fetch_battle(&id)) else {
            return;
        };

        let store = self.0;
        spawn_local(async move {
            let result = api::fetch_battle(&ticket.id).await;
            if let Err(e) = &result {
                web_sys::console::warn_1(&format!("battle {} fetch failed: {e}", ticket.id).into());
            }
            let applied = store
                .try_update(|store| store.resolve(&ticket, result))
                .unwrap_or(false);
            if !applied {
                web_sys::console::info_1(
                    &format!("dropped stale response for battle {}", ticket.id).into(),
                );
            }
        });
    }

    pub fn clear_battle(self) {
        self.0.update(|store| store.clear_battle());
    }
}

impl Default for BattleStoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;

    use battlelog_shared::BattleState;

    use super::BattleStoreHandle;

    #[test]
    fn default_handle_starts_idle() {
        let owner = Owner::new();
        owner.set();
        let store = BattleStoreHandle::default();
        assert!(matches!(store.state(), BattleState::Idle));
        store.clear_battle();
        assert!(matches!(store.state(), BattleState::Idle));
    }
}
