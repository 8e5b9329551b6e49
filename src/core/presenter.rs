use crate::domain::model::ConfigState;

/// Text shown for a state, or `None` while nothing has been loaded.
pub fn render(state: &ConfigState, json: bool) -> Option<String> {
    if state.is_empty() {
        return None;
    }

    if json {
        return match serde_json::to_string_pretty(state) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!("Could not serialize state: {}", e);
                None
            }
        };
    }

    match state {
        ConfigState::Ready(record) => Some(format!(
            "PDA: {}\nGestor: {}\nCentro: {}\nSIG: {}",
            record.pda, record.manager, record.center, record.sig
        )),
        ConfigState::Failed(err) => Some(format!("❌ {}", err)),
        ConfigState::Empty => None,
    }
}
