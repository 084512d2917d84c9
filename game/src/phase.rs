use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Loading,
    Playing,
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhaseEvent {
    PlayPressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEffect {
    None,
    RevealPlayer,
}

impl GamePhase {
    /// Pure transition function for the loading/playing lifecycle.
    ///
    /// `RevealPlayer` is reported on the single Loading -> Playing edge; there is no way back.
    pub fn handle(self, event: GamePhaseEvent) -> (GamePhase, PhaseEffect) {
        match (self, event) {
            (GamePhase::Loading, GamePhaseEvent::PlayPressed) => {
                (GamePhase::Playing, PhaseEffect::RevealPlayer)
            }
            (GamePhase::Playing, GamePhaseEvent::PlayPressed) => {
                (GamePhase::Playing, PhaseEffect::None)
            }
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_loading() {
        assert_eq!(GamePhase::default(), GamePhase::Loading);
        assert!(!GamePhase::default().is_playing());
    }

    #[test]
    fn play_from_loading_reveals_player() {
        assert_eq!(
            GamePhase::Loading.handle(GamePhaseEvent::PlayPressed),
            (GamePhase::Playing, PhaseEffect::RevealPlayer)
        );
    }

    #[test]
    fn play_while_playing_is_ignored() {
        assert_eq!(
            GamePhase::Playing.handle(GamePhaseEvent::PlayPressed),
            (GamePhase::Playing, PhaseEffect::None)
        );
    }
}
