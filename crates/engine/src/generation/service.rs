//! Drives one generation call end to end.

use std::sync::Arc;

use mentorplay_domain::{GameData, GameKind};
use tracing::Instrument;
use uuid::Uuid;

use crate::generation::{prompt, schema};
use crate::ports::{GenerationError, GenerationPort, GenerationRequest, SourcePayload};

/// Shapes the request, runs the port call, and validates the reply.
pub struct GenerationService {
    generator: Arc<dyn GenerationPort>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn GenerationPort>) -> Self {
        Self { generator }
    }

    /// Generate one game of `kind` from the given source material.
    ///
    /// Plain text sources are wrapped in a source section; binary sources
    /// pass through as inline data. The reply must parse as a [`GameData`]
    /// whose declared kind matches the request and whose payload is
    /// present and non-empty.
    pub async fn generate_game(
        &self,
        kind: GameKind,
        source: SourcePayload,
    ) -> Result<GameData, GenerationError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("generate_game", %request_id, kind = %kind);

        async move {
            let source = match source {
                SourcePayload::Text(text) => SourcePayload::Text(prompt::source_section(&text)),
                binary => binary,
            };
            let request = GenerationRequest::new(
                kind,
                prompt::system_instruction(),
                prompt::build_game_prompt(kind),
                source,
                schema::response_schema(),
            );

            let raw = self.generator.generate(request).await?;

            let game: GameData = serde_json::from_str(&raw).map_err(|e| {
                GenerationError::InvalidResponse(format!("reply is not a game: {e}"))
            })?;

            game.ensure_kind(kind)
                .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
            let payload = game
                .payload()
                .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

            tracing::debug!(
                title = %game.title,
                items = payload.item_count(),
                "generated game validated"
            );
            Ok(game)
        }
        .instrument(span)
        .await
    }
}
