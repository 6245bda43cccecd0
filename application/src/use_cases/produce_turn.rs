//! Produce a single participant turn

use crate::config::GenerationLimits;
use crate::ports::text_generation::{GenerationError, GenerationRequest, TextGenerationPort};
use meeting_domain::{Participant, Transcript};
use tracing::debug;

/// Ask the backend for `participant`'s next utterance given the full transcript.
///
/// The participant's directive and the conversation so far are the only
/// inputs. Surrounding whitespace is stripped from the reply; an empty reply
/// is treated as malformed.
pub async fn produce<G: TextGenerationPort + ?Sized>(
    gateway: &G,
    participant: &Participant,
    transcript: &Transcript,
    limits: GenerationLimits,
) -> Result<String, GenerationError> {
    let request = GenerationRequest {
        speaker: participant.id(),
        directive: participant.directive(),
        history: transcript.turns(),
        limits,
    };

    debug!(
        "Requesting turn for {} with {} turns of history",
        participant.id(),
        transcript.len()
    );
    let content = gateway.generate(&request).await?;
    let content = content.trim();
    if content.is_empty() {
        return Err(GenerationError::MalformedResponse(format!(
            "empty reply for {}",
            participant.id()
        )));
    }
    Ok(content.to_string())
}
