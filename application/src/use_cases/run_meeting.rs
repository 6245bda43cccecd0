//! Run Meeting use case
//!
//! Orchestrates a full meeting: opening, turn loop, termination and the
//! extraction of the minutes.

use crate::config::ExecutionParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{MeetingProgressNotifier, NoProgress};
use crate::ports::text_generation::{GenerationError, TextGenerationPort};
use crate::use_cases::produce_turn::produce;
use meeting_domain::{
    MeetingConfig, MeetingError, MeetingResult, MeetingRun, MeetingTemplate, Participant,
    SentinelDetector, TerminalState, TerminationDetector, TurnScheduler,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for running a meeting
///
/// Participants speak strictly one at a time: every generation request is
/// awaited before the next speaker is chosen.
pub struct RunMeetingUseCase<G: TextGenerationPort + 'static> {
    gateway: Arc<G>,
    params: ExecutionParams,
    scheduler: Option<Arc<dyn TurnScheduler>>,
    detector: Option<Arc<dyn TerminationDetector>>,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: TextGenerationPort + 'static> RunMeetingUseCase<G> {
    pub fn new(gateway: Arc<G>, params: ExecutionParams) -> Self {
        Self {
            gateway,
            params,
            scheduler: None,
            detector: None,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Replace the scheduler selected by [`MeetingConfig::selection`]
    pub fn with_scheduler(mut self, scheduler: Arc<dyn TurnScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Replace the sentinel check built from [`MeetingConfig::termination_marker`]
    pub fn with_termination_detector(mut self, detector: Arc<dyn TerminationDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, config: MeetingConfig) -> Result<MeetingResult, MeetingError> {
        self.execute_with_progress(config, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Returns `Err` only when the meeting could not start (blank agenda or
    /// a malformed roster). A participant failing mid-meeting yields `Ok`
    /// with [`TerminalState::Aborted`] and the partial transcript.
    pub async fn execute_with_progress(
        &self,
        config: MeetingConfig,
        progress: &dyn MeetingProgressNotifier,
    ) -> Result<MeetingResult, MeetingError> {
        let (agenda, roster) = config.validate()?;

        let detector: Arc<dyn TerminationDetector> = match &self.detector {
            Some(detector) => Arc::clone(detector),
            None => Arc::new(SentinelDetector::new(config.termination_marker.clone())),
        };
        let scheduler: &dyn TurnScheduler = match &self.scheduler {
            Some(scheduler) => scheduler.as_ref(),
            None => &config.selection,
        };

        info!(
            "Starting meeting with {} participants on {} ({}, max {} rounds)",
            roster.len(),
            self.gateway.backend_name(),
            config.selection,
            config.max_rounds
        );
        self.logger.log(ConversationEvent::meeting_started(
            agenda.content(),
            &roster,
            config.max_rounds,
        ));

        let mut run = MeetingRun::new(agenda, roster);
        let opening_text = MeetingTemplate::opening(run.agenda(), run.roster());
        let opening = run.start(opening_text).clone();
        self.logger.log(ConversationEvent::turn_appended(&opening, false));
        progress.on_meeting_start(run.roster(), config.max_rounds);

        let mut terminal_state = if detector.is_terminal(&opening) {
            Some(TerminalState::Terminated {
                speaker: opening.speaker_id.clone(),
                round: 0,
            })
        } else {
            None
        };

        let mut round = 0;
        while terminal_state.is_none() && round < config.max_rounds as usize {
            round += 1;
            let speaker = scheduler
                .next_speaker(round, run.roster(), run.transcript())
                .clone();
            debug!("Round {}: {} has the floor", round, speaker.id());
            progress.on_turn_start(round, &speaker);

            let content = if speaker.is_autonomous() {
                match self.produce_with_retry(&speaker, &run, round).await {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("{} failed in round {}: {}", speaker.id(), round, e);
                        progress.on_turn_failed(round, &speaker, &e.to_string());
                        terminal_state = Some(TerminalState::Aborted {
                            speaker: speaker.id().clone(),
                            round,
                            error: e.to_string(),
                        });
                        break;
                    }
                }
            } else {
                MeetingTemplate::moderator_turn(
                    run.roster(),
                    run.transcript(),
                    &config.termination_marker,
                )
            };

            let turn = run.record(speaker.id().clone(), content).clone();
            self.logger
                .log(ConversationEvent::turn_appended(&turn, speaker.is_autonomous()));
            progress.on_turn_complete(round, &turn);

            if detector.is_terminal(&turn) {
                info!("{} closed the meeting in round {}", speaker.id(), round);
                terminal_state = Some(TerminalState::Terminated {
                    speaker: speaker.id().clone(),
                    round,
                });
            }
        }

        let terminal_state = terminal_state.unwrap_or(TerminalState::RoundLimitReached {
            max_rounds: config.max_rounds,
        });
        let result = run.finish(terminal_state);

        info!(
            "Meeting finished after {} rounds: {}",
            result.rounds(),
            result.terminal_state.description()
        );
        if !result.final_summary.is_produced() {
            warn!("No summary was produced by {}", result.summarizer);
        }

        self.logger.log(ConversationEvent::meeting_finished(&result));
        progress.on_meeting_end(&result);
        Ok(result)
    }

    /// Ask the backend for a turn, retrying transient failures up to
    /// `retry_attempts` extra times.
    async fn produce_with_retry(
        &self,
        speaker: &Participant,
        run: &MeetingRun,
        round: usize,
    ) -> Result<String, GenerationError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match produce(
                self.gateway.as_ref(),
                speaker,
                run.transcript(),
                self.params.limits,
            )
            .await
            {
                Ok(content) => return Ok(content),
                Err(e) => {
                    self.logger.log(ConversationEvent::generation_failed(
                        round,
                        speaker.id(),
                        attempt,
                        &e.to_string(),
                    ));
                    if attempt > self.params.retry_attempts || !e.is_transient() {
                        return Err(e);
                    }
                    warn!(
                        "{} attempt {} failed ({}), retrying",
                        speaker.id(),
                        attempt,
                        e
                    );
                    tokio::time::sleep(self.params.retry_backoff).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generation::GenerationRequest;
    use async_trait::async_trait;
    use meeting_domain::{
        ConfigError, FinalSummary, InputError, MeetingState, Participant, Personas,
        SpeakerSelection, Turn,
    };
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    /// Answers with "<speaker> speaking in turn <n>" unless a reply is scripted
    struct ScriptedGenerator {
        replies: Mutex<VecDeque<Result<String, GenerationError>>>,
        requests: Mutex<Vec<(String, usize)>>,
        fail_on_call: Option<(usize, GenerationError)>,
    }

    impl ScriptedGenerator {
        fn echo() -> Self {
            Self {
                replies: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
                fail_on_call: None,
            }
        }

        fn with_replies(replies: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                ..Self::echo()
            }
        }

        fn failing_on_call(call: usize, error: GenerationError) -> Self {
            Self {
                fail_on_call: Some((call, error)),
                ..Self::echo()
            }
        }

        fn calls(&self) -> Vec<(String, usize)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerationPort for ScriptedGenerator {
        async fn generate(
            &self,
            request: &GenerationRequest<'_>,
        ) -> Result<String, GenerationError> {
            let call = {
                let mut requests = self.requests.lock().unwrap();
                requests.push((request.speaker.to_string(), request.history.len()));
                requests.len()
            };

            if let Some((fail_call, error)) = &self.fail_on_call
                && *fail_call == call
            {
                return Err(error.clone());
            }

            if let Some(reply) = self.replies.lock().unwrap().pop_front() {
                return reply;
            }
            Ok(format!(
                "{} speaking in turn {}",
                request.speaker,
                request.history.len()
            ))
        }
    }

    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl MeetingProgressNotifier for RecordingProgress {
        fn on_meeting_start(&self, roster: &meeting_domain::Roster, max_rounds: u32) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}:{}", roster.len(), max_rounds));
        }

        fn on_turn_start(&self, round: usize, speaker: &Participant) {
            self.events
                .lock()
                .unwrap()
                .push(format!("turn:{}:{}", round, speaker.id()));
        }

        fn on_turn_complete(&self, round: usize, _turn: &Turn) {
            self.events.lock().unwrap().push(format!("done:{}", round));
        }

        fn on_turn_failed(&self, round: usize, speaker: &Participant, _error: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("failed:{}:{}", round, speaker.id()));
        }

        fn on_meeting_end(&self, result: &MeetingResult) {
            self.events
                .lock()
                .unwrap()
                .push(format!("end:{}", result.terminal_state.state()));
        }
    }

    struct CollectingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for CollectingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn use_case(
        gateway: ScriptedGenerator,
    ) -> (RunMeetingUseCase<ScriptedGenerator>, Arc<ScriptedGenerator>) {
        let gateway = Arc::new(gateway);
        (
            RunMeetingUseCase::new(Arc::clone(&gateway), ExecutionParams::default()),
            gateway,
        )
    }

    /// Roster with the summarizer invited last
    fn summarizer_last_roster() -> Vec<Participant> {
        vec![
            Participant::moderator(Personas::MODERATOR, Personas::moderator_directive()),
            Participant::responder(Personas::MANAGEMENT, Personas::management_directive()),
            Participant::responder(Personas::TECHNICAL, Personas::technical_directive()),
            Participant::responder(Personas::QUALITY, Personas::quality_directive()),
            Participant::summarizer(Personas::MINUTE_TAKER, Personas::minute_taker_directive()),
        ]
    }

    fn speakers(result: &MeetingResult) -> Vec<String> {
        result
            .transcript
            .turns()
            .iter()
            .map(|t| t.speaker_id.to_string())
            .collect()
    }

    // ==================== Scenarios ====================

    #[tokio::test]
    async fn test_round_limit_with_default_roster() {
        let (use_case, gateway) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::with_default_personas("Design a login system with 2FA");

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(result.rounds(), 6);
        assert_eq!(result.transcript.len(), 7);
        assert_eq!(
            speakers(&result),
            vec![
                "Moderator",
                "Minute_Taker",
                "Management_Agent",
                "Technical_Agent",
                "Quality_Agent",
                "Moderator",
                "Minute_Taker",
            ]
        );
        assert_eq!(
            result.terminal_state,
            TerminalState::RoundLimitReached { max_rounds: 6 }
        );
        assert_eq!(
            result.final_summary,
            FinalSummary::Produced {
                speaker: "Minute_Taker".into(),
                sequence_number: 6,
                content: "Minute_Taker speaking in turn 6".to_string(),
            }
        );
        // Moderator is scripted; only the five autonomous turns hit the backend
        assert_eq!(gateway.calls().len(), 5);
    }

    #[tokio::test]
    async fn test_scripted_moderator_hands_off_to_summarizer() {
        let (use_case, _) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::with_default_personas("Design a login system with 2FA");

        let result = use_case.execute(config).await.unwrap();

        let moderator_turn = &result.transcript.turns()[5];
        assert_eq!(moderator_turn.speaker_id.as_str(), "Moderator");
        assert!(moderator_turn.content.contains("Minute_Taker, please summarize"));
    }

    #[tokio::test]
    async fn test_generation_failure_aborts_with_partial_transcript() {
        let (use_case, _) = use_case(ScriptedGenerator::failing_on_call(
            3,
            GenerationError::RequestFailed("500 Internal Server Error".into()),
        ));
        let config = MeetingConfig::new("Design a login system with 2FA", summarizer_last_roster());

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(result.transcript.len(), 3);
        assert_eq!(result.rounds(), 2);
        assert_eq!(result.final_summary, FinalSummary::NoneProduced);
        assert_eq!(result.terminal_state.state(), MeetingState::Aborted);
        match &result.terminal_state {
            TerminalState::Aborted {
                speaker,
                round,
                error,
            } => {
                assert_eq!(speaker.as_str(), "Quality_Agent");
                assert_eq!(*round, 3);
                assert!(error.contains("500"));
            }
            other => panic!("unexpected terminal state: {:?}", other),
        }
        assert!(!result.is_complete());
    }

    #[tokio::test]
    async fn test_failure_keeps_earlier_summary() {
        let (use_case, _) = use_case(ScriptedGenerator::failing_on_call(
            2,
            GenerationError::Timeout,
        ));
        let config = MeetingConfig::with_default_personas("Design a login system with 2FA");

        let result = use_case.execute(config).await.unwrap();

        assert!(result.terminal_state.is_aborted());
        assert_eq!(
            result.final_summary.content(),
            Some("Minute_Taker speaking in turn 1")
        );
    }

    #[tokio::test]
    async fn test_blank_agenda_is_rejected_before_start() {
        let (use_case, gateway) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::with_default_personas("  ");

        let err = use_case.execute(config).await.unwrap_err();

        assert_eq!(err, MeetingError::Input(InputError::EmptyAgenda));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_roster_is_rejected_before_start() {
        let (use_case, gateway) = use_case(ScriptedGenerator::echo());
        let roster = summarizer_last_roster()
            .into_iter()
            .filter(|p| !p.is_summarizer())
            .collect();
        let config = MeetingConfig::new("Agenda", roster);

        let err = use_case.execute(config).await.unwrap_err();

        assert_eq!(err, MeetingError::Config(ConfigError::SummarizerCount(0)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_terminal_marker_with_trailing_whitespace_stops_meeting() {
        let (use_case, _) = use_case(ScriptedGenerator::with_replies(vec![
            Ok("Minutes: nothing yet.".to_string()),
            Ok("  All done. TERMINATE  ".to_string()),
        ]));
        let config = MeetingConfig::with_default_personas("Design a login system with 2FA");

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(result.rounds(), 2);
        assert_eq!(
            result.terminal_state,
            TerminalState::Terminated {
                speaker: "Management_Agent".into(),
                round: 2,
            }
        );
        assert_eq!(result.final_summary.content(), Some("Minutes: nothing yet."));
    }

    #[tokio::test]
    async fn test_summarizer_never_speaks() {
        let (use_case, _) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::new("Design a login system with 2FA", summarizer_last_roster())
            .with_max_rounds(3);

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(
            result.terminal_state,
            TerminalState::RoundLimitReached { max_rounds: 3 }
        );
        assert_eq!(result.final_summary, FinalSummary::NoneProduced);
        assert_eq!(result.final_summary.content(), None);
    }

    #[tokio::test]
    async fn test_scripted_moderator_closes_after_summary() {
        let (use_case, _) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::new("Design a login system with 2FA", summarizer_last_roster())
            .with_max_rounds(20);

        let result = use_case.execute(config).await.unwrap();

        // Moderator, three responders, summarizer, scripted closing
        assert_eq!(result.rounds(), 5);
        assert_eq!(
            result.terminal_state,
            TerminalState::Terminated {
                speaker: "Moderator".into(),
                round: 5,
            }
        );
        assert!(result.final_summary.is_produced());
    }

    #[tokio::test]
    async fn test_rounds_never_exceed_max() {
        for max_rounds in 1..=12 {
            let (use_case, _) = use_case(ScriptedGenerator::echo());
            let config = MeetingConfig::with_default_personas("Agenda").with_max_rounds(max_rounds);
            let result = use_case.execute(config).await.unwrap();
            assert!(result.rounds() <= max_rounds as usize);
        }
    }

    #[tokio::test]
    async fn test_history_grows_with_each_turn() {
        let (use_case, gateway) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::with_default_personas("Agenda").with_max_rounds(4);

        use_case.execute(config).await.unwrap();

        let history_lengths: Vec<usize> = gateway.calls().iter().map(|(_, len)| *len).collect();
        assert_eq!(history_lengths, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_moderator_directed_meeting() {
        let (use_case, _) = use_case(ScriptedGenerator::echo());
        let config = MeetingConfig::with_default_personas("Design a login system with 2FA")
            .with_selection(SpeakerSelection::ModeratorDirected)
            .with_max_rounds(20);

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(
            speakers(&result),
            vec![
                "Moderator",
                "Management_Agent",
                "Moderator",
                "Technical_Agent",
                "Moderator",
                "Quality_Agent",
                "Moderator",
                "Minute_Taker",
                "Moderator",
            ]
        );
        assert!(matches!(
            result.terminal_state,
            TerminalState::Terminated { round: 8, .. }
        ));
        assert!(result.final_summary.is_produced());
    }

    #[tokio::test]
    async fn test_custom_scheduler_is_used() {
        struct AlwaysQuality;

        impl TurnScheduler for AlwaysQuality {
            fn next_speaker<'r>(
                &self,
                _round: usize,
                roster: &'r meeting_domain::Roster,
                _transcript: &meeting_domain::Transcript,
            ) -> &'r Participant {
                roster
                    .get(&Personas::QUALITY.into())
                    .unwrap_or(roster.moderator())
            }
        }

        let (use_case, _) = use_case(ScriptedGenerator::echo());
        let use_case = use_case.with_scheduler(Arc::new(AlwaysQuality));
        let config = MeetingConfig::with_default_personas("Agenda").with_max_rounds(3);

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(
            speakers(&result)[1..],
            ["Quality_Agent", "Quality_Agent", "Quality_Agent"]
        );
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried_when_configured() {
        let gateway = Arc::new(ScriptedGenerator::with_replies(vec![
            Err(GenerationError::RateLimited("429".into())),
            Ok("Minutes after retry".to_string()),
        ]));
        let params = ExecutionParams::default()
            .with_retry_attempts(1)
            .with_retry_backoff(Duration::ZERO);
        let use_case = RunMeetingUseCase::new(Arc::clone(&gateway), params);
        let config = MeetingConfig::with_default_personas("Agenda").with_max_rounds(1);

        let result = use_case.execute(config).await.unwrap();

        assert_eq!(result.final_summary.content(), Some("Minutes after retry"));
        assert_eq!(gateway.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_no_retry_by_default() {
        let (use_case, gateway) = use_case(ScriptedGenerator::with_replies(vec![Err(
            GenerationError::Timeout,
        )]));
        let config = MeetingConfig::with_default_personas("Agenda");

        let result = use_case.execute(config).await.unwrap();

        assert!(result.terminal_state.is_aborted());
        assert_eq!(gateway.calls().len(), 1);
        assert_eq!(result.transcript.len(), 1);
    }

    #[tokio::test]
    async fn test_progress_and_log_events() {
        let logger = Arc::new(CollectingLogger {
            events: Mutex::new(Vec::new()),
        });
        let (use_case, _) = use_case(ScriptedGenerator::echo());
        let use_case = use_case.with_conversation_logger(logger.clone());
        let progress = RecordingProgress::new();
        let config = MeetingConfig::with_default_personas("Agenda").with_max_rounds(2);

        use_case
            .execute_with_progress(config, &progress)
            .await
            .unwrap();

        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start:5:2",
                "turn:1:Minute_Taker",
                "done:1",
                "turn:2:Management_Agent",
                "done:2",
                "end:round_limit_reached",
            ]
        );
        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "meeting_started",
                "turn_appended",
                "turn_appended",
                "turn_appended",
                "meeting_finished",
            ]
        );
    }
}
