#[cfg(test)]
mod tests {
    use focuswatch::libs::activity_log::ActivityLog;
    use focuswatch::libs::classifier::Verdict;
    use focuswatch::libs::intention::{parse, IntentionSet};
    use focuswatch::libs::monitor::{MonitorError, MonitorLoop, MonitorState, TickOutcome};
    use focuswatch::libs::notifier::{NotificationError, Notifier};
    use focuswatch::libs::sampler::{CaptureError, Observation, SampleError, Sampler};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tokio_util::sync::CancellationToken;

    /// Replays a fixed list of samples. `None` stands for a failed capture.
    /// Once the script is exhausted the stop token is cancelled.
    struct ScriptedSampler {
        script: Mutex<VecDeque<Option<Observation>>>,
        stop: CancellationToken,
    }

    impl ScriptedSampler {
        fn new(script: Vec<Option<Observation>>, stop: CancellationToken) -> Self {
            Self {
                script: Mutex::new(script.into()),
                stop,
            }
        }
    }

    impl Sampler for ScriptedSampler {
        fn sample(&self) -> Result<Observation, SampleError> {
            let mut script = self.script.lock().unwrap();
            let next = script.pop_front();
            if script.is_empty() {
                self.stop.cancel();
            }
            match next.flatten() {
                Some(observation) => Ok(observation),
                None => Err(CaptureError::Unavailable("no display".to_string()).into()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn count(&self) -> usize {
            self.messages.lock().unwrap().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) -> Result<(), NotificationError> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _message: &str) -> Result<(), NotificationError> {
            Err(NotificationError::Command("notify-send".to_string(), "exit status: 1".to_string()))
        }
    }

    struct MonitorTestContext {
        temp_dir: TempDir,
    }

    impl AsyncTestContext for MonitorTestContext {
        async fn setup() -> Self {
            MonitorTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn editor() -> Observation {
        Observation {
            has_text_editor: true,
            ..Observation::default()
        }
    }

    fn browser() -> Observation {
        Observation {
            has_browser: true,
            ..Observation::default()
        }
    }

    fn entertainment() -> Observation {
        Observation {
            has_entertainment: true,
            ..Observation::default()
        }
    }

    fn coding_and_research() -> IntentionSet {
        parse("coding in an editor and research in a browser")
    }

    fn monitor_with(
        intentions: IntentionSet,
        interval: Duration,
        script: Vec<Option<Observation>>,
        notifier: Arc<dyn Notifier>,
        log: ActivityLog,
    ) -> MonitorLoop {
        let token = CancellationToken::new();
        let sampler = Arc::new(ScriptedSampler::new(script, token.clone()));
        MonitorLoop::new(intentions, interval, sampler, notifier, log).with_stop_token(token)
    }

    #[test]
    fn test_start_requires_intentions() {
        let mut monitor = monitor_with(
            IntentionSet::new(),
            Duration::from_secs(300),
            vec![],
            Arc::new(RecordingNotifier::default()),
            ActivityLog::in_memory(),
        );

        assert_eq!(monitor.start(), Err(MonitorError::NoIntentions));
        assert_eq!(monitor.state(), MonitorState::Idle);
    }

    #[test]
    fn test_state_transitions() {
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![],
            Arc::new(RecordingNotifier::default()),
            ActivityLog::in_memory(),
        );

        assert_eq!(monitor.state(), MonitorState::Idle);
        monitor.start().unwrap();
        assert_eq!(monitor.state(), MonitorState::Running);
        assert_eq!(monitor.start(), Err(MonitorError::AlreadyStarted));

        monitor.stop();
        assert_eq!(monitor.state(), MonitorState::Stopped);
        assert!(monitor.stop_token().is_cancelled());
        assert_eq!(monitor.start(), Err(MonitorError::AlreadyStarted));

        // Stopping twice is harmless.
        monitor.stop();
        assert_eq!(monitor.state(), MonitorState::Stopped);
    }

    #[tokio::test]
    async fn test_tick_requires_running_state() {
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![Some(editor())],
            Arc::new(RecordingNotifier::default()),
            ActivityLog::in_memory(),
        );

        assert_eq!(monitor.tick().await, Err(MonitorError::NotRunning));
        assert_eq!(monitor.run().await, Err(MonitorError::NotRunning));
        assert!(monitor.log().is_empty());
    }

    #[tokio::test]
    async fn test_five_tick_session_report() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![
                Some(editor()),
                Some(browser()),
                Some(Observation::default()),
                Some(entertainment()),
                Some(editor()),
            ],
            notifier.clone(),
            ActivityLog::in_memory(),
        );
        monitor.start().unwrap();

        let mut outcomes = Vec::new();
        for _ in 0..5 {
            outcomes.push(monitor.tick().await.unwrap());
        }

        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Logged(Verdict::Work),
                TickOutcome::Logged(Verdict::Work),
                TickOutcome::Logged(Verdict::Unknown),
                TickOutcome::Logged(Verdict::Entertainment),
                TickOutcome::Logged(Verdict::Work),
            ]
        );
        assert_eq!(notifier.count(), 1);

        let report = monitor.report();
        assert_eq!(report.work_seconds, 900);
        assert_eq!(report.entertainment_seconds, 300);
        assert_eq!(report.unknown_seconds, 300);
        assert!((report.work_hours() - 0.25).abs() < 1e-9);
        assert!((report.entertainment_hours() - 1.0 / 12.0).abs() < 1e-9);
        assert!((report.unknown_hours() - 1.0 / 12.0).abs() < 1e-9);
        assert!((report.productivity_ratio - 60.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_failed_sample_is_not_logged() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![Some(editor()), None, Some(editor())],
            notifier.clone(),
            ActivityLog::in_memory(),
        );
        monitor.start().unwrap();

        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Logged(Verdict::Work));
        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Skipped);
        assert_eq!(monitor.log().len(), 1);
        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Logged(Verdict::Work));
        assert_eq!(monitor.log().len(), 2);
        assert_eq!(notifier.count(), 0);
        assert_eq!(monitor.state(), MonitorState::Running);
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_block_logging() {
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![Some(entertainment()), Some(editor())],
            Arc::new(FailingNotifier),
            ActivityLog::in_memory(),
        );
        monitor.start().unwrap();

        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Logged(Verdict::Entertainment));
        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Logged(Verdict::Work));
        assert_eq!(monitor.log().len(), 2);
    }

    #[tokio::test]
    async fn test_matching_activity_is_never_alerted() {
        let notifier = Arc::new(RecordingNotifier::default());
        let both = Observation {
            has_text_editor: true,
            has_entertainment: true,
            ..Observation::default()
        };
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![Some(both)],
            notifier.clone(),
            ActivityLog::in_memory(),
        );
        monitor.start().unwrap();

        assert_eq!(monitor.tick().await.unwrap(), TickOutcome::Logged(Verdict::Work));
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_run_stops_when_token_is_cancelled() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_millis(1),
            vec![Some(editor()), None, Some(entertainment()), Some(browser())],
            notifier.clone(),
            ActivityLog::in_memory(),
        );
        monitor.start().unwrap();

        tokio::time::timeout(Duration::from_secs(10), monitor.run())
            .await
            .expect("monitor did not stop")
            .unwrap();

        assert_eq!(monitor.state(), MonitorState::Stopped);
        let verdicts: Vec<Verdict> = monitor.log().all().iter().map(|e| e.verdict).collect();
        assert_eq!(verdicts, vec![Verdict::Work, Verdict::Entertainment, Verdict::Work]);
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_cancel_interrupts_long_sleep() {
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(3600),
            vec![Some(editor()), Some(editor())],
            Arc::new(RecordingNotifier::default()),
            ActivityLog::in_memory(),
        );
        monitor.start().unwrap();

        let token = monitor.stop_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });

        tokio::time::timeout(Duration::from_secs(10), monitor.run())
            .await
            .expect("sleep was not interrupted")
            .unwrap();

        assert_eq!(monitor.state(), MonitorState::Stopped);
        assert_eq!(monitor.log().len(), 1);
    }

    #[test_context(MonitorTestContext)]
    #[tokio::test]
    async fn test_session_log_is_persisted(ctx: &mut MonitorTestContext) {
        let path = ctx.temp_dir.path().join("activity_log.json");
        let mut monitor = monitor_with(
            coding_and_research(),
            Duration::from_secs(300),
            vec![Some(editor()), Some(entertainment())],
            Arc::new(RecordingNotifier::default()),
            ActivityLog::persisted(&path),
        );
        monitor.start().unwrap();
        monitor.tick().await.unwrap();
        monitor.tick().await.unwrap();
        monitor.stop();

        let reloaded = ActivityLog::load(&path).unwrap();
        assert_eq!(reloaded.all(), monitor.log().all());
    }
}
