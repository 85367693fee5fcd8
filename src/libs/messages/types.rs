#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleMonitor,
    PromptInterval,
    PromptNotifier,
    PromptCaptureCommand,
    PromptAcknowledgeAlerts,

    // === INTENTION MESSAGES ===
    IntentionQuestion,
    IntentionExamples,
    PromptIntention,
    IntentionsSet(String), // comma separated tags
    IntentionsEmpty,
    IntentionsEmptyRetry,

    // === MONITOR MESSAGES ===
    MonitorStarted { interval: u64 },
    MonitorStopHint,
    MonitorStopping,
    MonitorStopped,
    MonitorAlreadyStarted,
    MonitorNotRunning,
    MonitorNoIntentions,
    SampleTaken(String), // verdict
    SampleFailed(String),
    PersistFailed(String),
    NotificationFailed(String),
    DeviationAlert,
    AlertTitle,
    AlertAcknowledge,

    // === SIGNAL MESSAGES ===
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === CAPTURE MESSAGES ===
    CaptureToolNotFound,
    CaptureCommandEmpty,
    CaptureCommandFailed(String, String), // program, status
    CaptureFileEmpty,

    // === REPORT MESSAGES ===
    ReportHeader,
    ReportWork(f64),
    ReportEntertainment(f64),
    ReportUnknown(f64),
    ReportProductivity(f64),
    ReportNoEntries,
    ActivityLogNotFound(String), // path
    ActivityLogParseFailed(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingData(String, String), // data, format
}
