#[cfg(test)]
mod tests {
    use focuswatch::libs::messages::macros::{debug_requested, decorate, routes_to_tracing};
    use focuswatch::libs::messages::Message;

    #[test]
    fn test_console_output_until_subscriber_is_installed() {
        std::env::set_var("RUST_LOG", "info");
        assert!(debug_requested());

        // Commands other than watch never install a subscriber.
        assert!(!routes_to_tracing());
        focuswatch::msg_info!(Message::IntentionsSet("[text_editors, work]".to_string()));

        tracing_subscriber::fmt().with_test_writer().try_init().unwrap();
        assert!(routes_to_tracing());
    }

    #[test]
    fn test_decorate() {
        assert_eq!(decorate("", &"plain", false), "plain");
        assert_eq!(decorate("⚠️", &Message::MonitorStopped, false), format!("⚠️ {}", Message::MonitorStopped));
        assert_eq!(decorate("✅", &"saved", true), "\n✅ saved\n");
    }
}
