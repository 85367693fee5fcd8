#[cfg(test)]
mod tests {
    use focuswatch::libs::classifier::{classify, detected_categories, Verdict};
    use focuswatch::libs::intention::{parse, Intention, IntentionSet};
    use focuswatch::libs::sampler::Observation;

    fn observation(editor: bool, browser: bool, terminal: bool, entertainment: bool) -> Observation {
        Observation {
            detected_apps: vec![],
            has_text_editor: editor,
            has_browser: browser,
            has_terminal: terminal,
            has_entertainment: entertainment,
        }
    }

    fn all_intentions() -> IntentionSet {
        [
            Intention::TextEditors,
            Intention::Browsers,
            Intention::Terminals,
            Intention::Productivity,
            Intention::Work,
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_nothing_detected_is_unknown_for_any_intentions() {
        let obs = Observation::default();
        assert_eq!(classify(&obs, &IntentionSet::new()), Verdict::Unknown);
        assert_eq!(classify(&obs, &all_intentions()), Verdict::Unknown);
        assert_eq!(classify(&obs, &parse("coding in vim")), Verdict::Unknown);
    }

    #[test]
    fn test_intended_editor_is_work() {
        let intentions = parse("writing in an editor");
        assert_eq!(classify(&observation(true, false, false, false), &intentions), Verdict::Work);
    }

    #[test]
    fn test_unintended_editor_is_unknown_not_entertainment() {
        let intentions = parse("research in firefox");
        assert!(!intentions.contains(Intention::TextEditors));
        assert_eq!(classify(&observation(true, false, false, false), &intentions), Verdict::Unknown);
    }

    #[test]
    fn test_unintended_browser_falls_through_to_entertainment_flag() {
        let intentions = parse("programming in a terminal");
        assert_eq!(classify(&observation(false, true, false, true), &intentions), Verdict::Entertainment);
        assert_eq!(classify(&observation(false, true, false, false), &intentions), Verdict::Unknown);
    }

    #[test]
    fn test_matching_intention_wins_over_entertainment() {
        let intentions = parse("bash");
        assert_eq!(classify(&observation(false, false, true, true), &intentions), Verdict::Work);
    }

    #[test]
    fn test_entertainment_alone() {
        assert_eq!(classify(&observation(false, false, false, true), &all_intentions()), Verdict::Entertainment);
    }

    #[test]
    fn test_generic_work_tag_does_not_match_applications() {
        let intentions: IntentionSet = [Intention::Work].into_iter().collect();
        assert_eq!(classify(&observation(true, true, true, false), &intentions), Verdict::Unknown);
    }

    #[test]
    fn test_detected_categories() {
        assert!(detected_categories(&Observation::default()).is_empty());
        assert_eq!(
            detected_categories(&observation(true, false, true, true)),
            vec![Intention::TextEditors, Intention::Terminals]
        );
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Verdict::Entertainment).unwrap(), "\"entertainment\"");
        assert_eq!(Verdict::Work.to_string(), "work");
    }
}
