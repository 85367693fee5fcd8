#[cfg(test)]
mod tests {
    use focuswatch::libs::formatter::{format_hours, format_percent};

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "0.00");
        assert_eq!(format_hours(0.25), "0.25");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
        assert_eq!(format_hours(1.0 / 6.0), "0.17");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(60.0), "60.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(200.0 / 3.0), "66.67%");
    }
}
