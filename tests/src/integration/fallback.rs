//! # Display Fallback Flow
//!
//! When neither full-screen presentation is usable, selection must land on
//! the console banner and the banner must be printed exactly once.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use first_boot::display::{
        candidates, select_strategy, ConsoleStrategy, DisplayContext, DisplayStrategy,
        MissingToolkit,
    };
    use first_boot::DisplayMode;

    use crate::fixtures::{config_for, device_context, fake_proc, SharedBuf, OS_RELEASE};

    fn missing_toolkits() -> Vec<Box<dyn DisplayStrategy>> {
        vec![
            Box::new(MissingToolkit::new("dashboard")),
            Box::new(MissingToolkit::new("compact")),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_toolkit_falls_back_to_console_banner() {
        let dir = tempfile::tempdir().unwrap();
        fake_proc(dir.path()).unwrap();

        let buf = SharedBuf::default();
        let console = ConsoleStrategy::with_io(
            Box::new(buf.clone()),
            tokio::time::sleep(Duration::from_secs(30)),
        );

        let chosen = select_strategy(missing_toolkits(), Box::new(console));
        assert_eq!(chosen.name(), "console");

        chosen
            .run(device_context(dir.path()))
            .await
            .unwrap();

        let text = buf.text();
        assert!(text.starts_with(&"=".repeat(50)));
        assert!(text.contains("CoreARM - Console Mode"));
        assert!(text.contains(&format!("System: Linux {}", OS_RELEASE)));
        assert!(text.contains(&format!("Architecture: {}", std::env::consts::ARCH)));
        assert!(text.contains("Date/Time: "));
        // Idling for 30 seconds must not repeat the banner.
        assert_eq!(text.matches("Console Mode").count(), 1);
        assert!(text.ends_with("\nExiting application\n"));
    }

    #[test]
    fn test_console_mode_has_no_candidates() {
        let chosen = select_strategy(
            candidates(DisplayMode::Console),
            Box::new(ConsoleStrategy::with_io(
                Box::new(std::io::sink()),
                std::future::pending(),
            )),
        );
        assert_eq!(chosen.name(), "console");
    }

    #[tokio::test(start_paused = true)]
    async fn test_console_banner_with_unreadable_proc() {
        let dir = tempfile::tempdir().unwrap();

        let buf = SharedBuf::default();
        let console = Box::new(ConsoleStrategy::with_io(
            Box::new(buf.clone()),
            tokio::time::sleep(Duration::from_millis(10)),
        ));
        console
            .run(DisplayContext::new(config_for(dir.path())))
            .await
            .unwrap();

        let text = buf.text();
        assert!(text.contains("System: "));
        assert!(text.contains("Exiting application"));
    }
}
