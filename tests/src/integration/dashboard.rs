//! # Dashboard Command Flow
//!
//! Key press → action → command execution → output dialog, with the real
//! `CommandRunner` underneath.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use first_boot::domain::{Action, App, AppState};
    use first_boot::{CommandRunner, DiagnosticCommand};

    fn app() -> App {
        App::new(
            "CoreARM - Sample Application".into(),
            "Welcome to CoreARM".into(),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn test_spawn_failure_lands_in_output_dialog() {
        let mut app = app();
        let runner = CommandRunner::new("/nonexistent/first-boot-shell");

        let action = app.on_key(KeyCode::Char('1'));
        assert_eq!(action, Action::Run(DiagnosticCommand::Uptime));

        if let Action::Run(command) = action {
            let result = runner.run(command).await;
            assert!(result.is_err());
            app.show_output(command, result);
        }

        assert_eq!(app.state, AppState::Output);
        let view = app.output.as_ref().unwrap();
        assert!(view.text.contains("uptime"));

        app.on_key(KeyCode::Enter);
        assert_eq!(app.state, AppState::Dashboard);
        assert!(!app.should_quit());
    }
}
