#[cfg(test)]
mod tests {
    use chrono::Duration;
    use devlog::db::sessions::Sessions;
    use devlog::libs::error::DevlogError;
    use devlog::libs::manager::SessionManager;
    use devlog::libs::session::normalize_tags;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ManagerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ManagerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ManagerTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ManagerTestContext)]
    #[test]
    fn test_session_lifecycle(_ctx: &mut ManagerTestContext) {
        let mut manager = SessionManager::with_store(Sessions::new().unwrap());

        // Stopping with nothing running is a typed error
        match manager.stop(None) {
            Err(DevlogError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other.map(|s| s.description)),
        }

        // An empty description never reaches the store
        match manager.start("   ", &[]) {
            Err(DevlogError::Validation(_)) => {}
            other => panic!("expected Validation, got {:?}", other.map(|s| s.description)),
        }
        assert!(manager.current().unwrap().is_none());

        // Start a session; tags are canonicalized on the way in
        let session = manager
            .start("Implementing login", &["Backend".to_string(), " security ".to_string(), "backend".to_string()])
            .unwrap();
        assert!(session.id.is_some());
        assert!(session.is_running());
        assert_eq!(session.tags, vec!["backend".to_string(), "security".to_string()]);

        // current() reflects the stored state
        let current = manager.current().unwrap().unwrap();
        assert_eq!(current.id, session.id);
        assert_eq!(current.description, "Implementing login");

        // A second start fails and leaves the original untouched
        match manager.start("Another task", &[]) {
            Err(DevlogError::Conflict(_)) => {}
            other => panic!("expected Conflict, got {:?}", other.map(|s| s.description)),
        }
        let still_current = manager.current().unwrap().unwrap();
        assert_eq!(still_current.id, session.id);
        assert_eq!(still_current.description, "Implementing login");

        // Stop completes the session: positive duration, strict ordering
        let stopped = manager.stop(Some("done")).unwrap();
        assert_eq!(stopped.id, session.id);
        assert_eq!(stopped.notes.as_deref(), Some("done"));
        let ended_at = stopped.ended_at.unwrap();
        assert!(ended_at > stopped.started_at);
        assert!(stopped.duration().unwrap() >= Duration::zero());

        // Nothing is running anymore; a second stop is NotFound again
        assert!(manager.current().unwrap().is_none());
        assert!(matches!(manager.stop(None), Err(DevlogError::NotFound(_))));
    }

    #[test]
    fn test_normalize_tags() {
        let raw = vec![
            " API ".to_string(),
            "backend".to_string(),
            "api".to_string(),
            "".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(normalize_tags(&raw), vec!["api".to_string(), "backend".to_string()]);

        let empty: Vec<String> = vec![];
        assert!(normalize_tags(&empty).is_empty());
    }
}
