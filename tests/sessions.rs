#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
    use devlog::db::sessions::Sessions;
    use devlog::libs::session::{Session, SessionQuery};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    fn at(date: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, min, 0).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_session_store_roundtrip(_ctx: &mut StoreTestContext) {
        let mut store = Sessions::new().unwrap();
        let day = Local::now().date_naive() - Duration::days(400);

        // Insert a running session with tags
        let session = Session::new(
            "Implementing login",
            vec!["backend".to_string(), "security".to_string()],
            at(day, 14, 30),
        );
        let id = store.insert(&session).unwrap();
        assert!(id > 0);

        // It is the running session
        let running = store.get_running().unwrap().unwrap();
        assert_eq!(running.id, Some(id));
        assert_eq!(running.description, "Implementing login");
        assert_eq!(running.tags, vec!["backend".to_string(), "security".to_string()]);
        assert!(running.is_running());
        assert!(running.duration().is_none());

        // Finish it
        store.finish(id, at(day, 16, 45), Some("done")).unwrap();
        assert!(store.get_running().unwrap().is_none());

        // Query it back: completed, duration derived from the timestamps
        let all = store.query(&SessionQuery::default()).unwrap();
        let fetched = all.iter().find(|s| s.id == Some(id)).unwrap();
        assert_eq!(fetched.ended_at, Some(at(day, 16, 45)));
        assert_eq!(fetched.notes.as_deref(), Some("done"));
        assert_eq!(fetched.duration(), Some(Duration::minutes(135)));

        // Tag filter matches the stored canonical tag, nothing else
        let tagged = store
            .query(&SessionQuery {
                tag: Some("security".to_string()),
                ..SessionQuery::default()
            })
            .unwrap();
        assert!(tagged.iter().any(|s| s.id == Some(id)));
        let untagged = store
            .query(&SessionQuery {
                tag: Some("frontend".to_string()),
                ..SessionQuery::default()
            })
            .unwrap();
        assert!(!untagged.iter().any(|s| s.id == Some(id)));

        // Date range bounds apply to start_time
        let in_range = store
            .query(&SessionQuery {
                from: Some(at(day, 0, 0)),
                to: Some(at(day, 23, 59)),
                ..SessionQuery::default()
            })
            .unwrap();
        assert_eq!(in_range.len(), 1);
        let out_of_range = store
            .query(&SessionQuery {
                from: Some(at(day + Duration::days(1), 0, 0)),
                to: Some(at(day + Duration::days(2), 0, 0)),
                ..SessionQuery::default()
            })
            .unwrap();
        assert!(out_of_range.is_empty());

        // Substring search hits description and notes, case-insensitively
        let by_description = store
            .query(&SessionQuery {
                search: Some("LOGIN".to_string()),
                ..SessionQuery::default()
            })
            .unwrap();
        assert!(by_description.iter().any(|s| s.id == Some(id)));
        let by_notes = store
            .query(&SessionQuery {
                search: Some("done".to_string()),
                ..SessionQuery::default()
            })
            .unwrap();
        assert!(by_notes.iter().any(|s| s.id == Some(id)));

        // Delete removes the row; a second delete reports not found
        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        let after = store
            .query(&SessionQuery {
                search: Some("Implementing login".to_string()),
                ..SessionQuery::default()
            })
            .unwrap();
        assert!(after.is_empty());

        // Ascending order, and a limit keeps the most recent rows
        for (hour, name) in [(9, "ordering first"), (11, "ordering second"), (15, "ordering third")] {
            let session = Session::new(name, vec!["ordering-check".to_string()], at(day, hour, 0));
            let id = store.insert(&session).unwrap();
            store.finish(id, at(day, hour, 30), None).unwrap();
        }

        let filter = SessionQuery {
            tag: Some("ordering-check".to_string()),
            ..SessionQuery::default()
        };
        let all = store.query(&filter).unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(names, vec!["ordering first", "ordering second", "ordering third"]);

        let limited = store.query(&SessionQuery { limit: Some(2), ..filter }).unwrap();
        let names: Vec<&str> = limited.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(names, vec!["ordering second", "ordering third"]);
    }
}
