#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::{date, datetime};
    use crate::{
        channel::{socket_endpoint, Handshake},
        Board, DepartmentStats, Frame, FrameError, Packet, ReconnectPolicy, ServerEvent,
        VoteChoice, VoteRecord, VotesResponse, percent,
    };

    fn vote(dept: &str, choice: VoteChoice) -> VoteRecord {
        VoteRecord::at(dept, choice, datetime!(2024-05-01 09:30 UTC))
    }

    fn board(depts: &[&str], votes: &[(&str, VoteChoice)]) -> Board {
        let mut b = Board::new(depts.iter().map(|d| d.to_string()).collect());
        b.replace_votes(votes.iter().map(|(d, c)| vote(d, *c)).collect());
        b
    }

    #[test]
    fn test_vote_record_wire_format() {
        let record = vote("MT100", VoteChoice::Like);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"department": "MT100", "vote": "Like", "timestamp": "2024-05-01T09:30:00Z"})
        );

        let from_browser: VoteRecord = serde_json::from_value(json!({
            "department": "SGA", "vote": "Dislike", "timestamp": "2024-05-01T09:30:00.123Z"
        })).unwrap();
        assert_eq!(from_browser.vote, VoteChoice::Dislike);

        assert!(serde_json::from_value::<VoteRecord>(json!({
            "department": "SGA", "vote": "yes", "timestamp": "2024-05-01T09:30:00Z"
        })).is_err());
    }

    #[test]
    fn test_timestamp_without_offset_is_kept() {
        let snapshot = json!([
            {"department": "MT100", "vote": "Like", "timestamp": "2024-05-01T09:30:00Z"},
            {"department": "SGA", "vote": "Dislike", "timestamp": "2024-05-01T09:30:00.123456"}
        ]);
        let Some(ServerEvent::VotesUpdated(votes)) = ServerEvent::from_event("votes_updated", &[snapshot.clone()]).unwrap() else {
            panic!("expected a votes update");
        };
        assert_eq!(votes.len(), 2);
        assert_eq!(votes[1].timestamp, "2024-05-01T09:30:00.123456");

        let response: VotesResponse = serde_json::from_value(json!({"votes": snapshot})).unwrap();
        assert_eq!(response.votes, votes);
    }

    #[test]
    fn test_votes_response_tolerates_missing_list() {
        assert!(serde_json::from_str::<VotesResponse>("{}").unwrap().votes.is_empty());
        assert!(serde_json::from_str::<VotesResponse>(r#"{"votes": null}"#).unwrap().votes.is_empty());
    }

    #[test]
    fn test_stats_total_is_likes_plus_dislikes() {
        use VoteChoice::*;
        let b = board(
            &["MT100", "MT200", "SGA"],
            &[("MT100", Like), ("MT100", Dislike), ("MT100", Like), ("SGA", Dislike), ("XX", Like)],
        );
        for (_, stats) in b.stats() {
            assert_eq!(stats.total, stats.likes + stats.dislikes);
        }
        assert_eq!(b.stats_for("MT100"), DepartmentStats { likes: 2, dislikes: 1, total: 3 });
        assert_eq!(b.stats_for("MT200"), DepartmentStats::default());
        assert_eq!(b.totals(), DepartmentStats { likes: 3, dislikes: 2, total: 5 });
    }

    #[test]
    fn test_stats_follow_department_order() {
        let b = board(&["SGA", "MT100"], &[]);
        let names: Vec<_> = b.stats().into_iter().map(|(d, _)| d).collect();
        assert_eq!(names, vec!["SGA", "MT100"]);
    }

    #[test]
    fn test_duplicate_votes_are_counted() {
        let b = board(&["MT100"], &[("MT100", VoteChoice::Like), ("MT100", VoteChoice::Like)]);
        assert_eq!(b.stats_for("MT100").likes, 2);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(3, 3), 100.0);
        let stats = DepartmentStats { likes: 1, dislikes: 3, total: 4 };
        assert_eq!(stats.like_percent() + stats.dislike_percent(), 100.0);
    }

    #[test]
    fn test_replacing_votes_is_idempotent() {
        let payload = vec![vote("MT100", VoteChoice::Like)];
        let mut b = Board::default();
        b.replace_votes(payload.clone());
        let once = b.clone();
        b.replace_votes(payload);
        assert_eq!(b, once);
    }

    #[test]
    fn test_clear_zeroes_every_department() {
        let mut b = board(&["MT100", "SGA"], &[("MT100", VoteChoice::Like), ("SGA", VoteChoice::Dislike)]);
        b.clear_votes();
        assert_eq!(b.total_votes(), 0);
        assert!(b.stats().iter().all(|(_, s)| *s == DepartmentStats::default()));
        assert_eq!(b.totals(), DepartmentStats::default());
    }

    #[test]
    fn test_export_file_name_uses_iso_date() {
        assert_eq!(crate::export_file_name(date!(2024-03-07)), "department_votes_2024-03-07.csv");
    }

    #[test]
    fn test_template_lists_default_departments() {
        let parsed = crate::parse_department_file(crate::TEMPLATE_FILE_NAME, &crate::department_template()).unwrap();
        assert_eq!(parsed, crate::default_departments());
    }

    #[test]
    fn test_engine_handshake_and_control_frames() {
        let open = Frame::decode(r#"0{"sid":"abc","upgrades":[],"pingInterval":25000,"pingTimeout":20000,"maxPayload":1000000}"#).unwrap();
        assert_eq!(open, Frame::Open(Handshake {
            sid: "abc".into(),
            upgrades: vec![],
            ping_interval: 25000,
            ping_timeout: 20000,
            max_payload: Some(1_000_000),
        }));
        assert_eq!(Frame::decode("2").unwrap(), Frame::Ping);
        assert_eq!(Frame::Pong.encode(), "3");
        assert_eq!(Frame::Message(Packet::Connect).encode(), "40");
        assert_eq!(Frame::decode("40{\"sid\":\"x\"}").unwrap(), Frame::Message(Packet::Connect));
        assert_eq!(Frame::decode(""), Err(FrameError::Empty));
        assert_eq!(Frame::decode("9"), Err(FrameError::UnknownEngineType('9')));
        assert_eq!(Frame::decode("451-[\"votes_updated\",{\"_placeholder\":true,\"num\":0}]"), Err(FrameError::Binary));
    }

    #[test]
    fn test_event_decoding_with_namespace_and_ack() {
        let plain = Frame::decode(r#"42["votes_cleared"]"#).unwrap();
        let namespaced = Frame::decode(r#"42/,7["votes_cleared"]"#).unwrap();
        let expected = Frame::Message(Packet::Event { name: "votes_cleared".into(), args: vec![] });
        assert_eq!(plain, expected);
        assert_eq!(namespaced, expected);

        let event = Packet::Event { name: "departments_updated".into(), args: vec![json!(["A", "B"])] };
        assert_eq!(Packet::decode(&event.encode()).unwrap(), event);

        assert!(matches!(Frame::decode(r#"42{"name":"x"}"#), Err(FrameError::Payload(_))));
        assert!(matches!(Frame::decode("42[1]"), Err(FrameError::Payload(_))));
    }

    #[test]
    fn test_connect_error_message() {
        assert_eq!(
            Frame::decode(r#"44{"message":"Not authorized"}"#).unwrap(),
            Frame::Message(Packet::ConnectError(Some("Not authorized".into())))
        );
    }

    #[test]
    fn test_server_events() {
        let votes = json!([{"department": "MT100", "vote": "Like", "timestamp": "2024-05-01T09:30:00Z"}]);
        assert_eq!(
            ServerEvent::from_event("votes_updated", &[votes]).unwrap(),
            Some(ServerEvent::VotesUpdated(vec![vote("MT100", VoteChoice::Like)]))
        );
        assert_eq!(
            ServerEvent::from_event("votes_updated", &[json!(null)]).unwrap(),
            Some(ServerEvent::VotesUpdated(vec![]))
        );
        assert_eq!(
            ServerEvent::from_event("departments_updated", &[json!(["A"])]).unwrap(),
            Some(ServerEvent::DepartmentsUpdated(vec!["A".into()]))
        );
        assert_eq!(ServerEvent::from_event("votes_cleared", &[]).unwrap(), Some(ServerEvent::VotesCleared));
        assert_eq!(ServerEvent::from_event("user_count", &[json!(3)]).unwrap(), None);
        assert!(ServerEvent::from_event("departments_updated", &[json!("A")]).is_err());
    }

    #[test]
    fn test_empty_department_broadcast_is_ignored() {
        assert_eq!(ServerEvent::from_event("departments_updated", &[json!([])]).unwrap(), None);
    }

    #[test]
    fn test_handshake_liveness_window() {
        let handshake = Handshake {
            sid: "abc".into(),
            upgrades: vec![],
            ping_interval: 25_000,
            ping_timeout: 20_000,
            max_payload: None,
        };
        assert_eq!(handshake.liveness_ms(), 45_000);
        assert_eq!(handshake.liveness_ms(), crate::channel::DEFAULT_LIVENESS_MS);

        let huge = Handshake { ping_interval: u64::MAX, ..handshake };
        assert_eq!(huge.liveness_ms(), u32::MAX);
    }

    #[test]
    fn test_socket_endpoint() {
        assert_eq!(
            socket_endpoint("https://votes.example/", "").unwrap(),
            "wss://votes.example/socket.io/?EIO=4&transport=websocket"
        );
        assert_eq!(
            socket_endpoint("", "http://localhost:8080").unwrap(),
            "ws://localhost:8080/socket.io/?EIO=4&transport=websocket"
        );
        assert!(matches!(socket_endpoint("votes.example", ""), Err(FrameError::Url(_))));
    }

    #[test]
    fn test_reconnect_budget() {
        let policy = ReconnectPolicy::default();
        assert_eq!(policy.delay_for(0), None);
        assert_eq!(policy.delay_for(1), Some(1_000));
        assert_eq!(policy.delay_for(5), Some(1_000));
        assert_eq!(policy.delay_for(6), None);
    }
}
