//! Behavioural tests for the chat engine.

use college_buddy::chat::templates::FALLBACK;
use college_buddy::chat::{
    ChatEngine, ChatError, ChatReply, ChatRequest, ConversationTurn, FixedRandom, Intent, Role,
};
use college_buddy::config::ChatConfig;

fn engine() -> ChatEngine {
    ChatEngine::new().expect("engine builds")
}

fn seeded(index: usize) -> ChatEngine {
    engine().with_random(Box::new(FixedRandom(index)))
}

// ---------- totality and determinism ----------

#[test]
fn every_non_empty_message_gets_a_reply() {
    let engine = seeded(0);
    for message in [
        " ",
        "\t\n",
        "  hello there",
        "?",
        "a",
        "🙂",
        "12345",
        "what's for lunch",
        "HELLO",
        "Where do I park my bike",
        "xyzzy plugh",
    ] {
        let reply = engine.reply(message).expect("valid input must produce a reply");
        assert!(!reply.is_empty(), "empty reply for {message:?}");
    }
}

#[test]
fn non_greeting_replies_are_deterministic() {
    let engine = engine();
    for message in ["which bus goes downtown", "xyzzy plugh", "thanks!"] {
        let first = engine.reply(message).expect("reply");
        let second = engine.reply(message).expect("reply");
        assert_eq!(first, second);
    }
}

// ---------- precedence ----------

#[test]
fn earlier_category_wins_over_later_one() {
    let engine = engine();
    assert_eq!(
        engine.classify("tell me about teacher and club").expect("valid"),
        Intent::TeacherInfo
    );
    let reply = engine.reply("tell me about teacher and club").expect("reply");
    assert!(reply.contains("**Teacher Information**"));
    assert!(!reply.contains("College Clubs"));
}

#[test]
fn study_groups_outrank_teachers() {
    assert_eq!(
        engine().classify("teacher led study group").expect("valid"),
        Intent::StudyGroups
    );
}

#[test]
fn case_does_not_matter() {
    let engine = engine();
    let expected = engine.reply("study group").expect("reply");
    assert_eq!(engine.reply("STUDY GROUP").expect("reply"), expected);
    assert_eq!(engine.reply("Study Group").expect("reply"), expected);
    assert!(expected.contains("**Study Groups**"));
}

#[test]
fn keywords_match_inside_other_words() {
    // Plain substring search: "easy" contains "sy".
    assert_eq!(
        engine().classify("is the exam easy").expect("valid"),
        Intent::SecondYear
    );
}

// ---------- greeting ----------

#[test]
fn greeting_at_start_is_recognized() {
    let reply = seeded(0).reply("hello, how are you").expect("reply");
    assert!(reply.starts_with("Hello! 👋 I'm your college assistant."));
}

#[test]
fn greeting_not_at_start_falls_back() {
    let engine = engine();
    assert_eq!(
        engine.classify("well hello there").expect("valid"),
        Intent::Fallback
    );
    assert_eq!(engine.reply("well hello there").expect("reply"), FALLBACK);
}

#[test]
fn greeting_anchor_has_no_word_boundary() {
    assert_eq!(
        engine().classify("history class").expect("valid"),
        Intent::Greeting
    );
}

#[test]
fn leading_whitespace_defeats_greeting_anchor() {
    assert_eq!(
        engine().classify("   hey buddy").expect("valid"),
        Intent::Fallback
    );
    assert_eq!(
        engine().classify("  hello there").expect("valid"),
        Intent::Fallback
    );
}

#[test]
fn whitespace_keeps_keyword_matches() {
    assert_eq!(
        engine().classify("  which bus?  ").expect("valid"),
        Intent::Transport
    );
}

#[test]
fn random_source_picks_synonym() {
    assert!(seeded(2).reply("hi").expect("reply").starts_with("Hey! "));
    assert!(seeded(3).reply("hi").expect("reply").starts_with("Greetings! "));
}

#[test]
fn configured_synonyms_are_used() {
    let config = ChatConfig {
        greetings: vec!["Howdy".to_owned()],
        ..ChatConfig::default()
    };
    let engine = ChatEngine::from_config(&config)
        .expect("engine")
        .with_random(Box::new(FixedRandom(0)));
    assert!(engine.reply("good evening").expect("reply").starts_with("Howdy! 👋"));
}

// ---------- teacher sub-intents ----------

#[test]
fn teacher_sub_intents() {
    let engine = engine();
    assert_eq!(
        engine.classify("when is the teacher available").expect("valid"),
        Intent::TeacherAvailability
    );
    assert_eq!(
        engine.classify("where is the teacher's office").expect("valid"),
        Intent::TeacherSeating
    );
    assert_eq!(
        engine.classify("tell me about teachers").expect("valid"),
        Intent::TeacherInfo
    );

    assert!(engine
        .reply("when is the teacher available")
        .expect("reply")
        .contains("**Teacher Availability**"));
    assert!(engine
        .reply("where is the teacher's office")
        .expect("reply")
        .contains("**Teacher Seating**"));
}

// ---------- fallback and errors ----------

#[test]
fn unknown_message_returns_fallback_verbatim() {
    assert_eq!(engine().reply("xyzzy plugh").expect("reply"), FALLBACK);
}

#[test]
fn empty_message_is_invalid_not_fallback() {
    let engine = engine();
    assert!(matches!(engine.reply(""), Err(ChatError::InvalidInput)));
    assert!(matches!(
        engine.respond(&ChatRequest::default()),
        Err(ChatError::InvalidInput)
    ));
}

#[test]
fn whitespace_only_message_gets_fallback() {
    for message in ["   ", "\t\n"] {
        let reply = engine().handle(&ChatRequest::new(message));
        assert_eq!(reply.status_code(), 200, "status for {message:?}");
        match reply {
            ChatReply::Success(response) => assert_eq!(response.response, FALLBACK),
            ChatReply::Failure { body, .. } => panic!("unexpected failure: {}", body.error),
        }
    }
}

#[test]
fn invalid_input_body() {
    let reply = engine().handle(&ChatRequest::new(""));
    assert_eq!(reply.status_code(), 400);
    let json = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(json, serde_json::json!({ "error": "Message is required" }));
}

#[test]
fn bad_random_draw_is_internal_failure() {
    let reply = seeded(10).handle(&ChatRequest::new("hello"));
    assert_eq!(reply.status_code(), 500);
    let json = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "error": "Something went wrong", "details": "Please try again" })
    );
}

// ---------- response shape ----------

#[test]
fn success_body_shape() {
    let reply = engine().handle(&ChatRequest::new("thank you"));
    assert!(reply.is_success());
    let json = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(json["success"], true);
    assert!(json["response"]
        .as_str()
        .expect("response text")
        .starts_with("You're welcome!"));
    let timestamp = json["timestamp"].as_str().expect("timestamp");
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[test]
fn history_does_not_change_the_reply() {
    let engine = engine();
    let history = vec![
        ConversationTurn {
            role: Role::User,
            content: "where is the bus stop".to_owned(),
            timestamp: None,
        },
        ConversationTurn {
            role: Role::Assistant,
            content: "🚌 **Transport Information**".to_owned(),
            timestamp: None,
        },
    ];
    let with = engine
        .respond(&ChatRequest::new("and the alumni office?").with_history(history))
        .expect("reply");
    let without = engine
        .respond(&ChatRequest::new("and the alumni office?"))
        .expect("reply");
    assert_eq!(with.response, without.response);

    match engine.handle(&ChatRequest::new("and the alumni office?")) {
        ChatReply::Success(response) => assert!(response.response.contains("Alumni Connect")),
        ChatReply::Failure { body, .. } => panic!("unexpected failure: {body:?}"),
    }
}
