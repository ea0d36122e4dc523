use fake_drawer::{run_reveal, RevealError, RevealEvent, RevealStream, Session, WordEntry, WordSet};
use futures_util::StreamExt;
use proptest::prelude::*;

fn aardvark() -> WordSet {
    WordSet::new(vec![WordEntry::new("aardvark", "animal")])
}

async fn collect(stream: RevealStream) -> Vec<RevealEvent> {
    stream.collect().await
}

#[tokio::test]
async fn single_word_three_players() {
    let events = collect(run_reveal(&aardvark(), 3)).await;

    assert_eq!(events.len(), 4);
    assert_eq!(
        events[0],
        RevealEvent::CategoryAnnouncement { category: "animal".into() }
    );

    let mut impostors = 0;
    for (i, event) in events[1..].iter().enumerate() {
        match event {
            RevealEvent::PlayerReveal { player, is_impostor, word } => {
                assert_eq!(*player, i);
                assert_eq!(word, "aardvark");
                impostors += usize::from(*is_impostor);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(impostors, 1);
}

#[tokio::test]
async fn empty_word_set_fails_once() {
    let events = collect(run_reveal(&WordSet::default(), 3)).await;
    assert_eq!(events, vec![RevealEvent::Failure(RevealError::EmptyWordSet)]);
}

#[tokio::test]
async fn zero_and_negative_player_counts_fail_once() {
    for count in [0, -1] {
        let events = collect(run_reveal(&aardvark(), count)).await;
        assert_eq!(events, vec![RevealEvent::Failure(RevealError::InvalidPlayerCount)]);
    }
}

#[tokio::test]
async fn missing_category_or_text_fails_once() {
    for json in [
        r#"[{"mooo":"animal","text":"aardvark"}]"#,
        r#"[{"category":"animal","mooo":"aardvark"}]"#,
    ] {
        let words: WordSet = serde_json::from_str(json).unwrap();
        let events = collect(run_reveal(&words, 1)).await;
        assert_eq!(events, vec![RevealEvent::Failure(RevealError::MalformedEntry)]);
    }
}

#[tokio::test]
async fn failure_message_matches_reported_text() {
    let mut stream = run_reveal(&WordSet::default(), 3);
    match stream.next_event().await {
        Some(RevealEvent::Failure(error)) => {
            assert_eq!(error.to_string(), "words map cannot be empty")
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn repeated_runs_are_independent_sessions() {
    let words: WordSet = (0..20)
        .map(|i| WordEntry::new(format!("word{i}"), format!("category{i}")))
        .collect();

    for _ in 0..10 {
        let events = collect(run_reveal(&words, 6)).await;
        assert_eq!(events.len(), 7);
        let RevealEvent::CategoryAnnouncement { category } = &events[0] else {
            panic!("category must come first");
        };
        let suffix = category.trim_start_matches("category");
        let expected_word = format!("word{suffix}");
        let impostors = events[1..]
            .iter()
            .filter(|e| match e {
                RevealEvent::PlayerReveal { is_impostor, word, .. } => {
                    assert_eq!(word, &expected_word);
                    *is_impostor
                }
                other => panic!("unexpected event {other:?}"),
            })
            .count();
        assert_eq!(impostors, 1);
    }
}

#[tokio::test]
async fn word_set_is_left_untouched() {
    let words = aardvark();
    let before = words.clone();
    let _ = collect(run_reveal(&words, 4)).await;
    assert_eq!(words, before);
}

proptest! {
    #[test]
    fn valid_sessions_hold_every_invariant(
        pairs in proptest::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}"), 1..16),
        player_count in 1i64..32,
    ) {
        let words: WordSet = pairs
            .iter()
            .map(|(word, category)| WordEntry::new(word.clone(), category.clone()))
            .collect();

        let session = Session::draw(&words, player_count).unwrap();
        let (word, category) = (session.word().to_owned(), session.category().to_owned());
        prop_assert!(pairs.iter().any(|(w, c)| *w == word && *c == category));

        let events: Vec<_> = session.into_events().collect();
        prop_assert_eq!(events.len() as i64, 1 + player_count);
        prop_assert_eq!(
            &events[0],
            &RevealEvent::CategoryAnnouncement { category: category.clone() }
        );

        let mut impostors = 0;
        for (i, event) in events[1..].iter().enumerate() {
            match event {
                RevealEvent::PlayerReveal { player, is_impostor, word: revealed } => {
                    prop_assert_eq!(*player, i);
                    prop_assert_eq!(revealed, &word);
                    impostors += usize::from(*is_impostor);
                }
                other => prop_assert!(false, "unexpected event {:?}", other),
            }
        }
        prop_assert_eq!(impostors, 1);
    }

    #[test]
    fn non_positive_counts_never_draw(player_count in i64::MIN..=0) {
        prop_assert_eq!(
            Session::draw(&aardvark(), player_count),
            Err(RevealError::InvalidPlayerCount)
        );
    }
}
