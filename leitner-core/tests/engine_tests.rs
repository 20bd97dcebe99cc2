use leitner_core::{Card, CoreError, Difficulty, Engine, NO_HINT};

fn deck() -> Vec<Card> {
    vec![
        Card::new("hola", "hello").with_hint("a greeting").with_tags(["spanish"]),
        Card::new("adios", "goodbye").with_tags(["spanish", "farewell"]),
        Card::new("merci", "thanks"),
    ]
}

#[test]
fn starts_with_everything_due() {
    let e = Engine::new(deck());
    let p = e.select_due();
    assert_eq!(p.day, 0);
    assert_eq!(p.cards.len(), 3);
    assert!(!p.retired);
    assert_eq!(p.cards[0].front, "adios");
}

#[test]
fn duplicates_collapse() {
    let mut cards = deck();
    cards.push(Card::new("hola", "hello").with_hint("different hint"));
    let e = Engine::new(cards);
    assert_eq!(e.deck().len(), 3);
    assert_eq!(e.buckets().total_cards(), 3);
}

#[test]
fn review_records_transition_and_keeps_old_snapshot() {
    let e = Engine::new(deck());
    let before = e.buckets();
    let out = e.submit_review("hola", "hello", Difficulty::Easy).unwrap();

    assert_eq!(out.review.previous_bucket, 0);
    assert_eq!(out.review.next_bucket, Some(1));
    assert_eq!(out.buckets, e.buckets());
    assert!(before.contains(0, &Card::new("hola", "hello")));
    assert_eq!(e.history().len(), 1);
    assert_eq!(e.find_card_bucket(&Card::new("hola", "hello")), Some(1));

    // bucket 1 is skipped on odd days
    assert_eq!(e.advance_day(), 1);
    let p = e.select_due();
    assert!(p.cards.iter().all(|c| c.front != "hola"));
    assert_eq!(e.select_due(), p);
}

#[test]
fn five_easy_reviews_retire_a_card() {
    let e = Engine::new(vec![Card::new("solo", "only")]);
    for expected in 1..=4 {
        let out = e.submit_review("solo", "only", Difficulty::Easy).unwrap();
        assert_eq!(out.review.next_bucket, Some(expected));
    }
    let last = e.submit_review("solo", "only", Difficulty::Easy).unwrap();
    assert!(last.review.is_retirement());
    assert!(e.select_due().retired);
    assert!(e.select_due().cards.is_empty());

    // the retired card is still a known card, but no longer schedulable
    let card = e.find_card("solo", "only").unwrap();
    let err = e.advance_card(&card, Difficulty::Easy).err().unwrap();
    assert!(err.is_internal());
    assert_eq!(e.history().len(), 5);
}

#[test]
fn unknown_card_is_not_internal() {
    let e = Engine::new(deck());
    let err = e.submit_review("nope", "nada", Difficulty::Wrong).err().unwrap();
    assert!(matches!(err, CoreError::UnknownCard { .. }));
    assert!(!err.is_internal());
    assert!(e.history().is_empty());
}

#[test]
fn hints_come_from_stored_card() {
    let e = Engine::new(deck());
    assert_eq!(e.get_hint(&Card::new("hola", "hello")), "a greeting");
    assert_eq!(e.get_hint(&Card::new("merci", "thanks")), NO_HINT);
}

#[test]
fn progress_reflects_history() {
    let e = Engine::new(deck());
    e.submit_review("hola", "hello", Difficulty::Easy).unwrap();
    e.submit_review("adios", "goodbye", Difficulty::Wrong).unwrap();
    e.submit_review("merci", "thanks", Difficulty::Hard).unwrap();

    let p = e.compute_progress();
    assert_eq!(p.total_flashcards, 3);
    assert_eq!(p.bucket_distribution.get(&0), Some(&2));
    assert_eq!(p.bucket_distribution.get(&1), Some(&1));
    assert_eq!(p.reviews_per_bucket.get(&0), Some(&3));
    assert_eq!(p.reviews_per_bucket.get(&1), Some(&0));
    assert!((p.accuracy_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn difficulty_parses_aliases() {
    assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!("h".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert_eq!("0".parse::<Difficulty>().unwrap(), Difficulty::Wrong);
    assert!("medium".parse::<Difficulty>().is_err());
}
