use showdown_engine::cards::{Card, Rank as R, Suit as S, RANKS, SUITS};
use showdown_engine::errors::ParseError;
use showdown_engine::hand::{parse_hand, Hand};

#[test]
fn parses_canonical_hand() {
    let hand = parse_hand("2H 4D 6S 8C AD").unwrap();
    assert_eq!(
        hand.cards(),
        &[
            Card::new(R::Two, S::Hearts),
            Card::new(R::Four, S::Diamonds),
            Card::new(R::Six, S::Spades),
            Card::new(R::Eight, S::Clubs),
            Card::new(R::Ace, S::Diamonds),
        ]
    );
}

#[test]
fn lowercase_input_is_normalized() {
    let lower: Hand = "th jd qc ks ah".parse().unwrap();
    let upper: Hand = "TH JD QC KS AH".parse().unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn three_cards_is_wrong_count() {
    assert_eq!(
        parse_hand("2H 4D 6S"),
        Err(ParseError::WrongCardCount { found: 3 })
    );
}

#[test]
fn rank_one_is_unknown() {
    assert_eq!(
        parse_hand("2H 4D 6S 8C 1D"),
        Err(ParseError::UnknownRankOrSuit { token: "1D".into() })
    );
}

#[test]
fn one_character_token_is_bad_format() {
    assert_eq!(
        parse_hand("2H 4D 6S 8C A"),
        Err(ParseError::InvalidCardFormat { token: "A".into() })
    );
}

#[test]
fn unicode_suit_is_unknown_not_malformed() {
    // two characters, so the format is fine; the suit symbol is not
    assert_eq!(
        parse_hand("2♥ 4D 6S 8C AD"),
        Err(ParseError::UnknownRankOrSuit {
            token: "2♥".into()
        })
    );
}

#[test]
fn every_card_in_the_domain_parses() {
    let all: Vec<String> = RANKS
        .iter()
        .flat_map(|r| SUITS.iter().map(move |s| format!("{}{}", r, s)))
        .collect();
    assert_eq!(all.len(), 52);

    // slide a five-card window over the whole domain
    for window in all.windows(5) {
        let text = window.join(" ");
        let hand = parse_hand(&text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(hand.to_string(), text);
    }
}

#[test]
fn error_messages_name_the_token() {
    let err = parse_hand("2H 4D 6S 8C ZZ").unwrap_err();
    assert!(err.to_string().contains("ZZ"));
    let err = parse_hand("2H").unwrap_err();
    assert!(err.to_string().contains("5 cards"));
}
