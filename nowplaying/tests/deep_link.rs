use nowplaying::{parse_time_fragment, DeepLinkResolver, DeepLinkTime, Navigation};

#[test]
fn test_documented_fragments() {
    assert_eq!(
        parse_time_fragment("#t=1:02:03"),
        Some(DeepLinkTime::from_secs(3723))
    );
    assert_eq!(parse_time_fragment("#t=5:09"), Some(DeepLinkTime::from_secs(309)));
    assert_eq!(parse_time_fragment("#t=abc"), None);
}

#[test]
fn test_fragments_without_time_marker() {
    for fragment in ["", "#", "#comments", "#t", "#t=", "#time=1:00", "#t=1", "#t=-1:00"] {
        assert_eq!(parse_time_fragment(fragment), None, "fragment {:?}", fragment);
    }
}

#[test]
fn test_zero_is_a_valid_time() {
    assert_eq!(parse_time_fragment("#t=0:00"), Some(DeepLinkTime::from_secs(0)));
    assert_eq!(parse_time_fragment("#t=00:00:00"), Some(DeepLinkTime::from_secs(0)));
}

#[test]
fn test_leading_zeros() {
    assert_eq!(parse_time_fragment("#t=01:02:03"), Some(DeepLinkTime::from_secs(3723)));
    assert_eq!(parse_time_fragment("#t=007:007"), Some(DeepLinkTime::from_secs(427)));
}

#[test]
fn test_non_ascii_digits_are_rejected() {
    assert_eq!(parse_time_fragment("#t=١:٠٢"), None);
}

#[test]
fn test_resolver_with_page_urls() {
    let mut resolver = DeepLinkResolver::new();

    let first = Navigation::from_url("https://example.com/articles/42#t=2:30").unwrap();
    assert_eq!(resolver.resolve(&first), Some(DeepLinkTime::from_secs(150)));

    // Re-rendering the same navigation must not seek again
    assert_eq!(resolver.resolve(&first), None);
    assert_eq!(resolver.resolve(&first.clone()), None);

    let without_time = Navigation::from_url("https://example.com/articles/42").unwrap();
    assert_eq!(resolver.resolve(&without_time), None);

    // Following the same link again is a new navigation
    let second = Navigation::from_url("https://example.com/articles/42#t=2:30").unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(resolver.resolve(&second), Some(DeepLinkTime::from_secs(150)));
}

#[test]
fn test_share_fragment_round_trip() {
    for seconds in [0, 59, 61, 3599, 3600, 86_399] {
        let time = DeepLinkTime::from_secs(seconds);
        assert_eq!(parse_time_fragment(&time.to_fragment()), Some(time));
    }
}

#[test]
fn test_repeated_time_marker() {
    assert_eq!(parse_time_fragment("#t=now#t=1:30").map(|t| t.as_secs()), Some(90));
    assert_eq!(parse_time_fragment("#t=5#t=0:10").map(|t| t.as_secs()), Some(10));
}
