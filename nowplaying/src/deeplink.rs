//! Time offsets carried in a page URL fragment, e.g. `#t=1:02:03`.

use crate::error::Result;
use crate::model::NavigationId;
use std::fmt;

const TIME_MARKER: &str = "#t=";

/// A whole number of seconds taken from a deep link
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeepLinkTime(u64);

impl DeepLinkTime {
    pub fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Fragment that links to this time, e.g. `#t=1:02:03`
    pub fn to_fragment(&self) -> String {
        format!("{}{}", TIME_MARKER, self)
    }
}

impl fmt::Display for DeepLinkTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        if hours > 0 {
            write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            write!(f, "{}:{:02}", minutes, seconds)
        }
    }
}

/// Parse a `t=[hours:]minutes:seconds` marker out of a URL fragment
///
/// The leading `#` is optional. Text after the seconds is ignored. Minutes
/// and seconds are not range checked, so `#t=0:90` is 90 seconds. Returns
/// `None` when there is no well-formed marker or the total overflows.
pub fn parse_time_fragment(fragment: &str) -> Option<DeepLinkTime> {
    let normalized;
    let fragment = if fragment.starts_with('#') {
        fragment
    } else {
        normalized = format!("#{}", fragment);
        &normalized
    };

    // First marker followed by a time wins; `#t=now#t=1:30` reads 1:30.
    let (hours, minutes, seconds) = fragment
        .match_indices(TIME_MARKER)
        .find_map(|(start, marker)| time_groups(&fragment[start + marker.len()..]))?;

    let hours: u64 = hours.parse().ok()?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;

    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
        .map(DeepLinkTime)
}

/// `[H:]M:S` groups at the start of `input`, hours defaulting to zero
fn time_groups(input: &str) -> Option<(&str, &str, &str)> {
    match digit_groups(input).as_slice() {
        [hours, minutes, seconds, ..] => Some((*hours, *minutes, *seconds)),
        [minutes, seconds] => Some(("0", *minutes, *seconds)),
        _ => None,
    }
}

/// Leading runs of ASCII digits separated by single colons
fn digit_groups(input: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = input;

    loop {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            break;
        }
        groups.push(&rest[..end]);
        rest = &rest[end..];

        match rest.strip_prefix(':') {
            Some(next) if groups.len() < 3 => rest = next,
            _ => break,
        }
    }

    groups
}

/// A navigation event: a fresh identity plus the URL fragment it landed on
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub id: NavigationId,
    pub fragment: String,
}

impl Navigation {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            id: NavigationId::new(),
            fragment: fragment.into(),
        }
    }

    /// Build a navigation from a full page URL
    pub fn from_url(page: &str) -> Result<Self> {
        let url = url::Url::parse(page)?;
        let fragment = url
            .fragment()
            .map(|fragment| format!("#{}", fragment))
            .unwrap_or_default();
        Ok(Self::new(fragment))
    }
}

/// Turns navigations into one-shot seek targets
///
/// A navigation yields its time at most once, however many times it is
/// resolved.
#[derive(Debug, Default)]
pub struct DeepLinkResolver {
    last_navigation: Option<NavigationId>,
}

impl DeepLinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, navigation: &Navigation) -> Option<DeepLinkTime> {
        if self.last_navigation == Some(navigation.id) {
            return None;
        }
        self.last_navigation = Some(navigation.id);
        parse_time_fragment(&navigation.fragment)
    }
}
