use super::*;

// =============================================================
// Appending
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.is_empty());
    assert_eq!(transcript.last(), None);
}

#[test]
fn push_assigns_increasing_ids_in_display_order() {
    let mut transcript = Transcript::default();
    let first = transcript.push(Author::User, "hello");
    let second = transcript.push(Author::Assistant, "hi there");

    assert!(second > first);
    let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["hello", "hi there"]);
    assert_eq!(transcript.messages()[1].author, Author::Assistant);
    assert_eq!(transcript.messages()[1].tone, Tone::Normal);
}

// =============================================================
// Placeholder removal
// =============================================================

#[test]
fn remove_placeholder_drops_only_that_line() {
    let mut transcript = Transcript::default();
    transcript.push(Author::User, "cough");
    let loading = transcript.push_with_tone(Author::Assistant, "Analyzing...", Tone::Placeholder);

    assert!(transcript.remove_placeholder(loading));
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.last().map(|m| m.text.as_str()), Some("cough"));
}

#[test]
fn remove_placeholder_refuses_normal_messages() {
    let mut transcript = Transcript::default();
    let id = transcript.push(Author::Assistant, "Thank you!");

    assert!(!transcript.remove_placeholder(id));
    assert_eq!(transcript.len(), 1);
}

#[test]
fn remove_placeholder_twice_is_a_noop() {
    let mut transcript = Transcript::default();
    let loading = transcript.push_with_tone(Author::Assistant, "...", Tone::Placeholder);

    assert!(transcript.remove_placeholder(loading));
    assert!(!transcript.remove_placeholder(loading));
    assert!(transcript.is_empty());
}
