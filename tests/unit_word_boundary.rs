use helpcheck::verify::contains_word;

#[test]
fn whole_words_match() {
    assert!(contains_word("  test         Run tests", "test"));
    assert!(contains_word("fmt", "fmt"));
    assert!(contains_word("run fmt, then test", "fmt"));
}

#[test]
fn substrings_of_longer_identifiers_do_not_match() {
    assert!(!contains_word("testing", "test"));
    assert!(!contains_word("reinstall", "install"));
    assert!(!contains_word("helper", "help"));
    assert!(!contains_word("fmtcheck", "fmt"));
}

#[test]
fn hyphen_counts_as_a_word_boundary() {
    // `-` is not a word character, so hyphenated targets both match
    // themselves and expose their pieces.
    assert!(contains_word("  install-uv   Install package manager", "install-uv"));
    assert!(contains_word("install-uv", "install"));
    assert!(contains_word("install-uv", "uv"));
}

#[test]
fn regex_metacharacters_in_targets_are_literal() {
    assert!(contains_word("run a.b now", "a.b"));
    assert!(!contains_word("run axb now", "a.b"));
}
