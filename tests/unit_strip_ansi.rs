#[test]
fn plain_text_passes_through_unchanged() {
    for s in [
        "",
        "make help",
        "Usage:\n  make <target>\n\nTargets:\n",
        "100% plain text with [brackets] and ~tildes~",
    ] {
        assert_eq!(helpcheck::strip_csi(s), s);
    }
}

#[test]
fn color_sequences_are_removed() {
    assert_eq!(
        helpcheck::strip_csi("\x1b[32minstall-uv\x1b[0m   Install package manager"),
        "install-uv   Install package manager"
    );
}

#[test]
fn text_around_one_sequence_is_spliced() {
    assert_eq!(helpcheck::strip_csi("left\x1b[1;31mright"), "leftright");
}

#[test]
fn consecutive_sequences_join_their_neighbours() {
    assert_eq!(helpcheck::strip_csi("a\x1b[0m\x1b[2Kb"), "ab");
}

#[test]
fn sequences_at_both_ends_are_removed() {
    assert_eq!(helpcheck::strip_csi("\x1b[36mmiddle\x1b[0m"), "middle");
    assert_eq!(helpcheck::strip_csi("\x1b[m"), "");
}

#[test]
fn stripping_is_idempotent() {
    // Deterministic set of mixed strings
    for s in [
        "",
        "no escapes at all",
        "\x1b[1mBootstrap\x1b[0m\n  \x1b[36mtest\x1b[0m  Run tests",
        "truncated \x1b[ tail",
        "\x1b[0m\x1b[0m\x1b[0m",
    ] {
        let once = helpcheck::strip_csi(s);
        assert_eq!(helpcheck::strip_csi(&once), once, "input was: {:?}", s);
    }
}

#[test]
fn malformed_sequences_are_left_untouched() {
    // Lone ESC, ESC without '[', and CSI with no final byte
    assert_eq!(helpcheck::strip_csi("\x1b"), "\x1b");
    assert_eq!(helpcheck::strip_csi("\x1b0m"), "\x1b0m");
    assert_eq!(helpcheck::strip_csi("trailing \x1b["), "trailing \x1b[");
    assert_eq!(helpcheck::strip_csi("partial \x1b[12"), "partial \x1b[12");
}
