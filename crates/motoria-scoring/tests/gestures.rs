use motoria_scoring::gestures::score;

fn seq(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn full_match_across_three_groups() {
    // The expected name is repeated across each group of frames.
    let expected = seq(&[
        "fist", "fist", "fist", "palm", "palm", "palm", "ok", "ok", "ok",
    ]);
    let labels = seq(&[
        "fist", "palm", "fist", "palm", "palm", "stop", "one", "ok", "ok",
    ]);
    assert_eq!(score(&expected, &labels, 3, true), 3);
}

#[test]
fn group_counts_when_expected_appears_anywhere_in_the_group() {
    let expected = seq(&["fist", "fist", "fist"]);
    let labels = seq(&["palm", "fist", "ok"]);
    assert_eq!(score(&expected, &labels, 3, true), 1);
}

#[test]
fn group_without_the_expected_label_does_not_count() {
    let expected = seq(&["fist", "fist", "fist"]);
    let labels = seq(&["palm", "ok", "stop"]);
    assert_eq!(score(&expected, &labels, 3, true), 0);
}

#[test]
fn only_the_group_start_entry_is_consulted() {
    // Entries between group starts never influence the result: the second
    // and third expected entries disagree with every label, yet the group
    // still counts because the entry at the group's start offset matches.
    let expected = seq(&["fist", "one", "two_up"]);
    let labels = seq(&["stop", "stop", "fist"]);
    assert_eq!(score(&expected, &labels, 3, true), 1);
}

#[test]
fn short_final_group_is_still_checked() {
    let expected = seq(&["fist", "fist", "fist", "palm", "palm"]);
    let labels = seq(&["ok", "fist", "stop", "palm"]);
    // Group 0 -> labels[0..3], group 1 -> labels[3..4] (one frame).
    assert_eq!(score(&expected, &labels, 3, true), 2);
}

#[test]
fn labels_running_out_leaves_remaining_groups_unmatched() {
    let expected = seq(&["fist", "fist", "palm", "palm", "ok", "ok"]);
    let labels = seq(&["fist"]);
    assert_eq!(score(&expected, &labels, 2, true), 1);
}

#[test]
fn empty_labels_score_zero() {
    let expected = seq(&["fist", "fist", "fist"]);
    assert_eq!(score(&expected, &[], 3, true), 0);
}

#[test]
fn empty_expected_scores_zero() {
    let labels = seq(&["fist", "palm"]);
    assert_eq!(score(&[], &labels, 2, true), 0);
}

#[test]
fn group_size_one_is_exact_positional_comparison() {
    let expected = seq(&["fist", "palm", "ok"]);
    let labels = seq(&["fist", "ok", "ok"]);
    assert_eq!(score(&expected, &labels, 1, true), 2);
}

#[test]
fn zero_group_size_scores_zero() {
    let expected = seq(&["fist"]);
    let labels = seq(&["fist"]);
    assert_eq!(score(&expected, &labels, 0, true), 0);
}

#[test]
fn result_never_exceeds_the_group_count() {
    let expected = seq(&["fist", "fist", "fist", "fist", "fist", "fist", "fist"]);
    let labels = seq(&["fist", "fist", "fist", "fist", "fist", "fist", "fist"]);
    for group_size in 1..=8usize {
        let groups = expected.len().div_ceil(group_size);
        let result = score(&expected, &labels, group_size, true);
        assert!(
            result <= groups,
            "group_size {group_size}: {result} > {groups}"
        );
    }
}

/// The strict and non-strict modes are observably identical; this pins the
/// equivalence so a divergence cannot slip in unnoticed.
#[test]
fn strict_and_non_strict_agree() {
    let cases: Vec<(Vec<String>, Vec<String>, usize)> = vec![
        (
            seq(&["fist", "fist", "fist", "palm", "palm", "palm"]),
            seq(&["fist", "ok", "stop", "one", "palm", "palm"]),
            3,
        ),
        (
            seq(&["ok", "ok", "stop", "stop"]),
            seq(&["stop", "ok"]),
            2,
        ),
        (seq(&["palm"]), seq(&[]), 1),
        (seq(&[]), seq(&["palm"]), 4),
        (
            seq(&["one", "two_up", "three"]),
            seq(&["three", "two_up", "one"]),
            1,
        ),
    ];

    for (expected, labels, group_size) in &cases {
        assert_eq!(
            score(expected, labels, *group_size, true),
            score(expected, labels, *group_size, false),
            "modes diverged for expected={expected:?} labels={labels:?} group_size={group_size}"
        );
    }
}
