//! Integration tests for the tree operations: construction, traversals, queries, search, rendering.

use fixture_bracket::{
    count_nodes, create_match, find_match, find_match_mut, height, inorder, postorder, preorder,
    record_winner, render_fixture, set_children, MatchNode,
};

/// S with Q1 on the left and Q2 on the right.
fn semi() -> MatchNode {
    let mut s = create_match("S");
    set_children(&mut s, Some(create_match("Q1")), Some(create_match("Q2")));
    s
}

/// Eight-team bracket: F <- (S1 <- Q1, Q2), (S2 <- Q3, Q4).
fn full_bracket() -> MatchNode {
    let mut s1 = create_match("S1");
    s1.set_children(Some(create_match("Q1")), Some(create_match("Q2")));
    let mut s2 = create_match("S2");
    s2.set_children(Some(create_match("Q3")), Some(create_match("Q4")));
    let mut f = create_match("F");
    f.set_children(Some(s1), Some(s2));
    f
}

#[test]
fn new_match_is_a_leaf() {
    let m = create_match("Cuartos 1");
    assert_eq!(m.label, "Cuartos 1");
    assert!(m.is_leaf());
    assert!(m.left().is_none());
    assert!(m.right().is_none());
}

#[test]
fn empty_label_is_allowed() {
    let m = create_match("");
    assert_eq!(preorder(Some(&m)), vec![String::new()]);
}

#[test]
fn empty_tree_has_nothing() {
    assert_eq!(height(None), 0);
    assert_eq!(count_nodes(None), 0);
    assert!(preorder(None).is_empty());
    assert!(inorder(None).is_empty());
    assert!(postorder(None).is_empty());
    assert!(render_fixture(None).is_empty());
}

#[test]
fn single_leaf() {
    let m = create_match("L");
    assert_eq!(preorder(Some(&m)), vec!["L"]);
    assert_eq!(inorder(Some(&m)), vec!["L"]);
    assert_eq!(postorder(Some(&m)), vec!["L"]);
    assert_eq!(height(Some(&m)), 1);
    assert_eq!(count_nodes(Some(&m)), 1);
}

#[test]
fn bracket_of_four_traversals_and_queries() {
    let s = semi();
    assert_eq!(preorder(Some(&s)), vec!["S", "Q1", "Q2"]);
    assert_eq!(inorder(Some(&s)), vec!["Q1", "S", "Q2"]);
    assert_eq!(postorder(Some(&s)), vec!["Q1", "Q2", "S"]);
    assert_eq!(height(Some(&s)), 2);
    assert_eq!(count_nodes(Some(&s)), 3);
}

#[test]
fn count_matches_traversal_lengths() {
    let f = full_bracket();
    let n = count_nodes(Some(&f));
    assert_eq!(n, 7);
    assert_eq!(preorder(Some(&f)).len(), n);
    assert_eq!(inorder(Some(&f)).len(), n);
    assert_eq!(postorder(Some(&f)).len(), n);
    assert_eq!(height(Some(&f)), 3);
    assert_eq!(
        preorder(Some(&f)),
        vec!["F", "S1", "Q1", "Q2", "S2", "Q3", "Q4"]
    );
    assert_eq!(
        postorder(Some(&f)),
        vec!["Q1", "Q2", "S1", "Q3", "Q4", "S2", "F"]
    );
}

#[test]
fn height_follows_the_deeper_side() {
    let mut deep = create_match("deep");
    deep.set_children(Some(create_match("deeper")), None);
    let mut root = create_match("root");
    root.set_children(None, Some(deep));
    assert_eq!(height(Some(&root)), 3);
    assert_eq!(count_nodes(Some(&root)), 3);
    assert_eq!(inorder(Some(&root)), vec!["root", "deeper", "deep"]);
}

#[test]
fn record_winner_appends_suffix() {
    let mut m = create_match("Q1");
    record_winner(&mut m, "X");
    assert_eq!(m.label, "Q1 → Ganador: X");
}

#[test]
fn record_winner_twice_appends_twice() {
    let mut m = create_match("Q1");
    m.record_winner("X");
    m.record_winner("Y");
    assert_eq!(m.label, "Q1 → Ganador: X → Ganador: Y");
}

#[test]
fn record_winner_keeps_children() {
    let mut s = semi();
    s.record_winner("Q2 team");
    assert_eq!(count_nodes(Some(&s)), 3);
    assert_eq!(s.left().unwrap().label, "Q1");
}

#[test]
fn find_match_by_substring() {
    let s = semi();
    let found = find_match(Some(&s), "Q2").unwrap();
    assert_eq!(found.label, "Q2");
    assert!(find_match(Some(&s), "nonexistent").is_none());
    assert!(find_match(None, "anything").is_none());
}

#[test]
fn find_match_is_case_sensitive() {
    let s = semi();
    assert!(find_match(Some(&s), "q2").is_none());
}

#[test]
fn find_match_returns_first_in_preorder() {
    let f = full_bracket();
    assert_eq!(find_match(Some(&f), "Q").unwrap().label, "Q1");
    assert_eq!(find_match(Some(&f), "S").unwrap().label, "S1");
    assert_eq!(find_match(Some(&f), "4").unwrap().label, "Q4");
}

#[test]
fn winner_recorded_through_search_is_visible_in_tree() {
    let mut s = semi();
    let found = find_match_mut(Some(&mut s), "Q2").unwrap();
    found.record_winner("X");
    assert_eq!(s.right().unwrap().label, "Q2 → Ganador: X");
    assert_eq!(preorder(Some(&s)), vec!["S", "Q1", "Q2 → Ganador: X"]);
}

#[test]
fn find_match_mut_not_found() {
    let mut s = semi();
    assert!(find_match_mut(Some(&mut s), "nonexistent").is_none());
    assert!(find_match_mut(None, "anything").is_none());
}

#[test]
fn set_children_again_replaces_old_subtrees() {
    let mut s = semi();
    s.set_children(Some(create_match("N1")), None);
    assert_eq!(preorder(Some(&s)), vec!["S", "N1"]);
    assert!(find_match(Some(&s), "Q1").is_none());
    assert!(find_match(Some(&s), "Q2").is_none());
    assert_eq!(count_nodes(Some(&s)), 2);
}

#[test]
fn render_semi() {
    let s = semi();
    assert_eq!(render_fixture(Some(&s)), "    ┌── Q2\nS\n    └── Q1\n");
    assert_eq!(s.to_string(), render_fixture(Some(&s)));
}

#[test]
fn render_full_bracket() {
    let f = full_bracket();
    let expected = [
        "        ┌── Q4",
        "    ┌── S2",
        "        └── Q3",
        "F",
        "        ┌── Q2",
        "    └── S1",
        "        └── Q1",
    ];
    let rendered = render_fixture(Some(&f));
    assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    assert!(rendered.ends_with('\n'));
}

#[test]
fn render_skips_missing_branches() {
    let mut root = create_match("root");
    root.set_children(None, Some(create_match("bye")));
    assert_eq!(render_fixture(Some(&root)), "    ┌── bye\nroot\n");
}
