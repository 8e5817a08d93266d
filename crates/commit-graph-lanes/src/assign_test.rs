use chrono::{TimeZone, Utc};
use commit_graph_types::{Author, Commit, HeadRef, ParentRef};

use super::*;

fn commit(oid: &str, seconds: i64, parents: &[&str]) -> Commit {
    Commit {
        oid: oid.to_string(),
        message_headline: String::new(),
        message_body: String::new(),
        committed_date: Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap(),
        author: Author {
            name: "tester".to_string(),
            email: None,
            user: None,
        },
        parents: parents.iter().map(|p| ParentRef::new(*p)).collect(),
        additions: 0,
        deletions: 0,
        status_check_rollup: None,
        branches: Default::default(),
        color: String::new(),
        line_index: 0,
        is_head: false,
    }
}

fn head(oid: &str) -> HeadRef {
    HeadRef {
        name: "main".to_string(),
        oid: oid.to_string(),
    }
}

#[test]
fn linear_history_stays_on_a_single_lane() {
    let mut commits = vec![commit("c3", 30, &["c2"]), commit("c2", 20, &["c1"]), commit("c1", 10, &[])];
    let occupancy = assign_lanes(&mut commits, &[head("c3")]);

    assert!(commits.iter().all(|c| c.line_index == 0));
    assert!(commits.iter().all(|c| c.color == PALETTE[0]));
    assert!(commits[0].is_head);
    assert!(!commits[1].is_head && !commits[2].is_head);
    // c1 is an orphan: its lane is released right after its own row.
    assert_eq!(occupancy, vec![vec![0], vec![0], vec![]]);
}

#[test]
fn simple_merge_continues_first_parent_and_forks_second() {
    // m merges f into b: m's first parent is b, second parent is f.
    let mut commits = vec![
        commit("m", 30, &["b", "f"]),
        commit("f", 20, &["b"]),
        commit("b", 10, &[]),
    ];
    let occupancy = assign_lanes(&mut commits, &[head("m")]);

    let by_oid = |oid: &str| commits.iter().find(|c| c.oid == oid).unwrap();
    assert_eq!(by_oid("m").line_index, 0);
    assert_eq!(by_oid("b").line_index, 0);
    assert_eq!(by_oid("f").line_index, 1);
    // Between m's row and f's row, both lanes 0 (continuing to b) and 1
    // (f's own lane, continuing to b too) are alive.
    assert_eq!(occupancy[0], vec![0, 1]);
}

#[test]
fn shared_tip_allocates_exactly_one_lane() {
    let mut commits = vec![commit("x", 10, &[])];
    let heads = vec![head("x"), HeadRef { name: "release".to_string(), oid: "x".to_string() }];
    let occupancy = assign_lanes(&mut commits, &heads);

    assert_eq!(commits[0].line_index, 0);
    assert!(commits[0].is_head);
    assert_eq!(occupancy, vec![vec![]]);
}

#[test]
fn octopus_merge_gives_each_extra_parent_a_fresh_lane() {
    // o has three parents: a (first, continuity), b and c (fresh lanes).
    let mut commits = vec![
        commit("o", 40, &["a", "b", "c"]),
        commit("a", 30, &[]),
        commit("b", 20, &[]),
        commit("c", 10, &[]),
    ];
    let occupancy = assign_lanes(&mut commits, &[head("o")]);

    let by_oid = |oid: &str| commits.iter().find(|c| c.oid == oid).unwrap();
    assert_eq!(by_oid("o").line_index, 0);
    assert_eq!(by_oid("a").line_index, 0);
    let lane_b = by_oid("b").line_index;
    let lane_c = by_oid("c").line_index;
    assert_ne!(lane_b, lane_c);
    assert!(lane_b == 1 || lane_b == 2);
    assert!(lane_c == 1 || lane_c == 2);

    let mut row0 = occupancy[0].clone();
    row0.sort_unstable();
    assert_eq!(row0, vec![0, 1, 2]);
}

#[test]
fn lanes_are_non_negative_and_rows_never_repeat_a_lane() {
    let mut commits = vec![
        commit("o", 40, &["a", "b", "c"]),
        commit("a", 30, &["root"]),
        commit("b", 20, &["root"]),
        commit("c", 10, &["root"]),
        commit("root", 5, &[]),
    ];
    let occupancy = assign_lanes(&mut commits, &[head("o")]);

    for row in &occupancy {
        let mut seen = std::collections::HashSet::new();
        for lane in row {
            assert!(seen.insert(*lane), "lane {lane} repeated in a single row");
        }
    }
}

#[test]
fn first_parent_continuity_can_be_preempted_by_an_earlier_claim() {
    // Two children (x newer, y older-but-processed-later) both list "p" as a
    // parent; x's claim wins because it is processed first.
    let mut commits = vec![
        commit("x", 30, &["p"]),
        commit("y", 20, &["p"]),
        commit("p", 10, &[]),
    ];
    assign_lanes(&mut commits, &[head("x")]);

    let by_oid = |oid: &str| commits.iter().find(|c| c.oid == oid).unwrap();
    assert_eq!(by_oid("p").line_index, by_oid("x").line_index);
}

#[test]
fn color_is_palette_indexed_by_lane_modulo_nine() {
    let mut commits = vec![
        commit("o", 40, &["a", "b", "c"]),
        commit("a", 30, &[]),
        commit("b", 20, &[]),
        commit("c", 10, &[]),
    ];
    assign_lanes(&mut commits, &[head("o")]);
    for c in &commits {
        assert_eq!(c.color, PALETTE[(c.line_index as usize) % PALETTE.len()]);
    }
}

#[test]
fn appending_older_commits_does_not_perturb_earlier_lanes() {
    let mut first_pass = vec![commit("c2", 20, &["c1"]), commit("c1", 10, &[])];
    assign_lanes(&mut first_pass, &[head("c2")]);
    let c2_lane_before = first_pass[0].line_index;

    let mut second_pass = vec![
        commit("c2", 20, &["c1"]),
        commit("c1", 10, &["c0"]),
        commit("c0", 5, &[]),
    ];
    assign_lanes(&mut second_pass, &[head("c2")]);
    let c2_lane_after = second_pass[0].line_index;

    assert_eq!(c2_lane_before, c2_lane_after);
}
