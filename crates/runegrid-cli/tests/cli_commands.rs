//! End-to-end tests for the `runegrid` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn runegrid() -> Command {
    let mut cmd = Command::cargo_bin("runegrid").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// runes
// ---------------------------------------------------------------------------

#[test]
fn runes_lists_every_kind() {
    runegrid()
        .arg("runes")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("mana_emitter")
                .and(predicate::str::contains("transmit"))
                .and(predicate::str::contains("AmplifierRune"))
                .and(predicate::str::contains("fa/arrows-to-dot.svg")),
        );
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_renders_starter_layout() {
    runegrid()
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5 runes")
                .and(predicate::str::contains("1 emitters"))
                .and(predicate::str::contains("3x3 cells"))
                .and(predicate::str::contains("↑")),
        );
}

#[test]
fn show_draws_custom_facing() {
    runegrid()
        .args(["show", "-r", "transmit@-2,3:south_west"])
        .assert()
        .success()
        .stdout(predicate::str::contains("↙").and(predicate::str::contains("3x4 cells")));
}

#[test]
fn show_refuses_oversized_board() {
    runegrid()
        .args(["show", "-r", "void@100000,100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("board too large to render (100001x100001)"));
}

#[test]
fn show_measures_envelope_at_grid_edge() {
    runegrid()
        .args(["show", "-r", "void@2147483647,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("board too large to render (2147483648x1)"));
}

#[test]
fn show_rejects_unknown_kind() {
    runegrid()
        .args(["show", "-r", "portal@0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown rune kind"));
}

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_starter_layout_fills_bank() {
    runegrid()
        .args(["cast", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mana\": 3"));
}

#[test]
fn cast_four_voids_collect_four() {
    runegrid()
        .args([
            "cast",
            "--json",
            "-r",
            "mana_emitter@0,0",
            "-r",
            "void@0,1",
            "-r",
            "void@1,0",
            "-r",
            "void@0,-1",
            "-r",
            "void@-1,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mana\": 4"));
}

#[test]
fn cast_through_amplifier() {
    runegrid()
        .args([
            "cast", "--json", "-r", "mana@0,0", "-r", "amp@0,1", "-r", "void@0,2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mana\": 2"));
}

#[test]
fn cast_repeats_accumulate() {
    runegrid()
        .args(["cast", "--json", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mana\": 9"));
}

#[test]
fn cast_rotation_redirects_transmit() {
    // North -> north-east -> east -> south-east: into the void at (1, 0).
    runegrid()
        .args([
            "cast", "--json", "--rotate", "0,1", "--rotate", "0,1", "--rotate", "0,1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mana\": 4"));
}

#[test]
fn cast_rotate_empty_cell_fails() {
    runegrid()
        .args(["cast", "--rotate", "5,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rune at (5, 5)"));
}

#[test]
fn cast_strict_rejects_collision() {
    runegrid()
        .args(["cast", "--strict", "-r", "void@0,0", "-r", "void@0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already occupied"));
}

#[test]
fn cast_verbose_trace_shows_routing() {
    runegrid()
        .args(["cast", "-v", "--trace"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cast - 0,0")
                .and(predicate::str::contains("Receive - EAST - 1,0"))
                .and(predicate::str::contains("Deposit"))
                .and(predicate::str::contains("Bank")),
        );
}

#[test]
fn cast_empty_bank_reported() {
    runegrid()
        .args(["cast", "-r", "void@0,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));
}

#[test]
fn cast_verbose_refuses_oversized_board() {
    runegrid()
        .args(["cast", "-v", "-r", "void@-500,500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("board too large to render (501x501)"));
}

#[test]
fn cast_at_grid_edge_does_not_wrap() {
    runegrid()
        .args([
            "cast",
            "--json",
            "-r",
            "mana@2147483647,0",
            "-r",
            "void@-2147483648,0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bank\": {}"));
}

#[test]
fn cast_trace_enables_trace_logging() {
    runegrid()
        .env_remove("RUST_LOG")
        .args(["cast", "--json", "--trace", "-r", "mana@0,0", "-r", "void@1,0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Receive - EAST - 1,0"));
}

#[test]
fn cast_without_trace_logs_nothing() {
    runegrid()
        .env_remove("RUST_LOG")
        .args(["cast", "--json", "-r", "mana@0,0", "-r", "void@1,0"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
