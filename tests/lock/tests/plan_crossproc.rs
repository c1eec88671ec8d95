//! Cross-process determinism of planning.
//!
//! Spawns the `plan_fixture` binary under several environment variants and
//! asserts that all print identical output. Planning output must not depend
//! on process-level state (cwd, locale, env vars, hash seeds).

use std::path::Path;
use std::process::Command;

use lock_tests::fixture_path;

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_plan_fixture");
    let world = fixture_path("small_world.json");
    let command_file = fixture_path("move_ball_into_red_box.json");

    let mut command = Command::new(bin);
    command
        .arg(&world)
        .arg(&command_file)
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .to_string_lossy()
        .to_string()
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("report_digest=sha256:"), "{baseline}");
    assert!(baseline.contains("actions=rrrplld"), "{baseline}");
    assert!(baseline.contains("cost=1"), "{baseline}");

    let alt_cwd = std::env::temp_dir().to_string_lossy().to_string();
    assert_eq!(baseline, run_variant(&alt_cwd, &[]), "output differs when cwd changes");

    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );

    assert_eq!(
        baseline,
        run_variant(
            &root,
            &[
                ("STACKER_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("RUST_LOG", "trace"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_matches_inproc() {
    let output = run_variant(&workspace_root(), &[]);
    let world = lock_tests::small_world();
    let command = stacker_harness::command::Command::from_json_str(
        &std::fs::read_to_string(fixture_path("move_ball_into_red_box.json")).unwrap(),
    )
    .unwrap();
    let outcome = stacker_harness::runner::run_command(
        &world,
        &command,
        &stacker_harness::policy::PolicyConfig::default(),
    )
    .unwrap();
    let report = stacker_harness::report::PlanReport::build(&world, &outcome).unwrap();
    assert!(output.contains(&format!("report_digest={}", report.digest.as_str())));
    assert!(output.contains(&format!("goal={}", outcome.goal)));
}
