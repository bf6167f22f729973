use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use gpfs_snap::commands::{dispatch, validate_args, Action, Request, SnapshotArgs};
use gpfs_snap::gpfs::{CommandOutput, SnapshotClient};
use gpfs_snap::test_utils::{listing, listing_row, ScriptedRunner};
use gpfs_snap::utils::config::ToolConfig;
use gpfs_snap::utils::error::{SnapshotError, UsageError};
use pretty_assertions::assert_eq;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 15).unwrap()
}

fn run(request: &Request, runner: ScriptedRunner) -> (anyhow::Result<()>, String, ScriptedRunner) {
    let client = SnapshotClient::new(runner, ToolConfig::default().commands);
    let mut out = Vec::new();
    let result = dispatch(request, &client, &now(), &mut out);
    (result, String::from_utf8(out).unwrap(), client.into_runner())
}

fn delete_request(age_days: u64) -> Request {
    Request::Delete {
        filesystem: "archive".to_string(),
        fileset: "weekly".to_string(),
        age_days,
    }
}

#[test]
fn test_list_prints_one_line_per_row() {
    let now = now();
    let output = listing(&[
        listing_row("archive", "weekly", "a", &(now - Duration::days(1))),
        listing_row("archive", "weekly", "b", &(now - Duration::days(2))),
        listing_row("archive", "daily", "c", &(now - Duration::hours(3))),
    ]);
    let request = Request::List {
        filesystem: "archive".to_string(),
        json: false,
    };

    let (result, out, runner) = run(&request, ScriptedRunner::new().respond(CommandOutput::ok(output)));

    assert!(result.is_ok());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Filesystem"));
    assert!(lines[3].contains("10800"));
    assert!(!out.contains("HEADER"));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_list_header_only() {
    let request = Request::List {
        filesystem: "archive2".to_string(),
        json: false,
    };

    let (result, out, _) = run(&request, ScriptedRunner::new().respond(CommandOutput::ok(listing(&[]))));

    assert!(result.is_ok());
    assert_eq!(out, "No snapshots found\n");
}

#[test]
fn test_list_json() {
    let now = now();
    let output = listing(&[listing_row("archive", "weekly", "a", &(now - Duration::seconds(100)))]);
    let request = Request::List {
        filesystem: "archive".to_string(),
        json: true,
    };

    let (result, out, _) = run(&request, ScriptedRunner::new().respond(CommandOutput::ok(output)));

    assert!(result.is_ok());
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["age_seconds"], 100);
}

#[test]
fn test_create_runs_command_once() {
    let request = Request::Create {
        filesystem: "archive".to_string(),
        fileset: "weekly".to_string(),
    };

    let (result, out, runner) = run(&request, ScriptedRunner::new());

    assert!(result.is_ok());
    assert_eq!(out, "Snapshot completed successfully: archive:weekly:2026-10-17_093015\n");

    let calls = runner.calls_to("mmcrsnapshot");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args, vec!["archive", "weekly:2026-10-17_093015"]);
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_create_name_shape_in_local_time() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let now = now().with_timezone(&tokyo);
    let client = SnapshotClient::new(ScriptedRunner::new(), ToolConfig::default().commands);

    let spec = client.create("archive", "weekly", &now, &mut std::io::sink()).unwrap();

    assert_eq!(spec, "weekly:2026-10-17_183015");
}

#[test]
fn test_create_failure_is_error() {
    let request = Request::Create {
        filesystem: "archive".to_string(),
        fileset: "weekly".to_string(),
    };

    let (result, out, runner) = run(
        &request,
        ScriptedRunner::new().respond(CommandOutput::failed(1, "")),
    );

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SnapshotError>(),
        Some(SnapshotError::CommandFailed { .. })
    ));
    assert!(out.starts_with("Snapshot failed: archive:weekly:"));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_delete_unforced_wipe_runs_nothing() {
    let args = SnapshotArgs {
        action: Action::Delete,
        filesystem: Some("archive".to_string()),
        fileset: Some("weekly".to_string()),
        age_days: Some(0),
        ..Default::default()
    };

    // Validation fails, so there is never a client to run anything
    assert_eq!(
        validate_args(&args, &ToolConfig::default()),
        Err(UsageError::UnforcedFullWipe)
    );
}

#[test]
fn test_delete_fail_fast_on_second_record() {
    let now = now();
    let old = now - Duration::days(40);
    let listing_output = listing(&[
        listing_row("archive", "weekly", "s1", &old),
        listing_row("archive", "weekly", "s2", &old),
        listing_row("archive", "weekly", "s3", &old),
    ]);
    let runner = ScriptedRunner::new()
        .respond(CommandOutput::ok(listing_output))
        .respond(CommandOutput::ok(""))
        .respond(CommandOutput::failed(1, "Snapshot s2 is busy"));

    let (result, out, runner) = run(&delete_request(30), runner);

    assert!(result.is_err());
    assert_eq!(
        out,
        "Snapshot deleted successfully: archive:weekly:s1\n\
         Failed to delete snapshot: archive:weekly:s2\n"
    );

    let deletes = runner.calls_to("mmdelsnapshot");
    assert_eq!(deletes.len(), 2);
    assert!(deletes.iter().all(|call| call.args[1] != "weekly:s3"));
}

#[test]
fn test_delete_keeps_listing_order() {
    let now = now();
    let listing_output = listing(&[
        listing_row("archive", "weekly", "newest-old", &(now - Duration::days(8))),
        listing_row("archive", "weekly", "oldest", &(now - Duration::days(90))),
        listing_row("archive", "weekly", "recent", &(now - Duration::days(1))),
    ]);
    let runner = ScriptedRunner::new().respond(CommandOutput::ok(listing_output));

    let (result, _, runner) = run(&delete_request(7), runner);

    assert!(result.is_ok());
    let deleted: Vec<String> = runner
        .calls_to("mmdelsnapshot")
        .into_iter()
        .map(|call| call.args[1].clone())
        .collect();
    assert_eq!(deleted, vec!["weekly:newest-old", "weekly:oldest"]);
}

#[test]
fn test_delete_nothing_old_enough() {
    let now = now();
    let listing_output = listing(&[listing_row("archive", "weekly", "fresh", &(now - Duration::hours(2)))]);
    let runner = ScriptedRunner::new().respond(CommandOutput::ok(listing_output));

    let (result, out, runner) = run(&delete_request(1), runner);

    assert!(result.is_ok());
    assert_eq!(out, "No snapshots found which meet the deletion criteria\n");
    assert!(runner.calls_to("mmdelsnapshot").is_empty());
}

#[test]
fn test_forced_wipe_deletes_everything() {
    let now = now();
    let listing_output = listing(&[
        listing_row("archive", "weekly", "a", &(now - Duration::seconds(1))),
        listing_row("archive", "weekly", "b", &(now - Duration::days(3))),
    ]);
    let runner = ScriptedRunner::new().respond(CommandOutput::ok(listing_output));

    let (result, _, runner) = run(&delete_request(0), runner);

    assert!(result.is_ok());
    assert_eq!(runner.calls_to("mmdelsnapshot").len(), 2);
}

#[test]
fn test_version() {
    let (result, out, runner) = run(&Request::Version, ScriptedRunner::new());

    assert!(result.is_ok());
    assert_eq!(out, format!("gpfs-snap v{}\n", env!("CARGO_PKG_VERSION")));
    assert!(runner.calls().is_empty());
}
