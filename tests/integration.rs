use assist::stats::WindowReport;
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

fn run_bin(args: &[&str]) -> bool {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_assist"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    if !output.status.success() {
        let stdout_str = String::from_utf8_lossy(&output.stdout);
        let stderr_str = String::from_utf8_lossy(&output.stderr);
        eprintln!("failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n");
    }
    output.status.success()
}

fn read_reports(test_dir: &Path) -> Vec<WindowReport> {
    let bytes = fs::read(test_dir.join("results.msgpack")).expect("failed to read results");
    rmp_serde::from_slice(&bytes).expect("failed to deserialize results")
}

#[test]
fn inline_samples_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("inline_samples_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_contents = String::new()
        + "[series]\n"
        + "samples = [ [ 0.0, 1.0,], [ 1.0, 3.0,], [ 1.5, 0.5,], [ 3.0, 2.0,], [ 4.0, 4.0,], [ 5.5, 3.0,],]\n"
        + "\n"
        + "[average]\n"
        + "windows = [ [ 1.25, 4.5,], [ 0.1, 0.9,], [ 2.0, 3.0,],]\n";
    fs::write(test_dir.join("config.toml"), config_contents).expect("failed to write config file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    assert!(run_bin(&["--root-dir", test_dir_str, "inspect"]));
    assert!(run_bin(&["--root-dir", test_dir_str, "average"]));

    let reports = read_reports(&test_dir);
    assert_eq!(reports.len(), 3);
    assert_eq!((reports[0].lower, reports[0].upper), (1.25, 4.5));
    assert!((reports[0].average - 1.6923076923076923).abs() < 1e-15);
    assert_eq!(reports[1].average, 1.0);
    assert_eq!(reports[2].average, 0.5);

    assert!(run_bin(&["--root-dir", test_dir_str, "clean"]));
    assert!(!test_dir.join("results.msgpack").exists());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn sample_file_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("sample_file_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let series_contents = String::new()
        + "# time level\n"
        + "2.0 2.5\n"
        + "\n"
        + "6.0 7.5 # step up\n"
        + "10.0 12.5\n";
    fs::write(test_dir.join("series.txt"), series_contents).expect("failed to write series file");

    let config_contents = String::new()
        + "[series]\n"
        + "file = \"series.txt\"\n"
        + "\n"
        + "[average]\n"
        + "windows = [ [ 4.0, 8.0,], [ 2.0, 6.0,],]\n";
    fs::write(test_dir.join("config.toml"), config_contents).expect("failed to write config file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    assert!(run_bin(&["--root-dir", test_dir_str, "average"]));

    let reports = read_reports(&test_dir);
    assert_eq!(reports.len(), 2);
    assert!((reports[0].average - 5.0).abs() < 1e-15);
    assert!((reports[1].average - 2.5).abs() < 1e-15);

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn window_before_series_fails() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("window_before_series_fails");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_contents = String::new()
        + "[series]\n"
        + "samples = [ [ 2.0, 2.5,], [ 6.0, 7.5,],]\n"
        + "\n"
        + "[average]\n"
        + "windows = [ [ 0.0, 4.0,],]\n";
    fs::write(test_dir.join("config.toml"), config_contents).expect("failed to write config file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    assert!(!run_bin(&["--root-dir", test_dir_str, "average"]));
    assert!(!test_dir.join("results.msgpack").exists());

    fs::remove_dir_all(&test_dir).ok();
}
