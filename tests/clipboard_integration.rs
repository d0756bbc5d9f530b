/*!
 * Integration test for clipboard functionality
 */

use std::env;
use std::fs::{self, File};
use std::process::Command;

use assert_cmd::Command as BinCommand;
use tempfile::tempdir;

#[test]
#[ignore] // This test requires tmux to be running and is ignored by default
          // To run this test manually use: cargo test --test clipboard_integration -- --ignored
fn test_clipboard_flag() {
    // Skip if not in a tmux session
    if env::var("TMUX").is_err() {
        return;
    }

    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("clipped");
    fs::create_dir(&root).unwrap();
    File::create(root.join("test.txt")).unwrap();

    let output = BinCommand::cargo_bin("treed")
        .unwrap()
        .arg("-c")
        .arg(&root)
        .output()
        .unwrap();

    assert!(output.status.success());

    let printed = String::from_utf8_lossy(&output.stdout);
    assert_eq!(printed, "clipped/\n└── test.txt\n");

    // Get the content from the tmux clipboard
    let clipboard_output = Command::new("tmux").args(["show-buffer"]).output().unwrap();
    let clipboard_content = String::from_utf8_lossy(&clipboard_output.stdout);

    // The clipboard holds the tree without the trailing newline
    assert_eq!(printed.trim_end_matches('\n'), clipboard_content);
}
