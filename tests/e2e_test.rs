mod common;
mod utils;

use anyhow::Result;
use common::TestEnvironment;

#[test]
fn test_pages_lists_all_three_pages() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = utils::run_sundial_command(&env, &["pages"])?;
    assert_eq!(output.exit_code, 0, "pages failed: {}", output.stderr);

    assert!(output.stdout.contains("1. privacy"));
    assert!(output.stdout.contains("Our Pledge to Privacy"));
    assert!(output.stdout.contains("Data Security & Encryption"));
    assert!(output.stdout.contains("3. browsers"));

    Ok(())
}

#[test]
fn test_walk_clamps_at_both_ends() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = utils::run_sundial_command(
        &env,
        &[
            "--output", "json", "walk", "next", "next", "next", "previous", "previous", "prev",
        ],
    )?;
    assert_eq!(output.exit_code, 0, "walk failed: {}", output.stderr);

    let events = output.json_events()?;
    let indices: Vec<u64> = events
        .iter()
        .filter(|e| e["code"] == "wizard.walk.step")
        .filter_map(|e| e["data"]["index"].as_u64())
        .collect();
    assert_eq!(indices, vec![1, 2, 2, 1, 0, 0]);

    let moved: Vec<bool> = events
        .iter()
        .filter_map(|e| e["data"]["moved"].as_bool())
        .collect();
    assert_eq!(moved, vec![true, true, false, true, true, false]);

    Ok(())
}

#[test]
fn test_show_browser_page_text() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = utils::run_sundial_command(&env, &["show", "browsers"])?;
    assert_eq!(output.exit_code, 0, "show failed: {}", output.stderr);

    assert!(output.stdout.contains("Browser Compatibility"));
    assert!(output.stdout.contains("• Firefox"));
    assert!(output.stdout.contains("• Waterfox"));
    assert!(output.stdout.contains("Page 3 of 3"));

    Ok(())
}

#[test]
fn test_show_frame_renders_wizard() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.add_assets(&["Background_Image.svg", "Sundial.svg", "Group_30513.png"])?;

    let output = utils::run_sundial_command(&env, &["show", "2", "--frame"])?;
    assert_eq!(output.exit_code, 0, "show --frame failed: {}", output.stderr);

    assert!(output.stdout.contains("Data Security & Encryption"));
    assert!(output.stdout.contains("Back"));
    assert!(output.stdout.contains("Next"));
    assert!(!output.stdout.contains("[missing]"));

    Ok(())
}

#[test]
fn test_show_reports_missing_background() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.add_assets(&["Sundial.svg", "Group_30513.png"])?;

    let output = utils::run_sundial_command(&env, &["show", "privacy"])?;
    assert_eq!(output.exit_code, 0, "show failed: {}", output.stderr);
    assert!(output.stdout.contains("Background: Background_Image.svg (missing)"));
    assert!(output.stdout.contains("Sundial: Sundial.svg"));

    let output = utils::run_sundial_command(&env, &["show", "1", "--frame"])?;
    assert_eq!(output.exit_code, 0, "show --frame failed: {}", output.stderr);
    assert!(output.stdout.contains("Background_Image.svg [missing]"));

    Ok(())
}

#[test]
fn test_show_unknown_page_fails() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = utils::run_sundial_command(&env, &["show", "7"])?;
    assert_eq!(output.exit_code, 1);
    assert!(output.stderr.contains("page 7 does not exist"));

    Ok(())
}

#[test]
fn test_missing_assets_are_warnings_only() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.add_assets(&["Background_Image.svg", "Sundial.svg"])?;

    let output = utils::run_sundial_command(&env, &["assets"])?;
    assert_eq!(output.exit_code, 0, "assets failed: {}", output.stderr);

    assert!(output.stdout.contains("Sundial.svg"));
    assert!(output.stderr.contains("Group_30513.png"));
    assert!(output.stderr.contains("Group_30501.svg"));
    assert!(output.stderr.contains("2 of 4 images found"));

    Ok(())
}

#[test]
fn test_config_init_and_show() -> Result<()> {
    let env = TestEnvironment::new()?;

    let output = utils::run_sundial_command(&env, &["config", "init"])?;
    assert_eq!(output.exit_code, 0, "config init failed: {}", output.stderr);
    assert!(env.config_path().exists());

    let written = std::fs::read_to_string(env.config_path())?;
    assert!(written.contains("mouse = true"));
    assert!(written.contains("# static_dir"));

    let output = utils::run_sundial_command(&env, &["config", "init"])?;
    assert_eq!(output.exit_code, 0);
    assert!(output.stderr.contains("already exists"));

    std::fs::write(env.config_path(), "mouse = false\n")?;
    let output = utils::run_sundial_command(&env, &["--output", "json", "config", "show"])?;
    assert_eq!(output.exit_code, 0, "config show failed: {}", output.stderr);
    let events = output.json_events()?;
    assert_eq!(events[0]["data"]["mouse"], false);
    assert_eq!(events[0]["data"]["show_images"], true);

    Ok(())
}
