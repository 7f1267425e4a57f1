use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_mixed_blade_and_vue() -> Result<()> {
    let test = CliTest::with_view(
        "a.blade.php",
        r#"<div v-if="ok" @click="go" :title="t"><x-alert/></div>"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    📄 resources/views/a.blade.php
      Line 1: [v-directive]      v-if
      Line 1: [@event]           @click
      Line 1: [:bind]            :title

    Scan complete. 3 hits across 1 files.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_findings() -> Result<()> {
    let test = CliTest::with_view(
        "welcome.blade.php",
        r#"<div class="hero"><x-button wire:click="go">{{ __('Hi') }}</x-button></div>"#,
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ No Vue-like usage found in Blade templates (after filters).

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_empty_views_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ No Vue-like usage found in Blade templates (after filters).\n"
    );

    Ok(())
}

#[test]
fn test_registered_components() -> Result<()> {
    let test = CliTest::new()?;
    test.write_app_js(
        r#"
import { createApp } from 'vue';
const app = createApp({});
app.component('UserCard', UserCard);
Vue.component("flash-message", require('./Flash.vue').default);
app.mount('#app');
"#,
    )?;
    test.write_view(
        "profile.blade.php",
        "<section>\n  <user-card :user=\"user\"></user-card>\n  <flash-message/>\n  <UserCard/>\n</section>\n",
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    📄 resources/views/profile.blade.php
      Line 2: [vue-component-tag] <user-card>
      Line 2: [:bind]            :user
      Line 3: [vue-component-tag] <flash-message>
      Line 4: [vue-component-tag] <UserCard>

    Scan complete. 4 hits across 1 files.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_custom_tags_can_be_disabled() -> Result<()> {
    let test = CliTest::with_view(
        "page.blade.php",
        "<div>\n<fancy-widget></fancy-widget>\n<p v-text=\"msg\"></p>\n</div>\n",
    )?;

    let flagged = stdout(&test.run(&[])?);
    assert!(flagged.contains("Line 2: [custom-tag]       <fancy-widget>"));
    assert!(flagged.contains("2 hits across 1 files."));

    let quiet = stdout(&test.run(&["--no-custom-tags"])?);
    assert!(!quiet.contains("custom-tag"));
    assert!(quiet.contains("1 hits across 1 files."));

    Ok(())
}

#[test]
fn test_multiple_files_in_walk_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_view("users/index.blade.php", r#"<tr v-for="u in users">"#)?;
    test.write_view("app.blade.php", r#"<form @submit.prevent="save">"#)?;
    test.write_view("users/edit.blade.php", r#"<input v-model="name">"#)?;
    test.write_view("notes.txt", r#"<input v-model="name">"#)?;

    let output = test.run(&[])?;

    assert_eq!(
        stdout(&output),
        "\u{1F4C4} resources/views/app.blade.php\n\
         \x20 Line 1: [@event]           @submit.prevent\n\
         \n\
         \u{1F4C4} resources/views/users/edit.blade.php\n\
         \x20 Line 1: [v-directive]      v-model\n\
         \n\
         \u{1F4C4} resources/views/users/index.blade.php\n\
         \x20 Line 1: [v-directive]      v-for\n\
         \n\
         Scan complete. 3 hits across 3 files.\n"
    );

    Ok(())
}

#[test]
fn test_output_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_view("a.blade.php", "<p @click=\"a\">\n<b-modal>")?;
    test.write_view("nested/b.blade.php", "<span v-html=\"raw\" title=\"@{{ t }}\">")?;

    let first = test.run(&[])?;
    let second = test.run(&[])?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_explicit_root_argument() -> Result<()> {
    let test = CliTest::with_view("a.blade.php", r#"<div v-show="open">"#)?;

    let output = test
        .command()
        .current_dir(std::env::temp_dir())
        .arg(test.root())
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("resources/views/a.blade.php"));
    assert!(stdout(&output).contains("[v-directive]"));

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_view("a.blade.php", "<div>\n<span :class=\"c\">")?;

    let output = test.run(&["--format", "json"])?;
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert!(output.status.success());
    assert_eq!(value["totalHits"], 1);
    assert_eq!(value["totalFiles"], 1);
    assert_eq!(value["files"][0]["path"], "resources/views/a.blade.php");
    assert_eq!(value["files"][0]["hits"][0]["line"], 2);
    assert_eq!(value["files"][0]["hits"][0]["kind"], ":bind");
    assert_eq!(value["files"][0]["hits"][0]["detail"], ":class");

    Ok(())
}

#[test]
fn test_missing_views_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--views-dir", "does/not/exist"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: Cannot read views directory"));

    Ok(())
}

#[test]
fn test_invalid_exclude_pattern_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--exclude", "**/[oops"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in excludes"));

    Ok(())
}

#[test]
fn test_verbose_reports_missing_app_entry() -> Result<()> {
    let test = CliTest::with_view("a.blade.php", "<p>")?;

    let output = test.run(&["-v"])?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("App entry not found"));
    assert!(stderr(&output).contains("1 template(s) scanned, 0 known component name(s)"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("--views-dir"));
    assert!(help.contains("--no-custom-tags"));
    assert!(help.contains("--format"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_template_is_skipped_with_summary() -> Result<()> {
    let test = CliTest::with_view("good.blade.php", r#"<p v-if="ok">"#)?;
    std::os::unix::fs::symlink(
        test.root().join("gone.blade.php"),
        test.root().join("resources/views/broken.blade.php"),
    )?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("resources/views/good.blade.php"));
    assert!(!stdout(&output).contains("broken.blade.php"));
    assert_eq!(
        stderr(&output),
        "warning: 1 file(s) could not be read (use -v for details)\n"
    );

    let verbose = test.run(&["-v"])?;

    assert_eq!(verbose.status.code(), Some(0));
    assert!(stderr(&verbose).contains("Failed to read file"));
    assert!(!stderr(&verbose).contains("could not be read"));

    Ok(())
}

#[test]
fn test_dot_slash_paths_keep_excludes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_view("vendor/pkg/x.blade.php", r#"<p v-if="a">"#)?;
    test.write_view("legacy/old.blade.php", r#"<p v-if="a">"#)?;
    test.write_view("home.blade.php", r#"<p v-if="a">"#)?;

    let output = test.run(&[
        "--views-dir",
        "./resources/views/",
        "--exclude",
        "./resources/views/legacy",
    ])?;

    let out = stdout(&output);
    assert!(out.contains("resources/views/home.blade.php"));
    assert!(!out.contains("vendor"));
    assert!(!out.contains("legacy"));
    assert!(out.contains("1 hits across 1 files."));

    Ok(())
}

#[test]
fn test_verbose_lists_known_components() -> Result<()> {
    let test = CliTest::with_view("a.blade.php", "<p>")?;
    test.write_app_js("app.component('UserCard', UserCard);")?;

    let output = test.run(&["-v"])?;

    assert!(stderr(&output).contains("info: known components: UserCard, user-card"));

    Ok(())
}
