//! End-to-end site generation over a real directory tree.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use mdpress_engine::io::copy_dir_contents;
use mdpress_engine::site::generate_pages_recursive;

const TEMPLATE: &str = "<!doctype html>\n<html>\n<head><title>{{ Title }}</title>\
<link href=\"/index.css\" rel=\"stylesheet\"></head>\n<body>{{ Content }}</body>\n</html>\n";

fn write(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn builds_a_site_from_a_content_tree() {
    // Given a content tree, static assets, and a shared template
    let project = tempfile::tempdir().unwrap();
    write(
        &project,
        "content/index.md",
        "# Welcome\n\nThis is **mdpress**.\n\n- fast\n- small",
    );
    write(
        &project,
        "content/blog/first-post.md",
        "# First Post\n\nSome `code` and a [link](/blog/second-post.html).",
    );
    write(&project, "static/index.css", "body { margin: 0; }");
    let template = write(&project, "template.html", TEMPLATE);
    let output = project.path().join("docs");

    // When copying static assets and generating all pages
    copy_dir_contents(&project.path().join("static"), &output).unwrap();
    let generated = generate_pages_recursive(
        &project.path().join("content"),
        &template,
        &output,
        "/",
    )
    .unwrap();

    // Then the output tree mirrors content with .html files plus assets
    assert_eq!(generated.len(), 2);
    assert_eq!(
        fs::read_to_string(output.join("index.css")).unwrap(),
        "body { margin: 0; }"
    );

    let index = fs::read_to_string(output.join("index.html")).unwrap();
    assert_eq!(
        index,
        "<!doctype html>\n<html>\n<head><title>Welcome</title>\
<link href=\"/index.css\" rel=\"stylesheet\"></head>\n<body>\
<div><h1>Welcome</h1><p>This is <b>mdpress</b>.</p>\
<ul><li>fast</li><li>small</li></ul></div></body>\n</html>\n"
    );

    let post = fs::read_to_string(output.join("blog/first-post.html")).unwrap();
    assert!(post.contains("<title>First Post</title>"));
    assert!(post.contains("<code>code</code>"));
    assert!(post.contains("<a href=\"/blog/second-post.html\">link</a>"));
}

#[test]
fn base_path_rebases_every_generated_url() {
    let project = tempfile::tempdir().unwrap();
    write(
        &project,
        "content/index.md",
        "# Home\n\n[about](/about.html) and ![logo](/logo.png)",
    );
    let template = write(&project, "template.html", TEMPLATE);
    let output = project.path().join("docs");

    generate_pages_recursive(
        &project.path().join("content"),
        &template,
        &output,
        "/my-repo",
    )
    .unwrap();

    let index = fs::read_to_string(output.join("index.html")).unwrap();
    assert!(index.contains("href=\"/my-repo/index.css\""));
    assert!(index.contains("href=\"/my-repo/about.html\""));
    assert!(index.contains("src=\"/my-repo/logo.png\""));
}

#[test]
fn regenerating_the_same_tree_is_deterministic() {
    let project = tempfile::tempdir().unwrap();
    write(
        &project,
        "content/page.md",
        "# Page\n\n> a quote\n\n1. one\n2. two",
    );
    let template = write(&project, "template.html", TEMPLATE);
    let content = project.path().join("content");

    let out_a = project.path().join("out-a");
    let out_b = project.path().join("out-b");
    generate_pages_recursive(&content, &template, &out_a, "/").unwrap();
    generate_pages_recursive(&content, &template, &out_b, "/").unwrap();

    assert_eq!(
        fs::read_to_string(out_a.join("page.html")).unwrap(),
        fs::read_to_string(out_b.join("page.html")).unwrap()
    );
}
