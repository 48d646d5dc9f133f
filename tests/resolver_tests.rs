mod common;

use common::{TestResult, TestVault};
use deck::{LinkResolver, PropertyValue, ResolvedTarget, resolve_image};
use std::cell::Cell;

fn text(value: &str) -> PropertyValue {
    PropertyValue::from(value)
}

#[test]
fn test_wiki_link_resolves_through_vault() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = TestVault::with_files([
        ("notes/my-note.md", ""),
        ("images/photo.jpg", ""),
        ("notes/photo.jpg", ""),
    ])?;
    let vault = dir.open()?;

    assert_eq!(
        resolve_image(&text("[[photo.jpg]]"), "notes/my-note.md", &vault).as_deref(),
        Some("app://local/notes/photo.jpg")
    );
    assert_eq!(
        resolve_image(&text("[[images/photo.jpg]]"), "notes/my-note.md", &vault).as_deref(),
        Some("app://local/images/photo.jpg")
    );
    assert_eq!(
        resolve_image(&text("images/photo.jpg"), "other.md", &vault).as_deref(),
        Some("app://local/images/photo.jpg")
    );
    Ok(())
}

#[test]
fn test_custom_resource_prefix() -> TestResult {
    let dir = TestVault::with_files([("a.png", "")])?;
    let vault = dir.open()?.with_resource_prefix("file:///vault/");
    assert_eq!(
        resolve_image(&text("![](a.png)"), "", &vault).as_deref(),
        Some("file:///vault/a.png")
    );
    Ok(())
}

#[test]
fn test_external_urls_skip_the_vault() {
    let calls = Cell::new(0);
    let resolver = |_: &str, _: &str| -> Option<ResolvedTarget> {
        calls.set(calls.get() + 1);
        None
    };

    for url in ["https://example.com/image.jpg", "http://example.com/a.png"] {
        assert_eq!(resolve_image(&text(url), "note.md", &resolver).as_deref(), Some(url));
    }
    assert_eq!(
        resolve_image(&text("![alt](https://example.com/image.jpg)"), "note.md", &resolver).as_deref(),
        Some("https://example.com/image.jpg")
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_colors_and_empty_values_never_resolve() {
    let calls = Cell::new(0);
    let resolver = |target: &str, _: &str| {
        calls.set(calls.get() + 1);
        Some(ResolvedTarget::new(target, format!("app://local/{}", target)))
    };

    for value in [text("#FF5733"), text("#abc"), text(""), text("   "), PropertyValue::Null] {
        assert_eq!(resolve_image(&value, "note.md", &resolver), None);
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_list_uses_first_element() {
    let resolver = |target: &str, _: &str| {
        (target == "first.png").then(|| ResolvedTarget::new(target, "app://local/first.png"))
    };
    let value = PropertyValue::List(vec![text("first.png"), text("second.png")]);
    assert_eq!(resolve_image(&value, "", &resolver).as_deref(), Some("app://local/first.png"));
    assert_eq!(resolve_image(&PropertyValue::List(vec![]), "", &resolver), None);
}

#[test]
fn test_unknown_path_is_none() -> TestResult {
    let dir = TestVault::with_files([("a.md", "")])?;
    let vault = dir.open()?;
    assert_eq!(resolve_image(&text("[[nowhere.png]]"), "a.md", &vault), None);
    assert_eq!(resolve_image(&text("../outside.png"), "a.md", &vault), None);
    Ok(())
}

#[test]
fn test_vault_is_a_link_resolver() -> TestResult {
    let dir = TestVault::with_files([("Projects/Alpha.md", "")])?;
    let vault = dir.open()?;
    let target = vault.resolve_link("Alpha", "Projects/Beta.md").ok_or("unresolved")?;
    assert_eq!(target.path, "Projects/Alpha.md");
    assert_eq!(target.resource_address, "app://local/Projects/Alpha.md");
    Ok(())
}
