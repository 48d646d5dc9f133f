/// A note with the given frontmatter lines and body.
pub fn note(frontmatter: &[&str], body: &str) -> String {
    if frontmatter.is_empty() {
        return body.to_string();
    }
    format!("---\n{}\n---\n{}", frontmatter.join("\n"), body)
}

/// A small travel vault: notes with wiki-link, markdown, URL, color and
/// missing covers, plus the images they point to.
pub fn travel_vault() -> Vec<(&'static str, String)> {
    vec![
        (
            "trips/Kyoto trip.md",
            note(&["cover: \"[[kyoto.jpg]]\"", "status: done", "rating: 5"], "Temples and gardens."),
        ),
        (
            "trips/Lisbon.md",
            note(
                &["cover: \"![](https://example.com/lisbon.png)\"", "status: planned"],
                "Trams and tiles.",
            ),
        ),
        (
            "trips/Oslo.md",
            note(&["cover: \"#4ECDC4\"", "status: done"], "Fjords."),
        ),
        (
            "Reading list.md",
            note(&["cover: \"[[missing.png]]\""], "Books to read.\n\nMore later."),
        ),
        ("Ideas.md", note(&[], "No frontmatter here.")),
        ("trips/images/kyoto.jpg", String::new()),
        ("attachments/banner.png", String::new()),
    ]
}
