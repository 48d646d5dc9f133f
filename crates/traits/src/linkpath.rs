//! Link target resolution against a list of vault paths.
//!
//! Given the vault-relative paths of every file, finds the file a link
//! such as `photo.jpg`, `images/photo.jpg` or `Some Note` points at when it
//! appears in the note at `context_path`.

/// Normalises `.` and `..` segments. Returns `None` if the path climbs above the root.
pub fn normalize_path(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Folder part of a vault path, `""` at the root.
pub fn parent_folder(path: &str) -> &str {
    path.rfind('/').map_or("", |slash| &path[..slash])
}

fn has_extension(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    matches!(name.rfind('.'), Some(dot) if dot > 0)
}

fn segment_count(path: &str) -> usize {
    path.split('/').count()
}

/// Finds the first file matching `linkpath` as seen from `context_path`.
///
/// Lookup order:
/// 1. relative to the context note's folder, then from the vault root,
///    each also with `.md` appended when the link has no extension;
/// 2. any file whose path ends with `/linkpath`; the shallowest one wins,
///    ties broken alphabetically.
pub fn first_linkpath_dest<'a, I>(files: I, linkpath: &str, context_path: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let files = files.into_iter();
    let linkpath = linkpath.trim().trim_start_matches('/');
    if linkpath.is_empty() {
        return None;
    }

    let mut targets = vec![linkpath.to_string()];
    if !has_extension(linkpath) {
        targets.push(format!("{}.md", linkpath));
    }

    let folder = parent_folder(context_path);
    let mut exact: Vec<String> = Vec::new();
    for target in &targets {
        if !folder.is_empty()
            && let Some(relative) = normalize_path(&format!("{}/{}", folder, target))
        {
            exact.push(relative);
        }
    }
    for target in &targets {
        if let Some(absolute) = normalize_path(target) {
            exact.push(absolute);
        }
    }

    for candidate in &exact {
        if !candidate.is_empty() && files.clone().any(|file| file == candidate.as_str()) {
            return Some(candidate.clone());
        }
    }

    let suffixes: Vec<String> = targets
        .iter()
        .filter_map(|target| normalize_path(target))
        .filter(|target| !target.is_empty())
        .map(|target| format!("/{}", target))
        .collect();

    files
        .filter(|file| suffixes.iter().any(|suffix| file.ends_with(suffix.as_str())))
        .min_by(|a, b| segment_count(a).cmp(&segment_count(b)).then_with(|| a.cmp(b)))
        .map(str::to_string)
}
