//! Canned Batcave archive the file browser navigates.

/// Path the browser opens at and returns to from "Home".
pub const HOME_PATH: &str = "/batcave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: &'static str,
    pub kind: EntryKind,
    /// Category used to pick a glyph.
    pub category: &'static str,
    pub size: Option<&'static str>,
    pub modified: Option<&'static str>,
    pub path: &'static str,
}

const fn folder(name: &'static str, category: &'static str, path: &'static str) -> ArchiveEntry {
    ArchiveEntry {
        name,
        kind: EntryKind::Folder,
        category,
        size: None,
        modified: None,
        path,
    }
}

const fn file(name: &'static str, size: &'static str, path: &'static str) -> ArchiveEntry {
    ArchiveEntry {
        name,
        kind: EntryKind::File,
        category: "text",
        size: Some(size),
        modified: Some("2024-01-15 10:30"),
        path,
    }
}

const BATCAVE: [ArchiveEntry; 10] = [
    folder("batmobile", "vehicle", "/batcave/batmobile"),
    folder("batwing", "vehicle", "/batcave/batwing"),
    folder("batarangs", "gadget", "/batcave/batarangs"),
    folder("gadgets", "gadget", "/batcave/gadgets"),
    folder("surveillance", "database", "/batcave/surveillance"),
    folder("evidence", "database", "/batcave/evidence"),
    folder("case_files", "text", "/batcave/case_files"),
    folder("wayne_tech", "settings", "/batcave/wayne_tech"),
    folder("gotham_map", "map", "/batcave/gotham_map"),
    folder("criminal_database", "database", "/batcave/criminal_database"),
];

const BATMOBILE: [ArchiveEntry; 3] = [
    file("status.txt", "2.1 KB", "/batcave/batmobile/status.txt"),
    file("specs.txt", "1.8 KB", "/batcave/batmobile/specs.txt"),
    file("maintenance.log", "5.2 KB", "/batcave/batmobile/maintenance.log"),
];

const SURVEILLANCE: [ArchiveEntry; 3] = [
    file(
        "active_targets.txt",
        "3.4 KB",
        "/batcave/surveillance/active_targets.txt",
    ),
    folder("camera_feeds", "video", "/batcave/surveillance/camera_feeds"),
    folder("gps_tracking", "map", "/batcave/surveillance/gps_tracking"),
];

const CASE_FILES: [ArchiveEntry; 3] = [
    file("joker_case.txt", "8.7 KB", "/batcave/case_files/joker_case.txt"),
    file("penguin_case.txt", "6.2 KB", "/batcave/case_files/penguin_case.txt"),
    file("riddler_case.txt", "4.9 KB", "/batcave/case_files/riddler_case.txt"),
];

/// Entries inside `path`; unknown or empty folders list nothing.
pub fn listing(path: &str) -> &'static [ArchiveEntry] {
    match path {
        "/batcave" => &BATCAVE,
        "/batcave/batmobile" => &BATMOBILE,
        "/batcave/surveillance" => &SURVEILLANCE,
        "/batcave/case_files" => &CASE_FILES,
        _ => &[],
    }
}

/// Parent of `path`, stopping at the archive root.
pub fn parent(path: &str) -> Option<&str> {
    let (parent, _) = path.rsplit_once('/')?;
    if parent.is_empty() || path == HOME_PATH {
        None
    } else {
        Some(parent)
    }
}

pub fn glyph(entry: &ArchiveEntry) -> &'static str {
    match (entry.kind, entry.category) {
        (EntryKind::Folder, "vehicle") => "[VEH]",
        (EntryKind::Folder, "gadget") => "[GDG]",
        (_, "database") => "[DB]",
        (_, "map") => "[MAP]",
        (_, "settings") => "[CFG]",
        (_, "video") => "[VID]",
        (EntryKind::Folder, _) => "[DIR]",
        (EntryKind::File, _) => "[TXT]",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn root_lists_ten_folders() {
        let entries = listing(HOME_PATH);
        assert_eq!(entries.len(), 10);
        assert!(entries.iter().all(|e| e.kind == EntryKind::Folder));
        assert!(entries.iter().all(|e| parent(e.path) == Some(HOME_PATH)));
    }

    #[test]
    fn nested_listing_mixes_files_and_folders() {
        let names: Vec<&str> = listing("/batcave/surveillance")
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["active_targets.txt", "camera_feeds", "gps_tracking"]);
        assert!(listing("/batcave/batwing").is_empty());
        assert!(listing("/arkham").is_empty());
    }

    #[test]
    fn parent_stops_at_home() {
        assert_eq!(parent("/batcave/case_files"), Some("/batcave"));
        assert_eq!(parent("/batcave/surveillance/camera_feeds"), Some("/batcave/surveillance"));
        assert_eq!(parent(HOME_PATH), None);
    }

    #[test]
    fn glyphs_follow_category() {
        let root = listing(HOME_PATH);
        assert_eq!(glyph(&root[0]), "[VEH]");
        assert_eq!(glyph(&root[6]), "[DIR]");
        assert_eq!(glyph(&listing("/batcave/batmobile")[0]), "[TXT]");
    }
}
