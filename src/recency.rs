//! Projects ordered by modification time.

use std::{cmp::Reverse, time::SystemTime};

use crate::{
    error::Result,
    project::{ProjectEntry, RecentProject, StatedEntry},
    scanner::stat_entries,
    utils::{elapsed_seconds, relative_age, to_iso8601},
};

/// Number of projects returned when the caller does not ask for a count.
pub const DEFAULT_RECENT_COUNT: usize = 10;

/// Stat `entries` and return the `count` most recently modified, newest
/// first, with their relative age measured from `now`.
///
/// Entries with equal modification times keep directory-listing order.
///
/// # Errors
///
/// Returns [`FinderError::StatFailed`](crate::error::FinderError::StatFailed)
/// if any entry cannot be stat'ed.
pub fn most_recent(
    entries: Vec<ProjectEntry>,
    count: usize,
    now: SystemTime,
) -> Result<Vec<RecentProject>> {
    let mut stated = stat_entries(entries)?;

    stated.sort_by_key(|s| Reverse(s.stats.modified));
    stated.truncate(count);

    Ok(stated
        .into_iter()
        .map(|s| render(s, now))
        .collect())
}

fn render(stated: StatedEntry, now: SystemTime) -> RecentProject {
    let StatedEntry { entry, stats } = stated;

    RecentProject {
        name: entry.name,
        path: entry.path.display().to_string(),
        modified: to_iso8601(stats.modified),
        ago: relative_age(elapsed_seconds(stats.modified, now)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        fs::{self, File},
        path::Path,
        time::Duration,
    };
    use tempfile::TempDir;

    /// Create `name` under `root` with its modification time `age` ago.
    fn dir_aged(root: &Path, name: &str, now: SystemTime, age: Duration) -> ProjectEntry {
        let path = root.join(name);
        fs::create_dir_all(&path).unwrap();
        File::open(&path)
            .unwrap()
            .set_modified(now - age)
            .unwrap();
        ProjectEntry::new(root, name)
    }

    #[test]
    #[cfg(unix)]
    fn test_newest_first_and_truncated() {
        let tmp = TempDir::new().unwrap();
        let now = SystemTime::now();
        let entries = vec![
            dir_aged(tmp.path(), "old", now, Duration::from_secs(86_400 * 40)),
            dir_aged(tmp.path(), "newest", now, Duration::from_secs(30)),
            dir_aged(tmp.path(), "middle", now, Duration::from_secs(7_200)),
        ];

        let recent = most_recent(entries, 2, now).unwrap();

        let names: Vec<_> = recent.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "middle"]);
        assert_eq!(recent[0].ago, "just now");
        assert_eq!(recent[1].ago, "2 hours ago");
    }

    #[test]
    #[cfg(unix)]
    fn test_count_larger_than_entries() {
        let tmp = TempDir::new().unwrap();
        let now = SystemTime::now();
        let entries = vec![
            dir_aged(tmp.path(), "a", now, Duration::from_secs(86_400 * 400)),
            dir_aged(tmp.path(), "b", now, Duration::from_secs(86_400 * 3)),
        ];

        let recent = most_recent(entries, DEFAULT_RECENT_COUNT, now).unwrap();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].name, "b");
        assert_eq!(recent[0].ago, "3 days ago");
        assert_eq!(recent[1].ago, "1 year ago");
    }

    #[test]
    fn test_zero_count_is_empty() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a")).unwrap();

        let recent = most_recent(
            vec![ProjectEntry::new(tmp.path(), "a")],
            0,
            SystemTime::now(),
        )
        .unwrap();

        assert!(recent.is_empty());
    }

    #[test]
    fn test_missing_entry_fails() {
        let tmp = TempDir::new().unwrap();

        let result = most_recent(
            vec![ProjectEntry::new(tmp.path(), "vanished")],
            5,
            SystemTime::now(),
        );

        assert!(result.is_err());
    }
}
