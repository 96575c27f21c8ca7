use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::MigrationError;

const TEMPLATE: &str = "-- Add migration script here\n";

/// Create a new migration file in `dir`, named `<version>_<slug>.sql`.
///
/// Authoring-time only; the running application never calls this. The
/// existing history is re-verified before anything is written: file names
/// must parse, versions must be unique, and no migration may declare a
/// foreign key (the target is Vitess-backed). The new version is the current
/// UTC timestamp, bumped past the history's watermark if the clock lags it.
pub fn create_migration(dir: &Path, name: &str) -> Result<PathBuf, MigrationError> {
    let slug = slugify(name)?;
    let watermark = verify_history(dir)?;

    let timestamp: i64 = Utc::now()
        .format("%Y%m%d%H%M%S")
        .to_string()
        .parse()
        .unwrap_or(0);
    let version = if timestamp > watermark {
        timestamp
    } else {
        // The history is ahead of the wall clock; step past it.
        watermark + 1
    };

    let path = dir.join(format!("{version}_{slug}.sql"));
    fs::write(&path, TEMPLATE)?;

    info!(path = %path.display(), "Created migration");
    Ok(path)
}

/// Verify the recorded migration history in `dir` and return its watermark
/// (the highest version present, 0 for an empty directory).
fn verify_history(dir: &Path) -> Result<i64, MigrationError> {
    if !dir.is_dir() {
        return Err(MigrationError::InvalidHistory(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut versions: Vec<i64> = Vec::new();

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "sql"))
        .collect();
    entries.sort();

    for path in entries {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        let version = parse_version(file_name).ok_or_else(|| {
            MigrationError::InvalidHistory(format!(
                "'{file_name}' is not named <version>_<description>.sql"
            ))
        })?;

        if versions.contains(&version) {
            return Err(MigrationError::InvalidHistory(format!(
                "duplicate version {version}"
            )));
        }
        versions.push(version);

        let sql = fs::read_to_string(&path)?;
        if declares_foreign_key(&sql) {
            return Err(MigrationError::InvalidHistory(format!(
                "'{file_name}' declares a foreign key, which Vitess does not support"
            )));
        }
    }

    Ok(versions.into_iter().max().unwrap_or(0))
}

fn parse_version(file_name: &str) -> Option<i64> {
    let (version, description) = file_name.strip_suffix(".sql")?.split_once('_')?;
    if description.is_empty() {
        return None;
    }
    version.parse::<i64>().ok().filter(|v| *v > 0)
}

fn slugify(name: &str) -> Result<String, MigrationError> {
    let slug = name.trim().to_lowercase().replace(char::is_whitespace, "_");

    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

    if valid {
        Ok(slug)
    } else {
        Err(MigrationError::InvalidName(name.to_string()))
    }
}

fn declares_foreign_key(sql: &str) -> bool {
    sql.lines()
        .map(|line| line.split_once("--").map_or(line, |(code, _)| code))
        .any(|line| line.to_ascii_uppercase().contains("FOREIGN KEY"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, sql: &str) {
        fs::write(dir.join(name), sql).unwrap();
    }

    #[test]
    fn creates_timestamped_file_in_empty_dir() {
        let dir = tempfile::tempdir().unwrap();

        let path = create_migration(dir.path(), "create users").unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.ends_with("_create_users.sql"));
        assert!(parse_version(file_name).is_some());
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn new_version_exceeds_existing_watermark() {
        let dir = tempfile::tempdir().unwrap();
        // Far-future version, ahead of any wall clock this test runs under
        write(dir.path(), "99990101000000_seed.sql", "SELECT 1;\n");

        let path = create_migration(dir.path(), "next").unwrap();

        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(parse_version(file_name), Some(99990101000001));
    }

    #[test]
    fn rejects_foreign_keys_in_history() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "20260101000000_bad.sql",
            "ALTER TABLE a ADD CONSTRAINT fk FOREIGN KEY (b_id) REFERENCES b (id);\n",
        );

        let err = create_migration(dir.path(), "next").unwrap_err();
        assert!(matches!(err, MigrationError::InvalidHistory(_)));
        assert!(err.to_string().contains("foreign key"));
    }

    #[test]
    fn allows_foreign_key_mentions_in_comments() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "20260101000000_ok.sql",
            "-- no FOREIGN KEY constraints allowed on Vitess\nSELECT 1;\n",
        );

        assert!(create_migration(dir.path(), "next").is_ok());
    }

    #[test]
    fn rejects_duplicate_versions() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "20260101000000_one.sql", "SELECT 1;\n");
        write(dir.path(), "20260101000000_two.sql", "SELECT 2;\n");

        let err = create_migration(dir.path(), "next").unwrap_err();
        assert!(matches!(err, MigrationError::InvalidHistory(_)));
    }

    #[test]
    fn rejects_unparseable_history_file_names() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "not-a-version.sql", "SELECT 1;\n");

        let err = create_migration(dir.path(), "next").unwrap_err();
        assert!(matches!(err, MigrationError::InvalidHistory(_)));
    }

    #[test]
    fn rejects_invalid_names() {
        let dir = tempfile::tempdir().unwrap();

        for name in ["", "   ", "semi;colon", "Ünicode"] {
            let err = create_migration(dir.path(), name).unwrap_err();
            assert!(matches!(err, MigrationError::InvalidName(_)), "{name}");
        }
    }

    #[test]
    fn slugifies_spaces_and_case() {
        assert_eq!(slugify("Add Users Table").unwrap(), "add_users_table");
        assert_eq!(slugify("already_fine-1").unwrap(), "already_fine-1");
    }

    #[test]
    fn shipped_history_passes_verification() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
        let watermark = verify_history(&dir).unwrap();
        assert!(watermark > 0);
    }
}
