use crate::commands::{CmdMessage, CmdResult};
use crate::csv;
use crate::error::{Result, RosterError};
use crate::records::RecordStore;
use crate::store::Persistence;
use std::fs;
use std::path::Path;

/// Import employees from a CSV file. Rows failing validation are skipped;
/// the outcome message reports "imported N of M". An unusable file
/// (too short, or no resolvable rows) aborts with nothing imported.
pub fn run<P: Persistence>(store: &mut RecordStore<P>, path: &Path) -> Result<CmdResult> {
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        return Err(RosterError::Api(format!(
            "Not a CSV file: {}",
            path.display()
        )));
    }

    let text = fs::read_to_string(path).map_err(RosterError::Io)?;
    let rows = csv::parse(&text)?;
    let total = rows.len();
    let inserted = store.bulk_insert(rows)?;

    let mut result = CmdResult::default();
    if inserted == total {
        result.add_message(CmdMessage::success(format!(
            "Imported {} employee(s)",
            inserted
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Imported {} of {} employee(s); the rest failed validation",
            inserted, total
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn imports_valid_rows_and_drops_short_ones() {
        let dir = tempfile::tempdir().unwrap();
        // One 3-field row (dropped by the codec) and one 4-field row.
        let path = write_csv(
            &dir,
            "team.csv",
            "Name,Email,Role,Department\nShort,s@x.com,Dev\nAnn,a@x.com,Dev,Eng\n",
        );

        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        let result = run(&mut store, &path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name, "Ann");
        assert!(result.messages[0].content.contains("1"));
    }

    #[test]
    fn reports_partial_success_when_rows_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "team.csv",
            "Name,Email,Role,Department\nAnn,a@x.com,Dev,Eng\nBad,not-an-email,Dev,Eng\n",
        );

        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        let result = run(&mut store, &path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(result.messages[0].content.contains("1 of 2"));
    }

    #[test]
    fn rejects_non_csv_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "team.txt", "irrelevant");
        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        assert!(matches!(
            run(&mut store, &path),
            Err(RosterError::Api(_))
        ));
    }

    #[test]
    fn header_only_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "team.csv", "Name,Email,Role,Department\n");
        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        assert!(matches!(
            run(&mut store, &path),
            Err(RosterError::MalformedCsv)
        ));
        assert!(store.is_empty());
    }
}
