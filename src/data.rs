//! Loading delimited files into tables.

use std::path::Path;

use anyhow::{Context, Result};

use crate::table::{Column, Row, SortTable};

/// Reads one delimited file into a [`SortTable`].
///
/// The first record is the header row; the rest are data rows. Records are
/// allowed to be ragged, since short rows just compare as empty in the
/// missing columns. An empty file yields a table with no columns, which is
/// skipped from interaction wiring.
///
/// Columns whose zero-based index appears in `no_sort` are excluded from
/// sorting. `index` is the table's position among all loaded tables and
/// seeds the fallback identifier.
pub fn load_table(
    path: &Path, delimiter: u8, no_sort: &[usize], index: usize,
) -> Result<SortTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Unable to open '{}'.", path.display()))?;

    let mut records = reader.records();

    let columns = match records.next() {
        Some(header) => {
            let header = header.with_context(|| {
                format!("Unable to read the header row of '{}'.", path.display())
            })?;

            header
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    if no_sort.contains(&i) {
                        Column::unsortable(name.trim())
                    } else {
                        Column::new(name.trim())
                    }
                })
                .collect()
        }
        None => vec![],
    };

    let rows = records
        .map(|record| {
            record
                .map(|record| Row::new(record.iter().map(ToString::to_string).collect()))
                .with_context(|| format!("Unable to parse a row of '{}'.", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| format!("table-{index}"));

    Ok(SortTable::new(id, columns, rows))
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_basic_table() {
        let file = write_fixture("Имя,Группа,Балл\nИванов,101,4.5\nПетров,102,3.8\n");

        let table = load_table(file.path(), b',', &[], 0).unwrap();
        assert_eq!(
            table
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect::<Vec<_>>(),
            ["Имя", "Группа", "Балл"]
        );
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1].cell(0), "Петров");
        assert!(table.is_interactive());
    }

    #[test]
    fn test_ragged_rows_survive() {
        let file = write_fixture("a,b,c\n1,2,3\n4\n");

        let table = load_table(file.path(), b',', &[], 0).unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1].cell(0), "4");
        assert_eq!(table.rows()[1].cell(2), "");
    }

    #[test]
    fn test_empty_file_is_not_interactive() {
        let file = write_fixture("");

        let table = load_table(file.path(), b',', &[], 3).unwrap();
        assert!(table.columns().is_empty());
        assert!(table.rows().is_empty());
        assert!(!table.is_interactive());
    }

    #[test]
    fn test_no_sort_columns_marked() {
        let file = write_fixture("a;b;c\n1;2;3\n");

        let table = load_table(file.path(), b';', &[0, 2], 0).unwrap();
        assert!(!table.columns()[0].is_sortable());
        assert!(table.columns()[1].is_sortable());
        assert!(!table.columns()[2].is_sortable());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_table(Path::new("/definitely/not/here.csv"), b',', &[], 0);
        assert!(result.is_err());
    }
}
