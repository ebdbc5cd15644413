//! CSV reading and writing for the flat tabular form.
//!
//! ## Header recognition
//!
//! The tabular format is localized: the original files carry Chinese headers,
//! newer ones English. Both alias sets map to the same semantic fields:
//!
//! | Field | Accepted headers |
//! |-------|------------------|
//! | category | `category`, `一级分类` |
//! | subcategory | `subcategory`, `二级分类` |
//! | name | `name`, `网站名称` |
//! | url | `url`, `网址` |
//! | icon | `icon`, `图标URL` |
//! | tags | `tags`, `标签` |
//! | description | `description`, `简介` |
//!
//! The four required columns must be present (under either alias); the
//! optional three default to empty cells when the column is absent.
//!
//! ## Byte-order marks
//!
//! Reads tolerate a leading UTF-8 BOM. Writes emit one, plus the English
//! canonical headers — spreadsheet applications use the BOM to detect UTF-8,
//! and the original pipeline wrote `utf-8-sig` for the same reason.
//!
//! The whole input is read into memory up front and output bytes are built
//! completely before the output file is opened, so a failed run never leaves
//! a partial file behind.

use crate::model::Row;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("input file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{field}' (accepted headers: {accepted})")]
    MissingColumn {
        field: &'static str,
        accepted: String,
    },
    #[error("empty input: {0} contains a header row but no bookmarks")]
    Empty(PathBuf),
}

struct Column {
    field: &'static str,
    aliases: [&'static str; 2],
    required: bool,
}

const COLUMNS: [Column; 7] = [
    Column { field: "category", aliases: ["category", "一级分类"], required: true },
    Column { field: "subcategory", aliases: ["subcategory", "二级分类"], required: true },
    Column { field: "name", aliases: ["name", "网站名称"], required: true },
    Column { field: "url", aliases: ["url", "网址"], required: true },
    Column { field: "icon", aliases: ["icon", "图标URL"], required: false },
    Column { field: "tags", aliases: ["tags", "标签"], required: false },
    Column { field: "description", aliases: ["description", "简介"], required: false },
];

/// Canonical headers used on write, in column order.
const WRITE_HEADERS: [&str; 7] = [
    "category",
    "subcategory",
    "name",
    "url",
    "icon",
    "tags",
    "description",
];

/// Read a bookmark table from `path` into rows.
///
/// Cell values are returned as-is; trimming and blank-vs-absent rules are
/// applied by [`crate::convert`].
pub fn read_rows(path: &Path) -> Result<Vec<Row>, TableError> {
    if !path.exists() {
        return Err(TableError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let content = content.trim_start_matches('\u{feff}');

    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    let indices = resolve_columns(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        rows.push(Row {
            category: cell(indices[0]),
            subcategory: cell(indices[1]),
            name: cell(indices[2]),
            url: cell(indices[3]),
            icon: cell(indices[4]),
            tags: cell(indices[5]),
            description: cell(indices[6]),
        });
    }

    if rows.is_empty() {
        return Err(TableError::Empty(path.to_path_buf()));
    }
    Ok(rows)
}

/// Map each semantic field to its header position, if present.
fn resolve_columns(headers: &csv::StringRecord) -> Result<[Option<usize>; 7], TableError> {
    let mut indices = [None; 7];
    for (i, column) in COLUMNS.iter().enumerate() {
        indices[i] = headers
            .iter()
            .position(|h| column.aliases.contains(&h.trim()));
        if column.required && indices[i].is_none() {
            return Err(TableError::MissingColumn {
                field: column.field,
                accepted: column.aliases.join(", "),
            });
        }
    }
    Ok(indices)
}

/// Write rows to `path` as a UTF-8 CSV with a leading BOM.
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(WRITE_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.category.as_str(),
            row.subcategory.as_str(),
            row.name.as_str(),
            row.url.as_str(),
            row.icon.as_str(),
            row.tags.as_str(),
            row.description.as_str(),
        ])?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| TableError::Io(e.into_error()))?;

    let mut bytes = Vec::with_capacity(body.len() + 3);
    bytes.extend_from_slice("\u{feff}".as_bytes());
    bytes.extend_from_slice(&body);
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_english_headers() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            "bookmarks.csv",
            "category,subcategory,name,url,icon,tags,description\n\
             Dev,Tools,GitHub,https://github.com,,git,Code hosting\n",
        );
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Dev");
        assert_eq!(rows[0].tags, "git");
        assert_eq!(rows[0].description, "Code hosting");
    }

    #[test]
    fn reads_chinese_headers() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            "bookmarks.csv",
            "一级分类,二级分类,网站名称,网址,图标URL,标签,简介\n\
             开发,工具,GitHub,https://github.com,,代码,托管平台\n",
        );
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].category, "开发");
        assert_eq!(rows[0].name, "GitHub");
        assert_eq!(rows[0].description, "托管平台");
    }

    #[test]
    fn tolerates_leading_bom() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            "bookmarks.csv",
            "\u{feff}category,subcategory,name,url\nDev,Tools,GitHub,https://github.com\n",
        );
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].category, "Dev");
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            "bookmarks.csv",
            "category,subcategory,name,url\nDev,Tools,GitHub,https://github.com\n",
        );
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].icon, "");
        assert_eq!(rows[0].tags, "");
        assert_eq!(rows[0].description, "");
    }

    #[test]
    fn missing_required_column_names_the_field() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            "bookmarks.csv",
            "category,subcategory,name\nDev,Tools,GitHub\n",
        );
        let err = read_rows(&path).unwrap_err();
        match err {
            TableError::MissingColumn { field, accepted } => {
                assert_eq!(field, "url");
                assert!(accepted.contains("网址"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_input_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(&tmp, "bookmarks.csv", "category,subcategory,name,url\n");
        assert!(matches!(read_rows(&path), Err(TableError::Empty(_))));
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.csv");
        assert!(matches!(read_rows(&path), Err(TableError::NotFound(_))));
    }

    #[test]
    fn write_emits_bom_and_canonical_headers() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let rows = vec![Row {
            category: "Dev".to_string(),
            subcategory: "Tools".to_string(),
            name: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            icon: String::new(),
            tags: "git, code".to_string(),
            description: String::new(),
        }];
        write_rows(&path, &rows).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], [0xef, 0xbb, 0xbf]);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("category,subcategory,name,url,icon,tags,description"));
        assert!(text.contains("\"git, code\""));
    }

    #[test]
    fn written_table_reads_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let rows = vec![Row {
            category: "开发".to_string(),
            subcategory: "工具".to_string(),
            name: "GitHub".to_string(),
            url: "https://github.com".to_string(),
            icon: String::new(),
            tags: "代码, git".to_string(),
            description: "托管".to_string(),
        }];
        write_rows(&path, &rows).unwrap();
        let back = read_rows(&path).unwrap();
        assert_eq!(back, rows);
    }
}
