//! Bundled property workbooks, resolved by logical name.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::importers::excel_importer::ImportError;

static COMPRESSED_LIQUID_XLSX: &[u8] = include_bytes!("../resources/CompressedLiquid.xlsx");
static SATURATED_XLSX: &[u8] = include_bytes!("../resources/Saturated.xlsx");
static SUPER_HEATED_XLSX: &[u8] = include_bytes!("../resources/SuperHeated.xlsx");

/// Maps a logical source name to an opened worksheet.
///
/// The production implementation serves the workbooks compiled into the
/// binary; tests substitute in-memory sources.
pub trait WorkbookSource {
    /// Opens the first worksheet of the named workbook.
    ///
    /// The workbook stream lives only for the duration of the call; the
    /// returned range is an independent copy of the sheet contents.
    fn open_sheet(&self, name: &str) -> Result<Range<Data>, ImportError>;
}

/// The workbooks bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWorkbooks;

impl WorkbookSource for EmbeddedWorkbooks {
    fn open_sheet(&self, name: &str) -> Result<Range<Data>, ImportError> {
        let bytes = match name {
            "CompressedLiquid" => COMPRESSED_LIQUID_XLSX,
            "Saturated" => SATURATED_XLSX,
            "SuperHeated" => SUPER_HEATED_XLSX,
            _ => return Err(ImportError::SourceNotFound(name.to_string())),
        };

        let mut workbook =
            Xlsx::new(Cursor::new(bytes)).map_err(|e| ImportError::WorkbookOpen {
                name: name.to_string(),
                msg: e.to_string(),
            })?;

        workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::NoWorksheet(name.to_string()))?
            .map_err(|e| ImportError::WorkbookOpen {
                name: name.to_string(),
                msg: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_names_resolve() {
        for name in ["CompressedLiquid", "Saturated", "SuperHeated"] {
            let range = EmbeddedWorkbooks.open_sheet(name).unwrap();
            assert!(range.height() > 0, "{name} should have rows");
        }
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = EmbeddedWorkbooks.open_sheet("Moist").unwrap_err();
        assert!(matches!(err, ImportError::SourceNotFound(name) if name == "Moist"));
    }
}
