//! The four steam property tables and their eager, one-shot construction.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::importers::excel_importer::{ImportError, RowWindow, SheetImporter};
use crate::resources::{EmbeddedWorkbooks, WorkbookSource};
use crate::table::Table;

/// The four property tables the catalog owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableKind {
    CompressedLiquid,
    SaturatedByTemperature,
    SaturatedByPressure,
    Superheated,
}

impl TableKind {
    /// All tables, in load order.
    pub const ALL: [TableKind; 4] = [
        TableKind::CompressedLiquid,
        TableKind::SaturatedByTemperature,
        TableKind::SaturatedByPressure,
        TableKind::Superheated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TableKind::CompressedLiquid => "compressed liquid",
            TableKind::SaturatedByTemperature => "saturated (by temperature)",
            TableKind::SaturatedByPressure => "saturated (by pressure)",
            TableKind::Superheated => "superheated",
        }
    }

    /// Logical name of the workbook this table is read from.
    pub fn source(self) -> &'static str {
        match self {
            TableKind::CompressedLiquid => "CompressedLiquid",
            TableKind::SaturatedByTemperature | TableKind::SaturatedByPressure => "Saturated",
            TableKind::Superheated => "SuperHeated",
        }
    }

    /// Fixed (rows, cols) shape of the table.
    pub fn shape(self) -> (usize, usize) {
        match self {
            TableKind::CompressedLiquid => (120, 6),
            TableKind::SaturatedByTemperature => (77, 13),
            TableKind::SaturatedByPressure => (75, 13),
            TableKind::Superheated => (522, 6),
        }
    }

    /// Row window of this table within its workbook.
    ///
    /// The two saturation tables share one physical sheet, split at row 77:
    /// temperature entries before the boundary, pressure entries after it.
    /// Row 77 itself is the pressure section's header line.
    pub fn window(self) -> RowWindow {
        match self {
            TableKind::CompressedLiquid => RowWindow::to_end(0),
            TableKind::SaturatedByTemperature => RowWindow::new(0, Some(77)),
            TableKind::SaturatedByPressure => RowWindow::new(77, Some(152)),
            TableKind::Superheated => RowWindow::to_end(0),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One table that could not be populated, and why.
#[derive(Error, Debug)]
#[error("{table}: {error}")]
pub struct TableLoadFailure {
    pub table: TableKind,
    #[source]
    pub error: ImportError,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unable to populate steam table(s): {}", .0.iter().map(|failure| failure.to_string()).collect::<Vec<_>>().join("; "))]
    TablesUnavailable(Vec<TableLoadFailure>),
}

/// The in-memory steam property tables, loaded once and read-only afterward.
///
/// Construction either yields four fully populated tables or fails with an
/// error naming every table whose source could not be read. Nothing is
/// recomputed on access, and there is no mutation API, so a constructed
/// catalog is safe to share across threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCatalog {
    compressed_liquid: Table,
    saturated_by_temperature: Table,
    saturated_by_pressure: Table,
    superheated: Table,
}

impl TableCatalog {
    /// Loads all four tables from the bundled workbooks.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_source(&EmbeddedWorkbooks, false)
    }

    /// Loads with the coercion strictness taken from the environment config.
    pub fn load_with_config(config: &Config) -> Result<Self, CatalogError> {
        Self::from_source(&EmbeddedWorkbooks, config.strict_import)
    }

    /// Loads all four tables from an arbitrary workbook source.
    ///
    /// Every table is attempted before failing, so the error lists everything
    /// that is missing rather than just the first casualty.
    pub fn from_source(source: &dyn WorkbookSource, strict: bool) -> Result<Self, CatalogError> {
        let importer = SheetImporter::with_strict(strict);
        let mut failures = Vec::new();

        let mut load = |kind: TableKind| -> Table {
            let (rows, cols) = kind.shape();
            let mut table = Table::new(rows, cols);
            let result = source
                .open_sheet(kind.source())
                .and_then(|range| importer.fill_table(&range, kind.window(), &mut table));
            match result {
                Ok(()) => info!(table = %kind, rows, cols, "loaded property table"),
                Err(error) => failures.push(TableLoadFailure { table: kind, error }),
            }
            table
        };

        let compressed_liquid = load(TableKind::CompressedLiquid);
        let saturated_by_temperature = load(TableKind::SaturatedByTemperature);
        let saturated_by_pressure = load(TableKind::SaturatedByPressure);
        let superheated = load(TableKind::Superheated);

        if !failures.is_empty() {
            return Err(CatalogError::TablesUnavailable(failures));
        }

        Ok(TableCatalog {
            compressed_liquid,
            saturated_by_temperature,
            saturated_by_pressure,
            superheated,
        })
    }

    pub fn compressed_liquid(&self) -> &Table {
        &self.compressed_liquid
    }

    pub fn saturated_by_temperature(&self) -> &Table {
        &self.saturated_by_temperature
    }

    pub fn saturated_by_pressure(&self) -> &Table {
        &self.saturated_by_pressure
    }

    pub fn superheated(&self) -> &Table {
        &self.superheated
    }

    pub fn get(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::CompressedLiquid => &self.compressed_liquid,
            TableKind::SaturatedByTemperature => &self.saturated_by_temperature,
            TableKind::SaturatedByPressure => &self.saturated_by_pressure,
            TableKind::Superheated => &self.superheated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in TableKind::ALL {
            assert!(seen.insert(kind.label()), "duplicate label: {kind}");
        }
    }

    #[test]
    fn saturation_tables_share_a_source() {
        assert_eq!(
            TableKind::SaturatedByTemperature.source(),
            TableKind::SaturatedByPressure.source()
        );
        assert_ne!(
            TableKind::CompressedLiquid.source(),
            TableKind::Superheated.source()
        );
    }

    #[test]
    fn saturation_windows_are_disjoint_and_adjacent() {
        let by_t = TableKind::SaturatedByTemperature.window();
        let by_p = TableKind::SaturatedByPressure.window();
        assert_eq!(by_t.end, Some(by_p.start));
    }

    #[test]
    fn shapes_match_published_contract() {
        assert_eq!(TableKind::CompressedLiquid.shape(), (120, 6));
        assert_eq!(TableKind::SaturatedByTemperature.shape(), (77, 13));
        assert_eq!(TableKind::SaturatedByPressure.shape(), (75, 13));
        assert_eq!(TableKind::Superheated.shape(), (522, 6));
    }
}
