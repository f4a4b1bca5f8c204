//! CSV bulk-import pipeline.
//!
//! One import attempt runs over complete, already-read file text:
//! - header validation is batch-level; a malformed schema makes every row
//!   meaningless, so the whole batch is refused with a single message;
//! - row validation is isolated; one bad row is recorded and the next row
//!   still runs;
//! - referential checks (unit exists, one owner per unit) look at the live
//!   repository, so earlier successful rows in the same batch count.
//!
//! The upload contract is the template's: comma-separated cells, no quoting
//! or escapes, every cell trimmed. Boolean cells compare case-insensitively
//! against the literal `true`; numeric cells that fail to parse become zero
//! rather than failing the row.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::{
    ImportCommand, OwnerRepository, OwnerStoreError, TenantRepository, TenantStoreError,
    UnitRepository, UnitStoreError,
};
use crate::domain::{Error, Owner, OwnerId, Tenant, TenantId, Unit, UnitId};

/// Required columns for a units upload, in template order.
pub const UNIT_HEADERS: &[&str] = &[
    "number",
    "floor",
    "size",
    "bedrooms",
    "bathrooms",
    "lockers",
    "parkingSpots",
    "bikeStorage",
];

/// Required columns for an owners upload, in template order.
pub const OWNER_HEADERS: &[&str] = &[
    "firstName",
    "lastName",
    "email",
    "phone",
    "unitNumber",
    "mailingAddress",
    "hasDog",
    "hasCat",
];

/// Required columns for a tenants upload, in template order.
pub const TENANT_HEADERS: &[&str] = &[
    "firstName",
    "lastName",
    "email",
    "phone",
    "unitNumber",
    "leaseStart",
    "leaseEnd",
    "hasDog",
    "hasCat",
];

const UNITS_TEMPLATE: &str = "number,floor,size,bedrooms,bathrooms,lockers,parkingSpots,bikeStorage\n101,1,950,2,1,1,1,0\n102,1,1200,3,2,1,2,1";
const OWNERS_TEMPLATE: &str = "firstName,lastName,email,phone,unitNumber,mailingAddress,hasDog,hasCat\nJohn,Smith,john@example.com,555-123-4567,101,123 Main St,true,false";
const TENANTS_TEMPLATE: &str = "firstName,lastName,email,phone,unitNumber,leaseStart,leaseEnd,hasDog,hasCat\nSarah,Davis,sarah@example.com,555-987-6543,101,2023-01-01,2023-12-31,false,true";

/// How many messages the report surfaces verbatim before summarising.
const DISPLAYED_MESSAGE_LIMIT: usize = 5;

/// How many parsed rows (header included) a preview returns.
const PREVIEW_ROWS: usize = 6;

/// The entity collection an import batch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    /// Residential units.
    Units,
    /// Owners of record.
    Owners,
    /// Leaseholders.
    Tenants,
}

impl ImportKind {
    /// The column names a batch of this kind must carry.
    pub fn required_headers(self) -> &'static [&'static str] {
        match self {
            Self::Units => UNIT_HEADERS,
            Self::Owners => OWNER_HEADERS,
            Self::Tenants => TENANT_HEADERS,
        }
    }

    /// Downloadable CSV template: the exact header line plus example rows.
    pub fn template(self) -> &'static str {
        match self {
            Self::Units => UNITS_TEMPLATE,
            Self::Owners => OWNERS_TEMPLATE,
            Self::Tenants => TENANTS_TEMPLATE,
        }
    }

    /// Stable lowercase name used in routes and file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Units => "units",
            Self::Owners => "owners",
            Self::Tenants => "tenants",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown import kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown import kind: {0}")]
pub struct ParseImportKindError(String);

impl FromStr for ImportKind {
    type Err = ParseImportKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "units" => Ok(Self::Units),
            "owners" => Ok(Self::Owners),
            "tenants" => Ok(Self::Tenants),
            other => Err(ParseImportKindError(other.to_owned())),
        }
    }
}

/// Aggregated outcome of one import batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Rows appended to the target collection.
    pub success_count: u32,
    /// Rows refused, plus one for a refused batch schema.
    pub error_count: u32,
    /// Human-readable message per failure, in row order.
    pub messages: Vec<String>,
}

impl ImportReport {
    fn record_success(&mut self) {
        self.success_count += 1;
    }

    fn record_failure(&mut self, message: impl Into<String>) {
        self.error_count += 1;
        self.messages.push(message.into());
    }

    /// The first few messages verbatim, with the remainder summarised as
    /// `...and {n} more errors`.
    pub fn display_messages(&self) -> Vec<String> {
        if self.messages.len() <= DISPLAYED_MESSAGE_LIMIT {
            return self.messages.clone();
        }
        let mut shown: Vec<String> = self
            .messages
            .iter()
            .take(DISPLAYED_MESSAGE_LIMIT)
            .cloned()
            .collect();
        shown.push(format!(
            "...and {} more errors",
            self.messages.len() - DISPLAYED_MESSAGE_LIMIT
        ));
        shown
    }
}

/// Why one data row was refused. Rendered verbatim into the report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum RowFailure {
    #[error("Row {line} has too few columns")]
    TooFewColumns { line: usize },
    #[error("Unit with number {number} already exists")]
    DuplicateUnit { number: String },
    #[error("Unit with number {number} does not exist")]
    UnknownUnit { number: String },
    #[error("An owner already exists for unit {number}")]
    DuplicateOwner { number: String },
}

/// Split raw text into trimmed cells: lines on `\n`, cells on `,`.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.split(',').map(|cell| cell.trim().to_owned()).collect())
        .collect()
}

/// First rows of an upload (header included) for the client's preview table.
pub fn preview(text: &str) -> Vec<Vec<String>> {
    parse_rows(text).into_iter().take(PREVIEW_ROWS).collect()
}

fn parse_count(cell: &str) -> u32 {
    cell.parse().unwrap_or(0)
}

fn parse_flag(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true")
}

/// Resolved positions of the required columns within a batch's header row.
///
/// Columns may appear in any order and extra columns are ignored; only the
/// required set must be present.
struct Columns {
    positions: HashMap<&'static str, usize>,
}

impl Columns {
    /// Locate every required column, or report the missing ones in
    /// required-set order.
    fn resolve(
        header: &[String],
        required: &'static [&'static str],
    ) -> Result<Self, Vec<&'static str>> {
        let mut positions = HashMap::new();
        let mut missing = Vec::new();
        for &name in required {
            match header.iter().position(|cell| cell == name) {
                Some(index) => {
                    positions.insert(name, index);
                }
                None => missing.push(name),
            }
        }
        if missing.is_empty() {
            Ok(Self { positions })
        } else {
            Err(missing)
        }
    }

    /// The row's cell under the named column, or `""` when the row is short.
    fn cell<'row>(&self, row: &'row [String], name: &'static str) -> &'row str {
        self.positions
            .get(name)
            .and_then(|&index| row.get(index))
            .map_or("", String::as_str)
    }
}

/// Domain service implementing the import command port.
#[derive(Clone)]
pub struct ImportService<U, O, T> {
    units: Arc<U>,
    owners: Arc<O>,
    tenants: Arc<T>,
}

impl<U, O, T> ImportService<U, O, T> {
    /// Create a new import service over the given repositories.
    pub fn new(units: Arc<U>, owners: Arc<O>, tenants: Arc<T>) -> Self {
        Self {
            units,
            owners,
            tenants,
        }
    }
}

#[async_trait]
impl<U, O, T> ImportCommand for ImportService<U, O, T>
where
    U: UnitRepository,
    O: OwnerRepository,
    T: TenantRepository,
{
    async fn import(&self, kind: ImportKind, text: &str) -> Result<ImportReport, Error> {
        let rows = parse_rows(text);
        let mut report = ImportReport::default();

        let header = rows.first().cloned().unwrap_or_default();
        let data_rows: Vec<&[String]> = rows
            .iter()
            .skip(1)
            .filter(|row| row.len() > 1 && row.iter().any(|cell| !cell.is_empty()))
            .map(Vec::as_slice)
            .collect();

        let columns = match Columns::resolve(&header, kind.required_headers()) {
            Ok(columns) => columns,
            Err(missing) => {
                report.record_failure(format!(
                    "Missing required headers: {}",
                    missing.join(", ")
                ));
                return Ok(report);
            }
        };

        match kind {
            ImportKind::Units => self.import_units(&columns, &data_rows, &mut report).await?,
            ImportKind::Owners => self.import_owners(&columns, &data_rows, &mut report).await?,
            ImportKind::Tenants => {
                self.import_tenants(&columns, &data_rows, &mut report).await?;
            }
        }

        info!(
            kind = %kind,
            success = report.success_count,
            errors = report.error_count,
            "import completed"
        );
        Ok(report)
    }
}

impl<U, O, T> ImportService<U, O, T>
where
    U: UnitRepository,
    O: OwnerRepository,
    T: TenantRepository,
{
    async fn import_units(
        &self,
        columns: &Columns,
        rows: &[&[String]],
        report: &mut ImportReport,
    ) -> Result<(), Error> {
        for (index, row) in rows.iter().enumerate() {
            match self.unit_from_row(columns, index, row).await? {
                Ok(unit) => {
                    self.units.insert(unit).await.map_err(map_unit_error)?;
                    report.record_success();
                }
                Err(failure) => report.record_failure(failure.to_string()),
            }
        }
        Ok(())
    }

    async fn unit_from_row(
        &self,
        columns: &Columns,
        index: usize,
        row: &[String],
    ) -> Result<Result<Unit, RowFailure>, Error> {
        if row.len() < UNIT_HEADERS.len() {
            return Ok(Err(RowFailure::TooFewColumns { line: index + 2 }));
        }

        let number = columns.cell(row, "number");
        let existing = self
            .units
            .find_by_number(number)
            .await
            .map_err(map_unit_error)?;
        if existing.is_some() {
            return Ok(Err(RowFailure::DuplicateUnit {
                number: number.to_owned(),
            }));
        }

        Ok(Ok(Unit {
            id: UnitId::random(),
            number: number.to_owned(),
            floor: columns.cell(row, "floor").to_owned(),
            size: parse_count(columns.cell(row, "size")),
            bedrooms: parse_count(columns.cell(row, "bedrooms")),
            bathrooms: parse_count(columns.cell(row, "bathrooms")),
            lockers: parse_count(columns.cell(row, "lockers")),
            parking_spots: parse_count(columns.cell(row, "parkingSpots")),
            bike_storage: parse_count(columns.cell(row, "bikeStorage")),
        }))
    }

    async fn import_owners(
        &self,
        columns: &Columns,
        rows: &[&[String]],
        report: &mut ImportReport,
    ) -> Result<(), Error> {
        for (index, row) in rows.iter().enumerate() {
            match self.owner_from_row(columns, index, row).await? {
                Ok(owner) => {
                    self.owners.insert(owner).await.map_err(map_owner_error)?;
                    report.record_success();
                }
                Err(failure) => report.record_failure(failure.to_string()),
            }
        }
        Ok(())
    }

    async fn owner_from_row(
        &self,
        columns: &Columns,
        index: usize,
        row: &[String],
    ) -> Result<Result<Owner, RowFailure>, Error> {
        if row.len() < OWNER_HEADERS.len() {
            return Ok(Err(RowFailure::TooFewColumns { line: index + 2 }));
        }

        let number = columns.cell(row, "unitNumber");
        let Some(unit) = self
            .units
            .find_by_number(number)
            .await
            .map_err(map_unit_error)?
        else {
            return Ok(Err(RowFailure::UnknownUnit {
                number: number.to_owned(),
            }));
        };

        let taken = self
            .owners
            .find_by_unit(unit.id)
            .await
            .map_err(map_owner_error)?;
        if taken.is_some() {
            return Ok(Err(RowFailure::DuplicateOwner {
                number: number.to_owned(),
            }));
        }

        Ok(Ok(Owner {
            id: OwnerId::random(),
            unit_id: unit.id,
            first_name: columns.cell(row, "firstName").to_owned(),
            last_name: columns.cell(row, "lastName").to_owned(),
            email: columns.cell(row, "email").to_owned(),
            phone: columns.cell(row, "phone").to_owned(),
            mailing_address: columns.cell(row, "mailingAddress").to_owned(),
            has_dog: parse_flag(columns.cell(row, "hasDog")),
            has_cat: parse_flag(columns.cell(row, "hasCat")),
        }))
    }

    async fn import_tenants(
        &self,
        columns: &Columns,
        rows: &[&[String]],
        report: &mut ImportReport,
    ) -> Result<(), Error> {
        for (index, row) in rows.iter().enumerate() {
            match self.tenant_from_row(columns, index, row).await? {
                Ok(tenant) => {
                    self.tenants.insert(tenant).await.map_err(map_tenant_error)?;
                    report.record_success();
                }
                Err(failure) => report.record_failure(failure.to_string()),
            }
        }
        Ok(())
    }

    async fn tenant_from_row(
        &self,
        columns: &Columns,
        index: usize,
        row: &[String],
    ) -> Result<Result<Tenant, RowFailure>, Error> {
        if row.len() < TENANT_HEADERS.len() {
            return Ok(Err(RowFailure::TooFewColumns { line: index + 2 }));
        }

        let number = columns.cell(row, "unitNumber");
        let Some(unit) = self
            .units
            .find_by_number(number)
            .await
            .map_err(map_unit_error)?
        else {
            return Ok(Err(RowFailure::UnknownUnit {
                number: number.to_owned(),
            }));
        };

        Ok(Ok(Tenant {
            id: TenantId::random(),
            unit_id: unit.id,
            first_name: columns.cell(row, "firstName").to_owned(),
            last_name: columns.cell(row, "lastName").to_owned(),
            email: columns.cell(row, "email").to_owned(),
            phone: columns.cell(row, "phone").to_owned(),
            lease_start: columns.cell(row, "leaseStart").to_owned(),
            lease_end: columns.cell(row, "leaseEnd").to_owned(),
            has_dog: parse_flag(columns.cell(row, "hasDog")),
            has_cat: parse_flag(columns.cell(row, "hasCat")),
        }))
    }
}

fn map_unit_error(error: UnitStoreError) -> Error {
    Error::internal(format!("unit store failed: {error}"))
}

fn map_owner_error(error: OwnerStoreError) -> Error {
    Error::internal(format!("owner store failed: {error}"))
}

fn map_tenant_error(error: TenantStoreError) -> Error {
    Error::internal(format!("tenant store failed: {error}"))
}
