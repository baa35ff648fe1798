use crate::error::DataLoadError;
use crate::table::RawTable;
use chrono::{NaiveDate, NaiveDateTime};
use configuration::DatasetSettings;
use core_types::TradeRecord;
use csv::StringRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// Largest absolute value a single amount cell may hold (1e24).
pub const MAX_ABS_AMOUNT: Decimal = dec!(1000000000000000000000000);

/// Largest sum of absolute amounts over the whole table (1e27). Keeping every
/// row inside this bound means no yearly or monthly sum, and no difference of
/// two sums, can overflow `Decimal`.
pub const MAX_TOTAL_ABS: Decimal = dec!(1000000000000000000000000000);

/// Names of the columns the loader reads. Everything else in the file is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub period: String,
    pub export: String,
    pub import: String,
    /// Optional. Rows get `country = None` when the column is absent.
    pub country: Option<String>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::from(&DatasetSettings::default())
    }
}

impl From<&DatasetSettings> for ColumnLayout {
    fn from(settings: &DatasetSettings) -> Self {
        let country = settings.country_column.trim();
        Self {
            period: settings.period_column.clone(),
            export: settings.export_column.clone(),
            import: settings.import_column.clone(),
            country: (!country.is_empty()).then(|| country.to_string()),
        }
    }
}

/// Header positions resolved against a `ColumnLayout`.
struct ColumnIndex {
    period: usize,
    export: usize,
    import: usize,
    country: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, layout: &ColumnLayout) -> Result<Self, DataLoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require =
            |name: &str| find(name).ok_or_else(|| DataLoadError::MissingColumn(name.to_string()));

        Ok(Self {
            period: require(&layout.period)?,
            export: require(&layout.export)?,
            import: require(&layout.import)?,
            country: layout.country.as_deref().and_then(&find),
        })
    }
}

/// Loads the dataset at `path` using the default column names.
pub fn load(path: &Path) -> Result<RawTable, DataLoadError> {
    load_with_layout(path, &ColumnLayout::default())
}

/// Loads the dataset at `path`, reading the columns named by `layout`.
pub fn load_with_layout(path: &Path, layout: &ColumnLayout) -> Result<RawTable, DataLoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::NotFound(path.to_path_buf()),
        _ => DataLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let table = load_from_reader(file, layout)?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        years = table.years().len(),
        "Dataset loaded."
    );
    Ok(table)
}

/// Parses CSV text from any reader. The first row must be the header row.
pub fn load_from_reader<R: Read>(
    reader: R,
    layout: &ColumnLayout,
) -> Result<RawTable, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, layout)?;

    let mut records = Vec::new();
    let mut total_abs = Decimal::ZERO;
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record = parse_row(&row, line, &index, layout)?;

        // Each term is at most 2 * MAX_ABS_AMOUNT, so this cannot overflow.
        total_abs += record.export_value.abs() + record.import_value.abs();
        if total_abs > MAX_TOTAL_ABS {
            return Err(DataLoadError::TotalOutOfRange {
                line,
                limit: MAX_TOTAL_ABS,
            });
        }
        records.push(record);
    }

    Ok(RawTable::new(records))
}

fn parse_row(
    row: &StringRecord,
    line: u64,
    index: &ColumnIndex,
    layout: &ColumnLayout,
) -> Result<TradeRecord, DataLoadError> {
    let raw_period = row.get(index.period).unwrap_or_default();
    let period = parse_period(raw_period).ok_or_else(|| DataLoadError::InvalidDate {
        line,
        value: raw_period.to_string(),
    })?;

    let amount = |position: usize, column: &str| {
        let raw = row.get(position).unwrap_or_default();
        parse_amount(raw)
            .filter(|v| v.abs() <= MAX_ABS_AMOUNT)
            .ok_or_else(|| DataLoadError::InvalidNumber {
                line,
                column: column.to_string(),
                value: raw.to_string(),
            })
    };
    let export_value = amount(index.export, &layout.export)?;
    let import_value = amount(index.import, &layout.import)?;

    let country = index
        .country
        .and_then(|i| row.get(i))
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ok(TradeRecord::new(period, country, export_value, import_value))
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a period cell into a calendar date.
///
/// Accepts ISO dates, ISO timestamps (time part dropped), German `DD.MM.YYYY`,
/// `YYYY/MM/DD` and bare `YYYY-MM` months (first day of the month).
pub fn parse_period(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
}

/// Parses a currency cell. Empty cells count as zero. Range checks against
/// `MAX_ABS_AMOUNT` happen in the row parser.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("2023-04-01", 2023, 4, 1)]
    #[case("2023-04-15T00:00:00", 2023, 4, 15)]
    #[case("2023-04-15 13:45:00", 2023, 4, 15)]
    #[case("15.04.2023", 2023, 4, 15)]
    #[case("2023/04/15", 2023, 4, 15)]
    #[case("2023-04", 2023, 4, 1)]
    #[case("  2024-12-31 ", 2024, 12, 31)]
    fn parses_supported_period_formats(
        #[case] raw: &str,
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
    ) {
        assert_eq!(parse_period(raw), NaiveDate::from_ymd_opt(y, m, d));
    }

    #[rstest]
    #[case("")]
    #[case("Januar 2023")]
    #[case("2023-13-01")]
    #[case("2023-02-30")]
    fn rejects_invalid_periods(#[case] raw: &str) {
        assert_eq!(parse_period(raw), None);
    }

    #[rstest]
    #[case("1500", Some(dec!(1500)))]
    #[case("  42.75 ", Some(dec!(42.75)))]
    #[case("-12", Some(dec!(-12)))]
    #[case("1.5e3", Some(dec!(1500)))]
    #[case("", Some(Decimal::ZERO))]
    #[case("n/a", None)]
    fn parses_amounts(#[case] raw: &str, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_amount(raw), expected);
    }

    #[test]
    fn blank_country_column_setting_disables_country() {
        let settings = DatasetSettings {
            country_column: " ".to_string(),
            ..DatasetSettings::default()
        };

        assert_eq!(ColumnLayout::from(&settings).country, None);
        assert_eq!(ColumnLayout::default().country.as_deref(), Some("Land"));
    }
}
