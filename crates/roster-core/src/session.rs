//! The import session: explicit state threaded through every parse and
//! validate call, replacing what would otherwise be ambient UI state.
//!
//! One session owns one upload's working set exclusively. Closing the
//! dialog is dropping the session; re-uploading replaces the working set
//! in place. Nothing here is shared or locked.

use tracing::{info, warn};

use roster_ingest::{TableStructure, structure_table};
use roster_model::{ColumnMapping, ColumnType, Country, InviteRecord, ParsedRow, RawTable};
use roster_phone::{PhoneBatchAnalysis, analyze_batch, country_from_phone};
use roster_validate::{edit_email, edit_name, edit_phone, edit_role, parse_row, parse_rows};

/// Steps of the import flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportStep {
    #[default]
    Upload,
    Mapping,
    Preview,
}

/// Top-level entry tabs, mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryTab {
    #[default]
    Csv,
    Manual,
}

/// Read-only context handed to the session by its collaborators. Used
/// only to bias the suggested country, never to validate or reject.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Country from the organization's billing address.
    pub billing_country: Option<Country>,
    /// The inviting user's own verified phone number.
    pub inviter_phone: Option<String>,
}

/// Counts surfaced to the user before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub valid: usize,
    pub excluded: usize,
}

/// One bulk-import session.
#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    tab: EntryTab,
    step: ImportStep,
    context: SessionContext,
    table: RawTable,
    headers: Vec<String>,
    data_rows: Vec<Vec<String>>,
    mapping: ColumnMapping,
    assumed_country: Option<Country>,
    rows: Vec<ParsedRow>,
    manual_rows: Vec<ParsedRow>,
}

impl ImportSession {
    #[must_use]
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn step(&self) -> ImportStep {
        self.step
    }

    #[must_use]
    pub fn tab(&self) -> EntryTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: EntryTab) {
        self.tab = tab;
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    #[must_use]
    pub fn assumed_country(&self) -> Option<&Country> {
        self.assumed_country.as_ref()
    }

    /// Parsed rows for the active tab.
    #[must_use]
    pub fn rows(&self) -> &[ParsedRow] {
        match self.tab {
            EntryTab::Csv => &self.rows,
            EntryTab::Manual => &self.manual_rows,
        }
    }

    /// Accepts a decoded upload, replacing any in-progress working set.
    ///
    /// Advances to the mapping step and returns true when the table has
    /// any rows; an empty decode keeps the session on the upload step
    /// (the structural-error surface is simply having nothing to map).
    pub fn load_table(&mut self, table: RawTable) -> bool {
        if table.is_empty() {
            warn!("uploaded table has no parseable rows");
            self.table = RawTable::default();
            self.headers.clear();
            self.data_rows.clear();
            self.mapping = ColumnMapping::new(0);
            self.rows.clear();
            self.step = ImportStep::Upload;
            return false;
        }
        let TableStructure {
            headers,
            rows,
            mapping,
        } = structure_table(&table);
        info!(
            columns = headers.len(),
            rows = rows.len(),
            "upload accepted, entering mapping step"
        );
        self.table = table;
        self.headers = headers;
        self.data_rows = rows;
        self.mapping = mapping;
        self.rows.clear();
        self.step = ImportStep::Mapping;
        true
    }

    /// Manual override of one column's type. Reassignment clears the
    /// type from its previous column (last write wins).
    pub fn set_column_type(&mut self, index: usize, column_type: ColumnType) {
        self.mapping.assign(index, column_type);
    }

    /// The mapping step may advance only once an email column exists.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.mapping.email_column().is_some()
    }

    /// Advances `mapping -> preview`, parsing the full row set. Returns
    /// false (and stays put) when no email column is mapped.
    pub fn continue_to_preview(&mut self) -> bool {
        if self.step != ImportStep::Mapping {
            return false;
        }
        if !self.can_continue() {
            warn!("cannot continue to preview: no email column mapped");
            return false;
        }
        self.reparse();
        self.step = ImportStep::Preview;
        true
    }

    /// Steps back without discarding anything: mapping and raw rows
    /// persist across `preview -> mapping -> upload`.
    pub fn back(&mut self) {
        self.step = match self.step {
            ImportStep::Preview => ImportStep::Mapping,
            ImportStep::Mapping | ImportStep::Upload => ImportStep::Upload,
        };
    }

    /// Changes the session-global dial-code assumption and re-derives
    /// every row from the raw table. Manual row edits made under the
    /// previous assumption are discarded; per-row overrides are not
    /// tracked separately from derived state.
    pub fn set_assumed_country(&mut self, country: Option<Country>) {
        self.assumed_country = country;
        if !self.rows.is_empty() || self.step == ImportStep::Preview {
            self.reparse();
        }
    }

    /// Analyzes the phone column against the contextual hint. Safe to
    /// call repeatedly as mapping and preview state change.
    #[must_use]
    pub fn phone_analysis(&self) -> PhoneBatchAnalysis {
        let phones: Vec<String> = match self.mapping.column_for(ColumnType::Phone) {
            Some(idx) => self
                .data_rows
                .iter()
                .map(|row| row.get(idx).cloned().unwrap_or_default())
                .collect(),
            None => Vec::new(),
        };
        analyze_batch(&phones, self.hint_country().as_ref())
    }

    /// Contextual country hint: the organization's billing country, else
    /// whatever the inviter's own verified phone implies.
    #[must_use]
    pub fn hint_country(&self) -> Option<Country> {
        self.context.billing_country.clone().or_else(|| {
            self.context
                .inviter_phone
                .as_deref()
                .and_then(country_from_phone)
        })
    }

    /// Adds a hand-entered row on the manual tab, validated exactly like
    /// an uploaded one.
    pub fn add_manual_row(&mut self, email: &str, name: &str, phone: &str, role: &str) {
        let mut mapping = ColumnMapping::new(4);
        mapping.assign(0, ColumnType::Email);
        mapping.assign(1, ColumnType::Name);
        mapping.assign(2, ColumnType::Phone);
        mapping.assign(3, ColumnType::Role);
        let cells = vec![
            email.to_string(),
            name.to_string(),
            phone.to_string(),
            role.to_string(),
        ];
        let row = parse_row(&cells, &mapping, self.assumed_dial().as_deref());
        self.manual_rows.push(row);
    }

    pub fn edit_row_email(&mut self, index: usize, value: &str) -> bool {
        self.with_row(index, |row| edit_email(row, value))
    }

    pub fn edit_row_name(&mut self, index: usize, value: &str) -> bool {
        self.with_row(index, |row| edit_name(row, value))
    }

    pub fn edit_row_phone(&mut self, index: usize, value: &str) -> bool {
        self.with_row(index, |row| edit_phone(row, value))
    }

    pub fn edit_row_role(&mut self, index: usize, value: &str) -> bool {
        self.with_row(index, |row| edit_role(row, value))
    }

    /// Valid/excluded counts shown before submission.
    #[must_use]
    pub fn summary(&self) -> SubmissionSummary {
        let rows = self.rows();
        let valid = rows.iter().filter(|row| row.is_invitable()).count();
        SubmissionSummary {
            valid,
            excluded: rows.len() - valid,
        }
    }

    /// Collects only invitable rows as submission records. Rows with
    /// errors are excluded; the summary tells the user how many.
    #[must_use]
    pub fn submission(&self) -> Vec<InviteRecord> {
        self.rows()
            .iter()
            .filter_map(ParsedRow::to_invite)
            .collect()
    }

    fn assumed_dial(&self) -> Option<String> {
        self.assumed_country.as_ref().map(|c| c.dial.clone())
    }

    fn reparse(&mut self) {
        let dial = self.assumed_dial();
        self.rows = parse_rows(&self.data_rows, &self.mapping, dial.as_deref());
    }

    fn with_row(&mut self, index: usize, apply: impl FnOnce(&mut ParsedRow)) -> bool {
        let rows = match self.tab {
            EntryTab::Csv => &mut self.rows,
            EntryTab::Manual => &mut self.manual_rows,
        };
        match rows.get_mut(index) {
            Some(row) => {
                apply(row);
                true
            }
            None => false,
        }
    }
}
