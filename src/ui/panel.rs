use anyhow::{Context, Result};

use crate::db::store::StoreError;
use crate::db::{self, Database};

use super::forms::Form;

/// The seven features the sidebar offers. A fixed enum instead of a dynamic
/// name-to-constructor registry: the mapping is resolved at compile time and
/// mounting reports its errors explicitly at the call site.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feature {
    Lms,
    Library,
    Transport,
    Hostel,
    Inventory,
    Hr,
    Attendance,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Lms,
        Feature::Library,
        Feature::Transport,
        Feature::Hostel,
        Feature::Inventory,
        Feature::Hr,
        Feature::Attendance,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Feature::Lms => "Learning Management System",
            Feature::Library => "Library Management",
            Feature::Transport => "Transport Management",
            Feature::Hostel => "Hostel Management",
            Feature::Inventory => "Inventory Management",
            Feature::Hr => "HR Management",
            Feature::Attendance => "Biometrics/RFID",
        }
    }
}

/// What a section's submit button does. Dispatched in [`run_action`]; the
/// success notice comes back from there so attendance can personalize it.
#[derive(Copy, Clone)]
pub(crate) enum SubmitAction {
    AddAssignment,
    AddBook,
    AddBus,
    AddRoute,
    AddHostel,
    AddRoom,
    AddItem,
    AddStaff,
    MarkAttendance,
}

/// A list of display lines under a section, with a movable selection.
pub(crate) struct ListView {
    pub(crate) title: &'static str,
    pub(crate) rows: Vec<String>,
    pub(crate) selected: usize,
}

impl ListView {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            rows: Vec::new(),
            selected: 0,
        }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    fn ensure_in_bounds(&mut self) {
        if self.rows.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.rows.len() {
            self.selected = self.rows.len() - 1;
        }
    }
}

/// One form plus (usually) the list it feeds. A panel is just a sequence of
/// these; the hostel and transport panels carry two, everyone else one.
pub(crate) struct Section {
    pub(crate) heading: Option<&'static str>,
    pub(crate) form: Form,
    pub(crate) action: SubmitAction,
    pub(crate) list: Option<ListView>,
}

impl Section {
    fn new(
        heading: Option<&'static str>,
        form: Form,
        action: SubmitAction,
        list_title: Option<&'static str>,
    ) -> Self {
        Self {
            heading,
            form,
            action,
            list: list_title.map(ListView::new),
        }
    }
}

/// A mounted feature panel. Constructed fresh on every sidebar selection so
/// switching away and back always re-queries the store.
pub(crate) struct Panel {
    pub(crate) feature: Feature,
    pub(crate) sections: Vec<Section>,
    pub(crate) active_section: usize,
    /// Attachment paths aligned with the LMS list rows; empty elsewhere.
    attachments: Vec<String>,
}

impl Panel {
    /// Build the panel for a feature, ensure the schema, and load its lists.
    pub(crate) fn mount(db: &Database, feature: Feature) -> Result<Self> {
        db.ensure_schema()
            .context("failed to prepare the database")?;

        let sections = match feature {
            Feature::Lms => {
                let mut form = Form::new(db::lms::ASSIGNMENTS.columns);
                form.seed(3, db::lms::today());
                vec![Section::new(
                    None,
                    form,
                    SubmitAction::AddAssignment,
                    Some("All Assignments:"),
                )]
            }
            Feature::Library => vec![Section::new(
                None,
                Form::new(db::library::BOOKS.columns),
                SubmitAction::AddBook,
                Some("All Books:"),
            )],
            Feature::Transport => vec![
                Section::new(
                    Some("Add Bus"),
                    Form::new(db::transport::BUSES.columns),
                    SubmitAction::AddBus,
                    Some("Buses:"),
                ),
                Section::new(
                    Some("Add Route"),
                    Form::new(db::transport::ROUTES.columns),
                    SubmitAction::AddRoute,
                    Some("Routes:"),
                ),
            ],
            Feature::Hostel => vec![
                Section::new(
                    Some("Add Hostel"),
                    Form::new(db::hostel::HOSTELS.columns),
                    SubmitAction::AddHostel,
                    None,
                ),
                Section::new(
                    Some("Add Room"),
                    Form::new(&db::hostel::ROOMS.columns[1..]),
                    SubmitAction::AddRoom,
                    Some("Hostel Rooms:"),
                ),
            ],
            Feature::Inventory => vec![Section::new(
                None,
                Form::new(db::inventory::ITEMS.columns),
                SubmitAction::AddItem,
                Some("Inventory Items:"),
            )],
            Feature::Hr => vec![Section::new(
                None,
                Form::new(db::hr::STAFF.columns),
                SubmitAction::AddStaff,
                Some("Staff List:"),
            )],
            Feature::Attendance => vec![Section::new(
                None,
                Form::new(&db::attendance::ATTENDANCE.columns[..1]),
                SubmitAction::MarkAttendance,
                Some("Today's Attendance:"),
            )],
        };

        let mut panel = Self {
            feature,
            sections,
            active_section: 0,
            attachments: Vec::new(),
        };
        panel.reload(db)?;
        Ok(panel)
    }

    /// Refresh every list in the panel from the store.
    pub(crate) fn reload(&mut self, db: &Database) -> Result<()> {
        for section in &mut self.sections {
            let action = section.action;
            if let Some(list) = &mut section.list {
                list.rows = load_rows(db, action)?;
                list.ensure_in_bounds();
            }
        }
        if self.feature == Feature::Lms {
            self.attachments = db::lms::list_assignments(db)?
                .into_iter()
                .map(|assignment| assignment.file_path)
                .collect();
        }
        Ok(())
    }

    /// Submit the active section. On success the form clears back to its
    /// seeds, every list reloads, and the notice bubbles up to the footer; on
    /// a store error the inputs stay put and the message renders inline.
    pub(crate) fn submit(&mut self, db: &Database) -> Result<Option<String>> {
        let index = self.active_section;
        let action = self.sections[index].action;
        let values: Vec<String> = self.sections[index]
            .form
            .values()
            .iter()
            .map(|value| value.to_string())
            .collect();
        let raw: Vec<&str> = values.iter().map(String::as_str).collect();

        match run_action(db, action, &raw) {
            Ok(notice) => {
                self.sections[index].form.clear();
                self.reload(db)?;
                Ok(Some(notice))
            }
            Err(err) => {
                self.sections[index].form.error = Some(err.to_string());
                Ok(None)
            }
        }
    }

    /// Move field focus forward, rolling over into the next section.
    pub(crate) fn focus_next_field(&mut self) {
        if !self.sections[self.active_section].form.next_field() {
            self.active_section = (self.active_section + 1) % self.sections.len();
            self.sections[self.active_section].form.focus_first();
        }
    }

    /// Move field focus backward, rolling over into the previous section.
    pub(crate) fn focus_prev_field(&mut self) {
        if !self.sections[self.active_section].form.prev_field() {
            self.active_section = if self.active_section == 0 {
                self.sections.len() - 1
            } else {
                self.active_section - 1
            };
            self.sections[self.active_section].form.focus_last();
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        self.sections[self.active_section].form.push_char(ch);
    }

    pub(crate) fn backspace(&mut self) {
        self.sections[self.active_section].form.backspace();
    }

    /// Move the selection of the active section's list, falling back to the
    /// first list in the panel when the active section has none.
    pub(crate) fn move_list_selection(&mut self, offset: isize) {
        let index = self.active_section;
        let target = if self.sections[index].list.is_some() {
            index
        } else {
            match self
                .sections
                .iter()
                .position(|section| section.list.is_some())
            {
                Some(found) => found,
                None => return,
            }
        };
        if let Some(list) = &mut self.sections[target].list {
            list.move_selection(offset);
        }
    }

    /// Attachment path of the selected LMS assignment, if any. `Some("")`
    /// means the assignment exists but carries no attachment.
    pub(crate) fn selected_attachment(&self) -> Option<&str> {
        if self.feature != Feature::Lms {
            return None;
        }
        let list = self.sections.first()?.list.as_ref()?;
        if list.rows.is_empty() {
            return None;
        }
        self.attachments.get(list.selected).map(String::as_str)
    }
}

/// Dispatch one submit to the matching record store and produce the success
/// notice shown in the footer.
fn run_action(db: &Database, action: SubmitAction, raw: &[&str]) -> Result<String, StoreError> {
    match action {
        SubmitAction::AddAssignment => {
            db::lms::add_assignment(db, raw[0], raw[1], raw[2], raw[3])?;
            Ok("Assignment added!".to_string())
        }
        SubmitAction::AddBook => {
            db::library::add_book(db, raw[0], raw[1], raw[2], raw[3])?;
            Ok("Book added successfully.".to_string())
        }
        SubmitAction::AddBus => {
            db::transport::add_bus(db, raw[0], raw[1])?;
            Ok("Bus added successfully.".to_string())
        }
        SubmitAction::AddRoute => {
            db::transport::add_route(db, raw[0], raw[1])?;
            Ok("Route added successfully.".to_string())
        }
        SubmitAction::AddHostel => {
            db::hostel::add_hostel(db, raw[0])?;
            Ok("Hostel added!".to_string())
        }
        SubmitAction::AddRoom => {
            db::hostel::add_room(db, raw[0], raw[1])?;
            Ok("Room added!".to_string())
        }
        SubmitAction::AddItem => {
            db::inventory::add_item(db, raw[0], raw[1], raw[2])?;
            Ok("Item added successfully.".to_string())
        }
        SubmitAction::AddStaff => {
            db::hr::add_staff(db, raw[0], raw[1], raw[2])?;
            Ok("Staff member added!".to_string())
        }
        SubmitAction::MarkAttendance => {
            db::attendance::mark(db, raw[0])?;
            Ok(format!("{}'s attendance marked.", raw[0].trim()))
        }
    }
}

/// Load the display lines backing one section's list.
fn load_rows(db: &Database, action: SubmitAction) -> Result<Vec<String>> {
    let rows = match action {
        SubmitAction::AddAssignment => db::lms::list_assignments(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::AddBook => db::library::list_books(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::AddBus => db::transport::list_buses(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::AddRoute => db::transport::list_routes(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::AddHostel => Vec::new(),
        SubmitAction::AddRoom => db::hostel::list_rooms(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::AddItem => db::inventory::list_items(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::AddStaff => db::hr::list_staff(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
        SubmitAction::MarkAttendance => db::attendance::list_today(db)?
            .iter()
            .map(|row| row.display_line())
            .collect(),
    };
    Ok(rows)
}
