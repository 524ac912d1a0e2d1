/*
[INPUT]:  Classroom/assignment listings and selection events
[OUTPUT]: Cascading selector state for the import wizard
[POS]:    Import wizard state machine (tabs, selections, fetch epochs)
[UPDATE]: When tabs change or the upload flow gets wired to the backend
*/

use std::fmt;

use rosterdesk_adapter::{Assignment, Classroom, ConsoleClient, ConsoleError};
use tracing::{debug, warn};

use crate::notify::{Notification, NotificationSlot, failure_text};

/// Wizard tabs: student rosters and score sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTab {
    Students,
    Scores,
}

impl ImportTab {
    pub fn title(self) -> &'static str {
        match self {
            ImportTab::Students => "Import Students",
            ImportTab::Scores => "Import Scores",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ImportTab::Students => ImportTab::Scores,
            ImportTab::Scores => ImportTab::Students,
        }
    }
}

/// Handle for one assignment fetch. Responses are only applied while their
/// token is still the latest issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub classroom_id: i64,
    pub token: u64,
}

/// Option rendered in the classroom selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomChoice {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for ClassroomChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Option rendered in the assignment selector; the sentinel always leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentChoice {
    None,
    Item { id: i64, name: String },
}

impl AssignmentChoice {
    pub fn id(&self) -> Option<i64> {
        match self {
            AssignmentChoice::None => None,
            AssignmentChoice::Item { id, .. } => Some(*id),
        }
    }
}

impl fmt::Display for AssignmentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentChoice::None => f.write_str("None"),
            AssignmentChoice::Item { name, .. } => f.write_str(name),
        }
    }
}

/// Two-tab import wizard with a cascading classroom -> assignment selection.
#[derive(Debug)]
pub struct ImportWizard {
    pub tab: ImportTab,
    classrooms: Vec<Classroom>,
    assignments: Vec<Assignment>,
    selected_classroom: Option<i64>,
    selected_assignment: Option<i64>,
    fetch_token: u64,
    pub notifications: NotificationSlot,
}

impl Default for ImportWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportWizard {
    pub fn new() -> Self {
        Self {
            tab: ImportTab::Students,
            classrooms: Vec::new(),
            assignments: Vec::new(),
            selected_classroom: None,
            selected_assignment: None,
            fetch_token: 0,
            notifications: NotificationSlot::default(),
        }
    }

    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn selected_classroom(&self) -> Option<i64> {
        self.selected_classroom
    }

    pub fn selected_assignment(&self) -> Option<i64> {
        self.selected_assignment
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggled();
    }

    /// Fetch the classrooms where the operator teaches. Loaded once on entry,
    /// re-fetchable on demand.
    pub async fn load_classrooms(&mut self, client: &ConsoleClient, user_id: i64) {
        match client.classrooms_teaching(user_id).await {
            Ok(classrooms) => {
                debug!(count = classrooms.len(), "classrooms loaded");
                self.classrooms = classrooms;
            }
            Err(err) => {
                warn!(error = %err, "classroom fetch failed");
                self.notifications.set(Notification::error(failure_text(&err)));
            }
        }
    }

    /// Change the classroom selection.
    ///
    /// The assignment selection and option list are cleared immediately; the
    /// returned ticket (if any) must be passed back through
    /// [`apply_assignments`](Self::apply_assignments) with the fetch result.
    pub fn select_classroom(&mut self, classroom_id: Option<i64>) -> Option<FetchTicket> {
        self.selected_classroom = classroom_id;
        self.selected_assignment = None;
        self.assignments.clear();

        let classroom_id = classroom_id?;
        self.fetch_token += 1;
        Some(FetchTicket {
            classroom_id,
            token: self.fetch_token,
        })
    }

    /// Apply an assignment fetch outcome. Responses carrying a superseded
    /// token are dropped, so a slow fetch can never show assignments for a
    /// previously selected classroom.
    pub fn apply_assignments(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Assignment>, ConsoleError>,
    ) {
        if ticket.token != self.fetch_token {
            debug!(
                stale = ticket.token,
                current = self.fetch_token,
                "dropping stale assignment response"
            );
            return;
        }
        match result {
            Ok(assignments) => self.assignments = assignments,
            Err(err) => {
                warn!(classroom_id = ticket.classroom_id, error = %err, "assignment fetch failed");
                self.notifications.set(Notification::error(failure_text(&err)));
            }
        }
    }

    /// Convenience wrapper: select, fetch, apply. The runtime awaits this
    /// inline; tests can drive the ticket path directly to exercise staleness.
    pub async fn choose_classroom(&mut self, client: &ConsoleClient, classroom_id: Option<i64>) {
        if let Some(ticket) = self.select_classroom(classroom_id) {
            let result = client.assignments(ticket.classroom_id).await;
            self.apply_assignments(ticket, result);
        }
    }

    pub fn select_assignment(&mut self, assignment_id: Option<i64>) {
        self.selected_assignment = assignment_id;
    }

    /// Classroom selector options.
    pub fn classroom_choices(&self) -> Vec<ClassroomChoice> {
        self.classrooms
            .iter()
            .map(|classroom| ClassroomChoice {
                id: classroom.id,
                name: classroom.name.clone(),
            })
            .collect()
    }

    /// Assignment selector options, sentinel first.
    pub fn assignment_choices(&self) -> Vec<AssignmentChoice> {
        let mut choices = vec![AssignmentChoice::None];
        choices.extend(self.assignments.iter().map(|assignment| {
            AssignmentChoice::Item {
                id: assignment.id,
                name: assignment.name.clone(),
            }
        }));
        choices
    }

    /// Whether the current tab has everything an import needs.
    pub fn import_blocker(&self) -> Option<&'static str> {
        if self.selected_classroom.is_none() {
            return Some("Error: Select a classroom first");
        }
        if self.tab == ImportTab::Scores && self.selected_assignment.is_none() {
            return Some("Error: Select an assignment first");
        }
        None
    }

    /// Import action. Validates the selection; the upload itself is not wired
    /// to the backend yet.
    pub fn request_import(&mut self) {
        match self.import_blocker() {
            Some(blocker) => self.notifications.set(Notification::error(blocker)),
            None => self.notifications.set(Notification::info(
                "Upload is not wired to the backend yet",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(id: i64, name: &str) -> Assignment {
        Assignment {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn classroom_change_resets_assignment_selection() {
        let mut wizard = ImportWizard::new();
        let ticket = wizard.select_classroom(Some(11)).unwrap();
        wizard.apply_assignments(ticket, Ok(vec![assignment(101, "Lab 1")]));
        wizard.select_assignment(Some(101));

        wizard.select_classroom(Some(12));
        assert_eq!(wizard.selected_assignment(), None);
        assert_eq!(wizard.assignment_choices(), vec![AssignmentChoice::None]);
    }

    #[test]
    fn empty_classroom_yields_only_the_sentinel() {
        let mut wizard = ImportWizard::new();
        let ticket = wizard.select_classroom(Some(11)).unwrap();
        wizard.apply_assignments(ticket, Ok(vec![]));

        assert_eq!(wizard.assignment_choices(), vec![AssignmentChoice::None]);
    }

    #[test]
    fn stale_assignment_response_is_dropped() {
        let mut wizard = ImportWizard::new();
        let first = wizard.select_classroom(Some(11)).unwrap();
        let second = wizard.select_classroom(Some(12)).unwrap();

        // The older fetch resolves last; it must not win.
        wizard.apply_assignments(second, Ok(vec![assignment(201, "Essay")]));
        wizard.apply_assignments(first, Ok(vec![assignment(101, "Lab 1")]));

        let choices = wizard.assignment_choices();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[1].id(), Some(201));
    }

    #[test]
    fn deselecting_classroom_issues_no_ticket() {
        let mut wizard = ImportWizard::new();
        assert!(wizard.select_classroom(None).is_none());
    }

    #[test]
    fn import_requires_selection_per_tab() {
        let mut wizard = ImportWizard::new();
        assert_eq!(
            wizard.import_blocker(),
            Some("Error: Select a classroom first")
        );

        wizard.select_classroom(Some(11));
        assert_eq!(wizard.import_blocker(), None);

        wizard.tab = ImportTab::Scores;
        assert_eq!(
            wizard.import_blocker(),
            Some("Error: Select an assignment first")
        );

        wizard.select_assignment(Some(101));
        assert_eq!(wizard.import_blocker(), None);
    }
}
