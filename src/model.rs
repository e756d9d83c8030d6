use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Teaching days. Sunday is deliberately absent; the timetable never
/// schedules it and `Day::from_weekday` returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat => Some(Day::Saturday),
            Weekday::Sun => None,
        }
    }

    pub fn from_wire(raw: &str) -> Option<Day> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "monday" => Some(Day::Monday),
            "tuesday" => Some(Day::Tuesday),
            "wednesday" => Some(Day::Wednesday),
            "thursday" => Some(Day::Thursday),
            "friday" => Some(Day::Friday),
            "saturday" => Some(Day::Saturday),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: u32,
    pub day: Day,
    pub time: String,
    pub subject: String,
    pub room: String,
    pub faculty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upcoming_topic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    Pending,
    InProgress,
    Completed,
}

impl AssignmentStatus {
    pub fn from_wire(raw: &str) -> Option<AssignmentStatus> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(AssignmentStatus::Pending),
            "in-progress" => Some(AssignmentStatus::InProgress),
            "completed" => Some(AssignmentStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Lab,
    Record,
    Project,
    Other,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub priority: Priority,
    #[serde(rename = "type")]
    pub kind: AssignmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Festival,
    Workshop,
    Seminar,
    Competition,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
    pub attendees: u32,
    pub max_attendees: u32,
    pub rsvp_required: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tally {
    pub present: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTally {
    pub month: String,
    pub present: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSubject {
    pub code: String,
    pub subject: String,
    pub overall: Tally,
    pub monthly: Vec<MonthlyTally>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Marks {
    pub obtained: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: u32,
    pub subject: String,
    pub exam: String,
    pub marks: Marks,
    pub grade: String,
    pub gpa: f64,
    pub teacher_remarks: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanteenCategory {
    Main,
    Snack,
    Beverage,
}

impl CanteenCategory {
    pub fn from_wire(raw: &str) -> Option<CanteenCategory> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" => Some(CanteenCategory::Main),
            "snack" => Some(CanteenCategory::Snack),
            "beverage" => Some(CanteenCategory::Beverage),
            _ => None,
        }
    }
}

/// Price is whole rupees; the menu has no fractional pricing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanteenItem {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub available: bool,
    /// Legacy menu rows carry no category; they are treated as `main`
    /// when filtering.
    pub category: Option<CanteenCategory>,
    pub special: bool,
}

impl CanteenItem {
    pub fn effective_category(&self) -> CanteenCategory {
        self.category.unwrap_or(CanteenCategory::Main)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    CollegeWide,
    Branch,
    Year,
    Club,
}

impl GroupKind {
    pub fn from_wire(raw: &str) -> Option<GroupKind> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "college-wide" => Some(GroupKind::CollegeWide),
            "branch" => Some(GroupKind::Branch),
            "year" => Some(GroupKind::Year),
            "club" => Some(GroupKind::Club),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub members: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Notes,
    Manual,
    Guide,
}

impl MaterialKind {
    pub fn from_wire(raw: &str) -> Option<MaterialKind> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "notes" => Some(MaterialKind::Notes),
            "manual" => Some(MaterialKind::Manual),
            "guide" => Some(MaterialKind::Guide),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterial {
    pub id: u32,
    pub title: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    pub uploaded_by: String,
    pub size: String,
    pub downloads: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSlot {
    pub id: u32,
    pub subject: String,
    pub code: String,
    pub date: NaiveDate,
    pub time: String,
    pub venue: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityKind {
    Internship,
    FullTime,
}

impl OpportunityKind {
    pub fn from_wire(raw: &str) -> Option<OpportunityKind> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "internship" => Some(OpportunityKind::Internship),
            "full-time" => Some(OpportunityKind::FullTime),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementOpportunity {
    pub id: u32,
    pub company: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub package: String,
    pub deadline: NaiveDate,
    pub registration_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub contact_number: String,
    pub status: LeaveStatus,
    pub applied_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    Mentor,
    Student,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorMessage {
    pub id: String,
    pub sender: MessageSender,
    pub subject: String,
    pub body: String,
    pub sent_on: NaiveDate,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    pub name: String,
    pub designation: String,
    pub email: String,
    pub phone: String,
    pub availability: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    pub roll_number: String,
    pub class_info: String,
    pub branch: String,
    pub year: u32,
}
