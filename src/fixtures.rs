use chrono::NaiveDate;

use crate::model::{
    AssignmentKind, AssignmentStatus, AttendanceSubject, Assignment, CanteenCategory, CanteenItem,
    ClassSession, Day, Event, EventKind, ExamResult, ExamSlot, Group, GroupKind, LeaveApplication,
    LeaveStatus, Marks, MentorMessage, MentorProfile, MessageSender, MonthlyTally, MaterialKind,
    OpportunityKind, PlacementOpportunity, Priority, StudentProfile, StudyMaterial, Tally,
};

/// The static dataset standing in for a backend. Loaded once at startup
/// and never mutated; everything a view shows is re-derived from these
/// collections plus session state.
pub struct Fixtures {
    pub student: StudentProfile,
    pub class_schedule: Vec<ClassSession>,
    pub assignments: Vec<Assignment>,
    pub events: Vec<Event>,
    pub attendance: Vec<AttendanceSubject>,
    pub exam_results: Vec<ExamResult>,
    pub exam_schedule: Vec<ExamSlot>,
    pub canteen_menu: Vec<CanteenItem>,
    pub canteen_menu_date: NaiveDate,
    pub groups: Vec<Group>,
    /// Groups the student is already a member of when the session starts.
    pub joined_group_ids: Vec<u32>,
    pub materials: Vec<StudyMaterial>,
    pub placements: Vec<PlacementOpportunity>,
    pub leave_applications: Vec<LeaveApplication>,
    pub mentor: MentorProfile,
    pub mentor_messages: Vec<MentorMessage>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All fixture dates are hand-written valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

impl Fixtures {
    pub fn demo() -> Fixtures {
        Fixtures {
            student: StudentProfile {
                name: "Arjun Mehta".to_string(),
                roll_number: "22CS114".to_string(),
                class_info: "CSE - Year 2, Section A".to_string(),
                branch: "Computer Science".to_string(),
                year: 2,
            },
            class_schedule: demo_class_schedule(),
            assignments: demo_assignments(),
            events: demo_events(),
            attendance: demo_attendance(),
            exam_results: demo_exam_results(),
            exam_schedule: demo_exam_schedule(),
            canteen_menu: demo_canteen_menu(),
            canteen_menu_date: date(2025, 1, 20),
            groups: demo_groups(),
            joined_group_ids: vec![1, 2, 4, 5],
            materials: demo_materials(),
            placements: demo_placements(),
            leave_applications: demo_leave_applications(),
            mentor: MentorProfile {
                name: "Dr. Kavitha Rao".to_string(),
                designation: "Associate Professor, CSE".to_string(),
                email: "kavitha.rao@college.edu".to_string(),
                phone: "+91 98450 12345".to_string(),
                availability: "Mon-Fri, 3:00 PM - 5:00 PM".to_string(),
            },
            mentor_messages: demo_mentor_messages(),
        }
    }

    pub fn assignment(&self, id: u32) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn event(&self, id: u32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn group(&self, id: u32) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn canteen_item(&self, id: u32) -> Option<&CanteenItem> {
        self.canteen_menu.iter().find(|i| i.id == id)
    }

    pub fn placement(&self, id: u32) -> Option<&PlacementOpportunity> {
        self.placements.iter().find(|p| p.id == id)
    }
}

fn demo_class_schedule() -> Vec<ClassSession> {
    let session = |id, day, time: &str, subject: &str, room: &str, faculty: &str, topic: Option<&str>| {
        ClassSession {
            id,
            day,
            time: time.to_string(),
            subject: subject.to_string(),
            room: room.to_string(),
            faculty: faculty.to_string(),
            upcoming_topic: topic.map(str::to_string),
        }
    };
    vec![
        session(1, Day::Monday, "9:00 AM", "Mathematics III", "LH-201", "Dr. S. Iyer", Some("Laplace Transforms")),
        session(2, Day::Monday, "11:00 AM", "Data Structures", "LH-105", "Prof. R. Nair", Some("AVL Rotations")),
        session(3, Day::Monday, "2:00 PM", "Physics Lab", "PL-2", "Dr. A. Menon", None),
        session(4, Day::Tuesday, "9:00 AM", "Digital Logic Design", "LH-301", "Prof. V. Das", Some("Sequential Circuits")),
        session(5, Day::Tuesday, "11:00 AM", "Operating Systems", "LH-105", "Dr. P. Shah", None),
        session(6, Day::Wednesday, "9:00 AM", "Data Structures", "LH-105", "Prof. R. Nair", None),
        session(7, Day::Wednesday, "2:00 PM", "DS Lab", "CL-1", "Prof. R. Nair", Some("Hash Table Implementation")),
        session(8, Day::Thursday, "9:00 AM", "Mathematics III", "LH-201", "Dr. S. Iyer", None),
        session(9, Day::Thursday, "11:00 AM", "Digital Logic Design", "LH-301", "Prof. V. Das", None),
        session(10, Day::Friday, "9:00 AM", "Operating Systems", "LH-105", "Dr. P. Shah", Some("CPU Scheduling")),
        session(11, Day::Friday, "11:00 AM", "Physics", "LH-202", "Dr. A. Menon", None),
        session(12, Day::Saturday, "10:00 AM", "Soft Skills", "SH-1", "Ms. T. George", None),
    ]
}

fn demo_assignments() -> Vec<Assignment> {
    let assignment = |id, title: &str, subject: &str, description: &str, due, status, priority, kind| {
        Assignment {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
            due_date: due,
            status,
            priority,
            kind,
        }
    };
    vec![
        assignment(
            1,
            "Data Structures Lab Report",
            "Data Structures",
            "Implement and benchmark three collision-resolution strategies.",
            date(2025, 1, 21),
            AssignmentStatus::Pending,
            Priority::High,
            AssignmentKind::Lab,
        ),
        assignment(
            2,
            "Problem Set 4",
            "Mathematics III",
            "Fourier series exercises 4.1 through 4.9.",
            date(2025, 1, 24),
            AssignmentStatus::InProgress,
            Priority::Medium,
            AssignmentKind::Other,
        ),
        assignment(
            3,
            "OS Project Milestone 1",
            "Operating Systems",
            "Design document for the user-space scheduler simulator.",
            date(2025, 2, 2),
            AssignmentStatus::Pending,
            Priority::High,
            AssignmentKind::Project,
        ),
        assignment(
            4,
            "Physics Record Submission",
            "Physics",
            "Completed record for experiments 1-5, signed by the lab in-charge.",
            date(2025, 1, 15),
            AssignmentStatus::Pending,
            Priority::Medium,
            AssignmentKind::Record,
        ),
        assignment(
            5,
            "Digital Logic Worksheet",
            "Digital Logic Design",
            "K-map minimization worksheet.",
            date(2025, 1, 10),
            AssignmentStatus::Completed,
            Priority::Low,
            AssignmentKind::Other,
        ),
        assignment(
            6,
            "DBMS ER Diagram",
            "Database Systems",
            "ER diagram for the library management case study.",
            date(2025, 1, 28),
            AssignmentStatus::Pending,
            Priority::Low,
            AssignmentKind::Other,
        ),
    ]
}

fn demo_events() -> Vec<Event> {
    let event = |id, title: &str, description: &str, kind, d, time: &str, venue: &str, attendees, max, rsvp| {
        Event {
            id,
            title: title.to_string(),
            description: description.to_string(),
            kind,
            date: d,
            time: time.to_string(),
            venue: venue.to_string(),
            attendees,
            max_attendees: max,
            rsvp_required: rsvp,
        }
    };
    vec![
        event(1, "TechFest 2025", "Annual inter-college technical festival with 30+ events.", EventKind::Festival, date(2025, 2, 10), "9:00 AM", "Main Grounds", 420, 500, true),
        event(2, "Hands-on AI Workshop", "Build and train a small image classifier from scratch.", EventKind::Workshop, date(2025, 1, 22), "10:00 AM", "CL-3", 60, 60, true),
        event(3, "Entrepreneurship Seminar", "Alumni founders on going from campus project to company.", EventKind::Seminar, date(2025, 1, 25), "2:00 PM", "Auditorium", 149, 150, true),
        event(4, "Winter Code Sprint", "24-hour competitive programming sprint.", EventKind::Competition, date(2025, 1, 5), "8:00 AM", "CL-1", 120, 200, true),
        event(5, "Robotics Demo Day", "Open demos from the robotics club's winter projects.", EventKind::Workshop, date(2025, 1, 30), "11:00 AM", "Mech Block Foyer", 34, 80, false),
        event(6, "Photography Walk", "Guided golden-hour walk around the old campus.", EventKind::Seminar, date(2025, 1, 12), "4:30 PM", "Clock Tower", 25, 40, false),
    ]
}

fn demo_attendance() -> Vec<AttendanceSubject> {
    let subject = |code: &str, name: &str, present, total, monthly: Vec<(&str, u32, u32)>| {
        AttendanceSubject {
            code: code.to_string(),
            subject: name.to_string(),
            overall: Tally { present, total },
            monthly: monthly
                .into_iter()
                .map(|(month, present, total)| MonthlyTally {
                    month: month.to_string(),
                    present,
                    total,
                })
                .collect(),
        }
    };
    vec![
        subject("MA201", "Mathematics III", 38, 45, vec![("November", 20, 24), ("December", 18, 21)]),
        subject("CS202", "Data Structures", 40, 42, vec![("November", 21, 22), ("December", 19, 20)]),
        subject("CS203", "Digital Logic Design", 28, 40, vec![("November", 15, 20), ("December", 13, 20)]),
        subject("PH204", "Physics", 33, 38, vec![("November", 17, 19), ("December", 16, 19)]),
        subject("CS205", "Operating Systems", 30, 36, vec![("November", 16, 18), ("December", 14, 18)]),
    ]
}

fn demo_exam_results() -> Vec<ExamResult> {
    let result = |id, subject: &str, exam: &str, obtained, total, grade: &str, gpa, remarks: &str| {
        ExamResult {
            id,
            subject: subject.to_string(),
            exam: exam.to_string(),
            marks: Marks { obtained, total },
            grade: grade.to_string(),
            gpa,
            teacher_remarks: remarks.to_string(),
        }
    };
    vec![
        result(1, "Mathematics III", "Mid-Term I", 87, 100, "A", 9.0, "Strong on transforms; revise series convergence."),
        result(2, "Data Structures", "Mid-Term I", 92, 100, "A+", 9.5, "Excellent. Attempt the optional balanced-tree problems."),
        result(3, "Digital Logic Design", "Mid-Term I", 71, 100, "B+", 8.0, "Careless errors in K-map grouping; practice timed sets."),
        result(4, "Physics", "Mid-Term I", 78, 100, "A", 8.5, "Good conceptual answers; show intermediate steps."),
        result(5, "Operating Systems", "Mid-Term I", 66, 100, "B", 7.5, "Scheduling numericals need work; meet during office hours."),
    ]
}

fn demo_exam_schedule() -> Vec<ExamSlot> {
    let slot = |id, subject: &str, code: &str, d, time: &str, venue: &str| ExamSlot {
        id,
        subject: subject.to_string(),
        code: code.to_string(),
        date: d,
        time: time.to_string(),
        venue: venue.to_string(),
    };
    vec![
        slot(1, "Programming Quiz", "CS200", date(2025, 1, 8), "10:00 AM", "CL-1"),
        slot(2, "Mathematics III", "MA201", date(2025, 2, 17), "9:30 AM", "Exam Hall A"),
        slot(3, "Data Structures", "CS202", date(2025, 2, 19), "9:30 AM", "Exam Hall A"),
        slot(4, "Digital Logic Design", "CS203", date(2025, 2, 21), "9:30 AM", "Exam Hall B"),
        slot(5, "Physics", "PH204", date(2025, 2, 24), "9:30 AM", "Exam Hall A"),
        slot(6, "Operating Systems", "CS205", date(2025, 2, 26), "9:30 AM", "Exam Hall B"),
    ]
}

fn demo_canteen_menu() -> Vec<CanteenItem> {
    let item = |id, name: &str, price, available, category, special| CanteenItem {
        id,
        name: name.to_string(),
        price,
        available,
        category,
        special,
    };
    // Specials first; the menu view keeps this order.
    vec![
        item(1, "Paneer Butter Masala Thali", 85, true, Some(CanteenCategory::Main), true),
        item(2, "Chole Bhature", 60, true, Some(CanteenCategory::Main), true),
        item(3, "Veg Fried Rice", 55, true, Some(CanteenCategory::Main), false),
        item(4, "Masala Dosa", 45, true, Some(CanteenCategory::Main), false),
        item(5, "Samosa", 15, true, Some(CanteenCategory::Snack), false),
        item(6, "Veg Sandwich", 35, false, Some(CanteenCategory::Snack), false),
        item(7, "Masala Chai", 12, true, Some(CanteenCategory::Beverage), false),
        item(8, "Cold Coffee", 40, true, Some(CanteenCategory::Beverage), false),
        item(9, "Curd Rice", 40, true, None, false),
    ]
}

fn demo_groups() -> Vec<Group> {
    let group = |id, name: &str, description: &str, kind, members, branch: Option<&str>, year| Group {
        id,
        name: name.to_string(),
        description: description.to_string(),
        kind,
        members,
        branch: branch.map(str::to_string),
        year,
    };
    vec![
        group(1, "Campus Announcements", "Official college-wide notices and circulars.", GroupKind::CollegeWide, 3200, None, None),
        group(2, "CSE Branch Hub", "Everything CSE: schedules, notes, placement chatter.", GroupKind::Branch, 480, Some("Computer Science"), None),
        group(3, "Mechanical Branch Hub", "Mechanical department discussions and notices.", GroupKind::Branch, 350, Some("Mechanical"), None),
        group(4, "CSE Year 2", "Second-year CSE batch group.", GroupKind::Year, 160, Some("Computer Science"), Some(2)),
        group(5, "Coding Club", "Weekly contests, editorials, and interview prep.", GroupKind::Club, 240, None, None),
        group(6, "Drama Society", "Auditions, rehearsals, and production announcements.", GroupKind::Club, 180, None, None),
        group(7, "Photography Club", "Photo walks, gear talk, and monthly themes.", GroupKind::Club, 150, None, None),
    ]
}

fn demo_materials() -> Vec<StudyMaterial> {
    let material = |id, title: &str, subject: &str, kind, uploaded_by: &str, size: &str, downloads| {
        StudyMaterial {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            kind,
            uploaded_by: uploaded_by.to_string(),
            size: size.to_string(),
            downloads,
        }
    };
    vec![
        material(1, "Integral Transforms Notes", "Mathematics", MaterialKind::Notes, "Dr. S. Iyer", "2.4 MB", 312),
        material(2, "Linked Lists Practice Problems", "Data Structures", MaterialKind::Notes, "Prof. R. Nair", "1.1 MB", 487),
        material(3, "Physics Lab Manual", "Physics", MaterialKind::Manual, "Dr. A. Menon", "5.8 MB", 201),
        material(4, "Karnaugh Map Simplification Guide", "Digital Logic Design", MaterialKind::Guide, "Prof. V. Das", "900 KB", 154),
        material(5, "CPU Scheduling Notes", "Operating Systems", MaterialKind::Notes, "Dr. P. Shah", "1.7 MB", 265),
        material(6, "C Programming Lab Manual", "Programming", MaterialKind::Manual, "Prof. R. Nair", "3.2 MB", 540),
    ]
}

fn demo_placements() -> Vec<PlacementOpportunity> {
    let opportunity = |id, company: &str, role: &str, kind, package: &str, deadline, link: &str| {
        PlacementOpportunity {
            id,
            company: company.to_string(),
            role: role.to_string(),
            kind,
            package: package.to_string(),
            deadline,
            registration_link: link.to_string(),
        }
    };
    vec![
        opportunity(1, "TCS", "Software Engineer Trainee", OpportunityKind::FullTime, "3.6 LPA", date(2025, 2, 15), "https://careers.tcs.example/register"),
        opportunity(2, "Zoho", "Summer Intern - Backend", OpportunityKind::Internship, "25k/month", date(2025, 2, 1), "https://careers.zoho.example/apply"),
        opportunity(3, "Infosys", "Systems Engineer", OpportunityKind::FullTime, "4.0 LPA", date(2025, 2, 20), "https://careers.infosys.example/register"),
        opportunity(4, "Crisp Labs", "Product Intern", OpportunityKind::Internship, "20k/month", date(2025, 2, 8), "https://crisplabs.example/careers"),
    ]
}

fn demo_leave_applications() -> Vec<LeaveApplication> {
    vec![
        LeaveApplication {
            id: "LV-2024-019".to_string(),
            leave_type: "Personal Leave".to_string(),
            from_date: date(2024, 12, 20),
            to_date: date(2024, 12, 21),
            reason: "Family function out of town.".to_string(),
            contact_number: "+91 98200 44556".to_string(),
            status: LeaveStatus::Approved,
            applied_on: date(2024, 12, 16),
        },
        LeaveApplication {
            id: "LV-2024-014".to_string(),
            leave_type: "Sick Leave".to_string(),
            from_date: date(2024, 12, 9),
            to_date: date(2024, 12, 10),
            reason: "Fever; doctor's note attached at the office.".to_string(),
            contact_number: "+91 98200 44556".to_string(),
            status: LeaveStatus::Approved,
            applied_on: date(2024, 12, 8),
        },
    ]
}

fn demo_mentor_messages() -> Vec<MentorMessage> {
    let message = |id: &str, subject: &str, body: &str, sent_on, read| MentorMessage {
        id: id.to_string(),
        sender: MessageSender::Mentor,
        subject: subject.to_string(),
        body: body.to_string(),
        sent_on,
        read,
    };
    vec![
        message(
            "MSG-104",
            "Mid-term performance review",
            "Let's go over your OS mid-term paper this Thursday at 3 PM.",
            date(2025, 1, 17),
            false,
        ),
        message(
            "MSG-103",
            "Attendance shortfall warning",
            "Digital Logic attendance is below 75%. Please plan the remaining classes carefully.",
            date(2025, 1, 14),
            false,
        ),
        message(
            "MSG-099",
            "Project team registration",
            "Your mini-project team registration is confirmed.",
            date(2025, 1, 6),
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_tallies_respect_model_invariants() {
        let fixtures = Fixtures::demo();
        for subject in &fixtures.attendance {
            assert!(subject.overall.present <= subject.overall.total);
            for month in &subject.monthly {
                assert!(month.present <= month.total);
            }
        }
        for result in &fixtures.exam_results {
            assert!(result.marks.obtained <= result.marks.total);
        }
    }

    #[test]
    fn demo_lookups_resolve_seeded_ids() {
        let fixtures = Fixtures::demo();
        assert!(fixtures.event(2).is_some());
        assert!(fixtures.canteen_item(9).is_some());
        assert!(fixtures.group(4).is_some());
        assert!(fixtures.placement(1).is_some());
        assert!(fixtures.assignment(99).is_none());
    }
}
