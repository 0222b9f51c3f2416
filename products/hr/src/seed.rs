//! Fixture dataset loaded into the store at startup. IDs are stable strings
//! so client bookmarks survive a reload even though the data itself does not.

use chrono::{DateTime, TimeZone, Utc};
use entity::{Announcement, Employee, Resource};

pub fn employees() -> Vec<Employee> {
    vec![
        employee(Seed {
            id: "1",
            name: "Margaret Chen",
            job_title: "Chief Executive Officer",
            department: "Executive",
            email: "margaret.chen@portal.test",
            phone: "555-0101",
            reports_to: &[],
            direct_reports: &["2", "3", "4"],
            hired: date(2015, 2, 9),
            hired_by: "Board of Directors",
        }),
        employee(Seed {
            id: "2",
            name: "Tomás Herrera",
            job_title: "VP of Engineering",
            department: "Engineering",
            email: "tomas.herrera@portal.test",
            phone: "555-0102",
            reports_to: &["1"],
            direct_reports: &["5", "6"],
            hired: date(2016, 6, 20),
            hired_by: "Margaret Chen",
        }),
        employee(Seed {
            id: "3",
            name: "Priya Natarajan",
            job_title: "Head of People Operations",
            department: "People Operations",
            email: "priya.natarajan@portal.test",
            phone: "555-0103",
            reports_to: &["1"],
            direct_reports: &["7"],
            hired: date(2017, 1, 16),
            hired_by: "Margaret Chen",
        }),
        employee(Seed {
            id: "4",
            name: "Daniel Okafor",
            job_title: "Finance Director",
            department: "Finance",
            email: "daniel.okafor@portal.test",
            phone: "555-0104",
            reports_to: &["1"],
            direct_reports: &["8"],
            hired: date(2018, 9, 3),
            hired_by: "Margaret Chen",
        }),
        employee(Seed {
            id: "5",
            name: "Sofia Lindqvist",
            job_title: "Senior Backend Engineer",
            department: "Engineering",
            email: "sofia.lindqvist@portal.test",
            phone: "555-0105",
            reports_to: &["2"],
            direct_reports: &[],
            hired: date(2019, 4, 1),
            hired_by: "Tomás Herrera",
        }),
        employee(Seed {
            id: "6",
            name: "Jae-won Park",
            job_title: "Frontend Engineer",
            department: "Engineering",
            email: "jaewon.park@portal.test",
            phone: "555-0106",
            reports_to: &["2"],
            direct_reports: &[],
            hired: date(2021, 11, 8),
            hired_by: "Tomás Herrera",
        }),
        employee(Seed {
            id: "7",
            name: "Amele Diallo",
            job_title: "HR Generalist",
            department: "People Operations",
            email: "amele.diallo@portal.test",
            phone: "555-0107",
            reports_to: &["3"],
            direct_reports: &[],
            hired: date(2020, 7, 13),
            hired_by: "Priya Natarajan",
        }),
        employee(Seed {
            id: "8",
            name: "Lucas Moreau",
            job_title: "Payroll Specialist",
            department: "Finance",
            email: "lucas.moreau@portal.test",
            phone: "555-0108",
            reports_to: &["4"],
            direct_reports: &[],
            hired: date(2022, 3, 28),
            hired_by: "Daniel Okafor",
        }),
    ]
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".into(),
            title: "Office closed for annual maintenance".into(),
            body: "The main office will be closed on the first Friday of next month. \
                   Badge access is suspended for the day."
                .into(),
            date: date(2026, 7, 2),
            author: "Facilities".into(),
            image: None,
        },
        Announcement {
            id: "2".into(),
            title: "New parental leave policy".into(),
            body: "Starting next quarter, parental leave extends to 20 weeks for all \
                   employees. Details are in the resource hub."
                .into(),
            date: date(2026, 8, 11),
            author: "Priya Natarajan".into(),
            image: Some("https://cdn.portal.test/announcements/leave.jpg".into()),
        },
        Announcement {
            id: "3".into(),
            title: "Quarterly all-hands".into(),
            body: "Join us in the auditorium or on the stream. Questions can be \
                   submitted in advance through the FAQ assistant."
                .into(),
            date: date(2026, 8, 24),
            author: "Margaret Chen".into(),
            image: None,
        },
        Announcement {
            id: "4".into(),
            title: "Welcome our summer interns".into(),
            body: "Twelve interns join Engineering and Marketing this summer. Say hi!".into(),
            date: date(2026, 6, 15),
            author: "People Operations".into(),
            image: None,
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    vec![
        resource("1", "Health insurance overview", Some("Benefits"), "heart"),
        resource("2", "Retirement plan", Some("Benefits"), "piggy-bank"),
        resource("3", "Code of conduct", Some("Company Policies"), "scale"),
        resource("4", "Remote work policy", Some("Company Policies"), "house"),
        resource("5", "Expense reporting guide", Some("Finance"), "receipt"),
        resource("6", "Brand assets", None, "palette"),
        Resource {
            id: "7".into(),
            title: "Employee Rules".into(),
            description: Some("Workplace rules and per-employee permissions.".into()),
            link: None,
            category: Some("Company Policies".into()),
            icon: "shield".into(),
            body: Some("# Employee Rules\n\nRules are maintained by People Operations.".into()),
            attachment: None,
            // The client renders the permission toggle panel on this entry
            // instead of the plain body.
            permission_panel: true,
        },
        resource("8", "IT helpdesk", None, "wrench"),
    ]
}

struct Seed {
    id: &'static str,
    name: &'static str,
    job_title: &'static str,
    department: &'static str,
    email: &'static str,
    phone: &'static str,
    reports_to: &'static [&'static str],
    direct_reports: &'static [&'static str],
    hired: DateTime<Utc>,
    hired_by: &'static str,
}

fn employee(seed: Seed) -> Employee {
    Employee {
        id: seed.id.into(),
        name: seed.name.into(),
        job_title: seed.job_title.into(),
        department: seed.department.into(),
        email: seed.email.into(),
        phone: seed.phone.into(),
        mobile: None,
        fax: None,
        office_location: Some("HQ".into()),
        id_number: None,
        avatar: None,
        reports_to: seed.reports_to.iter().map(|s| s.to_string()).collect(),
        direct_reports: seed.direct_reports.iter().map(|s| s.to_string()).collect(),
        hiring_date: seed.hired,
        hired_by: seed.hired_by.into(),
        attachments: vec![],
        job_description: String::new(),
    }
}

fn resource(id: &str, title: &str, category: Option<&str>, icon: &str) -> Resource {
    Resource {
        id: id.into(),
        title: title.into(),
        description: None,
        link: Some(format!("https://intranet.portal.test/resources/{id}")),
        category: category.map(String::from),
        icon: icon.into(),
        body: None,
        attachment: None,
        permission_panel: false,
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}
