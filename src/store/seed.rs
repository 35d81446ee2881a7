//! Mock data the dashboard starts with.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    AssignmentType, Attendance, CalendarEvent, Chore, ChorePriority, ChoreStatus, EventType,
    House, Message, Player, PlayerStatus, Recurrence, RecurrenceType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

pub fn players() -> Vec<Player> {
    let rows: [(&str, &str, &str, u8, &str, House, &str, PlayerStatus); 9] = [
        ("Max", "Bisinger", "Striker", 19, "Germany", House::Widdersdorf1, "101", PlayerStatus::Active),
        ("Ahmed", "Hassan", "Midfielder", 18, "Egypt", House::Widdersdorf1, "102", PlayerStatus::Active),
        ("Lukas", "Weber", "Goalkeeper", 20, "Austria", House::Widdersdorf1, "103", PlayerStatus::Injured),
        ("Mateo", "Silva", "Winger", 17, "Brazil", House::Widdersdorf2, "201", PlayerStatus::Active),
        ("Jonas", "Becker", "Defender", 19, "Germany", House::Widdersdorf2, "202", PlayerStatus::OnTrial),
        ("Yuki", "Tanaka", "Midfielder", 18, "Japan", House::Widdersdorf2, "203", PlayerStatus::Active),
        ("Liam", "O'Connor", "Defender", 20, "Ireland", House::Widdersdorf3, "301", PlayerStatus::Active),
        ("Noah", "Kowalski", "Striker", 18, "Poland", House::Widdersdorf3, "302", PlayerStatus::Active),
        ("Elias", "Dubois", "Midfielder", 19, "France", House::Widdersdorf3, "303", PlayerStatus::Inactive),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (first, last, position, age, nationality, house, room, status))| Player {
            id: i as u32 + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            position: position.to_string(),
            age: *age,
            nationality: nationality.to_string(),
            house: *house,
            room: room.to_string(),
            contract_period: "2024-2026".to_string(),
            status: *status,
            phone_number: format!("+49 221 7160 {:03}", 100 + i),
            emergency_contact: format!("Family {} +49 170 555 {:04}", last, 1000 + i),
            medical_info: if *status == PlayerStatus::Injured {
                "Hamstring strain, cleared for light training".to_string()
            } else {
                String::new()
            },
            special_notes: String::new(),
            join_date: date(2024, 8, 1),
        })
        .collect()
}

pub fn chores() -> Vec<Chore> {
    vec![
        Chore {
            id: 1,
            title: "Clean kitchen".to_string(),
            priority: ChorePriority::High,
            house: House::Widdersdorf1,
            assignment_type: AssignmentType::Individual,
            assigned_players: vec![1],
            deadline: date(2025, 3, 7),
            points: 15,
            description: "Wipe counters, clean stove, take out recycling".to_string(),
            status: ChoreStatus::Pending,
        },
        Chore {
            id: 2,
            title: "Vacuum common room".to_string(),
            priority: ChorePriority::Medium,
            house: House::Widdersdorf1,
            assignment_type: AssignmentType::Group,
            assigned_players: vec![1, 2],
            deadline: date(2025, 3, 8),
            points: 10,
            description: String::new(),
            status: ChoreStatus::InProgress,
        },
        Chore {
            id: 3,
            title: "Laundry room tidy-up".to_string(),
            priority: ChorePriority::Low,
            house: House::Widdersdorf2,
            assignment_type: AssignmentType::Individual,
            assigned_players: vec![4],
            deadline: date(2025, 3, 9),
            points: 5,
            description: String::new(),
            status: ChoreStatus::Pending,
        },
        Chore {
            id: 4,
            title: "Bins out for collection".to_string(),
            priority: ChorePriority::Urgent,
            house: House::Widdersdorf3,
            assignment_type: AssignmentType::House,
            assigned_players: vec![7, 8],
            deadline: date(2025, 3, 6),
            points: 5,
            description: "Yellow and paper bins, Thursday morning".to_string(),
            status: ChoreStatus::Pending,
        },
        Chore {
            id: 5,
            title: "Bathroom deep clean".to_string(),
            priority: ChorePriority::High,
            house: House::Widdersdorf2,
            assignment_type: AssignmentType::Group,
            assigned_players: vec![5, 6],
            deadline: date(2025, 3, 10),
            points: 20,
            description: String::new(),
            status: ChoreStatus::Completed,
        },
    ]
}

pub fn events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: 1,
            title: "Team training".to_string(),
            event_type: EventType::Training,
            date: date(2025, 3, 3),
            time: "10:00".to_string(),
            duration: 120,
            location: "Franz-Kremer-Stadion".to_string(),
            attendance: Attendance::Mandatory,
            selected_players: Vec::new(),
            recurrence: Recurrence {
                kind: RecurrenceType::Weekly,
                interval: 1,
                end_date: Some(date(2025, 6, 30)),
                selected_days: vec![1, 3, 5],
            },
        },
        CalendarEvent {
            id: 2,
            title: "U19 league match".to_string(),
            event_type: EventType::Match,
            date: date(2025, 3, 8),
            time: "14:00".to_string(),
            duration: 105,
            location: "Geißbockheim".to_string(),
            attendance: Attendance::Selected,
            selected_players: vec![1, 2, 4, 6, 7, 8],
            recurrence: Recurrence::default(),
        },
        CalendarEvent {
            id: 3,
            title: "German language class".to_string(),
            event_type: EventType::Meeting,
            date: date(2025, 3, 4),
            time: "17:00".to_string(),
            duration: 90,
            location: "Academy classroom".to_string(),
            attendance: Attendance::Mandatory,
            selected_players: Vec::new(),
            recurrence: Recurrence {
                kind: RecurrenceType::Weekly,
                interval: 1,
                end_date: Some(date(2025, 6, 24)),
                selected_days: vec![2, 4],
            },
        },
        CalendarEvent {
            id: 4,
            title: "Medical check-up".to_string(),
            event_type: EventType::Medical,
            date: date(2025, 3, 15),
            time: "09:00".to_string(),
            duration: 30,
            location: "Medical centre".to_string(),
            attendance: Attendance::Mandatory,
            selected_players: Vec::new(),
            recurrence: Recurrence {
                kind: RecurrenceType::Monthly,
                interval: 1,
                end_date: None,
                selected_days: Vec::new(),
            },
        },
    ]
}

pub fn messages() -> Vec<Message> {
    let rows = [
        ("general", "Coaching Staff", "Training moves to 10:30 on Friday.", "2025-03-03T08:15:00Z"),
        ("general", "Max Bisinger", "Thanks, see you there!", "2025-03-03T08:20:00Z"),
        ("Widdersdorf 1", "House Manager", "Kitchen inspection on Thursday.", "2025-03-04T18:00:00Z"),
        ("Widdersdorf 2", "Mateo Silva", "Who has the washing machine key?", "2025-03-04T19:42:00Z"),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (channel, sender, body, sent_at))| Message {
            id: i as u32 + 1,
            channel: channel.to_string(),
            sender: sender.to_string(),
            body: body.to_string(),
            sent_at: timestamp(sent_at),
        })
        .collect()
}
