//! Literal dataset the mock starts with, mirroring the 1C test base.

use chrono::NaiveDateTime;

use super::domain::{JobPosting, PostingId, WorkRequest};
use super::format::parse_instant;

struct PostingRow {
    number: &'static str,
    organization: &'static str,
    title: &'static str,
    description: &'static str,
    begin: &'static str,
    end: &'static str,
    document: &'static str,
    salary: i64,
    tags: &'static [&'static str],
}

const POSTINGS: &[PostingRow] = &[
    PostingRow {
        number: "000004",
        organization: "Волонтеры ДВФУ",
        title: "Волонтер",
        description: "Необходимо доставлять гуманитарную помощь, покупать лекарства для пожилых немобильных людей",
        begin: "2026-01-01T00:00:00",
        end: "2027-01-01T00:00:00",
        document: "2026-01-05T19:40:47",
        salary: 50_000,
        tags: &["Помощь пожилым", "Медицина"],
    },
    PostingRow {
        number: "000005",
        organization: "Волонтеры ДВФУ",
        title: "Волонтер",
        description: "Сбор мусора на набережной",
        begin: "2026-01-01T00:00:00",
        end: "2027-01-01T00:00:00",
        document: "2026-01-05T19:41:59",
        salary: 1_000,
        tags: &["Общественная польза"],
    },
    PostingRow {
        number: "000001",
        organization: "ЦПД",
        title: "Программист микроконтроллеров",
        description: "Разработка ПО для прототипа робота-уборщика",
        begin: "2026-01-10T00:00:00",
        end: "2027-01-10T00:00:00",
        document: "2026-01-06T10:15:00",
        salary: 120_000,
        tags: &["Наука", "Техника", "Программирование", "Алгоритмы", "Робототехника"],
    },
    PostingRow {
        number: "000002",
        organization: "CODE WORK",
        title: "Backend-разработчик (Go)",
        description: "Разработка личного кабинета студента (backend на Go)",
        begin: "2026-02-01T00:00:00",
        end: "2026-08-01T00:00:00",
        document: "2026-01-10T12:00:00",
        salary: 80_000,
        tags: &["Программирование", "Алгоритмы", "ICPC", "Технологии"],
    },
    PostingRow {
        number: "000003",
        organization: "Студенческий отряд",
        title: "Организатор мероприятий",
        description: "Организация и проведение мероприятий для школьников",
        begin: "2026-03-01T00:00:00",
        end: "2026-06-01T00:00:00",
        document: "2026-01-12T09:30:00",
        salary: 25_000,
        tags: &["Общественная польза", "Творчество"],
    },
    PostingRow {
        number: "000006",
        organization: "CODE WORK",
        title: "Разработчик API (Go)",
        description: "Разработка REST API для сервиса подработок",
        begin: "2026-01-20T00:00:00",
        end: "2026-09-01T00:00:00",
        document: "2026-01-15T15:45:00",
        salary: 90_000,
        tags: &["Программирование", "Технологии"],
    },
    PostingRow {
        number: "000007",
        organization: "ЦПД",
        title: "Data Analyst Intern",
        description: "Стажировка по анализу данных студентов",
        begin: "2026-04-01T00:00:00",
        end: "2026-12-01T00:00:00",
        document: "2026-01-18T11:20:00",
        salary: 60_000,
        tags: &["Наука", "Технологии", "Финансы"],
    },
    PostingRow {
        number: "000008",
        organization: "Волонтеры ДВФУ",
        title: "Волонтер-организатор",
        description: "Помощь в организации благотворительного марафона",
        begin: "2026-05-01T00:00:00",
        end: "2026-06-01T00:00:00",
        document: "2026-01-20T08:30:00",
        salary: 0,
        tags: &["Общественная польза", "Творчество"],
    },
    PostingRow {
        number: "000009",
        organization: "CODE WORK",
        title: "Разработчик чат-ботов",
        description: "Разработка бота-помощника для студентов",
        begin: "2026-01-25T00:00:00",
        end: "2026-11-01T00:00:00",
        document: "2026-01-22T14:10:00",
        salary: 110_000,
        tags: &["Программирование", "Технологии", "Алгоритмы"],
    },
    PostingRow {
        number: "000010",
        organization: "Студенческий отряд",
        title: "IT-специалист",
        description: "Настройка и обслуживание компьютерных классов",
        begin: "2026-02-10T00:00:00",
        end: "2026-07-10T00:00:00",
        document: "2026-01-25T16:00:00",
        salary: 40_000,
        tags: &["Технологии", "Программирование"],
    },
];

// (posting, organization, student, description, start, end)
const REQUESTS: &[(&str, &str, &str, &str, &str, &str)] = &[
    (
        "000001",
        "CODE WORK",
        "Иванов Иван Иванович",
        "Знаю С++ на уровне middle, опыт программирования 6 лет",
        "01.01.0001 00:00:00",
        "01.01.0001 00:00:00",
    ),
    (
        "000001",
        "CODE WORK",
        "Николаев Николай Николаевич",
        "Изучал С++ месяц",
        "02.06.2026 00:00:00",
        "01.07.2026 00:00:00",
    ),
    (
        "000004",
        "Волонтеры ДВФУ",
        "Петров Петр Петрович",
        "Есть опыт волонтерской деятельности в хосписе",
        "10.02.2026 00:00:00",
        "10.05.2026 00:00:00",
    ),
];

fn seed_instant(raw: &str) -> NaiveDateTime {
    parse_instant(raw).unwrap_or_else(|| panic!("seed instant {raw:?} is malformed"))
}

pub(crate) fn postings() -> Vec<JobPosting> {
    POSTINGS
        .iter()
        .map(|row| JobPosting {
            organization: row.organization.to_string(),
            description: row.description.to_string(),
            date_of_begin: Some(seed_instant(row.begin)),
            date_of_end: Some(seed_instant(row.end)),
            salary: row.salary,
            title: row.title.to_string(),
            date_of_document: seed_instant(row.document),
            types_of_work: row.tags.iter().map(|tag| tag.to_string()).collect(),
            number: PostingId::from(row.number),
        })
        .collect()
}

pub(crate) fn requests() -> Vec<WorkRequest> {
    REQUESTS
        .iter()
        .map(
            |&(posting, organization, student, description, start, end)| WorkRequest {
                posting: PostingId::from(posting),
                organization: organization.to_string(),
                student: student.to_string(),
                description: description.to_string(),
                start_period: start.to_string(),
                end_period: end.to_string(),
                approved: None,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_posting_numbers_are_unique() {
        let postings = postings();
        let numbers: HashSet<_> = postings.iter().map(|posting| &posting.number).collect();
        assert_eq!(numbers.len(), postings.len());
        assert_eq!(postings.len(), 10);
    }

    #[test]
    fn seeded_requests_reference_seeded_postings() {
        let numbers: HashSet<_> = postings().into_iter().map(|posting| posting.number).collect();
        for request in requests() {
            assert!(numbers.contains(&request.posting));
        }
    }
}
