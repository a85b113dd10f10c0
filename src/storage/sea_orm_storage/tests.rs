use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::SeaOrmStorage;
use crate::errors::SchoolAdminError;
use crate::models::absences::requests::AbsenceListParams;
use crate::models::classes::entities::Class;
use crate::models::finance::requests::FinanceSummaryParams;
use crate::models::results::responses::BulkSaveOutcome;
use crate::models::rosters::entities::Roster;
use crate::models::rosters::requests::RosterFilters;
use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;
use crate::storage::*;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::in_memory().await
}

fn req<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("valid request body")
}

struct Fixture {
    class: Class,
    subject_id: i64,
    teacher: Teacher,
    classroom_id: i64,
    student: Student,
}

async fn fixture(s: &SeaOrmStorage) -> Fixture {
    let teacher = s
        .create_teacher(req(json!({"first_name": "Amina", "last_name": "Haddad"})))
        .await
        .unwrap();
    let class = s
        .create_class(req(json!({"name": "1A", "mentor_id": teacher.id})))
        .await
        .unwrap();
    let subject = s
        .create_subject(req(json!({"name": "Tajweed"})))
        .await
        .unwrap();
    let classroom = s
        .create_classroom(req(json!({"name": "Room 1", "capacity": 20})))
        .await
        .unwrap();
    let student = s
        .create_student(req(json!({
            "first_name": "Yusuf",
            "last_name": "Karim",
            "class_id": class.id
        })))
        .await
        .unwrap();

    Fixture {
        class,
        subject_id: subject.id,
        teacher,
        classroom_id: classroom.id,
        student,
    }
}

async fn roster(s: &SeaOrmStorage, f: &Fixture, day: &str, start: &str, end: &str) -> Roster {
    s.create_roster(req(json!({
        "class_id": f.class.id,
        "subject_id": f.subject_id,
        "teacher_id": f.teacher.id,
        "classroom_id": f.classroom_id,
        "day_of_week": day,
        "start_time": start,
        "end_time": end
    })))
    .await
    .unwrap()
}

async fn count_absences(s: &SeaOrmStorage) -> i64 {
    s.list_absences_with_pagination(AbsenceListParams::default())
        .await
        .unwrap()
        .pagination
        .total
}

#[tokio::test]
async fn test_classroom_delete_cascades_to_rosters_and_absences() {
    let s = storage().await;
    let f = fixture(&s).await;

    let first = roster(&s, &f, "Monday", "08:00", "09:00").await;
    let second = roster(&s, &f, "Tuesday", "10:00", "11:00").await;
    for r in [&first, &second] {
        s.create_absence(
            req(json!({
                "roster_id": r.id,
                "student_id": f.student.id,
                "date": "2024-06-03"
            })),
            None,
        )
        .await
        .unwrap();
    }
    assert_eq!(count_absences(&s).await, 2);

    assert!(s.delete_classroom(f.classroom_id).await.unwrap());

    assert!(s.get_roster_by_id(first.id).await.unwrap().is_none());
    assert!(s.get_roster_by_id(second.id).await.unwrap().is_none());
    assert_eq!(count_absences(&s).await, 0);
    assert!(!s.delete_classroom(f.classroom_id).await.unwrap());
}

#[tokio::test]
async fn test_mentor_moves_to_new_class() {
    let s = storage().await;
    let f = fixture(&s).await;

    let second = s
        .create_class(req(json!({"name": "1B", "mentor_id": f.teacher.id})))
        .await
        .unwrap();

    let first = s.get_class_by_id(f.class.id).await.unwrap().unwrap();
    assert_eq!(first.mentor_id, None);
    assert_eq!(second.mentor_id, Some(f.teacher.id));

    // 改回第一个班
    s.update_class(f.class.id, req(json!({"mentor_id": f.teacher.id})))
        .await
        .unwrap();
    let second = s.get_class_by_id(second.id).await.unwrap().unwrap();
    assert_eq!(second.mentor_id, None);
}

#[tokio::test]
async fn test_single_active_school_year() {
    let s = storage().await;

    let first = s
        .create_school_year(req(json!({
            "name": "2023-2024",
            "start_date": "2023-09-01",
            "end_date": "2024-06-30",
            "is_active": true
        })))
        .await
        .unwrap();
    let second = s
        .create_school_year(req(json!({
            "name": "2024-2025",
            "start_date": "2024-09-01",
            "end_date": "2025-06-30",
            "is_active": true
        })))
        .await
        .unwrap();

    let active = s.get_active_school_year().await.unwrap().unwrap();
    assert_eq!(active.id, second.id);
    assert!(!s.get_school_year_by_id(first.id).await.unwrap().unwrap().is_active);

    s.update_school_year(first.id, req(json!({"is_active": true})))
        .await
        .unwrap();
    let active = s.get_active_school_year().await.unwrap().unwrap();
    assert_eq!(active.id, first.id);

    // 只改结束日期，合并后早于开始日期
    let err = s
        .update_school_year(first.id, req(json!({"end_date": "2023-01-01"})))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Validation(_)));
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let s = storage().await;

    s.create_course(req(json!({"name": "Hifz"}))).await.unwrap();
    let err = s
        .create_course(req(json!({"name": "Hifz"})))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Conflict(_)));
}

#[tokio::test]
async fn test_bulk_results_upsert_and_reject() {
    let s = storage().await;
    let f = fixture(&s).await;
    let other = s
        .create_student(req(json!({"first_name": "Maryam", "last_name": "Saleh"})))
        .await
        .unwrap();
    let assessment = s
        .create_assessment(req(json!({
            "class_id": f.class.id,
            "subject_id": f.subject_id,
            "name": "Midterm",
            "kind": "exam",
            "date": "2024-03-01",
            "max_score": 20.0
        })))
        .await
        .unwrap();

    let outcome = s
        .save_results_bulk(req(json!({
            "assessment_id": assessment.id,
            "entries": [
                {"student_id": f.student.id, "score": 15.5},
                {"student_id": other.id, "score": 18}
            ]
        })))
        .await
        .unwrap();
    let BulkSaveOutcome::Saved(saved) = outcome else {
        panic!("expected saved results");
    };
    assert_eq!(saved.len(), 2);
    let first_id = saved[0].id;

    // 再次提交同一学生只更新，不新增
    let outcome = s
        .save_results_bulk(req(json!({
            "assessment_id": assessment.id,
            "entries": [{"student_id": f.student.id, "score": 19, "comment": "Improved"}]
        })))
        .await
        .unwrap();
    let BulkSaveOutcome::Saved(saved) = outcome else {
        panic!("expected saved results");
    };
    assert_eq!(saved[0].id, first_id);
    assert_eq!(saved[0].score, 19.0);
    let page = s
        .list_results_with_pagination(req(json!({"assessment_id": assessment.id})))
        .await
        .unwrap();
    assert_eq!(page.pagination.total, 2);

    // 第二行超出满分，整张表不写入
    let outcome = s
        .save_results_bulk(req(json!({
            "assessment_id": assessment.id,
            "entries": [
                {"student_id": other.id, "score": 1},
                {"student_id": f.student.id, "score": 25}
            ]
        })))
        .await
        .unwrap();
    let BulkSaveOutcome::Rejected(error) = outcome else {
        panic!("expected rejected sheet");
    };
    assert_eq!(error.index, 1);
    assert_eq!(error.student_id, f.student.id);
    let page = s
        .list_results_with_pagination(req(json!({"student_id": other.id})))
        .await
        .unwrap();
    assert_eq!(page.items[0].score, 18.0);

    let err = s
        .save_results_bulk(req(json!({"assessment_id": 999, "entries": []})))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::NotFound(_)));
}

#[tokio::test]
async fn test_finance_summary_totals() {
    let s = storage().await;

    for (kind, amount, date) in [
        ("income", 50_000, "2024-01-10"),
        ("income", 25_000, "2024-02-10"),
        ("expense", 12_000, "2024-02-15"),
        ("expense", 3_000, "2024-05-01"),
    ] {
        s.create_financial_log(req(json!({
            "kind": kind,
            "category": "tuition",
            "amount_cents": amount,
            "date": date
        })))
        .await
        .unwrap();
    }

    let all = s
        .finance_summary(FinanceSummaryParams::default())
        .await
        .unwrap();
    assert_eq!(all.income_cents, 75_000);
    assert_eq!(all.expense_cents, 15_000);
    assert_eq!(all.balance_cents, 60_000);

    let february = s
        .finance_summary(req(json!({"from": "2024-02-01", "to": "2024-02-29"})))
        .await
        .unwrap();
    assert_eq!(february.income_cents, 25_000);
    assert_eq!(february.expense_cents, 12_000);
    assert_eq!(february.balance_cents, 13_000);
}

#[tokio::test]
async fn test_student_delete_keeps_financial_logs() {
    let s = storage().await;
    let f = fixture(&s).await;
    let r = roster(&s, &f, "Monday", "08:00", "09:00").await;

    s.create_absence(
        req(json!({"roster_id": r.id, "student_id": f.student.id, "date": "2024-06-03"})),
        None,
    )
    .await
    .unwrap();
    s.create_quran_log(req(json!({
        "student_id": f.student.id,
        "date": "2024-06-03",
        "kind": "memorization",
        "start_surah": 78,
        "start_ayah": 1,
        "end_surah": 78,
        "end_ayah": 40
    })))
    .await
    .unwrap();
    let log = s
        .create_financial_log(req(json!({
            "student_id": f.student.id,
            "kind": "income",
            "category": "tuition",
            "amount_cents": 10_000,
            "date": "2024-06-01"
        })))
        .await
        .unwrap();

    assert!(s.delete_student(f.student.id).await.unwrap());

    assert_eq!(count_absences(&s).await, 0);
    let logs = s
        .list_quran_logs_with_pagination(Default::default())
        .await
        .unwrap();
    assert_eq!(logs.pagination.total, 0);
    let log = s.get_financial_log_by_id(log.id).await.unwrap().unwrap();
    assert_eq!(log.student_id, None);
}

#[tokio::test]
async fn test_teacher_delete_clears_mentorship_and_rosters() {
    let s = storage().await;
    let f = fixture(&s).await;
    let r = roster(&s, &f, "Monday", "08:00", "09:00").await;
    let log = s
        .create_quran_log(req(json!({
            "student_id": f.student.id,
            "teacher_id": f.teacher.id,
            "date": "2024-06-03",
            "kind": "revision",
            "start_surah": 1,
            "start_ayah": 1,
            "end_surah": 1,
            "end_ayah": 7
        })))
        .await
        .unwrap();
    assert_eq!(log.verses_count, Some(7));

    assert!(s.delete_teacher(f.teacher.id).await.unwrap());

    assert!(s.get_roster_by_id(r.id).await.unwrap().is_none());
    let class = s.get_class_by_id(f.class.id).await.unwrap().unwrap();
    assert_eq!(class.mentor_id, None);
    let log = s.get_quran_log_by_id(log.id).await.unwrap().unwrap();
    assert_eq!(log.teacher_id, None);
}

#[tokio::test]
async fn test_class_delete_unenrolls_students() {
    let s = storage().await;
    let f = fixture(&s).await;
    assert!(f.student.enrolled_at.is_some());

    assert!(s.delete_class(f.class.id).await.unwrap());

    let student = s.get_student_by_id(f.student.id).await.unwrap().unwrap();
    assert_eq!(student.class_id, None);
    assert_eq!(student.enrolled_at, None);
}

#[tokio::test]
async fn test_roster_filters_and_move() {
    let s = storage().await;
    let f = fixture(&s).await;
    let monday = roster(&s, &f, "Monday", "08:00", "09:00").await;
    roster(&s, &f, "Wednesday", "08:00", "09:00").await;

    let filtered = s
        .list_rosters(RosterFilters {
            day_of_week: Some("1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, monday.id);

    let moved = s
        .move_roster(
            monday.id,
            crate::calendar::WeeklySlot {
                day_of_week: "Friday".to_string(),
                start_time: "13:00".to_string(),
                end_time: "14:30".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.day_of_week.as_deref(), Some("Friday"));
    assert_eq!(moved.start_time, "13:00");

    // 只改开始时间，合并后晚于结束时间
    let err = s
        .update_roster(monday.id, req(json!({"start_time": "15:00"})))
        .await
        .unwrap_err();
    assert!(matches!(err, SchoolAdminError::Validation(_)));
}

#[tokio::test]
async fn test_course_delete_detaches_subjects() {
    let s = storage().await;
    let course = s.create_course(req(json!({"name": "Arabic"}))).await.unwrap();
    let module = s
        .create_module(req(json!({"course_id": course.id, "name": "Grammar"})))
        .await
        .unwrap();
    let subject = s
        .create_subject(req(json!({"module_id": module.id, "name": "Nahw"})))
        .await
        .unwrap();

    assert!(s.delete_course(course.id).await.unwrap());

    assert!(s.get_module_by_id(module.id).await.unwrap().is_none());
    let subject = s.get_subject_by_id(subject.id).await.unwrap().unwrap();
    assert_eq!(subject.module_id, None);
}

#[tokio::test]
async fn test_roster_day_is_optional() {
    let s = storage().await;
    let f = fixture(&s).await;
    roster(&s, &f, "Tuesday", "08:00", "09:00").await;

    let dayless = s
        .create_roster(req(json!({
            "class_id": f.class.id,
            "subject_id": f.subject_id,
            "teacher_id": f.teacher.id,
            "classroom_id": f.classroom_id,
            "start_time": "12:00",
            "end_time": "12:45"
        })))
        .await
        .unwrap();
    assert!(dayless.day_of_week.is_none());

    let stored = s.get_roster_by_id(dayless.id).await.unwrap().unwrap();
    assert!(stored.day_of_week.is_none());

    let tuesdays = s
        .list_rosters(RosterFilters {
            day_of_week: Some("Tuesday".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(tuesdays.len(), 1);
    assert!(tuesdays.iter().all(|r| r.id != dayless.id));
}
