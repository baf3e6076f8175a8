use super::SeaOrmStorage;
use crate::entity::marks::Entity as Marks;
use crate::errors::MarksheetError;
use crate::models::{
    classes::requests::CreateClassRequest,
    marks::requests::{SaveMarkItem, UpdateMarkRequest},
    sessions::requests::{CreateSessionRequest, UpdateSessionRequest},
    students::requests::{CreateStudentRequest, UpdateStudentRequest},
    subjects::requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use crate::storage::Storage;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::in_memory()
        .await
        .expect("in-memory storage should start")
}

async fn class_fixture(storage: &SeaOrmStorage) -> (i64, i64) {
    let session = storage
        .create_session(CreateSessionRequest {
            name: "2024-25".to_string(),
        })
        .await
        .unwrap();
    let class = storage
        .create_class(CreateClassRequest {
            name: "Class 10".to_string(),
            session_id: session.id,
        })
        .await
        .unwrap();
    (session.id, class.id)
}

async fn add_student(storage: &SeaOrmStorage, class_id: i64, name: &str) -> i64 {
    storage
        .create_student(CreateStudentRequest {
            name: name.to_string(),
            roll_no: "1".to_string(),
            class_id,
            is_paid: false,
        })
        .await
        .unwrap()
        .id
}

async fn add_subject(storage: &SeaOrmStorage, class_id: i64, name: &str, max: i64) -> i64 {
    storage
        .create_subject(CreateSubjectRequest {
            name: name.to_string(),
            max_marks: max,
            date: None,
            class_id,
        })
        .await
        .unwrap()
        .id
}

async fn mark_rows(storage: &SeaOrmStorage) -> u64 {
    Marks::find().count(&storage.db).await.unwrap()
}

fn item(id: Option<i64>, subject: &str, obtained: &str, max: i64) -> SaveMarkItem {
    SaveMarkItem {
        id,
        subject: subject.to_string(),
        date: None,
        obtained: obtained.to_string(),
        max,
    }
}

#[tokio::test]
async fn test_settings_round_trip() {
    let storage = storage().await;

    assert_eq!(storage.get_setting("app_name").await.unwrap(), None);

    storage.set_setting("app_name", "X").await.unwrap();
    assert_eq!(
        storage.get_setting("app_name").await.unwrap().as_deref(),
        Some("X")
    );

    let updated = storage.set_setting("app_name", "Y").await.unwrap();
    assert_eq!(updated.value, "Y");
    assert_eq!(storage.list_settings().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_email_is_unique_and_case_insensitive() {
    let storage = storage().await;

    let admin = storage
        .create_admin("Office@Example.com", "hash", true)
        .await
        .unwrap();
    assert_eq!(admin.email, "office@example.com");
    assert_eq!(storage.count_admins().await.unwrap(), 1);

    let found = storage
        .get_admin_by_email("OFFICE@example.com ")
        .await
        .unwrap();
    assert_eq!(found.map(|a| a.id), Some(admin.id));

    let duplicate = storage.create_admin("office@example.com", "hash", false).await;
    assert!(matches!(duplicate, Err(MarksheetError::Conflict(_))));

    assert!(storage.update_admin_last_login(admin.id).await.unwrap());
    let reloaded = storage.get_admin_by_id(admin.id).await.unwrap().unwrap();
    assert!(reloaded.last_login.is_some());
}

#[tokio::test]
async fn test_create_class_requires_session() {
    let storage = storage().await;

    let result = storage
        .create_class(CreateClassRequest {
            name: "Orphan".to_string(),
            session_id: 999,
        })
        .await;

    assert!(matches!(result, Err(MarksheetError::NotFound(_))));
}

#[tokio::test]
async fn test_new_student_gets_zero_mark_per_subject() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    add_subject(&storage, class_id, "Maths", 100).await;
    add_subject(&storage, class_id, "Science", 50).await;
    add_subject(&storage, class_id, "English", 80).await;

    let student_id = add_student(&storage, class_id, "Asha").await;
    let student = storage.get_student(student_id).await.unwrap().unwrap();

    assert_eq!(student.marks.len(), 3);
    assert!(student.marks.iter().all(|m| m.mark.obtained == "0"));
    assert_eq!(student.marks[1].subject.name, "Science");
    assert_eq!(student.marks[1].subject.max_marks, 50);
}

#[tokio::test]
async fn test_new_subject_gets_zero_mark_per_student() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    add_student(&storage, class_id, "Asha").await;
    add_student(&storage, class_id, "Bilal").await;

    let subject_id = add_subject(&storage, class_id, "Maths", 100).await;

    let students = storage.list_students(Some(class_id)).await.unwrap();
    assert_eq!(students.len(), 2);
    for student in students {
        assert_eq!(student.marks.len(), 1);
        assert_eq!(student.marks[0].mark.subject_id, subject_id);
        assert_eq!(student.marks[0].mark.obtained, "0");
    }
}

#[tokio::test]
async fn test_update_mark_is_idempotent() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    let student_id = add_student(&storage, class_id, "Asha").await;
    let subject_id = add_subject(&storage, class_id, "Maths", 100).await;

    for _ in 0..3 {
        storage
            .update_mark(UpdateMarkRequest {
                student_id,
                subject_id,
                obtained: "72.5".to_string(),
            })
            .await
            .unwrap();
    }

    assert_eq!(mark_rows(&storage).await, 1);
    let student = storage.get_student(student_id).await.unwrap().unwrap();
    assert_eq!(student.marks[0].mark.obtained, "72.5");
}

#[tokio::test]
async fn test_update_mark_rejects_cross_class_and_bad_values() {
    let storage = storage().await;
    let (session_id, class_a) = class_fixture(&storage).await;
    let class_b = storage
        .create_class(CreateClassRequest {
            name: "Class 9".to_string(),
            session_id,
        })
        .await
        .unwrap()
        .id;
    let student_id = add_student(&storage, class_a, "Asha").await;
    let foreign_subject = add_subject(&storage, class_b, "Maths", 100).await;

    let cross = storage
        .update_mark(UpdateMarkRequest {
            student_id,
            subject_id: foreign_subject,
            obtained: "10".to_string(),
        })
        .await;
    assert!(matches!(cross, Err(MarksheetError::Validation(_))));

    let missing = storage
        .update_mark(UpdateMarkRequest {
            student_id: 999,
            subject_id: foreign_subject,
            obtained: "10".to_string(),
        })
        .await;
    assert!(matches!(missing, Err(MarksheetError::NotFound(_))));

    let own_subject = add_subject(&storage, class_a, "Science", 100).await;
    let negative = storage
        .update_mark(UpdateMarkRequest {
            student_id,
            subject_id: own_subject,
            obtained: "-3".to_string(),
        })
        .await;
    assert!(matches!(negative, Err(MarksheetError::Validation(_))));
}

#[tokio::test]
async fn test_delete_class_cascades_without_orphans() {
    let storage = storage().await;
    let (session_id, class_id) = class_fixture(&storage).await;
    let other_class = storage
        .create_class(CreateClassRequest {
            name: "Class 9".to_string(),
            session_id,
        })
        .await
        .unwrap()
        .id;

    add_student(&storage, class_id, "Asha").await;
    add_student(&storage, class_id, "Bilal").await;
    add_subject(&storage, class_id, "Maths", 100).await;
    add_subject(&storage, class_id, "Science", 100).await;
    add_subject(&storage, class_id, "English", 100).await;

    let kept_student = add_student(&storage, other_class, "Chitra").await;
    add_subject(&storage, other_class, "Maths", 100).await;
    assert_eq!(mark_rows(&storage).await, 7);

    assert!(storage.delete_class(class_id).await.unwrap());

    assert!(storage.get_class(class_id).await.unwrap().is_none());
    assert!(storage.list_students(Some(class_id)).await.unwrap().is_empty());
    assert!(storage.list_subjects(Some(class_id)).await.unwrap().is_empty());
    assert_eq!(mark_rows(&storage).await, 1);
    assert!(storage.get_student(kept_student).await.unwrap().is_some());

    assert!(!storage.delete_class(class_id).await.unwrap());
}

#[tokio::test]
async fn test_delete_session_cascades() {
    let storage = storage().await;
    let (session_id, class_id) = class_fixture(&storage).await;
    add_student(&storage, class_id, "Asha").await;
    add_subject(&storage, class_id, "Maths", 100).await;

    assert!(storage.delete_session(session_id).await.unwrap());

    assert!(storage.list_classes(Some(session_id)).await.unwrap().is_empty());
    assert!(storage.list_students(None).await.unwrap().is_empty());
    assert!(storage.list_subjects(None).await.unwrap().is_empty());
    assert_eq!(mark_rows(&storage).await, 0);
}

#[tokio::test]
async fn test_delete_student_and_subject_remove_marks() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    let asha = add_student(&storage, class_id, "Asha").await;
    add_student(&storage, class_id, "Bilal").await;
    let maths = add_subject(&storage, class_id, "Maths", 100).await;
    add_subject(&storage, class_id, "Science", 100).await;
    assert_eq!(mark_rows(&storage).await, 4);

    assert!(storage.delete_student(asha).await.unwrap());
    assert_eq!(mark_rows(&storage).await, 2);

    assert!(storage.delete_subject(maths).await.unwrap());
    assert_eq!(mark_rows(&storage).await, 1);

    assert!(!storage.delete_subject(maths).await.unwrap());
}

#[tokio::test]
async fn test_updates_on_missing_rows_return_none() {
    let storage = storage().await;

    let session = storage
        .update_session(
            42,
            UpdateSessionRequest {
                name: Some("x".to_string()),
            },
        )
        .await
        .unwrap();
    assert!(session.is_none());

    let student = storage
        .update_student(42, UpdateStudentRequest::default())
        .await
        .unwrap();
    assert!(student.is_none());

    assert!(!storage.delete_mark(42).await.unwrap());
    assert!(storage.get_mark(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_moving_between_classes_is_rejected() {
    let storage = storage().await;
    let (session_id, class_id) = class_fixture(&storage).await;
    let other_class = storage
        .create_class(CreateClassRequest {
            name: "Class 9".to_string(),
            session_id,
        })
        .await
        .unwrap()
        .id;
    let student_id = add_student(&storage, class_id, "Asha").await;
    let subject_id = add_subject(&storage, class_id, "Maths", 100).await;

    let moved = storage
        .update_student(
            student_id,
            UpdateStudentRequest {
                class_id: Some(other_class),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(moved, Err(MarksheetError::Validation(_))));

    let moved = storage
        .update_subject(
            subject_id,
            UpdateSubjectRequest {
                class_id: Some(other_class),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(moved, Err(MarksheetError::Validation(_))));

    let renamed = storage
        .update_student(
            student_id,
            UpdateStudentRequest {
                name: Some("Asha K".to_string()),
                is_paid: Some(true),
                class_id: Some(class_id),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Asha K");
    assert!(renamed.is_paid);
}

#[tokio::test]
async fn test_save_student_marks_resolves_subjects() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    let asha = add_student(&storage, class_id, "Asha").await;
    let bilal = add_student(&storage, class_id, "Bilal").await;
    add_subject(&storage, class_id, "Maths", 100).await;
    add_subject(&storage, class_id, "Science", 100).await;

    let before = storage.get_student(asha).await.unwrap().unwrap();
    let maths_mark = before.marks[0].mark.id;

    let saved = storage
        .save_student_marks(
            asha,
            vec![
                item(Some(maths_mark), "Mathematics", "88", 100),
                item(None, "  science ", "40", 50),
                item(None, "Hindi", "30", 50),
                item(None, "   ", "99", 100),
            ],
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(saved.marks.len(), 3);
    assert_eq!(saved.marks[0].subject.name, "Mathematics");
    assert_eq!(saved.marks[0].mark.obtained, "88");
    assert_eq!(saved.marks[1].subject.name, "Science");
    assert_eq!(saved.marks[1].subject.max_marks, 50);
    assert_eq!(saved.marks[1].mark.obtained, "40");
    assert_eq!(saved.marks[2].subject.name, "Hindi");
    assert_eq!(saved.marks[2].mark.obtained, "30");

    // 新科目也为同班其他学生补了 0 分
    let other = storage.get_student(bilal).await.unwrap().unwrap();
    assert_eq!(other.marks.len(), 3);
    assert_eq!(other.marks[2].mark.obtained, "0");
    assert_eq!(storage.list_subjects(Some(class_id)).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_save_student_marks_is_all_or_nothing() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    let asha = add_student(&storage, class_id, "Asha").await;
    add_subject(&storage, class_id, "Maths", 100).await;

    let result = storage
        .save_student_marks(
            asha,
            vec![
                item(None, "Maths", "50", 100),
                item(None, "Hindi", "not a number", 100),
            ],
        )
        .await;
    assert!(matches!(result, Err(MarksheetError::Validation(_))));

    let student = storage.get_student(asha).await.unwrap().unwrap();
    assert_eq!(student.marks.len(), 1);
    assert_eq!(student.marks[0].mark.obtained, "0");
    assert_eq!(storage.list_subjects(Some(class_id)).await.unwrap().len(), 1);

    let missing = storage.save_student_marks(999, Vec::new()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_save_student_marks_keeps_subject_date() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    let asha = add_student(&storage, class_id, "Asha").await;
    let maths = storage
        .create_subject(CreateSubjectRequest {
            name: "Maths".to_string(),
            max_marks: 100,
            date: Some("2024-03-01".to_string()),
            class_id,
        })
        .await
        .unwrap()
        .id;

    let mut blank_date = item(None, "maths", "45", 100);
    blank_date.date = Some("  ".to_string());
    storage
        .save_student_marks(asha, vec![item(None, "Maths", "50", 100), blank_date])
        .await
        .unwrap()
        .unwrap();

    let subject = storage.get_subject(maths).await.unwrap().unwrap();
    assert_eq!(subject.date.as_deref(), Some("2024-03-01"));

    // 显式给出的日期仍然覆盖
    let mut dated = item(None, "Maths", "60", 100);
    dated.date = Some("2024-04-15".to_string());
    let saved = storage
        .save_student_marks(asha, vec![dated])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.marks[0].subject.date.as_deref(), Some("2024-04-15"));
    assert_eq!(saved.marks[0].mark.obtained, "60");
}

#[tokio::test]
async fn test_upsert_mark_overwrites_existing_pair() {
    let storage = storage().await;
    let (_, class_id) = class_fixture(&storage).await;
    let asha = add_student(&storage, class_id, "Asha").await;
    let maths = add_subject(&storage, class_id, "Maths", 100).await;
    assert_eq!(mark_rows(&storage).await, 1);

    let first = super::marks::upsert_mark(&storage.db, asha, maths, "12".to_string())
        .await
        .unwrap();
    let second = super::marks::upsert_mark(&storage.db, asha, maths, "34".to_string())
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.obtained, "34");
    assert_eq!(mark_rows(&storage).await, 1);
}
