//! End-to-end tests of the services against an in-memory SQLite store.

use common::{AppError, DatabaseConfig};
use domain::{InstructorForm, StudentForm};
use registry_service_lib::infra::Database;
use registry_service_lib::repository::{StudentRepository, StudentStore};
use registry_service_lib::service::validate_student;
use registry_service_lib::Registry;

async fn open_registry() -> Registry {
    Registry::open(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory registry should open")
}

fn student_form(name: &str, cpf: &str) -> StudentForm {
    StudentForm {
        name: name.to_string(),
        age: 21,
        cpf: cpf.to_string(),
        contact: "(48) 99999-1234".to_string(),
        course: "Computer Science".to_string(),
        phase: 2,
    }
}

fn instructor_form(name: &str, cpf: &str) -> InstructorForm {
    InstructorForm {
        name: name.to_string(),
        age: 40,
        cpf: cpf.to_string(),
        contact: "(48) 3333-1234".to_string(),
        campus: "Pedra Branca".to_string(),
        title: "Master".to_string(),
        salary: 6200.0,
    }
}

#[tokio::test]
async fn test_migrations_are_applied_on_open() {
    let registry = open_registry().await;
    let status = registry.database().migration_status().await.unwrap();

    assert_eq!(status.len(), 2);
    assert!(status.iter().all(|(_, applied)| *applied));
    registry.database().ping().await.unwrap();
}

#[tokio::test]
async fn test_register_and_fetch_student() {
    let registry = open_registry().await;

    let created = registry
        .students
        .register_student(student_form("  Ana  Souza ", "529.982.247-25"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Ana Souza");
    assert_eq!(created.cpf.as_str(), "52998224725");

    let fetched = registry.students.get_student(created.id).await.unwrap();
    assert_eq!(fetched.name, "Ana Souza");
    assert_eq!(fetched.contact.formatted(), "(48) 99999-1234");

    let by_cpf = registry
        .students
        .find_student_by_cpf("52998224725")
        .await
        .unwrap();
    assert_eq!(by_cpf.id, created.id);
}

#[tokio::test]
async fn test_duplicate_student_cpf_is_rejected() {
    let registry = open_registry().await;

    registry
        .students
        .register_student(student_form("Ana Souza", "529.982.247-25"))
        .await
        .unwrap();

    let err = registry
        .students
        .register_student(student_form("Bruno Lima", "52998224725"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref f) if f == "CPF"));
    assert_eq!(registry.students.count_students().await.unwrap(), 1);
}

#[tokio::test]
async fn test_same_cpf_allowed_across_record_types() {
    let registry = open_registry().await;

    registry
        .students
        .register_student(student_form("Ana Souza", "529.982.247-25"))
        .await
        .unwrap();

    let instructor = registry
        .instructors
        .register_instructor(instructor_form("Ana Souza", "529.982.247-25"))
        .await;

    assert!(instructor.is_ok());
}

#[tokio::test]
async fn test_unique_index_backstops_service_check() {
    let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    let store = StudentStore::new(db.get_connection());

    let data = validate_student(&student_form("Ana Souza", "529.982.247-25")).unwrap();
    store.create(data.clone()).await.unwrap();

    let err = store.create(data).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_list_is_ordered_and_filterable() {
    let registry = open_registry().await;

    for (name, cpf) in [
        ("Carla Dias", "529.982.247-25"),
        ("Bruno Lima", "111.444.777-35"),
        ("Carlos Melo", "390.533.447-05"),
    ] {
        registry
            .students
            .register_student(student_form(name, cpf))
            .await
            .unwrap();
    }

    let all = registry.students.list_students(None).await.unwrap();
    let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Carla Dias", "Bruno Lima", "Carlos Melo"]);

    let filtered = registry
        .students
        .list_students(Some("carl".to_string()))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 2);

    // Blank filter lists everything
    let blank = registry
        .students
        .list_students(Some("  ".to_string()))
        .await
        .unwrap();
    assert_eq!(blank.len(), 3);
}

#[tokio::test]
async fn test_name_filter_folds_accents_and_matches_literally() {
    let registry = open_registry().await;

    for (name, cpf) in [
        ("Álvaro Dias", "529.982.247-25"),
        ("Bruno Lima", "111.444.777-35"),
    ] {
        registry
            .students
            .register_student(student_form(name, cpf))
            .await
            .unwrap();
    }

    let accented = registry
        .students
        .list_students(Some("álvaro".to_string()))
        .await
        .unwrap();
    assert_eq!(accented.len(), 1);
    assert_eq!(accented[0].name, "Álvaro Dias");

    let upper = registry
        .students
        .list_students(Some("ÁLVARO".to_string()))
        .await
        .unwrap();
    assert_eq!(upper.len(), 1);

    for pattern in ["%", "_", "B%a"] {
        let rows = registry
            .students
            .list_students(Some(pattern.to_string()))
            .await
            .unwrap();
        assert!(rows.is_empty(), "{:?} matched {} rows", pattern, rows.len());
    }
}

#[tokio::test]
async fn test_instructor_name_filter_is_case_insensitive() {
    let registry = open_registry().await;
    registry
        .instructors
        .register_instructor(instructor_form("Érica Antunes", "111.444.777-35"))
        .await
        .unwrap();

    let rows = registry
        .instructors
        .list_instructors(Some("érica".to_string()))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    let rows = registry
        .instructors
        .list_instructors(Some("_".to_string()))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_update_to_another_students_cpf_is_conflict() {
    let registry = open_registry().await;
    registry
        .students
        .register_student(student_form("Ana Souza", "529.982.247-25"))
        .await
        .unwrap();
    let bruno = registry
        .students
        .register_student(student_form("Bruno Lima", "111.444.777-35"))
        .await
        .unwrap();

    let mut form = StudentForm::from(&bruno);
    form.cpf = "52998224725".to_string();

    let err = registry
        .students
        .update_student(bruno.id, form)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref f) if f == "CPF"));

    let unchanged = registry.students.get_student(bruno.id).await.unwrap();
    assert_eq!(unchanged.cpf.as_str(), "11144477735");
}

#[tokio::test]
async fn test_update_keeping_own_cpf_is_allowed() {
    let registry = open_registry().await;
    let created = registry
        .instructors
        .register_instructor(instructor_form("Paulo Reis", "111.444.777-35"))
        .await
        .unwrap();

    let mut form = InstructorForm::from(&created);
    form.cpf = "111.444.777-35".to_string();
    form.campus = "Trindade".to_string();

    let updated = registry
        .instructors
        .update_instructor(created.id, form)
        .await
        .unwrap();
    assert_eq!(updated.campus, "Trindade");
}

#[tokio::test]
async fn test_update_student_overwrites_fields() {
    let registry = open_registry().await;
    let created = registry
        .students
        .register_student(student_form("Ana Souza", "529.982.247-25"))
        .await
        .unwrap();

    let mut form = StudentForm::from(&created);
    form.course = "Law".to_string();
    form.phase = 5;

    let updated = registry
        .students
        .update_student(created.id, form)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.course, "Law");
    assert_eq!(updated.phase, 5);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_rejects_invalid_form_and_keeps_record() {
    let registry = open_registry().await;
    let created = registry
        .students
        .register_student(student_form("Ana Souza", "529.982.247-25"))
        .await
        .unwrap();

    let mut form = StudentForm::from(&created);
    form.age = 0;

    let err = registry
        .students
        .update_student(created.id, form)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let unchanged = registry.students.get_student(created.id).await.unwrap();
    assert_eq!(unchanged.age, 21);
}

#[tokio::test]
async fn test_delete_student() {
    let registry = open_registry().await;
    let created = registry
        .students
        .register_student(student_form("Ana Souza", "529.982.247-25"))
        .await
        .unwrap();

    registry.students.delete_student(created.id).await.unwrap();

    let err = registry.students.get_student(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = registry.students.delete_student(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_instructor_crud_round() {
    let registry = open_registry().await;

    let created = registry
        .instructors
        .register_instructor(instructor_form("Paulo Reis", "111.444.777-35"))
        .await
        .unwrap();
    assert_eq!(created.salary, 6200.0);

    let mut form = InstructorForm::from(&created);
    form.salary = 7100.5;
    form.title = "Doctor".to_string();
    let updated = registry
        .instructors
        .update_instructor(created.id, form)
        .await
        .unwrap();
    assert_eq!(updated.salary, 7100.5);
    assert_eq!(updated.title, "Doctor");

    assert_eq!(registry.instructors.count_instructors().await.unwrap(), 1);

    registry
        .instructors
        .delete_instructor(created.id)
        .await
        .unwrap();
    assert_eq!(registry.instructors.count_instructors().await.unwrap(), 0);
}
