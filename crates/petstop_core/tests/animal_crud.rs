use petstop_core::{
    Animal, AnimalRepository, RepoError, SqliteAnimalRepository, SqliteConnectionProvider,
    ValidationError,
};
use tempfile::TempDir;

#[test]
fn create_assigns_positive_id_and_roundtrips() {
    let (_dir, repo) = temp_repo();

    let animal = Animal::new("Mimi", "Gato", 3, false);
    let id = repo.create(&animal).unwrap();
    assert!(id > 0);

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, Some(id));
    assert_eq!(loaded.name, animal.name);
    assert_eq!(loaded.species, animal.species);
    assert_eq!(loaded.age, animal.age);
    assert_eq!(loaded.vaccinated, animal.vaccinated);
}

#[test]
fn create_rejects_record_with_assigned_id() {
    let (_dir, repo) = temp_repo();

    let persisted = Animal::with_id(9, "Rex", "Cachorro", 5, true);
    let err = repo.create(&persisted).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::IdAssigned(9))
    ));
}

#[test]
fn create_validates_before_touching_the_store() {
    let (_dir, repo) = temp_repo();

    let err = repo.create(&Animal::new("", "Gato", 1, false)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField("name"))
    ));

    let err = repo
        .create(&Animal::new("Mimi", "Gato", -1, false))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::NegativeField("age"))
    ));

    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn find_by_id_returns_none_for_unknown_id() {
    let (_dir, repo) = temp_repo();

    assert!(repo.find_by_id(12345).unwrap().is_none());
}

#[test]
fn list_all_is_empty_for_empty_table_and_orders_by_name() {
    let (_dir, repo) = temp_repo();

    assert!(repo.list_all().unwrap().is_empty());

    repo.create(&Animal::new("Zeca", "Papagaio", 2, false))
        .unwrap();
    repo.create(&Animal::new("Ana", "Gato", 4, true)).unwrap();

    let listed = repo.list_all().unwrap();
    let names: Vec<&str> = listed.iter().map(|animal| animal.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Zeca"]);
}

#[test]
fn update_replaces_all_fields_wholesale() {
    let (_dir, repo) = temp_repo();

    let id = repo.create(&Animal::new("Luna", "Gato", 2, false)).unwrap();

    let replacement = Animal::with_id(id, "Luna", "Gato Siames", 3, true);
    assert!(repo.update(&replacement).unwrap());

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, replacement);
}

#[test]
fn update_on_missing_row_returns_false_not_error() {
    let (_dir, repo) = temp_repo();

    let ghost = Animal::with_id(777, "Rex", "Cachorro", 5, true);
    assert!(!repo.update(&ghost).unwrap());
}

#[test]
fn update_requires_assigned_positive_id() {
    let (_dir, repo) = temp_repo();

    let transient = Animal::new("Rex", "Cachorro", 5, true);
    let err = repo.update(&transient).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::IdMissing)
    ));

    let negative = Animal::with_id(-3, "Rex", "Cachorro", 5, true);
    let err = repo.update(&negative).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::IdInvalid(-3))
    ));
}

#[test]
fn delete_on_missing_row_returns_false_and_rejects_bad_ids() {
    let (_dir, repo) = temp_repo();

    assert!(!repo.delete(31337).unwrap());

    let err = repo.delete(0).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::IdInvalid(0))
    ));
}

#[test]
fn full_lifecycle_create_update_delete() {
    let (_dir, repo) = temp_repo();

    let rex = Animal::new("Rex", "Cachorro", 5, true);
    let id = repo.create(&rex).unwrap();
    assert!(id > 0);

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Rex");
    assert_eq!(loaded.species, "Cachorro");
    assert_eq!(loaded.age, 5);
    assert!(loaded.vaccinated);

    let older = Animal::with_id(id, "Rex", "Cachorro", 6, false);
    assert!(repo.update(&older).unwrap());

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.age, 6);
    assert!(!loaded.vaccinated);

    assert!(repo.delete(id).unwrap());
    assert!(repo.find_by_id(id).unwrap().is_none());
}

#[test]
fn list_skips_unmappable_rows_instead_of_failing() {
    let (dir, repo) = temp_repo();

    repo.create(&Animal::new("Bidu", "Cachorro", 1, true)).unwrap();

    // Force a row the mapper must reject: vacinado outside 0/1.
    let conn = petstop_core::db::open_db(dir.path().join("petstop.db")).unwrap();
    conn.execute(
        "INSERT INTO animais (nome, especie, idade, vacinado) VALUES ('Zumbi', 'Gato', 2, 7);",
        [],
    )
    .unwrap();
    drop(conn);

    let listed = repo.list_all().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Bidu");
}

#[test]
fn find_by_id_reports_unmappable_row_as_invalid_data() {
    let (dir, repo) = temp_repo();

    let conn = petstop_core::db::open_db(dir.path().join("petstop.db")).unwrap();
    conn.execute(
        "INSERT INTO animais (nome, especie, idade, vacinado) VALUES ('Zumbi', 'Gato', 2, 7);",
        [],
    )
    .unwrap();
    let id = conn.last_insert_rowid();
    drop(conn);

    let err = repo.find_by_id(id).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

fn temp_repo() -> (TempDir, SqliteAnimalRepository<SqliteConnectionProvider>) {
    let dir = tempfile::tempdir().unwrap();
    let provider = SqliteConnectionProvider::new(dir.path().join("petstop.db"));
    (dir, SqliteAnimalRepository::new(provider))
}
