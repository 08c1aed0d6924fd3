use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use super::setup_test_db;
use crate::{animal, cabinet, participant, student, task};

#[tokio::test]
async fn test_cabinet_create_and_read() -> Result<()> {
    let db = setup_test_db().await?;

    let created = cabinet::create(&db, &cabinet::NewCabinet { name: "Physics".into(), number: 12 }).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Physics");
    assert_eq!(created.number, 12);

    let found = cabinet::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found, Some(created.clone()));

    let by_number = cabinet::Entity::find().filter(cabinet::Column::Number.eq(12)).one(&db).await?;
    assert_eq!(by_number.map(|c| c.id), Some(created.id));
    Ok(())
}

#[tokio::test]
async fn test_student_belongs_to_cabinet() -> Result<()> {
    let db = setup_test_db().await?;

    let cab = cabinet::create(&db, &cabinet::NewCabinet { name: "Chemistry".into(), number: 3 }).await?;
    let s = student::insert(&db, "Olena Kovalenko", cab.id).await?;
    assert_eq!(s.cabinet_id, cab.id);

    let students = cabinet::Entity::find_by_id(cab.id)
        .find_with_related(student::Entity)
        .all(&db)
        .await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].1, vec![s]);
    Ok(())
}

#[tokio::test]
async fn test_participant_is_normalized_on_insert() -> Result<()> {
    let db = setup_test_db().await?;

    let p = participant::create(
        &db,
        &participant::NewParticipant { name: " Anna ".into(), email: "Anna@X.com".into(), event: " Gala ".into(), age: 30 },
    )
    .await?;
    assert_eq!(p.id, 1);
    assert_eq!(p.name, "Anna");
    assert_eq!(p.email, "Anna@x.com");
    assert_eq!(p.event, "Gala");
    Ok(())
}

#[tokio::test]
async fn test_animal_defaults() -> Result<()> {
    let db = setup_test_db().await?;

    let a = animal::create(&db, &animal::NewAnimal { name: "Rex".into(), age: 3, adopted: false, health_status: None }).await?;
    assert_eq!(a.health_status, "healthy");
    assert!(!a.adopted);
    assert!(a.is_consistent());

    let all = animal::Entity::find().order_by_asc(animal::Column::Id).all(&db).await?;
    assert_eq!(all, vec![a]);
    Ok(())
}

#[tokio::test]
async fn test_task_optional_description() -> Result<()> {
    let db = setup_test_db().await?;

    let t1 = task::create(&db, &task::NewTask { title: "Walk dogs".into(), description: None }).await?;
    let t2 = task::create(&db, &task::NewTask { title: "Clean cages".into(), description: Some("east wing".into()) }).await?;
    assert_eq!(t1.description, None);
    assert_eq!(t2.id, t1.id + 1);

    let found = task::Entity::find_by_id(t2.id).one(&db).await?.expect("task exists");
    assert_eq!(found.description.as_deref(), Some("east wing"));
    Ok(())
}

#[tokio::test]
async fn test_validation_happens_before_storage() -> Result<()> {
    let db = setup_test_db().await?;

    let err = animal::create(&db, &animal::NewAnimal { name: "Rex".into(), age: -2, adopted: false, health_status: None })
        .await
        .unwrap_err();
    assert!(matches!(err, crate::errors::ModelError::Validation(_)));
    assert_eq!(animal::Entity::find().all(&db).await?.len(), 0);
    Ok(())
}
