use spindle::{Row, Statement, Value};
use tests::{assert_err, tests, DbTest};

#[derive(Debug, Clone, PartialEq, spindle::Model)]
struct Singer {
    #[column("SingerId")]
    id: i64,

    #[column("FirstName")]
    first_name: Option<String>,

    #[column("LastName")]
    last_name: String,
}

#[derive(Debug, Clone, PartialEq, spindle::Model)]
struct Item {
    id: uuid::Uuid,
    label: String,
    score: Option<f64>,
    active: bool,
    payload: Option<Vec<u8>>,
    r#type: String,
}

async fn column_override_reaches_database(test: &mut DbTest) {
    let db = test.setup_db().await;

    let singer = Singer {
        id: 1,
        first_name: Some("Marc".to_string()),
        last_name: "Richards".to_string(),
    };
    db.insert("Singers", &singer).await.unwrap();

    // Read back through raw column names, bypassing the model.
    let row: Row = db
        .find_one("SELECT SingerId, FirstName, LastName FROM Singers")
        .await
        .unwrap();

    assert_eq!(row.get("SingerId"), Some(&Value::I64(1)));
    assert_eq!(row.get("FirstName"), Some(&Value::from("Marc")));
    assert_eq!(row.get("LastName"), Some(&Value::from("Richards")));
}

async fn scalar_types_round_trip(test: &mut DbTest) {
    let db = test.setup_db().await;

    let item = Item {
        id: uuid::Uuid::new_v4(),
        label: "first".to_string(),
        score: Some(4.5),
        active: true,
        payload: Some(vec![0, 1, 2, 255]),
        r#type: "widget".to_string(),
    };
    db.insert("items", &item).await.unwrap();

    let empty = Item {
        id: uuid::Uuid::new_v4(),
        label: "second".to_string(),
        score: None,
        active: false,
        payload: None,
        r#type: "gadget".to_string(),
    };
    db.insert("items", &empty).await.unwrap();

    let by_id = |id: &uuid::Uuid| {
        Statement::new("SELECT * FROM items WHERE id = @id").bind("id", id.to_string())
    };

    let found: Item = db.find_one(by_id(&item.id)).await.unwrap();
    assert_eq!(found, item);

    let found: Item = db.find_one(by_id(&empty.id)).await.unwrap();
    assert_eq!(found, empty);
}

async fn raw_identifier_maps_to_plain_column(test: &mut DbTest) {
    let db = test.setup_db().await;

    let item = Item {
        id: uuid::Uuid::new_v4(),
        label: "raw".to_string(),
        score: None,
        active: true,
        payload: None,
        r#type: "kind".to_string(),
    };
    db.insert("items", &item).await.unwrap();

    let row: Row = db.find_one("SELECT type FROM items").await.unwrap();
    assert_eq!(row.get("type"), Some(&Value::from("kind")));
}

async fn column_lookup_ignores_case(test: &mut DbTest) {
    #[derive(Debug, spindle::Model)]
    struct Lowercase {
        singerid: i64,
        lastname: String,
    }

    let db = test.setup_db().await;

    let singer = Singer {
        id: 4,
        first_name: None,
        last_name: "Case".to_string(),
    };
    db.insert("Singers", &singer).await.unwrap();

    let found: Lowercase = db.find_one("SELECT * FROM Singers").await.unwrap();
    assert_eq!(found.singerid, 4);
    assert_eq!(found.lastname, "Case");
}

async fn key_column_matching_ignores_case(test: &mut DbTest) {
    #[derive(Debug, Clone, PartialEq, spindle::Model)]
    struct Lowercase {
        singerid: i64,
        lastname: String,
    }

    let db = test.setup_db().await;

    let mut singer = Lowercase {
        singerid: 5,
        lastname: "Lower".to_string(),
    };
    db.insert("Singers", &singer).await.unwrap();

    singer.lastname = "Updated".to_string();
    db.update("Singers", &singer).await.unwrap();
    let found: Lowercase = db.find_one("SELECT * FROM Singers").await.unwrap();
    assert_eq!(found, singer);

    singer.lastname = "Upserted".to_string();
    db.insert_or_update("Singers", &singer).await.unwrap();
    let found: Lowercase = db.find_one("SELECT * FROM Singers").await.unwrap();
    assert_eq!(found, singer);

    let other = Lowercase {
        singerid: 6,
        lastname: "Created".to_string(),
    };
    db.insert_or_update("Singers", &other).await.unwrap();

    let all: Vec<Lowercase> = db
        .find("SELECT * FROM Singers ORDER BY SingerId", 10)
        .await
        .unwrap();
    assert_eq!(all, [singer, other]);
}

async fn value_of_wrong_type_fails_to_load(test: &mut DbTest) {
    #[derive(Debug, spindle::Model)]
    struct Mistyped {
        #[column("LastName")]
        last_name: i64,
    }

    let db = test.setup_db().await;

    let singer = Singer {
        id: 5,
        first_name: None,
        last_name: "Text".to_string(),
    };
    db.insert("Singers", &singer).await.unwrap();

    let err = assert_err!(db.find_one::<Mistyped>("SELECT * FROM Singers").await);
    assert!(err.is_type_conversion());
    assert!(err.to_string().contains("LastName"), "{err}");
}

async fn null_into_required_field_fails_to_load(test: &mut DbTest) {
    let db = test.setup_db().await;

    let err = assert_err!(
        db.find_one::<Singer>("SELECT 1 AS SingerId, NULL AS FirstName, NULL AS LastName")
            .await
    );
    assert!(err.is_type_conversion());
}

async fn missing_column_fails_to_load(test: &mut DbTest) {
    let db = test.setup_db().await;

    let err = assert_err!(
        db.find_one::<Singer>("SELECT 1 AS SingerId, 'x' AS LastName")
            .await
    );
    assert!(err.is_invalid_result());
    assert!(err.to_string().contains("FirstName"), "{err}");
}

tests!(
    column_override_reaches_database,
    scalar_types_round_trip,
    raw_identifier_maps_to_plain_column,
    column_lookup_ignores_case,
    key_column_matching_ignores_case,
    value_of_wrong_type_fails_to_load,
    null_into_required_field_fails_to_load,
    missing_column_fails_to_load,
);
