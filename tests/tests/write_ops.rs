use spindle::{mutation::Op, Row, Statement, Value};
use tests::{assert_err, assert_ok, tests, DbTest};

#[derive(Debug, Clone, PartialEq, spindle::Model)]
struct Singer {
    #[column("SingerId")]
    id: i64,

    #[column("FirstName")]
    first_name: Option<String>,

    #[column("LastName")]
    last_name: String,
}

fn by_id(id: i64) -> Statement {
    Statement::new("SELECT * FROM Singers WHERE SingerId = @id").bind("id", id)
}

async fn insert_or_update_creates_then_overwrites(test: &mut DbTest) {
    let db = test.setup_db().await;

    let mut singer = Singer {
        id: 1,
        first_name: Some("Marc".to_string()),
        last_name: "Richards".to_string(),
    };

    assert_ok!(db.insert_or_update("Singers", &singer).await);
    assert_eq!(db.find_one::<Singer>(by_id(1)).await.unwrap(), singer);

    singer.first_name = None;
    singer.last_name = "Richardson".to_string();

    assert_ok!(db.insert_or_update("Singers", &singer).await);
    assert_eq!(db.find_one::<Singer>(by_id(1)).await.unwrap(), singer);

    let all: Vec<Singer> = db.find("SELECT * FROM Singers", 10).await.unwrap();
    assert_eq!(all.len(), 1);

    let mut log = test.log();
    let mutation = log.pop_mutations().remove(0);
    assert_eq!(mutation.op, Op::InsertOrUpdate);
}

async fn update_columns_writes_only_listed_columns(test: &mut DbTest) {
    let db = test.setup_db().await;

    let mut singer = Singer {
        id: 2,
        first_name: Some("Catalina".to_string()),
        last_name: "Smith".to_string(),
    };
    db.insert("Singers", &singer).await.unwrap();

    singer.first_name = Some("Ignored".to_string());
    singer.last_name = "Jones".to_string();

    let mut log = test.log();
    log.clear();

    db.update_columns("Singers", &singer, &["SingerId", "LastName"])
        .await
        .unwrap();

    let mutation = log.pop_mutations().remove(0);
    assert_eq!(mutation.op, Op::Update);
    assert_eq!(mutation.columns, ["SingerId", "LastName"]);
    assert_eq!(mutation.values, [Value::I64(2), Value::from("Jones")]);

    let found: Singer = db.find_one(by_id(2)).await.unwrap();
    assert_eq!(found.first_name.as_deref(), Some("Catalina"));
    assert_eq!(found.last_name, "Jones");
}

async fn update_columns_without_key_fails(test: &mut DbTest) {
    let db = test.setup_db().await;

    let singer = Singer {
        id: 3,
        first_name: None,
        last_name: "Keyless".to_string(),
    };
    db.insert("Singers", &singer).await.unwrap();

    let err = assert_err!(db.update_columns("Singers", &singer, &["LastName"]).await);
    assert!(err.is_invalid_struct());
}

async fn unknown_column_rejected_before_backend(test: &mut DbTest) {
    let db = test.setup_db().await;

    let singer = Singer {
        id: 4,
        first_name: None,
        last_name: "Nobody".to_string(),
    };

    let err = assert_err!(
        db.update_columns("Singers", &singer, &["SingerId", "MiddleName"])
            .await
    );
    assert!(err.is_invalid_struct());
    assert!(err.to_string().contains("MiddleName"), "{err}");
    assert!(test.log().is_empty());
}

async fn non_aggregate_record_rejected_before_backend(test: &mut DbTest) {
    let db = test.setup_db().await;

    for record in [
        serde_json::json!(42),
        serde_json::json!("Singers"),
        serde_json::json!([1, 2, 3]),
        serde_json::json!(null),
    ] {
        let err = assert_err!(db.insert("Singers", &record).await, "record={record}");
        assert!(err.is_invalid_struct(), "{err}");
        assert!(!err.is_client_error());
    }

    assert!(test.log().is_empty());
}

async fn empty_record_rejected_before_backend(test: &mut DbTest) {
    let db = test.setup_db().await;

    let err = assert_err!(db.insert("Singers", Row::from_pairs(Vec::<(String, Value)>::new())).await);
    assert!(err.is_invalid_struct());

    let err = assert_err!(db.insert_or_update("Singers", serde_json::json!({})).await);
    assert!(err.is_invalid_struct());

    assert!(test.log().is_empty());
}

async fn write_to_missing_table_fails(test: &mut DbTest) {
    let db = test.setup_db().await;

    let singer = Singer {
        id: 5,
        first_name: None,
        last_name: "Lost".to_string(),
    };

    let err = assert_err!(db.insert("Performers", &singer).await);
    assert!(err.is_client_error());
}

tests!(
    insert_or_update_creates_then_overwrites,
    update_columns_writes_only_listed_columns,
    update_columns_without_key_fails,
    unknown_column_rejected_before_backend,
    non_aggregate_record_rejected_before_backend,
    empty_record_rejected_before_backend,
    write_to_missing_table_fails,
);
