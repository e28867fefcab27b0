use spindle::{Mutation, Record, Row, Value};
use tests::{assert_err, tests, DbTest};

fn singer(id: i64, last_name: &str) -> Mutation {
    Mutation::insert(
        "Singers",
        vec!["SingerId".to_string(), "LastName".to_string()],
        vec![Value::from(id), Value::from(last_name)],
    )
    .unwrap()
}

async fn singer_ids(db: &spindle::Db) -> Vec<i64> {
    let rows: Vec<Row> = db
        .find("SELECT SingerId FROM Singers ORDER BY SingerId", 100)
        .await
        .unwrap();

    rows.into_iter()
        .map(|mut row| row.take("SingerId").unwrap().to_i64().unwrap())
        .collect()
}

async fn apply_writes_all_mutations(test: &mut DbTest) {
    let db = test.setup_db().await;

    db.apply(vec![
        singer(1, "Richards"),
        singer(2, "Smith"),
        Mutation::insert(
            "Albums",
            vec![
                "SingerId".to_string(),
                "AlbumId".to_string(),
                "Title".to_string(),
            ],
            vec![Value::from(1), Value::from(1), Value::from("Total Junk")],
        )
        .unwrap(),
    ])
    .await
    .unwrap();

    // One apply for all three mutations.
    assert_eq!(test.log().count(|op| op.is_apply()), 1);
    assert_eq!(singer_ids(&db).await, [1, 2]);
}

async fn apply_is_atomic(test: &mut DbTest) {
    let db = test.setup_db().await;

    db.apply(vec![singer(1, "Richards")]).await.unwrap();

    // The second mutation collides with the existing key.
    let err = assert_err!(
        db.apply(vec![singer(2, "Smith"), singer(1, "Again"), singer(3, "Jones")])
            .await
    );
    assert!(err.is_client_error());

    assert_eq!(singer_ids(&db).await, [1]);
}

async fn apply_mixes_operations(test: &mut DbTest) {
    let db = test.setup_db().await;

    db.apply(vec![singer(1, "Richards"), singer(2, "Smith")])
        .await
        .unwrap();

    db.apply(vec![
        Mutation::delete("Singers", 1),
        Mutation::insert_or_update(
            "Singers",
            vec!["SingerId".to_string(), "LastName".to_string()],
            vec![Value::from(2), Value::from("Smythe")],
        )
        .unwrap(),
        singer(3, "Jones"),
    ])
    .await
    .unwrap();

    assert_eq!(singer_ids(&db).await, [2, 3]);

    let row: Row = db
        .find_one("SELECT LastName FROM Singers WHERE SingerId = 2")
        .await
        .unwrap();
    assert_eq!(row.get("LastName"), Some(&Value::from("Smythe")));
}

async fn apply_nothing_skips_backend(test: &mut DbTest) {
    let db = test.setup_db().await;

    db.apply(vec![]).await.unwrap();
    assert!(test.log().is_empty());
}

/// A record whose values disagree with its columns.
struct Misaligned;

impl Record for Misaligned {
    fn columns(&self) -> spindle::Result<Vec<String>> {
        Ok(vec!["SingerId".to_string(), "LastName".to_string()])
    }

    fn values(&self, _columns: &[String]) -> spindle::Result<Vec<Value>> {
        Ok(vec![Value::from(1)])
    }
}

async fn misaligned_record_is_rejected(test: &mut DbTest) {
    let db = test.setup_db().await;

    let err = assert_err!(db.insert("Singers", Misaligned).await);
    assert!(err.is_invalid_struct());
    assert_eq!(
        err.to_string(),
        "invalid struct: write to `Singers` has 2 columns but 1 values"
    );

    // Nothing reaches the backend.
    assert!(test.log().is_empty());
    assert!(singer_ids(&db).await.is_empty());
}

tests!(
    apply_writes_all_mutations,
    apply_is_atomic,
    apply_mixes_operations,
    apply_nothing_skips_backend,
    misaligned_record_is_rejected,
);
