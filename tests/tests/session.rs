use spindle::{Config, Db, Row};
use spindle_driver_sqlite::{Sqlite, BUSY_TIMEOUT_OPTION};
use tests::{assert_err, assert_ok, db::sqlite::SCHEMA, tests, DbTest};

#[derive(Debug, Clone, PartialEq, spindle::Model)]
struct Singer {
    #[column("SingerId")]
    id: i64,

    #[column("FirstName")]
    first_name: Option<String>,

    #[column("LastName")]
    last_name: String,
}

async fn database_path_from_builder(test: &mut DbTest) {
    let mut builder = test.builder();
    builder
        .project("my-project")
        .instance("my-instance")
        .database("my-db");

    let db = test.try_setup_db(builder).await.unwrap();

    assert_eq!(
        db.database_path(),
        "projects/my-project/instances/my-instance/databases/my-db"
    );
    assert_eq!(db.config().project, "my-project");
}

async fn missing_identifier_rejected(test: &mut DbTest) {
    let mut builder = test.builder();
    builder.database("");

    let err = assert_err!(test.try_setup_db(builder).await);
    assert!(err.is_invalid_config());
    assert!(!err.is_client_error());
}

async fn identifier_with_slash_rejected(test: &mut DbTest) {
    let mut builder = test.builder();
    builder.instance("a/b");

    let err = assert_err!(test.try_setup_db(builder).await);
    assert!(err.is_invalid_config());
}

async fn whole_config_replaced(test: &mut DbTest) {
    let mut builder = test.builder();
    builder.config(Config::new("p", "i", "d").with_option("application", "tests"));

    let db = test.try_setup_db(builder).await.unwrap();
    assert_eq!(db.database_path(), "projects/p/instances/i/databases/d");
    assert_eq!(db.config().option("application"), Some("tests"));
}

async fn driver_option_reaches_backend(test: &mut DbTest) {
    let mut builder = test.builder();
    builder.option(BUSY_TIMEOUT_OPTION, "soon");

    let err = assert_err!(test.try_setup_db(builder).await);
    assert!(err.is_invalid_config());

    let mut builder = test.builder();
    builder.option(BUSY_TIMEOUT_OPTION, "250");
    assert_ok!(test.try_setup_db(builder).await);
}

async fn clones_share_the_session(test: &mut DbTest) {
    let db = test.setup_db().await;
    let other = db.clone();

    let singer = Singer {
        id: 1,
        first_name: None,
        last_name: "Shared".to_string(),
    };
    other.insert("Singers", &singer).await.unwrap();

    let found: Singer = db
        .find_one("SELECT * FROM Singers WHERE SingerId = 1")
        .await
        .unwrap();
    assert_eq!(found, singer);
}

async fn operations_after_close_fail(test: &mut DbTest) {
    let db = test.setup_db().await;
    let other = db.clone();

    db.close().await.unwrap();

    let err = assert_err!(other.find::<Row>("SELECT 1", 1).await);
    assert!(err.is_client_error());

    let err = assert_err!(db.delete("Singers", 1).await);
    assert!(err.is_client_error());

    // Closing twice is fine.
    assert_ok!(db.close().await);
}

async fn connect_by_url(_test: &mut DbTest) {
    let mut builder = Db::builder();
    builder.project("p").instance("i").database("d");

    let db = builder.connect("sqlite::memory:").await.unwrap();
    let row: Row = db.find_one("SELECT 1 AS one").await.unwrap();
    assert_eq!(row.get("one"), Some(&spindle::Value::I64(1)));
}

async fn connect_by_url_checks_config_first(_test: &mut DbTest) {
    let err = assert_err!(Db::builder().connect("sqlite::memory:").await);
    assert!(err.is_invalid_config());
}

async fn connect_unsupported_url(_test: &mut DbTest) {
    let mut builder = Db::builder();
    builder.project("p").instance("i").database("d");

    let err = assert_err!(builder.connect("postgresql://localhost/db").await);
    assert!(err.is_invalid_config());

    let err = assert_err!(builder.connect("not a url").await);
    assert!(err.is_invalid_config());
}

async fn connect_failure_propagated(_test: &mut DbTest) {
    let dir = std::env::temp_dir().join(format!("spindle-missing-{}", uuid::Uuid::new_v4()));
    let driver = Sqlite::open(dir.join("nested").join("db.sqlite")).with_init_sql(SCHEMA);

    let mut builder = Db::builder();
    builder.project("p").instance("i").database("d");

    let err = assert_err!(builder.build(driver).await);
    assert!(err.is_client_error());
}

tests!(
    database_path_from_builder,
    missing_identifier_rejected,
    identifier_with_slash_rejected,
    whole_config_replaced,
    driver_option_reaches_backend,
    clones_share_the_session,
    operations_after_close_fail,
    connect_by_url,
    connect_by_url_checks_config_first,
    connect_unsupported_url,
    connect_failure_propagated,
);
